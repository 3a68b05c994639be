//! The outcome of one solve call.

use crate::catalog::{Catalog, Item};

/// An optimal selection of catalog items.
///
/// Indices are kept in ascending catalog order and the totals are summed in
/// that same order, so two solutions built from the same selection are
/// bit-identical.
///
/// # Example
///
/// ```
/// use knapforge_core::{Catalog, Solution};
///
/// let catalog = Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]).unwrap();
/// let solution = Solution::from_selection(&catalog, vec![3, 1]);
///
/// assert_eq!(solution.selected_items(), &[1, 3]);
/// assert_eq!(solution.total_value(), 90.0);
/// assert_eq!(solution.total_weight(), 7.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    selected_items: Vec<usize>,
    total_value: f64,
    total_weight: f64,
}

impl Solution {
    /// The solution selecting nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a solution from catalog indices, computing its totals.
    ///
    /// Indices are sorted and deduplicated.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for `catalog`.
    pub fn from_selection(catalog: &Catalog, mut selected_items: Vec<usize>) -> Self {
        selected_items.sort_unstable();
        selected_items.dedup();

        let mut total_value = 0.0;
        let mut total_weight = 0.0;
        for &index in &selected_items {
            let item = &catalog[index];
            total_value += item.value();
            total_weight += item.weight();
        }

        Self {
            selected_items,
            total_value,
            total_weight,
        }
    }

    /// Catalog indices of the selected items, ascending.
    #[inline]
    pub fn selected_items(&self) -> &[usize] {
        &self.selected_items
    }

    /// Sum of the values of the selected items.
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Sum of the weights of the selected items.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selected_items.len()
    }

    /// Returns whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.selected_items.is_empty()
    }

    /// Returns whether the item at `index` was selected.
    pub fn contains(&self, index: usize) -> bool {
        self.selected_items.binary_search(&index).is_ok()
    }

    /// Iterates over the selected items of `catalog`.
    pub fn items<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Item> + 'a {
        self.selected_items.iter().map(move |&index| &catalog[index])
    }

    /// Consumes the solution, returning the selected indices.
    pub fn into_selected_items(self) -> Vec<usize> {
        self.selected_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_solution() {
        let solution = Solution::empty();
        assert!(solution.is_empty());
        assert_eq!(solution.total_value(), 0.0);
        assert_eq!(solution.total_weight(), 0.0);
        assert_eq!(solution, Solution::from_selection(&Catalog::empty(), vec![]));
    }

    #[test]
    fn test_from_selection_sorts_and_dedups() {
        let catalog = Catalog::new([(1, 10), (2, 20), (3, 30)]).unwrap();
        let solution = Solution::from_selection(&catalog, vec![2, 0, 2]);
        assert_eq!(solution.selected_items(), &[0, 2]);
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.total_value(), 40.0);
        assert_eq!(solution.total_weight(), 4.0);
        assert!(solution.contains(2));
        assert!(!solution.contains(1));
    }

    #[test]
    fn test_items_iterates_selected() {
        let catalog = Catalog::new([(1, 10), (2, 20), (3, 30)]).unwrap();
        let solution = Solution::from_selection(&catalog, vec![1]);
        let values: Vec<f64> = solution.items(&catalog).map(Item::value).collect();
        assert_eq!(values, vec![20.0]);
        assert_eq!(solution.into_selected_items(), vec![1]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_selection_panics() {
        let catalog = Catalog::new([(1, 1)]).unwrap();
        let _ = Solution::from_selection(&catalog, vec![5]);
    }
}
