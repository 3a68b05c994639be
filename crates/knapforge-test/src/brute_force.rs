//! Exhaustive oracle over all `2^n` subsets.

use knapforge_core::{Catalog, Solution};

/// Largest catalog the oracle accepts.
pub const MAX_BRUTE_FORCE_ITEMS: usize = 20;

/// Maximum value of any subset whose weight fits `capacity`.
///
/// # Panics
///
/// Panics if the catalog has more than [`MAX_BRUTE_FORCE_ITEMS`] items.
pub fn brute_force_best_value(catalog: &Catalog, capacity: f64) -> f64 {
    assert!(
        catalog.len() <= MAX_BRUTE_FORCE_ITEMS,
        "brute force is limited to {} items",
        MAX_BRUTE_FORCE_ITEMS
    );

    let mut best = 0.0;
    for mask in 0u32..(1u32 << catalog.len()) {
        let mut weight = 0.0;
        let mut value = 0.0;
        for (index, item) in catalog.iter().enumerate() {
            if mask & (1 << index) != 0 {
                weight += item.weight();
                value += item.value();
            }
        }
        if weight <= capacity && value > best {
            best = value;
        }
    }
    best
}

/// Asserts `solution` is a well-formed feasible selection of `catalog`.
pub fn assert_feasible(catalog: &Catalog, capacity: f64, solution: &Solution) {
    let selected = solution.selected_items();
    assert!(
        selected.windows(2).all(|w| w[0] < w[1]),
        "selection {:?} is not strictly ascending",
        selected
    );
    assert!(selected.iter().all(|&i| i < catalog.len()));

    let weight: f64 = solution.items(catalog).map(|item| item.weight()).sum();
    let value: f64 = solution.items(catalog).map(|item| item.value()).sum();
    assert_eq!(solution.total_weight(), weight);
    assert_eq!(solution.total_value(), value);
    assert!(
        solution.total_weight() <= capacity,
        "total weight {} exceeds capacity {}",
        solution.total_weight(),
        capacity
    );
}
