//! Item catalog: the validated, immutable input of a knapsack problem.

use std::fmt;
use std::ops::Index;

use num_traits::ToPrimitive;

use crate::error::{ItemField, KnapsackError, Result};

/// One candidate object with a weight and a value.
///
/// Items only exist inside a [`Catalog`], which guarantees both fields are
/// non-negative and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    weight: f64,
    value: f64,
}

impl Item {
    /// Returns the weight of this item.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the value of this item.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns value per unit of weight, infinite for weightless items.
    pub fn density(&self) -> f64 {
        if self.weight == 0.0 {
            f64::INFINITY
        } else {
            self.value / self.weight
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item(weight={}, value={})", self.weight, self.value)
    }
}

/// An ordered, index-addressable, immutable sequence of items.
///
/// A catalog may be shared across any number of solve calls, including
/// concurrent ones; no solve call mutates it.
///
/// # Example
///
/// ```
/// use knapforge_core::Catalog;
///
/// let catalog = Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]).unwrap();
/// assert_eq!(catalog.len(), 4);
/// assert_eq!(catalog[1].value(), 40.0);
///
/// let err = Catalog::new([(1, 1), (-1, 5)]).unwrap_err();
/// assert!(err.to_string().contains("index 1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Item>", into = "Vec<Item>"))]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from `(weight, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::InvalidItem`] for the first item whose weight
    /// or value is negative, not finite, or not representable as `f64`.
    pub fn new<I, W, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, V)>,
        W: ToPrimitive,
        V: ToPrimitive,
    {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, (weight, value))| {
                Ok(Item {
                    weight: check_quantity(index, ItemField::Weight, weight.to_f64())?,
                    value: check_quantity(index, ItemField::Value, value.to_f64())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }

    /// Creates a catalog with no items.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the catalog holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterates over items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Returns the items as a slice.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Iterates over item weights in catalog order.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(Item::weight)
    }

    /// Iterates over item values in catalog order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(Item::value)
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        self.weights().sum()
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> f64 {
        self.values().sum()
    }
}

fn check_quantity(index: usize, field: ItemField, quantity: Option<f64>) -> Result<f64> {
    match quantity {
        Some(q) if q.is_finite() && q >= 0.0 => Ok(q),
        other => Err(KnapsackError::InvalidItem {
            index,
            field,
            value: other.unwrap_or(f64::NAN),
        }),
    }
}

impl Index<usize> for Catalog {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl TryFrom<Vec<Item>> for Catalog {
    type Error = KnapsackError;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        Catalog::new(items.into_iter().map(|item| (item.weight, item.value)))
    }
}

impl From<Catalog> for Vec<Item> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}
