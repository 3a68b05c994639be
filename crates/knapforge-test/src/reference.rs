//! The reference instance: four items, capacity 10, optimum `{1, 3}` worth 90.

use knapforge_core::Catalog;

/// Capacity of the reference instance.
pub const REFERENCE_CAPACITY: u32 = 10;

/// `[(5, 10), (4, 40), (6, 30), (3, 50)]` as `(weight, value)`.
pub fn reference_catalog() -> Catalog {
    Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]).expect("reference catalog is valid")
}
