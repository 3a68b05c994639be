//! Seeded catalog generators.
//!
//! Every generator is a pure function of its seed, so failing cases can be
//! replayed.

use knapforge_core::Catalog;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` items with integer weights in `0..=max_weight` and integer values in
/// `0..=max_value`.
pub fn random_integer_catalog(seed: u64, n: usize, max_weight: u32, max_value: u32) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let items: Vec<(u32, u32)> = (0..n)
        .map(|_| {
            (
                rng.random_range(0..=max_weight),
                rng.random_range(0..=max_value),
            )
        })
        .collect();
    Catalog::new(items).expect("generated quantities are non-negative")
}

/// `n` items whose weights and values are multiples of `1/4`, so every sum
/// the tests compare is exact in `f64`.
pub fn random_dyadic_catalog(seed: u64, n: usize, max_quarters: u32) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let items: Vec<(f64, f64)> = (0..n)
        .map(|_| {
            (
                rng.random_range(1..=max_quarters) as f64 / 4.0,
                rng.random_range(0..=max_quarters) as f64 / 4.0,
            )
        })
        .collect();
    Catalog::new(items).expect("generated quantities are non-negative")
}

/// `n` items whose weights and values are multiples of `1/10`.
///
/// Tenths have no exact `f64` form, so sums depend on summation order.
pub fn random_decimal_catalog(seed: u64, n: usize, max_tenths: u32) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let items: Vec<(f64, f64)> = (0..n)
        .map(|_| {
            (
                rng.random_range(1..=max_tenths) as f64 / 10.0,
                rng.random_range(0..=max_tenths) as f64 / 10.0,
            )
        })
        .collect();
    Catalog::new(items).expect("generated quantities are non-negative")
}
