//! Uniform sampling primitives built on [`RandomSource`].

use super::RandomSource;

/// Fisher–Yates shuffle, in place.
///
/// Yields a uniformly random permutation given an unbiased `uniform`.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.uniform(i + 1);
        items.swap(i, j);
    }
}

/// Uniformly chosen element of a non-empty pool.
pub fn choose<R: RandomSource + ?Sized>(rng: &mut R, pool: &[u8]) -> u8 {
    pool[rng.uniform(pool.len())]
}
