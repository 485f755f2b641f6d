//! Seeded coordinate fixtures for differential tests and profiling.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::real::Real;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `3 * n_triples` values drawn uniformly from `[lo, hi)`.
///
/// Values are drawn in double precision and then cast, so `f32` and `f64` fixtures
/// from the same seed describe the same points.
pub fn uniform_coords<T: Real, R: Rng + ?Sized>(
    rng: &mut R,
    n_triples: usize,
    lo: f64,
    hi: f64,
) -> Vec<T> {
    let dist = Uniform::new(lo, hi);
    (0..3 * n_triples)
        .map(|_| T::from_f64(dist.sample(rng)))
        .collect()
}

/// Points in a cubic cell of edge `box_length`, overhanging each side by `delta`.
///
/// `delta == 0` keeps every point inside the primary cell.
pub fn box_coords<T: Real, R: Rng + ?Sized>(
    rng: &mut R,
    n_triples: usize,
    box_length: f64,
    delta: f64,
) -> Vec<T> {
    uniform_coords(rng, n_triples, -delta, box_length + delta)
}

/// `0, 1, ..., n - 1`.
pub fn sequential_indices(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// `n` indices drawn uniformly from `[0, n_triples)`.
pub fn random_indices<R: Rng + ?Sized>(rng: &mut R, n: usize, n_triples: usize) -> Vec<usize> {
    (0..n).map(|_| rng.gen_range(0..n_triples)).collect()
}
