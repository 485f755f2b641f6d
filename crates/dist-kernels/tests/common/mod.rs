#![allow(dead_code)]

use dist_core::fixtures::{box_coords, seeded_rng, sequential_indices};
use dist_core::{OrthoBox, Real};

pub const BOX_SIZE: f64 = 10.0;
// divisible by 2, 3 and 4 so every arity consumes whole groups
pub const N_RESULTS: usize = 2400;
pub const N_INDICES: usize = 240;
pub const WRAP_TOL: f64 = 1.0e-3;

pub struct Coordinates<T: Real> {
    pub n_results: usize,
    pub coords0: Vec<T>,
    pub coords1: Vec<T>,
    pub coords2: Vec<T>,
    pub coords3: Vec<T>,
    pub cell: OrthoBox<T>,
    pub idx: Vec<usize>,
}

impl<T: Real> Coordinates<T> {
    /// Points in `[-delta, BOX_SIZE + delta)`.
    pub fn new(seed: u64, n_results: usize, delta: f64) -> Self {
        let mut rng = seeded_rng(seed);
        Self {
            n_results,
            coords0: box_coords(&mut rng, n_results, BOX_SIZE, delta),
            coords1: box_coords(&mut rng, n_results, BOX_SIZE, delta),
            coords2: box_coords(&mut rng, n_results, BOX_SIZE, delta),
            coords3: box_coords(&mut rng, n_results, BOX_SIZE, delta),
            cell: OrthoBox::cubic(T::from_f64(BOX_SIZE)).expect("valid box"),
            idx: sequential_indices(N_INDICES),
        }
    }

    pub fn in_box(seed: u64) -> Self {
        Self::new(seed, N_RESULTS, 0.0)
    }

    /// Up to three box lengths outside the primary cell on every side.
    pub fn out_box(seed: u64) -> Self {
        Self::new(seed, N_RESULTS, 3.0 * BOX_SIZE)
    }

    pub fn results(&self) -> Vec<T> {
        vec![T::ZERO; self.n_results]
    }
}

/// Equal to within four units in the last place, like gtest's `EXPECT_FLOAT_EQ`.
pub fn float_eq<T: Real>(a: T, b: T) -> bool {
    if a == b {
        return true;
    }
    let scale = if a.abs() > b.abs() { a.abs() } else { b.abs() };
    (a - b).abs() <= T::from_f64(4.0) * T::EPSILON * scale
}

pub fn assert_all_float_eq<T: Real>(got: &[T], want: &[T]) {
    assert_eq!(got.len(), want.len());
    for (i, (&g, &w)) in got.iter().zip(want).enumerate() {
        assert!(float_eq(g, w), "item {i}: got {g}, want {w}");
    }
}

pub fn assert_all_near<T: Real>(got: &[T], want: &[T], tol: f64) {
    assert_eq!(got.len(), want.len());
    for (i, (&g, &w)) in got.iter().zip(want).enumerate() {
        let diff = (g.to_f64() - w.to_f64()).abs();
        assert!(diff <= tol, "item {i}: got {g}, want {w}, diff {diff}");
    }
}

/// In-cell fixtures (`delta_boxes == 0`) must agree to 4 ulp, wrapped ones to `WRAP_TOL`.
pub fn assert_paths_agree<T: Real>(got: &[T], want: &[T], delta_boxes: f64) {
    if delta_boxes == 0.0 {
        assert_all_float_eq(got, want);
    } else {
        assert_all_near(got, want, WRAP_TOL);
    }
}

/// Largest `f32` strictly below `l / 2`.
pub fn just_under_half(l: f32) -> f32 {
    f32::from_bits((0.5 * l).to_bits() - 1)
}

/// Shift every triple by whole box lengths, a different multiple per axis.
pub fn translate_by_box<T: Real>(coords: &[T], cell: &OrthoBox<T>, shift: [i32; 3]) -> Vec<T> {
    let l = cell.lengths();
    coords
        .iter()
        .enumerate()
        .map(|(k, &v)| v + l[k % 3] * T::from_f64(shift[k % 3] as f64))
        .collect()
}
