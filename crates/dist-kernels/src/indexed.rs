//! Index-driven adapters over the direct kernels.
//!
//! Each adapter reads `idx` in groups of its arity (2 bonds, 3 angles, 4 dihedrals),
//! gathers the referenced triples of `coords` into a stack block of [`GATHER_BLOCK`]
//! groups and hands the block to the direct kernel of `K`. One result per group, in
//! group order. Indices are not range-checked here; see [`crate::checked`] for the
//! validating entry points.

use dist_core::{OrthoBox, Real};

use crate::kernels::Kernels;
use crate::lanes::LANES;

/// Groups gathered per direct-kernel call.
pub const GATHER_BLOCK: usize = 16 * LANES;

#[inline(always)]
fn gather<T, const A: usize, F>(coords: &[T], idx: &[usize], out: &mut [T], mut dispatch: F)
where
    T: Real,
    F: FnMut([&[T]; A], &mut [T]),
{
    debug_assert_eq!(idx.len(), A * out.len());
    let mut scratch = [[T::ZERO; 3 * GATHER_BLOCK]; A];
    for (groups, dst) in idx.chunks(A * GATHER_BLOCK).zip(out.chunks_mut(GATHER_BLOCK)) {
        for (g, group) in groups.chunks_exact(A).enumerate() {
            for (slot, &atom) in group.iter().enumerate() {
                scratch[slot][3 * g..3 * g + 3].copy_from_slice(&coords[3 * atom..3 * atom + 3]);
            }
        }
        let m = dst.len();
        let views: [&[T]; A] = std::array::from_fn(|slot| &scratch[slot][..3 * m]);
        dispatch(views, dst);
    }
}

pub fn bonds_idx<K: Kernels, T: Real>(coords: &[T], idx: &[usize], out: &mut [T]) {
    gather::<T, 2, _>(coords, idx, out, |[a, b], dst| K::bonds(a, b, dst));
}

pub fn bonds_idx_ortho<K: Kernels, T: Real>(
    coords: &[T],
    idx: &[usize],
    box_: &OrthoBox<T>,
    out: &mut [T],
) {
    gather::<T, 2, _>(coords, idx, out, |[a, b], dst| K::bonds_ortho(a, b, box_, dst));
}

pub fn angles_idx<K: Kernels, T: Real>(coords: &[T], idx: &[usize], out: &mut [T]) {
    gather::<T, 3, _>(coords, idx, out, |[a, b, c], dst| K::angles(a, b, c, dst));
}

pub fn angles_idx_ortho<K: Kernels, T: Real>(
    coords: &[T],
    idx: &[usize],
    box_: &OrthoBox<T>,
    out: &mut [T],
) {
    gather::<T, 3, _>(coords, idx, out, |[a, b, c], dst| {
        K::angles_ortho(a, b, c, box_, dst)
    });
}

pub fn dihedrals_idx<K: Kernels, T: Real>(coords: &[T], idx: &[usize], out: &mut [T]) {
    gather::<T, 4, _>(coords, idx, out, |[a, b, c, d], dst| {
        K::dihedrals(a, b, c, d, dst)
    });
}

pub fn dihedrals_idx_ortho<K: Kernels, T: Real>(
    coords: &[T],
    idx: &[usize],
    box_: &OrthoBox<T>,
    out: &mut [T],
) {
    gather::<T, 4, _>(coords, idx, out, |[a, b, c, d], dst| {
        K::dihedrals_ortho(a, b, c, d, box_, dst)
    });
}
