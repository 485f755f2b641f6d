//! Batched kernels.
//!
//! Inputs are processed as full blocks of [`LANES`] elements in structure-of-arrays
//! form, then the remaining `n % LANES` elements go through a scalar tail that performs
//! the same per-element arithmetic as a lane. The output does not depend on where an
//! element falls relative to a block boundary.
//!
//! Box wrapping divides by the edge length exactly as [`OrthoBox::delta`] does, so
//! results are bit-identical to [`crate::vanilla`] for in-cell and wrapped inputs.

use dist_core::{angle_from_vectors, bond_length, dihedral_from_vectors, OrthoBox, Real, Vec3};

use crate::lanes::{self, LaneVec3, Lanes, LANES};

/// Runs `lane` over every full block of `K` parallel coordinate buffers and `scalar`
/// over the remainder.
#[inline(always)]
fn drive<T, const K: usize, L, S>(inputs: [&[T]; K], out: &mut [T], lane: L, scalar: S)
where
    T: Real,
    L: Fn([LaneVec3<T>; K]) -> Lanes<T>,
    S: Fn([Vec3<T>; K]) -> T,
{
    let n = out.len();
    debug_assert!(inputs.iter().all(|c| c.len() >= 3 * n));
    let full = n - n % LANES;
    let (head, tail) = out.split_at_mut(full);
    for (block, dst) in head.chunks_exact_mut(LANES).enumerate() {
        let start = 3 * LANES * block;
        let v = std::array::from_fn(|k| LaneVec3::load(&inputs[k][start..start + 3 * LANES]));
        dst.copy_from_slice(&lane(v));
    }
    for (offset, dst) in tail.iter_mut().enumerate() {
        let i = full + offset;
        *dst = scalar(std::array::from_fn(|k| Vec3::load(inputs[k], i)));
    }
}

/// One distance-matrix row: `p` against every triple of `conf`.
#[inline(always)]
fn drive_row<T, L, S>(p: Vec3<T>, conf: &[T], out: &mut [T], lane: L, scalar: S)
where
    T: Real,
    L: Fn(LaneVec3<T>, LaneVec3<T>) -> Lanes<T>,
    S: Fn(Vec3<T>, Vec3<T>) -> T,
{
    let n = out.len();
    let full = n - n % LANES;
    let pv = LaneVec3::splat(p);
    let (head, tail) = out.split_at_mut(full);
    for (block, dst) in head.chunks_exact_mut(LANES).enumerate() {
        let start = 3 * LANES * block;
        dst.copy_from_slice(&lane(pv, LaneVec3::load(&conf[start..start + 3 * LANES])));
    }
    for (offset, dst) in tail.iter_mut().enumerate() {
        *dst = scalar(p, Vec3::load(conf, full + offset));
    }
}

pub fn calc_bonds<T: Real>(coords0: &[T], coords1: &[T], out: &mut [T]) {
    drive(
        [coords0, coords1],
        out,
        |[a, b]| a.sub(b).norm(),
        |[a, b]| bond_length(a.sub(b)),
    );
}

pub fn calc_bonds_ortho<T: Real>(coords0: &[T], coords1: &[T], box_: &OrthoBox<T>, out: &mut [T]) {
    drive(
        [coords0, coords1],
        out,
        |[a, b]| a.sub(b).min_image(box_).norm(),
        |[a, b]| bond_length(box_.delta(a, b)),
    );
}

pub fn calc_angles<T: Real>(coords0: &[T], coords1: &[T], coords2: &[T], out: &mut [T]) {
    drive(
        [coords0, coords1, coords2],
        out,
        |[a, b, c]| lanes::angles(a.sub(b), c.sub(b)),
        |[a, b, c]| angle_from_vectors(a.sub(b), c.sub(b)),
    );
}

pub fn calc_angles_ortho<T: Real>(
    coords0: &[T],
    coords1: &[T],
    coords2: &[T],
    box_: &OrthoBox<T>,
    out: &mut [T],
) {
    drive(
        [coords0, coords1, coords2],
        out,
        |[a, b, c]| lanes::angles(a.sub(b).min_image(box_), c.sub(b).min_image(box_)),
        |[a, b, c]| angle_from_vectors(box_.delta(a, b), box_.delta(c, b)),
    );
}

pub fn calc_dihedrals<T: Real>(
    coords0: &[T],
    coords1: &[T],
    coords2: &[T],
    coords3: &[T],
    out: &mut [T],
) {
    drive(
        [coords0, coords1, coords2, coords3],
        out,
        |[a, b, c, d]| lanes::dihedrals(a.sub(b), c.sub(b), d.sub(c)),
        |[a, b, c, d]| dihedral_from_vectors(a.sub(b), c.sub(b), d.sub(c)),
    );
}

pub fn calc_dihedrals_ortho<T: Real>(
    coords0: &[T],
    coords1: &[T],
    coords2: &[T],
    coords3: &[T],
    box_: &OrthoBox<T>,
    out: &mut [T],
) {
    drive(
        [coords0, coords1, coords2, coords3],
        out,
        |[a, b, c, d]| {
            lanes::dihedrals(
                a.sub(b).min_image(box_),
                c.sub(b).min_image(box_),
                d.sub(c).min_image(box_),
            )
        },
        |[a, b, c, d]| {
            dihedral_from_vectors(
                box_.delta(a, b),
                box_.delta(c, b),
                box_.delta(d, c),
            )
        },
    );
}

pub fn calc_distance_array<T: Real>(reference: &[T], conf: &[T], out: &mut [T]) {
    let n_conf = conf.len() / 3;
    debug_assert_eq!(out.len(), reference.len() / 3 * n_conf);
    if n_conf == 0 {
        return;
    }
    for (i, row) in out.chunks_exact_mut(n_conf).enumerate() {
        drive_row(
            Vec3::load(reference, i),
            conf,
            row,
            |a, b| a.sub(b).norm(),
            |a, b| bond_length(a.sub(b)),
        );
    }
}

pub fn calc_distance_array_ortho<T: Real>(
    reference: &[T],
    conf: &[T],
    box_: &OrthoBox<T>,
    out: &mut [T],
) {
    let n_conf = conf.len() / 3;
    debug_assert_eq!(out.len(), reference.len() / 3 * n_conf);
    if n_conf == 0 {
        return;
    }
    for (i, row) in out.chunks_exact_mut(n_conf).enumerate() {
        drive_row(
            Vec3::load(reference, i),
            conf,
            row,
            |a, b| a.sub(b).min_image(box_).norm(),
            |a, b| bond_length(box_.delta(a, b)),
        );
    }
}

pub fn calc_self_distance_array<T: Real>(reference: &[T], out: &mut [T]) {
    let n = reference.len() / 3;
    debug_assert_eq!(out.len(), n * n.saturating_sub(1) / 2);
    let mut pos = 0;
    for i in 0..n.saturating_sub(1) {
        let len = n - i - 1;
        drive_row(
            Vec3::load(reference, i),
            &reference[3 * (i + 1)..],
            &mut out[pos..pos + len],
            |a, b| a.sub(b).norm(),
            |a, b| bond_length(a.sub(b)),
        );
        pos += len;
    }
}

pub fn calc_self_distance_array_ortho<T: Real>(reference: &[T], box_: &OrthoBox<T>, out: &mut [T]) {
    let n = reference.len() / 3;
    debug_assert_eq!(out.len(), n * n.saturating_sub(1) / 2);
    let mut pos = 0;
    for i in 0..n.saturating_sub(1) {
        let len = n - i - 1;
        drive_row(
            Vec3::load(reference, i),
            &reference[3 * (i + 1)..],
            &mut out[pos..pos + len],
            |a, b| a.sub(b).min_image(box_).norm(),
            |a, b| bond_length(box_.delta(a, b)),
        );
        pos += len;
    }
}
