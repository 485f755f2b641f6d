//! Scalar reference kernels.
//!
//! One element per iteration, wrapping by division. These define the expected output
//! that [`crate::batch`] is checked against.
//!
//! Every kernel computes `out.len()` items and reads the first `3 * out.len()` values
//! of each coordinate buffer.

use dist_core::{angle_from_vectors, bond_length, dihedral_from_vectors, OrthoBox, Real, Vec3};

pub fn calc_bonds<T: Real>(coords0: &[T], coords1: &[T], out: &mut [T]) {
    debug_assert!(coords0.len() >= 3 * out.len() && coords1.len() >= 3 * out.len());
    for (i, dst) in out.iter_mut().enumerate() {
        let a = Vec3::load(coords0, i);
        let b = Vec3::load(coords1, i);
        *dst = bond_length(a.sub(b));
    }
}

pub fn calc_bonds_ortho<T: Real>(coords0: &[T], coords1: &[T], box_: &OrthoBox<T>, out: &mut [T]) {
    debug_assert!(coords0.len() >= 3 * out.len() && coords1.len() >= 3 * out.len());
    for (i, dst) in out.iter_mut().enumerate() {
        let a = Vec3::load(coords0, i);
        let b = Vec3::load(coords1, i);
        *dst = bond_length(box_.delta(a, b));
    }
}

pub fn calc_angles<T: Real>(coords0: &[T], coords1: &[T], coords2: &[T], out: &mut [T]) {
    for (i, dst) in out.iter_mut().enumerate() {
        let a = Vec3::load(coords0, i);
        let b = Vec3::load(coords1, i);
        let c = Vec3::load(coords2, i);
        *dst = angle_from_vectors(a.sub(b), c.sub(b));
    }
}

pub fn calc_angles_ortho<T: Real>(
    coords0: &[T],
    coords1: &[T],
    coords2: &[T],
    box_: &OrthoBox<T>,
    out: &mut [T],
) {
    for (i, dst) in out.iter_mut().enumerate() {
        let a = Vec3::load(coords0, i);
        let b = Vec3::load(coords1, i);
        let c = Vec3::load(coords2, i);
        // wrap the two bond vectors, never the absolute positions
        *dst = angle_from_vectors(box_.delta(a, b), box_.delta(c, b));
    }
}

pub fn calc_dihedrals<T: Real>(
    coords0: &[T],
    coords1: &[T],
    coords2: &[T],
    coords3: &[T],
    out: &mut [T],
) {
    for (i, dst) in out.iter_mut().enumerate() {
        let a = Vec3::load(coords0, i);
        let b = Vec3::load(coords1, i);
        let c = Vec3::load(coords2, i);
        let d = Vec3::load(coords3, i);
        *dst = dihedral_from_vectors(a.sub(b), c.sub(b), d.sub(c));
    }
}

pub fn calc_dihedrals_ortho<T: Real>(
    coords0: &[T],
    coords1: &[T],
    coords2: &[T],
    coords3: &[T],
    box_: &OrthoBox<T>,
    out: &mut [T],
) {
    for (i, dst) in out.iter_mut().enumerate() {
        let a = Vec3::load(coords0, i);
        let b = Vec3::load(coords1, i);
        let c = Vec3::load(coords2, i);
        let d = Vec3::load(coords3, i);
        *dst = dihedral_from_vectors(box_.delta(a, b), box_.delta(c, b), box_.delta(d, c));
    }
}

/// All `reference x conf` distances, row-major by reference point.
pub fn calc_distance_array<T: Real>(reference: &[T], conf: &[T], out: &mut [T]) {
    let n_conf = conf.len() / 3;
    debug_assert_eq!(out.len(), reference.len() / 3 * n_conf);
    if n_conf == 0 {
        return;
    }
    for (i, row) in out.chunks_exact_mut(n_conf).enumerate() {
        let a = Vec3::load(reference, i);
        for (j, dst) in row.iter_mut().enumerate() {
            *dst = bond_length(a.sub(Vec3::load(conf, j)));
        }
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
        let a = Vec3::load(reference, i);
        for (j, dst) in row.iter_mut().enumerate() {
            *dst = bond_length(box_.delta(a, Vec3::load(conf, j)));
        }
    }
}

/// Upper triangle `i < j` of the reference self-distance matrix, ordered by `i` then `j`.
pub fn calc_self_distance_array<T: Real>(reference: &[T], out: &mut [T]) {
    let n = reference.len() / 3;
    debug_assert_eq!(out.len(), n * n.saturating_sub(1) / 2);
    let mut pos = 0;
    for i in 0..n {
        let a = Vec3::load(reference, i);
        for j in i + 1..n {
            out[pos] = bond_length(a.sub(Vec3::load(reference, j)));
            pos += 1;
        }
    }
}

pub fn calc_self_distance_array_ortho<T: Real>(reference: &[T], box_: &OrthoBox<T>, out: &mut [T]) {
    let n = reference.len() / 3;
    debug_assert_eq!(out.len(), n * n.saturating_sub(1) / 2);
    let mut pos = 0;
    for i in 0..n {
        let a = Vec3::load(reference, i);
        for j in i + 1..n {
            out[pos] = bond_length(box_.delta(a, Vec3::load(reference, j)));
            pos += 1;
        }
    }
}
