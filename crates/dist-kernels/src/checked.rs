//! Validating entry points.
//!
//! Each function checks buffer shapes and index ranges, then calls the same raw kernel
//! as the unchecked path, so successful calls produce identical results. A `None` box
//! selects the no-box kernel.

use dist_core::{DistError, DistResult, OrthoBox, Real};
use log::{debug, trace};

use crate::indexed;
use crate::kernels::Kernels;

fn n_triples<T: Real>(name: &str, coords: &[T]) -> DistResult<usize> {
    if coords.len() % 3 != 0 {
        return Err(DistError::Mismatch(format!(
            "{name}: coordinate buffer length {} is not a multiple of 3",
            coords.len()
        )));
    }
    Ok(coords.len() / 3)
}

fn require_items<T: Real>(name: &str, coords: &[T], n: usize) -> DistResult<()> {
    let have = n_triples(name, coords)?;
    if have < n {
        return Err(DistError::Mismatch(format!(
            "{name}: {n} results requested but buffer holds {have} triples"
        )));
    }
    Ok(())
}

fn require_indices(arity: usize, idx: &[usize], n_results: usize, n_atoms: usize) -> DistResult<()> {
    if idx.len() != arity * n_results {
        return Err(DistError::Mismatch(format!(
            "expected {} indices ({arity} per result, {n_results} results), got {}",
            arity * n_results,
            idx.len()
        )));
    }
    if let Some((pos, &bad)) = idx.iter().enumerate().find(|&(_, &i)| i >= n_atoms) {
        return Err(DistError::OutOfRange(format!(
            "index {bad} at position {pos} exceeds {n_atoms} coordinates"
        )));
    }
    Ok(())
}

fn log_dispatch<K: Kernels, T: Real>(kernel: &str, n: usize, box_: Option<&OrthoBox<T>>) {
    match box_ {
        Some(b) => debug!(
            "{kernel}: {} path, {n} x {}, ortho box {:?}",
            K::NAME,
            T::NAME,
            b.lengths()
        ),
        None => debug!("{kernel}: {} path, {n} x {}, no box", K::NAME, T::NAME),
    }
}

pub fn bonds<K: Kernels, T: Real>(
    coords0: &[T],
    coords1: &[T],
    box_: Option<&OrthoBox<T>>,
    out: &mut [T],
) -> DistResult<()> {
    require_items("bonds coords0", coords0, out.len())?;
    require_items("bonds coords1", coords1, out.len())?;
    log_dispatch::<K, T>("bonds", out.len(), box_);
    match box_ {
        Some(b) => K::bonds_ortho(coords0, coords1, b, out),
        None => K::bonds(coords0, coords1, out),
    }
    Ok(())
}

pub fn angles<K: Kernels, T: Real>(
    coords0: &[T],
    coords1: &[T],
    coords2: &[T],
    box_: Option<&OrthoBox<T>>,
    out: &mut [T],
) -> DistResult<()> {
    require_items("angles coords0", coords0, out.len())?;
    require_items("angles coords1", coords1, out.len())?;
    require_items("angles coords2", coords2, out.len())?;
    log_dispatch::<K, T>("angles", out.len(), box_);
    match box_ {
        Some(b) => K::angles_ortho(coords0, coords1, coords2, b, out),
        None => K::angles(coords0, coords1, coords2, out),
    }
    Ok(())
}

pub fn dihedrals<K: Kernels, T: Real>(
    coords0: &[T],
    coords1: &[T],
    coords2: &[T],
    coords3: &[T],
    box_: Option<&OrthoBox<T>>,
    out: &mut [T],
) -> DistResult<()> {
    require_items("dihedrals coords0", coords0, out.len())?;
    require_items("dihedrals coords1", coords1, out.len())?;
    require_items("dihedrals coords2", coords2, out.len())?;
    require_items("dihedrals coords3", coords3, out.len())?;
    log_dispatch::<K, T>("dihedrals", out.len(), box_);
    match box_ {
        Some(b) => K::dihedrals_ortho(coords0, coords1, coords2, coords3, b, out),
        None => K::dihedrals(coords0, coords1, coords2, coords3, out),
    }
    Ok(())
}

pub fn bonds_idx<K: Kernels, T: Real>(
    coords: &[T],
    idx: &[usize],
    box_: Option<&OrthoBox<T>>,
    out: &mut [T],
) -> DistResult<()> {
    let n_atoms = n_triples("bonds_idx coords", coords)?;
    require_indices(2, idx, out.len(), n_atoms)?;
    log_dispatch::<K, T>("bonds_idx", out.len(), box_);
    match box_ {
        Some(b) => indexed::bonds_idx_ortho::<K, T>(coords, idx, b, out),
        None => indexed::bonds_idx::<K, T>(coords, idx, out),
    }
    Ok(())
}

pub fn angles_idx<K: Kernels, T: Real>(
    coords: &[T],
    idx: &[usize],
    box_: Option<&OrthoBox<T>>,
    out: &mut [T],
) -> DistResult<()> {
    let n_atoms = n_triples("angles_idx coords", coords)?;
    require_indices(3, idx, out.len(), n_atoms)?;
    log_dispatch::<K, T>("angles_idx", out.len(), box_);
    match box_ {
        Some(b) => indexed::angles_idx_ortho::<K, T>(coords, idx, b, out),
        None => indexed::angles_idx::<K, T>(coords, idx, out),
    }
    Ok(())
}

pub fn dihedrals_idx<K: Kernels, T: Real>(
    coords: &[T],
    idx: &[usize],
    box_: Option<&OrthoBox<T>>,
    out: &mut [T],
) -> DistResult<()> {
    let n_atoms = n_triples("dihedrals_idx coords", coords)?;
    require_indices(4, idx, out.len(), n_atoms)?;
    log_dispatch::<K, T>("dihedrals_idx", out.len(), box_);
    match box_ {
        Some(b) => indexed::dihedrals_idx_ortho::<K, T>(coords, idx, b, out),
        None => indexed::dihedrals_idx::<K, T>(coords, idx, out),
    }
    Ok(())
}

pub fn distance_array<K: Kernels, T: Real>(
    reference: &[T],
    conf: &[T],
    box_: Option<&OrthoBox<T>>,
    out: &mut [T],
) -> DistResult<()> {
    let n_ref = n_triples("distance_array reference", reference)?;
    let n_conf = n_triples("distance_array conf", conf)?;
    if out.len() != n_ref * n_conf {
        return Err(DistError::Mismatch(format!(
            "distance_array: result buffer holds {} values, expected {n_ref} x {n_conf}",
            out.len()
        )));
    }
    log_dispatch::<K, T>("distance_array", out.len(), box_);
    trace!("distance_array: {n_ref} reference x {n_conf} conf points");
    match box_ {
        Some(b) => K::distance_array_ortho(reference, conf, b, out),
        None => K::distance_array(reference, conf, out),
    }
    Ok(())
}

pub fn self_distance_array<K: Kernels, T: Real>(
    reference: &[T],
    box_: Option<&OrthoBox<T>>,
    out: &mut [T],
) -> DistResult<()> {
    let n = n_triples("self_distance_array reference", reference)?;
    let expected = n * n.saturating_sub(1) / 2;
    if out.len() != expected {
        return Err(DistError::Mismatch(format!(
            "self_distance_array: result buffer holds {} values, expected {expected} for {n} points",
            out.len()
        )));
    }
    log_dispatch::<K, T>("self_distance_array", out.len(), box_);
    match box_ {
        Some(b) => K::self_distance_array_ortho(reference, b, out),
        None => K::self_distance_array(reference, out),
    }
    Ok(())
}
