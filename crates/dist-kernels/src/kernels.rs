use dist_core::{OrthoBox, Real};

use crate::{batch, vanilla};

/// One kernel interface, two implementations.
///
/// [`Vanilla`] and [`Batched`] are selected statically at the call site, so both stay
/// callable side by side for differential checks. All methods write `out.len()`
/// results; see [`crate::vanilla`] for the buffer layout of each kernel.
pub trait Kernels {
    const NAME: &'static str;

    fn bonds<T: Real>(coords0: &[T], coords1: &[T], out: &mut [T]);

    fn bonds_ortho<T: Real>(coords0: &[T], coords1: &[T], box_: &OrthoBox<T>, out: &mut [T]);

    fn angles<T: Real>(coords0: &[T], coords1: &[T], coords2: &[T], out: &mut [T]);

    fn angles_ortho<T: Real>(
        coords0: &[T],
        coords1: &[T],
        coords2: &[T],
        box_: &OrthoBox<T>,
        out: &mut [T],
    );

    fn dihedrals<T: Real>(
        coords0: &[T],
        coords1: &[T],
        coords2: &[T],
        coords3: &[T],
        out: &mut [T],
    );

    fn dihedrals_ortho<T: Real>(
        coords0: &[T],
        coords1: &[T],
        coords2: &[T],
        coords3: &[T],
        box_: &OrthoBox<T>,
        out: &mut [T],
    );

    fn distance_array<T: Real>(reference: &[T], conf: &[T], out: &mut [T]);

    fn distance_array_ortho<T: Real>(
        reference: &[T],
        conf: &[T],
        box_: &OrthoBox<T>,
        out: &mut [T],
    );

    fn self_distance_array<T: Real>(reference: &[T], out: &mut [T]);

    fn self_distance_array_ortho<T: Real>(reference: &[T], box_: &OrthoBox<T>, out: &mut [T]);
}

/// Scalar reference path.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vanilla;

/// Lane-batched path.
#[derive(Clone, Copy, Debug, Default)]
pub struct Batched;

macro_rules! impl_kernels {
    ($ty:ty, $module:ident, $name:literal) => {
        impl Kernels for $ty {
            const NAME: &'static str = $name;

            #[inline]
            fn bonds<T: Real>(coords0: &[T], coords1: &[T], out: &mut [T]) {
                $module::calc_bonds(coords0, coords1, out)
            }

            #[inline]
            fn bonds_ortho<T: Real>(
                coords0: &[T],
                coords1: &[T],
                box_: &OrthoBox<T>,
                out: &mut [T],
            ) {
                $module::calc_bonds_ortho(coords0, coords1, box_, out)
            }

            #[inline]
            fn angles<T: Real>(coords0: &[T], coords1: &[T], coords2: &[T], out: &mut [T]) {
                $module::calc_angles(coords0, coords1, coords2, out)
            }

            #[inline]
            fn angles_ortho<T: Real>(
                coords0: &[T],
                coords1: &[T],
                coords2: &[T],
                box_: &OrthoBox<T>,
                out: &mut [T],
            ) {
                $module::calc_angles_ortho(coords0, coords1, coords2, box_, out)
            }

            #[inline]
            fn dihedrals<T: Real>(
                coords0: &[T],
                coords1: &[T],
                coords2: &[T],
                coords3: &[T],
                out: &mut [T],
            ) {
                $module::calc_dihedrals(coords0, coords1, coords2, coords3, out)
            }

            #[inline]
            fn dihedrals_ortho<T: Real>(
                coords0: &[T],
                coords1: &[T],
                coords2: &[T],
                coords3: &[T],
                box_: &OrthoBox<T>,
                out: &mut [T],
            ) {
                $module::calc_dihedrals_ortho(coords0, coords1, coords2, coords3, box_, out)
            }

            #[inline]
            fn distance_array<T: Real>(reference: &[T], conf: &[T], out: &mut [T]) {
                $module::calc_distance_array(reference, conf, out)
            }

            #[inline]
            fn distance_array_ortho<T: Real>(
                reference: &[T],
                conf: &[T],
                box_: &OrthoBox<T>,
                out: &mut [T],
            ) {
                $module::calc_distance_array_ortho(reference, conf, box_, out)
            }

            #[inline]
            fn self_distance_array<T: Real>(reference: &[T], out: &mut [T]) {
                $module::calc_self_distance_array(reference, out)
            }

            #[inline]
            fn self_distance_array_ortho<T: Real>(
                reference: &[T],
                box_: &OrthoBox<T>,
                out: &mut [T],
            ) {
                $module::calc_self_distance_array_ortho(reference, box_, out)
            }
        }
    };
}

impl_kernels!(Vanilla, vanilla, "vanilla");
impl_kernels!(Batched, batch, "batched");
