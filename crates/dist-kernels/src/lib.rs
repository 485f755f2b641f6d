//! Bond, angle and dihedral kernels over flat coordinate buffers, with optional
//! orthorhombic periodic boundaries.
//!
//! Two implementations share the [`Kernels`] interface: [`Vanilla`], a scalar reference,
//! and [`Batched`], which processes [`LANES`] elements per step. Indexed adapters live
//! in [`indexed`], validating wrappers in [`checked`].
//!
//! ```
//! use dist_core::OrthoBox;
//! use dist_kernels::{Batched, Kernels};
//!
//! let a = [0.0f32, 0.0, 0.0, 1.0, 1.0, 1.0];
//! let b = [9.0f32, 0.0, 0.0, 1.0, 1.0, 4.0];
//! let cell = OrthoBox::cubic(10.0f32).unwrap();
//! let mut out = [0.0f32; 2];
//! Batched::bonds_ortho(&a, &b, &cell, &mut out);
//! assert_eq!(out, [1.0, 3.0]);
//! ```

#![forbid(unsafe_code)]

pub mod batch;
pub mod checked;
pub mod indexed;
pub mod kernels;
pub mod lanes;
pub mod vanilla;

pub use indexed::{
    angles_idx, angles_idx_ortho, bonds_idx, bonds_idx_ortho, dihedrals_idx, dihedrals_idx_ortho,
    GATHER_BLOCK,
};
pub use kernels::{Batched, Kernels, Vanilla};
pub use lanes::LANES;
