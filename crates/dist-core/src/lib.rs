#![forbid(unsafe_code)]

pub mod error;
pub mod fixtures;
pub mod geom;
pub mod geometry_utils;
pub mod pbc;
pub mod pbc_utils;
pub mod real;

pub use error::{DistError, DistResult};
pub use geom::Vec3;
pub use geometry_utils::{angle_diff, angle_from_vectors, bond_length, dihedral_from_vectors};
pub use pbc::OrthoBox;
pub use pbc_utils::{apply_pbc, minimum_image};
pub use real::Real;
