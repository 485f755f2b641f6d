//! Timing and scalar-vs-batch verification for the `dist-kernels` paths.

pub mod config;
pub mod profile;

pub use config::{load_config, KernelKind, Precision, ProfileConfig};
pub use profile::{run_profile, KernelReport, ProfileReport, TimingSummary};
