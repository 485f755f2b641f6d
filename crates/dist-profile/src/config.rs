use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dist_core::{DistError, DistResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_N_ITEMS: usize = 10_000;
pub const DEFAULT_BOX_LENGTH: f64 = 10.0;
pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_REPEATS: usize = 5;
pub const DEFAULT_WARMUP_REPEATS: usize = 1;
pub const DEFAULT_TOLERANCE: f64 = 1.0e-3;

/// One profiled kernel family. Ortho or no-box is chosen by [`ProfileConfig::periodic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum KernelKind {
    Bonds,
    BondsIdx,
    Angles,
    AnglesIdx,
    Dihedrals,
    DihedralsIdx,
    DistanceArray,
    SelfDistanceArray,
}

impl KernelKind {
    pub const ALL: [KernelKind; 8] = [
        KernelKind::Bonds,
        KernelKind::BondsIdx,
        KernelKind::Angles,
        KernelKind::AnglesIdx,
        KernelKind::Dihedrals,
        KernelKind::DihedralsIdx,
        KernelKind::DistanceArray,
        KernelKind::SelfDistanceArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KernelKind::Bonds => "bonds",
            KernelKind::BondsIdx => "bonds_idx",
            KernelKind::Angles => "angles",
            KernelKind::AnglesIdx => "angles_idx",
            KernelKind::Dihedrals => "dihedrals",
            KernelKind::DihedralsIdx => "dihedrals_idx",
            KernelKind::DistanceArray => "distance_array",
            KernelKind::SelfDistanceArray => "self_distance_array",
        }
    }

    /// Results are signed angles on a circle.
    pub fn is_periodic_angle(self) -> bool {
        matches!(self, KernelKind::Dihedrals | KernelKind::DihedralsIdx)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Precision {
    #[default]
    #[serde(rename = "f32")]
    #[value(name = "f32")]
    F32,
    #[serde(rename = "f64")]
    #[value(name = "f64")]
    F64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub kernels: Vec<KernelKind>,
    #[serde(default)]
    pub n_items: Option<usize>,
    #[serde(default)]
    pub box_length: Option<f64>,
    /// Fixture overhang; points are drawn from `[-delta, box_length + delta)`.
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub repeats: Option<usize>,
    #[serde(default)]
    pub warmup_repeats: Option<usize>,
    #[serde(default)]
    pub precision: Option<Precision>,
    #[serde(default)]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub periodic: Option<bool>,
    #[serde(default)]
    pub json_out: Option<PathBuf>,
}

impl ProfileConfig {
    pub fn normalized(&self) -> DistResult<ProfileConfig> {
        self.validate()?;
        let mut cfg = self.clone();
        if cfg.kernels.is_empty() {
            cfg.kernels = KernelKind::ALL.to_vec();
        } else {
            let mut seen = Vec::with_capacity(cfg.kernels.len());
            for k in cfg.kernels.drain(..) {
                if !seen.contains(&k) {
                    seen.push(k);
                }
            }
            cfg.kernels = seen;
        }
        cfg.n_items.get_or_insert(DEFAULT_N_ITEMS);
        cfg.box_length.get_or_insert(DEFAULT_BOX_LENGTH);
        cfg.delta.get_or_insert(0.0);
        cfg.seed.get_or_insert(DEFAULT_SEED);
        cfg.repeats.get_or_insert(DEFAULT_REPEATS);
        cfg.warmup_repeats.get_or_insert(DEFAULT_WARMUP_REPEATS);
        cfg.precision.get_or_insert(Precision::F32);
        cfg.tolerance.get_or_insert(DEFAULT_TOLERANCE);
        cfg.periodic.get_or_insert(true);
        Ok(cfg)
    }

    pub fn validate(&self) -> DistResult<()> {
        if let Some(l) = self.box_length {
            if !l.is_finite() || l <= 0.0 {
                return Err(DistError::Invalid(format!(
                    "box_length must be finite and > 0, got {l}"
                )));
            }
        }
        if let Some(d) = self.delta {
            if !d.is_finite() || d < 0.0 {
                return Err(DistError::Invalid(format!(
                    "delta must be finite and >= 0, got {d}"
                )));
            }
        }
        if self.repeats == Some(0) {
            return Err(DistError::Invalid("repeats must be > 0".into()));
        }
        if let Some(t) = self.tolerance {
            if !t.is_finite() || t < 0.0 {
                return Err(DistError::Invalid(format!(
                    "tolerance must be finite and >= 0, got {t}"
                )));
            }
        }
        Ok(())
    }

    /// Exact comparison applies when no fixture point leaves the primary cell.
    pub fn exact(&self) -> bool {
        self.delta.unwrap_or(0.0) == 0.0
    }
}

pub fn load_config(path: &Path) -> DistResult<ProfileConfig> {
    let content = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext == "yaml" || ext == "yml" {
        serde_yaml::from_str(&content)
            .map_err(|e| DistError::Parse(format!("yaml parse error: {e}")))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| DistError::Parse(format!("json parse error: {e}")))
    }
}
