use std::fs;
use std::path::Path;
use std::time::Instant;

use dist_core::fixtures::{box_coords, random_indices, seeded_rng};
use dist_core::{angle_diff, DistError, DistResult, OrthoBox, Real};
use dist_kernels::{checked, Batched, Kernels, Vanilla, GATHER_BLOCK, LANES};
use log::{debug, info, warn};
use serde::Serialize;

use crate::config::{KernelKind, Precision, ProfileConfig};

#[derive(Debug, Clone, Serialize)]
pub struct TimingSummary {
    pub sec_mean: f64,
    pub sec_median: f64,
    pub sec_std: f64,
    pub sec_min: f64,
    pub sec_max: f64,
    pub sec_samples: usize,
    pub warmup_repeats: usize,
    pub items_per_sec_mean: f64,
    pub items_per_sec_median: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub timing: TimingSummary,
    pub checksum: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct KernelReport {
    pub kernel: KernelKind,
    pub n_results: usize,
    pub vanilla: PathReport,
    pub batched: PathReport,
    pub speedup_median: f64,
    pub max_abs_diff: f64,
    pub criterion: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub config: ProfileConfig,
    pub lanes: usize,
    pub gather_block: usize,
    pub kernels: Vec<KernelReport>,
}

impl ProfileReport {
    pub fn passed(&self) -> bool {
        self.kernels.iter().all(|k| k.passed)
    }

    pub fn failures(&self) -> Vec<&'static str> {
        self.kernels
            .iter()
            .filter(|k| !k.passed)
            .map(|k| k.kernel.name())
            .collect()
    }

    pub fn to_json(&self) -> DistResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DistError::Parse(format!("json serialize error: {e}")))
    }

    pub fn write_json(&self, path: &Path) -> DistResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// `DistError::Accuracy` naming every kernel whose batch output left its tolerance.
    pub fn check(&self) -> DistResult<()> {
        let failed = self.failures();
        if failed.is_empty() {
            Ok(())
        } else {
            Err(DistError::Accuracy(format!(
                "batched output diverged from vanilla for: {}",
                failed.join(", ")
            )))
        }
    }
}

/// Coordinates, indices and box for one kernel, sized so it yields `n_results` values.
struct Workload<T: Real> {
    coords: [Vec<T>; 4],
    idx: Vec<usize>,
    cell: Option<OrthoBox<T>>,
    n_results: usize,
}

/// `rows x cols` covering at least `n` pairs with a near-square matrix.
pub fn matrix_shape(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let rows = (n as f64).sqrt().ceil() as usize;
    (rows, n.div_ceil(rows))
}

/// Smallest point count whose upper triangle holds at least `n` pairs.
pub fn triangle_points(n: usize) -> usize {
    let mut m = 0usize;
    while m * m.saturating_sub(1) / 2 < n {
        m += 1;
    }
    m
}

fn arity(kind: KernelKind) -> usize {
    match kind {
        KernelKind::Bonds | KernelKind::BondsIdx => 2,
        KernelKind::Angles | KernelKind::AnglesIdx => 3,
        KernelKind::Dihedrals | KernelKind::DihedralsIdx => 4,
        KernelKind::DistanceArray | KernelKind::SelfDistanceArray => 0,
    }
}

fn build_workload<T: Real>(kind: KernelKind, cfg: &ProfileConfig) -> DistResult<Workload<T>> {
    let n = cfg.n_items.unwrap_or(0);
    let l = cfg.box_length.unwrap_or(1.0);
    let delta = cfg.delta.unwrap_or(0.0);
    let mut rng = seeded_rng(cfg.seed.unwrap_or(0));
    let cell = if cfg.periodic.unwrap_or(true) {
        Some(OrthoBox::cubic(T::from_f64(l))?)
    } else {
        None
    };
    let mut points = |count: usize| box_coords::<T, _>(&mut rng, count, l, delta);
    let w = match kind {
        KernelKind::Bonds | KernelKind::Angles | KernelKind::Dihedrals => {
            let a = arity(kind);
            let coords = std::array::from_fn(|slot| if slot < a { points(n) } else { Vec::new() });
            Workload { coords, idx: Vec::new(), cell, n_results: n }
        }
        KernelKind::BondsIdx | KernelKind::AnglesIdx | KernelKind::DihedralsIdx => {
            let coords = [points(n), Vec::new(), Vec::new(), Vec::new()];
            let idx = random_indices(&mut rng, arity(kind) * n, n);
            Workload { coords, idx, cell, n_results: n }
        }
        KernelKind::DistanceArray => {
            let (rows, cols) = matrix_shape(n);
            let coords = [points(rows), points(cols), Vec::new(), Vec::new()];
            Workload { coords, idx: Vec::new(), cell, n_results: rows * cols }
        }
        KernelKind::SelfDistanceArray => {
            let m = triangle_points(n);
            let coords = [points(m), Vec::new(), Vec::new(), Vec::new()];
            let pairs = m * m.saturating_sub(1) / 2;
            Workload { coords, idx: Vec::new(), cell, n_results: pairs }
        }
    };
    Ok(w)
}

fn run_once<K: Kernels, T: Real>(kind: KernelKind, w: &Workload<T>, out: &mut [T]) -> DistResult<()> {
    let [c0, c1, c2, c3] = &w.coords;
    let cell = w.cell.as_ref();
    match kind {
        KernelKind::Bonds => checked::bonds::<K, T>(c0, c1, cell, out),
        KernelKind::BondsIdx => checked::bonds_idx::<K, T>(c0, &w.idx, cell, out),
        KernelKind::Angles => checked::angles::<K, T>(c0, c1, c2, cell, out),
        KernelKind::AnglesIdx => checked::angles_idx::<K, T>(c0, &w.idx, cell, out),
        KernelKind::Dihedrals => checked::dihedrals::<K, T>(c0, c1, c2, c3, cell, out),
        KernelKind::DihedralsIdx => checked::dihedrals_idx::<K, T>(c0, &w.idx, cell, out),
        KernelKind::DistanceArray => checked::distance_array::<K, T>(c0, c1, cell, out),
        KernelKind::SelfDistanceArray => checked::self_distance_array::<K, T>(c0, cell, out),
    }
}

fn time_path<K: Kernels, T: Real>(
    kind: KernelKind,
    w: &Workload<T>,
    total: usize,
) -> DistResult<(Vec<f64>, Vec<T>)> {
    let mut out = vec![T::ZERO; w.n_results];
    let mut samples = Vec::with_capacity(total);
    for _ in 0..total {
        let t0 = Instant::now();
        run_once::<K, T>(kind, w, &mut out)?;
        samples.push(t0.elapsed().as_secs_f64());
    }
    Ok((samples, out))
}

/// Population mean and standard deviation of kernel run times.
fn mean_std(sec: &[f64]) -> (f64, f64) {
    let n = sec.len() as f64;
    let mu = sec.iter().sum::<f64>() / n;
    if sec.len() < 2 {
        return (mu, 0.0);
    }
    let var = sec.iter().map(|&x| (x - mu) * (x - mu)).sum::<f64>() / n;
    (mu, var.sqrt())
}

fn per_sec(items: usize, sec: f64) -> f64 {
    if sec > 0.0 {
        items as f64 / sec
    } else {
        0.0
    }
}

pub fn timing_summary(
    samples_sec: &[f64],
    warmup_repeats: usize,
    n_items: usize,
) -> DistResult<TimingSummary> {
    if samples_sec.is_empty() {
        return Err(DistError::Invalid(
            "timing summary needs at least one kernel run".into(),
        ));
    }
    let Some(measured) = samples_sec.get(warmup_repeats..).filter(|m| !m.is_empty()) else {
        return Err(DistError::Invalid(format!(
            "warmup_repeats ({warmup_repeats}) leaves no measured kernel runs out of {}",
            samples_sec.len()
        )));
    };
    let mut sorted = measured.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let sec_median = if sorted.len() % 2 == 0 {
        0.5 * (sorted[mid - 1] + sorted[mid])
    } else {
        sorted[mid]
    };
    let (sec_mean, sec_std) = mean_std(measured);
    Ok(TimingSummary {
        sec_mean,
        sec_median,
        sec_std,
        sec_min: sorted[0],
        sec_max: sorted[sorted.len() - 1],
        sec_samples: measured.len(),
        warmup_repeats,
        items_per_sec_mean: per_sec(n_items, sec_mean),
        items_per_sec_median: per_sec(n_items, sec_median),
    })
}

/// Largest elementwise difference; signed angles are compared on the circle.
pub fn max_abs_diff<T: Real>(got: &[T], want: &[T], on_circle: bool) -> f64 {
    got.iter()
        .zip(want)
        .map(|(&g, &w)| {
            if on_circle {
                angle_diff(g, w).to_f64().abs()
            } else {
                (g - w).to_f64().abs()
            }
        })
        .fold(0.0, f64::max)
}

/// Every pair equal to within `ulps` units in the last place, relative to the larger value.
pub fn within_ulps<T: Real>(got: &[T], want: &[T], ulps: f64) -> bool {
    let ulps = T::from_f64(ulps);
    got.len() == want.len()
        && got.iter().zip(want).all(|(&g, &w)| {
            if g == w {
                return true;
            }
            let scale = if g.abs() > w.abs() { g.abs() } else { w.abs() };
            (g - w).abs() <= ulps * T::EPSILON * scale
        })
}

fn checksum<T: Real>(values: &[T]) -> f64 {
    values.iter().map(|v| v.to_f64()).sum()
}

fn profile_kernel<T: Real>(kind: KernelKind, cfg: &ProfileConfig) -> DistResult<KernelReport> {
    let w = build_workload::<T>(kind, cfg)?;
    let warmup = cfg.warmup_repeats.unwrap_or(0);
    let total = cfg.repeats.unwrap_or(1) + warmup;
    debug!(
        "{}: {} results, {} x {total} runs per path",
        kind.name(),
        w.n_results,
        T::NAME
    );

    let (vanilla_sec, want) = time_path::<Vanilla, T>(kind, &w, total)?;
    let (batched_sec, got) = time_path::<Batched, T>(kind, &w, total)?;
    let vanilla = PathReport {
        timing: timing_summary(&vanilla_sec, warmup, w.n_results)?,
        checksum: checksum(&want),
    };
    let batched = PathReport {
        timing: timing_summary(&batched_sec, warmup, w.n_results)?,
        checksum: checksum(&got),
    };

    let diff = max_abs_diff(&got, &want, kind.is_periodic_angle());
    let (criterion, passed) = if cfg.exact() {
        ("4 ulp".to_string(), within_ulps(&got, &want, 4.0))
    } else {
        let tol = cfg.tolerance.unwrap_or(0.0);
        (format!("abs <= {tol:e}"), diff <= tol)
    };
    let speedup_median = if batched.timing.sec_median > 0.0 {
        vanilla.timing.sec_median / batched.timing.sec_median
    } else {
        0.0
    };
    if passed {
        info!(
            "{}: speedup {speedup_median:.2}x, max diff {diff:e}",
            kind.name()
        );
    } else {
        warn!(
            "{}: batched output exceeds {criterion} (max diff {diff:e})",
            kind.name()
        );
    }
    Ok(KernelReport {
        kernel: kind,
        n_results: w.n_results,
        vanilla,
        batched,
        speedup_median,
        max_abs_diff: diff,
        criterion,
        passed,
    })
}

/// Profile every configured kernel on both paths.
///
/// The report is returned even when a kernel fails its tolerance; call
/// [`ProfileReport::check`] to turn failures into an error.
pub fn run_profile(cfg: &ProfileConfig) -> DistResult<ProfileReport> {
    let cfg = cfg.normalized()?;
    info!(
        "profiling {} kernels, {} items, precision {:?}",
        cfg.kernels.len(),
        cfg.n_items.unwrap_or(0),
        cfg.precision.unwrap_or_default()
    );
    let mut kernels = Vec::with_capacity(cfg.kernels.len());
    for &kind in &cfg.kernels {
        let report = match cfg.precision.unwrap_or_default() {
            Precision::F32 => profile_kernel::<f32>(kind, &cfg)?,
            Precision::F64 => profile_kernel::<f64>(kind, &cfg)?,
        };
        kernels.push(report);
    }
    Ok(ProfileReport {
        config: cfg,
        lanes: LANES,
        gather_block: GATHER_BLOCK,
        kernels,
    })
}
