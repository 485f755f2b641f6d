use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use dist_core::DistResult;
use dist_profile::{load_config, run_profile, KernelKind, Precision, ProfileConfig};

#[derive(Parser)]
#[command(
    name = "kernel-microprofile",
    version,
    about = "Time vanilla and batched distance kernels and check they agree"
)]
struct Cli {
    /// JSON or YAML profile config; flags below override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, value_delimiter = ',')]
    kernels: Vec<KernelKind>,
    #[arg(short = 'n', long)]
    n_items: Option<usize>,
    #[arg(long)]
    box_length: Option<f64>,
    #[arg(long)]
    delta: Option<f64>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    repeats: Option<usize>,
    #[arg(long)]
    warmup_repeats: Option<usize>,
    #[arg(short, long, value_enum)]
    precision: Option<Precision>,
    #[arg(long)]
    tolerance: Option<f64>,
    /// Use the no-box kernels.
    #[arg(long)]
    no_box: bool,
    #[arg(short = 'o', long)]
    json_out: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(self, mut cfg: ProfileConfig) -> ProfileConfig {
        if !self.kernels.is_empty() {
            cfg.kernels = self.kernels;
        }
        cfg.n_items = self.n_items.or(cfg.n_items);
        cfg.box_length = self.box_length.or(cfg.box_length);
        cfg.delta = self.delta.or(cfg.delta);
        cfg.seed = self.seed.or(cfg.seed);
        cfg.repeats = self.repeats.or(cfg.repeats);
        cfg.warmup_repeats = self.warmup_repeats.or(cfg.warmup_repeats);
        cfg.precision = self.precision.or(cfg.precision);
        cfg.tolerance = self.tolerance.or(cfg.tolerance);
        if self.no_box {
            cfg.periodic = Some(false);
        }
        cfg.json_out = self.json_out.or(cfg.json_out);
        cfg
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if std::env::var("RUST_LOG").is_err() {
        let filter = format!("dist_profile={level},dist_kernels={level}");
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    } else {
        env_logger::init();
    }
}

fn run_cli() -> DistResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProfileConfig::default(),
    };
    let cfg = cli.apply(base);
    let report = run_profile(&cfg)?;
    match &report.config.json_out {
        Some(path) => {
            report.write_json(path)?;
            println!("wrote json: {}", path.display());
        }
        None => println!("{}", report.to_json()?),
    }
    report.check()
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
