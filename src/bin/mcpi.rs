//! mcpi - Monte Carlo estimation of π
//!
//! # Commands
//!
//! - `mcpi single --samples 100 --seed 42` - one estimate with its error
//! - `mcpi converge` - estimates over log-spaced sample sizes

use std::f64::consts::PI;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcpi::consts::{
    DEFAULT_LOG_BASE, DEFAULT_MAX_SAMPLE, DEFAULT_MIN_SAMPLE,
    DEFAULT_NUM_POINTS, DEFAULT_OUTPUT_PATH, DEFAULT_SEED,
};
use mcpi::{estimate, report, Convergence, ConvergenceConfig, Sampler};

/// Monte Carlo estimation of π
#[derive(Parser)]
#[command(name = "mcpi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate π once from a fixed number of samples
    Single {
        /// Number of points to sample
        #[arg(short = 'n', long, default_value_t = 100)]
        samples: usize,

        /// RNG seed
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Estimate π over log-spaced prefixes of one sample
    Converge {
        /// Smallest sample size
        #[arg(long, default_value_t = DEFAULT_MIN_SAMPLE)]
        min: usize,

        /// Largest sample size
        #[arg(long, default_value_t = DEFAULT_MAX_SAMPLE)]
        max: usize,

        /// Number of sample sizes, including the endpoints
        #[arg(short, long, default_value_t = DEFAULT_NUM_POINTS)]
        points: usize,

        /// RNG seed
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Base of the logarithmic spacing
        #[arg(short, long, default_value_t = DEFAULT_LOG_BASE)]
        base: f64,

        /// Leave the largest size out of the sweep
        #[arg(long)]
        no_endpoint: bool,

        /// Output format on stdout
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Save the sweep as CSV
        #[arg(long)]
        save: bool,

        /// Where to save the CSV (implies --save)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    match cli.command {
        Commands::Single { samples, seed } => run_single(samples, seed),
        Commands::Converge {
            min,
            max,
            points,
            seed,
            base,
            no_endpoint,
            format,
            save,
            output,
        } => {
            let config = ConvergenceConfig::builder()
                .min_sample(min)
                .max_sample(max)
                .num_points(points)
                .base(base)
                .endpoint(!no_endpoint)
                .seed(seed)
                .build()
                .context("invalid convergence settings")?;

            let output = match output {
                Some(path) => Some(path),
                None if save => Some(PathBuf::from(DEFAULT_OUTPUT_PATH)),
                None => None,
            };
            run_converge(&config, format, output)
        }
    }
}

fn run_single(samples: usize, seed: u64) -> anyhow::Result<()> {
    let mut rng = Xoshiro256Plus::seed_from_u64(seed);
    let hits = Sampler::new()
        .sample_hits(samples, &mut rng)
        .context("sampling failed")?;
    let est = estimate(&hits)?;

    println!("π ≈ {}", est);
    println!("|π_est - π| = {:e}", est.abs_error());
    info!(samples, seed, z = est.z_score(), "estimated π");
    Ok(())
}

fn run_converge(
    config: &ConvergenceConfig,
    format: Format,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let conv = Convergence::seeded(config)?;

    match format {
        Format::Table => print!("{}", report::table(&conv)),
        Format::Csv => report::write_csv(&conv, io::stdout().lock())?,
    }

    if let Some(last) = conv.last() {
        info!(
            n = last.n,
            pi = last.estimate.pi(),
            std_err = last.estimate.std_err(),
            abs_error = (last.estimate.pi() - PI).abs(),
            "final estimate"
        );
    }

    if let Some(path) = output {
        report::save_csv(&conv, &path).with_context(|| {
            format!("failed to save convergence table to {}", path.display())
        })?;
    }
    Ok(())
}
