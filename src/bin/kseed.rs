//! Seed a codebook from a synthetic standard-normal point set.
//!
//! ```text
//! cargo run --features cli -- --dim 10 --points 1000000 -k 1000 --precision f32
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use kseed::seeding::{PointSet, Scalar, Seeder, Weighting};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Precision {
    F32,
    F64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WeightingArg {
    /// Distance to the previously selected codevector.
    Last,
    /// Distance to the nearest selected codevector (canonical k-means++).
    Nearest,
}

impl From<WeightingArg> for Weighting {
    fn from(w: WeightingArg) -> Self {
        match w {
            WeightingArg::Last => Weighting::LastCenter,
            WeightingArg::Nearest => Weighting::NearestCenter,
        }
    }
}

/// k-means++-style initial codebook selection on random data.
#[derive(Parser, Debug)]
#[command(name = "kseed")]
#[command(about = "Select an initial codebook from a standard-normal point set")]
struct Args {
    /// Dimension of every point.
    #[arg(long, default_value = "10")]
    dim: usize,

    /// Number of points to generate.
    #[arg(long, default_value = "100000")]
    points: usize,

    /// Number of codevectors to select.
    #[arg(short, default_value = "100")]
    k: usize,

    /// Element precision of the point set.
    #[arg(long, value_enum, default_value = "f32")]
    precision: Precision,

    /// Weighting rule for subsequent codevectors.
    #[arg(long, value_enum, default_value = "last")]
    weighting: WeightingArg,

    /// Random seed for data generation and seeding.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Seconds between progress reports.
    #[arg(long, default_value = "5")]
    progress_secs: u64,

    /// Disable progress reports.
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.precision {
        Precision::F32 => run::<f32>(&args),
        Precision::F64 => run::<f64>(&args),
    }
}

fn run<T: Scalar>(args: &Args) -> Result<()>
where
    StandardNormal: Distribution<T>,
{
    let mut rng = StdRng::seed_from_u64(args.seed);

    let start = Instant::now();
    let data: Vec<T> = StandardNormal
        .sample_iter(&mut rng)
        .take(args.dim * args.points)
        .collect();
    let points = PointSet::from_flat(&data, args.dim)?;
    info!(
        points = points.len(),
        dim = points.dim(),
        elapsed = ?start.elapsed(),
        "generated training set"
    );

    let progress = (!args.quiet).then(|| Duration::from_secs(args.progress_secs));
    let seeder = Seeder::new(args.k)
        .with_weighting(args.weighting.into())
        .with_progress_interval(progress);

    let start = Instant::now();
    let codebook = seeder.seed_with(&points, &mut rng)?;
    let elapsed = start.elapsed();

    let preview: Vec<usize> = codebook.source_indices().iter().take(10).copied().collect();
    println!(
        "selected {} codevectors of dimension {} in {:.2} s",
        codebook.len(),
        codebook.dim(),
        elapsed.as_secs_f64()
    );
    println!("first source indices: {preview:?}");

    Ok(())
}
