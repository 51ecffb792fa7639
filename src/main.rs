//! Benchmark runner comparing loop orders and tiling.
//!
//! ```bash
//! # All four variants at 240, 1200 and 1680
//! matmul-tiling
//!
//! # Just the interchanged variants, smaller sizes, checked results
//! matmul-tiling --sizes 128,256 --variants naive-interchanged,tiled-interchanged --verify
//! ```

use anyhow::Result;
use clap::Parser;
use matmul_tiling::driver::{self, BenchConfig};
use matmul_tiling::report;
use matmul_tiling::{CANONICAL_SIZES, DEFAULT_TILE_SIZE, Variant};

#[derive(Parser, Debug)]
#[command(name = "matmul-tiling")]
#[command(about = "Compare loop orders and cache tiling for square matrix multiplication")]
#[command(version)]
struct Args {
    /// Matrix dimensions to run
    #[arg(long, value_delimiter = ',', default_values_t = CANONICAL_SIZES)]
    sizes: Vec<usize>,

    /// Variants to run: naive, naive-interchanged, tiled, tiled-interchanged
    #[arg(long, value_delimiter = ',', default_values_t = Variant::ALL)]
    variants: Vec<Variant>,

    /// Tile edge for the tiled variants
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    tile_size: usize,

    /// Timed calls per run
    #[arg(long, default_value_t = 3)]
    iterations: usize,

    /// Untimed calls before timing
    #[arg(long, default_value_t = 1)]
    warmup: usize,

    /// Seed for the input matrices (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Check every result against the i-k-j reference
    #[arg(long)]
    verify: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            sizes: self.sizes.clone(),
            variants: self.variants.clone(),
            tile_size: self.tile_size,
            iterations: self.iterations,
            warmup: self.warmup,
            seed: self.seed,
            verify: self.verify,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.config();
    println!("=== Matrix Multiplication: Loop Order vs. Tiling ===\n");
    println!(
        "Tile size: {}, iterations: {}, warmup: {}\n",
        config.tile_size, config.iterations, config.warmup
    );

    let outcomes = driver::run(&config)?;

    for &n in &config.sizes {
        println!("{}", report::size_report(n, &outcomes));
    }
    println!("\n{}", report::summary_table(&config, &outcomes));

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
