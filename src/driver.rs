//! Benchmark driver: allocation, initialization, timed kernel runs and the
//! derived metrics.
//!
//! Each (size, variant) pair is an independent run that owns its three
//! matrices. A run that cannot allocate or fails verification is reported
//! as [`Outcome::Skipped`] and the remaining runs carry on.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::blocked::DEFAULT_TILE_SIZE;
use crate::error::{Error, Result};
use crate::matrix::naive_ikj::matmul_naive_ikj;
use crate::matrix::{Initializer, Matrix};
use crate::variant::Variant;

/// Problem sizes straddling typical L2/L3 capacities.
pub const CANONICAL_SIZES: [usize; 3] = [240, 1200, 1680];

/// Relative per-element tolerance used by verification.
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// Floating point operations in one `n × n` multiply (one mul + one add
/// per inner step).
pub fn flops_per_call(n: usize) -> u64 {
    2 * (n as u64).pow(3)
}

/// Memory held by A, B and C, in KiB.
pub fn memory_kib(n: usize) -> f64 {
    3.0 * (n as f64) * (n as f64) * size_of::<f64>() as f64 / 1024.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub variants: Vec<Variant>,
    pub tile_size: usize,
    /// Timed calls per run.
    pub iterations: usize,
    /// Untimed calls before timing starts.
    pub warmup: usize,
    /// Fixed seed for the inputs; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Compare the final C of every run against the i-k-j reference.
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: CANONICAL_SIZES.to_vec(),
            variants: Variant::ALL.to_vec(),
            tile_size: DEFAULT_TILE_SIZE,
            iterations: 3,
            warmup: 1,
            seed: None,
            verify: false,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig("no problem sizes given".into()));
        }
        if self.variants.is_empty() {
            return Err(Error::InvalidConfig("no variants given".into()));
        }
        if self.sizes.contains(&0) {
            return Err(Error::InvalidDimension);
        }
        if self.tile_size == 0 {
            return Err(Error::InvalidTileSize);
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be at least 1".into()));
        }
        Ok(())
    }
}

/// Timing of one completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub variant: Variant,
    pub n: usize,
    /// Tile edge, for tiled variants only.
    pub tile_size: Option<usize>,
    pub iterations: usize,
    /// Sum of the timed iterations.
    pub total: Duration,
}

impl Measurement {
    /// Zero when no iterations were recorded.
    pub fn mean(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.total.as_secs_f64() / self.iterations as f64)
    }

    pub fn mean_ms(&self) -> f64 {
        self.mean().as_secs_f64() * 1000.0
    }

    /// `2 n³` per iteration, summed over all timed iterations.
    pub fn items_processed(&self) -> u64 {
        flops_per_call(self.n) * self.iterations as u64
    }

    pub fn items_per_second(&self) -> f64 {
        let secs = self.total.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.items_processed() as f64 / secs
    }

    pub fn gflops(&self) -> f64 {
        self.items_per_second() / 1e9
    }

    pub fn memory_kib(&self) -> f64 {
        memory_kib(self.n)
    }
}

#[derive(Debug)]
pub enum Outcome {
    Completed(Measurement),
    /// The run was abandoned; nothing it measured is reported.
    Skipped {
        variant: Variant,
        n: usize,
        error: Error,
    },
}

impl Outcome {
    pub fn variant(&self) -> Variant {
        match self {
            Outcome::Completed(m) => m.variant,
            Outcome::Skipped { variant, .. } => *variant,
        }
    }

    pub fn n(&self) -> usize {
        match self {
            Outcome::Completed(m) => m.n,
            Outcome::Skipped { n, .. } => *n,
        }
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            Outcome::Completed(m) => Some(m),
            Outcome::Skipped { .. } => None,
        }
    }
}

/// The three matrices of one run. Dropped when the run ends.
pub struct Workload {
    pub a: Matrix,
    pub b: Matrix,
    pub c: Matrix,
}

impl Workload {
    /// Allocate A, B, C and fill A and B. Any allocation failure aborts the
    /// whole workload.
    pub fn allocate(n: usize, init: &mut Initializer) -> Result<Self> {
        let a = init.random_matrix(n)?;
        let b = init.random_matrix(n)?;
        let c = Matrix::zeros(n)?;
        Ok(Self { a, b, c })
    }

    pub fn n(&self) -> usize {
        self.c.n()
    }

    /// Zero C, then run `variant` once.
    #[inline]
    pub fn step(&mut self, variant: Variant, tile_size: usize) {
        let n = self.n();
        self.c.clear();
        variant.run(
            self.a.as_slice(),
            self.b.as_slice(),
            self.c.as_mut_slice(),
            n,
            tile_size,
        );
    }
}

/// Run every configured (size, variant) pair.
///
/// Only configuration errors are returned as `Err`; per-run failures end up
/// in the returned outcomes.
pub fn run(config: &BenchConfig) -> Result<Vec<Outcome>> {
    config.validate()?;

    let mut init = Initializer::new(config.seed);
    let mut outcomes = Vec::with_capacity(config.sizes.len() * config.variants.len());

    for &n in &config.sizes {
        for &variant in &config.variants {
            let outcome = match measure(variant, n, config, &mut init) {
                Ok(m) => {
                    info!(
                        %variant,
                        n,
                        mean_ms = m.mean_ms(),
                        gflops = m.gflops(),
                        memory_kib = m.memory_kib(),
                        "run finished"
                    );
                    Outcome::Completed(m)
                }
                Err(error) => {
                    warn!(%variant, n, %error, "skipping run");
                    Outcome::Skipped { variant, n, error }
                }
            };
            outcomes.push(outcome);
        }
    }

    Ok(outcomes)
}

/// Allocate, initialize and time one variant at one size.
pub fn measure(
    variant: Variant,
    n: usize,
    config: &BenchConfig,
    init: &mut Initializer,
) -> Result<Measurement> {
    debug!(%variant, n, kib = memory_kib(n), "allocating workload");
    let mut work = Workload::allocate(n, init)?;

    for _ in 0..config.warmup {
        work.step(variant, config.tile_size);
    }

    // Zeroing C is part of every timed iteration, for all variants alike.
    let mut total = Duration::ZERO;
    for _ in 0..config.iterations {
        let start = Instant::now();
        work.step(variant, config.tile_size);
        black_box(work.c.as_slice());
        total += start.elapsed();
    }

    if config.verify {
        debug!(%variant, n, "verifying against i-k-j reference");
        verify_product(&work.a, &work.b, &work.c)?;
    }

    Ok(Measurement {
        variant,
        n,
        tile_size: variant.is_tiled().then_some(config.tile_size),
        iterations: config.iterations,
        total,
    })
}

/// Check `c` against a freshly computed `a * b`.
pub fn verify_product(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<()> {
    let n = c.n();
    let mut expected = Matrix::zeros(n)?;
    matmul_naive_ikj(a.as_slice(), b.as_slice(), expected.as_mut_slice(), n);

    for (index, (&e, &x)) in expected.as_slice().iter().zip(c.as_slice()).enumerate() {
        if (e - x).abs() > VERIFY_TOLERANCE * e.abs().max(1.0) {
            return Err(Error::Verification {
                n,
                index,
                expected: e,
                actual: x,
            });
        }
    }
    Ok(())
}
