//! Text tables for benchmark outcomes.

use std::fmt::Write;

use crate::driver::{self, BenchConfig, Outcome};

/// Per-size results, with speedup relative to the first completed variant.
pub fn size_report(n: usize, outcomes: &[Outcome]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Matrix: {}×{}  ({:.0} KiB)", n, n, driver::memory_kib(n));
    let _ = writeln!(out, "{}", "-".repeat(60));

    let rows: Vec<&Outcome> = outcomes.iter().filter(|o| o.n() == n).collect();
    let baseline = rows
        .iter()
        .find_map(|o| o.measurement())
        .map(|m| m.mean_ms());

    for (i, outcome) in rows.iter().enumerate() {
        match outcome {
            Outcome::Completed(m) => {
                let speedup = baseline.map_or(1.0, |b| b / m.mean_ms());
                let _ = writeln!(
                    out,
                    "{}. {:16} {:10.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                    i + 1,
                    m.variant.label(),
                    m.mean_ms(),
                    m.gflops(),
                    speedup
                );
            }
            Outcome::Skipped { variant, error, .. } => {
                let _ = writeln!(out, "{}. {:16} SKIPPED: {}", i + 1, variant.label(), error);
            }
        }
    }
    out
}

pub fn summary_table(config: &BenchConfig, outcomes: &[Outcome]) -> String {
    let width = 18 + 16 * config.sizes.len();
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(width));
    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(width));

    let _ = write!(out, "\n{:<18}", "Method");
    for n in &config.sizes {
        let _ = write!(out, " {:>15}", format!("{n}×{n}"));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "-".repeat(width));

    for &variant in &config.variants {
        let _ = write!(out, "{:<18}", variant.label());
        for &n in &config.sizes {
            let cell = outcomes
                .iter()
                .find(|o| o.n() == n && o.variant() == variant)
                .and_then(Outcome::measurement)
                .map_or_else(|| "skipped".to_string(), |m| format!("{:.2} GF", m.gflops()));
            let _ = write!(out, " {:>15}", cell);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", "=".repeat(width));
    let _ = writeln!(out, "\nGF = GFLOPS (2n³ floating point operations per call)");
    let _ = writeln!(out, "Memory per run = 3 × n² × 8 bytes. Higher GF is better.");
    out
}
