//! Range sampling for sweep seeds
//!
//! Produces the coordinate values a batch sweep iterates over. Random
//! sampling is seeded so that every run is reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// How to draw sample values from a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleMode {
    /// `n` values starting at `lo` with step `(hi - lo) / n`; `hi` itself
    /// is never produced.
    EvenlySpaced,
    /// `n` independent draws from Uniform[lo, hi), returned sorted ascending.
    UniformRandom { seed: u64 },
}

/// Evenly spaced values over the half-open interval [lo, hi)
pub fn even_spacing(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / n as f64;
    (0..n).map(|i| lo + i as f64 * step).collect()
}

/// Seeded uniform draws over [lo, hi), sorted ascending
pub fn uniform_random(lo: f64, hi: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut values: Vec<f64> = (0..n).map(|_| rng.random_range(lo..hi)).collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Draw `n` values from [lo, hi) according to `mode`
pub fn sample(lo: f64, hi: f64, n: usize, mode: SampleMode) -> Vec<f64> {
    match mode {
        SampleMode::EvenlySpaced => even_spacing(lo, hi, n),
        SampleMode::UniformRandom { seed } => uniform_random(lo, hi, n, seed),
    }
}
