//! Batch sweeps and their image sets
//!
//! A sweep holds one parametric coordinate fixed, samples the other over a
//! range, runs every sampled seed through the trajectory iterator, and
//! projects each iterate back to parametric coordinates. The result is kept
//! in both orderings: by iteration (the image of the seed set after j
//! collisions) and by sample (the raw Cartesian trajectories).

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::BilliardError;
use crate::sample::{SampleMode, sample};

use super::stadium::Stadium;
use super::state::{BoundaryState, ParametricPoint};

/// Per-iteration images and per-sample trajectories of one sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSet {
    /// Indexed `[iteration][sample]`; `iterations + 1` cross-sections, the
    /// zeroth being the seed set itself.
    pub cross_sections: Vec<Vec<ParametricPoint>>,
    /// Indexed `[sample][iteration]`; raw Cartesian states for renderers.
    pub trajectories: Vec<Vec<BoundaryState>>,
}

impl ImageSet {
    /// Sweep φ over `(lo, hi)` with θ held fixed.
    pub fn sweep_phi(
        stadium: &Stadium,
        theta: f64,
        range: (f64, f64),
        samples: usize,
        iterations: usize,
        mode: SampleMode,
    ) -> Result<Self, BilliardError> {
        let values = checked_sample(range, samples, iterations, mode)?;
        let seeds = values
            .into_iter()
            .map(|phi| ParametricPoint::new(theta, phi))
            .collect();
        Self::build(stadium, seeds, iterations)
    }

    /// Sweep θ over `(lo, hi)` with φ held fixed.
    pub fn sweep_theta(
        stadium: &Stadium,
        phi: f64,
        range: (f64, f64),
        samples: usize,
        iterations: usize,
        mode: SampleMode,
    ) -> Result<Self, BilliardError> {
        let values = checked_sample(range, samples, iterations, mode)?;
        let seeds = values
            .into_iter()
            .map(|theta| ParametricPoint::new(theta, phi))
            .collect();
        Self::build(stadium, seeds, iterations)
    }

    /// Number of sampled seeds
    pub fn samples(&self) -> usize {
        self.trajectories.len()
    }

    /// Number of collision-map applications per seed
    pub fn iterations(&self) -> usize {
        self.cross_sections.len() - 1
    }

    fn build(
        stadium: &Stadium,
        seeds: Vec<ParametricPoint>,
        iterations: usize,
    ) -> Result<Self, BilliardError> {
        // Seeds are independent, so their trajectories run in parallel.
        let trajectories: Vec<Vec<BoundaryState>> = seeds
            .par_iter()
            .map(|&seed| {
                let start = stadium.to_cartesian(seed)?;
                stadium.trajectory(start, iterations)
            })
            .collect::<Result<_, _>>()?;

        let mut cross_sections: Vec<Vec<ParametricPoint>> = (0..=iterations)
            .map(|_| Vec::with_capacity(trajectories.len()))
            .collect();
        for path in &trajectories {
            for (j, state) in path.iter().enumerate() {
                cross_sections[j].push(stadium.to_parametric(state)?);
            }
        }

        Ok(Self {
            cross_sections,
            trajectories,
        })
    }
}

fn checked_sample(
    range: (f64, f64),
    samples: usize,
    iterations: usize,
    mode: SampleMode,
) -> Result<Vec<f64>, BilliardError> {
    let (lo, hi) = range;
    if samples == 0 {
        return Err(BilliardError::NoSamples);
    }
    if iterations == 0 {
        return Err(BilliardError::NoIterations);
    }
    if !(lo < hi) {
        return Err(BilliardError::BadRange { lo, hi });
    }
    Ok(sample(lo, hi, samples, mode))
}
