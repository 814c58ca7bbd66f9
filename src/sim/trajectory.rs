//! Trajectory iteration
//!
//! A trajectory is the seed state followed by its iterates under the
//! collision map. Each state depends only on its predecessor, so the whole
//! sequence is a pure function of the seed and the stadium.

use crate::error::BilliardError;

use super::stadium::Stadium;
use super::state::BoundaryState;

impl Stadium {
    /// Iterate the collision map `iterations` times from `seed`.
    ///
    /// Returns the full sequence including the seed, length
    /// `iterations + 1`. The first collision failure aborts the whole
    /// trajectory.
    pub fn trajectory(
        &self,
        seed: BoundaryState,
        iterations: usize,
    ) -> Result<Vec<BoundaryState>, BilliardError> {
        let mut points = Vec::with_capacity(iterations + 1);
        points.push(seed);
        let mut current = seed;
        for _ in 0..iterations {
            current = self.next_collision(current)?;
            points.push(current);
        }
        Ok(points)
    }
}
