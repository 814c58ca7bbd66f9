//! Error type for the billiard engine
//!
//! Distinguishes contract violations (bad shape or sweep parameters, a point
//! off the boundary) from geometry failure (no candidate collision found).
//! "No collision in this region" is not an error - region testers report it
//! as `None` and the collision map moves on to the next region.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BilliardError {
    /// The stadium parameter λ must be a positive finite number.
    #[error("stadium parameter must be positive and finite, got lam = {lam}")]
    InvalidShape { lam: f64 },

    /// A boundary angle fell outside every arc of the stadium.
    #[error("boundary angle theta = {theta} does not lie on any stadium arc")]
    UnclassifiedTheta { theta: f64 },

    /// A Cartesian point claimed to be on a flat wall has y off ±1.
    #[error("point ({x}, {y}) is not on the stadium boundary")]
    OffBoundary { x: f64, y: f64 },

    /// No region produced a candidate collision. Indicates numerical drift
    /// or a seed that was never on the boundary.
    #[error("no collision found from ({x}, {y}) with direction beta = {beta}")]
    NoCollision { x: f64, y: f64, beta: f64 },

    /// A sweep was requested with zero samples.
    #[error("sample count must be positive")]
    NoSamples,

    /// A sweep was requested with zero iterations.
    #[error("iteration count must be positive")]
    NoIterations,

    /// A sweep range is inverted or empty.
    #[error("sweep range [{lo}, {hi}] is inverted or empty")]
    BadRange { lo: f64, hi: f64 },
}
