//! The two coordinate representations of a boundary collision
//!
//! A collision is either a Cartesian state (position on the boundary plus
//! absolute direction of travel) or a parametric point (arclength angle of
//! the position plus exit angle against the inward normal). The parametric
//! form is the natural one for comparing nearby collisions; the Cartesian
//! form is what the collision map iterates.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A collision in Cartesian coordinates: boundary position plus direction
/// angle β ∈ [0, 2π) of the outgoing velocity.
///
/// Invariant: `pos` lies on the stadium boundary for the λ it was built
/// against. The collision map preserves this; seeds must satisfy it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryState {
    pub pos: DVec2,
    pub beta: f64,
}

impl BoundaryState {
    pub fn new(x: f64, y: f64, beta: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            beta,
        }
    }

    /// Unit velocity vector for the direction angle
    #[inline]
    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.beta.cos(), self.beta.sin())
    }
}

/// A collision in boundary-parametric coordinates.
///
/// `theta` ∈ [0, 2π) locates the point on the boundary by its polar angle
/// about the stadium center; `phi` ∈ (-π/2, π/2) is the angle of the
/// outgoing velocity measured from the inward boundary normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametricPoint {
    pub theta: f64,
    pub phi: f64,
}

impl ParametricPoint {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }
}
