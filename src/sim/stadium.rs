//! Stadium shape and boundary regions
//!
//! The stadium is the set bounded by two flat walls at y = ±1 for
//! x ∈ [-λ/2, λ/2], closed off by unit-radius semicircular caps centered at
//! (±λ/2, 0). A single `Stadium` value carries λ together with the derived
//! half-length and the tolerance constants, so nothing is recomputed or
//! shared mutably between calls.

use serde::{Deserialize, Serialize};

use crate::consts::{DELTA, EPSILON};
use crate::error::BilliardError;

/// Which boundary segment a point sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    LeftCap,
    TopWall,
    BottomWall,
    RightCap,
}

/// Immutable stadium configuration: λ plus derived constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stadium {
    lam: f64,
    half_lam: f64,
    epsilon: f64,
    delta: f64,
}

impl Stadium {
    /// Build a stadium from λ, the ratio of straight-wall length to twice
    /// the cap radius.
    pub fn new(lam: f64) -> Result<Self, BilliardError> {
        if !lam.is_finite() || lam <= 0.0 {
            return Err(BilliardError::InvalidShape { lam });
        }
        Ok(Self {
            lam,
            half_lam: lam / 2.0,
            epsilon: EPSILON,
            delta: DELTA,
        })
    }

    #[inline]
    pub fn lam(&self) -> f64 {
        self.lam
    }

    /// Half the straight-wall length; the cap centers sit at (±half_lam, 0)
    #[inline]
    pub fn half_lam(&self) -> f64 {
        self.half_lam
    }

    /// Coordinate-matching tolerance
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Axis-direction tolerance
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Half-angle subtended by a flat wall as seen from the stadium center.
    /// Arclength angles within `ref_angle` of the x-axis land on the right
    /// cap; within it of π, on the left cap.
    #[inline]
    pub fn ref_angle(&self) -> f64 {
        (2.0 / self.lam).atan()
    }

    /// Classify a boundary point by the segment it sits on.
    ///
    /// Returns `None` only for the degenerate case of a point between the
    /// walls with y = 0, which no boundary point satisfies.
    pub fn region_of(&self, x: f64, y: f64) -> Option<Region> {
        if x < -self.half_lam {
            Some(Region::LeftCap)
        } else if x <= self.half_lam {
            if y > 0.0 {
                Some(Region::TopWall)
            } else if y < 0.0 {
                Some(Region::BottomWall)
            } else {
                None
            }
        } else {
            Some(Region::RightCap)
        }
    }

    /// Signed distance to the stadium boundary (negative inside)
    pub fn signed_distance(&self, x: f64, y: f64) -> f64 {
        if x < -self.half_lam {
            ((x + self.half_lam).powi(2) + y * y).sqrt() - 1.0
        } else if x <= self.half_lam {
            y.abs() - 1.0
        } else {
            ((x - self.half_lam).powi(2) + y * y).sqrt() - 1.0
        }
    }
}
