//! The stadium collision map
//!
//! Advances a boundary state to its next collision under straight-line
//! motion and specular reflection. The hard cases are which of the four
//! boundary segments the path hits next, and the degenerate purely
//! horizontal / vertical directions where the slope form of the path
//! breaks down and closed-form answers exist instead.

use glam::DVec2;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::BilliardError;
use crate::normalize_angle;

use super::stadium::{Region, Stadium};
use super::state::BoundaryState;

/// Reflect a velocity off a surface with unit normal `normal`:
/// v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: DVec2, normal: DVec2) -> DVec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// acos restricted to its real domain
#[inline]
fn checked_acos(value: f64) -> Option<f64> {
    (-1.0..=1.0).contains(&value).then(|| value.acos())
}

/// Which cap a test runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cap {
    Left,
    Right,
}

impl Cap {
    #[inline]
    fn center_x(self, half_lam: f64) -> f64 {
        match self {
            Cap::Left => -half_lam,
            Cap::Right => half_lam,
        }
    }
}

impl Stadium {
    /// Compute the next collision after `state`.
    ///
    /// The position of `state` must lie on the stadium boundary. The walls
    /// are tested first (top, then bottom, skipping the wall the state sits
    /// on), then the caps; the first candidate wins. No candidate at all
    /// means the input violated the boundary invariant or numerical drift
    /// accumulated, and is reported as `NoCollision`.
    pub fn next_collision(&self, state: BoundaryState) -> Result<BoundaryState, BilliardError> {
        let DVec2 { x, y } = state.pos;
        let beta = normalize_angle(state.beta);

        if beta == 0.0 || beta == PI {
            return self.horizontal_path(x, y, beta);
        }
        if (beta - FRAC_PI_2).abs() < self.delta() || (beta - 3.0 * FRAC_PI_2).abs() < self.delta()
        {
            return self.vertical_path(x, y, beta);
        }

        let region = self.region_of(x, y);

        if region != Some(Region::TopWall) {
            if let Some(next) = self.wall_hit(x, y, beta, 1.0) {
                return Ok(next);
            }
        }
        if region != Some(Region::BottomWall) {
            if let Some(next) = self.wall_hit(x, y, beta, -1.0) {
                return Ok(next);
            }
        }
        if let Some(next) = self.cap_hit(x, y, beta, Cap::Left, region == Some(Region::LeftCap)) {
            return Ok(next);
        }
        if let Some(next) = self.cap_hit(x, y, beta, Cap::Right, region == Some(Region::RightCap)) {
            return Ok(next);
        }

        log::warn!("no collision candidate from ({}, {}) with beta {}", x, y, beta);
        Err(BilliardError::NoCollision { x, y, beta })
    }

    /// Intersect the path with the flat wall y = `wall_y` (±1).
    ///
    /// The intercept must fall within the wall span; reflection off a
    /// horizontal wall just negates the vertical velocity component.
    fn wall_hit(&self, x: f64, y: f64, beta: f64, wall_y: f64) -> Option<BoundaryState> {
        let m = beta.tan();
        let hit_x = (wall_y - y) / m + x;
        if (-self.half_lam()..=self.half_lam()).contains(&hit_x) {
            let beta1 = normalize_angle((-beta.sin()).atan2(beta.cos()));
            return Some(BoundaryState::new(hit_x, wall_y, beta1));
        }
        None
    }

    /// Intersect the path with one cap circle.
    ///
    /// The path line meets the circle where a quadratic in x has real
    /// roots d (plus branch) and e (minus branch). When the state already
    /// sits on this cap, one root reproduces the current x (within ε) and
    /// the other must land past the wall joint on this cap's side;
    /// otherwise both roots are tested against the cap's x-span directly.
    fn cap_hit(
        &self,
        x: f64,
        y: f64,
        beta: f64,
        cap: Cap,
        from_same_cap: bool,
    ) -> Option<BoundaryState> {
        let cx = cap.center_x(self.half_lam());
        let eps = self.epsilon();
        let m = beta.tan();
        let m2 = m * m;

        let a = m2 + 1.0;
        let b = 2.0 * m * y - 2.0 * m2 * x - 2.0 * cx;
        let c = m2 * x * x - 2.0 * m * x * y + y * y + cx * cx - 1.0;
        let discr = b * b - 4.0 * a * c;
        if discr < 0.0 {
            return None;
        }
        let sq = discr.sqrt();
        let d = (-b + sq) / (2.0 * a);
        let e = (-b - sq) / (2.0 * a);

        let x1 = if from_same_cap {
            match cap {
                Cap::Left => {
                    if (x - e).abs() < eps && d < cx {
                        d
                    } else if (x - d).abs() < eps && e < cx {
                        e
                    } else {
                        return None;
                    }
                }
                Cap::Right => {
                    if (x - d).abs() < eps && e > cx {
                        e
                    } else if (x - e).abs() < eps && d > cx {
                        d
                    } else {
                        return None;
                    }
                }
            }
        } else {
            match cap {
                Cap::Left => {
                    if cx - 1.0 <= d && d < cx {
                        d
                    } else if cx - 1.0 <= e && e < cx {
                        e
                    } else {
                        return None;
                    }
                }
                Cap::Right => {
                    if cx <= d && d <= cx + 1.0 + eps {
                        d
                    } else if cx <= e && e <= cx + 1.0 + eps {
                        e
                    } else {
                        return None;
                    }
                }
            }
        };

        let y1 = m * (x1 - x) + y;
        // Inward unit normal of the cap at the contact point
        let normal = DVec2::new(cx - x1, -y1);
        let outgoing = reflect(DVec2::new(beta.cos(), beta.sin()), normal);
        let beta1 = normalize_angle(outgoing.y.atan2(outgoing.x));
        Some(BoundaryState::new(x1, y1, beta1))
    }

    /// Next collision for a purely horizontal direction (β = 0 or π).
    ///
    /// The walls are parallel to the path, so the landing point is the
    /// mirror image x' = -x on the opposite cap and the outgoing direction
    /// has a closed form per travel direction and cap half.
    fn horizontal_path(&self, x: f64, y: f64, beta: f64) -> Result<BoundaryState, BilliardError> {
        let x1 = -x;
        let y1 = y;

        // Travel along the central axis bounces straight back.
        if y == 0.0 {
            let beta1 = if beta == 0.0 { PI } else { 0.0 };
            return Ok(BoundaryState::new(x1, y1, beta1));
        }

        let moving_right = beta == 0.0;
        let adjusted = if moving_right {
            x1 - self.half_lam()
        } else {
            -(x1 + self.half_lam())
        };
        // Angle between the path and the inward normal at the landing point
        let alpha =
            checked_acos(adjusted).ok_or(BilliardError::NoCollision { x, y, beta })?;
        let beta1 = match (moving_right, y > 0.0) {
            (true, true) => PI + y1.asin() + alpha,
            (true, false) => PI + y1.asin() - alpha,
            (false, true) => TAU - y1.asin() - alpha,
            (false, false) => alpha - y1.asin(),
        };
        Ok(BoundaryState::new(x1, y1, normalize_angle(beta1)))
    }

    /// Next collision for a purely vertical direction (β within δ of π/2
    /// or 3π/2).
    ///
    /// Between the walls this is a perpendicular wall hit reflecting
    /// straight back. In a cap, the landing point's polar angle about the
    /// cap center is θ̂ = acos(x - center), and the outgoing direction is
    /// 2θ̂ + π/2 moving up or 2θ̂' - 5π/2 moving down (θ̂' the lower-half
    /// angle), the same closed form for either cap.
    fn vertical_path(&self, x: f64, y: f64, beta: f64) -> Result<BoundaryState, BilliardError> {
        let x1 = x;
        let y1 = -y;
        let half_lam = self.half_lam();
        let moving_up = (beta - FRAC_PI_2).abs() < self.delta();

        let beta1 = if x < -half_lam || x > half_lam {
            let cx = if x < -half_lam { -half_lam } else { half_lam };
            let arc = checked_acos(x1 - cx).ok_or(BilliardError::NoCollision { x, y, beta })?;
            if moving_up {
                FRAC_PI_2 + 2.0 * arc
            } else {
                2.0 * (TAU - arc) - 2.5 * PI
            }
        } else if moving_up {
            3.0 * FRAC_PI_2
        } else {
            FRAC_PI_2
        };
        Ok(BoundaryState::new(x1, y1, normalize_angle(beta1)))
    }
}
