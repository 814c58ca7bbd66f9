//! Conversion between parametric and Cartesian collision coordinates
//!
//! The boundary is split into four arcs by the angle ref = atan(2/λ): the
//! flat walls occupy [ref, π - ref] and [π + ref, 2π - ref], the caps the
//! rest. On a cap, the position is recovered from θ by solving for the
//! distance ρ from the stadium center to the cap circle along that ray, and
//! the velocity by rotating the inward normal through φ.

use glam::DVec2;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::BilliardError;
use crate::normalize_angle;

use super::state::{BoundaryState, ParametricPoint};
use super::stadium::Stadium;

impl Stadium {
    /// Map a parametric point (θ, φ) to the Cartesian state (x, y, β).
    ///
    /// θ is normalized first; β is always returned in [0, 2π). An angle
    /// matching no arc (only reachable through a non-finite θ) is an error.
    pub fn to_cartesian(&self, point: ParametricPoint) -> Result<BoundaryState, BilliardError> {
        let ref_angle = self.ref_angle();
        let half_lam = self.half_lam();
        let theta = normalize_angle(point.theta);
        let phi = point.phi;

        // Top wall
        if theta >= ref_angle && theta <= PI - ref_angle {
            let x = 1.0 / theta.tan();
            let beta = normalize_angle(3.0 * FRAC_PI_2 + phi);
            return Ok(BoundaryState::new(x, 1.0, beta));
        }

        // Bottom wall
        if theta >= PI + ref_angle && theta <= TAU - ref_angle {
            let x = -1.0 / theta.tan();
            let beta = normalize_angle(FRAC_PI_2 + phi);
            return Ok(BoundaryState::new(x, -1.0, beta));
        }

        let (sin, cos) = theta.sin_cos();

        // Left cap
        if theta > PI - ref_angle && theta < PI + ref_angle {
            let rho = -half_lam * cos + (1.0 - (sin * half_lam).powi(2)).sqrt();
            let x = rho * cos;
            let y = rho * sin;
            let vx = -(x + half_lam) * phi.cos() + y * phi.sin();
            let vy = -(x + half_lam) * phi.sin() - y * phi.cos();
            return Ok(BoundaryState::new(x, y, normalize_angle(vy.atan2(vx))));
        }

        // Right cap
        if theta < ref_angle || theta > TAU - ref_angle {
            let rho = half_lam * cos + (1.0 - (sin * half_lam).powi(2)).sqrt();
            let x = rho * cos;
            let y = rho * sin;
            let vx = -(x - half_lam) * phi.cos() + y * phi.sin();
            let vy = -(x - half_lam) * phi.sin() - y * phi.cos();
            return Ok(BoundaryState::new(x, y, normalize_angle(vy.atan2(vx))));
        }

        Err(BilliardError::UnclassifiedTheta { theta })
    }

    /// Map a Cartesian state (x, y, β) back to a parametric point (θ, φ).
    ///
    /// ψ is the angle between the outgoing velocity and the positively
    /// oriented boundary tangent; φ = ψ - π/2. φ is returned as computed,
    /// without normalization.
    ///
    /// A point whose x sits in the flat-wall range must have y exactly ±1
    /// (the collision map assigns wall hits exactly); anything else is an
    /// `OffBoundary` error.
    pub fn to_parametric(&self, state: &BoundaryState) -> Result<ParametricPoint, BilliardError> {
        let DVec2 { x, y } = state.pos;
        let beta = state.beta;
        let half_lam = self.half_lam();

        let theta = normalize_angle(y.atan2(x));

        let psi = if x > half_lam {
            (-y * beta.cos() + (x - half_lam) * beta.sin()).acos()
        } else if x >= -half_lam {
            if y == 1.0 {
                beta - PI
            } else if y == -1.0 {
                beta
            } else {
                return Err(BilliardError::OffBoundary { x, y });
            }
        } else {
            (-y * beta.cos() + (x + half_lam) * beta.sin()).acos()
        };

        Ok(ParametricPoint::new(theta, psi - FRAC_PI_2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_right_cap_apex() {
        // lam = 2, theta = 0, phi = 0: rightmost point, heading straight back
        let stadium = Stadium::new(2.0).unwrap();
        let state = stadium
            .to_cartesian(ParametricPoint::new(0.0, 0.0))
            .unwrap();
        assert!((state.pos.x - 2.0).abs() < 1e-12);
        assert!(state.pos.y.abs() < 1e-12);
        assert!((state.beta - PI).abs() < 1e-12);
    }

    #[test]
    fn test_top_wall_point() {
        let stadium = Stadium::new(2.0).unwrap();
        let state = stadium
            .to_cartesian(ParametricPoint::new(FRAC_PI_2, 0.3))
            .unwrap();
        assert!(state.pos.x.abs() < 1e-12);
        assert_eq!(state.pos.y, 1.0);
        assert!((state.beta - (3.0 * FRAC_PI_2 + 0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_wall_corner_at_ref_angle() {
        // theta = ref lands on the top wall exactly at the cap joint
        let stadium = Stadium::new(2.0).unwrap();
        let state = stadium
            .to_cartesian(ParametricPoint::new(FRAC_PI_4, 0.0))
            .unwrap();
        assert!((state.pos.x - 1.0).abs() < 1e-12);
        assert_eq!(state.pos.y, 1.0);
    }

    #[test]
    fn test_left_cap_extreme() {
        let stadium = Stadium::new(2.0).unwrap();
        let state = stadium.to_cartesian(ParametricPoint::new(PI, 0.0)).unwrap();
        assert!((state.pos.x + 2.0).abs() < 1e-12);
        assert!(state.pos.y.abs() < 1e-12);
        // Heading back along the axis; beta may land just below 2π
        assert!(state.beta < 1e-9 || TAU - state.beta < 1e-9);
    }

    #[test]
    fn test_off_boundary_rejected() {
        let stadium = Stadium::new(2.0).unwrap();
        let bogus = BoundaryState::new(0.5, 0.3, 1.0);
        assert_eq!(
            stadium.to_parametric(&bogus),
            Err(BilliardError::OffBoundary { x: 0.5, y: 0.3 })
        );
    }

    #[test]
    fn test_unclassified_theta_rejected() {
        let stadium = Stadium::new(2.0).unwrap();
        let result = stadium.to_cartesian(ParametricPoint::new(f64::NAN, 0.0));
        assert!(matches!(result, Err(BilliardError::UnclassifiedTheta { .. })));
    }

    #[test]
    fn test_round_trip_across_all_regions() {
        let stadium = Stadium::new(2.0).unwrap();
        // One theta per arc (ref = π/4 here), a spread of phi values
        let thetas = [0.3, 1.0, 2.0, 3.0, 3.5, 4.5, 5.0, 5.7];
        let phis = [-0.7, -0.2, 0.0, 0.4, 1.1];
        for &theta in &thetas {
            for &phi in &phis {
                let state = stadium
                    .to_cartesian(ParametricPoint::new(theta, phi))
                    .unwrap();
                let back = stadium.to_parametric(&state).unwrap();
                assert!(
                    (back.theta - theta).abs() < 1e-6,
                    "theta {theta} round-tripped to {}",
                    back.theta
                );
                assert!(
                    (back.phi - phi).abs() < 1e-6,
                    "phi {phi} at theta {theta} round-tripped to {}",
                    back.phi
                );
            }
        }
    }

    #[test]
    fn test_cartesian_points_are_on_boundary() {
        let stadium = Stadium::new(3.0).unwrap();
        for i in 0..64 {
            let theta = i as f64 * TAU / 64.0;
            let state = stadium
                .to_cartesian(ParametricPoint::new(theta, 0.2))
                .unwrap();
            assert!(
                stadium.signed_distance(state.pos.x, state.pos.y).abs() < 1e-9,
                "theta {theta} produced an off-boundary point"
            );
        }
    }
}
