//! Fixed-step position Verlet integrator
//!
//! Each body moves through two states:
//! - `UNINITIALIZED` (no previous position): one explicit Euler step
//!   `x_1 = x_0 + v_0 dt` to obtain a second position sample
//! - `RUNNING`: Stormer-Verlet `x_n+1 = 2 x_n - x_n-1 + a_n dt^2`
//!
//! Velocity is the central difference `(x_n+1 - x_n-1) / 2dt`, i.e. the
//! velocity at `x_n`, one step behind the position it is stored next to.
//! Position stability is what this scheme buys; anything that reads
//! velocities has to live with the lag.

use super::params::TimeStep;
use super::states::{Body, NVec2};

/// Integration state of a single body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegrationState {
    Uninitialized,
    Running { previous: NVec2 },
}

impl Body {
    pub fn integration_state(&self) -> IntegrationState {
        match self.x_prev {
            None => IntegrationState::Uninitialized,
            Some(previous) => IntegrationState::Running { previous },
        }
    }

    /// Advance this body by one step using its accumulated force.
    pub fn advance(&mut self, dt: TimeStep) {
        let dt = dt.seconds();

        match self.integration_state() {
            IntegrationState::Uninitialized => {
                // bootstrap: force is ignored, velocity unchanged
                let x0 = self.x;
                self.x_prev = Some(x0);
                self.x = x0 + self.v * dt;
            }
            IntegrationState::Running { previous } => {
                // a_n = F_n / m
                let a = self.f / self.m;

                // x_n+1 = 2 x_n - x_n-1 + a_n dt^2
                let x_new = 2.0 * self.x - previous + a * (dt * dt);

                // v_n = (x_n+1 - x_n-1) / 2dt
                self.v = (x_new - previous) / (2.0 * dt);

                self.x_prev = Some(self.x);
                self.x = x_new;
            }
        }
    }
}

/// Advance every body by one step. Forces must already be accumulated.
pub fn verlet_integrator(bodies: &mut [Body], dt: TimeStep) {
    for b in bodies.iter_mut() {
        b.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f64, vx: f64, m: f64) -> Body {
        Body::new("rock", m, NVec2::new(x, 0.0), NVec2::new(vx, 0.0), 1.0, "white").unwrap()
    }

    #[test]
    fn bootstrap_ignores_force() {
        let mut b = body(0.0, 1.0, 1.0);
        b.f = NVec2::new(100.0, 0.0);
        b.advance(TimeStep::new(1.0).unwrap());

        assert_eq!(b.position(), NVec2::new(1.0, 0.0));
        assert_eq!(b.velocity(), NVec2::new(1.0, 0.0));
        assert_eq!(b.previous_position(), Some(NVec2::zeros()));
    }

    #[test]
    fn reset_returns_to_uninitialized() {
        let mut b = body(0.0, 1.0, 1.0);
        b.advance(TimeStep::new(1.0).unwrap());
        assert!(matches!(b.integration_state(), IntegrationState::Running { .. }));

        b.reset_history();
        assert_eq!(b.integration_state(), IntegrationState::Uninitialized);
    }

    #[test]
    fn free_body_moves_uniformly() {
        let mut b = body(0.0, 2.0, 5.0);
        let dt = TimeStep::new(0.5).unwrap();
        for _ in 0..10 {
            b.clear_force();
            b.advance(dt);
        }
        assert!((b.position().x - 10.0).abs() < 1e-12);
        assert!((b.velocity().x - 2.0).abs() < 1e-12);
    }
}
