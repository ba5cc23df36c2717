//! Physical constants and runtime parameters for the simulation
//!
//! `Parameters` holds the per-scenario settings:
//! - fixed time step (`dt`),
//! - how many ticks run per rendered frame,
//! - default trace capacity and sampling interval

use anyhow::{ensure, Result};

/// Gravitational constant [m^3 / (kg s^2)]
pub const G: f64 = 6.67408e-11;

/// Pairs closer than this [m] exert no force on each other
pub const CLOSE_ENCOUNTER_DISTANCE: f64 = 1.0e6;

/// Trace capacity used when neither the scenario nor the body sets one
pub const DEFAULT_TRACE_LENGTH: usize = 100;

/// A validated, strictly positive time step in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStep(f64);

impl TimeStep {
    pub fn new(dt: f64) -> Result<Self> {
        ensure!(
            dt.is_finite() && dt > 0.0,
            "time step must be positive and finite, got {dt}"
        );
        Ok(Self(dt))
    }

    pub fn seconds(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: TimeStep, // step size
    pub steps_per_frame: usize, // ticks per rendered frame
    pub trace_length: usize, // default trace capacity
    pub trace_every: usize, // push a trace sample every n ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_step_rejects_non_positive() {
        assert!(TimeStep::new(0.0).is_err());
        assert!(TimeStep::new(-1.0).is_err());
        assert!(TimeStep::new(f64::NAN).is_err());
        assert!(TimeStep::new(f64::INFINITY).is_err());
        assert_eq!(TimeStep::new(0.5).unwrap().seconds(), 0.5);
    }
}
