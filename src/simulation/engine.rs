//! One simulation tick
//!
//! A tick runs to completion before anyone can look at the bodies again:
//! clear forces -> accumulate all pairs -> advance all bodies -> optionally
//! sample traces.

use super::forces::{accumulate_gravity, ForceField};
use super::integrator::verlet_integrator;
use super::params::TimeStep;
use super::states::{Body, System};

/// Run one full step on a bare slice of bodies without touching traces.
pub fn tick(bodies: &mut [Body], dt: TimeStep) {
    accumulate_gravity(bodies);
    verlet_integrator(bodies, dt);
}

/// Tick driver holding the step size, force field and trace cadence
pub struct Engine {
    pub dt: TimeStep,
    pub forces: ForceField,
    pub trace_every: usize, // 0 disables trace sampling
    ticks: u64,
}

impl Engine {
    pub fn new(dt: TimeStep, trace_every: usize) -> Self {
        Self {
            dt,
            forces: ForceField::newtonian(),
            trace_every,
            ticks: 0,
        }
    }

    pub fn with_forces(mut self, forces: ForceField) -> Self {
        self.forces = forces;
        self
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance `sys` by one step of `self.dt`.
    pub fn tick(&mut self, sys: &mut System) {
        // every force is in place before the first body moves
        self.forces.accumulate_forces(&mut sys.bodies);
        verlet_integrator(&mut sys.bodies, self.dt);

        sys.t += self.dt.seconds();
        self.ticks += 1;

        if self.trace_every > 0 && self.ticks % self.trace_every as u64 == 0 {
            sys.record_traces();
        }
    }

    /// Run `steps` ticks back to back.
    pub fn run(&mut self, sys: &mut System, steps: usize) {
        for _ in 0..steps {
            self.tick(sys);
        }
    }
}
