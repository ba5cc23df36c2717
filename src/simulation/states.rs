//! Core state types for the planetary simulation.
//!
//! - `Body`   one massive point with its force buffer, integration state and trace
//! - `System` the set of bodies plus the elapsed simulation time `t`
//!
//! Positions are meters, velocities m/s, forces newtons. Nothing in here knows
//! about pixels; display scaling lives in `visualization::view`.

use anyhow::{ensure, Result};
use nalgebra::Vector2;

use super::params::{CLOSE_ENCOUNTER_DISTANCE, DEFAULT_TRACE_LENGTH, G};
use super::trajectory::Trajectory;

pub type NVec2 = Vector2<f64>;

/// A single gravitating point mass.
///
/// Fields are crate-visible so the force accumulator and integrator can
/// update them in place; everything outside the crate goes through the
/// accessors.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) name: String,
    pub(crate) m: f64, // mass [kg]
    pub(crate) x: NVec2, // position [m]
    pub(crate) x_prev: Option<NVec2>, // previous position, None until the first advance
    pub(crate) v: NVec2, // velocity [m/s]
    pub(crate) f: NVec2, // accumulated force [N]
    pub(crate) radius: f64, // display radius [px]
    pub(crate) color: String,
    pub(crate) trajectory: Trajectory,
}

impl Body {
    /// Create a body at rest in the integrator's `UNINITIALIZED` state.
    ///
    /// Fails if `mass` is not a positive finite number, or if position or
    /// velocity contain non-finite components.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: NVec2,
        velocity: NVec2,
        radius: f64,
        color: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        ensure!(
            mass.is_finite() && mass > 0.0,
            "body `{name}`: mass must be positive and finite, got {mass}"
        );
        ensure!(
            position.iter().all(|c| c.is_finite()),
            "body `{name}`: position must be finite, got {position:?}"
        );
        ensure!(
            velocity.iter().all(|c| c.is_finite()),
            "body `{name}`: velocity must be finite, got {velocity:?}"
        );

        Ok(Self {
            name,
            m: mass,
            x: position,
            x_prev: None,
            v: velocity,
            f: NVec2::zeros(),
            radius,
            color: color.into(),
            trajectory: Trajectory::new(DEFAULT_TRACE_LENGTH)?,
        })
    }

    /// Replace the default trace capacity at construction time.
    pub fn with_trace_length(mut self, capacity: usize) -> Result<Self> {
        self.trajectory.set_capacity(capacity)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn force(&self) -> NVec2 {
        self.f
    }

    pub fn previous_position(&self) -> Option<NVec2> {
        self.x_prev
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn trajectory_mut(&mut self) -> &mut Trajectory {
        &mut self.trajectory
    }

    /// `true` once the integrator has a previous position to work from.
    pub fn is_running(&self) -> bool {
        self.x_prev.is_some()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.x - self.x).norm()
    }

    /// Add the Newtonian pull of `other` on this body into the force buffer.
    ///
    /// Pairs closer than [`CLOSE_ENCOUNTER_DISTANCE`] contribute nothing; at
    /// that range real bodies would have collided and `1/d^3` blows up.
    pub fn accumulate_force_from(&mut self, other: &Body) {
        let r = other.x - self.x; // points from self toward other
        let d = r.norm();
        if d < CLOSE_ENCOUNTER_DISTANCE {
            return;
        }

        let coef = G * self.m * other.m / (d * d * d);
        self.f += coef * r;
    }

    /// Add an arbitrary force [N] into the buffer, for force terms other
    /// than pairwise gravity.
    pub fn add_force(&mut self, force: NVec2) {
        self.f += force;
    }

    pub fn clear_force(&mut self) {
        self.f = NVec2::zeros();
    }

    /// Re-express position and velocity relative to a reference frame.
    /// `x_prev` is left alone; callers moving every body should follow up
    /// with [`Body::reset_history`].
    pub fn shift_frame(&mut self, center_position: NVec2, center_velocity: NVec2) {
        self.x -= center_position;
        self.v -= center_velocity;
    }

    /// Drop the previous position so the next advance bootstraps again.
    pub fn reset_history(&mut self) {
        self.x_prev = None;
    }

    /// Append the current position to the trace.
    pub fn record_trace(&mut self) {
        self.trajectory.push(self.x);
    }
}

/// All bodies taking part in the simulation plus elapsed time.
#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // elapsed simulation time [s]
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Mass-weighted center of position and velocity.
    /// An empty system has its barycenter at rest at the origin.
    pub fn barycenter(&self) -> (NVec2, NVec2) {
        let total = self.total_mass();
        if total == 0.0 {
            return (NVec2::zeros(), NVec2::zeros());
        }

        let (mx, mv) = self
            .bodies
            .iter()
            .fold((NVec2::zeros(), NVec2::zeros()), |(mx, mv), b| {
                (mx + b.x * b.m, mv + b.v * b.m)
            });

        (mx / total, mv / total)
    }

    /// Move every body into the barycentric frame and restart integration.
    ///
    /// Previous positions are reset because they were recorded in the old
    /// frame; keeping them would make the Verlet step ignore the velocity shift.
    /// Traces are moved along with the bodies so they stay one unbroken line.
    pub fn normalize_to_barycenter(&mut self) {
        let (xc, vc) = self.barycenter();
        for b in self.bodies.iter_mut() {
            b.shift_frame(xc, vc);
            b.reset_history();
            b.trajectory_mut().translate(-xc);
        }
    }

    pub fn momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.v * b.m)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum()
    }

    /// Pairwise `-G m1 m2 / d` over all unordered pairs.
    pub fn potential_energy(&self) -> f64 {
        let n = self.bodies.len();
        let mut u = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let bi = &self.bodies[i];
                let bj = &self.bodies[j];
                let d = bi.distance_to(bj);
                if d > 0.0 {
                    u -= G * bi.m * bj.m / d;
                }
            }
        }
        u
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn record_traces(&mut self) {
        for b in self.bodies.iter_mut() {
            b.record_trace();
        }
    }

    pub fn clear_traces(&mut self) {
        for b in self.bodies.iter_mut() {
            b.trajectory.clear();
        }
    }

    pub fn reset_histories(&mut self) {
        for b in self.bodies.iter_mut() {
            b.reset_history();
        }
    }

    pub fn set_trace_capacity(&mut self, capacity: usize) -> Result<()> {
        for b in self.bodies.iter_mut() {
            b.trajectory.set_capacity(capacity)?;
        }
        Ok(())
    }
}
