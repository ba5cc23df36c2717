//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it, and produces the
//! runtime bundle `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the tick driver (`Engine`)
//! - view settings, passed through untouched for the viewer
//!
//! The scenario is inserted into Bevy as a `Resource` and mutated only by the
//! physics step system.

use anyhow::{ensure, Context, Result};
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig, ViewConfig};
use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, TimeStep};
use crate::simulation::states::{Body, NVec2, System};

#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub engine: Engine,
    pub view: ViewConfig,
    pub paused: bool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        ensure!(!cfg.bodies.is_empty(), "scenario has no bodies");
        ensure!(p_cfg.steps_per_frame > 0, "steps_per_frame must be at least 1");
        ensure!(p_cfg.trace_every > 0, "trace_every must be at least 1");
        ensure!(p_cfg.trace_length > 0, "trace_length must be at least 1");

        let v_cfg = cfg.view;
        ensure!(
            v_cfg.width > 0.0 && v_cfg.height > 0.0,
            "view size must be positive, got {}x{}",
            v_cfg.width,
            v_cfg.height
        );
        ensure!(
            v_cfg.extent.is_finite() && v_cfg.extent > 0.0,
            "view extent must be positive, got {}",
            v_cfg.extent
        );

        let parameters = Parameters {
            dt: TimeStep::new(p_cfg.dt)?,
            steps_per_frame: p_cfg.steps_per_frame,
            trace_length: p_cfg.trace_length,
            trace_every: p_cfg.trace_every,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, parameters.trace_length))
            .collect::<Result<Vec<_>>>()?;

        let mut system = System::new(bodies);
        if p_cfg.normalize {
            system.normalize_to_barycenter();
        }

        let engine = Engine::new(parameters.dt, parameters.trace_every);

        Ok(Self {
            parameters,
            system,
            engine,
            view: v_cfg,
            paused: false,
        })
    }

    /// Run one rendered frame worth of ticks, unless paused.
    pub fn step_frame(&mut self) {
        if self.paused {
            return;
        }
        self.engine.run(&mut self.system, self.parameters.steps_per_frame);
    }

    /// Toggle pause. Resuming restarts every body's integration chain.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if !self.paused {
            self.system.reset_histories();
        }
        self.paused
    }
}

fn build_body(bc: &BodyConfig, default_trace_length: usize) -> Result<Body> {
    let trace_length = bc.trace_length.unwrap_or(default_trace_length);
    Body::new(
        bc.name.clone(),
        bc.mass,
        NVec2::new(bc.position[0], bc.position[1]),
        NVec2::new(bc.velocity[0], bc.velocity[1]),
        bc.radius,
        bc.color.clone(),
    )?
    .with_trace_length(trace_length)
    .with_context(|| format!("body `{}`", bc.name))
}
