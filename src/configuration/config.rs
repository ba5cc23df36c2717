//! Configuration types for loading planetary scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – time step, frame cadence and trace settings
//! - [`ViewConfig`]       – window size and the distance that fits in it
//! - [`BodyConfig`]       – initial state and display attributes per body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 3600.0              # seconds per tick
//!   steps_per_frame: 24     # ticks per rendered frame
//!   trace_length: 100       # default trace capacity per body
//!   trace_every: 6          # sample traces every n ticks
//!   normalize: true         # move to the barycentric frame before the first tick
//!
//! view:
//!   width: 800
//!   height: 800
//!   extent: 2.5e11          # meters from center to the nearest window edge
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     position: [0.0, 0.0]
//!     velocity: [0.0, 0.0]
//!     radius: 12.0          # pixels
//!     color: "#ffcc00"
//!   - name: Earth
//!     mass: 5.972e24
//!     position: [1.496e11, 0.0]
//!     velocity: [0.0, 29780.0]
//!     radius: 5.0
//!     color: "DodgerBlue"
//!     trace_length: 300     # optional, overrides parameters.trace_length
//! ```
//!
//! Everything except `bodies` has a default. Values are only checked for
//! sanity when the config is turned into a runtime `Scenario`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::DEFAULT_TRACE_LENGTH;

/// Numerical parameters shared by every body
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_dt")]
    pub dt: f64, // time step [s]
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: usize, // ticks per rendered frame
    #[serde(default = "default_trace_length")]
    pub trace_length: usize, // default trace capacity
    #[serde(default = "default_trace_every")]
    pub trace_every: usize, // sample traces every n ticks
    #[serde(default = "default_normalize")]
    pub normalize: bool, // shift to the barycentric frame at start
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            steps_per_frame: default_steps_per_frame(),
            trace_length: default_trace_length(),
            trace_every: default_trace_every(),
            normalize: default_normalize(),
        }
    }
}

/// Window and scale settings, only read by the viewer
#[derive(Deserialize, Debug, Clone)]
pub struct ViewConfig {
    #[serde(default = "default_window_size")]
    pub width: f64, // window width [px]
    #[serde(default = "default_window_size")]
    pub height: f64, // window height [px]
    #[serde(default = "default_extent")]
    pub extent: f64, // distance from center to the nearest edge [m]
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: default_window_size(),
            height: default_window_size(),
            extent: default_extent(),
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // label drawn next to the body
    pub mass: f64, // [kg]
    pub position: [f64; 2], // [m]
    #[serde(default)]
    pub velocity: [f64; 2], // [m/s]
    #[serde(default = "default_radius")]
    pub radius: f64, // display radius [px]
    #[serde(default = "default_color")]
    pub color: String, // `#rrggbb` or a CSS color name
    pub trace_length: Option<usize>, // per-body override of the trace capacity
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("invalid scenario YAML")
    }
}

/// Read and parse a scenario file
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(cfg)
}

fn default_dt() -> f64 {
    3600.0
}

fn default_steps_per_frame() -> usize {
    1
}

fn default_trace_length() -> usize {
    DEFAULT_TRACE_LENGTH
}

fn default_trace_every() -> usize {
    1
}

fn default_normalize() -> bool {
    true
}

fn default_window_size() -> f64 {
    800.0
}

fn default_extent() -> f64 {
    2.5e11
}

fn default_radius() -> f64 {
    5.0
}

fn default_color() -> String {
    "gray".to_string()
}
