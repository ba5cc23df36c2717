pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::trajectory::Trajectory;
pub use simulation::forces::{ForceField, ForceLaw, PairwiseGravity, accumulate_gravity};
pub use simulation::integrator::{verlet_integrator, IntegrationState};
pub use simulation::engine::{tick, Engine};
pub use simulation::params::{Parameters, TimeStep, G, CLOSE_ENCOUNTER_DISTANCE, DEFAULT_TRACE_LENGTH};
pub use simulation::scenario::Scenario;

pub use configuration::config::{load_scenario, ScenarioConfig, ParametersConfig, ViewConfig, BodyConfig};

pub use visualization::orbit_vis2d::run_2d;

pub use benchmark::benchmark::{bench_tick, bench_energy_drift, energy_drift};
