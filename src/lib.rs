pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Error, Result};

pub use simulation::states::{central_position, Body, NVec3, System};
pub use simulation::params::Parameters;
pub use simulation::forces::{CentralGravity, Singularity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::recorder::Trajectory;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_engine, bench_force};
