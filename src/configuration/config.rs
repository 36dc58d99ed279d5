//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 6.67430e-11          # gravitational constant (m^3 kg^-1 s^-2)
//!   central_mass: 1.989e30  # mass of the fixed central body (kg)
//!   dt: 86400.0             # fixed step size (s)
//!   steps: 1000             # number of steps to run
//!
//! bodies:
//!   - name: earth
//!     x: [ 1.496e11, 0.0, 0.0 ]
//!     v: [ 0.0, 2.978e4, 0.0 ]
//!     m: 5.972e24
//! ```
//!
//! Validation (positivity, vector arity, finiteness) happens when the engine
//! maps this configuration into its internal runtime scenario representation.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,            // gravitational constant
    pub central_mass: f64, // mass of the fixed central body
    pub dt: f64,           // fixed time step size
    pub steps: usize,      // total number of steps to execute
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // label used in logs and the run summary
    pub x: Vec<f64>,  // initial position vector, 3 components in meters
    pub v: Vec<f64>,  // initial velocity vector, 3 components in m/s
    pub m: f64,       // mass of the body in kg
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state of the system
}
