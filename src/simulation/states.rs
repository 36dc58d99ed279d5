//! Core state types for the heliocentric simulation.
//!
//! Defines the orbiting-body structs:
//! - `Body` holds one body's mass, position and velocity using `NVec3`
//! - `System` holds the list of bodies and the current simulation time `t`
//!
//! The central mass itself is not a `Body`: it sits fixed at the origin and
//! only its scalar mass enters the force law (see `Parameters`).

use nalgebra::Vector3;

pub type NVec3 = Vector3<f64>;

/// Position of the central mass, fixed at the origin for the whole run.
/// Exposed for consumers that want to draw it next to the trajectories.
pub fn central_position() -> NVec3 {
    NVec3::zeros()
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // label from the scenario file
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
    pub m: f64, // mass (kg), > 0
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // orbiting bodies; they never attract each other
    pub t: f64, // time (s)
}
