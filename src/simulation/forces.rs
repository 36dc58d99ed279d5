//! Gravitational force model for a fixed central mass
//!
//! The only source of attraction is the central mass at the origin; the
//! orbiting bodies never pull on each other. There is no softening: a body
//! sitting exactly at the origin is a hard error, not a smoothed force

use crate::simulation::states::{Body, NVec3};

/// Marker error for the degenerate case `|r| = 0`.
///
/// The force model cannot attach run context (which body, which step), so it
/// returns this marker and the engine maps it to
/// [`Error::Singularity`](crate::error::Error::Singularity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Singularity;

/// Newtonian inverse-square gravity toward a fixed mass at the origin.
#[derive(Debug, Clone, Copy)]
pub struct CentralGravity {
    pub G: f64, // gravitational constant
    pub central_mass: f64, // mass of the attracting body at the origin
}

impl CentralGravity {
    /// Force in newtons on `body` at its current position.
    ///
    /// Magnitude `G * central_mass * m / |r|^2`, directed from the body
    /// toward the origin. Pure: identical inputs give bit-identical output.
    pub fn force_on(&self, body: &Body) -> Result<NVec3, Singularity> {
        // r points from the origin to the body, so the attraction is along -r
        let r = body.x;

        // Squared distance |r|^2
        let r2 = r.dot(&r);
        if r2 == 0.0 {
            return Err(Singularity);
        }

        // 1 / |r|
        let inv_r = r2.sqrt().recip();

        // 1 / |r|^3
        // (force = magnitude * unit vector
        //        = G M m / |r|^2 * (-r / |r|)
        //        = -G M m * r / |r|^3)
        let inv_r3 = inv_r * inv_r * inv_r;

        // Combine the constants and the distance factor:
        // coef = -G M m / |r|^3
        let coef = -self.G * self.central_mass * body.m * inv_r3;

        Ok(coef * r)
    }
}
