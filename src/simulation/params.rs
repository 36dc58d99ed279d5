//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the constants of one run:
//! - gravitational constant and central mass (`G`, `central_mass`),
//! - fixed step size `dt` and the total number of steps

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant (m^3 kg^-1 s^-2)
    pub central_mass: f64, // mass of the fixed central body (kg)
    pub dt: f64, // step size (s)
    pub step_count: usize, // number of steps to execute
}

impl Parameters {
    /// Reject parameter sets the run cannot start from.
    ///
    /// Errors with [`Error::Config`] if `G`, `central_mass` or `dt` is
    /// non-finite or non-positive, or if `step_count` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.G.is_finite() || self.G <= 0.0 {
            return Err(Error::Config("G must be finite and > 0".into()));
        }
        if !self.central_mass.is_finite() || self.central_mass <= 0.0 {
            return Err(Error::Config("central_mass must be finite and > 0".into()));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(Error::Config("dt must be finite and > 0".into()));
        }
        if self.step_count == 0 {
            return Err(Error::Config("step_count must be > 0".into()));
        }
        Ok(())
    }
}
