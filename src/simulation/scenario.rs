//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - validated numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the central-mass force model (`CentralGravity`)
//!
//! All configuration errors surface here, before the first step runs.

use log::debug;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::forces::CentralGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Runtime bundle for one simulation run.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: CentralGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig, rejected early if bad
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            central_mass: p_cfg.central_mass,
            dt: p_cfg.dt,
            step_count: p_cfg.steps,
        };
        parameters.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(body_from_config)
            .collect::<Result<Vec<Body>>>()?;

        debug!("scenario loaded: {} bodies", bodies.len());

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        let gravity = CentralGravity {
            G: parameters.G,
            central_mass: parameters.central_mass,
        };

        Ok(Self {
            parameters,
            system,
            gravity,
        })
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body> {
    if !bc.m.is_finite() || bc.m <= 0.0 {
        return Err(Error::Config(format!(
            "body '{}': mass must be finite and > 0",
            bc.name
        )));
    }
    Ok(Body {
        name: bc.name.clone(),
        x: vec3_from_config(&bc.x, "x", &bc.name)?,
        v: vec3_from_config(&bc.v, "v", &bc.name)?,
        m: bc.m,
    })
}

fn vec3_from_config(raw: &[f64], field: &str, body: &str) -> Result<NVec3> {
    match raw {
        [x, y, z] if x.is_finite() && y.is_finite() && z.is_finite() => {
            Ok(NVec3::new(*x, *y, *z))
        }
        [_, _, _] => Err(Error::Config(format!(
            "body '{body}': {field} components must be finite"
        ))),
        _ => Err(Error::Config(format!(
            "body '{body}': {field} must have exactly 3 components, got {}",
            raw.len()
        ))),
    }
}
