//! Simulation driver
//!
//! `Engine` owns a validated scenario plus one `Trajectory` per body and
//! advances the whole system step by step. Within a step each body is
//! processed independently (force, integrate, record); bodies never interact,
//! so any processing order would give the same trajectories. The engine still
//! fixes the order (storage order, one body fully before the next) so that
//! runs are bit-for-bit reproducible

use log::info;

use crate::error::{Error, Result};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::recorder::Trajectory;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;

/// Drives the fixed-step loop over all bodies of a scenario.
///
/// The engine is either running (`steps_done < step_count`) or finished;
/// nothing but the configured step count moves it between the two.
#[derive(Debug)]
pub struct Engine {
    scenario: Scenario,
    trajectories: Vec<Trajectory>, // trajectories[i] belongs to bodies[i]
    steps_done: usize,
}

impl Engine {
    /// Wrap a scenario, preallocating one trajectory per body sized to the
    /// configured step count.
    pub fn new(scenario: Scenario) -> Self {
        let steps = scenario.parameters.step_count;
        let trajectories = scenario
            .system
            .bodies
            .iter()
            .map(|_| Trajectory::with_capacity(steps))
            .collect();
        Self {
            scenario,
            trajectories,
            steps_done: 0,
        }
    }

    /// Execute one full step: for every body in storage order, compute the
    /// force at its current position, advance velocity then position, and
    /// record the new position. Advances the system clock by `dt` once all
    /// bodies are done.
    ///
    /// A no-op returning `Ok(())` once the engine is finished.
    ///
    /// Errors with [`Error::Singularity`] if a body sits exactly at the
    /// origin; nothing is recorded for that body at the failing step and the
    /// run cannot be resumed.
    pub fn step(&mut self) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }

        let step = self.steps_done;
        let dt = self.scenario.parameters.dt;
        let gravity = self.scenario.gravity;

        for (i, body) in self.scenario.system.bodies.iter_mut().enumerate() {
            symplectic_euler(body, &gravity, dt)
                .map_err(|_| Error::Singularity { body: i, step })?;
            self.trajectories[i].record(body.x);
        }

        self.scenario.system.t += dt;
        self.steps_done += 1;
        Ok(())
    }

    /// Run until the configured step count is reached.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "starting run: {} bodies, {} steps, dt = {:.3e} s",
            self.scenario.system.bodies.len(),
            self.scenario.parameters.step_count,
            self.scenario.parameters.dt,
        );

        while !self.is_finished() {
            self.step()?;
        }

        info!("run finished at t = {:.3e} s", self.scenario.system.t);
        Ok(())
    }

    /// Steps completed so far.
    pub fn steps_done(&self) -> usize {
        self.steps_done
    }

    pub fn is_finished(&self) -> bool {
        self.steps_done >= self.scenario.parameters.step_count
    }

    /// Current system state; positions and velocities are those after the
    /// last completed step.
    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    /// One trajectory per body, in body storage order. Valid to read between
    /// steps; entries only ever grow.
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }
}
