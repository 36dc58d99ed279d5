//! Error types for the simulation core
//!
//! Every failure is deterministic given the inputs, so there is no retry
//! machinery: the caller gets told what was wrong and where

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected before the run starts: non-positive masses, step size or
    /// constants, malformed body vectors, non-finite initial state.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A body's distance to the central mass reached exactly zero mid-run,
    /// making the force undefined. Fatal; nothing was recorded for this
    /// body at this step.
    #[error("singularity: body {body} is at the origin at step {step}")]
    Singularity { body: usize, step: usize },
}
