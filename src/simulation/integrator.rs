//! Fixed-step time integrator for the heliocentric system
//!
//! Provides semi-implicit (symplectic) Euler: one force evaluation per step,
//! velocity updated first, position advanced with the *updated* velocity.
//! Swapping in explicit Euler or a Verlet-style scheme changes the numerical
//! trajectories, so the ordering here is fixed

use super::forces::{CentralGravity, Singularity};
use super::states::Body;

/// Advance one body by one step of semi-implicit Euler.
///
/// The arithmetic order is fixed:
/// 1. `f = F(x_n)` at the current position
/// 2. `v_n+1 = v_n + (f / m) * dt`
/// 3. `x_n+1 = x_n + v_n+1 * dt`
///
/// Errors with [`Singularity`] if the body sits exactly at the origin; the
/// body is left untouched in that case.
pub fn symplectic_euler(
    body: &mut Body,
    gravity: &CentralGravity,
    dt: f64,
) -> Result<(), Singularity> {
    // Force at the current position x_n
    let f = gravity.force_on(body)?;

    // Kick: v_n+1 = v_n + (f / m) * dt
    body.v += (f / body.m) * dt;

    // Drift with the updated velocity: x_n+1 = x_n + v_n+1 * dt
    body.x += body.v * dt;

    Ok(())
}
