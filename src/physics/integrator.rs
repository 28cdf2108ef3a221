//! Semi-implicit (symplectic) Euler integration.
//!
//! Velocity is advanced first; position is then advanced with the updated
//! velocity. The two halves are separate so a collision can override the
//! staged velocity in between.

use bevy::math::DVec2;

use crate::body::StagedState;

/// `velocity + acceleration * dt`
#[inline]
pub fn integrate_velocity(velocity: DVec2, acceleration: DVec2, dt: f64) -> DVec2 {
    velocity + acceleration * dt
}

/// `position + velocity * dt`, where `velocity` is the already-updated one.
#[inline]
pub fn integrate_position(position: DVec2, velocity: DVec2, dt: f64) -> DVec2 {
    position + velocity * dt
}

/// Advance the staged velocity in place.
pub fn advance_velocity(staged: &mut StagedState, acceleration: DVec2, dt: f64) {
    staged.velocity = integrate_velocity(staged.velocity, acceleration, dt);
}

/// Advance the staged position in place using the staged velocity.
pub fn advance_position(staged: &mut StagedState, dt: f64) {
    staged.position = integrate_position(staged.position, staged.velocity, dt);
}
