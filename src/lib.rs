//! Orbitarium - 2D Gravity Sandbox
//!
//! A library crate providing the simulation engine for an interactive
//! N-body sandbox: bodies attract each other, move under the accumulated
//! force and merge on contact.

pub mod body;
pub mod collision;
pub mod creation;
pub mod physics;
pub mod scenarios;
pub mod simulation;
pub mod telemetry;
pub mod trail;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

/// All engine plugins: physics, collisions, scenarios and telemetry.
pub struct SandboxPlugins;

impl Plugin for SandboxPlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            collision::CollisionPlugin,
            physics::PhysicsPlugin,
            scenarios::ScenarioPlugin,
            telemetry::TelemetryPlugin,
        ));
    }
}
