//! Physics for the body population.
//!
//! The per-tick update runs in Bevy's FixedUpdate schedule, one
//! [`Simulation::step`] per fixed tick. Body creation and resets are applied
//! in Update, so they never land in the middle of a tick.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::{compute_acceleration, net_force};
pub use integrator::{advance_position, advance_velocity, integrate_position, integrate_velocity};

use crate::collision::{CollisionPlugin, CollisionState, MergeEvent};
use crate::creation::BodyRequest;
use crate::simulation::{Simulation, StepReport};
use crate::types::SimulationSettings;

/// Request to remove every body and start over.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetEvent;

/// Report of the most recent tick, for display collaborators.
#[derive(Resource, Default, Debug)]
pub struct LastStep(pub StepReport);

/// Plugin providing the simulation context and its tick driver.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<CollisionPlugin>() {
            app.add_plugins(CollisionPlugin);
        }

        app.init_resource::<Simulation>()
            .init_resource::<SimulationSettings>()
            .init_resource::<LastStep>()
            .add_message::<BodyRequest>()
            .add_message::<ResetEvent>()
            .add_systems(Update, (handle_reset, spawn_requested_bodies).chain())
            .add_systems(FixedUpdate, physics_step);
    }
}

/// Advance the population by one tick unless the driver is paused.
pub fn physics_step(
    mut simulation: ResMut<Simulation>,
    settings: Res<SimulationSettings>,
    mut last_step: ResMut<LastStep>,
    mut merges: MessageWriter<MergeEvent>,
) {
    if settings.is_paused() {
        return;
    }

    if settings.is_changed() {
        simulation.truncate_trails(settings.trail_len());
    }

    let report = simulation.step(&settings);
    for merge in &report.merges {
        merges.write(merge.clone());
    }
    last_step.0 = report;
}

fn spawn_requested_bodies(
    mut requests: MessageReader<BodyRequest>,
    mut simulation: ResMut<Simulation>,
) {
    for request in requests.read() {
        let id = simulation.spawn(*request);
        info!(
            "Created body {} at ({:.1}, {:.1}) with radius {}",
            id.0,
            request.position().x,
            request.position().y,
            request.radius(),
        );
    }
}

fn handle_reset(
    mut resets: MessageReader<ResetEvent>,
    mut simulation: ResMut<Simulation>,
    mut collision_state: ResMut<CollisionState>,
    mut last_step: ResMut<LastStep>,
) {
    if resets.read().count() == 0 {
        return;
    }

    info!("Resetting simulation ({} bodies removed)", simulation.len());
    simulation.clear();
    collision_state.clear();
    last_step.0 = StepReport::default();
}
