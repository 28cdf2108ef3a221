//! Read-only views of committed simulation state.
//!
//! Snapshots are plain copies taken between ticks; reading them never
//! mutates the population.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::{Body, BodyId};
use crate::simulation::Simulation;

/// Copy of one body's committed state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    pub mass: u64,
    pub radius: f64,
    pub trail_len: usize,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id(),
            position: body.position(),
            velocity: body.velocity(),
            acceleration: body.acceleration(),
            mass: body.mass(),
            radius: body.radius(),
            trail_len: body.trail().len(),
        }
    }
}

/// Population-wide totals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SystemTotals {
    pub bodies: usize,
    pub mass: u64,
    pub momentum: DVec2,
    pub kinetic_energy: f64,
}

impl SystemTotals {
    pub fn of(bodies: &[Body]) -> Self {
        bodies.iter().fold(Self::default(), |acc, body| Self {
            bodies: acc.bodies + 1,
            mass: acc.mass.saturating_add(body.mass()),
            momentum: acc.momentum + body.momentum(),
            kinetic_energy: acc.kinetic_energy + body.kinetic_energy(),
        })
    }
}

impl Simulation {
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies().iter().map(BodySnapshot::from).collect()
    }

    pub fn totals(&self) -> SystemTotals {
        SystemTotals::of(self.bodies())
    }
}

/// How often totals are written to the log.
#[derive(Resource, Clone, Debug)]
pub struct TelemetryConfig {
    /// Log every N ticks. 0 disables logging.
    pub log_every: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { log_every: 600 }
    }
}

fn log_totals(simulation: Res<Simulation>, config: Res<TelemetryConfig>) {
    if config.log_every == 0 || simulation.tick() == 0 || simulation.tick() % config.log_every != 0 {
        return;
    }

    let totals = simulation.totals();
    info!(
        "Tick {}: {} bodies, mass {}, momentum ({:.3}, {:.3}), kinetic energy {:.3}",
        simulation.tick(),
        totals.bodies,
        totals.mass,
        totals.momentum.x,
        totals.momentum.y,
        totals.kinetic_energy,
    );
}

/// Plugin that periodically logs population totals.
pub struct TelemetryPlugin;

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TelemetryConfig>().add_systems(
            FixedUpdate,
            log_totals.after(crate::physics::physics_step),
        );
    }
}
