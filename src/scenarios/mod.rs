//! Preset body populations.
//!
//! Each scenario clears the simulation and rebuilds it through the normal
//! creation contract:
//! - Sandbox (empty)
//! - Binary pair in mutual orbit
//! - Star with orbiting planets
//! - Head-on collision
//! - Collapsing cluster

pub mod presets;

use bevy::prelude::*;

use crate::collision::CollisionState;
use crate::simulation::Simulation;
use crate::types::SimulationSettings;

pub use presets::SCENARIOS;

/// A predefined population and the settings it is meant to run with.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Initial timestep.
    pub dt: f64,
    /// Whether to start paused.
    pub start_paused: bool,
    /// Adds the scenario's bodies to an empty simulation.
    pub populate: fn(&mut Simulation),
}

impl Scenario {
    /// Replace the population and settings with this scenario's.
    pub fn load(&self, simulation: &mut Simulation, settings: &mut SimulationSettings) {
        simulation.clear();
        (self.populate)(simulation);
        if let Err(err) = settings.set_dt(self.dt) {
            warn!("Scenario {} has an invalid timestep: {}", self.id, err);
        }
        settings.set_paused(self.start_paused);
    }
}

/// Resource tracking the current active scenario.
#[derive(Resource, Debug)]
pub struct CurrentScenario {
    /// ID of the current scenario.
    pub id: &'static str,
}

impl Default for CurrentScenario {
    fn default() -> Self {
        Self { id: "sandbox" }
    }
}

/// Message to trigger loading a scenario.
#[derive(Message, Clone, Copy, Debug)]
pub struct LoadScenarioEvent {
    /// ID of the scenario to load.
    pub scenario_id: &'static str,
}

/// Plugin providing scenario management.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentScenario>()
            .add_message::<LoadScenarioEvent>()
            .add_systems(Update, handle_load_scenario_event);
    }
}

fn handle_load_scenario_event(
    mut events: MessageReader<LoadScenarioEvent>,
    mut simulation: ResMut<Simulation>,
    mut settings: ResMut<SimulationSettings>,
    mut collision_state: ResMut<CollisionState>,
    mut current_scenario: ResMut<CurrentScenario>,
) {
    for event in events.read() {
        let Some(scenario) = get_scenario(event.scenario_id) else {
            warn!("Unknown scenario ID: {}", event.scenario_id);
            continue;
        };

        info!("Loading scenario: {} ({})", scenario.name, scenario.id);
        scenario.load(&mut simulation, &mut settings);
        collision_state.clear();
        current_scenario.id = scenario.id;

        let totals = simulation.totals();
        info!(
            "Scenario loaded: {} bodies, total mass {}",
            totals.bodies, totals.mass
        );
    }
}

/// Get a scenario by ID.
pub fn get_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
