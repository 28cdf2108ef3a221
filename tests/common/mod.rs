//! Common test utilities for integration tests.

use bevy::math::DVec2;
use orbitarium::simulation::Simulation;
use orbitarium::types::SimulationSettings;

/// Settings with the given timestep and trail capacity.
pub fn settings(dt: f64, trail_len: usize) -> SimulationSettings {
    SimulationSettings::default()
        .with_dt(dt)
        .and_then(|s| s.with_trail_len(trail_len))
        .expect("valid test settings")
}

/// Simulation populated with `(position, radius, mass, velocity)` tuples.
pub fn population(bodies: &[(DVec2, f64, u64, DVec2)]) -> Simulation {
    let mut simulation = Simulation::new();
    for &(position, radius, mass, velocity) in bodies {
        simulation.add_body_with_mass(position, radius, mass, velocity);
    }
    simulation
}

/// Total momentum of the population.
pub fn total_momentum(simulation: &Simulation) -> DVec2 {
    simulation.totals().momentum
}
