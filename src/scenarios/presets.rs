//! Preset scenario definitions.

use bevy::math::DVec2;

use crate::body::mass_for_radius;
use crate::creation::orbital_velocity;
use crate::simulation::Simulation;
use crate::types::G;

use super::Scenario;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[SANDBOX, BINARY, SOLAR, COLLISION, CLUSTER];

/// Empty space for free experimentation.
pub static SANDBOX: Scenario = Scenario {
    id: "sandbox",
    name: "Sandbox",
    description: "Empty space. Place bodies yourself.",
    dt: 1.0,
    start_paused: false,
    populate: populate_sandbox,
};

/// Two equal bodies circling their common center of mass.
pub static BINARY: Scenario = Scenario {
    id: "binary",
    name: "Binary Pair",
    description: "Two equal bodies in a mutual circular orbit.",
    dt: 1.0,
    start_paused: false,
    populate: populate_binary,
};

/// A heavy central body with three planets on circular orbits.
pub static SOLAR: Scenario = Scenario {
    id: "solar",
    name: "Star System",
    description: "Three planets orbiting a central star.",
    dt: 1.0,
    start_paused: false,
    populate: populate_solar,
};

/// Two bodies on a head-on course; the heavier absorbs the lighter.
pub static COLLISION: Scenario = Scenario {
    id: "collision",
    name: "Head-on Collision",
    description: "A large and a small body collide and merge.",
    dt: 1.0,
    start_paused: false,
    populate: populate_collision,
};

/// A grid of bodies at rest that collapses and accretes.
pub static CLUSTER: Scenario = Scenario {
    id: "cluster",
    name: "Collapsing Cluster",
    description: "Sixteen bodies at rest fall together and merge.",
    dt: 0.5,
    start_paused: false,
    populate: populate_cluster,
};

fn populate_sandbox(_simulation: &mut Simulation) {}

const BINARY_RADIUS: f64 = 10.0;
const BINARY_SEPARATION: f64 = 200.0;

fn populate_binary(simulation: &mut Simulation) {
    // Each body orbits the midpoint: v² / (d/2) = G·m / d²
    let mass = mass_for_radius(BINARY_RADIUS) as f64;
    let half = BINARY_SEPARATION / 2.0;
    let speed = (G * mass * half).sqrt() / BINARY_SEPARATION;

    simulation.add_body(DVec2::new(-half, 0.0), BINARY_RADIUS, DVec2::new(0.0, -speed));
    simulation.add_body(DVec2::new(half, 0.0), BINARY_RADIUS, DVec2::new(0.0, speed));
}

fn populate_solar(simulation: &mut Simulation) {
    let star = simulation.add_body(DVec2::ZERO, 40.0, DVec2::ZERO);

    for (distance, radius) in [(200.0, 3.0), (350.0, 5.0), (500.0, 4.0)] {
        let position = DVec2::new(distance, 0.0);
        let velocity = simulation
            .body(star)
            .map(|primary| orbital_velocity(position, primary))
            .unwrap_or(DVec2::ZERO);
        simulation.add_body(position, radius, velocity);
    }
}

fn populate_collision(simulation: &mut Simulation) {
    simulation.add_body(DVec2::new(-150.0, 0.0), 8.0, DVec2::new(1.0, 0.0));
    simulation.add_body(DVec2::new(150.0, 0.0), 5.0, DVec2::new(-1.5, 0.0));
}

fn populate_cluster(simulation: &mut Simulation) {
    const SIDE: usize = 4;
    const SPACING: f64 = 60.0;
    let offset = SPACING * (SIDE - 1) as f64 / 2.0;

    for row in 0..SIDE {
        for col in 0..SIDE {
            let position = DVec2::new(col as f64 * SPACING - offset, row as f64 * SPACING - offset);
            let radius = 2.0 + ((row * SIDE + col) % 4) as f64;
            simulation.add_body(position, radius, DVec2::ZERO);
        }
    }
}
