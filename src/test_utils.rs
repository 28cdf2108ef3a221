//! Test utilities for simulation tests.
//!
//! Provides fixtures for common populations and assertions for checking
//! invariants like momentum conservation and tombstone purging.

use bevy::math::DVec2;

use crate::simulation::Simulation;
use crate::types::SimulationSettings;

/// Fixtures for creating test populations.
pub mod fixtures {
    use super::*;

    /// Settings with the given timestep and a small trail.
    pub fn settings(dt: f64) -> SimulationSettings {
        SimulationSettings::default()
            .with_dt(dt)
            .and_then(|s| s.with_trail_len(16))
            .expect("valid fixture settings")
    }

    /// Two bodies of the given masses overlapping on the x-axis.
    pub fn overlapping_pair(mass_a: u64, vel_a: DVec2, mass_b: u64, vel_b: DVec2) -> Simulation {
        let mut simulation = Simulation::new();
        simulation.add_body_with_mass(DVec2::ZERO, 2.0, mass_a, vel_a);
        simulation.add_body_with_mass(DVec2::new(1.0, 0.0), 2.0, mass_b, vel_b);
        simulation
    }

    /// Well-separated bodies laid out on a ring.
    pub fn ring(count: usize, radius: f64, mass: u64) -> Simulation {
        let mut simulation = Simulation::new();
        for i in 0..count {
            let angle = std::f64::consts::TAU * i as f64 / count as f64;
            let position = DVec2::new(angle.cos(), angle.sin()) * radius;
            simulation.add_body_with_mass(position, 1.0, mass, DVec2::ZERO);
        }
        simulation
    }
}

/// Assertions for simulation invariants.
pub mod assertions {
    use super::*;

    /// Total momentum of the population.
    pub fn total_momentum(simulation: &Simulation) -> DVec2 {
        simulation.bodies().iter().map(|b| b.momentum()).sum()
    }

    /// Total mass of the population.
    pub fn total_mass(simulation: &Simulation) -> u64 {
        simulation.bodies().iter().map(|b| b.mass()).sum()
    }

    /// Whether any tombstone is still present.
    pub fn has_tombstones(simulation: &Simulation) -> bool {
        simulation.bodies().iter().any(|b| b.is_dead())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overlapping_pair_merges() {
        let mut simulation = fixtures::overlapping_pair(3, DVec2::X, 1, DVec2::ZERO);
        simulation.step(&fixtures::settings(1.0));
        assert_eq!(simulation.len(), 1);
        assert!(!assertions::has_tombstones(&simulation));
    }

    #[test]
    fn test_ring_has_no_net_momentum() {
        let simulation = fixtures::ring(6, 100.0, 5);
        assert_eq!(simulation.len(), 6);
        assert_eq!(assertions::total_mass(&simulation), 30);
        assert_relative_eq!(assertions::total_momentum(&simulation).length(), 0.0);
    }
}
