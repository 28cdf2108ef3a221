//! Property-based tests for the simulation step using proptest.
//!
//! These tests verify merge, purge and ordering invariants across a wide
//! range of masses, velocities and layouts.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::physics::net_force;
use crate::simulation::Simulation;
use crate::test_utils::{assertions, fixtures};

fn vector() -> impl Strategy<Value = DVec2> {
    (-5.0f64..5.0, -5.0f64..5.0).prop_map(|(x, y)| DVec2::new(x, y))
}

fn scattered() -> impl Strategy<Value = Vec<(DVec2, f64, DVec2)>> {
    prop::collection::vec(
        ((-400.0f64..400.0, -400.0f64..400.0), 1.0f64..12.0, vector()),
        1..12,
    )
    .prop_map(|bodies| {
        bodies
            .into_iter()
            .map(|((x, y), r, v)| (DVec2::new(x, y), r, v))
            .collect()
    })
}

fn build(bodies: &[(DVec2, f64, DVec2)]) -> Simulation {
    let mut simulation = Simulation::new();
    for &(position, radius, velocity) in bodies {
        simulation.add_body(position, radius, velocity);
    }
    simulation
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A merge of an isolated pair conserves mass and momentum.
    #[test]
    fn prop_merge_conserves_momentum(
        mass_a in 1u64..1000,
        mass_b in 1u64..1000,
        vel_a in vector(),
        vel_b in vector(),
        dt in 0.0f64..4.0,
    ) {
        // Heavier body first so the merge happens before either body moves
        let (mass_a, mass_b) = (mass_a.max(mass_b), mass_a.min(mass_b));
        let mut simulation = fixtures::overlapping_pair(mass_a, vel_a, mass_b, vel_b);
        let initial_momentum = assertions::total_momentum(&simulation);

        let report = simulation.step(&fixtures::settings(dt));

        prop_assert_eq!(report.merges.len(), 1);
        prop_assert_eq!(simulation.len(), 1);
        prop_assert_eq!(assertions::total_mass(&simulation), mass_a + mass_b);

        let drift = (assertions::total_momentum(&simulation) - initial_momentum).length();
        prop_assert!(drift < 1e-9 * (1.0 + initial_momentum.length()), "momentum drift {}", drift);
    }

    /// The heavier body (or the earlier one on a tie) survives a merge.
    #[test]
    fn prop_heavier_or_earlier_survives(mass_a in 1u64..100, mass_b in 1u64..100) {
        let mut simulation = fixtures::overlapping_pair(mass_a, DVec2::ZERO, mass_b, DVec2::ZERO);
        let first = simulation.bodies()[0].id();
        let second = simulation.bodies()[1].id();

        simulation.step(&fixtures::settings(0.0));

        let survivor = simulation.bodies()[0].id();
        if mass_a >= mass_b {
            prop_assert_eq!(survivor, first);
        } else {
            prop_assert_eq!(survivor, second);
        }
    }

    /// Gravity between two bodies is equal and opposite.
    #[test]
    fn prop_pair_force_antisymmetric(
        mass_a in 1u64..10_000,
        mass_b in 1u64..10_000,
        offset in (-100.0f64..100.0, 1.0f64..100.0),
    ) {
        let mut simulation = Simulation::new();
        simulation.add_body_with_mass(DVec2::ZERO, 1.0, mass_a, DVec2::ZERO);
        simulation.add_body_with_mass(DVec2::new(offset.0, offset.1), 1.0, mass_b, DVec2::ZERO);

        let f_a = net_force(0, simulation.bodies());
        let f_b = net_force(1, simulation.bodies());
        prop_assert!((f_a + f_b).length() <= 1e-9 * f_a.length().max(1.0));
    }

    /// No tombstone survives a step and mass is never created or lost.
    #[test]
    fn prop_step_purges_tombstones(bodies in scattered(), ticks in 1usize..20) {
        let mut simulation = build(&bodies);
        let initial_mass = assertions::total_mass(&simulation);
        let settings = fixtures::settings(1.0);

        for _ in 0..ticks {
            let before = simulation.len();
            let report = simulation.step(&settings);
            prop_assert!(!assertions::has_tombstones(&simulation));
            prop_assert_eq!(report.removed, report.merges.len());
            prop_assert_eq!(report.survivors + report.removed, before);
        }

        prop_assert_eq!(assertions::total_mass(&simulation), initial_mass);
    }

    /// Identical inputs give identical results.
    #[test]
    fn prop_step_is_deterministic(bodies in scattered(), ticks in 1usize..20) {
        let mut first = build(&bodies);
        let mut second = build(&bodies);
        let settings = fixtures::settings(1.0);

        for _ in 0..ticks {
            first.step(&settings);
            second.step(&settings);
        }

        prop_assert_eq!(first.bodies(), second.bodies());
    }

    /// Trails never exceed their capacity.
    #[test]
    fn prop_trail_bounded(bodies in scattered(), ticks in 1usize..40) {
        let mut simulation = build(&bodies);
        let settings = fixtures::settings(1.0);

        for _ in 0..ticks {
            simulation.step(&settings);
        }

        for body in simulation.bodies() {
            prop_assert!(body.trail().len() <= settings.trail_len());
        }
    }
}
