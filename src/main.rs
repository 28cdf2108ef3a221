//! Orbitarium - headless gravity sandbox driver
//!
//! Runs the simulation engine on a fixed tick and logs telemetry. Rendering
//! and pointer input are provided by separate front ends.
//!
//! Usage: `orbitarium [scenario]` where scenario is one of the preset ids.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use orbitarium::SandboxPlugins;
use orbitarium::scenarios::{LoadScenarioEvent, SCENARIOS, get_scenario};

/// Ticks per second of the fixed simulation schedule.
const TICK_RATE_HZ: f64 = 60.0;

fn main() {
    let requested = std::env::args().nth(1).unwrap_or_else(|| "solar".to_string());
    let scenario = match get_scenario(&requested) {
        Some(scenario) => scenario,
        None => {
            let ids: Vec<_> = SCENARIOS.iter().map(|s| s.id).collect();
            eprintln!("Unknown scenario '{}'. Available: {}", requested, ids.join(", "));
            std::process::exit(2);
        }
    };

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / TICK_RATE_HZ,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
        .add_plugins(SandboxPlugins)
        .add_systems(Startup, move |mut load: MessageWriter<LoadScenarioEvent>| {
            load.write(LoadScenarioEvent {
                scenario_id: scenario.id,
            });
        })
        .run();
}
