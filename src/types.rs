//! Core constants and configuration for the gravity sandbox.

use bevy::prelude::*;

/// Gravitational constant in simulation units.
pub const G: f64 = 1.0;

/// Default timestep scale (one unit of simulated time per tick).
pub const DEFAULT_DT: f64 = 1.0;

/// Smallest non-zero timestep reachable through `slower`.
pub const MIN_DT: f64 = 0.125;

/// Largest timestep reachable through `faster`.
pub const MAX_DT: f64 = 16.0;

/// Default maximum number of positions kept in a body's trail.
pub const DEFAULT_TRAIL_LEN: usize = 5000;

/// Drag distance (world units) corresponding to one unit of velocity.
pub const DRAG_VELOCITY_SCALE: f64 = 100.0;

/// Velocity components smaller than this are snapped to zero at creation.
pub const VELOCITY_DEAD_ZONE: f64 = 0.1;

/// Errors raised when applying invalid configuration values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("invalid timestep: {0} (must be finite and non-negative)")]
    InvalidTimestep(f64),

    #[error("trail length must be at least 1")]
    ZeroTrailLength,
}

/// Simulation configuration sampled once per tick.
///
/// `dt` is a pure scale factor. It is never derived from wall-clock time,
/// so the same settings always produce the same trajectories.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationSettings {
    dt: f64,
    trail_enabled: bool,
    trail_len: usize,
    paused: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            trail_enabled: true,
            trail_len: DEFAULT_TRAIL_LEN,
            paused: false,
        }
    }
}

impl SimulationSettings {
    /// Timestep applied to each tick.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Whether positions are recorded into body trails.
    pub fn trail_enabled(&self) -> bool {
        self.trail_enabled
    }

    /// Maximum trail length per body.
    pub fn trail_len(&self) -> usize {
        self.trail_len
    }

    /// Whether the tick driver is currently suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the timestep. Zero freezes motion; forces and collisions still run.
    pub fn set_dt(&mut self, dt: f64) -> Result<(), SettingsError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SettingsError::InvalidTimestep(dt));
        }
        self.dt = dt;
        Ok(())
    }

    pub fn set_trail_enabled(&mut self, enabled: bool) {
        self.trail_enabled = enabled;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the paused flag, returning the new state.
    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Set the trail capacity used for subsequent appends.
    pub fn set_trail_len(&mut self, trail_len: usize) -> Result<(), SettingsError> {
        if trail_len == 0 {
            return Err(SettingsError::ZeroTrailLength);
        }
        self.trail_len = trail_len;
        Ok(())
    }

    /// Double the timestep, capped at [`MAX_DT`].
    pub fn faster(&mut self) {
        self.dt = if self.dt == 0.0 {
            MIN_DT
        } else {
            (self.dt * 2.0).min(MAX_DT)
        };
    }

    /// Halve the timestep, floored at [`MIN_DT`].
    pub fn slower(&mut self) {
        self.dt = (self.dt * 0.5).max(MIN_DT);
    }

    /// Builder-style timestep override for presets and tests.
    pub fn with_dt(mut self, dt: f64) -> Result<Self, SettingsError> {
        self.set_dt(dt)?;
        Ok(self)
    }

    /// Builder-style trail capacity override for presets and tests.
    pub fn with_trail_len(mut self, trail_len: usize) -> Result<Self, SettingsError> {
        self.set_trail_len(trail_len)?;
        Ok(self)
    }
}
