//! Simulated bodies and their per-tick staging state.

use std::f64::consts::PI;

use bevy::math::DVec2;

use crate::trail::TrailHistory;

/// Stable identity of a body within one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Mass of a freshly created body with the given radius: `floor(π·r²)`.
///
/// Radii past ~2.4e9 saturate at `u64::MAX`.
pub fn mass_for_radius(radius: f64) -> u64 {
    (PI * radius * radius).floor() as u64
}

/// A massive circular body.
///
/// Fields are only mutated by the simulation; collaborators read them
/// through the accessors between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) id: BodyId,
    pub(crate) position: DVec2,
    pub(crate) velocity: DVec2,
    /// Recomputed every tick, kept only for telemetry.
    pub(crate) acceleration: DVec2,
    pub(crate) mass: u64,
    pub(crate) radius: f64,
    pub(crate) trail: TrailHistory,
}

impl Body {
    /// Create a body whose mass is derived from its radius.
    pub fn new(id: BodyId, position: DVec2, radius: f64, velocity: DVec2) -> Self {
        Self::with_mass(id, position, radius, mass_for_radius(radius), velocity)
    }

    /// Create a body with an explicit mass, bypassing the radius-derived rule.
    pub fn with_mass(id: BodyId, position: DVec2, radius: f64, mass: u64, velocity: DVec2) -> Self {
        Self {
            id,
            position,
            velocity,
            acceleration: DVec2::ZERO,
            mass,
            radius,
            trail: TrailHistory::new(),
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Acceleration computed during the most recent tick.
    pub fn acceleration(&self) -> DVec2 {
        self.acceleration
    }

    pub fn mass(&self) -> u64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn trail(&self) -> &TrailHistory {
        &self.trail
    }

    /// Tombstoned bodies have radius 0 and are purged at the end of the tick.
    pub fn is_dead(&self) -> bool {
        self.radius == 0.0
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass as f64
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass as f64 * self.velocity.length_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).length()
    }

    /// Whether `point` lies inside this body's bounding square.
    pub fn contains_point(&self, point: DVec2) -> bool {
        (point.x - self.position.x).abs() <= self.radius
            && (point.y - self.position.y).abs() <= self.radius
    }

    pub(crate) fn stage(&self) -> StagedState {
        StagedState {
            position: self.position,
            velocity: self.velocity,
            mass: self.mass,
            radius: self.radius,
        }
    }

    /// Write the staged next-state into the live state.
    pub(crate) fn commit(&mut self, staged: StagedState) {
        self.position = staged.position;
        self.velocity = staged.velocity;
        self.mass = staged.mass;
        self.radius = staged.radius;
    }

    pub(crate) fn mark_dead(&mut self) {
        self.radius = 0.0;
    }
}

/// Next-state of a body while it is being updated within a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagedState {
    pub position: DVec2,
    pub velocity: DVec2,
    pub mass: u64,
    pub radius: f64,
}
