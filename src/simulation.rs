//! The simulation context and its per-tick update.
//!
//! Bodies are updated one at a time in population order, and each body
//! commits its new state before the next one is processed. Later bodies in a
//! tick therefore see the already-moved positions and already-merged masses
//! of earlier ones. Trajectories depend on population order.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::{Body, BodyId};
use crate::collision::{self, MergeEvent};
use crate::creation::BodyRequest;
use crate::physics::{advance_position, advance_velocity, compute_acceleration};
use crate::types::SimulationSettings;

/// Summary of one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Tick number, starting at 1 for the first step.
    pub tick: u64,
    /// Merges in the order they were resolved.
    pub merges: Vec<MergeEvent>,
    /// Number of tombstoned bodies purged at the end of the tick.
    pub removed: usize,
    /// Population size after the purge.
    pub survivors: usize,
}

/// Exclusive owner of the body population.
#[derive(Resource, Clone, Debug, Default)]
pub struct Simulation {
    bodies: Vec<Body>,
    next_id: u32,
    tick: u64,
    elapsed: f64,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body with mass `floor(π·radius²)`.
    ///
    /// The caller guarantees `radius >= 1`; see [`BodyRequest`] for the
    /// validating entry point.
    pub fn add_body(&mut self, position: DVec2, radius: f64, velocity: DVec2) -> BodyId {
        let id = self.allocate_id();
        self.bodies.push(Body::new(id, position, radius, velocity));
        id
    }

    /// Add a body with an explicit mass instead of the radius-derived one.
    pub fn add_body_with_mass(
        &mut self,
        position: DVec2,
        radius: f64,
        mass: u64,
        velocity: DVec2,
    ) -> BodyId {
        let id = self.allocate_id();
        self.bodies
            .push(Body::with_mass(id, position, radius, mass, velocity));
        id
    }

    pub fn spawn(&mut self, request: BodyRequest) -> BodyId {
        self.add_body(request.position(), request.radius(), request.velocity())
    }

    fn allocate_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Committed bodies in population order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// First body in population order whose bounding square contains `point`.
    pub fn body_at(&self, point: DVec2) -> Option<&Body> {
        self.bodies.iter().find(|b| b.contains_point(point))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Sum of the timesteps of all completed ticks.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Remove every body and reset counters. Ids are not reused.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.tick = 0;
        self.elapsed = 0.0;
    }

    /// Apply a trail capacity change to existing histories.
    pub fn truncate_trails(&mut self, capacity: usize) {
        for body in &mut self.bodies {
            body.trail.truncate(capacity);
        }
    }

    /// Advance the population by one tick.
    pub fn step(&mut self, settings: &SimulationSettings) -> StepReport {
        let dt = settings.dt();
        let mut merges = Vec::new();

        for index in 0..self.bodies.len() {
            if self.bodies[index].is_dead() {
                continue;
            }

            let acceleration = compute_acceleration(index, &self.bodies);
            self.bodies[index].acceleration = acceleration;

            let mut staged = self.bodies[index].stage();
            advance_velocity(&mut staged, acceleration, dt);

            let mut absorbed = None;
            if let Some(partner) = collision::find_partner(index, &self.bodies) {
                if let Some(merge) = collision::resolve(&self.bodies[index], &self.bodies[partner]) {
                    staged.mass = merge.mass;
                    staged.radius = merge.radius;
                    staged.velocity = merge.velocity;
                    self.bodies[partner].mark_dead();
                    absorbed = Some(self.bodies[partner].id);
                }
            }

            advance_position(&mut staged, dt);

            let body = &mut self.bodies[index];
            body.commit(staged);
            if settings.trail_enabled() {
                body.trail.push(body.position, settings.trail_len());
            }

            if let Some(absorbed) = absorbed {
                debug!("Tick {}: body {} absorbed body {}", self.tick + 1, body.id.0, absorbed.0);
                merges.push(MergeEvent {
                    absorber: body.id,
                    absorbed,
                    mass: body.mass,
                    radius: body.radius,
                    velocity: body.velocity,
                    position: body.position,
                });
            }
        }

        let before = self.bodies.len();
        self.bodies.retain(|b| !b.is_dead());

        self.tick += 1;
        self.elapsed += dt;

        StepReport {
            tick: self.tick,
            merges,
            removed: before - self.bodies.len(),
            survivors: self.bodies.len(),
        }
    }
}
