//! Validated body creation parameters.
//!
//! The pointer UI that places bodies lives outside this crate. What it feeds
//! into the simulation is decided here: a radius measured from a drag, a
//! launch velocity measured from a second drag, or a circular-orbit velocity
//! around a chosen body.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::Body;
use crate::types::{DRAG_VELOCITY_SCALE, G, VELOCITY_DEAD_ZONE};

/// Reasons a body cannot be created.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CreationError {
    #[error("radius {0} is below the minimum of 1")]
    RadiusTooSmall(f64),

    #[error("non-finite {0} for new body")]
    NonFinite(&'static str),
}

/// Parameters of a body that passed validation.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct BodyRequest {
    position: DVec2,
    radius: f64,
    velocity: DVec2,
}

impl BodyRequest {
    pub fn new(position: DVec2, radius: f64, velocity: DVec2) -> Result<Self, CreationError> {
        if !position.is_finite() {
            return Err(CreationError::NonFinite("position"));
        }
        if !velocity.is_finite() {
            return Err(CreationError::NonFinite("velocity"));
        }
        if radius.is_nan() || radius < 1.0 {
            return Err(CreationError::RadiusTooSmall(radius));
        }
        if radius.is_infinite() {
            return Err(CreationError::NonFinite("radius"));
        }
        Ok(Self {
            position,
            radius,
            velocity,
        })
    }

    /// Request for a body at rest.
    pub fn at_rest(position: DVec2, radius: f64) -> Result<Self, CreationError> {
        Self::new(position, radius, DVec2::ZERO)
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Result<Self, CreationError> {
        if !velocity.is_finite() {
            return Err(CreationError::NonFinite("velocity"));
        }
        self.velocity = velocity;
        Ok(self)
    }
}

/// Radius from a drag between the body center and the pointer, floored.
pub fn radius_from_drag(center: DVec2, edge: DVec2) -> Result<f64, CreationError> {
    let radius = center.distance(edge).floor();
    if radius.is_nan() || radius < 1.0 {
        return Err(CreationError::RadiusTooSmall(radius));
    }
    Ok(radius)
}

/// Launch velocity from a drag, with small components snapped to zero.
pub fn velocity_from_drag(origin: DVec2, target: DVec2) -> DVec2 {
    let velocity = (target - origin) / DRAG_VELOCITY_SCALE;
    DVec2::new(snap(velocity.x), snap(velocity.y))
}

fn snap(component: f64) -> f64 {
    if component.abs() < VELOCITY_DEAD_ZONE {
        0.0
    } else {
        component
    }
}

/// Velocity for a circular, counter-clockwise orbit around `primary`.
///
/// The orbital speed is `sqrt(G·M/d)` relative to the primary, whose own
/// velocity is added so the orbit follows a moving primary. Returns the
/// primary's velocity when `position` coincides with it.
pub fn orbital_velocity(position: DVec2, primary: &Body) -> DVec2 {
    let offset = position - primary.position();
    let distance = offset.length();
    if distance == 0.0 {
        return primary.velocity();
    }

    let speed = (G * primary.mass() as f64 / distance).sqrt();
    let tangent = offset.perp() / distance;
    primary.velocity() + tangent * speed
}
