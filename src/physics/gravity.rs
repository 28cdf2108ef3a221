//! Pairwise Newtonian gravity between bodies of the population.

use bevy::math::DVec2;

use crate::body::Body;
use crate::types::G;

/// Net gravitational force on `bodies[index]` from every other live body.
///
/// Bodies sharing the exact same position are skipped (this also excludes
/// the subject itself), as are tombstones. Direct summation, O(n).
pub fn net_force(index: usize, bodies: &[Body]) -> DVec2 {
    let subject = &bodies[index];
    let mut force = DVec2::ZERO;

    for other in bodies {
        if other.is_dead() || other.position == subject.position {
            continue;
        }

        let delta = other.position - subject.position;
        let r = delta.length();
        let magnitude = G * subject.mass as f64 * other.mass as f64 / (r * r);
        force += delta / r * magnitude;
    }

    force
}

/// Acceleration of `bodies[index]`: net force divided by its mass.
#[inline]
pub fn compute_acceleration(index: usize, bodies: &[Body]) -> DVec2 {
    net_force(index, bodies) / bodies[index].mass as f64
}
