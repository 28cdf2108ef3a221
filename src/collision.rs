//! Collision detection and merging between bodies.
//!
//! Each body resolves at most one collision per tick: the first overlapping
//! live neighbor in population order. The heavier body (or the body being
//! processed, on equal mass) absorbs the other in a perfectly inelastic
//! merge. The absorbed body is tombstoned and purged at the end of the tick.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::{Body, BodyId};

/// Message sent for every merge performed during a tick.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct MergeEvent {
    /// Body that survived the merge.
    pub absorber: BodyId,
    /// Body that was absorbed and removed.
    pub absorbed: BodyId,
    /// Mass of the absorber after the merge.
    pub mass: u64,
    /// Radius of the absorber after the merge.
    pub radius: f64,
    /// Velocity of the absorber after the merge.
    pub velocity: DVec2,
    /// Committed position of the absorber.
    pub position: DVec2,
}

/// Outcome of `b` absorbing `o`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Merge {
    pub mass: u64,
    pub radius: f64,
    pub velocity: DVec2,
}

/// Index of the first live body overlapping `bodies[index]`.
///
/// Bodies at exactly the same position are skipped, matching the force
/// accumulation rule. Touching counts as overlapping.
pub fn find_partner(index: usize, bodies: &[Body]) -> Option<usize> {
    let subject = &bodies[index];

    bodies.iter().position(|other| {
        !other.is_dead()
            && other.position != subject.position
            && subject.distance_to(other) <= other.radius + subject.radius
    })
}

/// Merge of `absorber` and `absorbed`, if `absorber` is at least as heavy.
///
/// Radii add linearly and momentum is conserved using the live velocities.
/// The merged mass saturates at `u64::MAX`; the velocity is taken from the
/// exact (floating point) mass sum so it stays the momentum-weighted mean.
pub fn resolve(absorber: &Body, absorbed: &Body) -> Option<Merge> {
    if absorber.mass < absorbed.mass {
        return None;
    }

    let total = absorber.mass.saturating_add(absorbed.mass);
    let velocity = (absorber.momentum() + absorbed.momentum())
        / (absorber.mass as f64 + absorbed.mass as f64);

    Some(Merge {
        mass: total,
        radius: absorbed.radius + absorber.radius,
        velocity,
    })
}

/// Resource tracking merges for display collaborators.
#[derive(Resource, Default, Debug)]
pub struct CollisionState {
    /// Most recent merge, if any.
    pub last_merge: Option<MergeEvent>,
    /// Number of merges since the last reset.
    pub total_merges: u64,
}

impl CollisionState {
    pub fn clear(&mut self) {
        self.last_merge = None;
        self.total_merges = 0;
    }

    pub fn has_merged(&self) -> bool {
        self.last_merge.is_some()
    }
}

fn record_merges(mut merges: MessageReader<MergeEvent>, mut state: ResMut<CollisionState>) {
    for merge in merges.read() {
        info!(
            "Body {} absorbed body {} (mass {}, radius {:.1})",
            merge.absorber.0, merge.absorbed.0, merge.mass, merge.radius,
        );
        state.total_merges += 1;
        state.last_merge = Some(merge.clone());
    }
}

/// Plugin registering merge messages and bookkeeping.
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MergeEvent>()
            .init_resource::<CollisionState>()
            .add_systems(Update, record_merges);
    }
}
