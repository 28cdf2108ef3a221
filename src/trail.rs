//! Bounded position history used by external renderers to draw trails.

use std::collections::VecDeque;

use bevy::math::DVec2;

/// Bounded FIFO of recent positions, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrailHistory {
    points: VecDeque<DVec2>,
}

impl TrailHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position, evicting the oldest entries beyond `capacity`.
    pub fn push(&mut self, position: DVec2, capacity: usize) {
        self.points.push_back(position);
        self.truncate(capacity);
    }

    /// Drop oldest entries until at most `capacity` remain.
    pub fn truncate(&mut self, capacity: usize) {
        while self.points.len() > capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }

    /// Most recently recorded position.
    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }
}
