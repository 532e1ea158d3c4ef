//! Core domain: tick counter resource.

use bevy::prelude::*;

/// Monotonic count of completed gameplay ticks.
///
/// Buffered input events are stamped with this value, so event ages are
/// exact tick differences regardless of render frame rate.
#[derive(Resource, Debug, Default)]
pub struct TickClock {
    pub tick: u64,
}

impl TickClock {
    pub fn now(&self) -> u64 {
        self.tick
    }
}
