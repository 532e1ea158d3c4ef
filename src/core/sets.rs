//! Core domain: fixed-tick system ordering.

use bevy::prelude::*;

/// Stages of one gameplay tick, chained in declaration order on `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Advance the tick counter.
    Clock,
    /// Snapshot raw input and feed the buffer.
    Sample,
    /// Resolve the fighter's action for this tick.
    Resolve,
    /// Step velocities and positions, handle ground contact.
    Integrate,
    /// Presentation reads (camera follow).
    Present,
}
