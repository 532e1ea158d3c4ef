//! Core domain: fixed-tick clock and schedule wiring.

mod resources;
mod sets;
mod systems;


pub use resources::TickClock;
pub use sets::TickSet;

use bevy::prelude::*;

use crate::core::systems::advance_tick_clock;

/// Fixed gameplay rate. Velocities across the crate are in pixels per tick.
pub const TICK_RATE_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .init_resource::<TickClock>()
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Clock,
                    TickSet::Sample,
                    TickSet::Resolve,
                    TickSet::Integrate,
                    TickSet::Present,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, advance_tick_clock.in_set(TickSet::Clock));
    }
}
