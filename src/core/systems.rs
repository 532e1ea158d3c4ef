//! Core domain: tick bookkeeping.

use bevy::prelude::*;

use crate::core::resources::TickClock;

pub(crate) fn advance_tick_clock(mut clock: ResMut<TickClock>) {
    clock.tick += 1;
}
