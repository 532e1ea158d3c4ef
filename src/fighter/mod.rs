//! Fighter domain: the character state machine and its spawn.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Action, AttackKind, Fighter, FighterState};
pub use events::{AttackStarted, FighterLanded};
pub use resources::FighterTuning;
#[cfg(test)]
pub(crate) use systems::apply_tick;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::fighter::bootstrap::spawn_fighter;
use crate::fighter::systems::{log_fighter_events, resolve_fighter};

pub struct FighterPlugin;

impl Plugin for FighterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FighterTuning>()
            .add_message::<AttackStarted>()
            .add_message::<FighterLanded>()
            .add_systems(Startup, spawn_fighter)
            .add_systems(FixedUpdate, resolve_fighter.in_set(TickSet::Resolve))
            .add_systems(Update, log_fighter_events);
    }
}
