//! Stage domain: world bounds, dressing, and the follow camera.

mod components;
mod resources;
mod systems;


pub use resources::StageTuning;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::stage::systems::{follow_fighter, spawn_stage};

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StageTuning>()
            .add_systems(Startup, spawn_stage)
            .add_systems(FixedUpdate, follow_fighter.in_set(TickSet::Present));
    }
}
