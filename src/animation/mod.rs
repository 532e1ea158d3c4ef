//! Animation domain: clip library, playback, and sprite presentation.

mod clips;
mod components;
mod systems;


pub use clips::ClipId;
pub use components::{AnimationPlayer, SpriteRig};

use bevy::prelude::*;

use crate::animation::systems::{advance_animations, build_library, sync_sprite_rig};
use crate::content::load_content;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, build_library.after(load_content))
            .add_systems(Update, (advance_animations, sync_sprite_rig).chain());
    }
}
