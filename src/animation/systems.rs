//! Animation domain: frame advance and sprite presentation.

use bevy::prelude::*;

use crate::animation::clips::AnimationLibrary;
use crate::animation::components::{AnimationPlayer, SpriteRig};
use crate::content::ClipManifest;
use crate::fighter::FighterState;

/// Build the clip library once the manifest resource is in place.
pub(crate) fn build_library(mut commands: Commands, manifest: Res<ClipManifest>) {
    commands.insert_resource(AnimationLibrary::from_manifest(&manifest));
}

/// Step every player by real elapsed time. Runs on `Update`; the fixed-tick
/// state machine only selects clips.
pub(crate) fn advance_animations(
    time: Res<Time>,
    library: Res<AnimationLibrary>,
    mut players: Query<&mut AnimationPlayer>,
) {
    for mut player in &mut players {
        let clip = library.clip(player.clip);
        player.advance(time.delta(), clip);
    }
}

/// Push the current frame and facing onto the child sprite. Mirroring is a
/// draw parameter here, not a property of the clip.
pub(crate) fn sync_sprite_rig(
    library: Res<AnimationLibrary>,
    fighters: Query<(&AnimationPlayer, &FighterState, &Children)>,
    mut rigs: Query<&mut Sprite, With<SpriteRig>>,
) {
    for (player, state, children) in &fighters {
        let clip = library.clip(player.clip);
        for child in children.iter() {
            let Ok(mut sprite) = rigs.get_mut(child) else {
                continue;
            };
            sprite.flip_x = state.facing.flips_x();
            if let Some(atlas) = sprite.texture_atlas.as_mut() {
                atlas.index = player.atlas_index(clip);
            }
        }
    }
}
