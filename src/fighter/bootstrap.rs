//! Fighter domain: startup spawn.

use bevy::prelude::*;

use crate::animation::{AnimationPlayer, ClipId, SpriteRig};
use crate::content::ClipManifest;
use crate::fighter::components::{Fighter, FighterState};
use crate::physics::Velocity;
use crate::stage::StageTuning;

/// Z layer for the fighter, above the stage dressing.
const FIGHTER_Z: f32 = 10.0;

/// Spawn the fighter at the stage spawn point. The root entity carries the
/// gameplay state with its translation on the feet line; the sprite rig child
/// lifts the drawn frame so the feet meet the ground.
pub(crate) fn spawn_fighter(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    manifest: Res<ClipManifest>,
    stage: Res<StageTuning>,
) {
    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::new(manifest.frame_width, manifest.frame_height),
        manifest.columns,
        manifest.rows,
        None,
        None,
    ));
    let image: Handle<Image> = asset_server.load(manifest.sheet.clone());

    commands
        .spawn((
            Fighter,
            FighterState::default(),
            Velocity::default(),
            AnimationPlayer::new(ClipId::Idle),
            Transform::from_xyz(stage.spawn_x, stage.ground_y, FIGHTER_Z),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                SpriteRig,
                Sprite {
                    image,
                    texture_atlas: Some(TextureAtlas { layout, index: 0 }),
                    ..default()
                },
                Transform::from_xyz(0.0, manifest.frame_height as f32 / 2.0, 0.0),
            ));
        });

    info!(
        "Spawned fighter at x={} using sheet {}",
        stage.spawn_x, manifest.sheet
    );
}
