//! Stage domain: dressing and the lazy-follow camera.

use bevy::prelude::*;

use crate::fighter::Fighter;
use crate::stage::components::CameraFollow;
use crate::stage::resources::StageTuning;

/// Height of one sky gradient strip.
const SKY_STRIP_HEIGHT: f32 = 10.0;
/// Z layers for the dressing, behind the fighter.
const SKY_Z: f32 = -10.0;
const GROUND_Z: f32 = -5.0;

/// Spawn the camera, the banded sky, and the ground slab.
pub(crate) fn spawn_stage(mut commands: Commands, stage: Res<StageTuning>) {
    let start_x = follow_step(
        stage.spawn_x,
        stage.spawn_x,
        1.0,
        stage.camera_min_x(),
        stage.camera_max_x(),
    );
    commands.spawn((
        Camera2d,
        CameraFollow {
            damping: stage.camera_damping,
        },
        Transform::from_xyz(start_x, 0.0, 0.0),
    ));

    let view_top = stage.view_height / 2.0;
    let sky_height = view_top - stage.ground_y;
    let center_x = stage.world_width / 2.0;

    // Horizontal bands, dark at the top and brightening toward the horizon.
    let mut depth = 0.0;
    while depth < sky_height {
        let strip_height = SKY_STRIP_HEIGHT.min(sky_height - depth);
        commands.spawn((
            Sprite {
                color: sky_color(depth, sky_height),
                custom_size: Some(Vec2::new(stage.world_width, strip_height)),
                ..default()
            },
            Transform::from_xyz(center_x, view_top - depth - strip_height / 2.0, SKY_Z),
        ));
        depth += SKY_STRIP_HEIGHT;
    }

    // The dirt slab from the ground line down to the bottom of the view.
    let ground_depth = stage.view_height / 2.0 + stage.ground_y;
    commands.spawn((
        Sprite {
            color: Color::srgb_u8(139, 90, 43),
            custom_size: Some(Vec2::new(stage.world_width, ground_depth)),
            ..default()
        },
        Transform::from_xyz(center_x, stage.ground_y - ground_depth / 2.0, GROUND_Z),
    ));

    info!(
        "Stage dressed: {} wide, ground at y={}",
        stage.world_width, stage.ground_y
    );
}

/// Ease the camera toward the fighter, clamped so the view never leaves
/// the world.
pub(crate) fn follow_fighter(
    stage: Res<StageTuning>,
    fighters: Query<&Transform, (With<Fighter>, Without<CameraFollow>)>,
    mut cameras: Query<(&mut Transform, &CameraFollow)>,
) {
    let Ok(target) = fighters.single() else {
        return;
    };
    let Ok((mut camera, follow)) = cameras.single_mut() else {
        return;
    };
    camera.translation.x = follow_step(
        camera.translation.x,
        target.translation.x,
        follow.damping,
        stage.camera_min_x(),
        stage.camera_max_x(),
    );
}

/// One camera easing step: close `damping` of the gap, then clamp.
/// A view wider than the world pins the camera to the world center.
pub(crate) fn follow_step(current: f32, target: f32, damping: f32, min: f32, max: f32) -> f32 {
    if min > max {
        return (min + max) / 2.0;
    }
    (current + (target - current) * damping).clamp(min, max)
}

/// Sky strip color at `depth` pixels below the top of the sky. Brightness
/// runs 20 at the top to 120 at the horizon, weighted toward blue.
pub(crate) fn sky_color(depth: f32, sky_height: f32) -> Color {
    let brightness = 20.0 + (depth / sky_height) * 100.0;
    Color::srgb(
        brightness * 0.3 / 255.0,
        brightness * 0.5 / 255.0,
        brightness / 255.0,
    )
}
