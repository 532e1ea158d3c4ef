//! Debug overlay for tuning and input inspection.
//!
//! Features:
//! - Live fighter state readout (action, facing, velocity, position)
//! - Input buffer contents with press ages
//! - Last attack fired
//! - Warp back to the spawn point

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::TickClock;
use crate::fighter::{AttackKind, AttackStarted, Fighter, FighterState};
use crate::input::InputBuffer;
use crate::physics::Velocity;
use crate::stage::StageTuning;

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the overlay is visible
    pub overlay_visible: bool,
    /// Most recent attack, kept for the readout
    pub last_attack: Option<AttackKind>,
}

// ============================================================================
// Components
// ============================================================================

/// Marker for the overlay text root
#[derive(Component, Debug)]
pub struct DebugOverlay;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_overlay,
                handle_debug_hotkeys,
                track_last_attack,
                update_overlay,
            )
                .chain(),
        );
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Toggle the overlay with F1 or the backtick key
fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Ctrl+R: warp the fighter back to the spawn point
fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    stage: Res<StageTuning>,
    mut fighters: Query<(&mut Transform, &mut Velocity, &mut FighterState), With<Fighter>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !(ctrl && keyboard.just_pressed(KeyCode::KeyR)) {
        return;
    }

    let Ok((mut transform, mut velocity, mut state)) = fighters.single_mut() else {
        return;
    };
    transform.translation.x = stage.spawn_x;
    transform.translation.y = stage.ground_y;
    velocity.0 = Vec2::ZERO;
    *state = FighterState::default();
    info!("[DEBUG] Warped fighter to spawn");
}

/// Remember the most recent attack for the readout
fn track_last_attack(mut attacks: MessageReader<AttackStarted>, mut debug_state: ResMut<DebugState>) {
    for attack in attacks.read() {
        debug_state.last_attack = Some(attack.kind);
    }
}

/// Refresh the overlay text from live state
fn update_overlay(
    debug_state: Res<DebugState>,
    clock: Res<TickClock>,
    buffer: Res<InputBuffer>,
    fighters: Query<(&Transform, &Velocity, &FighterState), With<Fighter>>,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    if !debug_state.overlay_visible {
        return;
    }
    let Ok((transform, velocity, state)) = fighters.single() else {
        return;
    };
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };

    let now = clock.now();
    let presses = if buffer.is_empty() {
        "-".to_string()
    } else {
        buffer
            .iter()
            .map(|press| format!("{}@{}", press.button.tag(), now.saturating_sub(press.tick)))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let last_attack = debug_state
        .last_attack
        .map_or("-".to_string(), |kind| format!("{:?}", kind));

    **text = format!(
        "tick: {}\naction: {:?}  facing: {:?}  grounded: {}\npos: ({:.0}, {:.0})  vel: ({:.1}, {:.1})\nbuffer: {}\nlast attack: {}",
        now,
        state.action,
        state.facing,
        state.grounded,
        transform.translation.x,
        transform.translation.y,
        velocity.0.x,
        velocity.0.y,
        presses,
        last_attack,
    );
}

// ============================================================================
// UI Spawning Helpers
// ============================================================================

fn spawn_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new("..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
