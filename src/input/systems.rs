//! Input domain: sampling raw devices into per-tick snapshots.

use bevy::prelude::*;

use crate::core::TickClock;
use crate::input::buffer::InputBuffer;
use crate::input::resources::{ButtonStates, FighterInput};

/// Snapshot the keyboard and any connected gamepad into this tick's button
/// states. Everything downstream reads only the snapshots.
pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<FighterInput>,
) {
    let mut states = ButtonStates {
        up: keyboard.pressed(KeyCode::KeyW)
            || keyboard.pressed(KeyCode::ArrowUp)
            || keyboard.pressed(KeyCode::Space),
        down: keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
        punch: keyboard.pressed(KeyCode::KeyZ) || keyboard.pressed(KeyCode::KeyU),
        kick: keyboard.pressed(KeyCode::KeyX) || keyboard.pressed(KeyCode::KeyI),
    };

    for gamepad in &gamepads {
        states.up |= gamepad.pressed(GamepadButton::DPadUp);
        states.down |= gamepad.pressed(GamepadButton::DPadDown);
        states.left |= gamepad.pressed(GamepadButton::DPadLeft);
        states.right |= gamepad.pressed(GamepadButton::DPadRight);
        states.punch |= gamepad.pressed(GamepadButton::West);
        states.kick |= gamepad.pressed(GamepadButton::South);
    }

    input.begin_tick(states);
}

/// Record this tick's rising edges into the buffer and age out stale ones.
pub(crate) fn record_buffered_presses(
    clock: Res<TickClock>,
    input: Res<FighterInput>,
    mut buffer: ResMut<InputBuffer>,
) {
    buffer.on_tick(&input, clock.now());
}
