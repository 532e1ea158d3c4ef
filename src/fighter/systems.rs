//! Fighter domain: per-tick action resolution.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{AnimationPlayer, ClipId};
use crate::fighter::components::{Action, AttackKind, Facing, Fighter, FighterState};
use crate::fighter::events::{AttackStarted, FighterLanded};
use crate::fighter::resources::FighterTuning;
use crate::input::{Button, FighterInput, InputBuffer, shoryuken_input};
use crate::physics::Velocity;

/// Resolve the fighter's action for this tick. Sole writer of `FighterState`,
/// the attack clock, and the commanded velocity.
pub(crate) fn resolve_fighter(
    tuning: Res<FighterTuning>,
    input: Res<FighterInput>,
    mut buffer: ResMut<InputBuffer>,
    mut attacks: MessageWriter<AttackStarted>,
    mut fighters: Query<(&mut FighterState, &mut Velocity, &mut AnimationPlayer), With<Fighter>>,
) {
    let Ok((mut state, mut velocity, mut player)) = fighters.single_mut() else {
        return;
    };

    if let Some(kind) = apply_tick(
        &tuning,
        &input,
        &mut buffer,
        &mut state,
        &mut velocity,
        &mut player,
    ) {
        attacks.write(AttackStarted { kind });
    }
}

/// One tick of the priority ladder. Returns the attack that started, if any.
///
/// Order matters and the first match wins: lockout, special, crouch branch,
/// standing attacks, jump, then horizontal movement. Jump deliberately does
/// not return, so a jump picks up horizontal speed resolved the same tick.
pub(crate) fn apply_tick(
    tuning: &FighterTuning,
    input: &FighterInput,
    buffer: &mut InputBuffer,
    state: &mut FighterState,
    velocity: &mut Velocity,
    player: &mut AnimationPlayer,
) -> Option<AttackKind> {
    // Lockout: an attack in progress consumes the whole tick. Velocity is
    // left alone, so an attack started while moving keeps sliding.
    if let Action::Attacking { frames_left, .. } = &mut state.action {
        *frames_left = frames_left.saturating_sub(1);
        if *frames_left == 0 {
            state.action = Action::Idle;
            player.play(ClipId::Idle);
        }
        return None;
    }

    let crouching = state.grounded && input.held(Button::Down);

    // Special move. Grounded only; launches upward and forfeits the buffer.
    if state.grounded && shoryuken_input(buffer, state.facing.forward()) {
        begin_attack(state, player, AttackKind::Shoryuken);
        velocity.0.y = tuning.jump_speed * tuning.special_launch_boost;
        state.grounded = false;
        buffer.clear();
        return Some(AttackKind::Shoryuken);
    }

    // Crouch branch, exclusive of everything below it.
    if crouching {
        if input.just_pressed(Button::Punch) {
            begin_attack(state, player, AttackKind::CrouchPunch);
            return Some(AttackKind::CrouchPunch);
        }
        if input.just_pressed(Button::Kick) {
            begin_attack(state, player, AttackKind::CrouchKick);
            return Some(AttackKind::CrouchKick);
        }
        state.action = Action::Crouch;
        player.play(ClipId::Crouch);
        velocity.0.x = 0.0;
        return None;
    }

    // Standing attacks.
    if state.grounded {
        if input.just_pressed(Button::Punch) {
            begin_attack(state, player, AttackKind::Punch);
            return Some(AttackKind::Punch);
        }
        if input.just_pressed(Button::Kick) {
            begin_attack(state, player, AttackKind::Kick);
            return Some(AttackKind::Kick);
        }
    }

    // Jump. Falls through: horizontal input below still applies this tick.
    if state.grounded && input.just_pressed(Button::Up) {
        velocity.0.y = tuning.jump_speed;
        state.grounded = false;
        state.action = Action::Jumping;
        player.play(ClipId::Jump);
    }

    // Horizontal movement, which doubles as airborne steering.
    if input.held(Button::Left) {
        velocity.0.x = -tuning.move_speed;
        state.facing = Facing::Left;
    } else if input.held(Button::Right) {
        velocity.0.x = tuning.move_speed;
        state.facing = Facing::Right;
    } else {
        velocity.0.x = 0.0;
    }

    // Re-select Idle on every grounded non-attacking tick. `play` keeps the
    // phase when the clip is unchanged, and this restores Idle after a crouch
    // release. There is no separate walk clip; walking shows Idle.
    if state.grounded && !state.action.is_attacking() {
        state.action = Action::Idle;
        player.play(ClipId::Idle);
    }

    None
}

/// The one shared attack entry: set the lockout, switch and restart the clip.
fn begin_attack(state: &mut FighterState, player: &mut AnimationPlayer, kind: AttackKind) {
    state.action = Action::Attacking {
        kind,
        frames_left: kind.duration_ticks(),
    };
    player.play(kind.clip());
    player.reset();
}

/// Log gameplay messages as they happen.
pub(crate) fn log_fighter_events(
    mut attacks: MessageReader<AttackStarted>,
    mut landings: MessageReader<FighterLanded>,
) {
    for attack in attacks.read() {
        info!("Attack started: {:?}", attack.kind);
    }
    for _ in landings.read() {
        debug!("Fighter touched down");
    }
}
