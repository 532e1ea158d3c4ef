//! Fighter domain: tests for the per-tick priority ladder.

use bevy::prelude::Vec2;

use super::components::{Action, AttackKind, Facing, FighterState};
use super::resources::FighterTuning;
use super::systems::apply_tick;
use crate::animation::{AnimationPlayer, ClipId};
use crate::input::{Button, BufferedPress, ButtonStates, FighterInput, InputBuffer};
use crate::physics::Velocity;

/// Everything one resolve tick touches, wired the way the schedule wires it:
/// input snapshot first, buffer recording second, ladder last.
struct Sim {
    tuning: FighterTuning,
    input: FighterInput,
    buffer: InputBuffer,
    state: FighterState,
    velocity: Velocity,
    player: AnimationPlayer,
    now: u64,
}

impl Sim {
    fn new() -> Self {
        Self {
            tuning: FighterTuning::default(),
            input: FighterInput::default(),
            buffer: InputBuffer::default(),
            state: FighterState::default(),
            velocity: Velocity(Vec2::ZERO),
            player: AnimationPlayer::new(ClipId::Idle),
            now: 0,
        }
    }

    fn tick(&mut self, held: &[Button]) -> Option<AttackKind> {
        let now = self.now + 1;
        self.tick_at(now, held)
    }

    fn tick_at(&mut self, now: u64, held: &[Button]) -> Option<AttackKind> {
        self.now = now;
        self.input.begin_tick(states(held));
        self.buffer.on_tick(&self.input, now);
        apply_tick(
            &self.tuning,
            &self.input,
            &mut self.buffer,
            &mut self.state,
            &mut self.velocity,
            &mut self.player,
        )
    }
}

fn states(held: &[Button]) -> ButtonStates {
    let mut states = ButtonStates::default();
    for &button in held {
        match button {
            Button::Up => states.up = true,
            Button::Down => states.down = true,
            Button::Left => states.left = true,
            Button::Right => states.right = true,
            Button::Punch => states.punch = true,
            Button::Kick => states.kick = true,
        }
    }
    states
}

// ----- Movement -----

#[test]
fn test_walking_right_holds_speed_and_facing() {
    let mut sim = Sim::new();
    let mut x = 250.0;
    for _ in 0..5 {
        assert_eq!(sim.tick(&[Button::Right]), None);
        assert_eq!(sim.velocity.0.x, sim.tuning.move_speed);
        assert_eq!(sim.state.facing, Facing::Right);
        assert_eq!(sim.state.action, Action::Idle);
        assert_eq!(sim.player.clip, ClipId::Idle);
        x += sim.velocity.0.x;
    }
    assert_eq!(x, 250.0 + 5.0 * sim.tuning.move_speed);
}

#[test]
fn test_facing_persists_after_movement_releases() {
    let mut sim = Sim::new();
    sim.tick(&[Button::Left]);
    assert_eq!(sim.state.facing, Facing::Left);
    assert_eq!(sim.velocity.0.x, -sim.tuning.move_speed);

    sim.tick(&[]);
    assert_eq!(sim.state.facing, Facing::Left);
    assert_eq!(sim.velocity.0.x, 0.0);
    assert_eq!(sim.state.action, Action::Idle);
}

// ----- Attacks and lockout -----

#[test]
fn test_attack_lockout_table() {
    assert_eq!(AttackKind::Punch.duration_ticks(), 18);
    assert_eq!(AttackKind::Kick.duration_ticks(), 18);
    assert_eq!(AttackKind::CrouchPunch.duration_ticks(), 18);
    assert_eq!(AttackKind::CrouchKick.duration_ticks(), 30);
    assert_eq!(AttackKind::Shoryuken.duration_ticks(), 48);
    assert_eq!(AttackKind::Punch.clip(), ClipId::Punch);
    assert_eq!(AttackKind::CrouchKick.clip(), ClipId::CrouchKick);
}

#[test]
fn test_attack_locks_out_every_other_action() {
    let mut sim = Sim::new();
    sim.velocity.0.x = 3.0;
    assert_eq!(sim.tick(&[Button::Punch]), Some(AttackKind::Punch));
    assert_eq!(sim.player.clip, ClipId::Punch);

    // Mash everything for 17 ticks; the lockout eats it all and the attack
    // clock strictly counts down. Velocity and facing are untouched, so the
    // punch started while sliding keeps sliding.
    let mut seen = Vec::new();
    for _ in 0..17 {
        let started = sim.tick(&[Button::Left, Button::Down, Button::Up, Button::Kick]);
        assert_eq!(started, None);
        let Action::Attacking { kind, frames_left } = sim.state.action else {
            panic!("lockout ended early");
        };
        assert_eq!(kind, AttackKind::Punch);
        seen.push(frames_left);
        assert_eq!(sim.velocity.0.x, 3.0);
        assert_eq!(sim.state.facing, Facing::Right);
    }
    assert_eq!(seen, (1..=17).rev().collect::<Vec<_>>());

    // The 18th tick clears it.
    assert_eq!(sim.tick(&[]), None);
    assert_eq!(sim.state.action, Action::Idle);
    assert_eq!(sim.player.clip, ClipId::Idle);
}

#[test]
fn test_starting_an_attack_restarts_its_clip() {
    let mut sim = Sim::new();
    sim.player.frame = 2;
    sim.tick(&[Button::Punch]);
    assert_eq!(sim.player.clip, ClipId::Punch);
    assert_eq!(sim.player.frame, 0);
}

#[test]
fn test_standing_attacks_require_ground() {
    let mut sim = Sim::new();
    sim.state.grounded = false;
    sim.state.action = Action::Jumping;
    assert_eq!(sim.tick(&[Button::Punch]), None);
    assert_eq!(sim.tick(&[Button::Kick]), None);
    assert_eq!(sim.state.action, Action::Jumping);
}

// ----- Crouching -----

#[test]
fn test_crouch_pose_zeroes_horizontal_speed() {
    let mut sim = Sim::new();
    sim.tick(&[Button::Right]);
    assert_eq!(sim.velocity.0.x, sim.tuning.move_speed);

    sim.tick(&[Button::Down, Button::Right]);
    assert_eq!(sim.state.action, Action::Crouch);
    assert_eq!(sim.velocity.0.x, 0.0);
    assert_eq!(sim.player.clip, ClipId::Crouch);
}

#[test]
fn test_crouch_punch_then_pose_resumes() {
    let mut sim = Sim::new();
    sim.tick(&[Button::Down]);
    assert_eq!(sim.state.action, Action::Crouch);

    let started = sim.tick(&[Button::Down, Button::Punch]);
    assert_eq!(started, Some(AttackKind::CrouchPunch));
    assert_eq!(sim.player.clip, ClipId::CrouchPunch);

    for _ in 0..18 {
        assert_eq!(sim.tick(&[Button::Down]), None);
    }
    assert_eq!(sim.state.action, Action::Idle);

    // Down is still held, so the next tick drops back into the pose.
    sim.tick(&[Button::Down]);
    assert_eq!(sim.state.action, Action::Crouch);
}

#[test]
fn test_crouch_kick_has_the_long_lockout() {
    let mut sim = Sim::new();
    sim.tick(&[Button::Down]);
    let started = sim.tick(&[Button::Down, Button::Kick]);
    assert_eq!(started, Some(AttackKind::CrouchKick));
    assert!(matches!(
        sim.state.action,
        Action::Attacking {
            kind: AttackKind::CrouchKick,
            frames_left: 30,
        }
    ));
}

// ----- Jumping -----

#[test]
fn test_jump_picks_up_horizontal_speed_the_same_tick() {
    let mut sim = Sim::new();
    assert_eq!(sim.tick(&[Button::Up, Button::Left]), None);
    assert_eq!(sim.state.action, Action::Jumping);
    assert!(!sim.state.grounded);
    assert_eq!(sim.velocity.0.y, sim.tuning.jump_speed);
    assert_eq!(sim.velocity.0.x, -sim.tuning.move_speed);
    assert_eq!(sim.state.facing, Facing::Left);
    assert_eq!(sim.player.clip, ClipId::Jump);
}

#[test]
fn test_airborne_steering_keeps_the_jump_animation() {
    let mut sim = Sim::new();
    sim.tick(&[Button::Up]);
    sim.tick(&[Button::Right]);
    assert_eq!(sim.velocity.0.x, sim.tuning.move_speed);
    assert_eq!(sim.state.action, Action::Jumping);
    assert_eq!(sim.player.clip, ClipId::Jump);

    // No crouching or attacking in the air.
    assert_eq!(sim.tick(&[Button::Down, Button::Punch]), None);
    assert_eq!(sim.state.action, Action::Jumping);
}

// ----- Shoryuken -----

#[test]
fn test_shoryuken_fires_from_raw_taps() {
    let mut sim = Sim::new();
    sim.tick(&[Button::Right]);
    sim.tick(&[]);
    sim.tick(&[Button::Down]);
    sim.tick(&[]);
    sim.tick(&[Button::Right]);
    sim.tick(&[]);
    let started = sim.tick(&[Button::Punch]);

    assert_eq!(started, Some(AttackKind::Shoryuken));
    assert_eq!(sim.player.clip, ClipId::Shoryuken);
    assert!(matches!(
        sim.state.action,
        Action::Attacking {
            kind: AttackKind::Shoryuken,
            frames_left: 48,
        }
    ));
    assert_eq!(
        sim.velocity.0.y,
        sim.tuning.jump_speed * sim.tuning.special_launch_boost
    );
    assert!(!sim.state.grounded);
    assert!(sim.buffer.is_empty(), "firing forfeits the buffer");
}

#[test]
fn test_shoryuken_keeps_horizontal_slide() {
    let mut sim = Sim::new();
    sim.buffer.push(BufferedPress { button: Button::Right, tick: 10 });
    sim.buffer.push(BufferedPress { button: Button::Down, tick: 11 });
    sim.buffer.push(BufferedPress { button: Button::Right, tick: 12 });
    sim.buffer.push(BufferedPress { button: Button::Punch, tick: 13 });
    sim.velocity.0.x = sim.tuning.move_speed;
    sim.now = 13;

    let started = sim.tick_at(14, &[]);
    assert_eq!(started, Some(AttackKind::Shoryuken));
    assert_eq!(sim.velocity.0.x, sim.tuning.move_speed);
}

#[test]
fn test_shoryuken_outranks_the_standing_punch() {
    let mut sim = Sim::new();
    sim.tick(&[Button::Right]);
    sim.tick(&[]);
    sim.tick(&[Button::Down]);
    sim.tick(&[]);
    sim.tick(&[Button::Right]);
    sim.tick(&[]);

    // The same punch edge that completes the motion would also start a
    // standing punch; the special wins.
    let started = sim.tick(&[Button::Punch]);
    assert_eq!(started, Some(AttackKind::Shoryuken));
}

#[test]
fn test_shoryuken_mirrors_when_facing_left() {
    let mut sim = Sim::new();
    sim.tick(&[Button::Left]);
    sim.tick(&[]);
    sim.tick(&[Button::Down]);
    sim.tick(&[]);
    sim.tick(&[Button::Left]);
    sim.tick(&[]);
    let started = sim.tick(&[Button::Punch]);
    assert_eq!(started, Some(AttackKind::Shoryuken));
}

#[test]
fn test_stale_motion_falls_back_to_a_plain_punch() {
    let mut sim = Sim::new();
    sim.tick_at(1, &[Button::Right]);
    sim.tick_at(2, &[]);
    sim.tick_at(3, &[Button::Down]);
    sim.tick_at(4, &[]);
    sim.tick_at(5, &[Button::Right]);
    sim.tick_at(6, &[]);

    // The punch lands after every direction press aged out of the window.
    let started = sim.tick_at(40, &[Button::Punch]);
    assert_eq!(started, Some(AttackKind::Punch));
}

#[test]
fn test_shoryuken_requires_ground() {
    let mut sim = Sim::new();
    sim.buffer.push(BufferedPress { button: Button::Right, tick: 10 });
    sim.buffer.push(BufferedPress { button: Button::Down, tick: 11 });
    sim.buffer.push(BufferedPress { button: Button::Right, tick: 12 });
    sim.buffer.push(BufferedPress { button: Button::Punch, tick: 13 });
    sim.state.grounded = false;
    sim.state.action = Action::Jumping;
    sim.now = 13;

    assert_eq!(sim.tick_at(14, &[]), None);
    assert!(!sim.buffer.is_empty(), "a miss keeps the buffer");
}
