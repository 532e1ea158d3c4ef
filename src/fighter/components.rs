//! Fighter domain: state machine data.

use bevy::prelude::*;

use crate::animation::ClipId;
use crate::input::Button;

/// Marker for the player-controlled fighter.
#[derive(Component, Debug)]
pub struct Fighter;

/// Which way the fighter faces. Drawing mirrors and gestures re-aim off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// The direction button that counts as "forward" for motion inputs.
    pub fn forward(self) -> Button {
        match self {
            Facing::Right => Button::Right,
            Facing::Left => Button::Left,
        }
    }

    /// Sheet frames face right; mirror when facing left.
    pub fn flips_x(self) -> bool {
        matches!(self, Facing::Left)
    }
}

/// The five attacks, each with a fixed lockout and clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Punch,
    Kick,
    CrouchPunch,
    CrouchKick,
    Shoryuken,
}

impl AttackKind {
    /// Ticks the fighter stays locked into the attack.
    pub fn duration_ticks(self) -> u32 {
        match self {
            AttackKind::Punch => 18,
            AttackKind::Kick => 18,
            AttackKind::CrouchPunch => 18,
            AttackKind::CrouchKick => 30,
            AttackKind::Shoryuken => 48,
        }
    }

    pub fn clip(self) -> ClipId {
        match self {
            AttackKind::Punch => ClipId::Punch,
            AttackKind::Kick => ClipId::Kick,
            AttackKind::CrouchPunch => ClipId::CrouchPunch,
            AttackKind::CrouchKick => ClipId::CrouchKick,
            AttackKind::Shoryuken => ClipId::Shoryuken,
        }
    }
}

/// What the fighter is doing this tick. `Attacking` is a hard lockout; no
/// other action can start until `frames_left` runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Idle,
    Crouch,
    Attacking {
        kind: AttackKind,
        /// Remaining lockout. Always entered at `kind.duration_ticks()`.
        frames_left: u32,
    },
    Jumping,
}

impl Action {
    pub fn is_attacking(&self) -> bool {
        matches!(self, Action::Attacking { .. })
    }
}

/// The fighter's resolved state. One instance for the lifetime of the app.
#[derive(Component, Debug)]
pub struct FighterState {
    pub action: Action,
    pub facing: Facing,
    pub grounded: bool,
}

impl Default for FighterState {
    fn default() -> Self {
        Self {
            action: Action::Idle,
            facing: Facing::Right,
            grounded: true,
        }
    }
}
