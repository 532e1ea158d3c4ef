//! Fighter domain: gameplay messages.

use bevy::ecs::message::Message;

use crate::fighter::components::AttackKind;

/// Emitted on the tick an attack's lockout begins.
#[derive(Debug)]
pub struct AttackStarted {
    pub kind: AttackKind,
}

impl Message for AttackStarted {}

/// Emitted on the tick the fighter touches back down on the ground.
#[derive(Debug)]
pub struct FighterLanded;

impl Message for FighterLanded {}
