//! Physics domain: the per-tick integrator.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{AnimationPlayer, ClipId};
use crate::fighter::{Action, Fighter, FighterLanded, FighterState, FighterTuning};
use crate::physics::components::Velocity;
use crate::stage::StageTuning;

/// Advance the fighter one tick and clamp it to the stage.
pub(crate) fn integrate_fighter(
    tuning: Res<FighterTuning>,
    stage: Res<StageTuning>,
    mut landings: MessageWriter<FighterLanded>,
    mut fighters: Query<
        (
            &mut Transform,
            &mut Velocity,
            &mut FighterState,
            &mut AnimationPlayer,
        ),
        With<Fighter>,
    >,
) {
    let Ok((mut transform, mut velocity, mut state, mut player)) = fighters.single_mut() else {
        return;
    };

    let landed = step_fighter(
        &tuning,
        &stage,
        &mut transform.translation,
        &mut velocity,
        &mut state,
        &mut player,
    );
    if landed {
        landings.write(FighterLanded);
    }
}

/// One integration step. Returns true on the tick the fighter lands.
///
/// Horizontal motion always applies and clamps to the walkable band. Gravity
/// only acts while airborne; a grounded fighter never accumulates fall speed.
/// Crossing the ground line snaps to it, and landing mid-attack does not cut
/// the attack short.
pub(crate) fn step_fighter(
    tuning: &FighterTuning,
    stage: &StageTuning,
    position: &mut Vec3,
    velocity: &mut Velocity,
    state: &mut FighterState,
    player: &mut AnimationPlayer,
) -> bool {
    position.x = (position.x + velocity.0.x).clamp(stage.min_x(), stage.max_x());

    if state.grounded {
        return false;
    }

    velocity.0.y -= tuning.gravity;
    position.y += velocity.0.y;

    if position.y > stage.ground_y {
        return false;
    }

    position.y = stage.ground_y;
    velocity.0.y = 0.0;
    state.grounded = true;
    if !state.action.is_attacking() {
        state.action = Action::Idle;
        // play() keeps phase when Idle is already selected (a lockout can
        // expire midair); landing restarts the clip either way.
        player.play(ClipId::Idle);
        player.reset();
    }
    true
}
