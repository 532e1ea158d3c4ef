//! Fighter domain: numeric tuning.

use bevy::prelude::*;
use serde::Deserialize;

/// Motion constants, in pixels per tick against the 60 Hz lockstep.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FighterTuning {
    /// Walk speed while Left/Right is held.
    pub move_speed: f32,
    /// Upward velocity applied on jump.
    pub jump_speed: f32,
    /// Downward acceleration per airborne tick.
    pub gravity: f32,
    /// Multiplier on `jump_speed` for the shoryuken launch.
    pub special_launch_boost: f32,
}

impl Default for FighterTuning {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            jump_speed: 12.0,
            gravity: 0.5,
            special_launch_boost: 1.2,
        }
    }
}
