//! Stage domain: world and camera tuning.

use bevy::prelude::*;
use serde::Deserialize;

/// Stage geometry, all in world pixels. The world is wider than the view and
/// the camera pans across it.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StageTuning {
    pub world_width: f32,
    pub view_width: f32,
    pub view_height: f32,
    /// Y of the walkable ground line, in world space.
    pub ground_y: f32,
    /// Fighter keep-out margin at either end of the world.
    pub edge_margin: f32,
    pub spawn_x: f32,
    /// Fraction of the remaining gap the camera closes per tick.
    pub camera_damping: f32,
}

impl Default for StageTuning {
    fn default() -> Self {
        Self {
            world_width: 1280.0,
            view_width: 640.0,
            view_height: 448.0,
            ground_y: -116.0,
            edge_margin: 30.0,
            spawn_x: 250.0,
            camera_damping: 0.1,
        }
    }
}

impl StageTuning {
    /// Leftmost x the fighter may occupy.
    pub fn min_x(&self) -> f32 {
        self.edge_margin
    }

    /// Rightmost x the fighter may occupy.
    pub fn max_x(&self) -> f32 {
        self.world_width - self.edge_margin
    }

    /// Leftmost camera center that keeps the view inside the world.
    pub fn camera_min_x(&self) -> f32 {
        self.view_width / 2.0
    }

    /// Rightmost camera center that keeps the view inside the world.
    pub fn camera_max_x(&self) -> f32 {
        self.world_width - self.view_width / 2.0
    }
}
