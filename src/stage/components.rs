//! Stage domain: components.

use bevy::prelude::*;

/// Marks the camera that trails the fighter horizontally.
#[derive(Component, Debug)]
pub struct CameraFollow {
    pub damping: f32,
}
