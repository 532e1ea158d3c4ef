//! Physics domain: components.

use bevy::prelude::*;

/// Velocity in pixels per tick. X is commanded by the fighter every tick;
/// Y belongs to the integrator once airborne.
#[derive(Component, Debug, Default)]
pub struct Velocity(pub Vec2);
