//! Physics domain: single-axis gravity and stage clamping.

mod components;
mod systems;


pub use components::Velocity;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::physics::systems::integrate_fighter;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, integrate_fighter.in_set(TickSet::Integrate));
    }
}
