//! Input domain: button snapshots, the press buffer, and gesture scanning.

mod buffer;
mod gesture;
mod resources;
mod systems;


pub use buffer::InputBuffer;
pub use gesture::shoryuken_input;
pub use resources::{Button, FighterInput};
#[cfg(test)]
pub(crate) use buffer::BufferedPress;
#[cfg(test)]
pub(crate) use resources::ButtonStates;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::input::systems::{record_buffered_presses, sample_input};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FighterInput>()
            .init_resource::<InputBuffer>()
            .add_systems(
                FixedUpdate,
                (sample_input, record_buffered_presses)
                    .chain()
                    .in_set(TickSet::Sample),
            );
    }
}
