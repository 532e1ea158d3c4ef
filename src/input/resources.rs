//! Input domain: logical buttons and per-tick snapshots.

use bevy::prelude::*;

/// Logical buttons the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Punch,
    Kick,
}

impl Button {
    /// Buttons the press buffer records, in the order they are checked
    /// within a tick. Up and Kick feed the state machine directly and are
    /// never buffered.
    pub const BUFFERED: [Button; 4] = [Button::Down, Button::Left, Button::Right, Button::Punch];

    /// One-letter tag for overlays and logs.
    pub fn tag(self) -> char {
        match self {
            Button::Up => 'U',
            Button::Down => 'D',
            Button::Left => 'L',
            Button::Right => 'R',
            Button::Punch => 'P',
            Button::Kick => 'K',
        }
    }
}

/// Pressed-state of every logical button at one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStates {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub punch: bool,
    pub kick: bool,
}

impl ButtonStates {
    pub fn get(&self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Punch => self.punch,
            Button::Kick => self.kick,
        }
    }
}

/// Previous and current button snapshots for the active tick.
///
/// Edges are derived from these snapshots rather than from
/// `ButtonInput::just_pressed`, which is frame-scoped and can double-fire or
/// go missing inside `FixedUpdate` when zero or several fixed ticks run in
/// one render frame.
#[derive(Resource, Debug, Default)]
pub struct FighterInput {
    previous: ButtonStates,
    current: ButtonStates,
}

impl FighterInput {
    /// Roll the snapshot window forward one tick.
    pub fn begin_tick(&mut self, next: ButtonStates) {
        self.previous = self.current;
        self.current = next;
    }

    pub fn held(&self, button: Button) -> bool {
        self.current.get(button)
    }

    /// True only on the not-pressed to pressed transition.
    pub fn just_pressed(&self, button: Button) -> bool {
        self.current.get(button) && !self.previous.get(button)
    }
}
