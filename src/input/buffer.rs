//! Input domain: time-windowed log of directional presses.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::input::resources::{Button, FighterInput};

/// Ticks a press stays eligible for gesture matching.
pub const BUFFER_WINDOW_TICKS: u64 = 30;

/// Hard bound on retained presses. The age window keeps real buffers far
/// smaller; the cap only stops a skipped eviction from turning into
/// unbounded growth.
pub const BUFFER_CAP: usize = 32;

/// One recorded rising edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferedPress {
    pub button: Button,
    pub tick: u64,
}

/// Chronological log of recent directional presses, oldest first.
#[derive(Resource, Debug, Default)]
pub struct InputBuffer {
    presses: VecDeque<BufferedPress>,
}

impl InputBuffer {
    /// Append one entry per rising edge of the tracked buttons, then drop
    /// everything aged out of the window.
    pub fn on_tick(&mut self, input: &FighterInput, now: u64) {
        for button in Button::BUFFERED {
            if input.just_pressed(button) {
                self.push(BufferedPress { button, tick: now });
            }
        }
        self.expire(now);
        debug_assert!(self.presses.len() <= BUFFER_CAP);
    }

    pub(crate) fn push(&mut self, press: BufferedPress) {
        if self.presses.len() == BUFFER_CAP {
            self.presses.pop_front();
        }
        self.presses.push_back(press);
    }

    /// Drop presses with `now - tick >= BUFFER_WINDOW_TICKS`.
    pub fn expire(&mut self, now: u64) {
        self.presses
            .retain(|press| now.saturating_sub(press.tick) < BUFFER_WINDOW_TICKS);
    }

    pub fn clear(&mut self) {
        self.presses.clear();
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// The most recent `n` presses in chronological order.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &BufferedPress> {
        self.presses
            .iter()
            .skip(self.presses.len().saturating_sub(n))
    }

    /// All retained presses, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &BufferedPress> {
        self.presses.iter()
    }
}
