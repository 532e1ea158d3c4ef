//! Input domain: shoryuken motion detection.
//!
//! The motion is forward, down, forward, punch, read facing-relative. Only
//! the most recent four buffered presses are scanned, forward-only, with
//! four sequential flags: a press that does not match the currently
//! expected flag is skipped, not rejected. A consequence is that one stray
//! press can push a completed motion out of the window; both edges of that
//! behavior are deliberate and pinned by tests.

use crate::input::buffer::InputBuffer;
use crate::input::resources::Button;

/// Presses the recognizer scans.
const MOTION_LEN: usize = 4;

/// True when the most recent buffered presses contain the shoryuken motion
/// for the given forward direction.
pub fn shoryuken_input(buffer: &InputBuffer, forward: Button) -> bool {
    if buffer.len() < MOTION_LEN {
        return false;
    }

    let mut saw_forward_1 = false;
    let mut saw_down = false;
    let mut saw_forward_2 = false;
    let mut saw_punch = false;

    for press in buffer.recent(MOTION_LEN) {
        if !saw_forward_1 {
            saw_forward_1 = press.button == forward;
        } else if !saw_down {
            saw_down = press.button == Button::Down;
        } else if !saw_forward_2 {
            saw_forward_2 = press.button == forward;
        } else if !saw_punch {
            saw_punch = press.button == Button::Punch;
        }
    }

    saw_forward_1 && saw_down && saw_forward_2 && saw_punch
}
