//! Animation domain: playback state.

use bevy::prelude::*;
use std::time::Duration;

use crate::animation::clips::{AnimationClip, ClipId};

/// Marker for the child entity that carries the fighter's sprite. Frame
/// index and mirroring are pushed onto it every frame; clip data itself is
/// never touched.
#[derive(Component, Debug)]
pub struct SpriteRig;

/// Playback state for one entity's current clip.
#[derive(Component, Debug)]
pub struct AnimationPlayer {
    pub clip: ClipId,
    /// Position within the clip's frame list.
    pub frame: usize,
    /// Time accumulated toward the next frame advance.
    pub elapsed: Duration,
}

impl AnimationPlayer {
    pub fn new(clip: ClipId) -> Self {
        Self {
            clip,
            frame: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Switch clips, restarting playback only if the clip actually changed.
    /// Re-selecting the active clip every tick is therefore harmless.
    pub fn play(&mut self, clip: ClipId) {
        if self.clip != clip {
            self.clip = clip;
            self.reset();
        }
    }

    /// Restart the current clip from its first frame.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.elapsed = Duration::ZERO;
    }

    /// Accumulate `delta` and advance whole frames, carrying the remainder.
    pub fn advance(&mut self, delta: Duration, clip: &AnimationClip) {
        self.elapsed += delta;
        while self.elapsed >= clip.frame_time {
            self.elapsed -= clip.frame_time;
            self.frame = (self.frame + 1) % clip.frame_count();
        }
    }

    /// Atlas index of the frame currently on screen.
    pub fn atlas_index(&self, clip: &AnimationClip) -> usize {
        clip.frames[self.frame.min(clip.frame_count() - 1)]
    }
}
