//! Animation domain: clip definitions and the clip library.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::ClipManifest;

/// Named animation clips. Indexes into the `AnimationLibrary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipId {
    Idle,
    Crouch,
    Punch,
    Kick,
    Shoryuken,
    CrouchPunch,
    CrouchKick,
    Jump,
}

impl ClipId {
    /// Declaration order matches the library's storage order.
    pub const ALL: [ClipId; 8] = [
        ClipId::Idle,
        ClipId::Crouch,
        ClipId::Punch,
        ClipId::Kick,
        ClipId::Shoryuken,
        ClipId::CrouchPunch,
        ClipId::CrouchKick,
        ClipId::Jump,
    ];

    /// Name used by the clip manifest.
    pub fn name(self) -> &'static str {
        match self {
            ClipId::Idle => "idle",
            ClipId::Crouch => "crouch",
            ClipId::Punch => "punch",
            ClipId::Kick => "kick",
            ClipId::Shoryuken => "shoryuken",
            ClipId::CrouchPunch => "crouch_punch",
            ClipId::CrouchKick => "crouch_kick",
            ClipId::Jump => "jump",
        }
    }
}

/// An immutable frame sequence plus its per-frame duration.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Atlas indices, played in order with wraparound.
    pub frames: Vec<usize>,
    /// Time one frame stays on screen.
    pub frame_time: Duration,
}

impl AnimationClip {
    pub fn new(frames: Vec<usize>, fps: u32) -> Self {
        debug_assert!(!frames.is_empty(), "clips need at least one frame");
        debug_assert!(fps > 0, "clip fps must be nonzero");
        let micros = (1_000_000 / u64::from(fps.max(1))).max(1);
        Self {
            frames,
            frame_time: Duration::from_micros(micros),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// One clip per `ClipId`, built from the manifest at startup.
#[derive(Resource, Debug)]
pub struct AnimationLibrary {
    clips: [AnimationClip; ClipId::ALL.len()],
}

impl Default for AnimationLibrary {
    fn default() -> Self {
        Self::from_manifest(&ClipManifest::default())
    }
}

impl AnimationLibrary {
    /// Build the library from a manifest. Clips the manifest does not name,
    /// or defines with no frames or zero fps, fall back to the built-in
    /// table, so the library is always total and every clip is playable.
    pub fn from_manifest(manifest: &ClipManifest) -> Self {
        let fallback = ClipManifest::default();
        let clips = ClipId::ALL.map(|id| {
            let named = manifest.clip(id.name());
            let usable = named.filter(|def| !def.frames.is_empty() && def.fps > 0);
            if named.is_some() && usable.is_none() {
                warn!(
                    "clip '{}' has an empty frame list or zero fps, using the built-in table",
                    id.name()
                );
            }
            match usable.or_else(|| fallback.clip(id.name())) {
                Some(def) => AnimationClip::new(def.frames.clone(), def.fps),
                None => {
                    warn!("no clip definition named '{}', holding frame 0", id.name());
                    AnimationClip::new(vec![0], 1)
                }
            }
        });
        Self { clips }
    }

    pub fn clip(&self, id: ClipId) -> &AnimationClip {
        &self.clips[id as usize]
    }
}
