//! Sprite-sheet manifest: where the fighter sheet lives and how its cells
//! group into named clips.

use bevy::prelude::*;
use serde::Deserialize;

/// One clip's frame list and playback rate. Frames index cells on the sheet
/// row-major and may repeat.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClipDef {
    pub name: String,
    pub frames: Vec<usize>,
    pub fps: u32,
}

/// Layout of the fighter sheet plus the clip table.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClipManifest {
    /// Asset-relative path of the sheet image.
    pub sheet: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub clips: Vec<ClipDef>,
}

impl Default for ClipManifest {
    fn default() -> Self {
        let clip = |name: &str, frames: &[usize], fps: u32| ClipDef {
            name: name.to_string(),
            frames: frames.to_vec(),
            fps,
        };
        Self {
            sheet: "sprites/fighter.png".to_string(),
            frame_width: 80,
            frame_height: 128,
            columns: 6,
            rows: 6,
            clips: vec![
                clip("idle", &[0, 1, 2, 3], 6),
                clip("crouch", &[18], 6),
                clip("punch", &[4, 5, 6], 15),
                clip("kick", &[7, 8, 9], 15),
                clip("shoryuken", &[10, 11, 12, 13, 14, 15, 16, 17], 12),
                clip("crouch_punch", &[22, 23, 24], 15),
                clip("crouch_kick", &[18, 19, 20, 21, 18], 15),
                clip("jump", &[25, 26, 27, 28, 29, 30, 31], 10),
            ],
        }
    }
}

impl ClipManifest {
    pub fn clip(&self, name: &str) -> Option<&ClipDef> {
        self.clips.iter().find(|clip| clip.name == name)
    }
}
