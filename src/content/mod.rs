//! Content domain: loading of tuning and sprite manifest files.

mod loader;
mod manifest;


pub use loader::TuningFile;
pub use manifest::ClipManifest;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::{load_manifest, load_tuning};

const TUNING_PATH: &str = "assets/data/tuning.ron";
const MANIFEST_PATH: &str = "assets/sprites/clips.json";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClipManifest>()
            .add_systems(PreStartup, load_content);
    }
}

/// Read tuning and the clip manifest from disk, falling back to compiled-in
/// defaults when a file is missing or malformed. The shipped files mirror the
/// defaults exactly.
pub fn load_content(mut commands: Commands) {
    let tuning = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded tuning from {TUNING_PATH}");
            tuning
        }
        Err(err) => {
            warn!("{err}; using built-in tuning");
            TuningFile::default()
        }
    };
    commands.insert_resource(tuning.fighter);
    commands.insert_resource(tuning.stage);

    let manifest = match load_manifest(Path::new(MANIFEST_PATH)) {
        Ok(manifest) => {
            info!("Loaded clip manifest from {MANIFEST_PATH}");
            manifest
        }
        Err(err) => {
            warn!("{err}; using built-in clip table");
            ClipManifest::default()
        }
    };
    commands.insert_resource(manifest);
}
