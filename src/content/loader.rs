//! Loaders for tuning and manifest files at startup.

use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::content::manifest::ClipManifest;
use crate::fighter::FighterTuning;
use crate::stage::StageTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Both tuning tables, as stored in `assets/data/tuning.ron`. Either section
/// may be omitted and falls back to its compiled-in values.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct TuningFile {
    #[serde(default)]
    pub fighter: FighterTuning,
    #[serde(default)]
    pub stage: StageTuning,
}

/// Load a single RON struct.
fn load_ron_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

pub(crate) fn load_tuning(path: &Path) -> Result<TuningFile, ContentLoadError> {
    load_ron_file(path)
}

/// Load the sprite-sheet/clip manifest JSON.
pub(crate) fn load_manifest(path: &Path) -> Result<ClipManifest, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    serde_json::from_str(&contents).map_err(|e| ContentLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}
