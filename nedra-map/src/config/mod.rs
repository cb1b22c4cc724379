//! Palette configuration
//!
//! Marker colors are configuration data, not logic: they load from an
//! embedded preset or from a user-supplied JSON file with the same shape.

use std::path::Path;

use anyhow::{Context, Result};

use nedra::Palette;

/// Loads a palette from a preset name or a path to a JSON file.
///
/// `source` is tried as a preset name first (`default`), then as a path.
pub fn load_palette(source: &str) -> Result<Palette> {
    match source {
        "default" => load_embedded(include_str!("presets/default.json")),
        path => load_file(Path::new(path)),
    }
}

fn load_embedded(json: &str) -> Result<Palette> {
    serde_json::from_str(json).context("Failed to parse embedded palette preset")
}

fn load_file(path: &Path) -> Result<Palette> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read palette file: {}", path.display()))?;

    serde_json::from_str(&content).context("Failed to parse palette JSON")
}
