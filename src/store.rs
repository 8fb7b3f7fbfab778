use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::model::Signature;

/// Write the extracted API as a pretty-printed JSON array.
pub fn save_api(path: &Path, api: &[Signature]) -> Result<()> {
    let json = serde_json::to_string_pretty(api)?;
    write_artifact(path, &json)?;
    info!("Saved {} signatures to {}", api.len(), path.display());
    Ok(())
}

pub fn load_api(path: &Path) -> Result<Vec<Signature>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let api = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed API extract at {}", path.display()))?;
    Ok(api)
}

/// Write a file, creating parent directories as needed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
