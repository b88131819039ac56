// ============================================================
// Layer 6 — JSON Persistence
// ============================================================
// Reads reader configs and writes read results as JSON.
//
// Files:
//   reader.json   ReaderConfig — which reader, which dataset
//   <output>.json SplitData    — {"train": [[text, label], ...], ...}
//
// Failures carry the offending path in their anyhow context.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::sample::SplitData;
use crate::infra::reader_registry::ReaderConfig;

/// Write `data` as pretty JSON to `path`, creating parent directories.
pub fn write_split_data(path: &Path, data: &SplitData) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write splits to '{}'", path.display()))?;

    tracing::debug!(
        "Wrote {} samples in {} splits to '{}'",
        data.total_samples(),
        data.len(),
        path.display()
    );
    Ok(())
}

/// Load a reader config block from a JSON file.
pub fn load_config(path: &Path) -> Result<ReaderConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read reader config from '{}'", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Invalid reader config in '{}'", path.display()))
}

/// Save a reader config block, e.g. to record what produced an output.
pub fn save_config(path: &Path, cfg: &ReaderConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write reader config to '{}'", path.display()))?;
    Ok(())
}
