// ============================================================
// Layer 2 — ReadUseCase
// ============================================================
// Runs one dataset read end to end:
//
//   Step 1: Build the ReaderConfig    (from a JSON file or flags)
//   Step 2: Build the named reader    (Layer 6 - infra)
//   Step 3: Read every split          (Layer 4 - data)
//   Step 4: Save the result as JSON   (Layer 6 - infra, optional)

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::request::{default_splits, ExtraOptions, ReadRequest, DEFAULT_SPLIT_SEED};
use crate::domain::sample::SplitData;
use crate::infra::output::{load_config, write_split_data};
use crate::infra::reader_registry::{ReaderConfig, ReaderRegistry, READER_NAME};
use crate::infra::seed::process_seed;

// ─── Read Configuration ───────────────────────────────────────────────────────
// Everything the `read` command can be told. When `config` is
// set the reader block is loaded from that file and the
// dataset flags are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadConfig {
    pub config:        Option<PathBuf>,
    pub data_path:     PathBuf,
    pub dataset_title: String,
    pub splits:        Vec<String>,
    pub valid_portion: Option<f64>,
    pub split_seed:    u64,
    pub stratified:    bool,
    pub extra:         ExtraOptions,
    pub output:        Option<PathBuf>,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            config:        None,
            data_path:     PathBuf::from("data"),
            dataset_title: "IMDB".to_string(),
            splits:        default_splits(),
            valid_portion: None,
            split_seed:    DEFAULT_SPLIT_SEED,
            stratified:    false,
            extra:         ExtraOptions::new(),
            output:        None,
        }
    }
}

impl ReadConfig {
    /// The reader config block these settings describe.
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        if let Some(path) = &self.config {
            tracing::info!("Loading reader config from '{}'", path.display());
            return load_config(path);
        }

        Ok(ReaderConfig::new(ReadRequest {
            data_path:     self.data_path.clone(),
            dataset_title: self.dataset_title.clone(),
            splits:        self.splits.clone(),
            valid_portion: self.valid_portion,
            split_seed:    self.split_seed,
            stratified:    self.stratified,
            extra:         self.extra.clone(),
        }))
    }
}

// ─── ReadUseCase ──────────────────────────────────────────────────────────────
pub struct ReadUseCase {
    config:  ReadConfig,
    readers: ReaderRegistry,
}

impl ReadUseCase {
    pub fn new(config: ReadConfig) -> Self {
        Self::with_registry(config, ReaderRegistry::with_defaults())
    }

    pub fn with_registry(config: ReadConfig, readers: ReaderRegistry) -> Self {
        Self { config, readers }
    }

    pub fn execute(&self) -> Result<SplitData> {
        // ── Step 1: Reader config ─────────────────────────────────────────────
        let reader_cfg = self.config.reader_config()?;
        let request    = &reader_cfg.request;

        if reader_cfg.class_name != READER_NAME {
            tracing::warn!("Using non-default reader '{}'", reader_cfg.class_name);
        }

        // ── Step 2: Build the reader ──────────────────────────────────────────
        let reader = self
            .readers
            .build(&reader_cfg.class_name)
            .context("Cannot build dataset reader")?;

        // ── Step 3: Read ──────────────────────────────────────────────────────
        tracing::info!(
            "Reading {} from '{}' (splits {:?}, process seed {:?})",
            request.dataset_title,
            request.data_path.display(),
            request.splits,
            process_seed(),
        );
        let data = reader
            .read(request)
            .with_context(|| format!("Failed to read dataset {}", request.dataset_title))?;

        // ── Step 4: Save ──────────────────────────────────────────────────────
        if let Some(out) = &self.config.output {
            write_split_data(out, &data)?;
            tracing::info!("Saved splits to '{}'", out.display());
        }

        Ok(data)
    }
}
