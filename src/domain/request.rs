// ============================================================
// Layer 3 — ReadRequest
// ============================================================
// Everything a DatasetReader needs for one read:
//
//   data_path      root directory handed through to the provider
//   dataset_title  provider identifier, e.g. "IMDB"
//   splits         names assigned positionally to provider splits
//   valid_portion  fraction of train to hold out as "valid"
//                  (only when "valid" is not requested)
//   split_seed     seed for that hold-out shuffle
//   stratified     hold out the same fraction of every label
//   extra          any other options; accepted and ignored
//
// Deserialisable so a pipeline config can carry it verbatim;
// unknown keys land in `extra` instead of failing the parse.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options a reader accepts but does not interpret.
pub type ExtraOptions = BTreeMap<String, serde_json::Value>;

pub const DEFAULT_SPLIT_SEED: u64 = 42;

pub fn default_splits() -> Vec<String> {
    vec!["train".to_string(), "valid".to_string(), "test".to_string()]
}

fn default_split_seed() -> u64 {
    DEFAULT_SPLIT_SEED
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadRequest {
    pub data_path:     PathBuf,
    pub dataset_title: String,

    #[serde(default = "default_splits")]
    pub splits: Vec<String>,

    #[serde(default)]
    pub valid_portion: Option<f64>,

    #[serde(default = "default_split_seed")]
    pub split_seed: u64,

    #[serde(default)]
    pub stratified: bool,

    #[serde(flatten)]
    pub extra: ExtraOptions,
}

impl ReadRequest {
    /// A request with the default splits (train, valid, test),
    /// no hold-out, and split seed 42.
    pub fn new(data_path: impl Into<PathBuf>, dataset_title: impl Into<String>) -> Self {
        Self {
            data_path:     data_path.into(),
            dataset_title: dataset_title.into(),
            splits:        default_splits(),
            valid_portion: None,
            split_seed:    DEFAULT_SPLIT_SEED,
            stratified:    false,
            extra:         ExtraOptions::new(),
        }
    }

    pub fn with_splits<I, S>(mut self, splits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.splits = splits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_valid_portion(mut self, portion: f64) -> Self {
        self.valid_portion = Some(portion);
        self
    }

    pub fn with_split_seed(mut self, seed: u64) -> Self {
        self.split_seed = seed;
        self
    }

    pub fn with_stratified(mut self, stratified: bool) -> Self {
        self.stratified = stratified;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// True when the train split should be carved into train + valid.
    pub fn wants_valid_carve_out(&self) -> bool {
        self.valid_portion.is_some() && !self.splits.iter().any(|s| s == "valid")
    }
}
