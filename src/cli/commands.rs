// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `read` and `list` subcommands and their flags.
//
// clap's derive macros generate help text, missing-argument
// errors, and type conversion (string → f64, u64, ...).

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::read_use_case::ReadConfig;
use crate::domain::request::{ExtraOptions, DEFAULT_SPLIT_SEED};
use crate::infra::seed::DEFAULT_SEED;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a dataset into train/valid/test (text, label) splits
    Read(ReadArgs),

    /// List registered datasets and readers
    List,
}

/// All arguments for the `read` command.
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Root directory the dataset files are stored under
    #[arg(long, default_value = "data")]
    pub data_path: PathBuf,

    /// Registered dataset identifier (IMDB, SST, TREC)
    #[arg(long, default_value = "IMDB")]
    pub dataset_title: String,

    /// Split names, assigned in order to the dataset's splits
    #[arg(long, value_delimiter = ',', default_value = "train,valid,test")]
    pub splits: Vec<String>,

    /// Fraction of train to hold out as `valid` when `valid` is not in --splits
    #[arg(long)]
    pub valid_portion: Option<f64>,

    /// Seed for the train/valid hold-out shuffle
    #[arg(long, default_value_t = DEFAULT_SPLIT_SEED)]
    pub split_seed: u64,

    /// Hold out the same fraction of every label
    #[arg(long)]
    pub stratified: bool,

    /// Process seed for the tensor backend
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Extra reader option as key=value; accepted and ignored by the reader
    #[arg(long = "option", value_parser = parse_option)]
    pub options: Vec<(String, serde_json::Value)>,

    /// Load the reader block from this JSON file instead of the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the splits as JSON to this file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Parse `key=value`. The value is read as JSON when it parses,
/// otherwise kept as a plain string.
fn parse_option(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Boundary between Layer 1 and Layer 2 — the application layer
/// never sees clap types.
impl From<ReadArgs> for ReadConfig {
    fn from(a: ReadArgs) -> Self {
        ReadConfig {
            config:        a.config,
            data_path:     a.data_path,
            dataset_title: a.dataset_title,
            splits:        a.splits,
            valid_portion: a.valid_portion,
            split_seed:    a.split_seed,
            stratified:    a.stratified,
            extra:         a.options.into_iter().collect::<ExtraOptions>(),
            output:        a.output,
        }
    }
}
