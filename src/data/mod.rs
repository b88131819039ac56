// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between files on disk and named (text, label)
// splits:
//
//   dataset files under data_path
//       │
//       ▼
//   DatasetProvider   → parses one dataset's layout into RawSplits
//       │               (looked up in the ProviderRegistry)
//       ▼
//   ClassificationDataReader
//       │             → names splits, checks the count,
//       │               optionally carves "valid" out of "train"
//       ▼
//   SplitData         → split name → Vec<Sample>
//
// Each module does one step and is tested on its own.

/// RawSplit — one provider split, implements burn's Dataset trait
pub mod dataset;

/// Seeded train/validation splitting (plain and stratified)
pub mod splitter;

/// Built-in dataset providers (IMDB, SST, TREC)
pub mod providers;

/// Identifier → provider constructor lookup
pub mod registry;

/// The classification dataset reader
pub mod reader;
