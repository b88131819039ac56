// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams:
//
//   DatasetProvider — knows one dataset's on-disk layout and
//                     returns its splits in provider order
//                     (e.g. IMDB → [train, test]).
//   DatasetReader   — turns a request (root, dataset name,
//                     split names, ...) into SplitData.
//
// The registries in data::registry and infra::reader_registry
// hand out boxed trait objects, so the application layer only
// ever sees these traits.

use std::path::Path;

use crate::data::dataset::RawSplit;
use crate::domain::request::ReadRequest;
use crate::domain::error::ReaderResult;
use crate::domain::sample::SplitData;

// ─── DatasetProvider ──────────────────────────────────────────────────────────
/// A source of raw splits for one named dataset.
///
/// Implementations:
///   - ImdbProvider → aclImdb pos/neg review files
///   - SstProvider  → Stanford Sentiment Treebank trees
///   - TrecProvider → TREC question classification
pub trait DatasetProvider: Send + Sync {
    /// Identifier this provider is registered under (e.g. "IMDB")
    fn name(&self) -> &str;

    /// Names of the splits `splits()` returns, in the same order.
    fn split_names(&self) -> &[&'static str];

    /// Read every split of the dataset stored under `root`.
    fn splits(&self, root: &Path) -> ReaderResult<Vec<RawSplit>>;
}

// ─── DatasetReader ────────────────────────────────────────────────────────────
/// Anything that can turn a read request into split data.
///
/// Implementations:
///   - ClassificationDataReader → provider lookup + optional re-split
pub trait DatasetReader: Send + Sync {
    fn read(&self, request: &ReadRequest) -> ReaderResult<SplitData>;
}
