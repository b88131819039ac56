// ============================================================
// Layer 4 — Dataset Providers
// ============================================================
// Each provider knows the on-disk layout of one classic text
// classification dataset and returns its splits in a fixed
// order. Files are expected to be extracted under the root
// directory already; nothing is downloaded.
//
//   IMDB  → [train, test]        {root}/imdb/aclImdb/...
//   SST   → [train, dev, test]   {root}/sst/trees/...
//   TREC  → [train, test]        {root}/trec/...
//
// Providers only produce raw strings — the reader never looks
// inside them.

use std::fs;
use std::path::Path;

use crate::domain::error::{ReaderError, ReaderResult};

/// aclImdb movie reviews, pos/neg
pub mod imdb;

/// Stanford Sentiment Treebank (root-level labels)
pub mod sst;

/// TREC question classification
pub mod trec;

pub use imdb::ImdbProvider;
pub use sst::SstProvider;
pub use trec::TrecProvider;

/// Read a whole file as UTF-8 text, mapping I/O failures to ReaderError.
pub(crate) fn read_text(path: &Path) -> ReaderResult<String> {
    fs::read_to_string(path).map_err(|e| ReaderError::io(path, e))
}

/// Read a file as raw bytes, mapping I/O failures to ReaderError.
pub(crate) fn read_bytes(path: &Path) -> ReaderResult<Vec<u8>> {
    fs::read(path).map_err(|e| ReaderError::io(path, e))
}

/// Strip a single trailing "\n" or "\r\n".
pub(crate) fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
