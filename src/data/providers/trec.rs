// ============================================================
// Layer 4 — TREC Provider
// ============================================================
// TREC question classification, extracted layout:
//
//   {root}/trec/train_5500.label   → train
//   {root}/trec/TREC_10.label      → test
//
// One question per line, label first:
//
//   DESC:manner How did serfdom develop in and then leave Russia ?
//
// The label is everything before the first space, the text is
// everything after it. Coarse mode keeps only the part of the
// label before ':' ("DESC"); fine-grained keeps the whole token
// ("DESC:manner").
//
// The raw files contain stray 0xF0 bytes that are not valid
// UTF-8; they are replaced with spaces before decoding.

use std::path::{Path, PathBuf};

use crate::data::dataset::RawSplit;
use crate::data::providers::{read_bytes, strip_line_ending};
use crate::domain::error::{ReaderError, ReaderResult};
use crate::domain::sample::Sample;
use crate::domain::traits::DatasetProvider;

const SPLITS: [&str; 2] = ["train", "test"];
const FILES:  [&str; 2] = ["train_5500.label", "TREC_10.label"];

#[derive(Debug, Default, Clone)]
pub struct TrecProvider {
    fine_grained: bool,
}

impl TrecProvider {
    pub fn new() -> Self {
        Self { fine_grained: false }
    }

    pub fn fine_grained() -> Self {
        Self { fine_grained: true }
    }

    fn dataset_dir(root: &Path) -> PathBuf {
        root.join("trec")
    }

    fn read_split(&self, path: &Path) -> ReaderResult<RawSplit> {
        let mut bytes = read_bytes(path)?;
        for b in bytes.iter_mut() {
            if *b == 0xF0 {
                *b = b' ';
            }
        }
        let content = String::from_utf8_lossy(&bytes);

        let mut samples = Vec::new();
        for (idx, line) in content.split_inclusive('\n').enumerate() {
            let line = strip_line_ending(line);
            if line.is_empty() {
                continue;
            }

            let (label, text) = line.split_once(' ').ok_or_else(|| {
                ReaderError::malformed(path, idx + 1, "expected `LABEL text`")
            })?;

            let label = if self.fine_grained {
                label
            } else {
                label.split(':').next().unwrap_or(label)
            };

            samples.push(Sample::new(text, label));
        }

        tracing::debug!("TREC: {} questions in '{}'", samples.len(), path.display());
        Ok(RawSplit::new(samples))
    }
}

impl DatasetProvider for TrecProvider {
    fn name(&self) -> &str { "TREC" }

    fn split_names(&self) -> &[&'static str] { &SPLITS }

    fn splits(&self, root: &Path) -> ReaderResult<Vec<RawSplit>> {
        let dir = Self::dataset_dir(root);
        FILES
            .iter()
            .map(|file| self.read_split(&dir.join(file)))
            .collect()
    }
}
