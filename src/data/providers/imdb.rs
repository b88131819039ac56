// ============================================================
// Layer 4 — IMDB Provider
// ============================================================
// Large Movie Review Dataset, extracted layout:
//
//   {root}/imdb/aclImdb/
//     train/pos/*.txt   train/neg/*.txt
//     test/pos/*.txt    test/neg/*.txt
//
// One review per file. The text of a sample is the first line
// of the file, the label is the directory name ("pos"/"neg").
// Labels are visited pos then neg; files inside a label
// directory are visited in file-name order so repeated reads
// return identical sequences.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::dataset::RawSplit;
use crate::data::providers::{read_text, strip_line_ending};
use crate::domain::error::{ReaderError, ReaderResult};
use crate::domain::sample::Sample;
use crate::domain::traits::DatasetProvider;

const SPLITS: [&str; 2] = ["train", "test"];
const LABELS: [&str; 2] = ["pos", "neg"];

#[derive(Debug, Default, Clone)]
pub struct ImdbProvider;

impl ImdbProvider {
    pub fn new() -> Self { Self }

    fn dataset_dir(root: &Path) -> PathBuf {
        root.join("imdb").join("aclImdb")
    }

    fn read_split(dir: &Path) -> ReaderResult<RawSplit> {
        let mut samples = Vec::new();

        for label in LABELS {
            let label_dir = dir.join(label);
            for path in sorted_txt_files(&label_dir)? {
                let content = read_text(&path)?;
                let first   = content.split_inclusive('\n').next().unwrap_or("");
                samples.push(Sample::new(strip_line_ending(first), label));
            }
        }

        tracing::debug!("IMDB: {} reviews in '{}'", samples.len(), dir.display());
        Ok(RawSplit::new(samples))
    }
}

impl DatasetProvider for ImdbProvider {
    fn name(&self) -> &str { "IMDB" }

    fn split_names(&self) -> &[&'static str] { &SPLITS }

    fn splits(&self, root: &Path) -> ReaderResult<Vec<RawSplit>> {
        let base = Self::dataset_dir(root);
        SPLITS
            .iter()
            .map(|split| Self::read_split(&base.join(split)))
            .collect()
    }
}

/// All `*.txt` files directly inside `dir`, sorted by file name.
fn sorted_txt_files(dir: &Path) -> ReaderResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| ReaderError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ReaderError::io(dir, e))?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn skeleton(root: &Path) {
        for split in SPLITS {
            for label in LABELS {
                fs::create_dir_all(root.join("imdb/aclImdb").join(split).join(label)).unwrap();
            }
        }
    }

    fn write_review(root: &Path, split: &str, label: &str, name: &str, text: &str) {
        let dir = root.join("imdb/aclImdb").join(split).join(label);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_reads_train_and_test() {
        let tmp  = tempfile::tempdir().unwrap();
        let root = tmp.path();
        skeleton(root);
        write_review(root, "train", "pos", "0_9.txt", "A fine film.");
        write_review(root, "train", "neg", "1_2.txt", "Dull.<br /><br />Very dull.");
        write_review(root, "train", "pos", "2_8.txt", "Loved it");
        write_review(root, "test",  "neg", "0_1.txt", "Awful");

        let splits = ImdbProvider::new().splits(root).unwrap();
        assert_eq!(splits.len(), 2);

        let train: Vec<&Sample> = splits[0].examples().collect();
        // pos first, then neg; files sorted within a label
        assert_eq!(train[0], &Sample::new("A fine film.", "pos"));
        assert_eq!(train[1], &Sample::new("Loved it", "pos"));
        assert_eq!(train[2], &Sample::new("Dull.<br /><br />Very dull.", "neg"));
        assert_eq!(splits[1].sample_count(), 1);
    }

    #[test]
    fn test_only_first_line_is_text() {
        let tmp = tempfile::tempdir().unwrap();
        skeleton(tmp.path());
        write_review(tmp.path(), "train", "pos", "a.txt", "  first line  \nsecond line\n");

        let splits = ImdbProvider::new().splits(tmp.path()).unwrap();
        let first  = splits[0].examples().next().unwrap();
        // Whitespace is not trimmed
        assert_eq!(first.text, "  first line  ");
    }

    #[test]
    fn test_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ImdbProvider::new().splits(tmp.path()).unwrap_err();
        assert!(matches!(err, ReaderError::Io { .. }));
    }
}
