// ============================================================
// Layer 4 — Classification Data Reader
// ============================================================
// Turns a ReadRequest into SplitData:
//
//   Step 1: Validate the request (duplicates, valid_portion)
//   Step 2: Resolve the dataset identifier in the registry
//   Step 3: Ask the provider for its raw splits
//   Step 4: Check the split count matches the request
//   Step 5: Name provider splits positionally
//   Step 6: Optionally carve "valid" out of "train"
//   Step 7: Flatten every split into (text, label) samples
//
// Either every requested split comes back or the read fails;
// nothing partial is ever returned.

use std::collections::HashSet;

use crate::data::dataset::RawSplit;
use crate::data::registry::ProviderRegistry;
use crate::data::splitter::{split_stratified, split_train_val};
use crate::domain::error::{ReaderError, ReaderResult};
use crate::domain::request::ReadRequest;
use crate::domain::sample::SplitData;
use crate::domain::traits::DatasetReader;

/// Reads a registered classification dataset into named splits.
#[derive(Debug, Clone)]
pub struct ClassificationDataReader {
    registry: ProviderRegistry,
}

impl ClassificationDataReader {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    fn validate(request: &ReadRequest) -> ReaderResult<()> {
        let mut seen = HashSet::new();
        for name in &request.splits {
            if !seen.insert(name.as_str()) {
                return Err(ReaderError::DuplicateSplit(name.clone()));
            }
        }

        if let Some(p) = request.valid_portion {
            // Written so NaN fails too
            if !(p > 0.0 && p < 1.0) {
                return Err(ReaderError::InvalidValidPortion(p));
            }
        }
        Ok(())
    }

    /// Replace "train" by (kept, held out) and append the held-out part as "valid".
    fn carve_out_valid(
        named:         &mut Vec<(String, RawSplit)>,
        valid_portion: f64,
        seed:          u64,
        stratified:    bool,
    ) -> ReaderResult<()> {
        let train_idx = named
            .iter()
            .position(|(n, _)| n == "train")
            .ok_or_else(|| ReaderError::MissingSplit("train".to_string()))?;

        tracing::info!(
            "Valid not in `splits` and `valid_portion` is given. Split `train` to `train` and `valid`"
        );

        let train         = std::mem::take(&mut named[train_idx].1).into_samples();
        let keep_fraction = 1.0 - valid_portion;

        let (kept, held_out) = if stratified {
            split_stratified(train, keep_fraction, seed, |s| s.label.clone())
        } else {
            split_train_val(train, keep_fraction, seed)
        };

        named[train_idx].1 = RawSplit::new(kept);
        named.push(("valid".to_string(), RawSplit::new(held_out)));
        Ok(())
    }
}

impl Default for ClassificationDataReader {
    fn default() -> Self {
        Self::new(ProviderRegistry::with_defaults())
    }
}

impl DatasetReader for ClassificationDataReader {
    fn read(&self, request: &ReadRequest) -> ReaderResult<SplitData> {
        // ── Step 1: Validate ──────────────────────────────────────────────────
        Self::validate(request)?;

        if !request.extra.is_empty() {
            let keys: Vec<&str> = request.extra.keys().map(String::as_str).collect();
            tracing::debug!("Ignoring extra reader options: {:?}", keys);
        }

        // ── Step 2: Resolve the provider ──────────────────────────────────────
        let provider = self.registry.resolve(&request.dataset_title)?;
        tracing::info!("Dataset {} is used from the provider registry.", request.dataset_title);

        // ── Step 3 + 4: Read raw splits and check the count ───────────────────
        let raw = provider.splits(&request.data_path)?;
        if raw.len() != request.splits.len() {
            return Err(ReaderError::SplitCountMismatch {
                requested: request.splits.len(),
                returned:  raw.len(),
            });
        }

        // ── Step 5: Positional naming ─────────────────────────────────────────
        let mut named: Vec<(String, RawSplit)> = request
            .splits
            .iter()
            .cloned()
            .zip(raw)
            .collect();

        // ── Step 6: Optional train → train + valid ────────────────────────────
        match request.valid_portion {
            Some(portion) if request.wants_valid_carve_out() => {
                Self::carve_out_valid(&mut named, portion, request.split_seed, request.stratified)?;
            }
            Some(_) => tracing::debug!("`valid` is requested explicitly; ignoring valid_portion"),
            None    => {}
        }

        // ── Step 7: Flatten ───────────────────────────────────────────────────
        let mut data = SplitData::new();
        for (name, split) in named {
            let samples = split.into_samples();
            tracing::info!("For field {} found {} samples.", name, samples.len());
            data.insert(name, samples);
        }

        Ok(data)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::sample::Sample;
    use crate::domain::traits::DatasetProvider;

    // In-memory provider with three splits of known sizes
    struct ThreeWay;

    fn labelled(prefix: &str, n: usize) -> RawSplit {
        (0..n)
            .map(|i| Sample::new(format!("{prefix} {i}"), if i % 2 == 0 { "even" } else { "odd" }))
            .collect()
    }

    impl DatasetProvider for ThreeWay {
        fn name(&self) -> &str { "THREE" }
        fn split_names(&self) -> &[&'static str] { &["train", "dev", "test"] }
        fn splits(&self, _root: &Path) -> ReaderResult<Vec<RawSplit>> {
            Ok(vec![labelled("tr", 10), labelled("dv", 4), labelled("te", 6)])
        }
    }

    // Two splits: train of 100, test of 20
    struct TwoWay;

    impl DatasetProvider for TwoWay {
        fn name(&self) -> &str { "TWO" }
        fn split_names(&self) -> &[&'static str] { &["train", "test"] }
        fn splits(&self, _root: &Path) -> ReaderResult<Vec<RawSplit>> {
            Ok(vec![labelled("tr", 100), labelled("te", 20)])
        }
    }

    static FAILING_CALLS: AtomicUsize = AtomicUsize::new(0);

    struct Failing;

    impl DatasetProvider for Failing {
        fn name(&self) -> &str { "FAIL" }
        fn split_names(&self) -> &[&'static str] { &["train"] }
        fn splits(&self, root: &Path) -> ReaderResult<Vec<RawSplit>> {
            FAILING_CALLS.fetch_add(1, Ordering::SeqCst);
            Err(ReaderError::io(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "archive missing"),
            ))
        }
    }

    fn reader() -> ClassificationDataReader {
        let mut reg = ProviderRegistry::new();
        reg.register("THREE", || Box::new(ThreeWay));
        reg.register("TWO",   || Box::new(TwoWay));
        reg.register("FAIL",  || Box::new(Failing));
        ClassificationDataReader::new(reg)
    }

    #[test]
    fn test_three_splits_assigned_in_order() {
        let data = reader().read(&ReadRequest::new("/unused", "THREE")).unwrap();

        let names: Vec<&str> = data.names().collect();
        assert_eq!(names, vec!["train", "valid", "test"]);
        assert_eq!(data.get("train").unwrap().len(), 10);
        assert_eq!(data.get("valid").unwrap().len(), 4);
        assert_eq!(data.get("test").unwrap().len(), 6);
        assert_eq!(data.get("valid").unwrap()[0].text, "dv 0");
    }

    #[test]
    fn test_unknown_dataset_is_not_found() {
        let err = reader().read(&ReadRequest::new("/unused", "NOPE")).unwrap_err();
        assert!(matches!(err, ReaderError::DatasetNotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_split_count_mismatch_fails() {
        // TWO returns 2 splits, default request asks for 3
        let err = reader().read(&ReadRequest::new("/unused", "TWO")).unwrap_err();
        assert!(matches!(
            err,
            ReaderError::SplitCountMismatch { requested: 3, returned: 2 }
        ));
    }

    #[test]
    fn test_valid_carved_from_train() {
        let req  = ReadRequest::new("/unused", "TWO")
            .with_splits(["train", "test"])
            .with_valid_portion(0.1);
        let data = reader().read(&req).unwrap();

        let names: Vec<&str> = data.names().collect();
        assert_eq!(names, vec!["train", "test", "valid"]);
        assert_eq!(data.get("train").unwrap().len(), 90);
        assert_eq!(data.get("valid").unwrap().len(), 10);
        assert_eq!(data.get("test").unwrap().len(), 20);
    }

    #[test]
    fn test_carve_out_is_deterministic_per_seed() {
        let req = ReadRequest::new("/unused", "TWO")
            .with_splits(["train", "test"])
            .with_valid_portion(0.25)
            .with_split_seed(7);

        let a = reader().read(&req).unwrap();
        let b = reader().read(&req).unwrap();
        assert_eq!(a, b);

        let c = reader().read(&req.clone().with_split_seed(8)).unwrap();
        assert_ne!(a.get("valid"), c.get("valid"));
        assert_eq!(a.get("valid").unwrap().len(), c.get("valid").unwrap().len());
    }

    #[test]
    fn test_carved_splits_partition_train() {
        let req  = ReadRequest::new("/unused", "TWO")
            .with_splits(["train", "test"])
            .with_valid_portion(0.3);
        let data = reader().read(&req).unwrap();

        let mut texts: Vec<String> = data
            .get("train").unwrap()
            .iter()
            .chain(data.get("valid").unwrap())
            .map(|s| s.text.clone())
            .collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 100);
    }

    #[test]
    fn test_stratified_carve_out() {
        let req  = ReadRequest::new("/unused", "TWO")
            .with_splits(["train", "test"])
            .with_valid_portion(0.2)
            .with_stratified(true);
        let data = reader().read(&req).unwrap();

        let valid = data.get("valid").unwrap();
        let even  = valid.iter().filter(|s| s.label == "even").count();
        assert_eq!(valid.len(), 20);
        assert_eq!(even, 10);
    }

    #[test]
    fn test_valid_portion_ignored_when_valid_requested() {
        let req  = ReadRequest::new("/unused", "THREE").with_valid_portion(0.5);
        let data = reader().read(&req).unwrap();
        assert_eq!(data.get("train").unwrap().len(), 10);
        assert_eq!(data.get("valid").unwrap().len(), 4);
    }

    #[test]
    fn test_carve_out_without_train_fails() {
        let req = ReadRequest::new("/unused", "TWO")
            .with_splits(["fit", "test"])
            .with_valid_portion(0.1);
        let err = reader().read(&req).unwrap_err();
        assert!(matches!(err, ReaderError::MissingSplit(ref s) if s == "train"));
    }

    #[test]
    fn test_invalid_portion_rejected() {
        for bad in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let req = ReadRequest::new("/unused", "TWO")
                .with_splits(["train", "test"])
                .with_valid_portion(bad);
            let err = reader().read(&req).unwrap_err();
            assert!(matches!(err, ReaderError::InvalidValidPortion(_)));
        }
    }

    #[test]
    fn test_duplicate_split_rejected_before_provider_runs() {
        let before = FAILING_CALLS.load(Ordering::SeqCst);
        let req    = ReadRequest::new("/unused", "FAIL").with_splits(["train", "train"]);
        let err    = reader().read(&req).unwrap_err();
        assert!(matches!(err, ReaderError::DuplicateSplit(_)));
        assert_eq!(FAILING_CALLS.load(Ordering::SeqCst), before);
    }

    #[test]
    fn test_provider_error_propagates() {
        let req = ReadRequest::new("/data/root", "FAIL").with_splits(["train"]);
        let err = reader().read(&req).unwrap_err();
        assert!(matches!(err, ReaderError::Io { .. }));
    }

    #[test]
    fn test_extra_options_are_ignored() {
        let plain = reader().read(&ReadRequest::new("/unused", "THREE")).unwrap();
        let extra = reader()
            .read(
                &ReadRequest::new("/unused", "THREE")
                    .with_extra("shuffle", serde_json::json!(true))
                    .with_extra("lang", serde_json::json!("en")),
            )
            .unwrap();
        assert_eq!(plain, extra);
    }

    #[test]
    fn test_builtin_sst_read_is_repeatable() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("sst/trees");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("train.txt"), "(4 (3 Great) (2 fun))\n(1 (1 Weak) (2 plot))\n").unwrap();
        std::fs::write(dir.join("dev.txt"),   "(3 (3 Nice))\n").unwrap();
        std::fs::write(dir.join("test.txt"),  "(0 (0 Awful))\n").unwrap();

        let reader  = ClassificationDataReader::default();
        let request = ReadRequest::new(tmp.path(), "SST");
        let first   = reader.read(&request).unwrap();
        let second  = reader.read(&request).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.get("train").unwrap(),
            &[Sample::new("Great fun", "positive"), Sample::new("Weak plot", "negative")]
        );
        assert_eq!(first.get("valid").unwrap().len(), 1);
        assert_eq!(first.get("test").unwrap()[0].label, "negative");
    }

    #[test]
    fn test_samples_are_not_modified() {
        let data  = reader().read(&ReadRequest::new("/unused", "THREE")).unwrap();
        let first = &data.get("train").unwrap()[0];
        assert_eq!(first, &Sample::new("tr 0", "even"));
    }
}
