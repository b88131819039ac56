// ============================================================
// Layer 6 — Reader Registry
// ============================================================
// Lets an orchestrating pipeline build a dataset reader by name
// from a JSON config block, e.g.
//
//   {
//     "class_name":    "torchtext_classification_data_reader",
//     "data_path":     "~/.datasets",
//     "dataset_title": "TREC",
//     "splits":        ["train", "test"],
//     "valid_portion": 0.1,
//     "split_seed":    42
//   }
//
// "class_name" picks the reader; everything else becomes the
// ReadRequest. Keys neither of them know end up in
// ReadRequest::extra and are ignored by the reader.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::reader::ClassificationDataReader;
use crate::domain::error::{ReaderError, ReaderResult};
use crate::domain::request::ReadRequest;
use crate::domain::traits::DatasetReader;

/// Name the classification reader is registered under.
pub const READER_NAME: &str = "torchtext_classification_data_reader";

pub type ReaderCtor = fn() -> Box<dyn DatasetReader>;

/// A pipeline's dataset-reader config block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    pub class_name: String,

    #[serde(flatten)]
    pub request: ReadRequest,
}

impl ReaderConfig {
    pub fn new(request: ReadRequest) -> Self {
        Self {
            class_name: READER_NAME.to_string(),
            request,
        }
    }
}

#[derive(Clone, Default)]
pub struct ReaderRegistry {
    readers: BTreeMap<String, ReaderCtor>,
}

impl ReaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the classification reader under [`READER_NAME`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(READER_NAME, || Box::new(ClassificationDataReader::default()));
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, ctor: ReaderCtor) {
        self.readers.insert(name.into(), ctor);
    }

    pub fn build(&self, name: &str) -> ReaderResult<Box<dyn DatasetReader>> {
        self.readers
            .get(name)
            .map(|ctor| ctor())
            .ok_or_else(|| ReaderError::ReaderNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.readers.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for ReaderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.readers.keys()).finish()
    }
}
