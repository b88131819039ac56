//! Reads text classification datasets (IMDB, SST, TREC) into an
//! ordered mapping of split name → (text, label) samples.
//!
//! ```no_run
//! use text_classification_reader::{ClassificationDataReader, DatasetReader, ReadRequest};
//!
//! let reader = ClassificationDataReader::default();
//! let request = ReadRequest::new("/data", "TREC")
//!     .with_splits(["train", "test"])
//!     .with_valid_portion(0.1);
//! let splits = reader.read(&request)?;
//! for (name, samples) in splits.iter() {
//!     println!("{name}: {}", samples.len());
//! }
//! # Ok::<(), text_classification_reader::ReaderError>(())
//! ```

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;

pub use data::dataset::RawSplit;
pub use data::reader::ClassificationDataReader;
pub use data::registry::ProviderRegistry;
pub use domain::error::{ReaderError, ReaderResult};
pub use domain::request::ReadRequest;
pub use domain::sample::{Sample, SplitData};
pub use domain::traits::{DatasetProvider, DatasetReader};
pub use infra::reader_registry::{ReaderConfig, ReaderRegistry, READER_NAME};
pub use infra::seed::init_seed;
