// ============================================================
// Layer 3 — Reader Errors
// ============================================================
// Typed failures of the reading pipeline. None of them are
// retried: the read either returns every requested split or
// fails as a whole.
//
//   DatasetNotFound / ReaderNotFound   — configuration errors
//   SplitCountMismatch                 — provider broke the contract
//   DuplicateSplit / MissingSplit /
//   InvalidValidPortion                — bad request
//   Io / Malformed                     — provider could not read its files
//
// The application layer wraps these in anyhow with context.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the data layer.
pub type ReaderResult<T> = Result<T, ReaderError>;

#[derive(Debug, Error)]
pub enum ReaderError {
    /// No provider is registered under the requested identifier.
    #[error("Dataset {0} was not found.")]
    DatasetNotFound(String),

    /// No reader is registered under the requested name.
    #[error("Dataset reader {0} was not found.")]
    ReaderNotFound(String),

    /// The provider returned a different number of splits than requested.
    #[error("provider returned {returned} splits but {requested} were requested")]
    SplitCountMismatch { requested: usize, returned: usize },

    #[error("split `{0}` is requested more than once")]
    DuplicateSplit(String),

    #[error("split `{0}` is required but was not requested")]
    MissingSplit(String),

    #[error("valid_portion must lie strictly between 0 and 1, got {0}")]
    InvalidValidPortion(f64),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record in '{}' at line {line}: {reason}", .path.display())]
    Malformed {
        path:   PathBuf,
        line:   usize,
        reason: String,
    },
}

impl ReaderError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path:   path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// True for errors caused by how the reader was configured
    /// rather than by the data on disk.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::DatasetNotFound(_)
                | Self::ReaderNotFound(_)
                | Self::DuplicateSplit(_)
                | Self::MissingSplit(_)
                | Self::InvalidValidPortion(_)
        )
    }
}
