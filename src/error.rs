//! Error types for benchmark runs and report persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    /// A fancy workload returned without calling [`Measure::measure`].
    ///
    /// [`Measure::measure`]: crate::Measure::measure
    #[error("benchmark must run iteration function")]
    ProtocolViolation,

    /// A report file exists but is not a name-to-report mapping.
    #[error("report file {path:?} is corrupt: {source}")]
    PersistedStateCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode reports: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }
}
