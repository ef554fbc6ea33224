use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single read/derive/convert cycle.
///
/// Every variant is surfaced to the caller; nothing in `system` retries or
/// substitutes a default value.
#[derive(Debug, Error)]
pub enum MemError {
    #[error("memory info source {} is unavailable", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing or malformed `{label}` entry in memory info")]
    Parse { label: &'static str },

    #[error("free + buffers + cached ({accounted} kB) exceeds total memory ({total} kB)")]
    InconsistentData { total: u64, accounted: u64 },

    #[error("total memory is zero; percentages are undefined")]
    DivisionByZero,
}

impl MemError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MemError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = MemError> = std::result::Result<T, E>;
