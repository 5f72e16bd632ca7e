//! Error types for canon-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can arise while loading standards content.
///
/// Only the standards document is loaded strictly; language fragments degrade
/// to warnings and never produce a [`LoadError`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The standards YAML file did not exist at the expected path.
    #[error("standards file not found at {path}")]
    StandardsNotFound { path: PathBuf },

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("failed to parse standards at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Any other I/O failure while reading the standards file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`LoadError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.into(),
        source,
    }
}
