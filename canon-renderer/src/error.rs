//! Error types for canon-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from a single render call.
#[derive(Debug, Error)]
pub enum RenderError {
    /// minijinja error: template not found, syntax error, or runtime failure.
    #[error("template engine error: {0}")]
    Template(#[from] minijinja::Error),

    /// Filesystem error while writing rendered output.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`RenderError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
