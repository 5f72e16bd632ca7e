//! Error types for canon-generate.

use thiserror::Error;

use canon_core::LoadError;

/// Errors that abort a generation run.
///
/// Everything else (unknown languages, unreadable fragments, failed renders)
/// is recovered from and surfaced through the run report instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The standards document could not be loaded.
    #[error("cannot load standards: {0}")]
    Standards(#[from] LoadError),
}
