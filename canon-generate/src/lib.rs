//! # canon-generate
//!
//! Run orchestration: load content, pick target languages, and render every
//! output file for one generation run.
//!
//! Call [`pipeline::run`] with [`GenerateOptions`]; the returned
//! [`GenerateReport`] lists each output and any skipped languages.

pub mod error;
pub mod pipeline;
pub mod targets;

pub use error::GenerateError;
pub use pipeline::{GenerateOptions, GenerateReport, SourcePaths};
pub use targets::{select_targets, TargetSelection};
