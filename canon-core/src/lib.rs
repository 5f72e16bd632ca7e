//! Canon core library — standards content types, loading, and extraction.
//!
//! - [`types`] — newtypes and content mappings
//! - [`error`] — [`LoadError`]
//! - [`loader`] — standards document and language fragment loading
//! - [`markdown`] — textual section and frontmatter helpers
//! - [`checklist`] — per-language verification checklist extraction

pub mod checklist;
pub mod error;
pub mod loader;
pub mod markdown;
pub mod types;

pub use checklist::extract_checklists;
pub use error::LoadError;
pub use types::{ChecklistExtract, Fragments, LanguageFragments, LanguageName, StandardsData};
