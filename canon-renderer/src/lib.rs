//! # canon-renderer
//!
//! minijinja-based template renderer that turns standards data and language
//! fragments into documentation and prompt files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use canon_core::{LanguageFragments, StandardsData};
//! use canon_renderer::{RenderContext, TemplateRenderer, HUMAN_DOCS_TEMPLATE};
//!
//! fn render_docs(core: &StandardsData, languages: &LanguageFragments) {
//!     let renderer = TemplateRenderer::new(Path::new("."), Path::new("dist"));
//!     let ctx = RenderContext::new(core, languages, languages, "1.0.0", "");
//!     let outcome = renderer.render(
//!         HUMAN_DOCS_TEMPLATE,
//!         Path::new("dist/engineering-standards.md"),
//!         &ctx,
//!     );
//!     println!("{}", outcome.path().display());
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::RenderContext;
pub use engine::{
    RenderOutcome, TemplateRenderer, CHECKLIST_TEMPLATE, ERROR_LOG_FILE, HUMAN_DOCS_TEMPLATE,
    LLM_PROMPT_TEMPLATE,
};
pub use error::RenderError;
