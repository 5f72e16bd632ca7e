//! minijinja rendering engine — [`TemplateRenderer`].
//!
//! # Template resolution
//!
//! Template ids are relative paths (`templates/human-docs.j2`). A file at
//! `<template_root>/<id>` wins; otherwise the built-in copy compiled into the
//! binary is used.
//!
//! | Id                         | Output                                      |
//! |----------------------------|---------------------------------------------|
//! | `templates/human-docs.j2`  | `engineering-standards.md`                  |
//! | `templates/checklist.j2`   | `checklist.md`                              |
//! | `templates/llm-prompt.j2`  | `llm-prompt-generic.txt`, `llm-prompt-<lang>.txt` |

use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use canon_core::markdown::strip_frontmatter;

use crate::context::RenderContext;
use crate::error::{io_err, RenderError};

pub const HUMAN_DOCS_TEMPLATE: &str = "templates/human-docs.j2";
pub const CHECKLIST_TEMPLATE: &str = "templates/checklist.j2";
pub const LLM_PROMPT_TEMPLATE: &str = "templates/llm-prompt.j2";

/// Failure log file name, created under the output directory on first error.
pub const ERROR_LOG_FILE: &str = "error.log";

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (HUMAN_DOCS_TEMPLATE, include_str!("templates/human-docs.j2")),
    (CHECKLIST_TEMPLATE, include_str!("templates/checklist.j2")),
    (LLM_PROMPT_TEMPLATE, include_str!("templates/llm-prompt.j2")),
];

fn builtin_template(name: &str) -> Option<String> {
    let name = name.replace('\\', "/");
    BUILTIN_TEMPLATES
        .iter()
        .find(|(id, _)| *id == name)
        .map(|(_, source)| (*source).to_string())
}

// ---------------------------------------------------------------------------
// Environment setup
// ---------------------------------------------------------------------------

fn strip_frontmatter_filter(value: &Value) -> String {
    if value.is_undefined() || value.is_none() {
        return String::new();
    }
    match value.as_str() {
        Some(text) => strip_frontmatter(text),
        None => strip_frontmatter(&value.to_string()),
    }
}

fn build_env(template_root: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(false);
    env.set_undefined_behavior(UndefinedBehavior::Chainable);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("strip_frontmatter", strip_frontmatter_filter);

    let disk = minijinja::path_loader(template_root);
    env.set_loader(move |name| match disk(name)? {
        Some(source) => Ok(Some(source)),
        None => Ok(builtin_template(name)),
    });
    env
}

// ---------------------------------------------------------------------------
// RenderOutcome
// ---------------------------------------------------------------------------

/// Result of a single render target. Rendering never fails outward; errors are
/// captured here and in the error log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Output was rendered and written.
    Written { template: String, path: PathBuf },
    /// Rendering or writing failed; nothing was written to `path`.
    Failed {
        template: String,
        path: PathBuf,
        error: String,
    },
}

impl RenderOutcome {
    pub fn path(&self) -> &Path {
        match self {
            RenderOutcome::Written { path, .. } | RenderOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, RenderOutcome::Written { .. })
    }
}

// ---------------------------------------------------------------------------
// TemplateRenderer
// ---------------------------------------------------------------------------

/// Renders templates to files, isolating failures per call.
///
/// Whitespace control: `trim_blocks` and `lstrip_blocks` are on, so block
/// tags on their own line leave no blank lines behind. Undefined values are
/// chainable: printing `missing` or `missing.deeper` yields an empty string.
pub struct TemplateRenderer {
    env: Environment<'static>,
    error_log: PathBuf,
}

impl TemplateRenderer {
    /// Construct a renderer resolving templates under `template_root` and
    /// logging failures to `<output_dir>/error.log`.
    pub fn new(template_root: &Path, output_dir: &Path) -> Self {
        TemplateRenderer {
            env: build_env(template_root),
            error_log: output_dir.join(ERROR_LOG_FILE),
        }
    }

    pub fn error_log_path(&self) -> &Path {
        &self.error_log
    }

    /// Render `template` against `ctx` without touching the filesystem.
    pub fn render_to_string(
        &self,
        template: &str,
        ctx: &RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(template)?;
        Ok(tmpl.render(ctx.to_value())?)
    }

    /// Render `template` to `output`, creating parent directories and
    /// overwriting any existing file.
    ///
    /// Failures are appended to the error log and returned as
    /// [`RenderOutcome::Failed`]; they are never propagated.
    pub fn render(&self, template: &str, output: &Path, ctx: &RenderContext<'_>) -> RenderOutcome {
        match self.try_render(template, output, ctx) {
            Ok(()) => {
                tracing::info!("wrote: {}", output.display());
                RenderOutcome::Written {
                    template: template.to_string(),
                    path: output.to_path_buf(),
                }
            }
            Err(err) => {
                tracing::warn!("error rendering {template}: {err}");
                self.log_failure(template, output, &err);
                RenderOutcome::Failed {
                    template: template.to_string(),
                    path: output.to_path_buf(),
                    error: err.to_string(),
                }
            }
        }
    }

    fn try_render(
        &self,
        template: &str,
        output: &Path,
        ctx: &RenderContext<'_>,
    ) -> Result<(), RenderError> {
        let rendered = self.render_to_string(template, ctx)?;
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
        fs::write(output, rendered).map_err(|e| io_err(output, e))
    }

    fn log_failure(&self, template: &str, output: &Path, err: &RenderError) {
        let entry = format_failure(template, output, err);
        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = self.error_log.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.error_log)?;
            file.write_all(entry.as_bytes())
        })();
        if let Err(e) = result {
            tracing::error!("could not append to {}: {e}", self.error_log.display());
        }
    }
}

/// One error-log entry: timestamped header, engine detail, then cause chain.
fn format_failure(template: &str, output: &Path, err: &RenderError) -> String {
    let mut entry = String::new();
    let _ = writeln!(
        entry,
        "[{}] Error rendering {template} -> {}: {err}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        output.display()
    );
    if let RenderError::Template(inner) = err {
        let _ = writeln!(entry, "{inner:#}");
    }
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let _ = writeln!(entry, "caused by: {cause}");
        source = cause.source();
    }
    entry
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
