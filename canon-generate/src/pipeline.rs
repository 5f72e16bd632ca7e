//! Generation pipeline entrypoint used by the CLI.
//!
//! ## Run sequence
//!
//! 1. Load the standards document (the only fatal step).
//! 2. Load every language's fragments.
//! 3. Select target languages.
//! 4. Read the optional project context file.
//! 5. Render human docs and the checklist.
//! 6. Render the generic prompt, unless the run was filtered.
//! 7. Render one prompt per target language.
//!
//! Render targets run strictly in that order, one at a time. Each gets its
//! own copy of the context.

use std::path::{Path, PathBuf};

use canon_core::{
    extract_checklists,
    loader::{self, DEFAULT_LANGUAGES_DIR, DEFAULT_STANDARDS_PATH},
    LanguageName,
};
use canon_renderer::{
    RenderContext, RenderOutcome, TemplateRenderer, CHECKLIST_TEMPLATE, HUMAN_DOCS_TEMPLATE,
    LLM_PROMPT_TEMPLATE,
};

use crate::error::GenerateError;
use crate::targets::select_targets;

/// Version tag exposed to templates as `version`.
pub const STANDARDS_VERSION: &str = "1.0.0";

pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const HUMAN_DOCS_FILE: &str = "engineering-standards.md";
pub const CHECKLIST_FILE: &str = "checklist.md";
pub const GENERIC_PROMPT_FILE: &str = "llm-prompt-generic.txt";

/// `llm-prompt-<language>.txt`
pub fn language_prompt_file(language: &LanguageName) -> String {
    format!("llm-prompt-{language}.txt")
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Where a run reads its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    /// Standards YAML document.
    pub standards: PathBuf,
    /// Directory holding one subdirectory per language.
    pub languages_dir: PathBuf,
    /// Search root for template ids such as `templates/human-docs.j2`.
    pub template_root: PathBuf,
}

impl SourcePaths {
    /// Default layout under `root`: `core/standards.yaml`, `languages/`, and
    /// templates resolved relative to `root` itself.
    pub fn from_root(root: &Path) -> Self {
        SourcePaths {
            standards: root.join(DEFAULT_STANDARDS_PATH),
            languages_dir: root.join(DEFAULT_LANGUAGES_DIR),
            template_root: root.to_path_buf(),
        }
    }
}

/// Inputs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub paths: SourcePaths,
    pub output_dir: PathBuf,
    /// Restrict generation to these languages; empty means all.
    pub languages: Vec<String>,
    /// Free-form text file injected as `project_context`.
    pub context_file: Option<PathBuf>,
}

impl GenerateOptions {
    /// Default options for content under `root`, writing to `<root>/dist`.
    pub fn new(root: &Path) -> Self {
        GenerateOptions {
            paths: SourcePaths::from_root(root),
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            languages: Vec::new(),
            context_file: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Requested languages that were skipped because they do not exist.
    pub unknown_languages: Vec<String>,
    /// One entry per render target, in render order.
    pub outputs: Vec<RenderOutcome>,
    /// Error log path; only exists on disk if some render failed.
    pub error_log: PathBuf,
}

impl GenerateReport {
    pub fn written(&self) -> impl Iterator<Item = &RenderOutcome> {
        self.outputs.iter().filter(|o| o.is_written())
    }

    pub fn failed(&self) -> impl Iterator<Item = &RenderOutcome> {
        self.outputs.iter().filter(|o| !o.is_written())
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Run a full generation.
///
/// Returns `Err` only when the standards document cannot be loaded, in which
/// case nothing has been written. Any other problem is logged and reflected
/// in the [`GenerateReport`].
pub fn run(opts: &GenerateOptions) -> Result<GenerateReport, GenerateError> {
    tracing::debug!("loading standards from {}", opts.paths.standards.display());
    let core = loader::load_standards_at(&opts.paths.standards)?;

    tracing::debug!("loading languages from {}", opts.paths.languages_dir.display());
    let all_languages = loader::load_languages_at(&opts.paths.languages_dir);

    let selection = select_targets(&all_languages, &opts.languages);
    for name in &selection.unknown {
        tracing::debug!(
            "language '{name}' not found in {}; skipping",
            opts.paths.languages_dir.display()
        );
    }

    let project_context = match &opts.context_file {
        Some(path) => {
            tracing::debug!("loading project context from {}", path.display());
            loader::read_text_lenient(path)
        }
        None => String::new(),
    };

    let out = &opts.output_dir;
    let renderer = TemplateRenderer::new(&opts.paths.template_root, out);
    let base = RenderContext::new(
        &core,
        &selection.targets,
        &all_languages,
        STANDARDS_VERSION,
        &project_context,
    );

    let mut outputs = Vec::new();

    tracing::debug!("rendering human documentation");
    outputs.push(renderer.render(HUMAN_DOCS_TEMPLATE, &out.join(HUMAN_DOCS_FILE), &base));

    tracing::debug!("rendering checklist");
    let checklists = extract_checklists(&selection.targets);
    outputs.push(renderer.render(
        CHECKLIST_TEMPLATE,
        &out.join(CHECKLIST_FILE),
        &base.with_checklists(&checklists),
    ));

    if !selection.filtered {
        tracing::debug!("rendering generic prompt");
        outputs.push(renderer.render(LLM_PROMPT_TEMPLATE, &out.join(GENERIC_PROMPT_FILE), &base));
    }

    for language in selection.targets.keys() {
        tracing::debug!("rendering prompt for {language}");
        outputs.push(renderer.render(
            LLM_PROMPT_TEMPLATE,
            &out.join(language_prompt_file(language)),
            &base.with_language(language),
        ));
    }

    Ok(GenerateReport {
        output_dir: out.clone(),
        unknown_languages: selection.unknown,
        outputs,
        error_log: renderer.error_log_path().to_path_buf(),
    })
}
