//! Canon — engineering standards documentation and prompt generator.
//!
//! # Usage
//!
//! ```text
//! canon [-l <language>]... [-c <context.md>] [-o <dir>]
//!       [--root <dir>] [--standards <file>] [--languages-dir <dir>] [--templates-dir <dir>]
//!       [-v]...
//! ```
//!
//! Relative `--standards`, `--languages-dir`, and `--templates-dir` paths are
//! resolved against `--root`. The output directory is relative to the current
//! directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use canon_generate::{pipeline, GenerateOptions, GenerateReport, SourcePaths};
use canon_renderer::RenderOutcome;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "canon",
    version,
    about = "Generate engineering standards documentation and LLM prompts",
    long_about = None,
)]
struct Cli {
    /// Restrict generation to a language (repeatable, e.g. `-l python -l rust`).
    #[arg(long = "language", short = 'l', value_name = "LANGUAGE")]
    languages: Vec<String>,

    /// Markdown file with project context injected into every template.
    #[arg(long, short = 'c', value_name = "FILE")]
    context: Option<PathBuf>,

    /// Output directory.
    #[arg(long, short = 'o', value_name = "DIR", default_value = pipeline::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Content root holding `core/`, `languages/`, and `templates/`.
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Standards YAML document [default: <root>/core/standards.yaml].
    #[arg(long, value_name = "FILE")]
    standards: Option<PathBuf>,

    /// Per-language fragments directory [default: <root>/languages].
    #[arg(long, value_name = "DIR")]
    languages_dir: Option<PathBuf>,

    /// Template search root [default: <root>].
    #[arg(long, value_name = "DIR")]
    templates_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` wins.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> GenerateOptions {
        let mut paths = SourcePaths::from_root(&self.root);
        if let Some(p) = &self.standards {
            paths.standards = self.root.join(p);
        }
        if let Some(p) = &self.languages_dir {
            paths.languages_dir = self.root.join(p);
        }
        if let Some(p) = &self.templates_dir {
            paths.template_root = self.root.join(p);
        }
        GenerateOptions {
            paths,
            output_dir: self.output.clone(),
            languages: self.languages.clone(),
            context_file: self.context.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

fn print_report(report: &GenerateReport) {
    for name in &report.unknown_languages {
        println!(
            "{} Language '{name}' not found in languages directory. Skipping.",
            "!".yellow().bold()
        );
    }

    for outcome in &report.outputs {
        match outcome {
            RenderOutcome::Written { path, .. } => {
                println!("{} Generated: {}", "✓".green().bold(), path.display());
            }
            RenderOutcome::Failed {
                template, error, ..
            } => {
                println!(
                    "{} Error rendering {template}: {error}",
                    "✗".red().bold()
                );
            }
        }
    }

    let failed = report.failed().count();
    if failed > 0 {
        println!(
            "  {failed} output(s) failed; details in {}",
            report.error_log.display()
        );
    }
    println!(
        "Documentation generation complete in {}",
        report.output_dir.display()
    );
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = cli.options();
    tracing::debug!("options: {opts:?}");

    let report = pipeline::run(&opts).with_context(|| {
        format!(
            "generation aborted; standards source is {}",
            opts.paths.standards.display()
        )
    })?;
    print_report(&report);
    Ok(())
}
