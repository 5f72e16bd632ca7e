//! Content loading: the standards document and per-language fragments.
//!
//! # Input layout
//!
//! ```text
//! <root>/
//!   core/standards.yaml        (required)
//!   languages/
//!     <language>/
//!       <fragment>.md          (one fragment per file, keyed by stem)
//! ```
//!
//! Paths are always passed in explicitly; nothing here reads the current
//! working directory.

use std::fs;
use std::path::Path;

use crate::error::{io_err, LoadError};
use crate::types::{Fragments, LanguageFragments, LanguageName, StandardsData};

/// Default standards document location, relative to the content root.
pub const DEFAULT_STANDARDS_PATH: &str = "core/standards.yaml";

/// Default languages directory, relative to the content root.
pub const DEFAULT_LANGUAGES_DIR: &str = "languages";

/// Extension a file must carry to be loaded as a fragment.
pub const FRAGMENT_EXTENSION: &str = "md";

// ---------------------------------------------------------------------------
// 1. Standards
// ---------------------------------------------------------------------------

/// Load the standards document at `path`.
///
/// Returns `LoadError::StandardsNotFound` if absent and
/// `LoadError::Parse` (with path + line context) if malformed YAML.
pub fn load_standards_at(path: &Path) -> Result<StandardsData, LoadError> {
    if !path.exists() {
        return Err(LoadError::StandardsNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let value: serde_yaml::Value =
        serde_yaml::from_str(&contents).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    tracing::debug!("loaded standards from {}", path.display());
    Ok(StandardsData(value))
}

// ---------------------------------------------------------------------------
// 2. Language fragments
// ---------------------------------------------------------------------------

/// Scan `dir` for language subdirectories and load their `*.md` fragments.
///
/// A missing `dir` yields an empty mapping. Unreadable directories and files
/// are logged and treated as empty rather than aborting the scan.
pub fn load_languages_at(dir: &Path) -> LanguageFragments {
    let mut languages = LanguageFragments::new();
    if !dir.exists() {
        tracing::debug!("languages directory {} not found", dir.display());
        return languages;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("could not list {}: {e}", dir.display());
            return languages;
        }
    };

    for entry in entries.filter_map(|e| e.ok()) {
        // Follows symlinks, so linked language directories count.
        if !entry.path().is_dir() {
            continue;
        }
        let name = LanguageName::from(entry.file_name().to_string_lossy().into_owned());
        let fragments = load_fragments(&entry.path());
        tracing::debug!("language '{name}': {} fragment(s)", fragments.len());
        languages.insert(name, fragments);
    }
    languages
}

fn load_fragments(lang_dir: &Path) -> Fragments {
    let mut fragments = Fragments::new();
    let entries = match fs::read_dir(lang_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("could not list {}: {e}", lang_dir.display());
            return fragments;
        }
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some(FRAGMENT_EXTENSION) {
            continue;
        }
        if path.is_dir() {
            continue;
        }
        let Some(stem) = path.file_stem() else { continue };
        let key = stem.to_string_lossy().into_owned();
        fragments.insert(key, read_text_lenient(&path));
    }
    fragments
}

// ---------------------------------------------------------------------------
// 3. Lenient text reads
// ---------------------------------------------------------------------------

/// Read `path` as UTF-8 text, or log a warning and return an empty string.
pub fn read_text_lenient(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("could not read {}: {e}", path.display());
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_languages_dir_is_empty() {
        let root = TempDir::new().unwrap();
        let langs = load_languages_at(&root.path().join("languages"));
        assert!(langs.is_empty());
    }

    #[test]
    fn fragments_keyed_by_stem() {
        let root = TempDir::new().unwrap();
        let base = root.path().join("languages");
        write(&base.join("python/style.md"), "# Style\n");
        write(&base.join("python/testing.md"), "# Testing\n");

        let langs = load_languages_at(&base);
        let python = &langs["python"];
        assert_eq!(python.len(), 2);
        assert_eq!(python["style"], "# Style\n");
        assert_eq!(python["testing"], "# Testing\n");
    }

    #[test]
    fn non_markdown_files_and_top_level_files_are_ignored() {
        let root = TempDir::new().unwrap();
        let base = root.path().join("languages");
        write(&base.join("README.md"), "not a language");
        write(&base.join("go/notes.txt"), "ignored");
        write(&base.join("go/style.md"), "kept");

        let langs = load_languages_at(&base);
        assert_eq!(langs.len(), 1);
        assert_eq!(langs["go"].keys().collect::<Vec<_>>(), vec!["style"]);
    }

    #[test]
    fn empty_language_dir_is_present_with_no_fragments() {
        let root = TempDir::new().unwrap();
        let base = root.path().join("languages");
        fs::create_dir_all(base.join("rust")).unwrap();

        let langs = load_languages_at(&base);
        assert!(langs["rust"].is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_fragment_is_recorded_empty() {
        let root = TempDir::new().unwrap();
        let base = root.path().join("languages");
        fs::create_dir_all(base.join("c")).unwrap();
        fs::write(base.join("c/broken.md"), [0xff, 0xfe, 0x00]).unwrap();
        write(&base.join("c/ok.md"), "fine");

        let langs = load_languages_at(&base);
        assert_eq!(langs["c"]["broken"], "");
        assert_eq!(langs["c"]["ok"], "fine");
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_language_dir_is_loaded() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let shared = root.path().join("shared/python");
        write(&shared.join("style.md"), "# Python\n");
        let base = root.path().join("languages");
        write(&base.join("rust/style.md"), "# Rust\n");
        symlink(&shared, base.join("python")).unwrap();

        let langs = load_languages_at(&base);
        assert_eq!(langs.len(), 2);
        assert_eq!(langs["python"]["style"], "# Python\n");
    }

    #[test]
    fn read_text_lenient_missing_file_is_empty() {
        let root = TempDir::new().unwrap();
        assert_eq!(read_text_lenient(&root.path().join("nope.md")), "");
    }
}
