//! Target language selection.

use canon_core::LanguageFragments;

/// Languages a run will produce per-language output for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    /// Fragments of the selected languages.
    pub targets: LanguageFragments,
    /// Requested names with no matching language directory, in request order.
    pub unknown: Vec<String>,
    /// `true` when the caller restricted the run to specific languages.
    pub filtered: bool,
}

/// Intersect `requested` with the known languages.
///
/// An empty `requested` selects every known language. Duplicate requests
/// collapse; unknown names are collected rather than rejected.
pub fn select_targets(all: &LanguageFragments, requested: &[String]) -> TargetSelection {
    if requested.is_empty() {
        return TargetSelection {
            targets: all.clone(),
            unknown: Vec::new(),
            filtered: false,
        };
    }

    let mut targets = LanguageFragments::new();
    let mut unknown: Vec<String> = Vec::new();
    for name in requested {
        match all.get_key_value(name.as_str()) {
            Some((lang, fragments)) => {
                targets.insert(lang.clone(), fragments.clone());
            }
            None if !unknown.contains(name) => unknown.push(name.clone()),
            None => {}
        }
    }
    TargetSelection {
        targets,
        unknown,
        filtered: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_core::{Fragments, LanguageName};

    fn known() -> LanguageFragments {
        ["go", "python", "rust"]
            .into_iter()
            .map(|n| (LanguageName::from(n), Fragments::new()))
            .collect()
    }

    fn names(sel: &TargetSelection) -> Vec<&str> {
        sel.targets.keys().map(|k| k.as_str()).collect()
    }

    #[test]
    fn no_filter_selects_everything() {
        let sel = select_targets(&known(), &[]);
        assert!(!sel.filtered);
        assert_eq!(names(&sel), vec!["go", "python", "rust"]);
        assert!(sel.unknown.is_empty());
    }

    #[test]
    fn filter_intersects_and_reports_unknown() {
        let requested = vec!["rust".to_string(), "cobol".to_string()];
        let sel = select_targets(&known(), &requested);
        assert!(sel.filtered);
        assert_eq!(names(&sel), vec!["rust"]);
        assert_eq!(sel.unknown, vec!["cobol".to_string()]);
    }

    #[test]
    fn duplicates_collapse() {
        let requested = vec![
            "go".to_string(),
            "go".to_string(),
            "zig".to_string(),
            "zig".to_string(),
        ];
        let sel = select_targets(&known(), &requested);
        assert_eq!(names(&sel), vec!["go"]);
        assert_eq!(sel.unknown, vec!["zig".to_string()]);
    }

    #[test]
    fn all_unknown_is_filtered_and_empty() {
        let sel = select_targets(&known(), &["fortran".to_string()]);
        assert!(sel.filtered);
        assert!(sel.targets.is_empty());
    }
}
