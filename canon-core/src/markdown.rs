//! Textual markdown helpers.
//!
//! These are marker/pattern matches over raw text, not a markdown parser:
//! a "heading" is any line starting with `#`, whatever its level.

use std::sync::OnceLock;

use regex::Regex;

/// Heading that introduces a fragment's verification checklist.
pub const CHECKLIST_MARKER: &str = "## Verification Checklist";

/// Return the text following the first `marker`, up to the next heading.
///
/// The section ends at the next occurrence of `marker` itself or at the
/// first subsequent line starting with `#`, whichever comes first, and is
/// trimmed. Returns `None` when `marker` does not occur in `text`.
pub fn extract_section(text: &str, marker: &str) -> Option<String> {
    let (_, rest) = text.split_once(marker)?;
    let rest = rest.split(marker).next().unwrap_or_default();
    let section = rest.split("\n#").next().unwrap_or_default();
    Some(section.trim().to_string())
}

fn frontmatter_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A---\s*\n.*?\n---\s*\n").ok())
        .as_ref()
}

/// Remove a leading `---`-delimited frontmatter block, if there is one.
///
/// Only the first block at the very start of `text` is removed; anything
/// else is returned unchanged.
pub fn strip_frontmatter(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    match frontmatter_re() {
        Some(re) => re.replacen(text, 1, "").into_owned(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn section_stops_before_next_heading() {
        let text = "# Rust\n\n## Verification Checklist\n- [ ] fmt\n- [ ] clippy\n\n## Next\nmore\n";
        assert_eq!(
            extract_section(text, CHECKLIST_MARKER).as_deref(),
            Some("- [ ] fmt\n- [ ] clippy")
        );
    }

    #[test]
    fn section_at_end_of_text_takes_remainder() {
        let text = "intro\n## Verification Checklist\n\n- [ ] tests pass\n   \n";
        assert_eq!(
            extract_section(text, CHECKLIST_MARKER).as_deref(),
            Some("- [ ] tests pass")
        );
    }

    #[test]
    fn subheading_also_ends_section() {
        let text = "## Verification Checklist\n- a\n### Extra\n- b\n";
        assert_eq!(extract_section(text, CHECKLIST_MARKER).as_deref(), Some("- a"));
    }

    #[test]
    fn second_marker_ends_section() {
        let text = "## Verification Checklist\n- first## Verification Checklist\n- second\n";
        assert_eq!(
            extract_section(text, CHECKLIST_MARKER).as_deref(),
            Some("- first")
        );
    }

    #[test]
    fn missing_marker_is_none() {
        assert_eq!(extract_section("# Style\nno list\n", CHECKLIST_MARKER), None);
    }

    #[test]
    fn empty_section_is_some_empty() {
        let text = "## Verification Checklist\n## Next\n";
        assert_eq!(extract_section(text, CHECKLIST_MARKER).as_deref(), Some(""));
    }

    #[rstest]
    #[case::basic("---\ntitle: x\n---\nBody\n", "Body\n")]
    #[case::multi_line("---\na: 1\nb: 2\n---\n# H\ntext", "# H\ntext")]
    #[case::trailing_spaces("---  \nk: v\n---   \nrest", "rest")]
    #[case::only_block("---\nk: v\n---\n", "")]
    fn strips_leading_block(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_frontmatter(input), expected);
    }

    #[rstest]
    #[case::no_block("# Title\n\nBody\n")]
    #[case::not_at_start("intro\n---\nk: v\n---\nbody\n")]
    #[case::unterminated("---\nk: v\nbody\n")]
    #[case::no_trailing_newline("---\nk: v\n---")]
    #[case::empty("")]
    fn leaves_text_without_leading_block(#[case] input: &str) {
        assert_eq!(strip_frontmatter(input), input);
    }

    #[test]
    fn frontmatter_pattern_compiles() {
        assert!(frontmatter_re().is_some());
    }

    #[test]
    fn only_first_block_removed() {
        let input = "---\na: 1\n---\n---\nb: 2\n---\nbody";
        assert_eq!(strip_frontmatter(input), "---\nb: 2\n---\nbody");
    }
}
