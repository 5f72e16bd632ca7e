//! Verification checklist extraction across languages.

use crate::markdown::{extract_section, CHECKLIST_MARKER};
use crate::types::{ChecklistExtract, LanguageFragments};

/// Pull the "Verification Checklist" section out of every fragment.
///
/// Every language in `languages` gets an entry, even when none of its
/// fragments carries the marker (the list is then empty). Blocks appear in
/// fragment-key order.
pub fn extract_checklists(languages: &LanguageFragments) -> ChecklistExtract {
    languages
        .iter()
        .map(|(lang, fragments)| {
            let blocks: Vec<String> = fragments
                .values()
                .filter_map(|text| extract_section(text, CHECKLIST_MARKER))
                .collect();
            (lang.clone(), blocks)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Fragments, LanguageName};

    fn fragments(items: &[(&str, &str)]) -> Fragments {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn every_language_present_even_without_checklist() {
        let mut langs = LanguageFragments::new();
        langs.insert(
            LanguageName::from("python"),
            fragments(&[("style", "# Style\nUse black.\n")]),
        );
        langs.insert(LanguageName::from("rust"), Fragments::new());

        let extract = extract_checklists(&langs);
        assert_eq!(extract.len(), 2);
        assert!(extract["python"].is_empty());
        assert!(extract["rust"].is_empty());
    }

    #[test]
    fn one_block_per_fragment_with_marker() {
        let mut langs = LanguageFragments::new();
        langs.insert(
            LanguageName::from("go"),
            fragments(&[
                ("a_errors", "## Verification Checklist\n- [ ] wrap errors\n# End\n"),
                ("b_style", "no checklist here"),
                ("c_tests", "# Tests\n## Verification Checklist\n- [ ] table tests"),
            ]),
        );

        let extract = extract_checklists(&langs);
        assert_eq!(
            extract["go"],
            vec!["- [ ] wrap errors".to_string(), "- [ ] table tests".to_string()]
        );
    }

    #[test]
    fn empty_input_gives_empty_extract() {
        assert!(extract_checklists(&LanguageFragments::new()).is_empty());
    }
}
