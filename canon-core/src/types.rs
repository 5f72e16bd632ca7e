//! Domain types for standards content.
//!
//! Every mapping is a `BTreeMap` so that iteration order, and with it every
//! rendered byte, is stable from one run to the next.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Name of a language directory under the languages root (e.g. `python`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageName(pub String);

impl fmt::Display for LanguageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for LanguageName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LanguageName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Borrow<str> for LanguageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl LanguageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The language-agnostic standards document, loaded wholesale from YAML.
///
/// The shape is owned by the templates, so it is kept as an opaque value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StandardsData(pub serde_yaml::Value);

impl StandardsData {
    /// Look up a top-level key, if the document is a mapping.
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.0.get(key)
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// Fragment key (file stem) → raw markdown text.
pub type Fragments = BTreeMap<String, String>;

/// Language → its fragments. A language with no fragment files maps to an
/// empty [`Fragments`].
pub type LanguageFragments = BTreeMap<LanguageName, Fragments>;

/// Language → extracted "Verification Checklist" blocks, one per fragment
/// that contained the marker.
pub type ChecklistExtract = BTreeMap<LanguageName, Vec<String>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_name_serializes_as_plain_string() {
        let yaml = serde_yaml::to_string(&LanguageName::from("rust")).unwrap();
        assert_eq!(yaml.trim(), "rust");
    }

    #[test]
    fn language_fragments_lookup_by_str() {
        let mut langs = LanguageFragments::new();
        langs.insert(LanguageName::from("go"), Fragments::new());
        assert!(langs.contains_key("go"));
        assert!(!langs.contains_key("rust"));
    }

    #[test]
    fn standards_get_top_level_key() {
        let data = StandardsData(serde_yaml::from_str("title: Standards\n").unwrap());
        assert_eq!(
            data.get("title").and_then(|v| v.as_str()),
            Some("Standards")
        );
        assert!(data.get("missing").is_none());
    }
}
