//! Template context — the serializable payload handed to every template.

use serde::Serialize;

use canon_core::{ChecklistExtract, LanguageFragments, LanguageName, StandardsData};

/// Borrowed rendering payload.
///
/// Template keys:
///
/// | Key                   | Content                                         |
/// |-----------------------|-------------------------------------------------|
/// | `core`                | the standards document                          |
/// | `languages`           | fragments of the target languages               |
/// | `all_languages`       | fragments of every discovered language          |
/// | `version`             | standards version tag                           |
/// | `project_context`     | free-form project text (may be empty)           |
/// | `language`            | current target language (per-language prompts)  |
/// | `language_checklists` | extracted checklists (checklist output only)    |
///
/// Optional keys are omitted rather than set to `none`, so templates see them
/// as undefined and the renderer's lenient mode prints them as empty.
///
/// The context is `Copy`; [`with_language`](Self::with_language) and
/// [`with_checklists`](Self::with_checklists) return a fresh value and leave
/// the receiver untouched.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderContext<'a> {
    pub core: &'a StandardsData,
    pub languages: &'a LanguageFragments,
    pub all_languages: &'a LanguageFragments,
    pub version: &'a str,
    pub project_context: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'a LanguageName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_checklists: Option<&'a ChecklistExtract>,
}

impl<'a> RenderContext<'a> {
    /// Base context shared by every render target of a run.
    pub fn new(
        core: &'a StandardsData,
        languages: &'a LanguageFragments,
        all_languages: &'a LanguageFragments,
        version: &'a str,
        project_context: &'a str,
    ) -> Self {
        RenderContext {
            core,
            languages,
            all_languages,
            version,
            project_context,
            language: None,
            language_checklists: None,
        }
    }

    /// Copy of this context targeting a single language.
    pub fn with_language(self, language: &'a LanguageName) -> Self {
        RenderContext {
            language: Some(language),
            ..self
        }
    }

    /// Copy of this context carrying extracted checklists.
    pub fn with_checklists(self, checklists: &'a ChecklistExtract) -> Self {
        RenderContext {
            language_checklists: Some(checklists),
            ..self
        }
    }

    /// Convert to a [`minijinja::Value`] for rendering.
    pub fn to_value(&self) -> minijinja::Value {
        minijinja::Value::from_serialize(self)
    }
}
