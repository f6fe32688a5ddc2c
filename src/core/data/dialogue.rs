use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::LocaleRecord;

/// A host dialogue entity carrying per-locale text tables.
///
/// `localization` maps a locale code (e.g. "en") to that locale's
/// text-id -> text record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueElement {
    pub id: String,
    #[serde(default)]
    pub localization: IndexMap<String, LocaleRecord>,
}

impl DialogueElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            localization: IndexMap::new(),
        }
    }

    /// Builder used by tests and snapshot construction.
    pub fn with_locale(mut self, code: impl Into<String>, texts: LocaleRecord) -> Self {
        self.localization.insert(code.into(), texts);
        self
    }

    /// True if any locale on this element already defines `text_id`.
    pub fn knows_text_id(&self, text_id: &str) -> bool {
        self.localization
            .values()
            .any(|texts| texts.contains_key(text_id))
    }

    /// Get the record for `code`, creating an empty one if absent.
    pub fn locale_mut(&mut self, code: &str) -> &mut LocaleRecord {
        self.localization.entry(code.to_string()).or_default()
    }

    pub fn text(&self, code: &str, text_id: &str) -> Option<&str> {
        self.localization
            .get(code)
            .and_then(|texts| texts.get(text_id))
            .map(String::as_str)
    }
}
