//! Host accessor contract and an in-memory host for standalone runs.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DialogueElement, LocaleRecord, LocaleTable};

/// What the overlay engine needs from the host application.
///
/// Every method takes `&mut self` because reading a [`LocaleTable`] may apply
/// its pending transforms first.
pub trait LocaleHost {
    /// A copy of the reference locale's record, or `None` if it is not loaded.
    fn reference_record(&mut self, code: &str) -> Option<LocaleRecord>;

    /// The live table for `code`, or `None` if the host does not know the code.
    fn target_table(&mut self, code: &str) -> Option<&mut LocaleTable>;

    /// Every dialogue element the host knows, or `None` without a dialogue store.
    fn dialogue_elements(&mut self) -> Option<&mut [DialogueElement]>;
}

/// Serialized host state: locale tables plus an optional dialogue store.
///
/// ```json
/// {
///   "locales": { "en": { "greeting": "Hello" }, "ch": {} },
///   "dialogues": [ { "id": "trader", "localization": { "en": { "hi": "Hi" } } } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSnapshot {
    #[serde(default)]
    pub locales: IndexMap<String, LocaleRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogues: Option<Vec<DialogueElement>>,
}

impl HostSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read host snapshot: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse host snapshot: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize snapshot.")?;
        fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write host snapshot: {}", path.display()))
    }
}

/// A host that keeps everything in memory.
///
/// A locale code is known to the host exactly when it has a table.
#[derive(Debug, Default)]
pub struct MemoryHost {
    locales: IndexMap<String, LocaleTable>,
    dialogues: Option<Vec<DialogueElement>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, code: impl Into<String>, record: LocaleRecord) -> Self {
        self.locales.insert(code.into(), LocaleTable::new(record));
        self
    }

    pub fn with_dialogues(mut self, dialogues: Vec<DialogueElement>) -> Self {
        self.dialogues = Some(dialogues);
        self
    }

    pub fn from_snapshot(snapshot: HostSnapshot) -> Self {
        Self {
            locales: snapshot
                .locales
                .into_iter()
                .map(|(code, record)| (code, LocaleTable::new(record)))
                .collect(),
            dialogues: snapshot.dialogues,
        }
    }

    /// Apply pending transforms and hand the state back as a snapshot.
    pub fn into_snapshot(self) -> HostSnapshot {
        HostSnapshot {
            locales: self
                .locales
                .into_iter()
                .map(|(code, table)| (code, table.into_entries()))
                .collect(),
            dialogues: self.dialogues,
        }
    }

    pub fn locale(&mut self, code: &str) -> Option<&mut LocaleTable> {
        self.locales.get_mut(code)
    }

    pub fn dialogues(&self) -> Option<&[DialogueElement]> {
        self.dialogues.as_deref()
    }
}

impl LocaleHost for MemoryHost {
    fn reference_record(&mut self, code: &str) -> Option<LocaleRecord> {
        self.locales
            .get_mut(code)
            .map(|table| table.entries().clone())
    }

    fn target_table(&mut self, code: &str) -> Option<&mut LocaleTable> {
        self.locales.get_mut(code)
    }

    fn dialogue_elements(&mut self) -> Option<&mut [DialogueElement]> {
        self.dialogues.as_deref_mut()
    }
}
