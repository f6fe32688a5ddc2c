use std::fmt;

use indexmap::IndexMap;

/// A flat translation record: key -> translated text.
///
/// Insertion order follows the source file, which keeps reports and
/// snapshot output stable.
pub type LocaleRecord = IndexMap<String, String>;

/// A mutation registered against a [`LocaleTable`] and applied on the next read.
pub type Transform = Box<dyn FnOnce(&mut LocaleRecord)>;

/// Host-owned translation table for one locale code.
///
/// The table supports two ways of being written:
///
/// - direct writes through [`LocaleTable::insert`], and
/// - deferred transforms through [`LocaleTable::register_transform`], which
///   are queued and applied in registration order right before the next read.
///
/// Pending transforms survive [`LocaleTable::reinitialize`]; they are replayed
/// on top of the new base data at the next read.
#[derive(Default)]
pub struct LocaleTable {
    entries: LocaleRecord,
    pending: Vec<Transform>,
}

impl LocaleTable {
    pub fn new(entries: LocaleRecord) -> Self {
        Self {
            entries,
            pending: Vec::new(),
        }
    }

    /// Queue a transform to run before the next read.
    pub fn register_transform(&mut self, transform: impl FnOnce(&mut LocaleRecord) + 'static) {
        self.pending.push(Box::new(transform));
    }

    /// Number of transforms still waiting for a read.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Write a value immediately.
    ///
    /// Pending transforms are applied first so a direct write never gets
    /// reordered before an earlier registration.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.flush();
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&mut self, key: &str) -> Option<&str> {
        self.flush();
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&mut self, key: &str) -> bool {
        self.flush();
        self.entries.contains_key(key)
    }

    /// Read the whole table.
    pub fn entries(&mut self) -> &LocaleRecord {
        self.flush();
        &self.entries
    }

    pub fn len(&mut self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.entries().is_empty()
    }

    /// Replace the base data, keeping pending transforms queued.
    pub fn reinitialize(&mut self, entries: LocaleRecord) {
        self.entries = entries;
    }

    /// Consume the table, applying anything still pending.
    pub fn into_entries(mut self) -> LocaleRecord {
        self.flush();
        self.entries
    }

    fn flush(&mut self) {
        for transform in self.pending.drain(..) {
            transform(&mut self.entries);
        }
    }
}

impl From<LocaleRecord> for LocaleTable {
    fn from(entries: LocaleRecord) -> Self {
        Self::new(entries)
    }
}

impl fmt::Debug for LocaleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleTable")
            .field("entries", &self.entries)
            .field("pending", &self.pending.len())
            .finish()
    }
}
