//! Gated merge of parsed records into a target locale table.

use serde::{Deserialize, Serialize};

use crate::core::{LocaleRecord, LocaleTable};

/// When covered keys are written into the target table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Write each file's covered keys as soon as the file is processed.
    #[default]
    Eager,
    /// Register one transform per file; the table applies them before its next read.
    Deferred,
}

/// Entries of `record` whose key exists in `reference`, in file order.
pub fn covered_entries(record: &LocaleRecord, reference: &LocaleRecord) -> LocaleRecord {
    record
        .iter()
        .filter(|(key, _)| reference.contains_key(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Write `units` into `target` using `strategy`.
///
/// Returns the number of entries written (or scheduled).
pub fn apply(target: &mut LocaleTable, units: LocaleRecord, strategy: MergeStrategy) -> usize {
    let count = units.len();
    if count == 0 {
        return 0;
    }

    match strategy {
        MergeStrategy::Eager => {
            for (key, value) in units {
                target.insert(key, value);
            }
        }
        MergeStrategy::Deferred => {
            target.register_transform(move |entries| entries.extend(units));
        }
    }
    count
}
