//! Coverage classification of a parsed file against the reference locale.

use std::fmt;

use crate::core::LocaleRecord;

/// How much of a file's key set exists in the reference locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageBucket {
    /// Every key exists in the reference.
    Full,
    /// Some, but not all, keys exist in the reference.
    Partial,
    /// No key exists in the reference.
    None,
}

impl fmt::Display for CoverageBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageBucket::Full => write!(f, "fully covered"),
            CoverageBucket::Partial => write!(f, "partially covered"),
            CoverageBucket::None => write!(f, "not covered"),
        }
    }
}

/// Coverage of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub bucket: CoverageBucket,
    pub covered: usize,
    pub total: usize,
}

/// Classify `record` against `reference`.
///
/// Returns `None` for an empty record: empty files take no part in
/// classification or merging.
pub fn classify(record: &LocaleRecord, reference: &LocaleRecord) -> Option<Coverage> {
    let total = record.len();
    if total == 0 {
        return None;
    }

    let covered = record
        .keys()
        .filter(|key| reference.contains_key(*key))
        .count();

    let bucket = if covered == 0 {
        CoverageBucket::None
    } else if covered == total {
        CoverageBucket::Full
    } else {
        CoverageBucket::Partial
    };

    Some(Coverage {
        bucket,
        covered,
        total,
    })
}
