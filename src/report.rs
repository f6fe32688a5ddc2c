//! Run statistics and the end-of-run summary.
//!
//! The summary is informational only: it is written to the [`LogSink`] and has
//! no machine-readable contract.

use crate::core::{
    coverage::{Coverage, CoverageBucket},
    log::{LogColor, LogSink},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// A partially covered file with its counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageEntry {
    pub file_name: String,
    pub covered: usize,
    pub total: usize,
}

/// Main-pass statistics for one target locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSummary {
    pub code: String,
    /// Non-empty files that were parsed and merged.
    pub files_loaded: usize,
    pub empty_files: usize,
    pub failed_files: usize,
    /// Distinct keys written into the target locale.
    pub covered_fields: usize,
    pub fully_covered: Vec<String>,
    pub partially_covered: Vec<CoverageEntry>,
    pub non_covered: Vec<String>,
}

impl LocaleSummary {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    /// File a classified file under its bucket.
    pub fn record(&mut self, file_name: impl Into<String>, coverage: &Coverage) {
        let file_name = file_name.into();
        self.files_loaded += 1;
        match coverage.bucket {
            CoverageBucket::Full => self.fully_covered.push(file_name),
            CoverageBucket::Partial => self.partially_covered.push(CoverageEntry {
                file_name,
                covered: coverage.covered,
                total: coverage.total,
            }),
            CoverageBucket::None => self.non_covered.push(file_name),
        }
    }

    /// Number of classified files across all three buckets.
    pub fn classified_files(&self) -> usize {
        self.fully_covered.len() + self.partially_covered.len() + self.non_covered.len()
    }
}

/// Dialogue-pass statistics for one target locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueSummary {
    pub code: String,
    pub files_loaded: usize,
    pub failed_files: usize,
    pub elements_updated: usize,
    pub entries_updated: usize,
}

/// Everything an overlay run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayReport {
    pub locales: Vec<LocaleSummary>,
    pub dialogue: Vec<DialogueSummary>,
    /// True if the dialogue pass was aborted.
    pub dialogue_failed: bool,
}

impl OverlayReport {
    pub fn total_files_loaded(&self) -> usize {
        self.locales.iter().map(|l| l.files_loaded).sum()
    }

    /// Files that failed to parse in either pass.
    pub fn failed_files(&self) -> usize {
        self.locales.iter().map(|l| l.failed_files).sum::<usize>()
            + self.dialogue.iter().map(|d| d.failed_files).sum::<usize>()
    }

    pub fn locale(&self, code: &str) -> Option<&LocaleSummary> {
        self.locales.iter().find(|l| l.code == code)
    }

    pub fn dialogue_for(&self, code: &str) -> Option<&DialogueSummary> {
        self.dialogue.iter().find(|d| d.code == code)
    }
}

/// Write the summary to `log`.
pub fn emit(report: &OverlayReport, log: &dyn LogSink) {
    let total = report.total_files_loaded();
    log.with_color(
        &format!(
            "{} Loaded {} translation {}",
            SUCCESS_MARK,
            total,
            plural(total, "file", "files")
        ),
        LogColor::Green,
    );

    for locale in &report.locales {
        emit_locale(locale, log);
    }

    for dialogue in &report.dialogue {
        log.info(&format!(
            "dialogue \"{}\": {} {} updated, {} text {} updated",
            dialogue.code,
            dialogue.elements_updated,
            plural(dialogue.elements_updated, "element", "elements"),
            dialogue.entries_updated,
            plural(dialogue.entries_updated, "entry", "entries"),
        ));
    }

    let failed = report.failed_files();
    if failed > 0 {
        log.warning(&format!(
            "{} {} {} could not be parsed",
            FAILURE_MARK,
            failed,
            plural(failed, "file", "files")
        ));
    }
}

fn emit_locale(locale: &LocaleSummary, log: &dyn LogSink) {
    log.info(&format!(
        "locale \"{}\": {} covered {} from {} {}",
        locale.code,
        locale.covered_fields,
        plural(locale.covered_fields, "field", "fields"),
        locale.files_loaded,
        plural(locale.files_loaded, "file", "files"),
    ));

    if !locale.fully_covered.is_empty() {
        log.with_color(
            &format!("  fully covered ({}):", locale.fully_covered.len()),
            LogColor::Green,
        );
        for name in &locale.fully_covered {
            log.info(&format!("    - {}", name));
        }
    }

    if !locale.partially_covered.is_empty() {
        log.with_color(
            &format!("  partially covered ({}):", locale.partially_covered.len()),
            LogColor::Yellow,
        );
        for entry in &locale.partially_covered {
            log.info(&format!(
                "    - {} ({}/{})",
                entry.file_name, entry.covered, entry.total
            ));
        }
    }

    if !locale.non_covered.is_empty() {
        log.with_color(
            &format!("  not covered ({}):", locale.non_covered.len()),
            LogColor::Red,
        );
        for name in &locale.non_covered {
            log.info(&format!("    - {}", name));
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
