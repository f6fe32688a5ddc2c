//! The overlay run: main pass per target locale, then the dialogue pass.
//!
//! ```text
//! for each target code (in order):
//!     LocaleFiles ─► parse_locale_file ─► classify + merge::apply ─► LocaleSummary
//! then, for each target code:
//!     load_dialogue_texts ─► overlay_dialogue ─► DialogueSummary
//! finally:
//!     report::emit
//! ```
//!
//! Nothing in a run is fatal. Skipped units are logged through the
//! [`LogSink`] and the summary is always emitted.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::Pattern;

use crate::{
    core::{
        LocaleHost,
        coverage::classify,
        dialogue::{load_dialogue_texts, overlay_dialogue},
        file_scanner::LocaleFiles,
        log::LogSink,
        merge::{self, MergeStrategy, covered_entries},
        parse_locale_file,
    },
    issues::OverlayIssue,
    report::{self, DialogueSummary, LocaleSummary, OverlayReport},
};

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Directory holding one subdirectory per locale code.
    pub locales_root: PathBuf,
    pub reference_locale: String,
    /// Target locale codes, processed in this order.
    pub target_locales: Vec<String>,
    /// Name of the dialogue subdirectory inside each locale directory.
    pub dialogue_dir: String,
    /// Keep the dialogue subdirectory out of the main pass. When false, the
    /// main pass reads it and the dialogue pass does not run.
    pub exclude_dialogue: bool,
    pub merge_strategy: MergeStrategy,
    /// Root-relative glob patterns for files to skip.
    pub ignores: Vec<Pattern>,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            locales_root: PathBuf::from("db/locales"),
            reference_locale: "en".to_string(),
            target_locales: vec!["ch".to_string()],
            dialogue_dir: "dialogue".to_string(),
            exclude_dialogue: true,
            merge_strategy: MergeStrategy::Eager,
            ignores: Vec::new(),
        }
    }
}

/// Host accessors and log sink for a run.
pub struct OverlayContext<'a> {
    pub host: &'a mut dyn LocaleHost,
    pub log: &'a dyn LogSink,
}

pub struct Overlay {
    options: OverlayOptions,
}

impl Overlay {
    pub fn new(options: OverlayOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Run both passes to completion and emit the summary.
    pub fn run(&self, ctx: OverlayContext<'_>) -> OverlayReport {
        let OverlayContext { host, log } = ctx;
        let mut report = OverlayReport::default();

        for code in &self.options.target_locales {
            if let Some(summary) = self.overlay_locale(code, host, log) {
                report.locales.push(summary);
            }
        }

        if self.options.exclude_dialogue {
            match self.dialogue_pass(host, log) {
                Ok(summaries) => report.dialogue = summaries,
                Err(cause) => {
                    log.issue(&OverlayIssue::dialogue(cause));
                    report.dialogue_failed = true;
                }
            }
        } else {
            // Dialogue files already went through the main pass.
            log.info(&format!(
                "\"{}\" directories were merged by the main pass, skipping dialogue pass",
                self.options.dialogue_dir
            ));
        }

        report::emit(&report, log);
        report
    }

    fn locale_dir(&self, code: &str) -> PathBuf {
        self.options.locales_root.join(code)
    }

    fn main_files(&self, root: &Path) -> LocaleFiles {
        let files = LocaleFiles::new(root).ignoring(self.options.ignores.iter().cloned());
        if self.options.exclude_dialogue {
            files.excluding(&self.options.dialogue_dir)
        } else {
            files
        }
    }

    /// Main pass for one target code. `None` if the locale was skipped.
    fn overlay_locale(
        &self,
        code: &str,
        host: &mut dyn LocaleHost,
        log: &dyn LogSink,
    ) -> Option<LocaleSummary> {
        let root = self.locale_dir(code);
        if !root.is_dir() {
            log.issue(&OverlayIssue::MissingLocaleRoot {
                code: code.to_string(),
                path: root,
            });
            return None;
        }

        let Some(reference) = host.reference_record(&self.options.reference_locale) else {
            log.issue(&OverlayIssue::MissingReferenceLocale {
                code: self.options.reference_locale.clone(),
                target: code.to_string(),
            });
            return None;
        };

        if host.target_table(code).is_none() {
            log.issue(&OverlayIssue::MissingTargetLocale {
                code: code.to_string(),
            });
            return None;
        }

        let mut summary = LocaleSummary::new(code);
        let mut covered_keys: HashSet<String> = HashSet::new();

        for item in self.main_files(&root) {
            let file = match item {
                Ok(file) => file,
                Err(e) => {
                    log.issue(&OverlayIssue::WalkFailure(e));
                    continue;
                }
            };

            let record = match parse_locale_file(&file) {
                Ok(record) => record,
                Err(source) => {
                    summary.failed_files += 1;
                    log.issue(&OverlayIssue::ParseFailure {
                        path: file.path,
                        source,
                    });
                    continue;
                }
            };

            let name = display_name(&root, &file.path);
            let Some(coverage) = classify(&record, &reference) else {
                summary.empty_files += 1;
                log.debug(&format!("{}: empty, skipped", name));
                continue;
            };

            let units = covered_entries(&record, &reference);
            covered_keys.extend(units.keys().cloned());
            if let Some(target) = host.target_table(code) {
                merge::apply(target, units, self.options.merge_strategy);
            }

            log.debug(&format!(
                "{}: {} ({}/{})",
                name, coverage.bucket, coverage.covered, coverage.total
            ));
            summary.record(name, &coverage);
        }

        summary.covered_fields = covered_keys.len();
        Some(summary)
    }

    /// Dialogue pass for every target code.
    ///
    /// An `Err` aborts the whole pass; the caller logs it once.
    fn dialogue_pass(
        &self,
        host: &mut dyn LocaleHost,
        log: &dyn LogSink,
    ) -> Result<Vec<DialogueSummary>, OverlayIssue> {
        let mut summaries = Vec::new();

        for code in &self.options.target_locales {
            let dir = self.locale_dir(code).join(&self.options.dialogue_dir);
            if !dir.is_dir() {
                log.info(&format!(
                    "no dialogue directory for locale \"{}\" at {}",
                    code,
                    dir.display()
                ));
                continue;
            }

            let loaded = load_dialogue_texts(&dir, &self.options.ignores, log);
            let elements = host
                .dialogue_elements()
                .ok_or(OverlayIssue::MissingDialogueStore)?;
            let update = overlay_dialogue(elements, code, &loaded.texts);

            summaries.push(DialogueSummary {
                code: code.clone(),
                files_loaded: loaded.files_loaded,
                failed_files: loaded.failed_files,
                elements_updated: update.elements_updated,
                entries_updated: update.entries_updated,
            });
        }

        Ok(summaries)
    }
}

fn display_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
