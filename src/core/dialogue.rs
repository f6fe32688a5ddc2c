//! Dialogue overlay: patches text entries that dialogue elements already have.

use std::path::Path;

use glob::Pattern;

use crate::{
    core::{
        DialogueElement, LocaleRecord, file_scanner::LocaleFiles, log::LogSink, parse_locale_file,
    },
    issues::OverlayIssue,
};

/// Combined record of every file under a dialogue directory.
#[derive(Debug, Default)]
pub struct DialogueTexts {
    pub texts: LocaleRecord,
    pub files_loaded: usize,
    pub failed_files: usize,
}

/// Counts from patching one locale into the dialogue store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogueUpdate {
    pub elements_updated: usize,
    pub entries_updated: usize,
}

/// Parse every translation file under `dir` and merge them in walk order.
///
/// Later files win on duplicate keys. Files that fail to parse are logged and
/// skipped. Nothing here is gated by the reference locale.
pub fn load_dialogue_texts(dir: &Path, ignores: &[Pattern], log: &dyn LogSink) -> DialogueTexts {
    let mut loaded = DialogueTexts::default();

    for item in LocaleFiles::new(dir).ignoring(ignores.iter().cloned()) {
        let file = match item {
            Ok(file) => file,
            Err(e) => {
                log.issue(&OverlayIssue::WalkFailure(e));
                continue;
            }
        };

        match parse_locale_file(&file) {
            Ok(record) => {
                log.debug(&format!(
                    "dialogue file {} ({} entries)",
                    file.path.display(),
                    record.len()
                ));
                loaded.files_loaded += 1;
                loaded.texts.extend(record);
            }
            Err(source) => {
                loaded.failed_files += 1;
                log.issue(&OverlayIssue::ParseFailure {
                    path: file.path,
                    source,
                });
            }
        }
    }

    loaded
}

/// Write `texts` into the `code` table of every element.
///
/// Each element gets a `code` table if it has none. A text id is written
/// only if the element already defines it in at least one locale, so no
/// element ever gains a text id it did not have.
pub fn overlay_dialogue(
    elements: &mut [DialogueElement],
    code: &str,
    texts: &LocaleRecord,
) -> DialogueUpdate {
    let mut update = DialogueUpdate::default();

    for element in elements.iter_mut() {
        element.locale_mut(code);

        let known: Vec<(&String, &String)> = texts
            .iter()
            .filter(|(text_id, _)| element.knows_text_id(text_id))
            .collect();
        if known.is_empty() {
            continue;
        }

        let table = element.locale_mut(code);
        for (text_id, text) in &known {
            table.insert((*text_id).clone(), (*text).clone());
        }
        update.elements_updated += 1;
        update.entries_updated += known.len();
    }

    update
}
