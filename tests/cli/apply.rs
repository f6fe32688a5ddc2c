use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const HOST: &str = r#"{
  "locales": {
    "en": { "greeting": "Hello", "farewell": "Bye" },
    "ch": { "greeting": "Hello", "farewell": "Bye" }
  },
  "dialogues": [
    { "id": "trader", "localization": { "en": { "hi": "Hi there" } } }
  ]
}"#;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("host.json", HOST)?;
    Ok(test)
}

#[test]
fn test_apply_reports_coverage() -> Result<()> {
    let test = project()?;
    test.write_file(
        "db/locales/ch/file1.json",
        r#"{"greeting": "你好", "extra": "x"}"#,
    )?;
    test.write_file(
        "db/locales/ch/file2.jsonc",
        "{\n  // all known\n  \"farewell\": \"再见\",\n}",
    )?;
    test.write_file("db/locales/ch/file3.json5", "{ nothing: 'known' }")?;

    let output = test.apply_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("Loaded 3 translation files"), "{out}");
    assert!(out.contains("locale \"ch\": 2 covered fields from 3 files"), "{out}");
    assert!(out.contains("fully covered (1):\n    - file2.jsonc"), "{out}");
    assert!(out.contains("partially covered (1):\n    - file1.json (1/2)"), "{out}");
    assert!(out.contains("not covered (1):\n    - file3.json5"), "{out}");

    Ok(())
}

#[test]
fn test_apply_writes_overlaid_snapshot() -> Result<()> {
    let test = project()?;
    test.write_file(
        "db/locales/ch/file1.json",
        r#"{"greeting": "你好", "extra": "x"}"#,
    )?;
    test.write_file(
        "db/locales/ch/dialogue/npc.json",
        r#"{"hi": "你好啊", "new": "新"}"#,
    )?;

    let output = test.apply_command().args(["--output", "out.json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let snapshot: Value = serde_json::from_str(&test.read_file("out.json")?)?;
    assert_eq!(snapshot["locales"]["ch"]["greeting"], "你好");
    assert_eq!(snapshot["locales"]["ch"]["farewell"], "Bye");
    assert!(snapshot["locales"]["ch"].get("extra").is_none());
    assert_eq!(
        snapshot["dialogues"][0]["localization"]["ch"],
        serde_json::json!({ "hi": "你好啊" })
    );
    assert!(stdout(&output).contains("dialogue \"ch\": 1 element updated, 1 text entry updated"));

    // The host snapshot itself is left alone.
    let original: Value = serde_json::from_str(&test.read_file("host.json")?)?;
    assert_eq!(original["locales"]["ch"]["greeting"], "Hello");

    Ok(())
}

#[test]
fn test_apply_deferred_matches_eager() -> Result<()> {
    let test = project()?;
    test.write_file("db/locales/ch/a.json", r#"{"greeting": "A"}"#)?;
    test.write_file("db/locales/ch/b.json", r#"{"greeting": "B"}"#)?;

    test.apply_command().args(["--output", "eager.json"]).output()?;
    test.apply_command()
        .args(["--deferred", "--output", "deferred.json"])
        .output()?;

    let eager: Value = serde_json::from_str(&test.read_file("eager.json")?)?;
    let deferred: Value = serde_json::from_str(&test.read_file("deferred.json")?)?;
    assert_eq!(eager, deferred);
    assert_eq!(eager["locales"]["ch"]["greeting"], "B");

    Ok(())
}

#[test]
fn test_apply_parse_failure_exits_one() -> Result<()> {
    let test = project()?;
    test.write_file("db/locales/ch/good.json", r#"{"greeting": "你好"}"#)?;
    test.write_file("db/locales/ch/bad.json", r#"{"greeting": "#)?;

    let output = test.apply_command().args(["--output", "out.json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("warning: failed to parse"), "{err}");
    assert!(err.contains("bad.json"), "{err}");
    assert!(err.contains("1 file could not be parsed"), "{err}");

    let snapshot: Value = serde_json::from_str(&test.read_file("out.json")?)?;
    assert_eq!(snapshot["locales"]["ch"]["greeting"], "你好");

    Ok(())
}

#[test]
fn test_apply_missing_locale_directory() -> Result<()> {
    let test = project()?;

    let output = test.apply_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("no translation directory for locale \"ch\""), "{out}");
    assert!(out.contains("Loaded 0 translation files"), "{out}");

    Ok(())
}

#[test]
fn test_apply_unknown_target_locale() -> Result<()> {
    let test = project()?;
    test.write_file("db/locales/ru/ui.json", r#"{"greeting": "Привет"}"#)?;

    let output = test
        .apply_command()
        .args(["--target-locale", "ru"])
        .output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("locale \"ru\" is unknown to the host"));

    Ok(())
}

#[test]
fn test_apply_reads_config_file() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".overlayrc.json",
        r#"{ "localesRoot": "i18n", "ignores": ["drafts/**"] }"#,
    )?;
    test.write_file("i18n/ch/ui.json", r#"{"greeting": "你好"}"#)?;
    test.write_file("i18n/ch/drafts/wip.json", r#"{"farewell": "草稿"}"#)?;

    let output = test.apply_command().args(["--output", "out.json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let snapshot: Value = serde_json::from_str(&test.read_file("out.json")?)?;
    assert_eq!(snapshot["locales"]["ch"]["greeting"], "你好");
    assert_eq!(snapshot["locales"]["ch"]["farewell"], "Bye");

    Ok(())
}

#[test]
fn test_apply_invalid_config_is_an_error() -> Result<()> {
    let test = project()?;
    test.write_file(".overlayrc.json", r#"{ "targetLocales": [] }"#)?;

    let output = test.apply_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("targetLocales"));

    Ok(())
}

#[test]
fn test_apply_missing_snapshot_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.apply_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read host snapshot"));

    Ok(())
}

#[test]
fn test_apply_without_dialogue_store() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "host.json",
        r#"{"locales": {"en": {"greeting": "Hello"}, "ch": {}}}"#,
    )?;
    test.write_file("db/locales/ch/ui.json", r#"{"greeting": "你好"}"#)?;
    test.write_file("db/locales/ch/dialogue/npc.json", r#"{"hi": "你好啊"}"#)?;

    let output = test.apply_command().args(["--output", "out.json"]).output()?;

    assert!(output.status.success());
    assert!(
        stderr(&output).contains("error: dialogue overlay failed: dialogue store is not available")
    );

    let snapshot: Value = serde_json::from_str(&test.read_file("out.json")?)?;
    assert_eq!(snapshot["locales"]["ch"]["greeting"], "你好");

    Ok(())
}

#[test]
fn test_apply_verbose_lists_files() -> Result<()> {
    let test = project()?;
    test.write_file("db/locales/ch/empty.json", "{}")?;
    test.write_file("db/locales/ch/ui.json", r#"{"greeting": "你好"}"#)?;

    let output = test.apply_command().arg("-v").output()?;
    let err = stderr(&output);

    assert!(err.contains("debug: empty.json: empty, skipped"), "{err}");
    assert!(err.contains("debug: ui.json: fully covered (1/1)"), "{err}");

    Ok(())
}
