use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .overlayrc.json"));

    let content = test.read_file(".overlayrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localesRoot"], "db/locales");
    assert_eq!(parsed["referenceLocale"], "en");
    assert_eq!(parsed["targetLocales"][0], "ch");
    assert_eq!(parsed["mergeStrategy"], "eager");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".overlayrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".overlayrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file("host.json", r#"{"locales": {"en": {"a": "A"}, "ch": {}}}"#)?;
    test.write_file("db/locales/ch/ui.json", r#"{"a": "甲"}"#)?;

    let output = test.apply_command().output()?;
    assert!(
        output.status.success(),
        "apply should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join(".overlayrc.json").exists());

    Ok(())
}
