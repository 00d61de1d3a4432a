use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

const ARTIFACT: &str = "src/localizer_generated.rs";

#[test]
fn test_generate_writes_artifact() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en-US.json", r#"{"HELLO": "Hello"}"#),
        ("de-DE.json", r#"{"HELLO": "Hallo"}"#),
    ])?;

    test.generate_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"))
        .stdout(predicate::str::contains("1 resource, 2 languages"));

    let artifact = test.read_file(ARTIFACT)?;
    assert!(artifact.contains("pub mod localizer {"));
    assert!(artifact.contains("pub enum Resource {"));
    assert!(artifact.contains(r#"Resource::HELLO => &[("de-DE", "Hallo"), ("en-US", "Hello")],"#));
    Ok(())
}

#[test]
fn test_generate_reports_coverage_gap_but_still_writes() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en-US.json", r#"{"HELLO": "Hello", "BYE": "Bye"}"#),
        ("de-DE.json", r#"{"BYE": "Tschüss"}"#),
    ])?;

    test.generate_command()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: HELLO is missing translations for de-DE",
        ))
        .stdout(predicate::str::contains("missing-translation"))
        .stdout(predicate::str::contains("0 errors, 1 warning"));

    assert!(test.exists(ARTIFACT));
    Ok(())
}

#[test]
fn test_generate_without_input_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/.gitkeep", "")?;

    test.generate_command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no-input"))
        .stdout(predicate::str::contains("No artifact was generated"));

    assert!(!test.exists(ARTIFACT));
    Ok(())
}

#[test]
fn test_generate_missing_messages_dir_is_config_error() -> Result<()> {
    let test = CliTest::new()?;

    test.generate_command()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn test_generate_skips_malformed_file_and_continues() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en-US.json", r#"{"HELLO": "Hello"}"#),
        ("de-DE.json", "{ not json }"),
    ])?;

    test.generate_command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error: failed to parse"))
        .stdout(predicate::str::contains("parse-error"));

    let artifact = test.read_file(ARTIFACT)?;
    assert!(artifact.contains(r#"("en-US", "Hello")"#));
    Ok(())
}

#[test]
fn test_generate_combined_file_takes_precedence() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en-US.json", r#"{"IGNORED": "Ignored"}"#),
        (
            "localization.json",
            r#"{"HELLO": {"en-US": "Hello", "de-DE": "Hallo"}}"#,
        ),
    ])?;

    test.generate_command().assert().success();

    let artifact = test.read_file(ARTIFACT)?;
    assert!(artifact.contains("HELLO"));
    assert!(!artifact.contains("IGNORED"));
    Ok(())
}

#[test]
fn test_generate_honors_module_name_flag() -> Result<()> {
    let test = CliTest::with_messages(&[("en-US.json", r#"{"HELLO": "Hello"}"#)])?;

    test.generate_command()
        .args(["--module-name", "strings"])
        .assert()
        .success();

    let artifact = test.read_file(ARTIFACT)?;
    assert!(artifact.contains("pub mod strings {"));
    Ok(())
}

#[test]
fn test_generate_honors_output_flag() -> Result<()> {
    let test = CliTest::with_messages(&[("en-US.json", r#"{"HELLO": "Hello"}"#)])?;

    test.generate_command()
        .args(["--output", "generated/strings.rs"])
        .assert()
        .success();

    assert!(test.exists("generated/strings.rs"));
    assert!(!test.exists(ARTIFACT));
    Ok(())
}

#[test]
fn test_generate_reads_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locgenrc.json",
        r#"{
  "messagesRoot": "./i18n",
  "outputFile": "./src/strings.rs",
  "moduleName": "strings"
}"#,
    )?;
    test.write_file("i18n/en-US.json", r#"{"HELLO": "Hello"}"#)?;

    test.generate_command().assert().success();

    let artifact = test.read_file("src/strings.rs")?;
    assert!(artifact.contains("pub mod strings {"));
    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en-US.json", r#"{"HELLO": "Hello", "BYE": "Bye"}"#),
        ("de-DE.json", r#"{"HELLO": "Hallo", "BYE": "Tschüss"}"#),
    ])?;

    test.generate_command().assert().success();
    let first = test.read_file(ARTIFACT)?;

    test.generate_command().assert().success();
    let second = test.read_file(ARTIFACT)?;

    assert_eq!(first, second);
    Ok(())
}
