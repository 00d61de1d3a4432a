use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_check_reports_without_writing() -> Result<()> {
    let test = CliTest::with_messages(&[(
        "localization.json",
        r#"{"HELLO": {"en-US": "Hello"}, "BYE": {"en-US": "Bye", "de-DE": "Tschüss"}}"#,
    )])?;

    test.check_command()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "HELLO is missing translations for de-DE",
        ));

    assert!(!test.exists("src/localizer_generated.rs"));
    Ok(())
}

#[test]
fn test_check_clean_input() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en-US.json", r#"{"HELLO": "Hello"}"#),
        ("de-DE.json", r#"{"HELLO": "Hallo"}"#),
    ])?;

    test.check_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_duplicate_definition() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("de-DE.json", r#"{"HELLO": "Hallo"}"#),
        ("de-DE.extra.json", r#"{"HELLO": "Servus"}"#),
    ])?;

    test.check_command()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "HELLO already has a translation for de-DE",
        ))
        .stdout(predicate::str::contains("duplicate-definition"));
    Ok(())
}

#[test]
fn test_check_verbose_lists_files() -> Result<()> {
    let test = CliTest::with_messages(&[("en-US.json", r#"{"HELLO": "Hello"}"#)])?;

    test.check_command()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("reading"))
        .stdout(predicate::str::contains("en-US.json"));
    Ok(())
}
