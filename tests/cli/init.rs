use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .locgenrc.json"));

    let config = test.read_file(".locgenrc.json")?;
    assert!(config.contains("\"moduleName\""));
    assert!(config.contains("\"messagesRoot\""));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locgenrc.json", "{}")?;

    test.command()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
    Ok(())
}
