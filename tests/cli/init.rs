use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, WEBFLUX_DESCRIPTOR, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ Created .hintrc.json\n");

    let content = test.read_file(".hintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed.get("descriptors").is_some());
    assert!(parsed.get("output").is_some());
    assert!(parsed.get("uniqueTriggers").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".hintrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .hintrc.json already exists\n");
    assert_eq!(test.read_file(".hintrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("hints/webflux.json", WEBFLUX_DESCRIPTOR)?;

    let output = test.emit_command().output()?;
    assert!(
        output.status.success(),
        "Emit should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("reflect-config.json").exists());

    Ok(())
}
