use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, WEBFLUX_DESCRIPTOR, stdout};

#[test]
fn test_list_descriptor() -> Result<()> {
    let test = CliTest::with_file("hints/webflux.json", WEBFLUX_DESCRIPTOR)?;

    let output = test.list_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "WebFluxAutoConfiguration  CLASS|PUBLIC_CONSTRUCTORS  2 resolved, 1 by name\n\n1 hint, 3 types\n"
    );

    Ok(())
}

#[test]
fn test_list_builtin_filtered() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .list_command()
        .args(["--builtin", "--trigger", "WebFluxAutoConfiguration"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "org.springframework.boot.autoconfigure.web.reactive.WebFluxAutoConfiguration  CLASS|PUBLIC_CONSTRUCTORS  5 resolved, 8 by name\n\n1 hint, 13 types\n"
    );

    Ok(())
}

#[test]
fn test_list_nothing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.list_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No hints collected\n");

    Ok(())
}
