use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, WEBFLUX_DESCRIPTOR, stderr, stdout};

#[test]
fn test_emit_webflux_descriptor() -> Result<()> {
    let test = CliTest::with_file("hints/webflux.json", WEBFLUX_DESCRIPTOR)?;

    let output = test.emit_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ Wrote 3 records from 1 hint to reflect-config.json\n"
    );

    insta::assert_snapshot!(test.read_file("reflect-config.json")?, @r#"
    [
      {
        "name": "ClientCodecConfigurer",
        "allPublicConstructors": true
      },
      {
        "name": "ServerCodecConfigurer",
        "allPublicConstructors": true
      },
      {
        "name": "com.fasterxml.jackson.databind.ObjectMapper",
        "allPublicConstructors": true
      }
    ]
    "#);

    Ok(())
}

#[test]
fn test_emit_is_byte_identical_across_runs() -> Result<()> {
    let test = CliTest::with_file("hints/webflux.json", WEBFLUX_DESCRIPTOR)?;

    test.emit_command().arg("--builtin").output()?;
    let first = test.read_file("reflect-config.json")?;
    test.emit_command().arg("--builtin").output()?;
    let second = test.read_file("reflect-config.json")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_emit_empty_descriptor_writes_empty_array() -> Result<()> {
    let test = CliTest::with_file("hints/empty.json", r#"{ "hints": [] }"#)?;

    let output = test.emit_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("reflect-config.json")?, "[]\n");

    Ok(())
}

#[test]
fn test_emit_undefined_bit_writes_nothing() -> Result<()> {
    let test = CliTest::with_file(
        "hints/bad.json",
        r#"{ "hints": [{ "trigger": "WebFluxAutoConfiguration", "types": ["a.A"], "access": 129 }] }"#,
    )?;

    let output = test.emit_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("WebFluxAutoConfiguration"), "stderr: {err}");
    assert!(err.contains("undefined bits 0x80"), "stderr: {err}");
    assert!(!test.root().join("reflect-config.json").exists());

    Ok(())
}

#[test]
fn test_emit_invalid_type_keeps_previous_output() -> Result<()> {
    let test = CliTest::with_file(
        "hints/bad.json",
        r#"{ "hints": [{ "trigger": "T", "types": ["a.A", "not a type"], "access": 1 }] }"#,
    )?;
    test.write_file("reflect-config.json", "[]\n")?;

    let output = test.emit_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a type"));
    assert_eq!(test.read_file("reflect-config.json")?, "[]\n");

    Ok(())
}

#[test]
fn test_emit_builtin_with_trigger_filter_and_output() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .emit_command()
        .args([
            "--builtin",
            "--trigger",
            "ReactiveWebServerFactoryAutoConfiguration",
            "-o",
            "META-INF/native-image/reflect-config.json",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = test.read_file("META-INF/native-image/reflect-config.json")?;
    let value: Value = serde_json::from_str(&content)?;
    assert_eq!(
        value,
        serde_json::json!([{
            "name": "org.springframework.boot.web.reactive.context.AnnotationConfigReactiveWebServerApplicationContext",
            "allPublicConstructors": true,
            "allPublicMethods": true
        }])
    );

    Ok(())
}

#[test]
fn test_emit_repeated_triggers_are_kept() -> Result<()> {
    let test = CliTest::with_file(
        "hints/repeat.json",
        r#"{ "hints": [
            { "trigger": "T", "types": ["a.A"], "access": ["CLASS"] },
            { "trigger": "T", "types": ["a.A"], "access": ["CLASS", "DECLARED_FIELDS"] }
        ] }"#,
    )?;

    let output = test.emit_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: Value = serde_json::from_str(&test.read_file("reflect-config.json")?)?;
    assert_eq!(
        value,
        serde_json::json!([
            { "name": "a.A" },
            { "name": "a.A", "allDeclaredFields": true }
        ])
    );

    let output = test.emit_command().arg("--unique-triggers").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("declared more than once"));

    Ok(())
}

#[test]
fn test_emit_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".hintrc.json",
        r#"{ "descriptors": ["native/*.json"], "output": "build/reflect-config.json" }"#,
    )?;
    test.write_file("native/webflux.json", WEBFLUX_DESCRIPTOR)?;

    let output = test.emit_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("build/reflect-config.json").exists());

    Ok(())
}

#[test]
fn test_emit_missing_descriptor_argument() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.emit_command().arg("nope.json").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("nope.json"));

    Ok(())
}

#[test]
fn test_emit_unmatched_trigger_filter_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .emit_command()
        .args(["--builtin", "--trigger", "WebFluxAutoConfigration"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(
        err.contains("invalid hint for 'WebFluxAutoConfigration': trigger: filter matches no declared trigger"),
        "stderr: {err}"
    );
    assert!(!test.root().join("reflect-config.json").exists());

    Ok(())
}

#[test]
fn test_emit_unmatched_config_trigger_filter_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".hintrc.json",
        r#"{ "builtin": true, "triggers": ["WebFluxAutoConfiguration", "WebMvcAutoConfiguration"] }"#,
    )?;

    let output = test.emit_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'WebMvcAutoConfiguration'"));
    assert!(!test.root().join("reflect-config.json").exists());

    Ok(())
}

#[test]
fn test_emit_malformed_access_names_trigger() -> Result<()> {
    let test = CliTest::with_file(
        "hints/bad.json",
        r#"{ "hints": [{ "trigger": "WebFluxAutoConfiguration", "types": ["a.A"], "access": -1 }] }"#,
    )?;

    let output = test.emit_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(
        err.contains("invalid hint for 'WebFluxAutoConfiguration': access:"),
        "stderr: {err}"
    );
    assert!(!test.root().join("reflect-config.json").exists());

    Ok(())
}
