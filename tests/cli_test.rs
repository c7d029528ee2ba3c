//! Integration tests for the siop-env binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn siop_env() -> Command {
    let mut cmd = Command::new(cargo_bin("siop-env"));
    cmd.env_remove("SIOP_ENV").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("environment"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_defaults_to_development() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.assert().success().stdout(
        "environment: DEVELOPMENT\nname: DEVELOPMENT\nsource: default\n",
    );
    Ok(())
}

#[test]
fn cli_reads_variable_case_insensitively() -> Result<(), Box<dyn std::error::Error>> {
    for value in ["DEVELOPMENT", "development", "Development"] {
        let mut cmd = siop_env();
        cmd.env("SIOP_ENV", value).arg("show");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("environment: DEVELOPMENT"))
            .stdout(predicate::str::contains("source: SIOP_ENV variable"));
    }
    Ok(())
}

#[test]
fn cli_variable_beats_property() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.env("SIOP_ENV", "test")
        .args(["-D", "siop.environment=production"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("environment: TEST"));
    Ok(())
}

#[test]
fn cli_property_used_without_variable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.args(["show", "-D", "siop.environment=Production"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("environment: PRODUCTION"))
        .stdout(predicate::str::contains("source: siop.environment property"));
    Ok(())
}

#[test]
fn cli_unknown_name_is_other() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.env("SIOP_ENV", "staging").args(["show", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["environment"], "OTHER");
    assert_eq!(value["name"], "STAGING");
    assert_eq!(value["source"], "variable");
    Ok(())
}

#[test]
fn cli_empty_variable_is_present() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.env("SIOP_ENV", "")
        .args(["-D", "siop.environment=production", "show", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["environment"], "OTHER");
    assert_eq!(value["name"], "");
    Ok(())
}

#[test]
fn cli_is_matching_environment_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.env("SIOP_ENV", "production").args(["is", "production"]);
    cmd.assert()
        .success()
        .stdout("PRODUCTION is PRODUCTION\n");
    Ok(())
}

#[test]
fn cli_is_mismatch_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.args(["is", "production", "--quiet"]);
    cmd.assert().code(1).stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_rejects_empty_property_name() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.args(["-D", "=production"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("property name is empty"));
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = siop_env();
    cmd.args(["--debug", "show", "--json"]);
    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("Environment resolved to DEVELOPMENT"));
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["name"], "DEVELOPMENT");
    Ok(())
}
