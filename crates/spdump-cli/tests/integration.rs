//! Integration tests for the spdump binary

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn spdump_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("spdump");
    cmd.env("SPDUMP_CONFIG", config_dir.path().join("spdump.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spdump"));
}

#[test]
fn test_decode_fixture_text() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .arg("decode")
        .arg(fixture_path("dump_package.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: MySwiftPackage"))
        .stdout(predicate::str::contains(
            "ArgumentParser (key: swift-argument-parser-ArgumentParser)",
        ))
        .stdout(predicate::str::contains("byName   Logging"))
        .stdout(predicate::str::contains("target   MySwiftPackageCore"));
}

#[test]
fn test_decode_stdin_json() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .args(["decode", "--format", "json"])
        .write_stdin(r#"{"name": "Piped", "dependencies": [{"product": ["Foo", "Bar"]}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Piped\""))
        .stdout(predicate::str::contains("\"product\""));
}

#[test]
fn test_decode_short_product_array_fails() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .arg("decode")
        .write_stdin(r#"{"name": "Broken", "dependencies": [{"product": ["Foo"]}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dependencyName"))
        .stderr(predicate::str::contains("dependency #0"));
}

#[test]
fn test_decode_non_object_fails() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .arg("decode")
        .write_stdin(r#""not an object""#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON object"));
}

#[test]
fn test_config_set_and_get() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .args(["config", "set", "swift-path", "/opt/swift/bin/swift"])
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("spdump.toml")).unwrap_or_default();
    assert!(saved.contains("swift-path"));

    spdump_cmd(&dir)
        .args(["config", "get", "swift-path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/swift/bin/swift"));
}

#[test]
fn test_config_unknown_key_fails() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .args(["config", "set", "python-version", "3.12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_path_honors_env() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spdump.toml"));
}

#[test]
fn test_dump_with_missing_swift_fails() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .args(["config", "set", "swift-path", "/definitely/not/here/swift"])
        .assert()
        .success();

    spdump_cmd(&dir)
        .arg("dump")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("swift executable not found"));
}

#[test]
fn test_broken_config_warns_and_continues() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    assert!(fs::write(dir.path().join("spdump.toml"), "swift-path = [").is_ok());

    spdump_cmd(&dir)
        .arg("decode")
        .write_stdin(r#"{"name": "StillWorks"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: StillWorks"))
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_decode_null_known_fields() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .arg("decode")
        .write_stdin(r#"{"name": "Nulls", "dependencies": null, "products": [{"name": "Lib", "targets": null}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependencies (0):"));
}

#[test]
fn test_shape_error_names_field() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    spdump_cmd(&dir)
        .arg("decode")
        .write_stdin(r#"{"name": "Pkg", "platforms": [{"platformName": 7}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("platforms[0].platformName"));
}
