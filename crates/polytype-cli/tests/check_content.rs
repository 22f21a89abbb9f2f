use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

const CONTENT: &str = r#"{
    "phrases": [
        { "language": "es", "main": "Hola, mundo", "en": "Hello, world", "zh-cn": "你好，世界", "ru": "Привет, мир" },
        { "language": "fr", "main": "Bonjour", "en": "Good day", "zh-cn": "你好", "ru": "Добрый день" }
    ],
    "flags": { "es": "es.png", "en": "en.png", "zh-cn": "cn.png", "ru": "ru.png" }
}"#;

fn write_content(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("content.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_check_prints_summary() {
    let dir = tempdir().unwrap();
    let content = write_content(dir.path(), CONTENT);

    cargo_bin_cmd!("polytype")
        .env("POLYTYPE_HOME", dir.path())
        .env_remove("POLYTYPE_CONFIG")
        .arg("check")
        .arg("--content")
        .arg(&content)
        .assert()
        .success()
        .stdout(predicate::str::contains("Phrases: 2"))
        .stdout(predicate::str::contains("Languages: es, fr"))
        .stdout(predicate::str::contains("Missing flags: fr"));
}

#[test]
fn test_check_uses_content_path_from_config() {
    let dir = tempdir().unwrap();
    let content = write_content(dir.path(), CONTENT);
    fs::write(
        dir.path().join("config.toml"),
        format!("content_path = {:?}\n", content.display().to_string()),
    )
    .unwrap();

    cargo_bin_cmd!("polytype")
        .env("POLYTYPE_HOME", dir.path())
        .env_remove("POLYTYPE_CONFIG")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phrases: 2"));
}

#[test]
fn test_check_missing_file_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("polytype")
        .env("POLYTYPE_HOME", dir.path())
        .env_remove("POLYTYPE_CONFIG")
        .arg("check")
        .arg("--content")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read content"));
}

#[test]
fn test_check_malformed_json_fails() {
    let dir = tempdir().unwrap();
    let content = write_content(dir.path(), "{ \"phrases\": [");

    cargo_bin_cmd!("polytype")
        .env("POLYTYPE_HOME", dir.path())
        .env_remove("POLYTYPE_CONFIG")
        .arg("check")
        .arg("--content")
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse content"));
}

#[test]
fn test_check_empty_phrase_list_fails() {
    let dir = tempdir().unwrap();
    let content = write_content(dir.path(), r#"{ "phrases": [], "flags": {} }"#);

    cargo_bin_cmd!("polytype")
        .env("POLYTYPE_HOME", dir.path())
        .env_remove("POLYTYPE_CONFIG")
        .arg("check")
        .arg("--content")
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No phrases found"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let content = write_content(dir.path(), CONTENT);
    fs::write(dir.path().join("config.toml"), "wrap_ratio = 2.5\n").unwrap();

    cargo_bin_cmd!("polytype")
        .env("POLYTYPE_HOME", dir.path())
        .env_remove("POLYTYPE_CONFIG")
        .arg("check")
        .arg("--content")
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrap_ratio"));
}

#[test]
fn test_load_failure_is_logged() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("polytype")
        .env("POLYTYPE_HOME", dir.path())
        .env_remove("POLYTYPE_CONFIG")
        .env_remove("POLYTYPE_LOG")
        .arg("check")
        .arg("--content")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure();

    let log = fs::read_to_string(dir.path().join("logs").join("polytype.log")).unwrap();
    assert!(log.contains("failed to load content"));
}
