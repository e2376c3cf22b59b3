// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Integration tests for settings load/save.

use std::path::PathBuf;

use sonny::config::Settings;
use sonny::error::SonnyError;

#[test]
fn save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let mut settings = Settings::default();
    settings.voice.wake_word = "Hey Robot".to_string();
    settings.voice.rate = 1.4;
    settings.detection.default_mode = "clothing".to_string();
    settings.viewer.scene.wireframe = true;

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn missing_file_returns_defaults() {
    let loaded = Settings::load_from(&PathBuf::from("/nope/settings.toml")).unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn malformed_file_is_a_toml_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is { not toml").unwrap();

    match Settings::load_from(&path) {
        Err(SonnyError::Toml(_)) => {}
        other => panic!("expected TOML error, got {other:?}"),
    }
}

#[test]
fn out_of_range_values_fail_validation_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[voice]\nrate = 9.0\n").unwrap();

    match Settings::load_from(&path) {
        Err(SonnyError::Config(msg)) => assert!(msg.contains("voice.rate")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep").join("nested").join("settings.toml");
    Settings::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn sonny_home_honors_env_override() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("SONNY_HOME", dir.path());
    assert_eq!(Settings::sonny_home(), dir.path());
    assert_eq!(Settings::default_path(), dir.path().join("settings.toml"));
    std::env::remove_var("SONNY_HOME");
}
