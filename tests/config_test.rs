//! Integration tests for Settings layered loading.
//!
//! Environment variables are injected through `Environment::source` so the
//! tests never depend on (or mutate) the process environment.

use std::collections::HashMap;
use std::fs;

use config::Environment;
use tempfile::TempDir;

use morse_trie::application::ApplicationError;
use morse_trie::config::{Settings, ENV_PREFIX};

fn env(vars: &[(&str, &str)]) -> Environment {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(map))
}

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("morse.toml");
    fs::write(&global, "strict = true\nnull_marker = \"?\"\n").unwrap();

    let settings = Settings::load_with(Some(global.as_path()), None, env(&[])).expect("load settings");

    assert!(settings.strict);
    assert_eq!(settings.null_marker, "?");
    assert!(!settings.show_codes, "unspecified field keeps default");
}

#[test]
fn given_explicit_config_when_load_then_overrides_global() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("morse.toml");
    let local = dir.path().join("local.toml");
    fs::write(&global, "strict = true\nnull_marker = \"?\"\n").unwrap();
    fs::write(&local, "strict = false\nshow_codes = true\n").unwrap();

    let settings =
        Settings::load_with(Some(global.as_path()), Some(local.as_path()), env(&[])).expect("load settings");

    assert!(!settings.strict);
    assert!(settings.show_codes);
    assert_eq!(settings.null_marker, "?", "inherited from global");
}

#[test]
fn given_env_vars_when_load_then_override_all_files() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("local.toml");
    fs::write(&local, "show_codes = false\nnull_marker = \"x\"\n").unwrap();

    let settings = Settings::load_with(
        None,
        Some(local.as_path()),
        env(&[("MORSE_SHOW_CODES", "true"), ("MORSE_NULL_MARKER", "∅")]),
    )
    .expect("load settings");

    assert!(settings.show_codes);
    assert_eq!(settings.null_marker, "∅");
}

#[test]
fn given_missing_global_config_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let settings = Settings::load_with(Some(missing.as_path()), None, env(&[])).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_config_when_load_then_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = Settings::load_with(None, Some(missing.as_path()), env(&[]));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_toml_when_load_then_reports_config_error() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("bad.toml");
    fs::write(&local, "strict = \"maybe\"\n").unwrap();

    let err = Settings::load_with(None, Some(local.as_path()), env(&[])).unwrap_err();

    assert!(err.to_string().contains("parse"), "got: {}", err);
}

#[test]
fn given_settings_when_converted_then_render_options_match() {
    let settings = Settings {
        strict: false,
        null_marker: "-".to_string(),
        show_codes: true,
    };
    let options = settings.render_options();
    assert_eq!(options.null_marker, "-");
    assert!(options.show_codes);
}
