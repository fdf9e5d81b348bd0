use civic_core::config::AppConfig;
use civic_core::error::ConfigError;

use std::fs;

use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file yields defaults.
///
/// **WHY THIS MATTERS**: Most users never create a config file; startup must
/// not require one.
#[test]
fn given_no_config_file_when_loading_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn given_partial_config_file_when_loading_then_missing_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("civiclens.toml"),
        "[generator]\nmodel = \"gemini-1.5-pro\"\ntemperature = 0.3\n",
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config.generator.model, "gemini-1.5-pro");
    assert_eq!(config.generator.temperature, Some(0.3));
    assert_eq!(config.generator.timeout_secs, 60);
    assert_eq!(config.version, 1);
}

/// **VALUE**: Verifies a corrupt file is a startup error, not silently ignored.
#[test]
fn given_corrupt_config_file_when_loading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("civiclens.toml"), "[generator\nmodel = ").unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_out_of_range_value_when_loading_then_returns_validation_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("civiclens.toml"),
        "[generator]\ntimeout_secs = 0\n",
    )
    .unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
