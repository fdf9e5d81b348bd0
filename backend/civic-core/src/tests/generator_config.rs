use crate::config::{AppConfig, GeneratorConfig};
use crate::error::ConfigError;
use crate::{DEFAULT_MODEL, GEMINI_API_BASE_URL};

use std::time::Duration;

#[test]
fn given_default_config_when_inspected_then_points_at_gemini_flash() {
    let config = GeneratorConfig::default();

    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.api_base_url, GEMINI_API_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(60));
    assert!(config.generation_config().is_none());
    assert!(config.validate().is_ok());
    assert!(AppConfig::default().validate().is_ok());
}

/// **VALUE**: Verifies a base URL without trailing slash is normalised.
///
/// **BUG THIS CATCHES**: `Url::join` replaces the last segment when the base
/// lacks a slash, so `.../v1beta` + `models/...` would lose `v1beta`.
#[test]
fn given_base_url_without_slash_when_normalised_then_slash_appended() {
    let config = GeneratorConfig::default().with_api_base_url("http://127.0.0.1:9999/v1beta");

    assert_eq!(
        config.normalized_api_base_url(),
        "http://127.0.0.1:9999/v1beta/"
    );
}

#[test]
fn given_invalid_values_when_validating_then_each_is_rejected() {
    let cases = [
        GeneratorConfig::default().with_model(""),
        GeneratorConfig::default().with_model("gemini 1.5"),
        GeneratorConfig::default().with_api_base_url("ftp://example.org"),
        GeneratorConfig {
            timeout_secs: 0,
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            timeout_secs: 601,
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            temperature: Some(2.5),
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            max_output_tokens: Some(0),
            ..GeneratorConfig::default()
        },
    ];

    for config in cases {
        let result = config.validate();
        assert!(
            matches!(result, Err(ConfigError::ValidationError { .. })),
            "Expected validation error for {config:?}"
        );
    }
}

#[test]
fn given_future_version_when_validating_then_rejected() {
    let config = AppConfig {
        version: 2,
        ..AppConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_optional_settings_when_building_generation_config_then_carried_over() {
    let config = GeneratorConfig {
        temperature: Some(0.2),
        max_output_tokens: Some(256),
        ..GeneratorConfig::default()
    };

    let generation = config.generation_config().unwrap();

    assert_eq!(generation.temperature, Some(0.2));
    assert_eq!(generation.max_output_tokens, Some(256));
}
