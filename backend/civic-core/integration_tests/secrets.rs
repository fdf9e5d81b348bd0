// Credential loading touches process-wide env vars, so every test that reads
// or writes GEMINI_API_KEY runs serially.

use civic_core::GEMINI_API_KEY_ENV;
use civic_core::error::SecretsError;
use civic_core::secrets::{KeySource, load_api_key, read_secrets_file};

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

const FILE_KEY: &str = "AIzaSyFILEb2C3d4E5f6G7h8I9j0KlMnOpQrStUv";
const ENV_KEY: &str = "AIzaSyENVab2C3d4E5f6G7h8I9j0KlMnOpQrStUv";

fn set_env_key(value: &str) {
    // SAFETY: tests touching the environment are #[serial]
    unsafe { std::env::set_var(GEMINI_API_KEY_ENV, value) };
}

fn clear_env_key() {
    // SAFETY: tests touching the environment are #[serial]
    unsafe { std::env::remove_var(GEMINI_API_KEY_ENV) };
}

fn secrets_file_with(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("secrets.toml");
    fs::write(&path, contents).unwrap();
    path
}

/// **VALUE**: Missing credential scenario: a `Missing` error naming the variable.
///
/// **WHY THIS MATTERS**: This is the fatal startup path; the message is the
/// only thing the user will see.
#[test]
#[serial]
fn given_no_env_and_no_file_when_loading_then_returns_missing_error() {
    // GIVEN: No env var and a secrets path that does not exist
    clear_env_key();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    // WHEN: Loading
    let err = load_api_key(&path).unwrap_err();

    // THEN: Missing, naming the variable and the file
    assert!(err.is_missing());
    let message = err.to_string();
    assert!(message.contains("GEMINI_API_KEY"));
    assert!(message.contains("absent.toml"));
}

#[test]
#[serial]
fn given_key_only_in_secrets_file_when_loading_then_file_key_used() {
    clear_env_key();
    let dir = TempDir::new().unwrap();
    let path = secrets_file_with(&dir, &format!("GEMINI_API_KEY = \"{FILE_KEY}\"\n"));

    let loaded = load_api_key(&path).unwrap();

    assert_eq!(loaded.key.as_str(), FILE_KEY);
    assert_eq!(loaded.source, KeySource::SecretsFile(path));
}

/// **VALUE**: Verifies the environment takes precedence over the secrets file.
#[test]
#[serial]
fn given_key_in_env_and_file_when_loading_then_env_wins() {
    set_env_key(ENV_KEY);
    let dir = TempDir::new().unwrap();
    let path = secrets_file_with(&dir, &format!("GEMINI_API_KEY = \"{FILE_KEY}\"\n"));

    let loaded = load_api_key(&path);
    clear_env_key();

    let loaded = loaded.unwrap();
    assert_eq!(loaded.key.as_str(), ENV_KEY);
    assert_eq!(loaded.source, KeySource::Environment);
}

/// **VALUE**: Verifies an empty env var counts as absent.
#[test]
#[serial]
fn given_empty_env_var_when_loading_then_falls_back_to_file() {
    set_env_key("   ");
    let dir = TempDir::new().unwrap();
    let path = secrets_file_with(&dir, &format!("GEMINI_API_KEY = \"{FILE_KEY}\"\n"));

    let loaded = load_api_key(&path);
    clear_env_key();

    assert_eq!(loaded.unwrap().key.as_str(), FILE_KEY);
}

#[test]
#[serial]
fn given_malformed_key_when_loading_then_returns_validation_error() {
    set_env_key("not-a-google-key-but-long-enough-to-pass");
    let dir = TempDir::new().unwrap();

    let result = load_api_key(&dir.path().join("absent.toml"));
    clear_env_key();

    assert!(matches!(result, Err(SecretsError::KeyValidation { .. })));
}

#[test]
fn given_secrets_file_without_key_when_reading_then_returns_none() {
    let dir = TempDir::new().unwrap();
    let path = secrets_file_with(&dir, "OTHER_SECRET = \"x\"\n");

    assert_eq!(read_secrets_file(&path).unwrap(), None);
}

#[test]
fn given_non_string_key_when_reading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = secrets_file_with(&dir, "GEMINI_API_KEY = 42\n");

    let result = read_secrets_file(&path);

    assert!(matches!(result, Err(SecretsError::Parse { .. })));
}

#[test]
fn given_invalid_toml_when_reading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = secrets_file_with(&dir, "GEMINI_API_KEY = \"unterminated\n");

    assert!(matches!(
        read_secrets_file(&path),
        Err(SecretsError::Parse { .. })
    ));
}
