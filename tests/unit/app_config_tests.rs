/*!
 * Tests for app configuration functionality
 */

use anyhow::Result;
use std::time::Duration;
use mantra_translit::app_config::{Config, LogLevel};
use mantra_translit::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.input_file, "extracted_mantras2.txt");
    assert_eq!(config.output_file, "transliteration_results.txt");
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.pacing.rate_limit_delay_ms, 4100);
    assert_eq!(config.pacing.request_delay(), Duration::from_millis(4100));
    assert_eq!(config.pacing.request_timeout(), Some(Duration::from_secs(90)));
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.gemini.api_key.is_empty());
}

/// The default pacing stays within the default quota
#[test]
fn test_default_pacing_shouldRespectQuota() {
    let mut config = Config::default();
    config.gemini.api_key = "key".to_string();

    let rpm = config.pacing.effective_requests_per_minute();
    assert!(rpm > 14.6 && rpm < 14.7);
    assert!(config.validate().is_ok());
}

/// A missing key is a credential error
#[test]
fn test_validate_withoutApiKey_shouldReportMissingCredential() {
    let config = Config::default();

    match config.validate() {
        Err(ConfigError::MissingCredential(var)) => assert_eq!(var, "GOOGLE_API_KEY"),
        other => panic!("expected missing credential, got {:?}", other),
    }
    assert!(config.validate_settings().is_ok());
}

/// A delay faster than the quota is rejected
#[test]
fn test_validate_withDelayAboveQuota_shouldFail() {
    let mut config = Config::default();
    config.gemini.api_key = "key".to_string();
    config.pacing.rate_limit_delay_ms = 1000;

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    config.pacing.requests_per_minute = None;
    assert!(config.validate().is_ok());
}

/// Out-of-range temperature is rejected
#[test]
fn test_validate_withBadTemperature_shouldFail() {
    let mut config = Config::default();
    config.gemini.api_key = "key".to_string();
    config.gemini.temperature = Some(3.5);

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

/// A zero timeout disables the per-call limit
#[test]
fn test_request_timeout_withZero_shouldBeDisabled() {
    let mut config = Config::default();
    config.pacing.request_timeout_secs = 0;

    assert_eq!(config.pacing.request_timeout(), None);
}

/// Partial files are completed with defaults and never carry the key
#[test]
fn test_load_or_default_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"output_file": "out.txt", "gemini": {"model": "gemini-2.0-flash", "api_key": "leaked"}, "log_level": "debug"}"#,
    )?;

    let config = Config::load_or_default(&path)?;

    assert_eq!(config.output_file, "out.txt");
    assert_eq!(config.input_file, "extracted_mantras2.txt");
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert!(config.gemini.api_key.is_empty());
    assert_eq!(config.pacing.rate_limit_delay_ms, 4100);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// A missing file falls back to defaults
#[test]
fn test_load_or_default_withMissingFile_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("absent.json"))?;

    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    Ok(())
}

/// Invalid JSON is an error
#[test]
fn test_load_or_default_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_default(&path).is_err());
    Ok(())
}

/// The serialized config does not contain the API key
#[test]
fn test_serialize_config_shouldOmitApiKey() -> Result<()> {
    let mut config = Config::default();
    config.gemini.api_key = "secret-key".to_string();

    let json = serde_json::to_string(&config)?;

    assert!(!json.contains("secret-key"));
    assert!(!json.contains("api_key"));
    Ok(())
}
