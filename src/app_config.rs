use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and overriding configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Text file containing the numbered mantras
    #[serde(default = "default_input_file")]
    pub input_file: String,

    /// File the transliterations are appended to
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Gemini provider settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Request pacing settings
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Gemini service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Model name (e.g., "gemini-2.5-flash")
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Service endpoint URL, up to and including the API version
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,

    /// API key. Never read from or written to the config file;
    /// filled from the environment at startup.
    #[serde(skip)]
    pub api_key: String,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 2.0).
    /// Unset leaves the model default in place.
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_gemini_model(),
            endpoint: default_gemini_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            temperature: None,
        }
    }
}

/// Pacing between consecutive provider calls
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PacingConfig {
    /// Delay in milliseconds after every record, success or failure
    #[serde(default = "default_rate_limit_delay_ms")]
    pub rate_limit_delay_ms: u64,

    /// Quota enforced by the provider, in requests per minute.
    ///
    /// When set, validation rejects a delay that would exceed it.
    /// None disables the check.
    #[serde(default = "default_requests_per_minute")]
    pub requests_per_minute: Option<u32>,

    /// Upper bound for a single provider call, in seconds.
    /// An expired call counts as a failed record. 0 disables it.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            rate_limit_delay_ms: default_rate_limit_delay_ms(),
            requests_per_minute: default_requests_per_minute(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl PacingConfig {
    /// Delay applied after every record
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.rate_limit_delay_ms)
    }

    /// Per-call timeout, if enabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Requests per minute the configured delay allows
    pub fn effective_requests_per_minute(&self) -> f64 {
        if self.rate_limit_delay_ms == 0 {
            return f64::INFINITY;
        }
        60_000.0 / self.rate_limit_delay_ms as f64
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

fn default_input_file() -> String {
    "extracted_mantras2.txt".to_string()
}

fn default_output_file() -> String {
    "transliteration_results.txt".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_rate_limit_delay_ms() -> u64 {
    4100 // ~14.6 requests per minute
}

fn default_requests_per_minute() -> Option<u32> {
    // Free-tier quota for gemini-2.5-flash
    Some(15)
}

fn default_request_timeout_secs() -> u64 {
    90
}

/// Read the API key from the environment.
///
/// Runs before any file I/O so a missing key aborts the run immediately.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingCredential(API_KEY_ENV_VAR.to_string())),
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when it doesn't exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.api_key.is_empty() {
            return Err(ConfigError::MissingCredential(API_KEY_ENV_VAR.to_string()));
        }

        self.validate_settings()
    }

    /// Validate everything except the credential
    pub fn validate_settings(&self) -> Result<(), ConfigError> {
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::Invalid("Gemini model name must not be empty".to_string()));
        }

        if self.gemini.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("Gemini endpoint must not be empty".to_string()));
        }

        if let Some(temperature) = self.gemini.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::Invalid(format!(
                    "Temperature must be between 0.0 and 2.0, got {}",
                    temperature
                )));
            }
        }

        if let Some(quota) = self.pacing.requests_per_minute {
            if quota == 0 {
                return Err(ConfigError::Invalid("requests_per_minute must be greater than 0".to_string()));
            }

            let rpm = self.pacing.effective_requests_per_minute();
            if rpm > quota as f64 {
                return Err(ConfigError::Invalid(format!(
                    "rate_limit_delay_ms {} allows {:.1} requests per minute, above the quota of {}",
                    self.pacing.rate_limit_delay_ms, rpm, quota
                )));
            }
        }

        if self.input_file.trim().is_empty() || self.output_file.trim().is_empty() {
            return Err(ConfigError::Invalid("Input and output paths must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_file: default_input_file(),
            output_file: default_output_file(),
            gemini: GeminiConfig::default(),
            pacing: PacingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
