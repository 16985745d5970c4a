/*!
 * Tests for error types
 */

use mantra_translit::errors::{AppError, ConfigError, ProviderError};

/// Provider errors render their details
#[test]
fn test_provider_error_display_shouldIncludeDetails() {
    let error = ProviderError::ApiError {
        status_code: 503,
        message: "overloaded".to_string(),
    };
    assert_eq!(error.to_string(), "API responded with error: 503 - overloaded");
    assert_eq!(ProviderError::Timeout(1500).to_string(), "Request timed out after 1500 ms");
}

/// Errors convert into AppError through From
#[test]
fn test_app_error_from_conversions_shouldWrap() {
    let app: AppError = ProviderError::EmptyResponse.into();
    assert!(matches!(app, AppError::Provider(ProviderError::EmptyResponse)));

    let app: AppError = ConfigError::MissingCredential("GOOGLE_API_KEY".to_string()).into();
    assert!(app.to_string().contains("GOOGLE_API_KEY"));

    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let app: AppError = io.into();
    assert!(matches!(app, AppError::File(ref m) if m.contains("read-only")));

    let app: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app, AppError::Unknown(_)));
}
