/*!
 * Live Gemini API tests. Ignored by default; run with
 * `GOOGLE_API_KEY=... cargo test -- --ignored`.
 */

use std::time::Duration;
use mantra_translit::providers::Provider;
use mantra_translit::providers::gemini::{Gemini, GeminiRequest};
use mantra_translit::transliteration::build_prompt;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-2.5-flash";

/// Test a raw generateContent call
#[tokio::test]
#[ignore]
async fn test_gemini_provider_withValidApiKey_shouldComplete() {
    let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        return;
    }

    let client = Gemini::new(api_key, ENDPOINT, MODEL, Duration::from_secs(60));
    let response = client.complete(GeminiRequest::from_prompt("Say hello!")).await.unwrap();

    let text = Gemini::extract_text_from_response(&response);
    assert!(!text.is_empty());
    println!("Gemini response: {}", text);
}

/// Test a transliteration prompt end to end
#[tokio::test]
#[ignore]
async fn test_gemini_provider_withMantraPrompt_shouldReturnTransliteration() {
    let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        return;
    }

    let client = Gemini::new(api_key, ENDPOINT, MODEL, Duration::from_secs(60));
    let prompt = build_prompt("M1.1 测试陀罗尼", "oṃ maṇi padme hūṃ");

    let text = client.generate(&prompt).await.unwrap();
    assert!(!text.trim().is_empty());
    println!("Transliteration: {}", text);
}

/// An invalid key is reported as an error, not a panic
#[tokio::test]
#[ignore]
async fn test_gemini_provider_withInvalidApiKey_shouldFail() {
    let client = Gemini::new("invalid-key", ENDPOINT, MODEL, Duration::from_secs(30));

    assert!(client.test_connection().await.is_err());
}
