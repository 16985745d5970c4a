use std::time::Duration;
use serde::{Serialize, Deserialize};
use reqwest::{Client, StatusCode};
use async_trait::async_trait;
use log::{debug, error};

use crate::app_config::GeminiConfig;
use crate::errors::ProviderError;
use crate::providers::Provider;

/// Header carrying the API key, so it never appears in request URLs
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini client for interacting with the Generative Language API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base URL including the API version
    endpoint: String,
    /// Model name
    model: String,
    /// Sampling temperature, if overridden
    temperature: Option<f32>,
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation turns
    pub contents: Vec<GeminiContent>,

    /// Sampling parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One conversation turn
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role of the sender (user, model)
    #[serde(default)]
    pub role: String,

    /// Content parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A text part
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

/// Generation parameters
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,

    /// Token usage information
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,

    /// Finish reason (e.g., `STOP`, `MAX_TOKENS`, `SAFETY`)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

/// Error envelope returned on non-2xx responses
#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    #[serde(default)]
    message: String,
}

impl GeminiRequest {
    /// Create a single-turn request from a user prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart { text: prompt.into() }],
            }],
            generation_config: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert(GenerationConfig { temperature: None, max_output_tokens: None })
            .temperature = Some(temperature);
        self
    }

    /// Cap the number of generated tokens
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation_config
            .get_or_insert(GenerationConfig { temperature: None, max_output_tokens: None })
            .max_output_tokens = Some(max_output_tokens);
        self
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &GeminiConfig) -> Self {
        let mut client = Self::new(
            config.api_key.clone(),
            config.endpoint.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        );
        client.temperature = config.temperature;
        client
    }

    /// URL of the generateContent action for the configured model
    pub fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Complete a generateContent request
    pub async fn complete(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let response = self.client.post(self.api_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // Drop the URL from the message before it reaches the logs
                let e = e.without_url();
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(Self::map_status_error(status, &error_text));
        }

        let gemini_response = response.json::<GeminiResponse>().await
            .map_err(|e| ProviderError::ParseError(e.without_url().to_string()))?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                "Gemini usage: {} prompt tokens, {} output tokens",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(gemini_response)
    }

    /// Turn a non-2xx response into a provider error
    pub fn map_status_error(status: StatusCode, body: &str) -> ProviderError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(message),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            },
        }
    }

    /// Extract text from the first candidate of a Gemini response
    pub fn extract_text_from_response(response: &GeminiResponse) -> String {
        response.candidates.first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }

    fn build_request(&self, prompt: &str) -> GeminiRequest {
        let request = GeminiRequest::from_prompt(prompt);
        match self.temperature {
            Some(temperature) => request.temperature(temperature),
            None => request,
        }
    }
}

#[async_trait]
impl Provider for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self.complete(self.build_request(prompt)).await?;
        Ok(Self::extract_text_from_response(&response))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = GeminiRequest::from_prompt("Hello").max_output_tokens(10);
        self.complete(request).await?;
        Ok(())
    }
}
