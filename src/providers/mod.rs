/*!
 * Provider implementations for text-generation services.
 *
 * This module contains client implementations for the transliteration collaborator:
 * - Gemini: Google Generative Language API integration
 * - Mock: deterministic provider for tests and dry runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all text-generation providers
///
/// This trait defines the interface the pipeline depends on, allowing a
/// hosted model and a deterministic fake to be used interchangeably.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Generate text for a prompt
    ///
    /// # Arguments
    /// * `prompt` - The full instruction to send
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The generated text or an error
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Box<P> {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        (**self).generate(prompt).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        (**self).test_connection().await
    }
}

pub mod gemini;
pub mod mock;
