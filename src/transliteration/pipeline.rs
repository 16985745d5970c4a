/*!
 * Sequential, rate-paced transliteration of segmented records.
 *
 * Every record is sent to the provider in turn. Successful results are
 * handed to the sink immediately; failed records are logged and skipped.
 * A fixed delay follows every record to stay within the provider quota.
 */

use log::{debug, error, info, warn};
use std::time::Duration;

use crate::errors::{AppError, ProviderError};
use crate::providers::Provider;
use crate::transliteration::prompts::build_prompt;
use crate::transliteration::segmenter::Record;
use crate::transliteration::sink::{OutputSink, TransliterationResult};

/// Longest source preview printed per record
const PREVIEW_CHARS: usize = 100;

/// Pacing and timeout settings for a run
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Pause after every record
    pub request_delay: Duration,
    /// Upper bound for a single provider call
    pub request_timeout: Option<Duration>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_millis(4100),
            request_timeout: None,
        }
    }
}

/// Drives records through the provider into a sink
#[derive(Debug)]
pub struct PipelineRunner<P: Provider> {
    provider: P,
    settings: PipelineSettings,
}

impl<P: Provider> PipelineRunner<P> {
    pub fn new(provider: P, settings: PipelineSettings) -> Self {
        Self { provider, settings }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Process all records in order and return how many were persisted.
    ///
    /// Provider failures never abort the run. A sink failure does, since a
    /// result that cannot be stored would otherwise be lost silently.
    pub async fn run<S: OutputSink>(&self, records: &[Record], sink: &mut S) -> Result<usize, AppError> {
        let total = records.len();
        let mut processed_count = 0;

        for (i, record) in records.iter().enumerate() {
            info!("[{}/{}] Processing: {}", i + 1, total, record.title);
            debug!("Source: {}", preview(&record.body));

            match self.transliterate(record).await {
                Ok(transliteration) => {
                    info!("Transliteration: {}", transliteration);
                    let result = TransliterationResult {
                        title: record.title.clone(),
                        source: record.body.clone(),
                        transliteration,
                    };
                    sink.append(&result)?;
                    processed_count += 1;
                }
                Err(e) => {
                    error!("Transliteration failed for {}: {}", record.title, e);
                }
            }

            if !self.settings.request_delay.is_zero() {
                tokio::time::sleep(self.settings.request_delay).await;
            }
        }

        if processed_count == 0 && total > 0 {
            warn!("No transliterations were produced");
        }

        Ok(processed_count)
    }

    /// Transliterate one record, treating timeouts and blank answers as failures
    async fn transliterate(&self, record: &Record) -> Result<String, ProviderError> {
        let prompt = build_prompt(&record.title, &record.body);

        let response = match self.settings.request_timeout {
            Some(limit) => tokio::time::timeout(limit, self.provider.generate(&prompt))
                .await
                .map_err(|_| ProviderError::Timeout(limit.as_millis() as u64))?,
            None => self.provider.generate(&prompt).await,
        }?;

        let text = response.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}

// Truncates on a char boundary so multi-byte scripts stay valid
fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
