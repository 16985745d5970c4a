/*!
 * # mantra-translit - batch transliteration of Sanskrit mantras
 *
 * Reads a text file of numbered mantras, asks a hosted text-generation
 * model to transliterate each one, and appends every result to an output
 * file as soon as it arrives.
 *
 * ## Architecture
 *
 * - `app_config`: Configuration management
 * - `transliteration`: the processing core:
 *   - `transliteration::segmenter`: splits input text into titled records
 *   - `transliteration::prompts`: prompt template
 *   - `transliteration::pipeline`: paced, failure-tolerant runner
 *   - `transliteration::sink`: streaming output persistence
 * - `providers`: text-generation clients:
 *   - `providers::gemini`: Google Gemini API client
 *   - `providers::mock`: deterministic provider for tests
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod transliteration;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use errors::{AppError, ConfigError, ProviderError};
pub use transliteration::{build_prompt, segment, PipelineRunner, Record, TransliterationResult};
