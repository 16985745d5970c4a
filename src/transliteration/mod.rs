/*!
 * Mantra transliteration core.
 *
 * - `segmenter`: splits raw text into titled records
 * - `prompts`: the fixed instruction sent per record
 * - `pipeline`: paced, failure-tolerant processing loop
 * - `sink`: streaming persistence of results
 */

// Re-export main types for easier usage
pub use self::pipeline::{PipelineRunner, PipelineSettings};
pub use self::prompts::build_prompt;
pub use self::segmenter::{segment, segment_with_report, Record, SegmentReport};
pub use self::sink::{FileSink, MemorySink, OutputSink, TransliterationResult};

// Submodules
pub mod pipeline;
pub mod prompts;
pub mod segmenter;
pub mod sink;
