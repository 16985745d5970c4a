use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::providers::Provider;
use crate::providers::gemini::Gemini;
use crate::transliteration::{
    segment_with_report, FileSink, PipelineRunner, PipelineSettings, SegmentReport,
};

// @module: Application controller for batch transliteration

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records persisted to the output file
    pub processed: usize,
    /// Records found in the input
    pub total: usize,
    /// Where the results were written
    pub output_file: PathBuf,
}

/// Main application controller for mantra transliteration
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the batch against the configured Gemini model
    pub async fn run(&self, check_connection: bool) -> Result<RunSummary> {
        let provider = Gemini::from_config(&self.config.gemini);
        self.run_with_provider(provider, check_connection).await
    }

    /// Run the batch with any provider
    pub async fn run_with_provider<P: Provider>(&self, provider: P, check_connection: bool) -> Result<RunSummary> {
        let start_time = Instant::now();
        let input_file = Path::new(&self.config.input_file);
        let output_file = PathBuf::from(&self.config.output_file);

        let report = Self::load_records(input_file)?;
        let total = report.records.len();
        info!("Found {} mantras to process", total);

        if check_connection {
            provider.test_connection().await
                .map_err(|e| anyhow!("Provider connection check failed: {}", e))?;
            info!("Provider connection check passed");
        }

        let mut sink = FileSink::create(&output_file)
            .with_context(|| format!("Failed to prepare output file: {:?}", output_file))?;
        info!("Cleared output file: {:?}", output_file);

        let settings = PipelineSettings {
            request_delay: self.config.pacing.request_delay(),
            request_timeout: self.config.pacing.request_timeout(),
        };
        let runner = PipelineRunner::new(provider, settings);

        let processed = runner.run(&report.records, &mut sink).await
            .context("Run aborted while writing results")?;

        if processed > 0 {
            info!(
                "Done in {}: transliterated {}/{} mantras, results saved to {:?}",
                Self::format_duration(start_time.elapsed()),
                processed,
                total,
                output_file
            );
        } else {
            error!("No transliterations were generated ({} mantras attempted)", total);
        }

        Ok(RunSummary {
            processed,
            total,
            output_file,
        })
    }

    /// Read and segment an input file, logging whatever the segmenter discarded
    pub fn load_records(input_file: &Path) -> Result<SegmentReport> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let content = FileManager::read_to_string(input_file)?;
        info!("Read input file: {:?}", input_file);

        let report = segment_with_report(&content);
        for title in &report.dropped_titles {
            warn!("Skipping title without content: {}", title);
        }
        if report.stray_lines > 0 {
            warn!(
                "Ignored {} line(s) before the first title in {:?}",
                report.stray_lines, input_file
            );
        }

        Ok(report)
    }

    // Format as "1m 05s" or "4.2s"
    fn format_duration(duration: std::time::Duration) -> String {
        let secs = duration.as_secs();
        if secs >= 60 {
            format!("{}m {:02}s", secs / 60, secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
