/*!
 * Streaming persistence of transliteration results.
 *
 * Each result is written and synced as soon as it is produced, so an
 * interrupted run keeps everything processed before the interruption.
 */

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Label in front of the source text line
pub const SOURCE_LABEL: &str = "梵文：";

/// Label in front of the transliteration line
pub const TRANSLITERATION_LABEL: &str = "音译：";

/// One successfully transliterated record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationResult {
    pub title: String,
    pub source: String,
    pub transliteration: String,
}

impl TransliterationResult {
    /// Render the output block: title, labeled source, labeled
    /// transliteration, then a blank separator line
    pub fn to_block(&self) -> String {
        format!(
            "{}\n{}{}\n{}{}\n\n",
            self.title, SOURCE_LABEL, self.source, TRANSLITERATION_LABEL, self.transliteration
        )
    }
}

/// Append-only destination for results
pub trait OutputSink {
    /// Persist a result. The result must be durable once this returns `Ok`.
    fn append(&mut self, result: &TransliterationResult) -> Result<(), AppError>;
}

/// Output file truncated once at creation, then appended per result
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create or truncate the output file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                FileManager::ensure_dir(parent)
                    .map_err(|e| AppError::File(format!("Failed to create {:?}: {}", parent, e)))?;
            }
        }

        fs::write(&path, b"")
            .map_err(|e| AppError::File(format!("Failed to truncate output file {:?}: {}", path, e)))?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn append(&mut self, result: &TransliterationResult) -> Result<(), AppError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::File(format!("Failed to open output file {:?}: {}", self.path, e)))?;

        file.write_all(result.to_block().as_bytes())
            .and_then(|_| file.flush())
            .and_then(|_| file.sync_data())
            .map_err(|e| AppError::File(format!("Failed to write to output file {:?}: {}", self.path, e)))?;

        Ok(())
    }
}

/// In-memory sink for tests
#[derive(Debug, Default)]
pub struct MemorySink {
    pub results: Vec<TransliterationResult>,
}

impl OutputSink for MemorySink {
    fn append(&mut self, result: &TransliterationResult) -> Result<(), AppError> {
        self.results.push(result.clone());
        Ok(())
    }
}
