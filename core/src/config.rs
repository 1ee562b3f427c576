use std::path::PathBuf;

use crate::{DEFAULT_STOP_WORDS_FILE, DEFAULT_TOP_N};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Comma-separated stop-word list, resolved against the working directory when relative.
    pub stop_words_path: PathBuf,
    /// Maximum number of ranked entries to keep.
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { stop_words_path: PathBuf::from(DEFAULT_STOP_WORDS_FILE), top_n: DEFAULT_TOP_N }
    }
}

impl PipelineConfig {
    pub fn new() -> Self { Self::default() }

    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = path.into();
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
