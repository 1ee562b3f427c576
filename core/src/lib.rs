pub mod config;
pub mod counter;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod rank;
pub mod stopwords;
pub mod tokenizer;

pub use config::PipelineConfig;
pub use counter::FrequencyTable;
pub use error::{Error, Result};
pub use rank::RankedEntry;
pub use stopwords::StopWordSet;

/// Number of ranked lines printed when no other limit is given.
pub const DEFAULT_TOP_N: usize = 25;

/// Stop-word list looked up in the working directory by default.
pub const DEFAULT_STOP_WORDS_FILE: &str = "stop_words.txt";
