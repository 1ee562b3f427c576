use std::collections::HashSet;
use std::path::Path;

use crate::loader::read_text;
use crate::Result;

/// Words excluded from counting: the entries of a comma-separated list plus every single ASCII letter.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Build the set from the contents of a stop-word file. Entries are trimmed; empty ones are dropped.
    pub fn parse(list: &str) -> Self {
        let mut words: HashSet<String> = list
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_owned)
            .collect();
        words.extend(('a'..='z').map(String::from));
        Self { words }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let list = read_text(path.as_ref())?;
        let set = Self::parse(&list);
        tracing::debug!(path = %path.as_ref().display(), stop_words = set.len(), "loaded stop words");
        Ok(set)
    }

    /// Exact, case-sensitive membership test against an already-lowercased token.
    pub fn is_stop_word(&self, token: &str) -> bool { self.words.contains(token) }

    /// Drop stop words, keeping survivors in their original order.
    pub fn filter<I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        tokens.into_iter().filter(|t| !self.is_stop_word(t)).collect()
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl Default for StopWordSet {
    /// Single letters only.
    fn default() -> Self { Self::parse("") }
}
