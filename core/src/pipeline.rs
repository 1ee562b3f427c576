use std::path::Path;

use crate::counter::FrequencyTable;
use crate::loader::read_text;
use crate::rank::{top_n, RankedEntry};
use crate::stopwords::StopWordSet;
use crate::tokenizer::tokenize;
use crate::{PipelineConfig, Result};

/// Count the words of one in-memory document that survive stop-word filtering.
pub fn count_words(document: &str, stop_words: &StopWordSet) -> FrequencyTable {
    let tokens = tokenize(document);
    let num_tokens = tokens.len();
    let kept = stop_words.filter(tokens);
    tracing::debug!(num_tokens, kept = kept.len(), "filtered tokens");
    FrequencyTable::from_tokens(kept)
}

/// Normalize, tokenize, filter, count and rank a document already in memory.
pub fn word_frequencies(document: &str, stop_words: &StopWordSet, n: usize) -> Vec<RankedEntry> {
    let table = count_words(document, stop_words);
    top_n(&table, n)
}

/// Load the stop-word list, then the document, and rank its words.
///
/// Either read failing aborts the run before anything is ranked.
pub fn run<P: AsRef<Path>>(input: P, config: &PipelineConfig) -> Result<Vec<RankedEntry>> {
    let stop_words = StopWordSet::load(&config.stop_words_path)?;
    let document = read_text(input.as_ref())?;
    let ranked = word_frequencies(&document, &stop_words, config.top_n);
    tracing::info!(input = %input.as_ref().display(), entries = ranked.len(), "ranked document");
    Ok(ranked)
}

/// Rank the combined word counts of several documents.
pub fn run_many<I, P>(inputs: I, config: &PipelineConfig) -> Result<Vec<RankedEntry>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let stop_words = StopWordSet::load(&config.stop_words_path)?;
    let mut total = FrequencyTable::new();
    let mut num_docs = 0usize;
    for input in inputs {
        let document = read_text(input.as_ref())?;
        total.merge(count_words(&document, &stop_words));
        num_docs += 1;
    }
    let ranked = top_n(&total, config.top_n);
    tracing::info!(num_docs, distinct = total.len(), entries = ranked.len(), "ranked documents");
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_sat_on_the_mat() {
        let sw = StopWordSet::parse("on");
        let r = word_frequencies("The cat sat on the mat. THE CAT RAN.", &sw, 25);
        let lines: Vec<String> = r.iter().map(|e| e.to_string()).collect();
        assert_eq!(lines, vec!["the - 3", "cat - 2", "sat - 1", "mat - 1", "ran - 1"]);
    }

    #[test]
    fn only_stop_words_yields_nothing() {
        let sw = StopWordSet::parse("and,or");
        assert!(word_frequencies("and or A b, C!", &sw, 25).is_empty());
        assert!(word_frequencies("", &sw, 25).is_empty());
    }

    #[test]
    fn limit_caps_output_length() {
        let doc: String = (0..40).map(|i| format!("word{i} ")).collect();
        let r = word_frequencies(&doc, &StopWordSet::default(), 25);
        assert_eq!(r.len(), 25);
        assert_eq!(r[0].word, "word0");
    }
}
