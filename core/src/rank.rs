use serde::{Deserialize, Serialize};
use std::fmt;

use crate::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.word, self.count)
    }
}

/// Highest counts first, at most `n` entries. Equal counts keep first-encounter order.
pub fn top_n(table: &FrequencyTable, n: usize) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = table
        .iter()
        .map(|(word, count)| RankedEntry { word: word.to_owned(), count })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

/// One `"<word> - <count>"` line per entry, each newline-terminated.
pub fn format_lines(entries: &[RankedEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        out.push_str(&e.to_string());
        out.push('\n');
    }
    out
}
