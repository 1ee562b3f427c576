use std::collections::HashMap;

/// Occurrence counts per distinct word, remembering the order in which words were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>, // first-encounter order
}

impl FrequencyTable {
    pub fn new() -> Self { Self::default() }

    /// Count a filtered token stream in a single pass.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for t in tokens {
            table.add(t.into(), 1);
        }
        table
    }

    pub fn add(&mut self, word: String, count: u64) {
        match self.index.get(&word) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, count));
            }
        }
    }

    /// Fold another table into this one by adding counts word by word.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (word, count) in other.entries {
            self.add(word, count);
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Sum of all counts, i.e. the length of the counted stream.
    pub fn total(&self) -> u64 { self.entries.iter().map(|(_, c)| c).sum() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_exact_occurrences() {
        let t = FrequencyTable::from_tokens(["cat", "sat", "cat", "cat"]);
        assert_eq!(t.get("cat"), Some(3));
        assert_eq!(t.get("sat"), Some(1));
        assert_eq!(t.get("dog"), None);
        assert_eq!(t.len(), 2);
        assert_eq!(t.total(), 4);
    }

    #[test]
    fn iteration_follows_first_encounter() {
        let t = FrequencyTable::from_tokens(["b", "a", "b", "c"]);
        let words: Vec<&str> = t.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
    }

    #[test]
    fn merge_adds_counts() {
        let mut left = FrequencyTable::from_tokens(["rust", "cargo"]);
        let right = FrequencyTable::from_tokens(["crate", "rust", "rust"]);
        left.merge(right);
        assert_eq!(left.get("rust"), Some(3));
        assert_eq!(left.get("cargo"), Some(1));
        assert_eq!(left.get("crate"), Some(1));
        assert_eq!(left.total(), 5);
    }

    #[test]
    fn merge_is_commutative_on_counts() {
        let a = FrequencyTable::from_tokens(["x", "y", "y"]);
        let b = FrequencyTable::from_tokens(["y", "z"]);
        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);
        for w in ["x", "y", "z"] {
            assert_eq!(ab.get(w), ba.get(w));
        }
    }
}
