use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Underscore counts as a separator, so only ASCII letters and digits survive.
    static ref NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9]+").expect("valid regex");
}

/// Collapse every run of non-word characters into a single space and lowercase the rest.
pub fn normalize(text: &str) -> String {
    NON_WORD.replace_all(text, " ").to_ascii_lowercase()
}

/// Tokenize text into lowercase words in document order, duplicates retained.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text).split_whitespace().map(str::to_owned).collect()
}
