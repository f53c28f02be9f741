//! Strips the parts of the input that the scanner must never see.
//!
//! This is a textual pass, not a tokenizer. String literals are not
//! understood, so a `//` or a `rankdir=` inside a quoted label is removed
//! along with everything after it on that line.

use regex::Regex;

#[derive(Debug, Clone)]
pub struct Normalizer {
    line_comment_re: Regex,
    rankdir_re: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            line_comment_re: Regex::new(r"//.*").unwrap(),
            rankdir_re: Regex::new(r"rankdir=.*;").unwrap(),
        }
    }

    /// Removes `//` comments (to the end of the line) and then every
    /// `rankdir=...;` directive.
    pub fn normalize(&self, input: &str) -> String {
        let no_comments = self.line_comment_re.replace_all(input, "");
        self.rankdir_re.replace_all(&no_comments, "").into_owned()
    }
}

/// Normalizes \p input with a freshly built `Normalizer`.
pub fn normalize(input: &str) -> String {
    Normalizer::new().normalize(input)
}
