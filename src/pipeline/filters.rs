use std::collections::BTreeSet;

use regex::Regex;

/// Compiled token-level rewrite rules.
///
/// Compiled once per preprocessor rather than per token. The patterns are
/// static, so construction cannot fail at runtime.
pub struct TokenFilters {
    abbreviation: Regex,
    digit_runs: Regex,
    residual_separators: Regex,
}

impl TokenFilters {
    pub fn new() -> Self {
        Self {
            abbreviation: Regex::new(r"[A-Z]{2,}").unwrap(),
            digit_runs: Regex::new(r"\d+[,.-]*").unwrap(),
            residual_separators: Regex::new(r"[-,.]+").unwrap(),
        }
    }

    /// Lowercase every token except abbreviations.
    ///
    /// A token containing a run of two or more uppercase letters keeps its
    /// case. The transform is positional: duplicates are each rewritten in
    /// place, never located by value.
    pub fn normalize_case(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| {
                if self.abbreviation.is_match(&token) {
                    token
                } else {
                    token.to_lowercase()
                }
            })
            .collect()
    }

    /// Strip digit runs (with trailing `,.-`) and residual separator runs.
    ///
    /// Tokens emptied by the rewrite are kept here; the length cut at the
    /// end of the pipeline discards them.
    pub fn strip_numerals(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| {
                let stripped = self.digit_runs.replace_all(&token, "");
                self.residual_separators.replace_all(&stripped, "").into_owned()
            })
            .collect()
    }
}

impl Default for TokenFilters {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop tokens found in the stop list.
pub fn strip_stop_words(tokens: Vec<String>, stop_words: &BTreeSet<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !stop_words.contains(token))
        .collect()
}

/// Drop tokens consisting entirely of ASCII punctuation.
///
/// Builds a fresh vector in one pass. Removing matches from the sequence
/// while scanning it skips the element after each removal, so a document
/// with consecutive punctuation tokens would keep every other one.
pub fn strip_punctuation_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !is_punctuation_token(token))
        .collect()
}

fn is_punctuation_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

/// Drop tokens shorter than two characters.
pub fn drop_short_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| token.chars().count() >= 2)
        .collect()
}
