pub mod filters;
pub mod lemmatize;

use std::collections::BTreeSet;

pub use filters::TokenFilters;
pub use lemmatize::{Lemmatizer, WhitespaceLemmatizer};

use crate::document::{Corpus, Document, Record};

/// Turns raw record text into filtered token documents.
///
/// The language model is an injected collaborator, never ambient state:
/// callers wrap their NLP backend in a [`Lemmatizer`] and hand it to the
/// preprocessor. The bundled [`WhitespaceLemmatizer`] is the v0 backend.
pub struct Preprocessor<L> {
    lemmatizer: L,
    stop_words: BTreeSet<String>,
    filters: TokenFilters,
}

impl Default for Preprocessor<WhitespaceLemmatizer> {
    fn default() -> Self {
        Self::new(WhitespaceLemmatizer, BTreeSet::new())
    }
}

impl<L> Preprocessor<L>
where
    L: Lemmatizer,
{
    pub fn new(lemmatizer: L, stop_words: BTreeSet<String>) -> Self {
        Self {
            lemmatizer,
            stop_words,
            filters: TokenFilters::new(),
        }
    }

    /// Lemmatize and filter one text into its token sequence.
    ///
    /// Filter order matches the dataset convention: stop words, then
    /// punctuation tokens, then case normalization, then numeral
    /// stripping, then the minimum-length cut.
    pub fn process(&self, text: &str) -> Vec<String> {
        let lemmas = self.lemmatizer.lemmatize(text);

        let tokens = filters::strip_stop_words(lemmas, &self.stop_words);
        let tokens = filters::strip_punctuation_tokens(tokens);
        let tokens = self.filters.normalize_case(tokens);
        let tokens = self.filters.strip_numerals(tokens);
        filters::drop_short_tokens(tokens)
    }

    /// Process every record into a document, preserving record order.
    pub fn process_corpus(&self, records: &[Record]) -> Corpus {
        let documents = records
            .iter()
            .map(|record| Document::new(self.process(&record.text)))
            .collect();

        Corpus::new(documents)
    }
}
