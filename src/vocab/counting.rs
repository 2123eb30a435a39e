use crate::document::Corpus;
use crate::vocab::{Counts, Vocabulary};

/// Build the frequency vocabulary of a corpus.
///
/// Counts map each token to its total occurrence count across every
/// document and every position. The vocabulary lists the distinct tokens
/// in order of first occurrence, which keeps the vocabulary fingerprint
/// deterministic for a given corpus. The vocabulary is exactly the key
/// set of the counts.
///
/// Counting never fails: an empty corpus, or a corpus of empty documents,
/// yields an empty vocabulary and empty counts.
pub fn count_tokens(corpus: &Corpus) -> (Vocabulary, Counts) {
    let mut counts = Counts::default();
    let mut entries = Vec::new();

    for document in corpus.iter() {
        for token in document.iter() {
            if counts.increment(token) == 1 {
                entries.push(token.clone());
            }
        }
    }

    (Vocabulary::new(entries), counts)
}
