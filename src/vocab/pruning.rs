use thiserror::Error;

use crate::document::{Corpus, Document};
use crate::vocab::{Counts, Vocabulary};

#[derive(Debug, Error)]
pub enum PruneError {
    #[error("Token {token:?} appears in document {document} but has no count")]
    UnknownToken { token: String, document: usize },
}

/// Remove out-of-vocabulary tokens from a corpus and its vocabulary.
///
/// A token is retained iff `counts[token] >= threshold`; a count exactly
/// equal to the threshold is kept. Retained tokens keep their relative
/// order and multiplicity within their document. Every input document has
/// a document at the same position in the output — a document whose tokens
/// are all removed becomes an empty sequence, never dropped. The output
/// vocabulary is the input vocabulary minus the removed tokens, input
/// order preserved.
///
/// Inputs are not mutated; the outputs are fresh allocations. Each
/// document is rebuilt by filtering into a new token list in one pass, so
/// repeated low-frequency tokens are all removed.
///
/// `threshold == 0` is a valid no-op since no count is below zero.
///
/// Fails with [`PruneError::UnknownToken`] if a token present in a
/// document is absent from the counts. That signals a contract violation
/// between counter output and pruner input, and is propagated rather than
/// treated as a zero count.
pub fn prune_oov(
    corpus: &Corpus,
    vocabulary: &Vocabulary,
    counts: &Counts,
    threshold: usize,
) -> Result<(Corpus, Vocabulary), PruneError> {
    let mut pruned_documents = Vec::with_capacity(corpus.len());

    for (position, document) in corpus.iter().enumerate() {
        let mut retained = Vec::with_capacity(document.len());
        for token in document.iter() {
            let count = counts.get(token).ok_or_else(|| PruneError::UnknownToken {
                token: token.clone(),
                document: position,
            })?;
            if count >= threshold {
                retained.push(token.clone());
            }
        }
        pruned_documents.push(Document::new(retained));
    }

    let pruned_entries = vocabulary
        .iter()
        .filter(|entry| counts.get(entry).map_or(true, |count| count >= threshold))
        .cloned()
        .collect();

    Ok((Corpus::new(pruned_documents), Vocabulary::new(pruned_entries)))
}
