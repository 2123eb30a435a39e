pub mod counting;
pub mod pruning;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use counting::count_tokens;
pub use pruning::{prune_oov, PruneError};

use crate::types::identifiers::VocabularyVersion;

/// The distinct tokens of a corpus, in order of first occurrence
/// (first document, first position within that document).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    pub fn new(entries: Vec<String>) -> Self {
        Vocabulary { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.iter().any(|entry| entry == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Content-hash fingerprint over the entries in order.
    pub fn version(&self) -> VocabularyVersion {
        VocabularyVersion::from_entries(&self.entries)
    }
}

/// Corpus-wide occurrence counts, token to total occurrences summed over
/// all documents and all positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    inner: BTreeMap<String, usize>,
}

impl Counts {
    pub fn new(inner: BTreeMap<String, usize>) -> Self {
        Counts { inner }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.inner.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, usize)> {
        self.inner.iter().map(|(token, count)| (token, *count))
    }

    pub(crate) fn increment(&mut self, token: &str) -> usize {
        let count = self.inner.entry(token.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}
