use serde::{Deserialize, Serialize};

/// An ordered sequence of tokens, post-lemmatization.
///
/// Token order corresponds to original word order and duplicates are
/// allowed. A document emptied by pruning stays in the corpus as an empty
/// sequence; it is never dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub tokens: Vec<String>,
}

impl Document {
    pub fn new(tokens: Vec<String>) -> Self {
        Document { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.tokens.iter()
    }
}

/// An ordered sequence of documents.
///
/// Document order is meaningful — documents correspond to dataset rows —
/// and is preserved by every operation in the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    pub documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Corpus { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Total token count across all documents.
    pub fn token_count(&self) -> usize {
        self.documents.iter().map(Document::len).sum()
    }
}
