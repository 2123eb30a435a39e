use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

#[derive(Debug, Error)]
pub enum RecordIdError {
    #[error("Record id is empty")]
    Empty,
    #[error("Record id contains whitespace: {0:?}")]
    EmbeddedWhitespace(String),
}

impl RecordId {
    /// Create a RecordId from a raw dataset field.
    ///
    /// Surrounding whitespace is trimmed; an id must be non-empty and must
    /// not contain interior whitespace after trimming.
    pub fn parse(raw: &str) -> Result<Self, RecordIdError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(RecordIdError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(RecordIdError::EmbeddedWhitespace(trimmed.to_string()));
        }

        Ok(RecordId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content-hash fingerprint of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyVersion(String);

impl VocabularyVersion {
    /// Fingerprint the vocabulary entries in order.
    ///
    /// Entries are hashed with a length prefix per entry, so the fingerprint
    /// distinguishes `["ab", "c"]` from `["a", "bc"]`.
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut hasher = Sha256::new();
        for entry in entries {
            let bytes = entry.as_ref().as_bytes();
            hasher.update((bytes.len() as u64).to_be_bytes());
            hasher.update(bytes);
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        VocabularyVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
