use chrono::{DateTime, Utc};

use crate::types::identifiers::VocabularyVersion;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessConfig {
    pub version: String,
    pub hash_algorithm: String,
    pub oov_threshold: usize,
}

impl ProcessConfig {
    pub fn v0(oov_threshold: usize) -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
            oov_threshold,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DatasetManifest {
    pub vocabulary_version: VocabularyVersion,
    pub process_config: ProcessConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub record_count: usize,
    pub vocabulary_size: usize,
}
