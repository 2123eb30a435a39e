use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::dataset::manifest::{DatasetManifest, ProcessConfig};
use crate::dataset::reader::{self, HEADER};
use crate::document::{Record, RecordError};
use crate::vocab::Vocabulary;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output directory already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] RecordError),
    #[error("Vocabulary fingerprint mismatch: manifest says {expected}, entries hash to {actual}")]
    VocabularyMismatch { expected: String, actual: String },
}

/// DatasetWriter is single-threaded and non-reentrant by design.
pub struct DatasetWriter {
    config: ProcessConfig,
}

impl DatasetWriter {
    pub fn new(config: ProcessConfig) -> Self {
        Self { config }
    }

    /// Persist a processed generation of the dataset.
    ///
    /// Writes `records.txt` (header line plus one delimited row per
    /// record, record order preserved), `vocabulary.json`, and
    /// `manifest.json` into a temp directory, then renames it into place.
    /// A crashed run leaves no partial output at `output_dir`.
    pub fn write(
        &self,
        records: &[Record],
        vocabulary: &Vocabulary,
        output_dir: &Path,
    ) -> Result<ProcessedDataset, DatasetError> {
        if output_dir.exists() {
            return Err(DatasetError::OutputExists(output_dir.to_path_buf()));
        }

        let vocabulary_version = vocabulary.version();

        let manifest = DatasetManifest {
            vocabulary_version: vocabulary_version.clone(),
            process_config: self.config.clone(),
            created_at: Utc::now(),
            record_count: records.len(),
            vocabulary_size: vocabulary.len(),
        };

        // Deterministic-but-unique temp dir: the first 12 hex chars of the
        // vocabulary fingerprint keep concurrent builds of different
        // generations from colliding under the same parent.
        let temp_suffix = format!("tmp.{}", &vocabulary_version.as_str()[7..19]);
        let temp_dir = output_dir.with_extension(temp_suffix);

        // Clean up any stale temp dir from a crashed previous run of THIS
        // specific generation
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(&temp_dir)?;

        // Write records.txt
        let records_path = temp_dir.join("records.txt");
        let mut f_rec = fs::File::create(records_path)?;
        writeln!(f_rec, "{HEADER}")?;
        for record in records {
            writeln!(f_rec, "{}", record.to_row())?;
        }
        f_rec.sync_all()?;

        // Write vocabulary.json
        let vocab_path = temp_dir.join("vocabulary.json");
        let f_vocab = fs::File::create(vocab_path)?;
        serde_json::to_writer_pretty(&f_vocab, vocabulary)?;
        f_vocab.sync_all()?;

        // Write manifest.json
        let manifest_path = temp_dir.join("manifest.json");
        let f_man = fs::File::create(manifest_path)?;
        serde_json::to_writer_pretty(&f_man, &manifest)?;
        f_man.sync_all()?;

        // Atomic rename
        fs::rename(&temp_dir, output_dir)?;

        Ok(ProcessedDataset {
            root: output_dir.to_path_buf(),
            manifest,
        })
    }
}

// This is intentionally thin:
// no mutation
// no "update" methods
// runtime reads only
#[derive(Debug)]
pub struct ProcessedDataset {
    pub root: PathBuf,
    pub manifest: DatasetManifest,
}

impl ProcessedDataset {
    /// Open a previously written dataset directory.
    pub fn open(root: &Path) -> Result<Self, DatasetError> {
        let f = fs::File::open(root.join("manifest.json"))?;
        let manifest: DatasetManifest = serde_json::from_reader(f)?;

        Ok(ProcessedDataset {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// Load the vocabulary and verify it against the manifest.
    ///
    /// The fingerprint is recomputed from the entries on every load, so a
    /// vocabulary file edited behind the manifest's back is rejected.
    pub fn load_vocabulary(&self) -> Result<Vocabulary, DatasetError> {
        let f = fs::File::open(self.root.join("vocabulary.json"))?;
        let vocabulary: Vocabulary = serde_json::from_reader(f)?;

        let actual = vocabulary.version();
        if actual != self.manifest.vocabulary_version {
            return Err(DatasetError::VocabularyMismatch {
                expected: self.manifest.vocabulary_version.as_str().to_string(),
                actual: actual.as_str().to_string(),
            });
        }

        Ok(vocabulary)
    }

    /// Load the processed records, header line skipped.
    pub fn load_records(&self) -> Result<Vec<Record>, DatasetError> {
        reader::read_records(&self.root.join("records.txt"))
    }
}
