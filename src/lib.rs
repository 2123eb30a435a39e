//! Deterministic text preprocessing for document classification datasets.
//!
//! `textprep` provides delimited-record ingestion, a lemmatize-and-filter
//! token pipeline, frequency vocabulary construction, out-of-vocabulary
//! pruning, and fingerprinted dataset persistence. All operations are
//! deterministic — identical inputs always produce identical outputs,
//! byte-for-byte.

pub mod dataset;
pub mod document;
pub mod pipeline;
pub mod types;
pub mod vocab;
