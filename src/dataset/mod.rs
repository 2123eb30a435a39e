pub mod manifest;
pub mod reader;
pub mod writer;

pub use manifest::{DatasetManifest, ProcessConfig};
pub use reader::read_records;
pub use writer::{DatasetError, DatasetWriter, ProcessedDataset};
