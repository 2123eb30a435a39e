pub mod corpus;
pub mod record;

pub use crate::types::identifiers::RecordId;
pub use corpus::{Corpus, Document};
pub use record::{Record, RecordError};
