pub mod identifiers;

pub use identifiers::{RecordId, RecordIdError, VocabularyVersion};
