use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{RecordId, RecordIdError};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Row has fewer than three fields: {0:?}")]
    MissingField(String),
    #[error("Invalid record id")]
    InvalidId(#[from] RecordIdError),
}

/// A single raw dataset row: `id, text, label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub text: String,
    pub label: String,
}

impl Record {
    /// Parse a delimited row into a Record.
    ///
    /// This is the ONLY way to construct a Record from raw input. The first
    /// comma bounds the id and the last comma bounds the label, so commas
    /// inside the text field survive the parse.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let (id_field, rest) = line
            .split_once(',')
            .ok_or_else(|| RecordError::MissingField(line.to_string()))?;
        let (text_field, label_field) = rest
            .rsplit_once(',')
            .ok_or_else(|| RecordError::MissingField(line.to_string()))?;

        let id = RecordId::parse(id_field)?;

        Ok(Record {
            id,
            text: text_field.trim().to_string(),
            label: label_field.trim().to_string(),
        })
    }

    /// Render the record back into a delimited row.
    pub fn to_row(&self) -> String {
        format!("{}, {}, {}", self.id.as_str(), self.text, self.label)
    }
}
