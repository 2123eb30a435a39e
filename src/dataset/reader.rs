use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dataset::writer::DatasetError;
use crate::document::Record;

/// Header line emitted ahead of processed records, and tolerated at the
/// top of raw input.
pub const HEADER: &str = "id, text, label";

/// Read raw dataset rows from a delimited text file.
///
/// Raw dumps arrive headerless; files that already went through a
/// processing pass carry the `id, text, label` header. Both forms are
/// accepted: a leading header line is skipped rather than parsed as a
/// record, and the raw file is never rewritten. Blank lines are skipped.
pub fn read_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if index == 0 && is_header(trimmed) {
            continue;
        }

        records.push(Record::parse(trimmed)?);
    }

    Ok(records)
}

fn is_header(line: &str) -> bool {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    fields == ["id", "text", "label"]
}
