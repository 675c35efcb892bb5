// src/services/csv_table.rs

//! Codec for the 4-column result table shared by the ledger and the
//! shortlist artifact.

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::{error::ServiceError, models::result::ResultRecord};

pub const HEADER: [&str; 4] = ["name", "email", "Role", "score"];

/// Parses a whole table. Zero-length input is an empty table; anything else
/// must start with the exact header, and every row must parse.
pub fn decode(bytes: &[u8]) -> Result<Vec<ResultRecord>, ServiceError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| ServiceError::LedgerCorrupt(format!("unreadable header: {}", e)))?
        .clone();

    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if headers.iter().ne(HEADER) {
        return Err(ServiceError::LedgerCorrupt(format!(
            "unexpected header {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    reader
        .deserialize::<ResultRecord>()
        .enumerate()
        .map(|(i, row)| {
            // +2: one for the header line, one for 1-based numbering
            row.map_err(|e| ServiceError::LedgerCorrupt(format!("row {}: {}", i + 2, e)))
        })
        .collect()
}

/// Serializes the header followed by every record, CRLF-terminated.
/// An empty slice still yields the header line.
pub fn encode(records: &[ResultRecord]) -> Result<Vec<u8>, ServiceError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| ServiceError::LedgerCorrupt(format!("failed to encode header: {}", e)))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| ServiceError::LedgerCorrupt(format!("failed to encode row: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| ServiceError::LedgerCorrupt(format!("failed to flush table: {}", e)))
}
