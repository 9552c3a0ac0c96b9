//! Operon pair reader
//!
//! The operon table is space-delimited with no header: each row names two GI
//! accessions predicted to share an operon, optionally followed by further
//! columns. Rows are read lazily so the table never has to fit in memory.

use crate::tables::{delimited_reader, open_input, record_line, text_field};
use std::io::Read;
use std::path::{Path, PathBuf};
use tcoperon_common::{Result, TcError};

/// Two GI accessions from one operon row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperonPair {
    pub gi1: String,
    pub gi2: String,
    /// One-based line in the operon table
    pub line: u64,
}

/// One row of the operon table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperonRow {
    Pair(OperonPair),
    /// Row with fewer than two accessions
    Malformed { line: u64, fields: usize },
}

/// Format error for a row with fewer than two accessions
pub fn malformed_row_error(source: &Path, line: u64, fields: usize) -> TcError {
    TcError::format(
        source,
        line,
        format!("expected 2 space-separated GI accessions, got {}", fields),
    )
}

/// Streaming iterator over operon rows
pub struct OperonReader<R: Read> {
    records: csv::ByteRecordsIntoIter<R>,
    source: PathBuf,
}

impl OperonReader<Box<dyn Read>> {
    /// Open an operon table (optionally gzip-compressed)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Ok(Self::from_reader(open_input(path)?, path))
    }
}

impl<R: Read> OperonReader<R> {
    pub fn from_reader(reader: R, source: impl AsRef<Path>) -> Self {
        Self {
            records: delimited_reader(reader, b' ', false).into_byte_records(),
            source: source.as_ref().to_path_buf(),
        }
    }

    /// Path or label of the table, for messages
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl<R: Read> Iterator for OperonReader<R> {
    type Item = Result<OperonRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(TcError::csv(&self.source, e))),
        };

        let line = record_line(&record);
        let row = match (text_field(&record, 0), text_field(&record, 1)) {
            (Some(gi1), Some(gi2)) => OperonRow::Pair(OperonPair {
                gi1: gi1.into_owned(),
                gi2: gi2.into_owned(),
                line,
            }),
            _ => OperonRow::Malformed {
                line,
                fields: record.len(),
            },
        };

        Some(Ok(row))
    }
}
