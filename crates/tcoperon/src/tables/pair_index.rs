use super::{delimited_reader, record_line, text_field};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tcoperon_common::{Result, TcError};

/// Single-valued mapping read from a headed, tab-separated two-column table
///
/// Rows are `[value, key, ...]`. Later rows replace earlier rows with the same
/// key. Rows with fewer than two columns are fatal.
#[derive(Debug, Clone, Default)]
pub(crate) struct PairIndex {
    map: HashMap<String, String>,
    rows: usize,
    replaced: usize,
}

impl PairIndex {
    pub(crate) fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self> {
        let mut csv_reader = delimited_reader(reader, b'\t', true);
        let mut index = Self::default();

        for result in csv_reader.byte_records() {
            let record = result.map_err(|e| TcError::csv(source, e))?;

            let (Some(value), Some(key)) = (text_field(&record, 0), text_field(&record, 1)) else {
                return Err(TcError::format(
                    source,
                    record_line(&record),
                    format!("expected at least 2 tab-separated columns, got {}", record.len()),
                ));
            };

            index.rows += 1;
            if index.map.insert(key.into_owned(), value.into_owned()).is_some() {
                index.replaced += 1;
            }
        }

        Ok(index)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Data rows read, header excluded
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    /// Rows whose key had already been seen
    pub(crate) fn replaced(&self) -> usize {
        self.replaced
    }
}
