//! UniProt accession to protein family index
//!
//! Reads a UniProt cross-reference export: tab-separated, no header, one row
//! per UniProt accession, with database cross-references such as
//! `PF00005;PF00664;` or `TIGR01842;` in any of the remaining columns.

use super::{delimited_reader, open_input, record_line, text_field};
use std::collections::hash_map::{Entry, HashMap};
use std::io::Read;
use std::path::Path;
use tcoperon_common::{Result, TcError};
use tracing::{debug, info};

/// Prefixes that mark a token as a family identifier (TIGRFAMs, COG, Pfam)
pub const FAMILY_PREFIXES: [&str; 3] = ["TIGR", "COG", "PF"];

/// Whether column 0 (the UniProt accession) is scanned for family tokens
///
/// Older reports scanned it, so an accession that happened to start with a
/// family prefix was listed as its own family. `Scan` reproduces those
/// reports exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyColumn {
    #[default]
    Skip,
    Scan,
}

/// Whether a token names a TIGRFAMs, COG or Pfam family
pub fn is_family_token(token: &str) -> bool {
    FAMILY_PREFIXES.iter().any(|prefix| token.starts_with(prefix))
}

/// Family tokens in one `;`-separated cross-reference field, in order
pub fn family_tokens(field: &str) -> impl Iterator<Item = &str> {
    field
        .trim_end_matches(';')
        .split(';')
        .filter(|token| is_family_token(token))
}

/// UniProt → family identifiers
///
/// Families are kept in column order with duplicates. If the same accession
/// heads several rows, only the last row's families are kept.
#[derive(Debug, Clone, Default)]
pub struct UniprotToFamilyIndex {
    map: HashMap<String, Vec<String>>,
}

impl UniprotToFamilyIndex {
    pub fn from_path(path: impl AsRef<Path>, key_column: KeyColumn) -> Result<Self> {
        let path = path.as_ref();
        let index = Self::from_reader(open_input(path)?, path, key_column)?;

        let annotated = index.map.values().filter(|families| !families.is_empty()).count();
        info!(
            path = %path.display(),
            uniprot_accessions = index.len(),
            annotated,
            key_column = ?key_column,
            "Loaded UniProt to family cross-references"
        );

        Ok(index)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        source: impl AsRef<Path>,
        key_column: KeyColumn,
    ) -> Result<Self> {
        let source = source.as_ref();
        let mut csv_reader = delimited_reader(reader, b'\t', false);
        let mut map: HashMap<String, Vec<String>> = HashMap::new();

        let first_scanned = match key_column {
            KeyColumn::Skip => 1,
            KeyColumn::Scan => 0,
        };

        for result in csv_reader.byte_records() {
            let record = result.map_err(|e| TcError::csv(source, e))?;

            let Some(uniprot) = text_field(&record, 0) else {
                return Err(TcError::format(source, record_line(&record), "empty row"));
            };

            let mut families = Vec::new();
            for field in record.iter().skip(first_scanned) {
                let field = String::from_utf8_lossy(field);
                families.extend(family_tokens(&field).map(str::to_string));
            }

            match map.entry(uniprot.into_owned()) {
                Entry::Occupied(mut entry) => {
                    debug!(
                        uniprot = %entry.key(),
                        line = record_line(&record),
                        "UniProt accession repeated, earlier row replaced"
                    );
                    entry.insert(families);
                },
                Entry::Vacant(entry) => {
                    entry.insert(families);
                },
            }
        }

        Ok(Self { map })
    }

    /// Families annotated on a UniProt accession
    ///
    /// `None` means the accession has no row; `Some(&[])` means it has a row
    /// without recognized family tokens.
    pub fn families(&self, uniprot: &str) -> Option<&[String]> {
        self.map.get(uniprot).map(Vec::as_slice)
    }

    /// Number of UniProt accessions with a row
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
