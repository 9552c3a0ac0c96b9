//! GI accession to UniProt accession index

use super::open_input;
use super::pair_index::PairIndex;
use std::io::Read;
use std::path::Path;
use tcoperon_common::Result;
use tracing::{debug, info};

/// GI → UniProt, read from a UniProt ID-mapping export
///
/// Input is tab-separated with a header row and columns `[UniProt, GI, ...]`.
/// A GI listed twice keeps the UniProt accession from its last row.
#[derive(Debug, Clone, Default)]
pub struct GiToUniprotIndex {
    inner: PairIndex,
}

impl GiToUniprotIndex {
    /// Load the index from a file (optionally gzip-compressed)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let index = Self::from_reader(open_input(path)?, path)?;

        info!(
            path = %path.display(),
            rows = index.inner.rows(),
            gi_accessions = index.len(),
            "Loaded GI to UniProt mapping"
        );
        if index.inner.replaced() > 0 {
            debug!(replaced = index.inner.replaced(), "Duplicate GI accessions, last row kept");
        }

        Ok(index)
    }

    /// Load the index from any reader; `source` names the input in errors
    pub fn from_reader<R: Read>(reader: R, source: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            inner: PairIndex::from_reader(reader, source.as_ref())?,
        })
    }

    /// UniProt accession for a GI accession
    pub fn get(&self, gi: &str) -> Option<&str> {
        self.inner.get(gi)
    }

    pub fn contains(&self, gi: &str) -> bool {
        self.inner.contains(gi)
    }

    /// Number of distinct GI accessions
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tcoperon_common::TcError;

    #[test]
    fn test_maps_gi_to_uniprot() {
        let data = "Entry\tGI\nP0AEX9\t16127995\nP69874\t16128121\n";
        let index = GiToUniprotIndex::from_reader(data.as_bytes(), "gi.tsv").unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("16127995"), Some("P0AEX9"));
        assert_eq!(index.get("16128121"), Some("P69874"));
        assert_eq!(index.get("P0AEX9"), None);
    }

    #[test]
    fn test_duplicate_gi_keeps_last() {
        let data = "Entry\tGI\nUNIPROT_OLD\tGI1\nUNIPROT_NEW\tGI1\n";
        let index = GiToUniprotIndex::from_reader(data.as_bytes(), "gi.tsv").unwrap();
        assert_eq!(index.get("GI1"), Some("UNIPROT_NEW"));
    }

    #[test]
    fn test_latin1_organism_column_is_ignored() {
        let data = b"Entry\tGI\tOrganism\nP0AEX9\t16127995\tEscherichia coli\nP69874\t16128121\tCaf\xe9\n";
        let index = GiToUniprotIndex::from_reader(&data[..], "gi.tsv").unwrap();
        assert_eq!(index.get("16128121"), Some("P69874"));

        let data = b"Entry\tGI\tOrganism\nP69874\t16128121\tCaf\xe9\nP0AEX9\n";
        let err = GiToUniprotIndex::from_reader(&data[..], "gi.tsv").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GiToUniprotIndex::from_path("/nonexistent/gi2uni.tsv").unwrap_err();
        assert!(matches!(err, TcError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/gi2uni.tsv"));
    }

    #[test]
    fn test_reads_gzip_input() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gi2uni.tsv.gz");
        let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"Entry\tGI\nP1\tGI1\n").unwrap();
        encoder.finish().unwrap();

        let index = GiToUniprotIndex::from_path(&path).unwrap();
        assert_eq!(index.get("GI1"), Some("P1"));
    }
}
