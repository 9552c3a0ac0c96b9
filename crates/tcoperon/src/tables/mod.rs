//! Lookup tables built from the three cross-reference inputs
//!
//! Every table is loaded in full before any operon pair is examined and is
//! read-only afterwards. Lookups return `Option`; a miss is never an error.
//!
//! | Table | Delimiter | Header | Columns used |
//! |---|---|---|---|
//! | GI to UniProt | tab | skipped | 0 = UniProt, 1 = GI |
//! | UniProt to families | tab | none | 0 = UniProt, every column scanned |
//! | Transport cluster to family | tab | skipped | 0 = cluster, 1 = family |

mod clusters;
mod families;
mod gi_uniprot;
mod pair_index;

pub use clusters::FamilyToClusterIndex;
pub use families::{family_tokens, is_family_token, KeyColumn, UniprotToFamilyIndex, FAMILY_PREFIXES};
pub use gi_uniprot::GiToUniprotIndex;

use crate::config::PipelineConfig;
use flate2::read::MultiGzDecoder;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tcoperon_common::{Result, TcError};
use tracing::info_span;

/// The three lookup tables the matcher resolves through
#[derive(Debug, Clone, Default)]
pub struct Indices {
    pub gi_to_uniprot: GiToUniprotIndex,
    pub uniprot_to_families: UniprotToFamilyIndex,
    pub family_to_cluster: FamilyToClusterIndex,
}

impl Indices {
    /// Load all three tables named by the configuration, in dependency order
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        let _span = info_span!("load_indices").entered();

        let gi_to_uniprot = GiToUniprotIndex::from_path(&config.inputs.uniprot_to_gi)?;
        let uniprot_to_families =
            UniprotToFamilyIndex::from_path(&config.inputs.uniprot_to_families, config.key_column)?;
        let family_to_cluster = FamilyToClusterIndex::from_path(&config.inputs.tcluster_to_family)?;

        Ok(Self {
            gi_to_uniprot,
            uniprot_to_families,
            family_to_cluster,
        })
    }
}

/// Open an input file, decompressing it when the name ends in `.gz`
pub(crate) fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| TcError::io(path, e))?;
    let reader = BufReader::new(file);

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        Ok(Box::new(MultiGzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

/// Delimited-text reader shared by all inputs
///
/// Rows may have any number of fields; column requirements are checked by the
/// individual loaders so the error can name the offending line.
pub(crate) fn delimited_reader<R: Read>(
    reader: R,
    delimiter: u8,
    has_header: bool,
) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader)
}

/// One-based line number of a record, for error messages
pub(crate) fn record_line(record: &csv::ByteRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Decode one column as text
///
/// Rows are read as bytes so that other columns (organism or protein names in
/// Latin-1, say) never have to be valid UTF-8. Invalid sequences in a decoded
/// column become U+FFFD.
pub(crate) fn text_field(record: &csv::ByteRecord, column: usize) -> Option<Cow<'_, str>> {
    record.get(column).map(String::from_utf8_lossy)
}
