//! Pipeline driver
//!
//! Loads the three lookup tables, streams the operon table and writes one
//! report line for every operon pair whose genes both resolve to at least one
//! transport cluster:
//!
//! ```text
//! <gene 1 clusters joined by '|'> <gene 2 clusters joined by '|'>
//! ```

use crate::config::{MalformedRows, PipelineConfig};
use crate::matcher::{ClusterSet, Matcher};
use crate::operons::{malformed_row_error, OperonPair, OperonReader, OperonRow};
use crate::tables::Indices;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tcoperon_common::{Result, TcError};
use tracing::{debug, info, info_span, warn};

/// Separator between the clusters of one gene
pub const CLUSTER_SEPARATOR: &str = "|";

/// Separator between the two genes of a pair
pub const GENE_SEPARATOR: &str = " ";

/// Per-run counters over the operon table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperonStats {
    /// Rows read, malformed rows included
    pub rows: u64,
    /// Pairs with at least one GI missing from the GI to UniProt table
    pub unknown_gi: u64,
    /// Pairs where at least one gene resolved to no transport cluster
    pub unmatched: u64,
    /// Malformed rows skipped
    pub malformed_skipped: u64,
    /// Report lines written
    pub emitted: u64,
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub gi_accessions: usize,
    pub uniprot_accessions: usize,
    pub families_with_cluster: usize,
    pub operons: OperonStats,
}

impl RunSummary {
    /// Write the summary as pretty-printed JSON
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref()).map_err(TcError::Output)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| TcError::Output(e.into()))?;
        writer.flush().map_err(TcError::Output)
    }
}

/// Run the whole pipeline, writing report lines to `out`
///
/// Lines already produced are flushed to `out` even when a later row aborts
/// the run.
pub fn run<W: Write>(config: &PipelineConfig, out: W) -> Result<RunSummary> {
    let indices = Indices::load(config)?;
    let operons = OperonReader::from_path(&config.inputs.operons)?;

    let mut out = BufWriter::new(out);
    let reported = report_pairs(&indices, operons, config.malformed_operons, &mut out);
    let flushed = out.flush().map_err(TcError::Output);
    let stats = reported?;
    flushed?;

    let summary = RunSummary {
        gi_accessions: indices.gi_to_uniprot.len(),
        uniprot_accessions: indices.uniprot_to_families.len(),
        families_with_cluster: indices.family_to_cluster.len(),
        operons: stats,
    };

    info!(
        rows = stats.rows,
        emitted = stats.emitted,
        unknown_gi = stats.unknown_gi,
        unmatched = stats.unmatched,
        malformed_skipped = stats.malformed_skipped,
        "Operon table processed"
    );

    Ok(summary)
}

/// Match every operon pair and write the qualifying ones
pub fn report_pairs<R: Read, W: Write>(
    indices: &Indices,
    operons: OperonReader<R>,
    malformed: MalformedRows,
    out: &mut W,
) -> Result<OperonStats> {
    let _span = info_span!("report_pairs", source = %operons.source().display()).entered();

    let matcher = Matcher::new(indices);
    let source = operons.source().to_path_buf();
    let mut stats = OperonStats::default();

    for row in operons {
        let row = row?;
        stats.rows += 1;

        let pair = match row {
            OperonRow::Pair(pair) => pair,
            OperonRow::Malformed { line, fields } => match malformed {
                MalformedRows::Skip => {
                    warn!(line, fields, "Skipping malformed operon row");
                    stats.malformed_skipped += 1;
                    continue;
                },
                MalformedRows::Fail => return Err(malformed_row_error(&source, line, fields)),
            },
        };

        if !matcher.is_known(&pair.gi1) || !matcher.is_known(&pair.gi2) {
            stats.unknown_gi += 1;
            continue;
        }

        match match_pair(&matcher, &pair) {
            Some((tc1, tc2)) => {
                writeln!(out, "{}", format_line(&tc1, &tc2)).map_err(TcError::Output)?;
                stats.emitted += 1;
            },
            None => {
                debug!(line = pair.line, gi1 = %pair.gi1, gi2 = %pair.gi2, "No transport cluster for pair");
                stats.unmatched += 1;
            },
        }
    }

    Ok(stats)
}

/// Cluster sets for both genes of a pair, if both are non-empty
pub fn match_pair<'a>(
    matcher: &Matcher<'a>,
    pair: &OperonPair,
) -> Option<(ClusterSet<'a>, ClusterSet<'a>)> {
    let tc1 = matcher.clusters(&pair.gi1)?;
    let tc2 = matcher.clusters(&pair.gi2)?;
    Some((tc1, tc2))
}

/// Render one report line (without the trailing newline)
pub fn format_line(tc1: &ClusterSet<'_>, tc2: &ClusterSet<'_>) -> String {
    let join = |clusters: &ClusterSet<'_>| {
        clusters.iter().copied().collect::<Vec<_>>().join(CLUSTER_SEPARATOR)
    };
    format!("{}{}{}", join(tc1), GENE_SEPARATOR, join(tc2))
}
