//! Pipeline configuration
//!
//! Collects the four input tables and the options that change how rows are
//! interpreted. The command line builds one through [`PipelineConfig::builder`].

use crate::tables::KeyColumn;
use std::path::PathBuf;
use tcoperon_common::{Result, TcError};

/// What to do with an operon row that has fewer than two accessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRows {
    /// Abort the run with a format error
    #[default]
    Fail,
    /// Log a warning and continue with the next row
    Skip,
}

/// Paths of the four input tables
#[derive(Debug, Clone)]
pub struct InputPaths {
    /// UniProt to GI mapping (`--uniprottogi`)
    pub uniprot_to_gi: PathBuf,

    /// UniProt to protein family cross-references (`--uniprottofams`)
    pub uniprot_to_families: PathBuf,

    /// Transport cluster to protein family mapping (`--tclusttofam`)
    pub tcluster_to_family: PathBuf,

    /// Operon pair table (`--operons`)
    pub operons: PathBuf,
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub inputs: InputPaths,

    /// Whether the accession column of the cross-reference table is scanned
    /// for family tokens
    pub key_column: KeyColumn,

    pub malformed_operons: MalformedRows,
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    uniprot_to_gi: Option<PathBuf>,
    uniprot_to_families: Option<PathBuf>,
    tcluster_to_family: Option<PathBuf>,
    operons: Option<PathBuf>,
    key_column: KeyColumn,
    malformed_operons: MalformedRows,
}

impl PipelineConfigBuilder {
    pub fn uniprot_to_gi(mut self, path: impl Into<PathBuf>) -> Self {
        self.uniprot_to_gi = Some(path.into());
        self
    }

    pub fn uniprot_to_families(mut self, path: impl Into<PathBuf>) -> Self {
        self.uniprot_to_families = Some(path.into());
        self
    }

    pub fn tcluster_to_family(mut self, path: impl Into<PathBuf>) -> Self {
        self.tcluster_to_family = Some(path.into());
        self
    }

    pub fn operons(mut self, path: impl Into<PathBuf>) -> Self {
        self.operons = Some(path.into());
        self
    }

    pub fn key_column(mut self, key_column: KeyColumn) -> Self {
        self.key_column = key_column;
        self
    }

    pub fn malformed_operons(mut self, policy: MalformedRows) -> Self {
        self.malformed_operons = policy;
        self
    }

    /// Build the configuration, failing if any input path is missing or empty
    pub fn build(self) -> Result<PipelineConfig> {
        let inputs = InputPaths {
            uniprot_to_gi: required(self.uniprot_to_gi, "uniprottogi")?,
            uniprot_to_families: required(self.uniprot_to_families, "uniprottofams")?,
            tcluster_to_family: required(self.tcluster_to_family, "tclusttofam")?,
            operons: required(self.operons, "operons")?,
        };

        Ok(PipelineConfig {
            inputs,
            key_column: self.key_column,
            malformed_operons: self.malformed_operons,
        })
    }
}

fn required(path: Option<PathBuf>, flag: &str) -> Result<PathBuf> {
    match path {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(TcError::config(format!("missing required input --{}", flag))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn complete() -> PipelineConfigBuilder {
        PipelineConfig::builder()
            .uniprot_to_gi("gi.tsv")
            .uniprot_to_families("xref.tsv")
            .tcluster_to_family("tc.tsv")
            .operons("operons.txt")
    }

    #[test]
    fn test_defaults() {
        let config = complete().build().unwrap();
        assert_eq!(config.inputs.operons, PathBuf::from("operons.txt"));
        assert_eq!(config.key_column, KeyColumn::Skip);
        assert_eq!(config.malformed_operons, MalformedRows::Fail);
    }

    #[test]
    fn test_missing_input_is_config_error() {
        let err = PipelineConfig::builder()
            .uniprot_to_gi("gi.tsv")
            .uniprot_to_families("xref.tsv")
            .operons("operons.txt")
            .build()
            .unwrap_err();

        assert!(matches!(err, TcError::Config(_)));
        assert!(err.to_string().contains("--tclusttofam"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        assert!(complete().operons("").build().is_err());
    }

    #[test]
    fn test_options() {
        let config = complete()
            .key_column(KeyColumn::Scan)
            .malformed_operons(MalformedRows::Skip)
            .build()
            .unwrap();
        assert_eq!(config.key_column, KeyColumn::Scan);
        assert_eq!(config.malformed_operons, MalformedRows::Skip);
    }
}
