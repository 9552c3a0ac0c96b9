//! tcoperon
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Finds pairs of membrane-transport protein families that co-occur in
//! predicted operons, as evidence for transporter complex membership.
//!
//! Each gene of an operon pair is resolved through three cross-reference
//! tables:
//!
//! ```text
//! GI accession -> UniProt accession -> {TIGRFAMs / COG / Pfam family} -> {transport cluster}
//! ```
//!
//! and the pair is reported when both genes reach at least one transport
//! cluster.
//!
//! # Example
//!
//! ```no_run
//! use tcoperon::{pipeline, PipelineConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = PipelineConfig::builder()
//!         .uniprot_to_gi("uniprot_gi.tsv")
//!         .uniprot_to_families("uniprot_xref.tsv.gz")
//!         .tcluster_to_family("tcluster_families.tsv")
//!         .operons("operons.txt")
//!         .build()?;
//!
//!     let summary = pipeline::run(&config, std::io::stdout().lock())?;
//!     eprintln!("{} pairs reported", summary.operons.emitted);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod matcher;
pub mod operons;
pub mod pipeline;
pub mod tables;

pub use config::{MalformedRows, PipelineConfig};
pub use matcher::{ClusterSet, Matcher};
pub use pipeline::RunSummary;
pub use tables::{Indices, KeyColumn};
