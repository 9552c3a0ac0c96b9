//! tcoperon - transport cluster pairs in operons

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tcoperon::{pipeline, KeyColumn, MalformedRows, PipelineConfig};
use tcoperon_common::logging::{init_logging, LogConfig, LogLevel};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "tcoperon")]
#[command(author, version, about = "Report transport-cluster pairs co-occurring in operons")]
#[command(long_about = r#"
Resolves both genes of every operon pair through
GI -> UniProt -> protein family (TIGR/COG/PF) -> transport cluster
and prints one line per pair where both genes reach a transport cluster:

  <clusters of gene 1 joined by '|'> <clusters of gene 2 joined by '|'>

Inputs ending in .gz are decompressed on the fly. Logs go to standard error."#)]
struct Cli {
    /// UniProt mapping file of UniProtKB to GI accessions (tab-separated, with header)
    #[arg(short = 'g', long = "uniprottogi")]
    uniprot_to_gi: PathBuf,

    /// UniProt to protein family annotations, cross-reference table (tab-separated)
    #[arg(short = 'f', long = "uniprottofams")]
    uniprot_to_families: PathBuf,

    /// Transport cluster to protein family mapping (tab-separated, with header)
    #[arg(short = 't', long = "tclusttofam")]
    tcluster_to_family: PathBuf,

    /// Operon database output file (space-separated GI pairs)
    #[arg(short = 'o', long = "operons")]
    operons: PathBuf,

    /// Also scan the UniProt accession column for family tokens (historical behavior)
    #[arg(long, env = "TCOPERON_SCAN_KEY_COLUMN")]
    scan_key_column: bool,

    /// Skip operon rows with fewer than two accessions instead of failing
    #[arg(long, env = "TCOPERON_SKIP_MALFORMED_OPERONS")]
    skip_malformed_operons: bool,

    /// Write a JSON run summary to this path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn pipeline_config(&self) -> tcoperon_common::Result<PipelineConfig> {
        let key_column = if self.scan_key_column {
            KeyColumn::Scan
        } else {
            KeyColumn::Skip
        };
        let malformed = if self.skip_malformed_operons {
            MalformedRows::Skip
        } else {
            MalformedRows::Fail
        };

        PipelineConfig::builder()
            .uniprot_to_gi(&self.uniprot_to_gi)
            .uniprot_to_families(&self.uniprot_to_families)
            .tcluster_to_family(&self.tcluster_to_family)
            .operons(&self.operons)
            .key_column(key_column)
            .malformed_operons(malformed)
            .build()
    }

    fn log_config(&self) -> Result<LogConfig> {
        let level = if self.verbose {
            LogLevel::Debug
        } else if self.quiet {
            LogLevel::Error
        } else {
            LogLevel::Info
        };

        // Environment variables take precedence over flags
        LogConfig::builder().level(level).build().merge_env()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match cli.log_config().and_then(|config| init_logging(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to initialize logging: {:#}", e);
            return ExitCode::FAILURE;
        },
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Run failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.pipeline_config()?;
    info!(
        operons = %config.inputs.operons.display(),
        key_column = ?config.key_column,
        malformed_operons = ?config.malformed_operons,
        "Starting operon transport cluster matching"
    );

    let summary = pipeline::run(&config, std::io::stdout().lock())?;

    if let Some(path) = &cli.summary {
        summary
            .write_json(path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        info!(path = %path.display(), "Run summary written");
    }

    Ok(())
}
