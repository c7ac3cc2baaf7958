//! Command-line front end: read a text file, run the pipeline, write JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::{self, PipelineConfig};
use crate::models::ExtractorSet;
use crate::pipeline::{process_source, PlainTextFile};

#[derive(Parser, Debug)]
#[command(name = "hc-lector")]
#[command(version, about = "Extract a billing summary from clinical-record text")]
pub struct Cli {
    /// Clinical record as UTF-8 text, pages separated by form feeds
    pub input: PathBuf,

    /// Where to write the JSON report
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Extractor set: `billing` or `full` (overrides HC_LECTOR_EXTRACTORS)
    #[arg(long)]
    pub extractors: Option<ExtractorSet>,

    /// Run categories one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Print the report to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Environment configuration with command-line flags applied on top.
    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::from_env();
        if let Some(set) = self.extractors {
            config.extractors = set;
        }
        if self.sequential {
            config.concurrent = false;
        }
        config
    }
}

pub async fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.pipeline_config();
    let source = PlainTextFile::new(&cli.input);

    let outcome = process_source(&source, &config)
        .await
        .with_context(|| format!("Failed to process {}", source.path().display()))?;

    for (category, count) in outcome.report.summary() {
        tracing::info!(category = category.as_str(), count, "Extracted");
    }
    if !outcome.is_complete() {
        tracing::warn!(
            failed = outcome.failures.len(),
            "Report written with empty values for failed categories"
        );
    }

    let json =
        serde_json::to_string_pretty(&outcome.report).context("Failed to serialize report")?;

    if cli.stdout {
        println!("{json}");
    } else {
        std::fs::write(&cli.output, json)
            .with_context(|| format!("Failed to write {}", cli.output.display()))?;
        tracing::info!(path = %cli.output.display(), "Report written");
    }

    Ok(())
}
