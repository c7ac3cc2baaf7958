pub mod extraction;
pub mod aggregation;
pub mod source;

use std::sync::Arc;

pub use aggregation::{CategoryFailure, ExtractionOutcome, ReportAggregator};
pub use extraction::Document;
pub use source::{InputError, PageTexts, PlainTextFile, TextSource};

use crate::config::PipelineConfig;

/// Run the pipeline over raw page-concatenated text on the calling thread.
pub fn process_text(raw: &str, config: &PipelineConfig) -> Result<ExtractionOutcome, InputError> {
    let doc = Document::from_raw(raw);
    if doc.is_empty() {
        return Err(InputError::EmptyText);
    }
    tracing::debug!(lines = doc.line_count(), "Document normalized");
    Ok(ReportAggregator::new(config.clone()).extract_report(&doc))
}

/// Read a text source and run the pipeline, concurrently when
/// `config.concurrent` is set.
pub async fn process_source(
    source: &dyn TextSource,
    config: &PipelineConfig,
) -> Result<ExtractionOutcome, InputError> {
    let raw = source.text()?;
    let doc = Document::from_raw(&raw);
    if doc.is_empty() {
        return Err(InputError::EmptyText);
    }
    tracing::debug!(lines = doc.line_count(), "Document normalized");

    let aggregator = ReportAggregator::new(config.clone());
    let outcome = if aggregator.config().concurrent {
        aggregator.extract_report_concurrent(Arc::new(doc)).await
    } else {
        aggregator.extract_report(&doc)
    };
    Ok(outcome)
}
