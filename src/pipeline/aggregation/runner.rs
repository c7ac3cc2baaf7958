//! ReportAggregator: runs every enabled category extractor over one document
//! and assembles the report in fixed category order.
//!
//! Extractor panics are contained per category. In concurrent mode each
//! category is a blocking task; handles are awaited in category order, so
//! the report never depends on completion order.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crate::config::PipelineConfig;
use crate::models::{Category, ExtractionReport};
use crate::pipeline::extraction::Document;

use super::error::CategoryFailure;
use super::extractors::builtin_extractors;
use super::traits::CategoryExtractor;
use super::types::{CategoryOutput, ExtractionOutcome};

pub struct ReportAggregator {
    config: PipelineConfig,
    extractors: Vec<Arc<dyn CategoryExtractor>>,
}

impl ReportAggregator {
    /// Aggregator with the built-in extractor for every enabled category.
    pub fn new(config: PipelineConfig) -> Self {
        let extractors = builtin_extractors(&config)
            .into_iter()
            .map(|e| Arc::new(e) as Arc<dyn CategoryExtractor>)
            .collect();
        Self { config, extractors }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Replace the extractor registered for `extractor.category()`.
    /// Categories outside the configured set are not added.
    pub fn with_extractor(mut self, extractor: Arc<dyn CategoryExtractor>) -> Self {
        let category = extractor.category();
        match self.extractors.iter_mut().find(|e| e.category() == category) {
            Some(slot) => *slot = extractor,
            None => tracing::debug!(
                category = category.as_str(),
                "Category not enabled, extractor ignored"
            ),
        }
        self
    }

    /// Run all categories one after another on the calling thread.
    pub fn extract_report(&self, doc: &Document) -> ExtractionOutcome {
        let start = Instant::now();
        let mut report = ExtractionReport::empty(self.config.extractors);
        let mut failures = Vec::new();

        for extractor in &self.extractors {
            let category = extractor.category();
            let result =
                panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(doc, &self.config)));
            match result {
                Ok(output) => store(category, output, &mut report, &mut failures),
                Err(payload) => failures.push(CategoryFailure::from_panic(category, payload)),
            }
        }

        finish(report, failures, start)
    }

    /// Run every category as its own blocking task over a shared document.
    pub async fn extract_report_concurrent(&self, doc: Arc<Document>) -> ExtractionOutcome {
        let start = Instant::now();
        let mut report = ExtractionReport::empty(self.config.extractors);
        let mut failures = Vec::new();

        let handles: Vec<_> = self
            .extractors
            .iter()
            .map(|extractor| {
                let extractor = Arc::clone(extractor);
                let doc = Arc::clone(&doc);
                let config = self.config.clone();
                let category = extractor.category();
                let handle =
                    tokio::task::spawn_blocking(move || extractor.extract(&doc, &config));
                (category, handle)
            })
            .collect();

        for (category, handle) in handles {
            match handle.await {
                Ok(output) => store(category, output, &mut report, &mut failures),
                Err(e) if e.is_panic() => {
                    failures.push(CategoryFailure::from_panic(category, e.into_panic()))
                }
                Err(e) => failures.push(CategoryFailure::new(category, e.to_string())),
            }
        }

        finish(report, failures, start)
    }
}

fn store(
    category: Category,
    output: CategoryOutput,
    report: &mut ExtractionReport,
    failures: &mut Vec<CategoryFailure>,
) {
    if output.category() != category {
        failures.push(CategoryFailure::new(
            category,
            format!("extractor returned {} output", output.category()),
        ));
        return;
    }
    output.apply(report);
}

fn finish(
    report: ExtractionReport,
    failures: Vec<CategoryFailure>,
    start: Instant,
) -> ExtractionOutcome {
    let duration_ms = start.elapsed().as_millis() as u64;

    for failure in &failures {
        tracing::warn!(
            category = failure.category.as_str(),
            error = %failure.message,
            "Category extraction failed, reporting empty value"
        );
    }

    tracing::info!(
        categories = report.summary().len(),
        failed = failures.len(),
        duration_ms,
        "Report assembled"
    );

    ExtractionOutcome {
        report,
        failures,
        duration_ms,
    }
}
