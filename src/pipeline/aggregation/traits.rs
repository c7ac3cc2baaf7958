//! Seam between the aggregator and the category extractors.

use crate::config::PipelineConfig;
use crate::models::Category;
use crate::pipeline::extraction::Document;

use super::types::CategoryOutput;

/// Extracts one report category from a normalized document.
///
/// Implementations must be pure: same document and configuration, same
/// output. They may run on any thread, in any order relative to the others.
pub trait CategoryExtractor: Send + Sync {
    /// Which category this extractor fills.
    fn category(&self) -> Category;

    /// Extract the category. Absence of matching text is an empty output.
    fn extract(&self, doc: &Document, config: &PipelineConfig) -> CategoryOutput;
}
