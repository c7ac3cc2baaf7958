//! Built-in category extractors backed by the functions in
//! [`crate::pipeline::extraction`].

use crate::config::PipelineConfig;
use crate::models::Category;
use crate::pipeline::extraction::{self, Document};

use super::traits::CategoryExtractor;
use super::types::CategoryOutput;

/// Dispatches a category to its extraction function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinExtractor(pub Category);

impl CategoryExtractor for BuiltinExtractor {
    fn category(&self) -> Category {
        self.0
    }

    fn extract(&self, doc: &Document, config: &PipelineConfig) -> CategoryOutput {
        let scan = config.forward_scan_lines;
        match self.0 {
            Category::Patient => CategoryOutput::Patient(extraction::extract_patient(doc)),
            Category::Visits => CategoryOutput::Visits(extraction::extract_visits(doc)),
            Category::Medications => {
                CategoryOutput::Medications(extraction::extract_medications(doc, scan))
            }
            Category::Procedures => CategoryOutput::Procedures(extraction::extract_procedures(
                doc,
                config.date_window_chars,
            )),
            Category::LabOrders => {
                CategoryOutput::LabOrders(extraction::extract_lab_orders(doc, scan))
            }
            Category::ImagingOrders => {
                CategoryOutput::ImagingOrders(extraction::extract_imaging_orders(doc, scan))
            }
            Category::Diagnoses => CategoryOutput::Diagnoses(extraction::extract_diagnoses(doc)),
            Category::Surgeries => CategoryOutput::Surgeries(extraction::extract_surgeries(doc)),
            Category::Interconsults => {
                CategoryOutput::Interconsults(extraction::extract_interconsults(doc))
            }
            Category::Evolutions => CategoryOutput::Evolutions(extraction::extract_evolutions(doc)),
            Category::Discharges => CategoryOutput::Discharges(extraction::extract_discharges(doc)),
        }
    }
}

/// One built-in extractor per category of `config.extractors`, in report order.
pub fn builtin_extractors(config: &PipelineConfig) -> Vec<BuiltinExtractor> {
    config
        .extractors
        .categories()
        .into_iter()
        .map(BuiltinExtractor)
        .collect()
}
