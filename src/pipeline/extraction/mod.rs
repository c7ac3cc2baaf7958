//! Text extraction core: normalization, section segmentation and the
//! per-category field extractors.
//!
//! Every extractor is a pure function over an immutable [`Document`]; a
//! missing section or field yields an empty result, never an error.

pub mod types;
pub mod sanitize;
pub mod segment;
pub mod cursor;
pub mod patterns;
pub mod patient;
pub mod visit;
pub mod medication;
pub mod procedure;
pub mod surgery;
pub mod orders;
pub mod notes;
pub mod diagnosis;

pub use types::*;
pub use sanitize::normalize_text;
pub use segment::{find_zones, is_header_line};
pub use cursor::LineCursor;
pub use patient::extract_patient;
pub use visit::extract_visits;
pub use medication::extract_medications;
pub use procedure::extract_procedures;
pub use surgery::extract_surgeries;
pub use orders::{extract_imaging_orders, extract_lab_orders};
pub use notes::{extract_discharges, extract_evolutions, extract_interconsults};
pub use diagnosis::extract_diagnoses;
