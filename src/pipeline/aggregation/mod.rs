//! Report aggregation.
//!
//! ```text
//! Document → CategoryExtractor (one per enabled category) → ExtractionReport
//! ```
//!
//! Extractors are independent of each other and share the document
//! read-only. No cross-category checks are performed; raw heuristic results
//! are reported as found.

pub mod error;
pub mod types;
pub mod traits;
pub mod extractors;
pub mod runner;

pub use error::CategoryFailure;
pub use types::*;
pub use traits::*;
pub use extractors::{builtin_extractors, BuiltinExtractor};
pub use runner::ReportAggregator;
