//! Per-category failure captured during aggregation.
//!
//! A failure never aborts the run: the category keeps its empty value and
//! the remaining categories are still reported.

use thiserror::Error;

use crate::models::Category;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{category} extractor failed: {message}")]
pub struct CategoryFailure {
    pub category: Category,
    pub message: String,
}

impl CategoryFailure {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// Build from a caught panic payload.
    pub fn from_panic(category: Category, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "extractor panicked".to_string()
        };
        Self::new(category, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_category() {
        let failure = CategoryFailure::new(Category::LabOrders, "boom");
        assert_eq!(failure.to_string(), "laboratorios extractor failed: boom");
    }

    #[test]
    fn panic_payloads_are_readable() {
        let from_str = CategoryFailure::from_panic(Category::Visits, Box::new("static"));
        assert_eq!(from_str.message, "static");
        let from_string =
            CategoryFailure::from_panic(Category::Visits, Box::new(String::from("owned")));
        assert_eq!(from_string.message, "owned");
        let opaque = CategoryFailure::from_panic(Category::Visits, Box::new(42_u8));
        assert_eq!(opaque.message, "extractor panicked");
    }
}
