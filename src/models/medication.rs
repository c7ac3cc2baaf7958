use serde::{Deserialize, Serialize};

use super::enums::MedicationSource;

/// A prescribed medication line.
///
/// Text fields default to the empty string: the extractor ran but found
/// nothing, which is distinct from a category that was never extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    #[serde(rename = "cantidad")]
    pub quantity: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "dosis")]
    pub dose: String,
    #[serde(rename = "via")]
    pub route: String,
    #[serde(rename = "frecuencia")]
    pub frequency: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "origen")]
    pub source: MedicationSource,
}

impl Medication {
    pub fn new(source: MedicationSource, quantity: &str, description: &str) -> Self {
        Self {
            quantity: quantity.to_string(),
            description: description.to_string(),
            dose: String::new(),
            route: String::new(),
            frequency: String::new(),
            status: String::new(),
            source,
        }
    }
}
