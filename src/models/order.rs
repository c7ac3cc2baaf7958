use serde::{Deserialize, Serialize};

/// A lab or imaging order line with its optional application date and result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalOrder {
    #[serde(rename = "cantidad")]
    pub quantity: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "hora", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "resultado", skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

pub type LabOrder = ClinicalOrder;
pub type ImagingOrder = ClinicalOrder;
