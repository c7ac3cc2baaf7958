use serde::{Deserialize, Serialize};

use super::enums::ProcedureKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    #[serde(rename = "tipo")]
    pub kind: ProcedureKind,
    #[serde(rename = "cantidad")]
    pub quantity: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Best-effort: recovered from a text window around the first occurrence
    /// of the description, which may belong to a different entry when the
    /// same description is repeated.
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "hora", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}
