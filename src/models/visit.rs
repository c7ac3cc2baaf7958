use serde::{Deserialize, Serialize};

/// One care episode header (`SEDE DE ATENCION ... TIPO DE ATENCION`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceVisit {
    #[serde(rename = "sede_codigo")]
    pub facility_code: String,
    #[serde(rename = "sede_nombre")]
    pub facility_name: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "tipo_atencion")]
    pub attention_type: String,
}
