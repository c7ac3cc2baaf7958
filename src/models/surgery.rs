use serde::{Deserialize, Serialize};

/// A `DESCRIPCION QUIRURGICA` block. Any subset of fields may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surgery {
    #[serde(rename = "diagnostico_preoperatorio", skip_serializing_if = "Option::is_none")]
    pub preop_diagnosis: Option<String>,
    #[serde(rename = "diagnostico_postoperatorio", skip_serializing_if = "Option::is_none")]
    pub postop_diagnosis: Option<String>,
    #[serde(rename = "tipo_anestesia", skip_serializing_if = "Option::is_none")]
    pub anesthesia: Option<String>,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "hora_inicio", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "hora_fin", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "tejido_patologia", skip_serializing_if = "Option::is_none")]
    pub pathology_tissue: Option<String>,
    #[serde(rename = "participantes")]
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "participo")]
    pub participated: bool,
}
