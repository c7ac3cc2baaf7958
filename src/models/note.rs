use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interconsult {
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "fecha_orden")]
    pub order_date: String,
}

/// Free-text block kept whole, with the first date literal found inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBlock {
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "texto")]
    pub text: String,
}

pub type EvolutionNote = NoteBlock;
pub type Discharge = NoteBlock;
