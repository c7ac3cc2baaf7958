use serde::{Deserialize, Serialize};

/// Patient identity as printed in the record header.
/// Every field is independent; a field missing from the text stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "documento", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "fecha_nacimiento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "edad", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Patient {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
