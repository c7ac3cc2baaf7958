//! Patient identity header.
//!
//! Each field is an independent first match over the whole document. A miss
//! leaves the field absent; nothing is guessed or validated.

use std::sync::LazyLock;

use regex::Regex;

use super::patterns::capture;
use super::types::Document;
use crate::models::Patient;

static RE_DOCUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:CC|TI|CE|RC|PA|PE|MS|AS|CD|SC|CN)\s*(\d+)").unwrap()
});
static RE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--\s*([A-ZÁÉÍÓÚÑ][A-ZÁÉÍÓÚÑ\s]*?)\s+F[ea]c\.?\s*(?:de\s+)?Nacimiento").unwrap()
});
static RE_BIRTH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"F[ea]c\.?\s*(?:de\s+)?Nacimiento\s*:\s*(\d{2}/\d{2}/\d{4})").unwrap()
});
static RE_AGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Edad\s*(?:actual)?\s*:\s*(\d+)\s*A[ÑN]OS").unwrap());
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bTel(?:[eé]fono|\.)?\s*:\s*([0-9][0-9 \-]{5,}[0-9])").unwrap()
});
static RE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\bDirecci[oó]n\s*:\s*([^\n]+?)(?:\s+Tel(?:[eé]fono|\.)?\s*:.*)?$").unwrap()
});

pub fn extract_patient(doc: &Document) -> Patient {
    let text = doc.text();
    Patient {
        document_id: capture(&RE_DOCUMENT, text, 1),
        name: capture(&RE_NAME, text, 1).map(|n| collapse_spaces(&n)),
        birth_date: capture(&RE_BIRTH_DATE, text, 1),
        // Out-of-range ages are a field-miss.
        age: capture(&RE_AGE, text, 1).and_then(|a| a.parse::<u32>().ok()),
        phone: capture(&RE_PHONE, text, 1),
        address: capture(&RE_ADDRESS, text, 1),
    }
}

/// Names can wrap across lines in the source layout.
fn collapse_spaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_doc(raw: &str) -> Document {
        Document::from_raw(raw)
    }

    #[test]
    fn header_sample_yields_four_fields() {
        let doc = make_doc(
            "CC 123456789 -- JUAN PEREZ GOMEZ Fec. Nacimiento: 15/05/1980 Edad actual:45 AÑOS",
        );
        let patient = extract_patient(&doc);
        assert_eq!(patient.document_id.as_deref(), Some("123456789"));
        assert_eq!(patient.name.as_deref(), Some("JUAN PEREZ GOMEZ"));
        assert_eq!(patient.birth_date.as_deref(), Some("15/05/1980"));
        assert_eq!(patient.age, Some(45));
        assert!(patient.phone.is_none());
        assert!(patient.address.is_none());
    }

    #[test]
    fn alternate_birth_label_spelling() {
        let doc = make_doc("TI 998877 -- ANA MARÍA RUIZ Fac. Nacimiento: 01/02/2010");
        let patient = extract_patient(&doc);
        assert_eq!(patient.document_id.as_deref(), Some("998877"));
        assert_eq!(patient.name.as_deref(), Some("ANA MARÍA RUIZ"));
        assert_eq!(patient.birth_date.as_deref(), Some("01/02/2010"));
    }

    #[test]
    fn phone_and_address_on_one_line() {
        let doc = make_doc("Dirección: CRA 5 # 10-20 BARRIO CENTRO Teléfono: 300 123 4567");
        let patient = extract_patient(&doc);
        assert_eq!(patient.address.as_deref(), Some("CRA 5 # 10-20 BARRIO CENTRO"));
        assert_eq!(patient.phone.as_deref(), Some("300 123 4567"));
    }

    #[test]
    fn overflowing_age_is_a_field_miss() {
        let doc = make_doc("Edad actual:99999999999 AÑOS");
        assert_eq!(extract_patient(&doc).age, None);
    }

    #[test]
    fn text_without_header_gives_empty_patient() {
        let doc = make_doc("Paciente estable, sin cambios.");
        assert!(extract_patient(&doc).is_empty());
    }

    #[test]
    fn first_match_wins() {
        let doc = make_doc("CC 111\nCC 222");
        assert_eq!(extract_patient(&doc).document_id.as_deref(), Some("111"));
    }
}
