//! Interconsults and free-text note blocks (evolutions, discharges).

use std::sync::LazyLock;

use regex::Regex;

use super::patterns::{capture, RE_DATE};
use super::segment::find_zones;
use super::types::Document;
use crate::models::{Interconsult, NoteBlock};

static RE_INTERCONSULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)INTERCONSULTAS?(?:\s+(?:POR|A|CON)\b)?\s*:?\s*(?:ESPECIALIDAD\s*:?\s*)?([^\n]+?)\s+FECHA(?:\s+DE)?(?:\s+LA)?\s+ORDEN\s*:?\s*(\d{2}/\d{2}/\d{4})",
    )
    .unwrap()
});

pub static RE_EVOLUTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bEVOLUCI[OÓ]N\b").unwrap());
pub static RE_DISCHARGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:ALTA\s+M[EÉ]DICA|EGRESO|ORDEN\s+DE\s+SALIDA)\b").unwrap()
});

pub fn extract_interconsults(doc: &Document) -> Vec<Interconsult> {
    RE_INTERCONSULT
        .captures_iter(doc.text())
        .map(|caps| Interconsult {
            specialty: caps[1].trim().to_string(),
            order_date: caps[2].to_string(),
        })
        .collect()
}

pub fn extract_evolutions(doc: &Document) -> Vec<NoteBlock> {
    extract_note_blocks(doc, &RE_EVOLUTION_MARKER)
}

pub fn extract_discharges(doc: &Document) -> Vec<NoteBlock> {
    extract_note_blocks(doc, &RE_DISCHARGE_MARKER)
}

/// One block per non-empty zone under `marker`: the zone text kept whole and
/// its first date literal.
pub fn extract_note_blocks(doc: &Document, marker: &Regex) -> Vec<NoteBlock> {
    let lines = doc.lines();
    find_zones(&lines, marker)
        .into_iter()
        .filter_map(|zone| {
            let text = zone.text();
            if text.is_empty() {
                return None;
            }
            Some(NoteBlock {
                date: capture(&RE_DATE, &text, 1),
                text,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_doc(raw: &str) -> Document {
        Document::from_raw(raw)
    }

    #[test]
    fn interconsult_variants() {
        let doc = make_doc(
            "INTERCONSULTA POR: CIRUGIA GENERAL FECHA ORDEN: 30/10/2025\nINTERCONSULTA A ESPECIALIDAD: MEDICINA INTERNA FECHA DE LA ORDEN 31/10/2025",
        );
        let items = extract_interconsults(&doc);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].specialty, "CIRUGIA GENERAL");
        assert_eq!(items[0].order_date, "30/10/2025");
        assert_eq!(items[1].specialty, "MEDICINA INTERNA");
        assert_eq!(items[1].order_date, "31/10/2025");
    }

    #[test]
    fn interconsult_without_order_date_is_dropped() {
        let doc = make_doc("INTERCONSULTA POR: CIRUGIA GENERAL");
        assert!(extract_interconsults(&doc).is_empty());
    }

    #[test]
    fn evolution_blocks_with_dates() {
        let doc = make_doc(
            "EVOLUCION 30/10/2025 08:00\nPaciente estable\nTolera via oral\nEVOLUCION\nSin fiebre desde 31/10/2025\nORDENES DE LABORATORIO\n1 HEMOGRAMA IV",
        );
        let notes = extract_evolutions(&doc);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].date.as_deref(), Some("30/10/2025"));
        assert_eq!(notes[0].text, "30/10/2025 08:00\nPaciente estable\nTolera via oral");
        assert_eq!(notes[1].date.as_deref(), Some("31/10/2025"));
        assert_eq!(notes[1].text, "Sin fiebre desde 31/10/2025");
    }

    #[test]
    fn empty_block_is_skipped() {
        let doc = make_doc("EVOLUCION\nORDENES DE LABORATORIO");
        assert!(extract_evolutions(&doc).is_empty());
    }

    #[test]
    fn discharge_markers() {
        let doc = make_doc(
            "ALTA MEDICA\nSe da salida 02/11/2025\nORDEN DE SALIDA\nControl por consulta externa",
        );
        let notes = extract_discharges(&doc);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].date.as_deref(), Some("02/11/2025"));
        assert_eq!(notes[1].date, None);
        assert_eq!(notes[1].text, "Control por consulta externa");
    }

    #[test]
    fn trailing_block_runs_to_end_of_document() {
        let doc = make_doc("texto\nEGRESO\nlinea uno\nlinea dos");
        let notes = extract_discharges(&doc);
        assert_eq!(notes[0].text, "linea uno\nlinea dos");
    }
}
