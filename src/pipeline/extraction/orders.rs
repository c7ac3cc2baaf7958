//! Laboratory and imaging orders.
//!
//! Both sections share one layout: numbered entry lines, each optionally
//! followed by an application date and a result block.

use std::sync::LazyLock;

use regex::Regex;

use super::cursor::LineCursor;
use super::patterns::{application_date, RE_RESULT_LABEL};
use super::segment::find_zones;
use super::types::Document;
use crate::models::ClinicalOrder;

pub static RE_LAB_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ORDENES DE LABORATORIO").unwrap());
pub static RE_IMAGING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ORDENES DE IMAGENES DIAGNOSTICAS").unwrap());

/// "1 HEMOGRAMA IV". The description must open with an uppercase letter so
/// numeric result lines are not taken as entries.
static RE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:[.,]\d+)?)\s+(\p{Lu}.*)$").unwrap());

fn is_entry(line: &str) -> bool {
    RE_ENTRY.is_match(line)
}

pub fn extract_lab_orders(doc: &Document, forward_scan: usize) -> Vec<ClinicalOrder> {
    extract_orders(doc, &RE_LAB_MARKER, forward_scan)
}

pub fn extract_imaging_orders(doc: &Document, forward_scan: usize) -> Vec<ClinicalOrder> {
    extract_orders(doc, &RE_IMAGING_MARKER, forward_scan)
}

/// Orders under every zone opened by `marker`, in document order.
pub fn extract_orders(doc: &Document, marker: &Regex, forward_scan: usize) -> Vec<ClinicalOrder> {
    let lines = doc.lines();
    let mut orders = Vec::new();

    for zone in find_zones(&lines, marker) {
        let mut cursor = LineCursor::new(zone.body);
        while let Some(line) = cursor.current() {
            if let Some(caps) = RE_ENTRY.captures(line) {
                let mut order = ClinicalOrder {
                    quantity: caps[1].to_string(),
                    description: caps[2].trim().to_string(),
                    date: None,
                    time: None,
                    result: None,
                };
                scan_entry(&cursor, forward_scan, &mut order);
                orders.push(order);
            }
            cursor.advance();
        }
    }

    orders
}

fn scan_entry(cursor: &LineCursor<'_>, forward_scan: usize, order: &mut ClinicalOrder) {
    let window = cursor.window(forward_scan, is_entry);

    if let Some((date, time)) = window.iter().find_map(|line| application_date(line)) {
        order.date = Some(date);
        order.time = time;
    }

    let Some(offset) = window.iter().position(|line| RE_RESULT_LABEL.is_match(line)) else {
        return;
    };
    let label_line = window[offset];
    let Some(label) = RE_RESULT_LABEL.find(label_line) else {
        return;
    };

    // Result text continues past the scan window up to the next entry.
    let mut ahead = *cursor;
    ahead.skip(offset);
    let result = std::iter::once(label_line[label.end()..].trim())
        .chain(ahead.rest_until(is_entry).iter().copied())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if !result.is_empty() {
        order.result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_doc(raw: &str) -> Document {
        Document::from_raw(raw)
    }

    #[test]
    fn lab_entries_in_order() {
        let doc = make_doc(
            "ORDENES DE LABORATORIO\n1 HEMOGRAMA IV\n2 IONOGRAMA [CLORO SODIO POTASIO]\nORDENES DE IMAGENES DIAGNOSTICAS\n1 RADIOGRAFIA DE TORAX",
        );
        let labs = extract_lab_orders(&doc, 5);
        assert_eq!(labs.len(), 2);
        assert_eq!(labs[0].quantity, "1");
        assert_eq!(labs[0].description, "HEMOGRAMA IV");
        assert_eq!(labs[1].description, "IONOGRAMA [CLORO SODIO POTASIO]");

        let imaging = extract_imaging_orders(&doc, 5);
        assert_eq!(imaging.len(), 1);
        assert_eq!(imaging[0].description, "RADIOGRAFIA DE TORAX");
    }

    #[test]
    fn application_date_and_result_are_attached() {
        let doc = make_doc(
            "ORDENES DE LABORATORIO\n1 HEMOGRAMA IV\nFecha Aplicación: 30/10/2025 06:00\nResultado: Leucocitos 12.000\nNeutrofilos 80%\n1 PROTEINA C REACTIVA\nFecha Aplicación: 30/10/2025",
        );
        let labs = extract_lab_orders(&doc, 5);
        assert_eq!(labs.len(), 2);
        assert_eq!(labs[0].date.as_deref(), Some("30/10/2025"));
        assert_eq!(labs[0].time.as_deref(), Some("06:00"));
        assert_eq!(
            labs[0].result.as_deref(),
            Some("Leucocitos 12.000 Neutrofilos 80%")
        );
        assert_eq!(labs[1].date.as_deref(), Some("30/10/2025"));
        assert_eq!(labs[1].time, None);
        assert_eq!(labs[1].result, None);
    }

    #[test]
    fn result_continues_past_scan_window() {
        let doc = make_doc(
            "ORDENES DE IMAGENES DIAGNOSTICAS\n1 ECOGRAFIA ABDOMINAL\nResultados:\nhigado normal\nvesicula normal\nrinones normales\nbazo normal\nsin liquido libre\nconclusion normal",
        );
        let imaging = extract_imaging_orders(&doc, 2);
        assert_eq!(
            imaging[0].result.as_deref(),
            Some("higado normal vesicula normal rinones normales bazo normal sin liquido libre conclusion normal")
        );
    }

    #[test]
    fn label_outside_window_is_missed() {
        let doc = make_doc("ORDENES DE LABORATORIO\n1 HEMOGRAMA IV\na\nb\nResultado: normal");
        assert_eq!(extract_lab_orders(&doc, 2)[0].result, None);
        assert_eq!(extract_lab_orders(&doc, 3)[0].result.as_deref(), Some("normal"));
    }

    #[test]
    fn empty_result_label_is_absent() {
        let doc = make_doc("ORDENES DE LABORATORIO\n1 GLICEMIA\nResultado:");
        assert_eq!(extract_lab_orders(&doc, 5)[0].result, None);
    }

    #[test]
    fn numeric_result_lines_are_not_entries() {
        let doc = make_doc("ORDENES DE LABORATORIO\n1 GLICEMIA\nResultado:\n95 mg/dL");
        let labs = extract_lab_orders(&doc, 5);
        assert_eq!(labs.len(), 1);
        assert_eq!(labs[0].result.as_deref(), Some("95 mg/dL"));
    }

    #[test]
    fn no_zone_no_orders() {
        assert!(extract_lab_orders(&make_doc("1 HEMOGRAMA IV"), 5).is_empty());
    }
}
