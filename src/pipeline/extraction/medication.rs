//! Medication records from the three prescription layouts.
//!
//! Records are appended family by family: standard formulas first, then
//! medication reconciliation, then therapeutic-plan bullets. Within a family
//! they follow document order.

use std::sync::LazyLock;

use regex::Regex;

use super::cursor::LineCursor;
use super::patterns::{capture, RE_DOSE_LINE, RE_DOSE_TOKEN};
use super::segment::find_zones;
use super::types::Document;
use crate::models::{Medication, MedicationSource};

static RE_STANDARD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FORMULA MEDICA ESTANDAR").unwrap());
static RE_RECONCILIATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CONCILIACI[OÓ]N\s+MEDICAMENTOSA").unwrap());
static RE_PLAN_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PLAN\s+(?:TERAP[EÉ]UTICO|DE\s+MANEJO)").unwrap());

/// "1.00 OMEPRAZOL 20 MG". Dot decimals only: comma quantities such as
/// "1,00 TABLETA" are the dosing line under an entry, not a new entry.
static RE_STANDARD_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+)\s+(\S.*)$").unwrap());

static RE_ROUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bV[ií]a\b\s*:?\s*(\p{L}+)").unwrap());
static RE_FREQUENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bFrecuencia\b\s*:?\s*(.+?)\s*(?:\bEstado\s*:.*|\bV[ií]a\b.*|\bDuraci[oó]n\b.*)?$",
    )
    .unwrap()
});
static RE_STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bEstado\s*:\s*(\p{L}+(?:\s+\p{L}+)*)").unwrap());
static RE_DOSE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bDosis\s*:\s*(.+?)\s*(?:\bV[ií]a\b.*|\bFrecuencia\b.*|\bEstado\s*:.*)?$")
        .unwrap()
});

/// Leading quantity on reconciliation and plan lines.
static RE_LEADING_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:[.,]\d+)?)\s+(\p{L}.*)$").unwrap());
static RE_INLINE_ROUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bV[IÍií]A\s*:?\s*(\p{L}+)").unwrap());
static RE_INLINE_FREQUENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(CADA\s+\d+\s*(?:HORAS?|HRS?|H|D[IÍ]AS?)\b|Frecuencia\s*:?\s*\d+\s*\p{L}+)",
    )
    .unwrap()
});

const DEFAULT_QUANTITY: &str = "1";

pub fn extract_medications(doc: &Document, forward_scan: usize) -> Vec<Medication> {
    let lines = doc.lines();
    let mut medications = Vec::new();

    for zone in find_zones(&lines, &RE_STANDARD_MARKER) {
        medications.extend(parse_standard_zone(zone.body, forward_scan));
    }

    for zone in find_zones(&lines, &RE_RECONCILIATION_MARKER) {
        medications.extend(
            zone.body
                .iter()
                .filter_map(|line| parse_inline_line(line, MedicationSource::Reconciliation)),
        );
    }

    for zone in find_zones(&lines, &RE_PLAN_MARKER) {
        let tail = zone.tail.trim_start_matches(':').trim();
        medications.extend(
            std::iter::once(tail)
                .chain(zone.body.iter().copied())
                .filter_map(plan_item)
                .filter_map(|item| parse_inline_line(item, MedicationSource::Plan)),
        );
    }

    tracing::debug!(count = medications.len(), "Medication records extracted");
    medications
}

fn is_standard_entry(line: &str) -> bool {
    RE_STANDARD_ENTRY.is_match(line) && !RE_DOSE_LINE.is_match(line)
}

fn parse_standard_zone(body: &[&str], forward_scan: usize) -> Vec<Medication> {
    let mut medications = Vec::new();
    let mut cursor = LineCursor::new(body);

    while let Some(line) = cursor.current() {
        if !is_standard_entry(line) {
            cursor.advance();
            continue;
        }
        let Some(caps) = RE_STANDARD_ENTRY.captures(line) else {
            cursor.advance();
            continue;
        };

        let mut med = Medication::new(MedicationSource::Standard, &caps[1], caps[2].trim());
        let window = cursor.window(forward_scan, is_standard_entry);

        let mut consumed = 1;
        if let Some(next) = window.get(1) {
            if RE_DOSE_LINE.is_match(next) {
                med.dose = next.to_string();
                med.description.push(' ');
                med.description.push_str(next);
                consumed = 2;
            }
        }

        if med.dose.is_empty() {
            med.dose = first_in_window(window, &RE_DOSE_LABEL);
        }
        med.route = first_in_window(window, &RE_ROUTE);
        med.frequency = first_in_window(window, &RE_FREQUENCY);
        med.status = first_in_window(window, &RE_STATUS);

        medications.push(med);
        cursor.skip(consumed);
    }

    medications
}

/// Text of a bulleted plan line, bullet removed.
fn plan_item(line: &str) -> Option<&str> {
    let item = line.strip_prefix(|c: char| matches!(c, '-' | '–' | '•'))?;
    Some(item.trim())
}

/// First capture of `re` on any window line, or an empty string.
fn first_in_window(window: &[&str], re: &Regex) -> String {
    window
        .iter()
        .find_map(|line| capture(re, line, 1))
        .unwrap_or_default()
}

/// A reconciliation-style line: one medication per line carrying a dose token.
fn parse_inline_line(line: &str, source: MedicationSource) -> Option<Medication> {
    let dose = RE_DOSE_TOKEN.find(line)?;

    let (quantity, description) = match RE_LEADING_QUANTITY.captures(line) {
        Some(caps) if dose.start() > 0 => (caps[1].to_string(), caps[2].trim().to_string()),
        _ => (DEFAULT_QUANTITY.to_string(), line.trim().to_string()),
    };

    let mut med = Medication::new(source, &quantity, &description);
    med.dose = dose.as_str().trim().to_string();
    med.route = capture(&RE_INLINE_ROUTE, line, 1).unwrap_or_default();
    med.frequency = capture(&RE_INLINE_FREQUENCY, line, 1).unwrap_or_default();
    Some(med)
}
