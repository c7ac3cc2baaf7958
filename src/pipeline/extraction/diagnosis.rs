use std::sync::LazyLock;

use regex::Regex;

use super::segment::find_zones;
use super::types::Document;
use crate::models::Diagnosis;

static RE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bDIAGN[OÓ]STICOS?\b").unwrap());

/// `<code> [-] <description> [<type>]`, code like `K359` or `S52X`.
static RE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Z]\d{2}[0-9X]?)(?:\s*-\s*|\s+)(.+?)(?:\s+((?i:PRINCIPAL|RELACIONADO(?:\s*\d+)?|CONFIRMADO\s+NUEVO|CONFIRMADO\s+REPETIDO|IMPRESI[OÓ]N\s+DIAGN[OÓ]STICA)))?$",
    )
    .unwrap()
});

/// Coded diagnoses listed under `DIAGNOSTICO(S)` headers, in document order.
/// The header line itself may carry the first entry.
pub fn extract_diagnoses(doc: &Document) -> Vec<Diagnosis> {
    let lines = doc.lines();
    let mut diagnoses = Vec::new();

    for zone in find_zones(&lines, &RE_MARKER) {
        let tail = zone.tail.trim_start_matches(':').trim();
        diagnoses.extend(
            std::iter::once(tail)
                .chain(zone.body.iter().copied())
                .filter_map(parse_entry),
        );
    }

    diagnoses
}

fn parse_entry(line: &str) -> Option<Diagnosis> {
    let caps = RE_ENTRY.captures(line)?;
    Some(Diagnosis {
        code: caps[1].to_string(),
        description: caps[2].trim().to_string(),
        kind: caps.get(3).map(|m| m.as_str().to_uppercase()),
    })
}
