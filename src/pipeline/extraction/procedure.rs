use std::sync::LazyLock;

use regex::Regex;

use super::patterns::{application_date, last_application_date};
use super::types::Document;
use crate::models::{Procedure, ProcedureKind};

static RE_SURGICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)PROCEDIMIENTOS QUIR[UÚ]RGICOS\s*\n\s*(\d+)[ \t]+([^\n]+)").unwrap()
});
static RE_NON_SURGICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ORDENES DE PROCEDIMIENTOS NO QX\s*\n\s*(\d+)[ \t]+([^\n]+)").unwrap()
});

/// Surgical list first, then non-surgical; each in document order.
///
/// Dates are back-filled from a `Fecha Aplicación` label within `date_window`
/// characters of the first occurrence of the description: the first label
/// after it, else the nearest label before it.
pub fn extract_procedures(doc: &Document, date_window: usize) -> Vec<Procedure> {
    let text = doc.text();

    let mut procedures: Vec<Procedure> = [
        (ProcedureKind::Surgical, &*RE_SURGICAL),
        (ProcedureKind::NonSurgical, &*RE_NON_SURGICAL),
    ]
    .into_iter()
    .flat_map(|(kind, re)| {
        re.captures_iter(text).map(move |caps| Procedure {
            kind,
            quantity: caps[1].to_string(),
            description: caps[2].trim().to_string(),
            date: None,
            time: None,
        })
    })
    .collect();

    for procedure in &mut procedures {
        let Some(start) = text.find(&procedure.description) else {
            continue;
        };
        let end = start + procedure.description.len();
        let (from, to) = char_bounds(text, start, end, date_window);
        let found = application_date(&text[end..to])
            .or_else(|| last_application_date(&text[from..start]));
        if let Some((date, time)) = found {
            procedure.date = Some(date);
            procedure.time = time;
        }
    }

    procedures
}

/// Byte bounds of `start..end` widened by up to `radius` characters on each side.
fn char_bounds(text: &str, start: usize, end: usize, radius: usize) -> (usize, usize) {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    (from, to)
}
