use std::sync::LazyLock;

use regex::Regex;

use super::types::Document;
use crate::models::ServiceVisit;

/// Care-episode banner printed at the top of every folio.
static RE_VISIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)SEDE DE ATENCION\s+(\d+)\s+([^\n]+?)\s+FOLIO\s+\d+\s+FECHA\s+(\d{2}/\d{2}/\d{4})\s+(\d{2}:\d{2}:\d{2})\s+TIPO DE ATENCION\s*:\s*([^\n]+)",
    )
    .unwrap()
});

/// Every banner occurrence, in document order. Repeated banners are kept.
pub fn extract_visits(doc: &Document) -> Vec<ServiceVisit> {
    RE_VISIT
        .captures_iter(doc.text())
        .map(|caps| ServiceVisit {
            facility_code: caps[1].trim().to_string(),
            facility_name: caps[2].trim().to_string(),
            date: caps[3].to_string(),
            time: caps[4].to_string(),
            attention_type: caps[5].trim().to_string(),
        })
        .collect()
}
