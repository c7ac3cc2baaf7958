//! Patterns shared by several category extractors.

use std::sync::LazyLock;

use regex::Regex;

/// dd/mm/yyyy date.
pub static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2}/\d{2}/\d{4})\b").unwrap());

/// Numeric dose with unit anywhere in a line ("500 MG", "2,5 ml").
pub static RE_DOSE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+(?:[.,]\d+)?\s*(?:MG|MCG|ML|G|UI)\b").unwrap()
});

/// A line that starts with a dose.
pub static RE_DOSE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+(?:[.,]\d+)?\s*(?:MG|MCG|ML|G|UI)\b").unwrap()
});

/// "Fecha Aplicación: dd/mm/yyyy [hh:mm[:ss]]"
pub static RE_APPLICATION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Fecha\s+(?:de\s+)?Aplicaci[oó]n\s*:?\s*(\d{2}/\d{2}/\d{4})(?:\s+(\d{1,2}:\d{2}(?::\d{2})?))?",
    )
    .unwrap()
});

/// "Resultado:" / "Resultados:" label.
pub static RE_RESULT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bResultados?\s*:").unwrap());

/// Trimmed capture group `group` of the first match of `re` in `text`.
/// Empty captures count as no match.
pub fn capture(re: &Regex, text: &str, group: usize) -> Option<String> {
    let value = re.captures(text)?.get(group)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// First date and optional time following an application-date label.
pub fn application_date(text: &str) -> Option<(String, Option<String>)> {
    date_and_time(&RE_APPLICATION_DATE.captures(text)?)
}

/// Like [`application_date`], but for the last label in `text`.
pub fn last_application_date(text: &str) -> Option<(String, Option<String>)> {
    date_and_time(&RE_APPLICATION_DATE.captures_iter(text).last()?)
}

fn date_and_time(caps: &regex::Captures<'_>) -> Option<(String, Option<String>)> {
    let date = caps.get(1)?.as_str().to_string();
    let time = caps.get(2).map(|m| m.as_str().to_string());
    Some((date, time))
}
