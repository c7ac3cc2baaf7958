//! Section segmentation.
//!
//! Clinical records print each section under an all-caps title. A zone starts
//! at a marker occurrence and runs until the next header line, the next
//! occurrence of the same marker, or end of text. Tail sections have no
//! trailing header, so an unterminated zone extends to end of document.

use regex::Regex;

use super::types::Zone;

/// Minimum number of letters for a line to count as a section header.
pub const MIN_HEADER_LETTERS: usize = 5;

/// A header line holds only uppercase letters (accented included) and
/// spaces, with at least [`MIN_HEADER_LETTERS`] letters.
pub fn is_header_line(line: &str) -> bool {
    let mut letters = 0;
    for c in line.chars() {
        if c == ' ' {
            continue;
        }
        if c.is_alphabetic() && c.is_uppercase() {
            letters += 1;
        } else {
            return false;
        }
    }
    letters >= MIN_HEADER_LETTERS
}

/// Split `lines` into zones, one per line matching `marker`, in document order.
pub fn find_zones<'a>(lines: &'a [&'a str], marker: &Regex) -> Vec<Zone<'a>> {
    let mut zones = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(found) = marker.find(lines[i]) else {
            i += 1;
            continue;
        };

        let start = i + 1;
        let mut end = start;
        while end < lines.len() && !is_header_line(lines[end]) && !marker.is_match(lines[end]) {
            end += 1;
        }

        zones.push(Zone {
            marker_line: i,
            tail: lines[i][found.end()..].trim(),
            body: &lines[start..end],
        });

        // Next search starts at the line that closed this zone.
        i = end;
    }

    zones
}
