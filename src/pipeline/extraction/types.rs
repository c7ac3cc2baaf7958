use super::sanitize::normalize_text;

/// Normalized clinical-record text, shared read-only by every extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Normalize raw page text into a document.
    pub fn from_raw(raw: &str) -> Self {
        Self {
            text: normalize_text(raw),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// A section of the document: the lines between a header marker and the next
/// header line (or end of text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone<'a> {
    /// Index of the line holding the marker.
    pub marker_line: usize,
    /// Whatever follows the marker on its own line, trimmed.
    pub tail: &'a str,
    pub body: &'a [&'a str],
}

impl<'a> Zone<'a> {
    /// Tail (when non-empty) followed by the body lines, newline-joined.
    pub fn text(&self) -> String {
        let tail = self.tail.trim_start_matches(':').trim();
        std::iter::once(tail)
            .filter(|t| !t.is_empty())
            .chain(self.body.iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
