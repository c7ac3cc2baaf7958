//! Text sources: turn an input into the page-concatenated text the pipeline
//! consumes. Page text is assumed to be already extracted from the PDF.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Page break emitted by PDF-to-text converters.
pub const PAGE_BREAK: char = '\x0c';

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Input has no pages")]
    NoPages,

    #[error("Input contains no usable text")]
    EmptyText,
}

/// Produces the per-page text of one clinical record.
pub trait TextSource: Send + Sync {
    fn pages(&self) -> Result<Vec<String>, InputError>;

    /// All pages joined, one trailing line break per page.
    fn text(&self) -> Result<String, InputError> {
        concatenate_pages(&self.pages()?)
    }
}

/// UTF-8 text file, pages separated by form feeds.
#[derive(Debug, Clone)]
pub struct PlainTextFile {
    path: PathBuf,
}

impl PlainTextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for PlainTextFile {
    fn pages(&self) -> Result<Vec<String>, InputError> {
        let bytes = std::fs::read(&self.path).map_err(|source| InputError::Unreadable {
            path: self.path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| InputError::Encoding {
            path: self.path.clone(),
            source,
        })?;

        let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
        // Converters end the last page with a form feed too.
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }
        if text.is_empty() {
            pages.clear();
        }

        tracing::debug!(path = %self.path.display(), pages = pages.len(), "Text file read");
        Ok(pages)
    }
}

/// Page texts already held in memory.
#[derive(Debug, Clone, Default)]
pub struct PageTexts(pub Vec<String>);

impl TextSource for PageTexts {
    fn pages(&self) -> Result<Vec<String>, InputError> {
        Ok(self.0.clone())
    }
}

/// Join pages with one appended line break each. Zero pages or text with
/// nothing but whitespace is an input error, never an empty report.
pub fn concatenate_pages(pages: &[String]) -> Result<String, InputError> {
    if pages.is_empty() {
        return Err(InputError::NoPages);
    }

    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }

    if text.trim().is_empty() {
        return Err(InputError::EmptyText);
    }
    Ok(text)
}
