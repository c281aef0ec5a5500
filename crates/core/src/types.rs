//! Domain types for representing extracted document content.

use serde::{Deserialize, Serialize};

/// The text recovered from one PDF page, or an explicit absence marker
/// when the page has no extractable text layer (e.g. a scanned image).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// 1-based page number.
    pub number: usize,

    /// Extracted text, or `None` when the page yielded no text.
    pub text: Option<String>,
}

impl PageText {
    /// Create a page result carrying extracted text.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: Some(text.into()),
        }
    }

    /// Create an absence marker for a page without a text layer.
    pub fn absent(number: usize) -> Self {
        Self { number, text: None }
    }

    /// Whether this page produced any text.
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

/// An entire document with its per-page extraction results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Original filename (without path).
    pub filename: String,

    /// Per-page results in page order.
    pub pages: Vec<PageText>,
}

impl ExtractedDocument {
    /// Create a new document with the given filename.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            pages: Vec::new(),
        }
    }

    /// Append a page result.
    pub fn add_page(&mut self, page: PageText) {
        self.pages.push(page);
    }

    /// Total number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages that produced text.
    pub fn pages_with_text(&self) -> usize {
        self.pages.iter().filter(|p| p.has_text()).count()
    }
}

/// Summary of a successful extraction, for front-end display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// Original filename (without path).
    pub filename: String,

    /// Total number of pages in the document.
    pub page_count: usize,

    /// Number of pages that produced text.
    pub pages_with_text: usize,

    /// Length of the normalized text, in characters.
    pub characters: usize,
}
