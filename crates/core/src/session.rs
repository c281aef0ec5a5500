//! The analysis session: one document's worth of shared state.
//!
//! The session owns the selected file path and the normalized extracted
//! text. Extraction replaces the text wholesale; every analysis operation
//! reads the same stored string and never mutates it. Holding the state in
//! an explicit object (rather than a global) lets multiple sessions and
//! test harnesses run in isolation.

use crate::error::{Error, Result};
use crate::normalize::TextNormalizer;
use crate::services::{
    DocumentWriter, Entity, EntityRecognizer, Keyword, KeywordExtractor, PageTextExtractor,
    SentenceSegmenter, SentimentScore, SentimentScorer, SpeechSynthesizer,
};
use crate::types::ExtractionOutcome;
use std::path::{Path, PathBuf};

/// Number of leading sentences that make up a summary.
pub const SUMMARY_SENTENCES: usize = 5;

/// Maximum number of characters handed to the speech synthesizer.
pub const SPEECH_CHAR_LIMIT: usize = 500;

/// Maximum number of keyword/score pairs reported.
pub const KEYWORD_LIMIT: usize = 10;

/// Session state for one document.
///
/// At any time `extracted_text` is either empty or a fully normalized
/// string; it is never left partially processed.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    selected_file: Option<PathBuf>,
    extracted_text: String,
}

impl AnalysisSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the most recently chosen document path.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) {
        self.selected_file = Some(path.into());
    }

    /// The currently selected document, if any.
    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    /// Whether extraction has produced any text.
    pub fn has_text(&self) -> bool {
        !self.extracted_text.is_empty()
    }

    /// The shared normalized text every analysis reads.
    pub fn text(&self) -> Result<&str> {
        if self.extracted_text.is_empty() {
            return Err(Error::NoTextAvailable);
        }
        Ok(&self.extracted_text)
    }

    /// Discard the extracted text. The selected file is kept, so a
    /// re-extraction works without choosing the document again.
    pub fn clear_text(&mut self) {
        self.extracted_text.clear();
    }

    /// Run extraction on the selected file and store the normalized text.
    ///
    /// The stored text is written exactly once, after the extractor
    /// succeeds; on any failure the previous text is left unchanged.
    pub fn extract(
        &mut self,
        extractor: &dyn PageTextExtractor,
        normalizer: &TextNormalizer,
    ) -> Result<ExtractionOutcome> {
        let path = self.selected_file.as_deref().ok_or(Error::NoFileSelected)?;
        let document = extractor.extract(path)?;

        let normalized = normalizer.normalize_pages(&document.pages);
        log::debug!(
            "extracted {} of {} pages from {}",
            document.pages_with_text(),
            document.page_count(),
            document.filename
        );

        let outcome = ExtractionOutcome {
            page_count: document.page_count(),
            pages_with_text: document.pages_with_text(),
            characters: normalized.chars().count(),
            filename: document.filename,
        };
        self.extracted_text = normalized;

        Ok(outcome)
    }

    /// The first [`SUMMARY_SENTENCES`] sentences, joined by single spaces.
    pub fn summarize(&self, segmenter: &dyn SentenceSegmenter) -> Result<String> {
        let sentences = segmenter.sentences(self.text()?);
        Ok(sentences
            .iter()
            .take(SUMMARY_SENTENCES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "))
    }

    /// Recognized entities, filtered to spans longer than one character.
    pub fn entities(&self, recognizer: &dyn EntityRecognizer) -> Result<Vec<Entity>> {
        let entities = recognizer.entities(self.text()?);
        Ok(entities
            .into_iter()
            .filter(|e| e.text.chars().count() > 1)
            .collect())
    }

    /// The top [`KEYWORD_LIMIT`] keyword/score pairs.
    pub fn keywords(&self, extractor: &dyn KeywordExtractor) -> Result<Vec<Keyword>> {
        let keywords = extractor.keywords(self.text()?);
        Ok(keywords.into_iter().take(KEYWORD_LIMIT).collect())
    }

    /// The structured sentiment of the whole text.
    pub fn sentiment(&self, scorer: &dyn SentimentScorer) -> Result<SentimentScore> {
        Ok(scorer.score(self.text()?))
    }

    /// Speak the first [`SPEECH_CHAR_LIMIT`] characters of the text.
    pub fn speak(&self, synthesizer: &dyn SpeechSynthesizer) -> Result<()> {
        synthesizer.speak(speech_excerpt(self.text()?))
    }

    /// Write the normalized text to `path` via the given writer.
    pub fn save(&self, writer: &dyn DocumentWriter, path: &Path) -> Result<()> {
        writer.write(path, self.text()?)
    }
}

/// The leading [`SPEECH_CHAR_LIMIT`] characters of `text`, cut on a char
/// boundary.
fn speech_excerpt(text: &str) -> &str {
    match text.char_indices().nth(SPEECH_CHAR_LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
