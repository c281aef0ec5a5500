//! Boundary-service contracts.
//!
//! One narrow trait per external capability the toolkit consumes: page-text
//! extraction, sentence segmentation, entity recognition, keyword
//! extraction, sentiment scoring, speech synthesis, and document writing.
//! Front ends hold implementations behind `dyn` references and tests swap
//! in fakes without touching real models or engines.

use crate::error::Result;
use crate::types::ExtractedDocument;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extracts per-page text from a document on disk.
///
/// Fails with [`Error::ExtractionError`](crate::Error::ExtractionError) when
/// the file is unreadable, corrupt, or encrypted. A single page without a
/// text layer is not a failure; it becomes an absent page in the result.
pub trait PageTextExtractor: Send + Sync {
    /// Extract all pages of the document at `path`, in page order.
    fn extract(&self, path: &Path) -> Result<ExtractedDocument>;
}

/// Splits normalized text into an ordered sequence of sentences.
///
/// Empty input yields an empty sequence.
pub trait SentenceSegmenter: Send + Sync {
    fn sentences(&self, text: &str) -> Vec<String>;
}

/// Category labels an entity recognizer may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Organization,
    Person,
    Date,
    Percent,
    Number,
    Product,
}

impl EntityLabel {
    /// Short display tag, as shown next to each recognized span.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Organization => "ORG",
            EntityLabel::Person => "PERSON",
            EntityLabel::Date => "DATE",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Number => "NUMBER",
            EntityLabel::Product => "PRODUCT",
        }
    }
}

/// A recognized entity span with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The span text as it appears in the document.
    pub text: String,

    /// Assigned category.
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Recognizes entity spans in normalized text.
pub trait EntityRecognizer: Send + Sync {
    fn entities(&self, text: &str) -> Vec<Entity>;
}

/// A keyword phrase with its relevance score.
///
/// Score convention: higher means more relevant. Extractors return
/// keywords in descending score order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub phrase: String,
    pub score: f64,
}

/// Extracts scored keyword phrases from normalized text.
pub trait KeywordExtractor: Send + Sync {
    fn keywords(&self, text: &str) -> Vec<Keyword>;
}

/// A structured sentiment result.
///
/// `negative`, `neutral`, and `positive` are proportions in [0, 1];
/// `compound` is an aggregate polarity in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

/// Scores the overall sentiment of normalized text.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Speaks a bounded piece of text aloud.
///
/// Callers bound the input length; implementations should queue the
/// utterance rather than block indefinitely.
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, text: &str) -> Result<()>;
}

/// Writes a content string to a destination path.
///
/// Fails with [`Error::WriteError`](crate::Error::WriteError); on failure
/// no partial file may be left behind.
pub trait DocumentWriter: Send + Sync {
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
