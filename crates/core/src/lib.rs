//! Core domain types, text normalization, and the analysis session
//! for PDF NLP processing.

pub mod error;
pub mod normalize;
pub mod services;
pub mod session;
pub mod types;
pub mod writer;

pub use error::{Error, Result};
pub use normalize::TextNormalizer;
pub use services::{
    DocumentWriter, Entity, EntityLabel, EntityRecognizer, Keyword, KeywordExtractor,
    PageTextExtractor, SentenceSegmenter, SentimentScore, SentimentScorer, SpeechSynthesizer,
};
pub use session::{AnalysisSession, KEYWORD_LIMIT, SPEECH_CHAR_LIMIT, SUMMARY_SENTENCES};
pub use types::{ExtractedDocument, ExtractionOutcome, PageText};
pub use writer::PlainTextWriter;
