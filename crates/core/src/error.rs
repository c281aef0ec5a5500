//! Error types for PDF text extraction and analysis.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during PDF text extraction and analysis.
///
/// Every variant is recoverable: front ends report the message and leave
/// the session usable for another attempt.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read a file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// An operation was invoked before a document was chosen.
    #[error("No document selected")]
    NoFileSelected,

    /// An analysis was invoked before extraction produced any text.
    #[error("No extracted text available")]
    NoTextAvailable,

    /// The file is not a PDF or could not be recognized.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// The page-text extractor could not process the document.
    #[error("Text extraction error: {0}")]
    ExtractionError(String),

    /// The output writer could not produce the requested file.
    #[error("Failed to write output: {0}")]
    WriteError(String),

    /// The speech engine could not be initialized or driven.
    #[error("Speech synthesis error: {0}")]
    SpeechError(String),
}
