//! Tauri commands for PDF text extraction and analysis.
//!
//! One command per toolbar action. All commands share the session behind a
//! mutex, so at most one extraction-or-analysis operation touches the
//! stored text at a time; every error is converted to a user-visible
//! message string.

use pdfnlp_analysis::{
    CooccurrenceExtractor, EngineSynthesizer, LexicalRecognizer, LexiconScorer, RuleSegmenter,
};
use pdfnlp_core::{AnalysisSession, TextNormalizer};
use pdfnlp_docx::writer_for;
use pdfnlp_pdf::LopdfExtractor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tauri::State;

/// Shared session state managed by the Tauri runtime.
pub struct SessionState(pub Mutex<AnalysisSession>);

/// Result of extracting a document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Original filename.
    pub filename: String,
    /// Total number of pages.
    pub page_count: usize,
    /// Number of pages that produced text.
    pub pages_with_text: usize,
    /// The normalized text, for the display pane.
    pub text: String,
}

/// One recognized entity, for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntityItem {
    pub text: String,
    pub label: String,
}

/// One keyword with its relevance score.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordItem {
    pub phrase: String,
    pub score: f64,
}

/// Structured sentiment result.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentReport {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

fn lock<'a>(state: &'a State<'_, SessionState>) -> Result<MutexGuard<'a, AnalysisSession>, String> {
    state
        .0
        .lock()
        .map_err(|_| "Session state is unavailable".to_string())
}

/// Record the chosen document and return its display name.
#[tauri::command]
pub async fn select_document(
    state: State<'_, SessionState>,
    file_path: String,
) -> Result<String, String> {
    let mut session = lock(&state)?;
    session.select_file(&file_path);

    Ok(Path::new(&file_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string())
}

/// Extract and normalize the selected document's text.
#[tauri::command]
pub async fn extract_document(
    state: State<'_, SessionState>,
) -> Result<ExtractionReport, String> {
    let mut session = lock(&state)?;
    let outcome = session
        .extract(&LopdfExtractor::new(), &TextNormalizer::new())
        .map_err(|e| e.to_string())?;

    Ok(ExtractionReport {
        filename: outcome.filename,
        page_count: outcome.page_count,
        pages_with_text: outcome.pages_with_text,
        text: session.text().unwrap_or_default().to_string(),
    })
}

/// Summarize the extracted text (first five sentences).
#[tauri::command]
pub async fn summarize_document(state: State<'_, SessionState>) -> Result<String, String> {
    let session = lock(&state)?;
    session
        .summarize(&RuleSegmenter::new())
        .map_err(|e| e.to_string())
}

/// Recognize named entities in the extracted text.
#[tauri::command]
pub async fn list_entities(state: State<'_, SessionState>) -> Result<Vec<EntityItem>, String> {
    let session = lock(&state)?;
    let entities = session
        .entities(&LexicalRecognizer::new())
        .map_err(|e| e.to_string())?;

    Ok(entities
        .into_iter()
        .map(|e| EntityItem {
            text: e.text,
            label: e.label.as_str().to_string(),
        })
        .collect())
}

/// Extract the top keywords from the extracted text.
#[tauri::command]
pub async fn extract_keywords(
    state: State<'_, SessionState>,
) -> Result<Vec<KeywordItem>, String> {
    let session = lock(&state)?;
    let keywords = session
        .keywords(&CooccurrenceExtractor::new())
        .map_err(|e| e.to_string())?;

    Ok(keywords
        .into_iter()
        .map(|k| KeywordItem {
            phrase: k.phrase,
            score: k.score,
        })
        .collect())
}

/// Score the sentiment of the extracted text.
#[tauri::command]
pub async fn analyze_sentiment(
    state: State<'_, SessionState>,
) -> Result<SentimentReport, String> {
    let session = lock(&state)?;
    let score = session
        .sentiment(&LexiconScorer::new())
        .map_err(|e| e.to_string())?;

    Ok(SentimentReport {
        negative: score.negative,
        neutral: score.neutral,
        positive: score.positive,
        compound: score.compound,
    })
}

/// Speak the beginning of the extracted text.
#[tauri::command]
pub async fn speak_document(state: State<'_, SessionState>) -> Result<(), String> {
    let session = lock(&state)?;
    let synthesizer = EngineSynthesizer::new().map_err(|e| e.to_string())?;
    session.speak(&synthesizer).map_err(|e| e.to_string())
}

/// Save the extracted text to a file (.txt or .docx by extension).
#[tauri::command]
pub async fn save_document(
    state: State<'_, SessionState>,
    file_path: String,
) -> Result<(), String> {
    let session = lock(&state)?;
    let path = Path::new(&file_path);
    session
        .save(writer_for(path).as_ref(), path)
        .map_err(|e| e.to_string())
}

/// Discard the extracted text; the selected file is kept.
#[tauri::command]
pub async fn clear_document(state: State<'_, SessionState>) -> Result<(), String> {
    let mut session = lock(&state)?;
    session.clear_text();
    Ok(())
}
