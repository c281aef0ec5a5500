//! DOCX (Office Open XML) output backend.
//!
//! Writes .docx files, which are ZIP archives containing XML documents.

pub mod writer;

pub use writer::{writer_for, DocxWriter};
