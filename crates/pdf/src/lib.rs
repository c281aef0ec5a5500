//! PDF page-text extraction backend.
//!
//! Reads PDF files with lopdf and produces per-page text results; pages
//! without an extractable text layer become explicit absence markers.

pub mod extractor;

pub use extractor::LopdfExtractor;
