//! PDF extractor implementation.

use lopdf::Document;
use pdfnlp_core::{Error, ExtractedDocument, PageText, PageTextExtractor, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The PDF header may appear anywhere in the first kilobyte.
const MAGIC_WINDOW: usize = 1024;

/// PDF file magic bytes.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Page-text extractor backed by lopdf.
///
/// Document-level problems (unreadable, corrupt, encrypted) are extraction
/// errors; a single page that yields no text is reported as an absent page
/// and never fails the document.
pub struct LopdfExtractor;

impl LopdfExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTextExtractor for LopdfExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedDocument> {
        let header = read_header(path)?;
        if !has_pdf_magic(&header) {
            return Err(Error::UnsupportedFormat(format!(
                "{} is not a PDF file",
                path.display()
            )));
        }

        let document = Document::load(path).map_err(|e| {
            Error::ExtractionError(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if document.is_encrypted() {
            return Err(Error::ExtractionError(format!(
                "{} is encrypted",
                path.display()
            )));
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        let mut extracted = ExtractedDocument::new(filename);

        // get_pages() is a BTreeMap, so iteration is already in page order.
        for &number in document.get_pages().keys() {
            match document.extract_text(&[number]) {
                Ok(text) if !text.trim().is_empty() => {
                    extracted.add_page(PageText::new(number as usize, text));
                }
                Ok(_) => {
                    extracted.add_page(PageText::absent(number as usize));
                }
                Err(e) => {
                    log::debug!("page {}: no extractable text ({})", number, e);
                    extracted.add_page(PageText::absent(number as usize));
                }
            }
        }

        Ok(extracted)
    }
}

/// Read up to the first [`MAGIC_WINDOW`] bytes of the file.
fn read_header(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| {
        Error::ExtractionError(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let mut header = Vec::with_capacity(MAGIC_WINDOW);
    file.take(MAGIC_WINDOW as u64)
        .read_to_end(&mut header)
        .map_err(|e| {
            Error::ExtractionError(format!("Failed to read {}: {}", path.display(), e))
        })?;

    Ok(header)
}

/// Whether the PDF magic appears in the header window.
fn has_pdf_magic(header: &[u8]) -> bool {
    header
        .windows(PDF_MAGIC.len())
        .any(|window| window == PDF_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::path::PathBuf;

    /// Build a PDF with one page per entry in `pages`.
    fn write_pdf(dir: &Path, name: &str, pages: &[&str]) -> PathBuf {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let path = dir.join(name);
        doc.save(&path).unwrap();
        path
    }

    #[test]
    fn test_extracts_per_page_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "two.pdf", &["First page text", "Second page text"]);

        let extracted = LopdfExtractor::new().extract(&path).unwrap();

        assert_eq!(extracted.filename, "two.pdf");
        assert_eq!(extracted.page_count(), 2);
        assert_eq!(extracted.pages_with_text(), 2);
        assert!(extracted.pages[0].text.as_ref().unwrap().contains("First page text"));
        assert!(extracted.pages[1].text.as_ref().unwrap().contains("Second page text"));
    }

    #[test]
    fn test_pages_are_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "ordered.pdf", &["alpha", "beta", "gamma"]);

        let extracted = LopdfExtractor::new().extract(&path).unwrap();
        let numbers: Vec<usize> = extracted.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_extracted_pages_normalize_to_flat_prose() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "prose.pdf", &["Hello world.", "Second page."]);

        let extracted = LopdfExtractor::new().extract(&path).unwrap();
        let normalized = pdfnlp_core::TextNormalizer::new().normalize_pages(&extracted.pages);

        assert_eq!(normalized, "Hello world. Second page.");
    }

    #[test]
    fn test_non_pdf_bytes_are_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "just some plain text").unwrap();

        let result = LopdfExtractor::new().extract(&path);
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_extraction_error() {
        let result = LopdfExtractor::new().extract(Path::new("no/such/file.pdf"));
        assert!(matches!(result, Err(Error::ExtractionError(_))));
    }

    #[test]
    fn test_garbage_after_magic_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.pdf");
        std::fs::write(&path, b"%PDF-1.5\nthis is not a real pdf body").unwrap();

        let result = LopdfExtractor::new().extract(&path);
        assert!(matches!(result, Err(Error::ExtractionError(_))));
    }

    #[test]
    fn test_magic_detection() {
        assert!(has_pdf_magic(b"%PDF-1.7\n"));
        assert!(has_pdf_magic(b"\xef\xbb\xbf%PDF-1.4"));
        assert!(!has_pdf_magic(b"PK\x03\x04"));
        assert!(!has_pdf_magic(b""));
    }
}
