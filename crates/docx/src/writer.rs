//! DOCX writer implementation.
//!
//! Produces a minimal WordprocessingML package: content types, package
//! relationships, and one document part with a paragraph per text line.
//! The whole archive is staged in memory and written atomically.

use pdfnlp_core::writer::write_atomic;
use pdfnlp_core::{DocumentWriter, Error, PlainTextWriter, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

const WORDPROCESSINGML_NS: &str =
    "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Writer producing minimal DOCX files.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxWriter;

impl DocxWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for DocxWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let bytes = build_package(content)
            .map_err(|e| Error::WriteError(format!("{}: {}", path.display(), e)))?;
        log::debug!("writing {} byte DOCX package to {}", bytes.len(), path.display());
        write_atomic(path, &bytes)
    }
}

/// Pick an output writer by file extension: `.docx` gets the DOCX
/// writer, anything else plain text.
pub fn writer_for(path: &Path) -> Box<dyn DocumentWriter> {
    let is_docx = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"));

    if is_docx {
        Box::new(DocxWriter::new())
    } else {
        Box::new(PlainTextWriter::new())
    }
}

/// Assemble the DOCX ZIP package in memory.
fn build_package(content: &str) -> std::result::Result<Vec<u8>, String> {
    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();

    archive
        .start_file("[Content_Types].xml", options)
        .map_err(|e| e.to_string())?;
    archive
        .write_all(CONTENT_TYPES_XML.as_bytes())
        .map_err(|e| e.to_string())?;

    archive
        .start_file("_rels/.rels", options)
        .map_err(|e| e.to_string())?;
    archive
        .write_all(PACKAGE_RELS_XML.as_bytes())
        .map_err(|e| e.to_string())?;

    archive
        .start_file("word/document.xml", options)
        .map_err(|e| e.to_string())?;
    archive
        .write_all(&document_xml(content)?)
        .map_err(|e| e.to_string())?;

    let cursor = archive.finish().map_err(|e| e.to_string())?;
    Ok(cursor.into_inner())
}

/// Render the document part, one paragraph per line of `content`.
fn document_xml(content: &str) -> std::result::Result<Vec<u8>, String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let w = &mut writer;

    write(w, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut document = BytesStart::new("w:document");
    document.push_attribute(("xmlns:w", WORDPROCESSINGML_NS));
    write(w, Event::Start(document))?;
    write(w, Event::Start(BytesStart::new("w:body")))?;

    let mut lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        lines.push("");
    }
    for line in lines {
        write(w, Event::Start(BytesStart::new("w:p")))?;
        write(w, Event::Start(BytesStart::new("w:r")))?;

        let mut text = BytesStart::new("w:t");
        text.push_attribute(("xml:space", "preserve"));
        write(w, Event::Start(text))?;
        write(w, Event::Text(BytesText::new(line)))?;
        write(w, Event::End(BytesEnd::new("w:t")))?;

        write(w, Event::End(BytesEnd::new("w:r")))?;
        write(w, Event::End(BytesEnd::new("w:p")))?;
    }

    write(w, Event::End(BytesEnd::new("w:body")))?;
    write(w, Event::End(BytesEnd::new("w:document")))?;

    Ok(writer.into_inner().into_inner())
}

fn write(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    event: Event<'_>,
) -> std::result::Result<(), String> {
    writer.write_event(event).map_err(|e| e.to_string())
}
