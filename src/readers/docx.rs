// src/readers/docx.rs
use crate::utils::error::ReadError;
use std::io::{Read, Seek};
use std::path::Path;

const DOCUMENT_PART: &str = "word/document.xml";

/// Pulls paragraph text out of a .docx container, one line per `w:p`.
pub fn extract_docx_text<R: Read + Seek>(reader: R, path: &Path) -> Result<String, ReadError> {
    let docx_err = |msg: String| ReadError::Docx(path.to_path_buf(), msg);

    let mut archive = zip::ZipArchive::new(reader).map_err(|e| docx_err(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| docx_err(format!("missing {}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| docx_err(e.to_string()))?;

    let document = roxmltree::Document::parse(&xml).map_err(|e| docx_err(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for paragraph in document.descendants().filter(|n| n.is_element() && n.tag_name().name() == "p") {
        let mut line = String::new();
        for node in paragraph.descendants() {
            match node.tag_name().name() {
                "t" => line.push_str(node.text().unwrap_or_default()),
                "tab" => line.push('\t'),
                "br" | "cr" => line.push('\n'),
                _ => {}
            }
        }
        paragraphs.push(line);
    }

    tracing::trace!("DOCX {} yielded {} paragraphs", path.display(), paragraphs.len());
    Ok(paragraphs.join("\n"))
}
