// src/readers/mod.rs
pub mod docx;

use crate::utils::error::ReadError;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Document formats the batch driver knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// Source of raw resume text.
pub trait TextReader {
    fn read_text(&self, path: &Path, format: DocumentFormat) -> Result<String, ReadError>;
}

/// Reads PDF, DOCX and UTF-8 text files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTextReader;

impl TextReader for FileTextReader {
    fn read_text(&self, path: &Path, format: DocumentFormat) -> Result<String, ReadError> {
        let io_err = |source| ReadError::Io { path: path.to_path_buf(), source };

        let text = match format {
            DocumentFormat::Pdf => {
                let bytes = fs::read(path).map_err(io_err)?;
                pdf_extract::extract_text_from_mem(&bytes)
                    .map_err(|e| ReadError::Pdf(path.to_path_buf(), e.to_string()))?
            }
            DocumentFormat::Docx => {
                let file = fs::File::open(path).map_err(io_err)?;
                docx::extract_docx_text(std::io::BufReader::new(file), path)?
            }
            DocumentFormat::PlainText => {
                let bytes = fs::read(path).map_err(io_err)?;
                String::from_utf8(bytes).map_err(|_| ReadError::Encoding(path.to_path_buf()))?
            }
        };

        // An empty document is as useless as a failed read
        if text.trim().is_empty() {
            return Err(ReadError::EmptyText(path.to_path_buf()));
        }

        tracing::debug!("Read {} characters from {}", text.chars().count(), path.display());
        Ok(text)
    }
}

/// Lists eligible resume files directly inside `dir`, ordered by file name.
pub fn scan_input_dir(dir: &Path) -> Result<Vec<(PathBuf, DocumentFormat)>, ReadError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| ReadError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        match DocumentFormat::from_path(entry.path()) {
            Some(format) => files.push((entry.into_path(), format)),
            None => tracing::trace!("Skipping unrecognized file: {}", entry.path().display()),
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/cv.PDF")), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_path(Path::new("cv.docx")), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_path(Path::new("cv.txt")), Some(DocumentFormat::PlainText));
        assert_eq!(DocumentFormat::from_path(Path::new("cv.doc")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_scan_input_dir_filters_and_sorts() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["b.txt", "a.pdf", "notes.md", "c.docx"] {
            fs::write(dir.path().join(name), "x").expect("write fixture");
        }
        fs::create_dir(dir.path().join("nested.txt")).expect("mkdir");

        let found = scan_input_dir(dir.path()).expect("scan");
        let names: Vec<String> = found
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.txt", "c.docx"]);
    }

    #[test]
    fn test_scan_input_dir_without_resumes_is_empty() {
        let empty = tempfile::tempdir().expect("tempdir");
        assert!(scan_input_dir(empty.path()).expect("scan").is_empty());

        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("notes.md"), "x").expect("write fixture");
        fs::write(dir.path().join("photo.PNG"), "x").expect("write fixture");
        fs::create_dir(dir.path().join("archive")).expect("mkdir");
        fs::write(dir.path().join("archive").join("old.pdf"), "x").expect("write fixture");
        assert!(scan_input_dir(dir.path()).expect("scan").is_empty());
    }

    #[test]
    fn test_read_plain_text_and_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("cv.txt");
        fs::write(&good, "Jane Doe\nPython").expect("write fixture");
        let text = FileTextReader.read_text(&good, DocumentFormat::PlainText).expect("read");
        assert_eq!(text, "Jane Doe\nPython");

        let blank = dir.path().join("blank.txt");
        fs::write(&blank, "  \n ").expect("write fixture");
        assert!(matches!(
            FileTextReader.read_text(&blank, DocumentFormat::PlainText),
            Err(ReadError::EmptyText(_))
        ));

        let binary = dir.path().join("bin.txt");
        fs::write(&binary, [0xff, 0xfe, 0x00]).expect("write fixture");
        assert!(matches!(
            FileTextReader.read_text(&binary, DocumentFormat::PlainText),
            Err(ReadError::Encoding(_))
        ));
    }

    #[test]
    fn test_read_docx_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cv.docx");
        fs::write(&path, docx::tests::docx_bytes("<w:p><w:r><w:t>Grace Hopper</w:t></w:r></w:p>"))
            .expect("write fixture");
        let text = FileTextReader.read_text(&path, DocumentFormat::Docx).expect("read docx");
        assert_eq!(text, "Grace Hopper");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileTextReader.read_text(Path::new("/nonexistent/cv.pdf"), DocumentFormat::Pdf);
        assert!(matches!(err, Err(ReadError::Io { .. })));
    }
}
