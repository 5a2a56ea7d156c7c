// file: src/utils/validation.rs
// description: input validation for uploaded documents
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::fs;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            PipelineError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_pdf_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Ok(()),
            _ => Err(PipelineError::Validation(format!(
                "File is not a PDF file: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_file_size(size: usize, max_file_size_mb: usize) -> Result<()> {
        let max_bytes = max_file_size_mb.saturating_mul(1_048_576);
        if max_bytes > 0 && size > max_bytes {
            return Err(PipelineError::Validation(format!(
                "File too large ({} bytes, limit {} MB)",
                size, max_file_size_mb
            )));
        }
        Ok(())
    }

    /// Cheap header check; the parser still has the final say.
    pub fn looks_like_pdf(bytes: &[u8]) -> bool {
        bytes
            .windows(PDF_MAGIC.len())
            .take(1024)
            .any(|w| w == PDF_MAGIC)
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("book.pdf");
        fs::write(&file_path, "%PDF-1.5").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_pdf_extension() {
        assert!(Validator::validate_pdf_extension(Path::new("book.pdf")).is_ok());
        assert!(Validator::validate_pdf_extension(Path::new("BOOK.PDF")).is_ok());
        assert!(Validator::validate_pdf_extension(Path::new("book.txt")).is_err());
        assert!(Validator::validate_pdf_extension(Path::new("book")).is_err());
    }

    #[test]
    fn test_validate_file_size() {
        assert!(Validator::validate_file_size(1024, 1).is_ok());
        assert!(Validator::validate_file_size(2 * 1_048_576, 1).is_err());
        assert!(Validator::validate_file_size(usize::MAX, 0).is_ok());
    }

    #[test]
    fn test_looks_like_pdf() {
        assert!(Validator::looks_like_pdf(b"%PDF-1.7\n..."));
        assert!(Validator::looks_like_pdf(b"\xEF\xBB\xBF%PDF-1.4"));
        assert!(!Validator::looks_like_pdf(b"PK\x03\x04"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(Validator::truncate_text("Straßenbahnen", 6), "Straße...");
    }
}
