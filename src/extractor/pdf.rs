// file: src/extractor/pdf.rs
// description: pdf text extraction across all pages in page order
// reference: https://docs.rs/lopdf

use crate::error::{PipelineError, Result};
use crate::models::Document;
use lopdf::Document as PdfDocument;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text { text: String, pages: usize },
    /// The document parsed but holds no non-whitespace text.
    Empty { pages: usize },
}

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, document: &Document) -> Result<Extraction> {
        let pdf = PdfDocument::load_mem(&document.bytes)
            .map_err(|e| PipelineError::Extraction(e.to_string()))?;

        let pages = pdf.get_pages();
        let page_count = pages.len();
        let mut texts = Vec::with_capacity(page_count);
        let mut failed = 0usize;

        for page_number in pages.keys() {
            match pdf.extract_text(&[*page_number]) {
                Ok(text) => texts.push(text),
                Err(e) => {
                    failed += 1;
                    warn!("Skipping page {} of {}: {}", page_number, document.filename, e);
                }
            }
        }

        if page_count > 0 && failed == page_count {
            return Err(PipelineError::Extraction(format!(
                "no page of {} could be decoded",
                document.filename
            )));
        }

        let text = texts.join("\n");
        debug!(
            "Extracted {} characters from {} pages ({} skipped)",
            text.chars().count(),
            page_count,
            failed
        );

        if text.trim().is_empty() {
            return Ok(Extraction::Empty { pages: page_count });
        }

        Ok(Extraction::Text {
            text,
            pages: page_count,
        })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}
