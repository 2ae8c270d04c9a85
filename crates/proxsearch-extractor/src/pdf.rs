//! PDF text extraction backed by lopdf

use crate::error::ExtractorError;
use lopdf::Document;
use proxsearch_domain::TextExtractor;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Largest PDF accepted for extraction (64 MiB)
pub const PDF_MAX_BYTES: u64 = 64 * 1024 * 1024;

/// Most pages accepted for extraction
pub const PDF_MAX_PAGES: usize = 4_096;

/// Extracts page text from PDF files
///
/// Each page's text has every whitespace run collapsed to one space and is
/// trimmed; pages are joined with a single space. Layout is not recovered.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    max_bytes: u64,
    max_pages: usize,
}

impl PdfExtractor {
    /// Create an extractor with the default size limits
    pub fn new() -> Self {
        Self {
            max_bytes: PDF_MAX_BYTES,
            max_pages: PDF_MAX_PAGES,
        }
    }

    /// Override the size limits
    pub fn with_limits(mut self, max_bytes: u64, max_pages: usize) -> Self {
        self.max_bytes = max_bytes;
        self.max_pages = max_pages;
        self
    }

    fn extract(&self, path: &Path) -> Result<String, String> {
        let size = fs::metadata(path)
            .map_err(|e| format!("cannot read file: {}", e))?
            .len();
        if size > self.max_bytes {
            return Err(format!(
                "PDF too large: {} bytes exceeds limit of {} bytes",
                size, self.max_bytes
            ));
        }

        let bytes = fs::read(path).map_err(|e| format!("cannot read file: {}", e))?;
        let mut document =
            Document::load_mem(&bytes).map_err(|e| format!("failed to load PDF: {}", e))?;

        // Empty password opens PDFs that are encrypted without a user password
        if document.is_encrypted() && document.decrypt("").is_err() {
            return Err("cannot decrypt password-protected PDF".to_string());
        }

        let () = document.decompress();

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        if page_numbers.len() > self.max_pages {
            return Err(format!(
                "PDF has too many pages: {} exceeds limit of {}",
                page_numbers.len(),
                self.max_pages
            ));
        }

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page in &page_numbers {
            let raw = document
                .extract_text(&[*page])
                .map_err(|e| format!("failed to extract text from page {}: {}", page, e))?;
            let cleaned = collapse_whitespace(&raw);
            if !cleaned.is_empty() {
                pages.push(cleaned);
            }
        }

        debug!(
            "Extracted {} of {} pages from {}",
            pages.len(),
            page_numbers.len(),
            path.display()
        );

        Ok(pages.join(" "))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    type Error = ExtractorError;

    fn extract_text(&self, path: &Path) -> Result<String, Self::Error> {
        self.extract(path).map_err(|reason| ExtractorError::Extraction {
            path: path.display().to_string(),
            reason,
        })
    }
}

/// Replace every whitespace run with a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
