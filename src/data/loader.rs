// ============================================================
// Layer 4 — PDF Loader
// ============================================================
// Reads a PDF with lopdf and extracts text page by page.
//
// lopdf gives us the page tree as a BTreeMap of
// page number → object id, so iterating it yields pages in
// document order. Text is decoded per page with
// Document::extract_text, which walks the content stream's
// Tj/TJ operators through each font's encoding.
//
// Failure policy:
//   - file unreadable or not a PDF  → ExtractionError (fatal)
//   - one page fails to decode      → warning, page contributes nothing
//
// Reference: lopdf crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs,
    path::PathBuf,
};

use thiserror::Error;

use crate::domain::document::{Document, Page};
use crate::domain::traits::DocumentSource;

/// Fatal errors while opening a PDF.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("cannot read PDF '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse PDF '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },
}

/// Loads one PDF file from disk.
pub struct PdfLoader {
    path: PathBuf,
}

impl PdfLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for PdfLoader {
    type Error = ExtractionError;

    fn load(&self) -> Result<Document, ExtractionError> {
        let bytes = fs::read(&self.path).map_err(|source| ExtractionError::Read {
            path: self.path.clone(),
            source,
        })?;

        let pdf = lopdf::Document::load_mem(&bytes).map_err(|source| ExtractionError::Parse {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!("Processing PDF: {}", self.path.display());
        let pages = extract_pages(&pdf);

        let doc = Document::new(self.path.display().to_string(), pages);
        tracing::info!(
            "{} of {} pages contained text",
            doc.pages_with_text(),
            doc.pages.len()
        );
        Ok(doc)
    }
}

/// Extract every page's text in page order. A page that fails to
/// decode is kept as an empty page.
fn extract_pages(pdf: &lopdf::Document) -> Vec<Page> {
    let page_numbers: Vec<u32> = pdf.get_pages().keys().copied().collect();
    tracing::info!("Total pages: {}", page_numbers.len());

    page_numbers
        .into_iter()
        .map(|number| {
            let text = match pdf.extract_text(&[number]) {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!("No extractable text on page {}: {}", number, e);
                    None
                }
            };
            tracing::debug!("Extracted text from page {}", number);
            Page::new(number, text)
        })
        .collect()
}
