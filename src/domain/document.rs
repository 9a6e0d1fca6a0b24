// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A tender PDF after text extraction: the source path plus one
// entry per page, in page order. A page whose text could not be
// extracted (scanned image, broken content stream) keeps its slot
// with `text: None` so page numbering in logs stays truthful.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// One page of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number, as printed by PDF viewers
    pub number: u32,

    /// Extracted text with trailing whitespace removed,
    /// or None when the page produced nothing
    pub text: Option<String>,
}

impl Page {
    pub fn new(number: u32, text: Option<String>) -> Self {
        // Whitespace-only output counts as "no text"
        let text = text
            .map(|t| t.trim_end().to_string())
            .filter(|t| !t.trim().is_empty());
        Self { number, text }
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

/// A loaded PDF document. Transient — lives for one run only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The file path — kept for log messages
    pub source: String,

    /// Pages in document order
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(source: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            source: source.into(),
            pages,
        }
    }

    /// Concatenate the text of every non-empty page, each followed
    /// by a newline, in page order.
    ///
    /// Example: pages ["Tender A", None, "Fee Rs. 500"]
    ///   → "Tender A\nFee Rs. 500\n"
    pub fn text(&self) -> String {
        let mut out = String::new();
        for text in self.pages.iter().filter_map(|p| p.text.as_deref()) {
            out.push_str(text);
            out.push('\n');
        }
        out
    }

    /// Number of pages that contributed text
    pub fn pages_with_text(&self) -> usize {
        self.pages.iter().filter(|p| p.has_text()).count()
    }
}
