// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the PDF reader and the Q&A
// model only through these traits. Tests swap in scripted
// implementations; production wires up PdfLoader and
// OnnxQaModel.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::answer::QaAnswer;
use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce a paged Document.
///
/// Implementations:
///   - PdfLoader → reads a PDF file with lopdf
pub trait DocumentSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the document. Failure to open or parse is fatal to the run.
    fn load(&self) -> std::result::Result<Document, Self::Error>;
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// An extractive Q&A capability: (question, context) → span answer.
///
/// Implementations:
///   - OnnxQaModel → DistilBERT SQuAD export run with ONNX Runtime
///
/// Takes `&mut self` because an ONNX session needs exclusive access
/// while it runs.
pub trait QuestionAnswerer {
    fn answer(&mut self, question: &str, context: &str) -> Result<QaAnswer>;
}
