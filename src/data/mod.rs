// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the PDF on disk and the context string the
// Q&A model reads:
//
//   tender.pdf
//       │
//       ▼
//   PdfLoader    → per-page text via lopdf
//       │
//       ▼
//   Normalizer   → lowercase, blank lines collapsed, stop-words gone
//       │
//       ▼
//   Chunker      → overlapping word windows sized for the model
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads a PDF file page by page
pub mod loader;

/// Cleans raw page text into model context
pub mod normalizer;

/// English stop-word set used by the normalizer
pub mod stopwords;

/// Splits long contexts into overlapping windows
pub mod chunker;
