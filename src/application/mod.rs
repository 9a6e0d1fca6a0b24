// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no PDF parsing, no tensors, no
// printing. The CLI layer calls in; the data, ml and infra
// layers do the work.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The end-to-end extraction workflow
pub mod extract_use_case;

// Per-field Q&A with sentinel fallback
pub mod field_extractor;
