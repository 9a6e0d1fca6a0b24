// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits describing what the pipeline
// works with: pages of a tender, the fixed field questions,
// the answers a Q&A model hands back, and the final record.
//
// Rules for this layer:
//   - NO ONNX Runtime, tokenizer or PDF parser types here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A PDF turned into ordered page texts
pub mod document;

// The fixed (field, question) table
pub mod field_query;

// A span answer returned by an extractive Q&A model
pub mod answer;

// The field → answer record written to disk
pub mod extraction_result;

// Core abstractions (traits) that other layers implement
pub mod traits;
