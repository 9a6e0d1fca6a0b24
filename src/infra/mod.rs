// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the other layers:
//
//   logging.rs      — console + plain-text log file via tracing
//
//   model_store.rs  — locates model.onnx and tokenizer.json
//
//   output_writer.rs — atomic, indented JSON output
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Process-wide tracing subscriber setup
pub mod logging;

/// Pretrained model file layout and tokenizer loading
pub mod model_store;

/// ExtractionResult → JSON file
pub mod output_writer;
