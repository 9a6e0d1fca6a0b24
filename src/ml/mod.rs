// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All ONNX Runtime and tokenizer inference code lives here.
// No other layer imports `ort` directly.
//
//   span.rs       — start/end logits → best answer span
//                   (pure; tested without a model)
//
//   inferencer.rs — OnnxQaModel: loads the exported DistilBERT
//                   SQuAD model, windows long contexts, runs the
//                   forward pass and decodes the answer text
//
// Reference: Devlin et al. (2019) BERT
//            Sanh et al. (2019) DistilBERT

/// Best-span selection over start/end logits
pub mod span;

/// ONNX Runtime inference engine implementing QuestionAnswerer
pub mod inferencer;
