// ============================================================
// Layer 3 — QaAnswer Domain Type
// ============================================================
// The result of one extractive Q&A call. The model never writes
// new text; it points at a span of the context it was given:
//
//   Question: "What is the reference number in the tender?"
//   Context:  "reference no: abc/123 dated 16.10.2024"
//   Answer:   bytes 14..21 → "abc/123"
//
// Reference: Devlin et al. (2019) - BERT paper

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaAnswer {
    /// The answer text, always equal to `context[start..end]`
    pub text: String,

    /// Model confidence in [0, 1] (p_start · p_end)
    pub score: f32,

    /// Byte offset of the first answer character in the context
    pub start: usize,

    /// Byte offset one past the last answer character
    pub end: usize,
}

impl QaAnswer {
    pub fn new(text: impl Into<String>, score: f32, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            score,
            start,
            end,
        }
    }

    /// Build an answer by slicing the context. Returns None when the
    /// offsets are out of range or not on character boundaries.
    pub fn from_context(context: &str, start: usize, end: usize, score: f32) -> Option<Self> {
        let text = context.get(start..end)?;
        Some(Self::new(text, score, start, end))
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_context_slices_span() {
        let ctx = "reference no: abc/123 dated";
        let a = QaAnswer::from_context(ctx, 14, 21, 0.9).unwrap();
        assert_eq!(a.text, "abc/123");
        assert!(ctx.contains(&a.text));
    }

    #[test]
    fn test_from_context_rejects_bad_offsets() {
        assert!(QaAnswer::from_context("short", 2, 99, 0.5).is_none());
        // 'é' is two bytes; offset 1 splits it
        assert!(QaAnswer::from_context("é", 1, 2, 0.5).is_none());
    }

    #[test]
    fn test_whitespace_answer_is_empty() {
        assert!(QaAnswer::new("  ", 0.4, 0, 2).is_empty());
        assert!(!QaAnswer::new("rs. 500", 0.4, 0, 7).is_empty());
    }
}
