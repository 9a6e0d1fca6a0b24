// ============================================================
// Layer 5 — Answer Span Decoder
// ============================================================
// Turns the model's start/end logits into the single best answer
// span, the same way the standard Hugging Face Q&A pipeline does:
//
//   1. Only context tokens may start or end an answer
//      (question tokens, [CLS], [SEP] and padding are masked out)
//   2. Softmax start and end logits over the context tokens
//   3. score(s, e) = p_start[s] · p_end[e]
//      with s <= e and e - s + 1 <= max_answer_len
//   4. Highest score wins; ties go to the earliest span
//
// Pure function over slices, so it is tested without a model.

/// Token indices of an answer span (inclusive) and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub score: f32,
}

/// Softmax over the positions where `mask` is true; masked
/// positions get probability 0.
fn masked_softmax(logits: &[f32], mask: &[bool]) -> Vec<f32> {
    let max = logits
        .iter()
        .zip(mask)
        .filter(|(_, m)| **m)
        .map(|(&l, _)| l)
        .fold(f32::NEG_INFINITY, f32::max);

    let exps: Vec<f32> = logits
        .iter()
        .zip(mask)
        .map(|(&l, &m)| if m { (l - max).exp() } else { 0.0 })
        .collect();

    let sum: f32 = exps.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        return vec![0.0; logits.len()];
    }
    exps.into_iter().map(|e| e / sum).collect()
}

/// Pick the best answer span. Returns None when no context token
/// exists or the inputs disagree in length.
pub fn best_span(
    start_logits:   &[f32],
    end_logits:     &[f32],
    context_mask:   &[bool],
    max_answer_len: usize,
) -> Option<Span> {
    let n = context_mask.len();
    if start_logits.len() != n || end_logits.len() != n || max_answer_len == 0 {
        return None;
    }
    if !context_mask.iter().any(|&m| m) {
        return None;
    }

    let p_start = masked_softmax(start_logits, context_mask);
    let p_end = masked_softmax(end_logits, context_mask);

    let mut best: Option<Span> = None;
    for s in (0..n).filter(|&s| context_mask[s]) {
        for e in s..(s + max_answer_len).min(n) {
            if !context_mask[e] {
                continue;
            }
            let score = p_start[s] * p_end[e];
            if best.map_or(true, |b| score > b.score) {
                best = Some(Span { start: s, end: e, score });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_peak_start_and_end() {
        // [CLS] q [SEP] c0 c1 c2 [SEP]
        let mask = [false, false, false, true, true, true, false];
        let start = [0.0, 0.0, 0.0, 1.0, 8.0, 1.0, 0.0];
        let end = [0.0, 0.0, 0.0, 1.0, 1.0, 8.0, 0.0];
        let span = best_span(&start, &end, &mask, 15).unwrap();
        assert_eq!((span.start, span.end), (4, 5));
        assert!(span.score > 0.5 && span.score <= 1.0);
    }

    #[test]
    fn test_never_selects_question_tokens() {
        let mask = [false, false, true, true];
        // Huge logits on the question side must be ignored
        let start = [50.0, 50.0, 0.0, 0.0];
        let end = [50.0, 50.0, 0.0, 0.0];
        let span = best_span(&start, &end, &mask, 15).unwrap();
        assert!(mask[span.start] && mask[span.end]);
    }

    #[test]
    fn test_end_never_before_start() {
        let mask = [true, true, true];
        let start = [0.0, 0.0, 9.0];
        let end = [9.0, 0.0, 0.0];
        let span = best_span(&start, &end, &mask, 15).unwrap();
        assert!(span.end >= span.start);
    }

    #[test]
    fn test_respects_max_answer_len() {
        let mask = [true; 10];
        let mut start = [0.0; 10];
        let mut end = [0.0; 10];
        start[0] = 10.0;
        end[9] = 10.0;
        let span = best_span(&start, &end, &mask, 3).unwrap();
        assert!(span.end - span.start + 1 <= 3);
    }

    #[test]
    fn test_no_context_gives_none() {
        assert!(best_span(&[1.0, 2.0], &[1.0, 2.0], &[false, false], 15).is_none());
        assert!(best_span(&[], &[], &[], 15).is_none());
    }

    #[test]
    fn test_length_mismatch_gives_none() {
        assert!(best_span(&[1.0], &[1.0, 2.0], &[true, true], 15).is_none());
    }
}
