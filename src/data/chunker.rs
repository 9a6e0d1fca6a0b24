// ============================================================
// Layer 4 — Context Chunker
// ============================================================
// Splits a long context into overlapping windows of words.
//
// DistilBERT reads at most max_seq_len tokens (question included),
// while a tender runs to thousands of words. Each window is
// answered separately and the best-scoring span wins. Overlap
// keeps an answer that straddles a boundary whole in at least
// one window.
//
// Example with window=5, overlap=2 (stride 3):
//   Text:     "A B C D E F G H I J"
//   Window 1: "A B C D E"
//   Window 2: "D E F G H"
//   Window 3: "G H I J"
//
// Windows are borrowed slices of the input, so any span found
// inside a window is also a substring of the full context.

pub struct Chunker {
    /// Target number of words per window
    window: usize,
    /// Number of words shared between adjacent windows
    overlap: usize,
}

impl Chunker {
    /// # Panics
    /// Panics if overlap >= window, which would give a stride of 0
    pub fn new(window: usize, overlap: usize) -> Self {
        assert!(
            overlap < window,
            "overlap ({}) must be less than window ({})",
            overlap,
            window
        );
        Self { window, overlap }
    }

    /// Split text into overlapping word windows.
    /// Each window is returned with its byte offset into `text`.
    pub fn chunk<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        let words = word_spans(text);
        if words.is_empty() {
            return Vec::new();
        }

        let stride = self.window - self.overlap;
        let mut chunks = Vec::new();
        let mut start = 0usize;

        loop {
            let end = (start + self.window).min(words.len());
            let from = words[start].0;
            let to = words[end - 1].1;
            chunks.push((from, &text[from..to]));

            if end == words.len() {
                break;
            }
            start += stride;
        }

        chunks
    }
}

/// Byte ranges of each whitespace-separated word.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), word_start) {
            (true, Some(s)) => {
                spans.push((s, i));
                word_start = None;
            }
            (false, None) => word_start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = word_start {
        spans.push((s, text.len()));
    }
    spans
}
