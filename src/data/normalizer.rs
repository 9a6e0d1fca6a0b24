// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Turns raw page text into the flat context string the Q&A
// model reads.
//
// Steps (applied in order):
//   1. Collapse runs of blank lines into a single newline
//   2. Lowercase everything
//   3. Split on whitespace
//   4. Drop stop-words
//   5. Rejoin with single spaces and trim
//
// Page boundaries and stop-words are lost; the transformation is
// not reversible. Running it twice gives the same text as running
// it once.

use crate::data::stopwords::is_stop_word;

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, text: &str) -> String {
        // ── Step 1: collapse blank lines ─────────────────────────────────────
        let mut collapsed = String::with_capacity(text.len());
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            if !collapsed.is_empty() {
                collapsed.push('\n');
            }
            collapsed.push_str(line);
        }

        // ── Steps 2-5: lowercase, tokenise, filter, rejoin ───────────────────
        let lowered = collapsed.to_lowercase();
        let kept: Vec<&str> = lowered
            .split_whitespace()
            .filter(|w| !is_stop_word(w))
            .collect();

        kept.join(" ").trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_stop_words() {
        let n = Normalizer::new();
        assert_eq!(
            n.normalize("The Tender Fee is Rs. 500"),
            "tender fee rs. 500"
        );
    }

    #[test]
    fn test_blank_lines_and_spacing_collapse() {
        let n = Normalizer::new();
        let raw = "Reference No: ABC/123\n\n\n   \nDated   16.10.2024\n";
        assert_eq!(n.normalize(raw), "reference no: abc/123 dated 16.10.2024");
    }

    #[test]
    fn test_supplement_words_removed() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("bids could already get rejected"), "bids rejected");
    }

    #[test]
    fn test_is_idempotent() {
        let n = Normalizer::new();
        let raw = "NIT No. NITJ/DRC/PUR/TT/36/2024\n\nThe EMD of Rs. 90,000/- MAY be\n\
                   exempted for MSME bidders. Bids should be submitted online.";
        let once = n.normalize(raw);
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn test_empty_and_stop_word_only_input() {
        let n = Normalizer::new();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("The and of\n\nto"), "");
    }
}
