// ============================================================
// Layer 5 — ONNX Q&A Inferencer
// ============================================================
// Runs a DistilBERT SQuAD model exported to ONNX through ONNX
// Runtime, answering one question over a (possibly long) context.
//
// Per window:
//   [CLS] question [SEP] window [SEP]   → tokenizer (pair encoding)
//   encoding + overflowing pieces       → one forward pass each
//   start_logits, end_logits            → span::best_span
//   token offsets                       → byte span in the window
//
// A window longer than max_seq_len tokens is not cut: the tokenizer
// splits it into overlapping pieces (doc stride) and every piece
// is scored. The best span over all windows is returned. Because
// the text is sliced from the context through the tokenizer's
// offsets, the answer is always a substring of the context.

use anyhow::{anyhow, bail, Result};
use ort::{
    inputs,
    session::{builder::GraphOptimizationLevel, Session},
    value::Value,
};
use tokenizers::{Encoding, Tokenizer, TruncationParams, TruncationStrategy};

use crate::data::chunker::Chunker;
use crate::domain::answer::QaAnswer;
use crate::domain::traits::QuestionAnswerer;
use crate::infra::model_store::ModelStore;
use crate::ml::span::{best_span, Span};

/// Inference knobs, filled from ExtractConfig.
#[derive(Debug, Clone, Copy)]
pub struct InferenceSettings {
    /// Maximum tokens per forward pass, question included
    pub max_seq_len: usize,
    /// Longest answer span in tokens
    pub max_answer_len: usize,
    /// Words per context window
    pub window_words: usize,
    /// Words shared between neighbouring windows
    pub window_overlap: usize,
    /// ONNX Runtime intra-op threads
    pub threads: usize,
}

pub struct OnnxQaModel {
    session:        Session,
    tokenizer:      Tokenizer,
    chunker:        Chunker,
    max_answer_len: usize,
}

impl OnnxQaModel {
    pub fn load(store: &ModelStore, settings: InferenceSettings) -> Result<Self> {
        store.verify()?;

        let mut tokenizer = store.load_tokenizer()?;
        configure_tokenizer(&mut tokenizer, settings.max_seq_len)?;

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(settings.threads)?
            .commit_from_file(store.model_path())?;

        tracing::info!("Q&A model loaded from '{}'", store.dir().display());

        Ok(Self {
            session,
            tokenizer,
            chunker: Chunker::new(settings.window_words, settings.window_overlap),
            max_answer_len: settings.max_answer_len,
        })
    }

    /// Answer over one window. Offsets in the result are relative
    /// to the window.
    fn predict_window(&mut self, question: &str, window: &str) -> Result<Option<QaAnswer>> {
        let encoding = self
            .tokenizer
            .encode((question, window), true)
            .map_err(|e| anyhow!("Tokenise: {e}"))?;

        let pieces = encoding_pieces(&encoding);
        let covered = covered_end(&pieces);
        if covered < window.len() {
            tracing::warn!(
                "Window truncated: only {} of {} bytes reached the model",
                covered,
                window.len()
            );
        }
        tracing::debug!("Window of {} bytes in {} piece(s)", window.len(), pieces.len());

        let mut best: Option<QaAnswer> = None;
        for piece in pieces {
            let (start_logits, end_logits) = self.logits(piece)?;
            let context_mask = context_mask(piece);

            let Some(span) =
                best_span(&start_logits, &end_logits, &context_mask, self.max_answer_len)
            else {
                continue;
            };
            let Some(found) = span_answer(piece, window, span) else {
                continue;
            };

            tracing::debug!(
                "Span [{},{}] conf={:.4} bytes {}..{}",
                span.start, span.end, span.score, found.start, found.end
            );
            if best.as_ref().map_or(true, |b| found.score > b.score) {
                best = Some(found);
            }
        }

        Ok(best)
    }

    /// One forward pass; returns (start_logits, end_logits).
    fn logits(&mut self, piece: &Encoding) -> Result<(Vec<f32>, Vec<f32>)> {
        let ids: Vec<i64> = piece.get_ids().iter().map(|&x| x as i64).collect();
        let mask: Vec<i64> = piece.get_attention_mask().iter().map(|&x| x as i64).collect();
        let seq_len = ids.len();

        let input_ids = Value::from_array(([1_usize, seq_len], ids.into_boxed_slice()))?;
        let attention_mask = Value::from_array(([1_usize, seq_len], mask.into_boxed_slice()))?;

        let outputs = self.session.run(inputs![
            "input_ids" => input_ids,
            "attention_mask" => attention_mask
        ])?;

        // SQuAD exports emit start_logits then end_logits, each [1, seq_len]
        let (_, start_data) = outputs[0].try_extract_tensor::<f32>()?;
        let start_logits = start_data.to_vec();
        let (_, end_data) = outputs[1].try_extract_tensor::<f32>()?;
        let end_logits = end_data.to_vec();

        Ok((start_logits, end_logits))
    }
}

impl QuestionAnswerer for OnnxQaModel {
    fn answer(&mut self, question: &str, context: &str) -> Result<QaAnswer> {
        let windows = self.chunker.chunk(context);
        if windows.is_empty() {
            bail!("empty context");
        }

        let mut per_window = Vec::with_capacity(windows.len());
        for (offset, window) in windows {
            per_window.push((offset, self.predict_window(question, window)?));
        }

        merge_windows(context, per_window)
    }
}

/// Context-side truncation at `max_seq_len` with a quarter of the
/// budget repeated between overflow pieces.
pub(crate) fn configure_tokenizer(tokenizer: &mut Tokenizer, max_seq_len: usize) -> Result<()> {
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_seq_len,
            strategy: TruncationStrategy::OnlySecond,
            stride: max_seq_len / 4,
            ..Default::default()
        }))
        .map_err(|e| anyhow!("Cannot configure truncation: {e}"))?;
    tokenizer.with_padding(None);
    Ok(())
}

/// The encoding itself followed by its overflowing pieces.
fn encoding_pieces(encoding: &Encoding) -> Vec<&Encoding> {
    std::iter::once(encoding)
        .chain(encoding.get_overflowing().iter())
        .collect()
}

fn context_mask(piece: &Encoding) -> Vec<bool> {
    piece
        .get_sequence_ids()
        .iter()
        .map(|sid| *sid == Some(1))
        .collect()
}

/// Furthest window byte reached by any context token of any piece.
fn covered_end(pieces: &[&Encoding]) -> usize {
    pieces
        .iter()
        .flat_map(|piece| {
            piece
                .get_sequence_ids()
                .into_iter()
                .zip(piece.get_offsets())
                .filter(|(sid, _)| *sid == Some(1))
                .map(|(_, &(_, end))| end)
        })
        .max()
        .unwrap_or(0)
}

/// Turn token indices into the window text they cover.
fn span_answer(piece: &Encoding, window: &str, span: Span) -> Option<QaAnswer> {
    let offsets = piece.get_offsets();
    let (byte_start, _) = *offsets.get(span.start)?;
    let (_, byte_end) = *offsets.get(span.end)?;
    QaAnswer::from_context(window, byte_start, byte_end, span.score)
}

/// Keep the best answer across windows, shifting its window-relative
/// offsets by the window's byte offset in `context`. The text is
/// re-sliced from the context after the shift.
pub(crate) fn merge_windows(
    context: &str,
    per_window: impl IntoIterator<Item = (usize, Option<QaAnswer>)>,
) -> Result<QaAnswer> {
    let mut best: Option<QaAnswer> = None;
    for (offset, found) in per_window {
        let Some(found) = found else {
            continue;
        };
        if best.as_ref().map_or(false, |b| found.score <= b.score) {
            continue;
        }
        match QaAnswer::from_context(context, found.start + offset, found.end + offset, found.score) {
            Some(shifted) => best = Some(shifted),
            None => tracing::warn!(
                "Discarding span {}..{} outside the context",
                found.start + offset,
                found.end + offset
            ),
        }
    }

    best.ok_or_else(|| anyhow!("no answer span in context"))
}
