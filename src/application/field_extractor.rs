// ============================================================
// Layer 2 — Field Extractor
// ============================================================
// Asks the Q&A model every field question against the normalised
// tender text and fills an ExtractionResult.
//
// A field that fails (model error, empty span, score under the
// threshold) is logged as a warning and left at NOT_FOUND. One bad
// field never stops the others.

use crate::domain::extraction_result::ExtractionResult;
use crate::domain::field_query::FieldQuery;
use crate::domain::traits::QuestionAnswerer;

pub struct FieldExtractor<'a, Q: QuestionAnswerer> {
    qa:        &'a mut Q,
    min_score: f32,
}

impl<'a, Q: QuestionAnswerer> FieldExtractor<'a, Q> {
    pub fn new(qa: &'a mut Q, min_score: f32) -> Self {
        Self { qa, min_score }
    }

    pub fn extract(&mut self, context: &str, queries: &[FieldQuery]) -> ExtractionResult {
        let mut result = ExtractionResult::with_fields(queries);

        for query in queries {
            match self.qa.answer(query.question, context) {
                Ok(answer) if answer.is_empty() => {
                    tracing::warn!("Could not extract {}: empty answer span", query.field);
                }
                Ok(answer) if answer.score < self.min_score => {
                    tracing::warn!(
                        "Could not extract {}: score {:.4} below {:.4}",
                        query.field,
                        answer.score,
                        self.min_score
                    );
                }
                Ok(answer) => {
                    tracing::info!("Extracted {}: {}", query.field, answer.text);
                    result.set(query.field, answer.text);
                }
                Err(e) => {
                    tracing::warn!("Could not extract {}: {:#}", query.field, e);
                }
            }
        }

        result
    }
}
