// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Orchestrates one extraction run, in order:
//
//   Step 1: Load the PDF page by page     (Layer 4 - data)
//   Step 2: Normalise the text            (Layer 4 - data)
//   Step 3: Ask every field question      (Layer 2 + Layer 5)
//   Step 4: Save the JSON record          (Layer 6 - infra)
//
// The outcome separates "extracted" from "saved": a failed save
// still returns the ExtractionResult, with Persistence::Failed.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::application::field_extractor::FieldExtractor;
use crate::data::{loader::PdfLoader, normalizer::Normalizer};
use crate::domain::extraction_result::{ExtractionResult, NOT_FOUND};
use crate::domain::field_query::TENDER_FIELDS;
use crate::domain::traits::{DocumentSource, QuestionAnswerer};
use crate::infra::{model_store::ModelStore, output_writer::OutputWriter};
use crate::ml::inferencer::{InferenceSettings, OnnxQaModel};

// ─── Extraction Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub pdf_path:       String,
    pub output_path:    String,
    pub model_dir:      String,
    pub max_seq_len:    usize,
    pub max_answer_len: usize,
    pub window_words:   usize,
    pub window_overlap: usize,
    pub min_score:      f32,
    pub threads:        usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            pdf_path:       "test.pdf".to_string(),
            output_path:    "output2.json".to_string(),
            model_dir:      "models/distilbert-squad".to_string(),
            max_seq_len:    384,
            max_answer_len: 15,
            window_words:   160,
            window_overlap: 40,
            min_score:      0.0,
            threads:        1,
        }
    }
}

impl ExtractConfig {
    /// Reject settings that would panic or never produce an answer.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.window_words > 0, "window_words must be positive");
        ensure!(
            self.window_overlap < self.window_words,
            "window_overlap ({}) must be less than window_words ({})",
            self.window_overlap,
            self.window_words
        );
        ensure!(self.max_answer_len > 0, "max_answer_len must be positive");
        ensure!(self.max_seq_len >= 64, "max_seq_len must be at least 64");
        ensure!(self.threads > 0, "threads must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.min_score),
            "min_score must be within [0, 1]"
        );
        Ok(())
    }

    pub fn inference_settings(&self) -> InferenceSettings {
        InferenceSettings {
            max_seq_len:    self.max_seq_len,
            max_answer_len: self.max_answer_len,
            window_words:   self.window_words,
            window_overlap: self.window_overlap,
            threads:        self.threads,
        }
    }
}

// ─── Outcome ─────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Saved(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub result:      ExtractionResult,
    pub elapsed:     Duration,
    pub persistence: Persistence,
}

// ─── ExtractUseCase ──────────────────────────────────────────────────────────
pub struct ExtractUseCase<Q: QuestionAnswerer> {
    config: ExtractConfig,
    qa:     Q,
}

impl ExtractUseCase<OnnxQaModel> {
    /// Validate the config and load the ONNX model.
    pub fn new(config: ExtractConfig) -> Result<Self> {
        config.validate()?;

        tracing::info!("Loading QA model");
        let store = ModelStore::new(&config.model_dir);
        let qa = OnnxQaModel::load(&store, config.inference_settings())
            .context("Cannot load Q&A model")?;

        Ok(Self { config, qa })
    }
}

impl<Q: QuestionAnswerer> ExtractUseCase<Q> {
    /// Build the use case around an already constructed Q&A model.
    pub fn with_answerer(config: ExtractConfig, qa: Q) -> Self {
        Self { config, qa }
    }

    /// Run the pipeline once over the configured PDF.
    pub fn execute(&mut self) -> Result<ExtractionReport> {
        let loader = PdfLoader::new(&self.config.pdf_path);
        self.execute_from(&loader)
    }

    /// Run the pipeline once over any document source. Errors only
    /// when the document cannot be loaded; per-field and save
    /// failures are reported, not raised.
    pub fn execute_from<S: DocumentSource>(&mut self, source: &S) -> Result<ExtractionReport> {
        let started = Instant::now();
        tracing::info!("Starting tender extraction process");

        // ── Step 1: Load the document ────────────────────────────────────────
        let document = source.load().context("Error extracting text from PDF")?;
        tracing::info!(
            "Loaded '{}': {} of {} pages have text",
            document.source,
            document.pages_with_text(),
            document.pages.len()
        );

        // ── Step 2: Normalise ────────────────────────────────────────────────
        let context = Normalizer::new().normalize(&document.text());
        tracing::debug!("Normalised context: {} chars", context.len());

        // ── Step 3: Field extraction ─────────────────────────────────────────
        tracing::info!("Extracting tender information");
        let result = FieldExtractor::new(&mut self.qa, self.config.min_score)
            .extract(&context, &TENDER_FIELDS);
        tracing::info!(
            "Answered {} of {} fields",
            result.found_count(),
            result.len()
        );
        let missing: Vec<&str> = result
            .fields()
            .filter(|f| result.get(f) == Some(NOT_FOUND))
            .collect();
        if !missing.is_empty() {
            tracing::info!("No answer for: {}", missing.join(", "));
        }

        // ── Step 4: Save ─────────────────────────────────────────────────────
        let writer = OutputWriter::new(&self.config.output_path);
        let persistence = match writer.save(&result) {
            Ok(()) => Persistence::Saved(writer.path().to_path_buf()),
            Err(e) => {
                tracing::error!("Error saving output: {}", e);
                Persistence::Failed(e.to_string())
            }
        };

        Ok(ExtractionReport {
            result,
            elapsed: started.elapsed(),
            persistence,
        })
    }
}
