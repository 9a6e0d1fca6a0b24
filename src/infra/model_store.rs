// ============================================================
// Layer 6 — Model Store
// ============================================================
// Locates the pretrained Q&A model on disk.
//
// Expected layout (an ONNX export of
// distilbert-base-uncased-distilled-squad, e.g. produced by
// `optimum-cli export onnx --model distilbert-base-uncased-distilled-squad DIR`):
//
//   DIR/
//     model.onnx        ← graph + weights
//     tokenizer.json    ← matching WordPiece tokenizer
//
// Reference: Hugging Face tokenizers / optimum export layout

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

pub const MODEL_FILE: &str = "model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.dir.join(TOKENIZER_FILE)
    }

    /// Fail early, naming every missing file, before ONNX Runtime
    /// produces a less helpful error.
    pub fn verify(&self) -> Result<()> {
        let missing: Vec<String> = [self.model_path(), self.tokenizer_path()]
            .iter()
            .filter(|p| !p.is_file())
            .map(|p| p.display().to_string())
            .collect();

        if !missing.is_empty() {
            bail!(
                "Q&A model files not found: {}. Export distilbert-base-uncased-distilled-squad \
                 to ONNX into '{}' or pass --model-dir",
                missing.join(", "),
                self.dir.display()
            );
        }
        Ok(())
    }

    /// Load the tokenizer saved next to the model
    pub fn load_tokenizer(&self) -> Result<Tokenizer> {
        let path = self.tokenizer_path();
        Tokenizer::from_file(&path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })
    }
}
