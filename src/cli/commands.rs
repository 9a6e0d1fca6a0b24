// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands: `extract` runs the pipeline over one PDF,
// `fields` prints the fixed field table.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::extract_use_case::ExtractConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract tender fields from a PDF into a JSON file
    Extract(ExtractArgs),

    /// List the field identifiers and their questions
    Fields(FieldsArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Tender PDF to read
    #[arg(long, default_value = "test.pdf")]
    pub pdf: String,

    /// JSON file to write (overwritten)
    #[arg(long, default_value = "output2.json")]
    pub output: String,

    /// Directory holding model.onnx and tokenizer.json
    #[arg(long, env = "TENDER_QA_MODEL_DIR", default_value = "models/distilbert-squad")]
    pub model_dir: String,

    /// Maximum tokens per forward pass, question included
    #[arg(long, default_value_t = 384)]
    pub max_seq_len: usize,

    /// Longest answer span in tokens
    #[arg(long, default_value_t = 15)]
    pub max_answer_len: usize,

    /// Words per context window
    #[arg(long, default_value_t = 160)]
    pub window_words: usize,

    /// Words shared between neighbouring windows
    #[arg(long, default_value_t = 40)]
    pub window_overlap: usize,

    /// Answers scoring below this are stored as "Not found"
    #[arg(long, default_value_t = 0.0)]
    pub min_score: f32,

    /// ONNX Runtime intra-op threads
    #[arg(long, default_value_t = 1)]
    pub threads: usize,

    /// Plain-text log file, appended to on every run
    #[arg(long, default_value = "tender_extraction.log")]
    pub log_file: String,
}

/// The application layer never sees clap types.
impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            pdf_path:       a.pdf,
            output_path:    a.output,
            model_dir:      a.model_dir,
            max_seq_len:    a.max_seq_len,
            max_answer_len: a.max_answer_len,
            window_words:   a.window_words,
            window_overlap: a.window_overlap,
            min_score:      a.min_score,
            threads:        a.threads,
        }
    }
}

#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Print as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
