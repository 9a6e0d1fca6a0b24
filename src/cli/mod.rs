// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, routes to the use case, and turns
// the outcome into a console message and exit code. Only
// `extract` sets up logging; `fields` just prints.
//
//
//   0 — fields extracted and saved
//   1 — extraction failed (unreadable PDF, missing model, ...)
//   2 — fields extracted but the JSON file could not be written

pub mod commands;

use clap::Parser;
use commands::{Commands, ExtractArgs, FieldsArgs};
use std::{path::Path, process::ExitCode};

use crate::application::extract_use_case::{ExtractConfig, ExtractUseCase, Persistence};
use crate::domain::field_query::TENDER_FIELDS;
use crate::infra::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "tender-qa",
    version,
    about = "Extract reference numbers, dates, fees and terms from tender PDFs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> ExitCode {
        match self.command {
            Commands::Extract(args) => {
                let log_file = args.log_file.clone();
                if let Err(e) = init_logging(Path::new(&log_file)) {
                    eprintln!("Cannot initialise logging: {e:#}");
                    return ExitCode::FAILURE;
                }
                run_extract(args, &log_file)
            }
            Commands::Fields(args) => run_fields(args),
        }
    }
}

fn run_extract(args: ExtractArgs, log_file: &str) -> ExitCode {
    let config: ExtractConfig = args.into();
    let outcome = ExtractUseCase::new(config).and_then(|mut use_case| use_case.execute());

    match outcome {
        Ok(report) => {
            let secs = report.elapsed.as_secs_f64();
            tracing::info!("Extraction complete! Time taken: {:.2} seconds", secs);
            match report.persistence {
                Persistence::Saved(path) => {
                    println!(
                        "Extraction complete! Time taken: {:.2} seconds. Results saved in '{}'.",
                        secs,
                        path.display()
                    );
                    ExitCode::SUCCESS
                }
                Persistence::Failed(reason) => {
                    println!(
                        "Extraction complete in {:.2} seconds, but results could not be saved: {}",
                        secs, reason
                    );
                    ExitCode::from(2)
                }
            }
        }
        Err(e) => {
            tracing::error!("Extraction failed: {:#}", e);
            println!("Extraction failed. Check '{}' for details.", log_file);
            ExitCode::FAILURE
        }
    }
}

fn run_fields(args: FieldsArgs) -> ExitCode {
    if args.json {
        match serde_json::to_string_pretty(&TENDER_FIELDS) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Cannot serialise field table: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let width = TENDER_FIELDS.iter().map(|q| q.field.len()).max().unwrap_or(0);
        for q in &TENDER_FIELDS {
            println!("{:<width$}  {}", q.field, q.question, width = width);
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::try_parse_from(["tender-qa", "extract"]).unwrap();
        let Commands::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.log_file, "tender_extraction.log");
        let config: ExtractConfig = args.into();
        assert_eq!(config.pdf_path, "test.pdf");
        assert_eq!(config.output_path, "output2.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extract_flags_reach_config() {
        let cli = Cli::try_parse_from([
            "tender-qa", "extract", "--pdf", "nit.pdf", "--output", "out.json",
            "--model-dir", "m", "--min-score", "0.2", "--log-file", "run.log",
        ])
        .unwrap();
        let Commands::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.log_file, "run.log");
        let config: ExtractConfig = args.into();
        assert_eq!(config.pdf_path, "nit.pdf");
        assert_eq!(config.output_path, "out.json");
        assert_eq!(config.model_dir, "m");
        assert!((config.min_score - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fields_takes_no_log_file() {
        assert!(Cli::try_parse_from(["tender-qa", "fields", "--json"]).is_ok());
        assert!(Cli::try_parse_from(["tender-qa", "fields", "--log-file", "x.log"]).is_err());
    }

    #[test]
    fn test_missing_model_exits_with_failure() {
        let dir = tempfile::tempdir().unwrap();
        let args = ExtractArgs {
            pdf:            "unused.pdf".into(),
            output:         dir.path().join("out.json").display().to_string(),
            model_dir:      dir.path().join("no_model").display().to_string(),
            max_seq_len:    384,
            max_answer_len: 15,
            window_words:   160,
            window_overlap: 40,
            min_score:      0.0,
            threads:        1,
            log_file:       "x.log".into(),
        };
        let code = run_extract(args, "x.log");
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
        assert!(!dir.path().join("out.json").exists());
    }
}
