//! GHIN Stats
//!
//! Load a collected GHIN data file → compute statistics → render text or JSON.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

use anyhow::{Context, Result};
use ghin_core::{compute_statistics, load_record, render, LoadError, OutputFormat};
use std::path::Path;
use tracing::debug;

#[cfg(feature = "cli")]
pub use cli::Cli;

/// Produce the report for one GHIN data file.
///
/// Load failures are returned as [`LoadError`] inside the `anyhow::Error` so
/// callers can tell them apart from anything else.
pub fn run(json_file: &Path, format: OutputFormat) -> Result<String> {
    let record = load_record(json_file)?;
    let stats = compute_statistics(&record);
    debug!(%format, "rendering statistics");
    let output = render(&stats, format).context("Failed to render statistics")?;
    Ok(output)
}

/// Message written to stderr when [`run`] fails.
pub fn error_message(err: &anyhow::Error) -> String {
    if err.downcast_ref::<LoadError>().is_some() {
        format!("Error: {}", err)
    } else {
        format!("Unexpected error: {:#}", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ghin_file(contents: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    const SAMPLE: &str = r#"{
        "handicap_index": 12.4,
        "handicap_history": [
            {"date": "2024-01-15", "index": 13.9},
            {"date": "2024-02-15", "index": 13.5},
            {"date": "2024-03-15", "index": 13.1},
            {"date": "2024-04-15", "index": 12.8},
            {"date": "2024-05-15", "index": 12.4}
        ],
        "lifetime_rounds": 88,
        "scores": [
            {"course": "Cedar Ridge", "date": "2024-05-10", "score": "86", "differential": 11.9},
            {"course": "Cedar Ridge", "date": "2024-04-02", "score": "90A", "differential": 14.0},
            {"course": "Lakeview", "date": "2023-09-21", "score": "93", "differential": 16.2}
        ],
        "stats": {"gir_pct": 27.5}
    }"#;

    #[test]
    fn test_run_text() -> Result<()> {
        let file = ghin_file(SAMPLE)?;
        let output = run(file.path(), OutputFormat::Text)?;

        assert!(output.starts_with("GHIN Golf Statistics Report"));
        assert!(output.contains("Current Handicap: 12.4"));
        assert!(output.contains("Trend (last 5): ↗️  Improving"));
        assert!(output.contains("Cedar Ridge: 2 rounds (avg 88.0)"));
        assert!(output.contains("Greens in Regulation: 27.5%"));
        assert!(output.ends_with("2023: 1 rounds (avg 93.0)"));
        Ok(())
    }

    #[test]
    fn test_run_json() -> Result<()> {
        let file = ghin_file(SAMPLE)?;
        let output = run(file.path(), OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&output)?;

        assert_eq!(value["handicap_trend"], "improving");
        assert_eq!(value["lifetime_rounds"], 88);
        assert_eq!(value["low_score"], 86.0);
        assert_eq!(value["best_differentials"][0]["differential"], 11.9);
        assert_eq!(value["yearly_breakdown"]["2024"]["rounds"], 2);
        assert_eq!(value["performance"]["gir_pct"], 27.5);
        assert!(value["performance"]["putts_avg"].is_null());
        Ok(())
    }

    #[test]
    fn test_run_is_repeatable() -> Result<()> {
        let file = ghin_file(SAMPLE)?;
        assert_eq!(
            run(file.path(), OutputFormat::Json)?,
            run(file.path(), OutputFormat::Json)?
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = run(&path, OutputFormat::Text).unwrap_err();
        assert!(err.downcast_ref::<LoadError>().is_some());
        assert!(error_message(&err).starts_with("Error: GHIN data file not found:"));
    }

    #[test]
    fn test_malformed_file_message() -> Result<()> {
        let file = ghin_file("{ not json")?;
        let err = run(file.path(), OutputFormat::Json).unwrap_err();
        assert!(error_message(&err).starts_with("Error: Invalid JSON in file"));
        Ok(())
    }

    #[test]
    fn test_other_failures_are_unexpected() {
        let err = anyhow::anyhow!("boom").context("Failed to render statistics");
        assert_eq!(
            error_message(&err),
            "Unexpected error: Failed to render statistics: boom"
        );
    }
}
