//! Command-line arguments.

use clap::Parser;
use ghin_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghin_stats")]
#[command(about = "Analyze GHIN golf statistics from JSON data file", long_about = None)]
pub struct Cli {
    /// Path to GHIN data JSON file
    pub json_file: PathBuf,

    /// Output format: text or json
    #[arg(long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_text() {
        let cli = Cli::try_parse_from(["ghin_stats", "ghin.json"]).unwrap();
        assert_eq!(cli.json_file, PathBuf::from("ghin.json"));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_json_format() {
        let cli = Cli::try_parse_from(["ghin_stats", "ghin.json", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Cli::try_parse_from(["ghin_stats", "ghin.json", "--format", "xml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_path_required() {
        assert!(Cli::try_parse_from(["ghin_stats"]).is_err());
    }
}
