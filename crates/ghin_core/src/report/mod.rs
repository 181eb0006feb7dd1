//! # Report Rendering
//!
//! Turns a [`GolfStatistics`] into either the human-readable text report or
//! pretty-printed JSON.

pub mod json;
pub mod text;

use crate::error::{ConfigError, RenderError};
use crate::models::GolfStatistics;
use std::fmt;
use std::str::FromStr;

/// Output form selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFormat(s.to_string()))
    }
}

/// Text report tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Courses listed under "most played"
    pub top_courses: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { top_courses: 5 }
    }
}

/// Render with default report options.
pub fn render(stats: &GolfStatistics, format: OutputFormat) -> Result<String, RenderError> {
    render_with(stats, format, &ReportOptions::default())
}

pub fn render_with(
    stats: &GolfStatistics,
    format: OutputFormat,
    options: &ReportOptions,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(text::format_text(stats, options)),
        OutputFormat::Json => json::format_json(stats),
    }
}
