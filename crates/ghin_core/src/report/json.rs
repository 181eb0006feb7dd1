//! JSON output.

use crate::error::RenderError;
use crate::models::GolfStatistics;

/// Pretty-printed JSON with two-space indentation. "No value" is `null`.
pub fn format_json(stats: &GolfStatistics) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(stats)?)
}
