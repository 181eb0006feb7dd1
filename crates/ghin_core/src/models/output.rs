//! Computed statistics record.

use super::input::{HandicapRevision, PerformanceStats, ScoreEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Direction of the handicap index over the most recent revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandicapTrend {
    /// Index falling (playing better)
    Improving,
    /// Index rising (playing worse)
    Declining,
    Stable,
    /// Too few revisions to call a direction
    InsufficientData,
}

impl HandicapTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandicapTrend::Improving => "improving",
            HandicapTrend::Declining => "declining",
            HandicapTrend::Stable => "stable",
            HandicapTrend::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for HandicapTrend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounds played at one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub course: String,
    pub rounds: u32,
    /// Mean of the parseable scores, one decimal; `None` if there were none
    pub avg_score: Option<f64>,
}

/// Rounds played in one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub rounds: u32,
    pub avg_score: Option<f64>,
}

/// Everything the engine derives from one [`super::GhinRecord`].
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GolfStatistics {
    pub current_handicap: Option<f64>,
    pub handicap_trend: HandicapTrend,
    pub lifetime_rounds: u64,
    /// Lowest parseable score across all rounds
    pub low_score: Option<f64>,
    /// Highest parseable score across all rounds
    pub high_score: Option<f64>,
    /// Rounds with the lowest differentials, best first, as supplied
    pub best_differentials: Vec<ScoreEntry>,
    /// Per-course aggregates, most played first
    pub courses: Vec<CourseSummary>,
    /// Per-year aggregates keyed by four-digit year
    pub yearly_breakdown: BTreeMap<String, YearSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceStats>,
    pub handicap_low: Option<HandicapRevision>,
    pub handicap_high: Option<HandicapRevision>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_serialization() {
        assert_eq!(
            serde_json::to_string(&HandicapTrend::InsufficientData).unwrap(),
            "\"insufficient_data\""
        );
        assert_eq!(HandicapTrend::Improving.to_string(), "improving");
        let parsed: HandicapTrend = serde_json::from_str("\"declining\"").unwrap();
        assert_eq!(parsed, HandicapTrend::Declining);
    }
}
