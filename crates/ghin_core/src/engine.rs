//! # Statistics Engine
//!
//! Runs every analysis over one [`GhinRecord`] and merges the results into a
//! fresh [`GolfStatistics`]. Pure: no I/O, no state kept between calls, and
//! the same input always yields the same output.

use crate::analysis::{aggregate, extremes, trend};
use crate::models::{GhinRecord, GolfStatistics};
use tracing::debug;

/// Engine tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    /// Length of the best-differentials ranking
    pub best_differentials: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            best_differentials: extremes::DEFAULT_BEST_DIFFERENTIALS,
        }
    }
}

/// Compute all statistics with default options.
pub fn compute_statistics(record: &GhinRecord) -> GolfStatistics {
    compute_statistics_with(record, &StatsOptions::default())
}

/// Compute all statistics.
pub fn compute_statistics_with(record: &GhinRecord, options: &StatsOptions) -> GolfStatistics {
    let (low_score, high_score) = extremes::score_range(&record.scores);
    let (handicap_low, handicap_high) = extremes::handicap_extremes(&record.handicap_history);

    let stats = GolfStatistics {
        current_handicap: record.current_handicap(),
        handicap_trend: trend::classify_trend(&record.handicap_history),
        lifetime_rounds: record.lifetime_rounds,
        low_score,
        high_score,
        best_differentials: extremes::best_differentials(
            &record.scores,
            options.best_differentials,
        ),
        courses: aggregate::by_course(&record.scores),
        yearly_breakdown: aggregate::by_year(&record.scores),
        performance: record.performance_stats().cloned(),
        handicap_low,
        handicap_high,
    };

    debug!(
        revisions = record.handicap_history.len(),
        rounds = record.scores.len(),
        courses = stats.courses.len(),
        years = stats.yearly_breakdown.len(),
        trend = %stats.handicap_trend,
        "computed statistics"
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HandicapRevision, HandicapTrend, PerformanceStats, ScoreEntry};
    use serde_json::json;

    fn sample_record() -> GhinRecord {
        GhinRecord {
            handicap_index: Some(11.0),
            handicap_history: vec![
                HandicapRevision::new("2024-05-01", 11.5),
                HandicapRevision::new("2024-01-01", 13.0),
                HandicapRevision::new("2024-02-01", 12.5),
                HandicapRevision::new("2024-06-01", 11.0),
                HandicapRevision::new("2024-03-01", 12.0),
                HandicapRevision::new("2023-12-01", 13.4),
            ],
            lifetime_rounds: 140,
            scores: vec![
                ScoreEntry::new("Riverside", "2024-05-20", "84").with_differential(10.2),
                ScoreEntry::new("Hillcrest", "2024-04-11", "91A").with_differential(14.8),
                ScoreEntry::new("Riverside", "2023-10-02", "88").with_differential(12.1),
                ScoreEntry::new("Riverside", "bad-date", "NC"),
            ],
            stats: Some(PerformanceStats {
                putts_avg: Some(31.7),
                ..PerformanceStats::default()
            }),
            ..GhinRecord::default()
        }
    }

    #[test]
    fn test_compute_statistics() {
        let stats = compute_statistics(&sample_record());

        assert_eq!(stats.current_handicap, Some(11.0));
        assert_eq!(stats.handicap_trend, HandicapTrend::Improving);
        assert_eq!(stats.lifetime_rounds, 140);
        assert_eq!(stats.low_score, Some(84.0));
        assert_eq!(stats.high_score, Some(91.0));

        let diffs: Vec<f64> = stats
            .best_differentials
            .iter()
            .filter_map(|e| e.differential())
            .collect();
        assert_eq!(diffs, vec![10.2, 12.1, 14.8]);

        assert_eq!(stats.courses[0].course, "Riverside");
        assert_eq!(stats.courses[0].rounds, 3);
        assert_eq!(stats.courses[0].avg_score, Some(86.0));
        assert_eq!(stats.courses[1].course, "Hillcrest");

        assert_eq!(stats.yearly_breakdown.len(), 2);
        assert_eq!(stats.yearly_breakdown["2024"].rounds, 2);
        assert_eq!(stats.yearly_breakdown["2024"].avg_score, Some(87.5));
        assert_eq!(stats.yearly_breakdown["2023"].rounds, 1);

        assert_eq!(stats.performance.as_ref().and_then(|p| p.putts_avg), Some(31.7));
        assert_eq!(stats.handicap_low, Some(HandicapRevision::new("2024-06-01", 11.0)));
        assert_eq!(stats.handicap_high, Some(HandicapRevision::new("2023-12-01", 13.4)));
    }

    #[test]
    fn test_best_differentials_option() {
        let options = StatsOptions {
            best_differentials: 1,
        };
        let stats = compute_statistics_with(&sample_record(), &options);
        assert_eq!(stats.best_differentials.len(), 1);
        assert_eq!(stats.best_differentials[0].differential(), Some(10.2));
    }

    #[test]
    fn test_empty_record() {
        let stats = compute_statistics(&GhinRecord::default());

        assert_eq!(stats.current_handicap, None);
        assert_eq!(stats.handicap_trend, HandicapTrend::InsufficientData);
        assert_eq!(stats.lifetime_rounds, 0);
        assert_eq!(stats.low_score, None);
        assert_eq!(stats.high_score, None);
        assert!(stats.best_differentials.is_empty());
        assert!(stats.courses.is_empty());
        assert!(stats.yearly_breakdown.is_empty());
        assert!(stats.performance.is_none());
        assert_eq!(stats.handicap_low, None);
        assert_eq!(stats.handicap_high, None);
    }

    #[test]
    fn test_identical_input_identical_output() {
        let record = sample_record();
        let first = serde_json::to_string(&compute_statistics(&record)).unwrap();
        let second = serde_json::to_string(&compute_statistics(&record)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_shape() {
        let stats = compute_statistics(&GhinRecord::default());
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "current_handicap": null,
                "handicap_trend": "insufficient_data",
                "lifetime_rounds": 0,
                "low_score": null,
                "high_score": null,
                "best_differentials": [],
                "courses": [],
                "yearly_breakdown": {},
                "handicap_low": null,
                "handicap_high": null
            })
        );
    }
}
