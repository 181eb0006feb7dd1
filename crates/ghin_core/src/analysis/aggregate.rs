//! # Round Aggregation
//!
//! Groups rounds by course and by calendar year. Each group counts every
//! round it receives but only averages the scores that parse; a group with
//! no parseable score has no average (not zero).

use super::score::score_value;
use crate::models::{CourseSummary, ScoreEntry, YearSummary};
use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::debug;

/// Group label for rounds posted without a course name.
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Running totals for one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupAccumulator {
    /// Rounds seen, parseable or not
    pub count: u32,
    /// Parsed scores only
    pub scores: Vec<f64>,
}

impl GroupAccumulator {
    pub fn record(&mut self, score: Option<f64>) {
        self.count += 1;
        if let Some(score) = score {
            self.scores.push(score);
        }
    }

    pub fn mean(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
    }

    /// Mean rounded to one decimal place for display.
    pub fn rounded_mean(&self) -> Option<f64> {
        self.mean().map(round_to_tenth)
    }
}

/// Text-keyed groups that remember first-encounter order.
#[derive(Debug, Default)]
pub struct GroupedRounds {
    slots: FxHashMap<String, usize>,
    groups: Vec<(String, GroupAccumulator)>,
}

impl GroupedRounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the accumulator for `key`, inserting an empty one if needed.
    pub fn entry(&mut self, key: &str) -> &mut GroupAccumulator {
        let slot = match self.slots.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.slots.insert(key.to_string(), slot);
                self.groups.push((key.to_string(), GroupAccumulator::default()));
                slot
            }
        };
        &mut self.groups[slot].1
    }

    pub fn get(&self, key: &str) -> Option<&GroupAccumulator> {
        self.slots.get(key).map(|&slot| &self.groups[slot].1)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in first-encounter order.
    pub fn into_groups(self) -> Vec<(String, GroupAccumulator)> {
        self.groups
    }
}

/// Per-course round counts and averages, most played first.
///
/// Courses with equal round counts keep the order they were first seen in.
pub fn by_course(scores: &[ScoreEntry]) -> Vec<CourseSummary> {
    let mut grouped = GroupedRounds::new();
    for entry in scores {
        let course = entry.course().unwrap_or(UNKNOWN_COURSE);
        grouped.entry(course).record(score_value(entry));
    }

    let mut courses: Vec<CourseSummary> = grouped
        .into_groups()
        .into_iter()
        .map(|(course, acc)| CourseSummary {
            course,
            rounds: acc.count,
            avg_score: acc.rounded_mean(),
        })
        .collect();

    // sort_by is stable
    courses.sort_by(|a, b| b.rounds.cmp(&a.rounds));
    courses
}

/// Per-year round counts and averages keyed by year text.
///
/// Rounds whose date is missing or not `YYYY-MM-DD` are left out.
pub fn by_year(scores: &[ScoreEntry]) -> BTreeMap<String, YearSummary> {
    let mut years: BTreeMap<String, GroupAccumulator> = BTreeMap::new();
    let mut skipped = 0usize;

    for entry in scores {
        let Some(year) = entry.date().and_then(round_year) else {
            skipped += 1;
            continue;
        };
        years
            .entry(year.to_string())
            .or_default()
            .record(score_value(entry));
    }

    if skipped > 0 {
        debug!(skipped, "rounds without a usable date left out of yearly breakdown");
    }

    years
        .into_iter()
        .map(|(year, acc)| {
            let summary = YearSummary {
                rounds: acc.count,
                avg_score: acc.rounded_mean(),
            };
            (year, summary)
        })
        .collect()
}

/// Calendar year of an ISO `YYYY-MM-DD` date.
pub fn round_year(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// Round to one decimal place.
///
/// Rounds the exact binary value with ties to even, so a mean of 85.25
/// becomes 85.2 and 0.35 (stored just below) becomes 0.3.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
