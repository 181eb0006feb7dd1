//! Extremes and rankings: best differentials, scoring range, handicap
//! low/high.
//!
//! All sorts are stable, so among equal values the entry supplied first wins
//! the lower rank. For the handicap extremes that means the reported date of a
//! tied low (or high) depends on input order.

use super::score::score_value;
use crate::models::{HandicapRevision, ScoreEntry};

/// How many best differentials are reported by default.
pub const DEFAULT_BEST_DIFFERENTIALS: usize = 5;

/// The `count` rounds with the lowest differential, best first.
///
/// Rounds without a differential are skipped. Entries are returned as
/// supplied; duplicates are kept.
pub fn best_differentials(scores: &[ScoreEntry], count: usize) -> Vec<ScoreEntry> {
    let mut ranked: Vec<(f64, &ScoreEntry)> = scores
        .iter()
        .filter_map(|entry| entry.differential().map(|d| (d, entry)))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked
        .into_iter()
        .take(count)
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Lowest and highest handicap revisions, with their original dates.
///
/// Revisions without an index are ignored; an empty history gives
/// `(None, None)`.
pub fn handicap_extremes(
    history: &[HandicapRevision],
) -> (Option<HandicapRevision>, Option<HandicapRevision>) {
    let mut ranked: Vec<(f64, &HandicapRevision)> = history
        .iter()
        .filter_map(|rev| rev.index().map(|index| (index, rev)))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let low = ranked.first().map(|&(_, rev)| rev.clone());
    let high = ranked.last().map(|&(_, rev)| rev.clone());
    (low, high)
}

/// Lowest and highest parseable score over every round.
pub fn score_range(scores: &[ScoreEntry]) -> (Option<f64>, Option<f64>) {
    scores
        .iter()
        .filter_map(score_value)
        .fold((None, None), |(low, high), score| {
            (
                Some(low.map_or(score, |l: f64| l.min(score))),
                Some(high.map_or(score, |h: f64| h.max(score))),
            )
        })
}
