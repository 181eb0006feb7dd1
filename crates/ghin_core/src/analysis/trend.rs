//! # Handicap Trend Classifier
//!
//! Fits an unweighted least-squares line through the last [`TREND_WINDOW`]
//! revisions, using the sequence position (0, 1, 2, ...) as x. Elapsed time
//! between revisions is deliberately ignored.
//!
//! | slope              | label       |
//! |--------------------|-------------|
//! | > +0.1             | declining   |
//! | < -0.1             | improving   |
//! | otherwise          | stable      |
//!
//! A rising index means weaker play, hence "declining".

use crate::models::{HandicapRevision, HandicapTrend};

/// Number of most recent revisions the slope is fitted over.
pub const TREND_WINDOW: usize = 5;

/// Slope magnitude (index points per revision) below which no trend is called.
pub const SLOPE_DEADBAND: f64 = 0.1;

/// Classify the direction of the handicap index.
///
/// Revisions without an index are ignored. Fewer than [`TREND_WINDOW`] usable
/// revisions gives [`HandicapTrend::InsufficientData`].
pub fn classify_trend(history: &[HandicapRevision]) -> HandicapTrend {
    let mut revisions: Vec<(Option<&str>, f64)> = history
        .iter()
        .filter_map(|r| r.index().map(|index| (r.date(), index)))
        .collect();

    if revisions.len() < TREND_WINDOW {
        return HandicapTrend::InsufficientData;
    }

    // ISO dates order correctly as text; stable for duplicate dates
    revisions.sort_by(|a, b| a.0.cmp(&b.0));

    let window: Vec<f64> = revisions[revisions.len() - TREND_WINDOW..]
        .iter()
        .map(|&(_, index)| index)
        .collect();

    match slope(&window) {
        Some(s) if s > SLOPE_DEADBAND => HandicapTrend::Declining,
        Some(s) if s < -SLOPE_DEADBAND => HandicapTrend::Improving,
        _ => HandicapTrend::Stable,
    }
}

/// Ordinary least-squares slope of `values` against their positions.
///
/// Returns `None` when the position variance is zero (fewer than two values).
pub fn slope(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = values.iter().sum::<f64>() / n as f64;

    let (numerator, denominator) =
        values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(num, den), (i, &y)| {
                let dx = i as f64 - x_mean;
                (num + dx * (y - y_mean), den + dx * dx)
            });

    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}
