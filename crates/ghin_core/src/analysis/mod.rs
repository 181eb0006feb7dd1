//! # Statistics Analyses
//!
//! Four independent, stateless transforms over a read-only [`crate::GhinRecord`]:
//!
//! - `score`: numeric value of a decorated score token (`"91A"` → 91.0)
//! - `trend`: least-squares direction of the latest handicap revisions
//! - `aggregate`: round counts and mean scores per course and per year
//! - `extremes`: best differentials, scoring range, handicap low/high
//!
//! Only `score` is shared; the others never read each other's results.

pub mod aggregate;
pub mod extremes;
pub mod score;
pub mod trend;

pub use aggregate::{by_course, by_year, GroupAccumulator, GroupedRounds, UNKNOWN_COURSE};
pub use extremes::{
    best_differentials, handicap_extremes, score_range, DEFAULT_BEST_DIFFERENTIALS,
};
pub use score::{parse_score, score_value};
pub use trend::{classify_trend, slope, SLOPE_DEADBAND, TREND_WINDOW};
