//! Input and output data model.
//!
//! [`GhinRecord`] is the externally supplied document, read-only and tolerant
//! of missing fields. [`GolfStatistics`] is produced fresh by every engine call.

pub mod input;
pub mod lenient;
pub mod output;

pub use input::{GhinRecord, HandicapRevision, PerformanceStats, ScoreEntry};
pub use output::{CourseSummary, GolfStatistics, HandicapTrend, YearSummary};
