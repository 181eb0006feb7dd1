//! # ghin_core - Golf Handicap Statistics Engine
//!
//! Derives descriptive statistics from a previously collected GHIN
//! (Golf Handicap and Information Network) data document.
//!
//! ## Features
//! - Handicap trend classification over the most recent revisions
//! - Scoring extremes, best differentials, per-course and per-year averages
//! - Tolerant input model: missing or malformed fields degrade to "no value"
//! - Text and JSON report rendering

pub mod analysis;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;

pub use data::loader::{load_record, parse_record};
pub use engine::{compute_statistics, compute_statistics_with, StatsOptions};
pub use error::{ConfigError, LoadError, RenderError};
pub use models::{
    CourseSummary, GhinRecord, GolfStatistics, HandicapRevision, HandicapTrend,
    PerformanceStats, ScoreEntry, YearSummary,
};
pub use report::{render, render_with, OutputFormat, ReportOptions};
