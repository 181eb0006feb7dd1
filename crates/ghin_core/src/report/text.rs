//! Human-readable multi-section report.
//!
//! Sections without data are left out, except the lifetime totals which are
//! always shown. Every section but the last is followed by a blank line.

use super::ReportOptions;
use crate::models::{GolfStatistics, HandicapRevision, HandicapTrend, PerformanceStats};

const TITLE: &str = "GHIN Golf Statistics Report";

/// Build the text report.
pub fn format_text(stats: &GolfStatistics, options: &ReportOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(TITLE.to_string());
    lines.push("=".repeat(30));
    lines.push(String::new());

    if let Some(current) = stats.current_handicap {
        lines.push(format!("Current Handicap: {}", number(current)));
        lines.push(format!("Trend (last 5): {}", trend_label(stats.handicap_trend)));
        lines.push(String::new());
    }

    heading(&mut lines, "LIFETIME TOTALS");
    lines.push(format!("Total Rounds: {}", stats.lifetime_rounds));
    if let Some(low) = stats.low_score {
        lines.push(format!("Best Score: {}", number(low)));
    }
    if let Some(high) = stats.high_score {
        lines.push(format!("Worst Score: {}", number(high)));
    }
    lines.push(String::new());

    if stats.handicap_low.is_some() || stats.handicap_high.is_some() {
        heading(&mut lines, "HANDICAP RANGE");
        if let Some(low) = &stats.handicap_low {
            lines.push(format!("Lowest: {}", revision(low)));
        }
        if let Some(high) = &stats.handicap_high {
            lines.push(format!("Highest: {}", revision(high)));
        }
        lines.push(String::new());
    }

    if !stats.best_differentials.is_empty() {
        heading(&mut lines, "BEST DIFFERENTIALS");
        for (rank, entry) in stats.best_differentials.iter().enumerate() {
            lines.push(format!(
                "{}. {:.1} - {} ({})",
                rank + 1,
                entry.differential().unwrap_or_default(),
                entry.course().unwrap_or("Unknown"),
                entry.date().unwrap_or("Unknown"),
            ));
        }
        lines.push(String::new());
    }

    if !stats.courses.is_empty() {
        heading(&mut lines, "MOST PLAYED COURSES");
        for course in stats.courses.iter().take(options.top_courses) {
            lines.push(format!(
                "{}: {} rounds ({})",
                course.course,
                course.rounds,
                average(course.avg_score)
            ));
        }
        lines.push(String::new());
    }

    if let Some(performance) = stats.performance.as_ref().filter(|p| p.has_any()) {
        heading(&mut lines, "PERFORMANCE AVERAGES");
        performance_lines(&mut lines, performance);
        lines.push(String::new());
    }

    if !stats.yearly_breakdown.is_empty() {
        heading(&mut lines, "YEARLY BREAKDOWN");
        for (year, summary) in stats.yearly_breakdown.iter().rev() {
            lines.push(format!(
                "{}: {} rounds ({})",
                year,
                summary.rounds,
                average(summary.avg_score)
            ));
        }
    }

    lines.join("\n")
}

pub fn trend_label(trend: HandicapTrend) -> &'static str {
    match trend {
        HandicapTrend::Improving => "↗️  Improving",
        HandicapTrend::Declining => "↘️  Declining",
        HandicapTrend::Stable => "→ Stable",
        HandicapTrend::InsufficientData => "Insufficient data",
    }
}

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(title.len()));
}

fn performance_lines(lines: &mut Vec<String>, p: &PerformanceStats) {
    if let Some(v) = p.par3_avg {
        lines.push(format!("Par 3 Average: {:.2}", v));
    }
    if let Some(v) = p.par4_avg {
        lines.push(format!("Par 4 Average: {:.2}", v));
    }
    if let Some(v) = p.par5_avg {
        lines.push(format!("Par 5 Average: {:.2}", v));
    }
    if let Some(v) = p.gir_pct {
        lines.push(format!("Greens in Regulation: {:.1}%", v));
    }
    if let Some(v) = p.fairways_pct {
        lines.push(format!("Fairways Hit: {:.1}%", v));
    }
    if let Some(v) = p.putts_avg {
        lines.push(format!("Average Putts: {:.1}", v));
    }
}

fn revision(rev: &HandicapRevision) -> String {
    format!(
        "{} ({})",
        rev.index().map(number).unwrap_or_else(|| "-".to_string()),
        rev.date().unwrap_or("Unknown")
    )
}

fn average(avg: Option<f64>) -> String {
    match avg {
        Some(avg) => format!("avg {:.1}", avg),
        None => "no avg".to_string(),
    }
}

/// Shortest round-trip form, always with a decimal point (`82.0`, `12.3`).
fn number(value: f64) -> String {
    format!("{:?}", value)
}
