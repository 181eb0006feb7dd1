//! GHIN data document as collected on disk.
//!
//! Every field is optional. The loader only insists that the top level is a
//! JSON object; anything below it that is missing or of the wrong type is read
//! as absent.
//!
//! History and score entries keep the object they were read from, and
//! serialize back to exactly that object.

use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Top-level input record.
///
/// The collector writes `handicap_index` and `stats`; the older
/// `current_handicap_index` and `performance` spellings are read too. When a
/// document carries both, the collector's spelling wins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GhinRecord {
    /// Current handicap index
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub handicap_index: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub current_handicap_index: Option<f64>,
    /// Handicap revisions, in no guaranteed order
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub handicap_history: Vec<HandicapRevision>,
    /// Lifetime rounds posted, as reported by GHIN
    #[serde(default, deserialize_with = "lenient::count")]
    pub lifetime_rounds: u64,
    /// Posted rounds
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub scores: Vec<ScoreEntry>,
    /// Per-hole and ball-striking averages
    #[serde(default, deserialize_with = "lenient::opt_object")]
    pub stats: Option<PerformanceStats>,
    #[serde(default, deserialize_with = "lenient::opt_object")]
    pub performance: Option<PerformanceStats>,
}

impl GhinRecord {
    pub fn current_handicap(&self) -> Option<f64> {
        self.handicap_index.or(self.current_handicap_index)
    }

    pub fn performance_stats(&self) -> Option<&PerformanceStats> {
        self.stats.as_ref().or(self.performance.as_ref())
    }
}

/// One handicap index revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct HandicapRevision {
    date: Option<String>,
    index: Option<f64>,
    raw: Map<String, Value>,
}

impl HandicapRevision {
    pub fn new(date: &str, index: f64) -> Self {
        Self::from(object(json!({"date": date, "index": index})))
    }

    /// Revision date, ISO `YYYY-MM-DD`
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn index(&self) -> Option<f64> {
        self.index
    }

    /// The object this revision was read from.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl From<Map<String, Value>> for HandicapRevision {
    fn from(raw: Map<String, Value>) -> Self {
        Self {
            date: raw.get("date").and_then(lenient::text),
            index: raw.get("index").and_then(lenient::number),
            raw,
        }
    }
}

impl From<HandicapRevision> for Map<String, Value> {
    fn from(revision: HandicapRevision) -> Self {
        revision.raw
    }
}

/// One posted round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ScoreEntry {
    course: Option<String>,
    date: Option<String>,
    score: Option<String>,
    differential: Option<f64>,
    raw: Map<String, Value>,
}

impl ScoreEntry {
    pub fn new(course: &str, date: &str, score: &str) -> Self {
        Self::from(object(json!({"course": course, "date": date, "score": score})))
    }

    pub fn with_differential(self, differential: f64) -> Self {
        let mut raw = self.raw;
        raw.insert("differential".to_string(), json!(differential));
        Self::from(raw)
    }

    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    /// Round date, ISO `YYYY-MM-DD` when well formed
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Score token, e.g. `"82"` or `"91A"`; a numeric score reads as its digits
    pub fn score(&self) -> Option<&str> {
        self.score.as_deref()
    }

    /// Score differential (lower is better)
    pub fn differential(&self) -> Option<f64> {
        self.differential
    }

    /// The object this round was read from.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl From<Map<String, Value>> for ScoreEntry {
    fn from(raw: Map<String, Value>) -> Self {
        Self {
            course: raw.get("course").and_then(lenient::text),
            date: raw.get("date").and_then(lenient::text),
            score: raw.get("score").and_then(lenient::text),
            differential: raw.get("differential").and_then(lenient::number),
            raw,
        }
    }
}

impl From<ScoreEntry> for Map<String, Value> {
    fn from(entry: ScoreEntry) -> Self {
        entry.raw
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Performance averages. Each one is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub par3_avg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub par4_avg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub par5_avg: Option<f64>,
    /// Greens in regulation, percent
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub gir_pct: Option<f64>,
    /// Fairways hit, percent
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub fairways_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub putts_avg: Option<f64>,
}

impl PerformanceStats {
    pub fn has_any(&self) -> bool {
        [
            self.par3_avg,
            self.par4_avg,
            self.par5_avg,
            self.gir_pct,
            self.fairways_pct,
            self.putts_avg,
        ]
        .iter()
        .any(Option::is_some)
    }
}
