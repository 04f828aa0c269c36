use serde::{Deserialize, Serialize};

/// Integer coefficient of a single polynomial term
pub type Coefficient = i64;

/// Outcome of an evolution run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub population_id: u64,
    pub generations: usize,
    pub best_fit: String,
    pub best_terms: Vec<Coefficient>,
    pub best_score: f64,
    pub movie: Option<String>,
}
