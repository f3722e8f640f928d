use serde::{Deserialize, Serialize};

/// A candidate MBS item for a consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub code: String,
    pub description: String,
    /// Engine's own certainty in `0.0..=1.0`, not a calibrated probability.
    pub confidence: f64,
    pub reason: String,
    pub compliance_notes: Vec<String>,
}

/// Caller-supplied values used when the feature set has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendDefaults {
    pub duration_minutes: Option<u32>,
    pub age: Option<u32>,
}
