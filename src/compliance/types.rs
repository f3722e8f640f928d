use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verdict for a chosen combination of MBS items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// False iff at least one error was recorded.
    pub is_compliant: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub details: Map<String, Value>,
}

/// Prior billing for the patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientHistory {
    #[serde(default, alias = "recentClaims")]
    pub recent_claims: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PatientHistory {
    pub fn with_recent_claims<I, S>(claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recent_claims: claims.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }
}

/// Facts about the encounter being billed.
///
/// Read from any JSON object. The length comes from `duration_minutes`, or
/// `duration` when that is absent; any JSON number is accepted and rounded
/// to whole minutes. Other keys land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ConsultationDetails {
    /// Consultation length. When absent, duration bands are not checked.
    pub duration_minutes: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConsultationDetails {
    pub fn with_duration(minutes: u32) -> Self {
        Self {
            duration_minutes: Some(minutes),
            extra: Map::new(),
        }
    }
}

impl From<Map<String, Value>> for ConsultationDetails {
    fn from(mut extra: Map<String, Value>) -> Self {
        let long = extra.remove("duration_minutes");
        let short = extra.remove("duration");
        let duration_minutes = long
            .as_ref()
            .and_then(whole_minutes)
            .or_else(|| short.as_ref().and_then(whole_minutes));
        Self {
            duration_minutes,
            extra,
        }
    }
}

/// Minutes from a JSON number. Negative, non-finite, oversized and
/// non-numeric values give `None`.
fn whole_minutes(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    let f = value.as_f64()?;
    let rounded = f.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded > f64::from(u32::MAX) {
        tracing::debug!(value = %value, "Ignoring unusable consultation duration");
        return None;
    }
    Some(rounded as u32)
}
