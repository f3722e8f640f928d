use super::keywords::{
    contains_any, match_tags, CHRONIC_KEYWORDS, DIAGNOSIS_KEYWORDS, FOLLOWUP_KEYWORDS,
    SYMPTOM_KEYWORDS, TREATMENT_KEYWORDS, URGENCY_KEYWORDS,
};
use super::patterns::{capture_u32, first_number, AGE_PATTERNS, DURATION_PATTERNS, SENTENCE_SPLIT};
use super::types::{FeatureSet, Urgency};

/// Maximum number of key phrases kept per note.
const MAX_KEY_PHRASES: usize = 3;

/// A sentence must be longer than this (in characters) to count as a key phrase.
const MIN_KEY_PHRASE_CHARS: usize = 10;

/// Extract structured signals from a consultation note.
///
/// Pure and deterministic. Missing signals come back as empty sets, `None`,
/// `Urgency::Routine` or `false`; extraction never fails.
pub fn extract(text: &str) -> FeatureSet {
    let lower = text.to_lowercase();

    let features = FeatureSet {
        symptoms: match_tags(&lower, SYMPTOM_KEYWORDS).into_iter().collect(),
        diagnoses: match_tags(&lower, DIAGNOSIS_KEYWORDS).into_iter().collect(),
        treatments: match_tags(&lower, TREATMENT_KEYWORDS).into_iter().collect(),
        duration_minutes: extract_duration(&lower),
        age: first_number(&AGE_PATTERNS, &lower),
        urgency: if contains_any(&lower, URGENCY_KEYWORDS) {
            Urgency::Urgent
        } else {
            Urgency::Routine
        },
        is_chronic: contains_any(&lower, CHRONIC_KEYWORDS),
        needs_followup: contains_any(&lower, FOLLOWUP_KEYWORDS),
        key_phrases: key_phrases(text),
        raw_text: text.to_string(),
    };

    tracing::info!(
        symptoms = features.symptoms.len(),
        diagnoses = features.diagnoses.len(),
        treatments = features.treatments.len(),
        duration = ?features.duration_minutes,
        urgency = features.urgency.as_str(),
        "Consultation features extracted"
    );

    features
}

/// First duration mention, in minutes. Hour units are converted.
fn extract_duration(lower: &str) -> Option<u32> {
    DURATION_PATTERNS.iter().find_map(|p| {
        capture_u32(&p.regex, lower).and_then(|n| n.checked_mul(p.minutes_per_unit))
    })
}

/// Leading sentences of the note, trimmed, in document order.
fn key_phrases(text: &str) -> Vec<String> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_KEY_PHRASE_CHARS)
        .take(MAX_KEY_PHRASES)
        .map(String::from)
        .collect()
}
