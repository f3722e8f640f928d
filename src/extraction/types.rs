use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Presenting symptom category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Pain,
    Fever,
    Cough,
    Headache,
    Fatigue,
    Nausea,
    Anxiety,
    Depression,
}

impl Symptom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pain => "pain",
            Self::Fever => "fever",
            Self::Cough => "cough",
            Self::Headache => "headache",
            Self::Fatigue => "fatigue",
            Self::Nausea => "nausea",
            Self::Anxiety => "anxiety",
            Self::Depression => "depression",
        }
    }
}

/// Candidate diagnosis category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisCategory {
    Respiratory,
    Cardiovascular,
    Diabetes,
    MentalHealth,
}

impl DiagnosisCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Respiratory => "respiratory",
            Self::Cardiovascular => "cardiovascular",
            Self::Diabetes => "diabetes",
            Self::MentalHealth => "mental_health",
        }
    }
}

/// Treatment approach category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentCategory {
    Medication,
    Referral,
    Test,
    Counselling,
}

impl TreatmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medication => "medication",
            Self::Referral => "referral",
            Self::Test => "test",
            Self::Counselling => "counselling",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    Routine,
    Urgent,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Urgent => "urgent",
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureSet
// ---------------------------------------------------------------------------

/// Structured signals extracted from one consultation note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub symptoms: BTreeSet<Symptom>,
    pub diagnoses: BTreeSet<DiagnosisCategory>,
    pub treatments: BTreeSet<TreatmentCategory>,
    /// Consultation length in minutes, explicit or mentioned in the note.
    pub duration_minutes: Option<u32>,
    pub age: Option<u32>,
    pub urgency: Urgency,
    pub is_chronic: bool,
    pub needs_followup: bool,
    /// Up to three leading sentences, in document order.
    pub key_phrases: Vec<String>,
    pub raw_text: String,
}

impl FeatureSet {
    /// Override the note-derived duration with a value the caller recorded.
    pub fn with_explicit_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Override the note-derived age with a value the caller recorded.
    pub fn with_explicit_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

// ---------------------------------------------------------------------------
// PatientDetails
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Identifying details picked out of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    /// 10-digit Medicare card number.
    pub medicare_number: Option<String>,
    pub contact: Option<String>,
}

// ---------------------------------------------------------------------------
// TextInputReport
// ---------------------------------------------------------------------------

/// Result of screening raw note text before extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Length in characters.
    pub text_length: usize,
    pub word_count: usize,
}
