//! Keyword and pattern based extraction from consultation notes.

pub mod extractor;
pub mod input;
pub mod keywords;
pub mod patient;
pub mod patterns;
pub mod types;

pub use extractor::extract;
pub use input::validate_text_input;
pub use patient::extract_patient_details;
pub use types::{
    DiagnosisCategory, FeatureSet, Gender, PatientDetails, Symptom, TextInputReport,
    TreatmentCategory, Urgency,
};
