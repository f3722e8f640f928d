use super::keywords::contains_any;
use super::patterns::{
    capture_u32, MEDICARE_NUMBER, PATIENT_AGE, PATIENT_NAME_PATTERNS, PHONE_NUMBER,
};
use super::types::{Gender, PatientDetails};

// Female terms contain the male ones ("female" ⊃ "male"), so check them first.
const FEMALE_KEYWORDS: &[&str] = &["female", "woman", "女", "女士"];
const MALE_KEYWORDS: &[&str] = &["male", "man", "男", "先生"];

/// Pick identifying patient details out of free text.
pub fn extract_patient_details(text: &str) -> PatientDetails {
    let lower = text.to_lowercase();

    let name = PATIENT_NAME_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let name = caps.get(1)?.as_str().trim();
        (!name.is_empty()).then(|| name.to_string())
    });

    let gender = if contains_any(&lower, FEMALE_KEYWORDS) {
        Some(Gender::Female)
    } else if contains_any(&lower, MALE_KEYWORDS) {
        Some(Gender::Male)
    } else {
        None
    };

    let medicare_number = MEDICARE_NUMBER
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    let contact = PHONE_NUMBER.find(text).map(|m| m.as_str().to_string());

    PatientDetails {
        name,
        age: capture_u32(&PATIENT_AGE, &lower),
        gender,
        medicare_number,
        contact,
    }
}
