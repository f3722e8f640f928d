//! Keyword dictionaries for note extraction.
//!
//! Matching is plain substring containment over lower-cased text, so "painless"
//! counts as pain. That imprecision is accepted; there is no word-boundary or
//! negation handling.

use super::types::{DiagnosisCategory, Symptom, TreatmentCategory};

pub const SYMPTOM_KEYWORDS: &[(Symptom, &[&str])] = &[
    (Symptom::Pain, &["pain", "ache", "hurt", "sore", "疼", "痛"]),
    (Symptom::Fever, &["fever", "temperature", "热", "发烧", "发热"]),
    (Symptom::Cough, &["cough", "咳", "咳嗽"]),
    (Symptom::Headache, &["headache", "头痛", "头疼"]),
    (
        Symptom::Fatigue,
        &["tired", "fatigue", "exhausted", "疲劳", "累", "乏力"],
    ),
    (Symptom::Nausea, &["nausea", "vomit", "恶心", "呕吐"]),
    (
        Symptom::Anxiety,
        &["anxiety", "anxious", "worried", "焦虑", "担心"],
    ),
    (
        Symptom::Depression,
        &["depression", "depressed", "sad", "抑郁", "沮丧"],
    ),
];

pub const DIAGNOSIS_KEYWORDS: &[(DiagnosisCategory, &[&str])] = &[
    (
        DiagnosisCategory::Respiratory,
        &["respiratory", "bronchitis", "pneumonia", "呼吸", "肺炎", "支气管"],
    ),
    (
        DiagnosisCategory::Cardiovascular,
        &["heart", "cardiac", "hypertension", "心脏", "高血压", "心血管"],
    ),
    (
        DiagnosisCategory::Diabetes,
        &["diabetes", "blood sugar", "glucose", "糖尿病", "血糖"],
    ),
    (
        DiagnosisCategory::MentalHealth,
        &[
            "mental",
            "psychiatric",
            "depression",
            "anxiety",
            "心理",
            "精神",
            "抑郁",
            "焦虑",
        ],
    ),
];

pub const TREATMENT_KEYWORDS: &[(TreatmentCategory, &[&str])] = &[
    (
        TreatmentCategory::Medication,
        &["prescribe", "medication", "drug", "开药", "处方", "药物"],
    ),
    (
        TreatmentCategory::Referral,
        &["refer", "specialist", "转诊", "专科"],
    ),
    (
        TreatmentCategory::Test,
        &[
            "test",
            "examination",
            "x-ray",
            "blood test",
            "检查",
            "化验",
            "x光",
        ],
    ),
    (
        TreatmentCategory::Counselling,
        &["counsel", "therapy", "咨询", "治疗"],
    ),
];

pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "severe",
    "acute",
    "紧急",
    "严重",
    "急性",
];

pub const CHRONIC_KEYWORDS: &[&str] = &["chronic", "long-term", "ongoing", "慢性", "长期"];

pub const FOLLOWUP_KEYWORDS: &[&str] = &[
    "follow up",
    "review",
    "return",
    "复诊",
    "随访",
    "复查",
];

/// Terms that suggest a GP Mental Health Treatment Plan.
pub const MENTAL_HEALTH_TRIGGERS: &[&str] =
    &["mental", "depression", "anxiety", "心理", "抑郁", "焦虑"];

/// Terms that suggest a chronic disease management plan.
pub const CHRONIC_DISEASE_TRIGGERS: &[&str] = &[
    "chronic",
    "diabetes",
    "hypertension",
    "慢性",
    "糖尿病",
    "高血压",
];

/// True when any keyword is a substring of the already lower-cased text.
pub fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Collect every tag whose keyword list has a hit in the lower-cased text.
pub fn match_tags<T: Copy>(lower: &str, dictionary: &[(T, &[&str])]) -> Vec<T> {
    dictionary
        .iter()
        .filter(|(_, keywords)| contains_any(lower, keywords))
        .map(|(tag, _)| *tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_semantics_include_false_positives() {
        assert!(contains_any("painless lump", &["pain"]));
        assert!(contains_any("she is sadly late", &["sad"]));
    }

    #[test]
    fn match_tags_in_dictionary_order() {
        let tags = match_tags("severe cough with fever", SYMPTOM_KEYWORDS);
        assert_eq!(tags, vec![Symptom::Fever, Symptom::Cough]);
    }

    #[test]
    fn chinese_variants_match() {
        let tags = match_tags("患者焦虑，头痛三天", SYMPTOM_KEYWORDS);
        assert!(tags.contains(&Symptom::Anxiety));
        assert!(tags.contains(&Symptom::Headache));
        assert!(tags.contains(&Symptom::Pain));
    }

    #[test]
    fn keywords_are_lower_case() {
        let all = SYMPTOM_KEYWORDS
            .iter()
            .flat_map(|(_, k)| k.iter())
            .chain(DIAGNOSIS_KEYWORDS.iter().flat_map(|(_, k)| k.iter()))
            .chain(TREATMENT_KEYWORDS.iter().flat_map(|(_, k)| k.iter()));
        for k in all {
            assert_eq!(*k, k.to_lowercase());
        }
    }
}
