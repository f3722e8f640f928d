use crate::config::DEFAULT_CONSULTATION_MINUTES;
use crate::extraction::keywords::{contains_any, CHRONIC_DISEASE_TRIGGERS, MENTAL_HEALTH_TRIGGERS};
use crate::extraction::FeatureSet;

use super::types::RecommendDefaults;

/// Age from which the 75+ health assessment applies.
pub const HEALTH_ASSESSMENT_MIN_AGE: u32 = 75;

/// Resolved inputs every rule is evaluated against.
pub struct RuleInput<'a> {
    pub features: &'a FeatureSet,
    pub lower_text: String,
    pub duration_minutes: u32,
    pub age: Option<u32>,
}

impl<'a> RuleInput<'a> {
    /// Feature values first, then caller defaults, then the standard duration.
    pub fn resolve(features: &'a FeatureSet, defaults: &RecommendDefaults) -> Self {
        Self {
            features,
            lower_text: features.raw_text.to_lowercase(),
            duration_minutes: features
                .duration_minutes
                .or(defaults.duration_minutes)
                .unwrap_or(DEFAULT_CONSULTATION_MINUTES),
            age: features.age.or(defaults.age),
        }
    }
}

/// One recommendation rule: when `trigger` holds, recommend `code`.
pub struct Rule {
    pub name: &'static str,
    pub trigger: fn(&RuleInput) -> bool,
    pub code: &'static str,
    pub confidence: f64,
    pub reason: fn(&RuleInput) -> String,
    pub compliance_notes: &'static [&'static str],
}

/// The rule table, in evaluation order. Order decides ties and truncation.
///
/// The first four partition consultation length, so exactly one of them fires.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "level_a_brief",
            trigger: |i| i.duration_minutes < 6,
            code: "3",
            confidence: 0.90,
            reason: |i| {
                format!(
                    "Consultation lasted {} minutes, consistent with a Level A brief consultation",
                    i.duration_minutes
                )
            },
            compliance_notes: &["Confirm the consultation met the brief consultation requirements"],
        },
        Rule {
            name: "level_b_standard",
            trigger: |i| (6..=20).contains(&i.duration_minutes),
            code: "23",
            confidence: 0.95,
            reason: |i| {
                format!(
                    "Consultation lasted {} minutes, consistent with a Level B standard consultation",
                    i.duration_minutes
                )
            },
            compliance_notes: &["Most commonly billed GP consultation item"],
        },
        Rule {
            name: "level_c_long",
            trigger: |i| (21..=40).contains(&i.duration_minutes),
            code: "36",
            confidence: 0.90,
            reason: |i| {
                format!(
                    "Consultation lasted {} minutes, consistent with a Level C long consultation",
                    i.duration_minutes
                )
            },
            compliance_notes: &["Requires a detailed history and comprehensive examination"],
        },
        Rule {
            name: "level_d_prolonged",
            trigger: |i| i.duration_minutes > 40,
            code: "44",
            confidence: 0.85,
            reason: |i| {
                format!(
                    "Consultation lasted {} minutes, consistent with a Level D prolonged consultation",
                    i.duration_minutes
                )
            },
            compliance_notes: &["Complex medical problem requiring detailed counselling"],
        },
        Rule {
            name: "mental_health_plan",
            trigger: |i| contains_any(&i.lower_text, MENTAL_HEALTH_TRIGGERS),
            code: "721",
            confidence: 0.80,
            reason: |_| {
                "Mental health content detected; a GP Mental Health Treatment Plan may be appropriate"
                    .to_string()
            },
            compliance_notes: &[
                "A mental health assessment must be completed",
                "A treatment plan must be prepared",
            ],
        },
        Rule {
            name: "health_assessment_75_plus",
            trigger: |i| i.age.is_some_and(|a| a >= HEALTH_ASSESSMENT_MIN_AGE),
            code: "703",
            confidence: 0.70,
            reason: |i| {
                format!(
                    "Patient is {} years old and eligible for the 75+ health assessment",
                    i.age.unwrap_or(HEALTH_ASSESSMENT_MIN_AGE)
                )
            },
            compliance_notes: &[
                "Annual health assessment",
                "Requires a comprehensive health examination",
            ],
        },
        Rule {
            name: "chronic_disease_plan",
            trigger: |i| contains_any(&i.lower_text, CHRONIC_DISEASE_TRIGGERS),
            code: "732",
            confidence: 0.75,
            reason: |_| {
                "Chronic condition detected; a GP Management Plan may be appropriate".to_string()
            },
            compliance_notes: &[
                "Chronic disease management",
                "A comprehensive management plan must be prepared",
            ],
        },
    ]
}
