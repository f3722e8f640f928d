//! Note → features → ranked MBS items, plus a plain-text consultation summary.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::compliance::ComplianceValidator;
use crate::extraction::{extract, FeatureSet};
use crate::recommendation::{RecommendDefaults, Recommendation, RecommendationEngine};

/// Number of recommended items listed in a summary.
const SUMMARY_ITEMS: usize = 3;

/// Output of running one note through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationAnalysis {
    pub features: FeatureSet,
    pub recommendations: Vec<Recommendation>,
}

/// Record-level facts the summary header needs.
#[derive(Debug, Clone, Default)]
pub struct SummaryContext {
    pub consultation_date: Option<NaiveDate>,
    pub patient_id: Option<String>,
}

impl ConsultationAnalysis {
    /// Plain-text summary; lines without content are left out.
    pub fn summary(&self, context: &SummaryContext) -> String {
        let mut parts = Vec::new();

        if let Some(date) = context.consultation_date {
            parts.push(format!("Date: {date}"));
        }
        if let Some(id) = &context.patient_id {
            parts.push(format!("Patient ID: {id}"));
        }

        let f = &self.features;
        if !f.symptoms.is_empty() {
            let list: Vec<&str> = f.symptoms.iter().map(|s| s.as_str()).collect();
            parts.push(format!("Presenting symptoms: {}", list.join(", ")));
        }
        if !f.diagnoses.is_empty() {
            let list: Vec<&str> = f.diagnoses.iter().map(|d| d.as_str()).collect();
            parts.push(format!("Possible diagnoses: {}", list.join(", ")));
        }
        if !f.treatments.is_empty() {
            let list: Vec<&str> = f.treatments.iter().map(|t| t.as_str()).collect();
            parts.push(format!("Treatment approach: {}", list.join(", ")));
        }
        if !self.recommendations.is_empty() {
            let codes: Vec<&str> = self
                .recommendations
                .iter()
                .take(SUMMARY_ITEMS)
                .map(|r| r.code.as_str())
                .collect();
            parts.push(format!("Recommended MBS items: {}", codes.join(", ")));
        }
        if f.needs_followup {
            parts.push("Follow-up required".to_string());
        }

        parts.join("\n")
    }
}

/// Shared catalog plus the engines built on it.
pub struct ConsultationPipeline {
    catalog: Arc<Catalog>,
    engine: RecommendationEngine,
    validator: ComplianceValidator,
}

impl ConsultationPipeline {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            engine: RecommendationEngine::new(Arc::clone(&catalog)),
            validator: ComplianceValidator::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    pub fn validator(&self) -> &ComplianceValidator {
        &self.validator
    }

    /// Extract features from `text` and recommend items for them.
    pub fn analyze(&self, text: &str, defaults: &RecommendDefaults) -> ConsultationAnalysis {
        let features = extract(text);
        let recommendations = self.engine.recommend(&features, defaults);
        ConsultationAnalysis {
            features,
            recommendations,
        }
    }
}
