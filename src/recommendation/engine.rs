use std::sync::Arc;

use crate::catalog::Catalog;
use crate::extraction::FeatureSet;

use super::rules::{default_rules, Rule, RuleInput};
use super::types::{RecommendDefaults, Recommendation};

/// Maximum number of recommendations returned per consultation.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Maps a feature set to ranked MBS item candidates.
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    rules: Vec<Rule>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rules(catalog, default_rules())
    }

    /// Engine over a custom rule table (evaluated in the given order).
    pub fn with_rules(catalog: Arc<Catalog>, rules: Vec<Rule>) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluate every rule in order, then rank by descending confidence.
    ///
    /// A rule whose target item is not in the catalog is skipped. Ties keep
    /// rule order; the list is cut to [`MAX_RECOMMENDATIONS`].
    pub fn recommend(
        &self,
        features: &FeatureSet,
        defaults: &RecommendDefaults,
    ) -> Vec<Recommendation> {
        let input = RuleInput::resolve(features, defaults);

        let mut recommendations: Vec<Recommendation> = self
            .rules
            .iter()
            .filter(|rule| (rule.trigger)(&input))
            .filter_map(|rule| self.apply(rule, &input))
            .collect();

        // sort_by is stable: equal confidence keeps evaluation order
        recommendations.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        recommendations.truncate(MAX_RECOMMENDATIONS);

        tracing::info!(
            duration = input.duration_minutes,
            count = recommendations.len(),
            top = recommendations.first().map(|r| r.code.as_str()).unwrap_or("-"),
            "MBS recommendations computed"
        );

        recommendations
    }

    fn apply(&self, rule: &Rule, input: &RuleInput) -> Option<Recommendation> {
        let Some(item) = self.catalog.lookup(rule.code) else {
            tracing::debug!(
                rule = rule.name,
                code = rule.code,
                "Rule fired but item is not configured, skipping"
            );
            return None;
        };

        tracing::debug!(rule = rule.name, code = rule.code, "Rule fired");

        Some(Recommendation {
            code: item.code.clone(),
            description: item.description.clone(),
            confidence: rule.confidence,
            reason: (rule.reason)(input),
            compliance_notes: rule.compliance_notes.iter().map(|n| n.to_string()).collect(),
        })
    }
}
