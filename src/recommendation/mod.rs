pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{RecommendationEngine, MAX_RECOMMENDATIONS};
pub use rules::{default_rules, Rule, RuleInput};
pub use types::{RecommendDefaults, Recommendation};
