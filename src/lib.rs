pub mod catalog; // MBS schedule reference data
pub mod claim; // Claim assembly and totals
pub mod compliance; // Item combination checks
pub mod config; // Data paths and app constants
pub mod extraction; // Note → FeatureSet
pub mod pipeline; // Note → items, consultation summary
pub mod recommendation; // FeatureSet → ranked MBS items

pub use catalog::{BandKind, Catalog, CatalogError, CatalogItem, DurationBand};
pub use compliance::{ComplianceReport, ComplianceValidator, ConsultationDetails, PatientHistory};
pub use extraction::{extract, FeatureSet};
pub use pipeline::{ConsultationAnalysis, ConsultationPipeline, SummaryContext};
pub use recommendation::{RecommendDefaults, Recommendation, RecommendationEngine};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` overrides the default filter.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
