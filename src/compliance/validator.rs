use std::sync::Arc;

use serde_json::Value;

use crate::catalog::Catalog;

use super::messages::ComplianceMessages;
use super::types::{ComplianceReport, ConsultationDetails, PatientHistory};

/// Base consultation levels; at most one may be billed per encounter.
pub const CONSULTATION_LEVEL_CODES: [&str; 4] = ["3", "23", "36", "44"];

/// Checks a chosen set of MBS items against schedule rules.
pub struct ComplianceValidator {
    catalog: Arc<Catalog>,
}

impl ComplianceValidator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Validate `codes` for one encounter.
    ///
    /// Only conflicting consultation levels are errors. Unknown items,
    /// out-of-band durations and recent repeats are warnings.
    pub fn validate<S: AsRef<str>>(
        &self,
        codes: &[S],
        history: Option<&PatientHistory>,
        details: &ConsultationDetails,
    ) -> ComplianceReport {
        let mut report = ComplianceReport::default();

        Self::check_mutual_exclusion(codes, &mut report);
        self.check_items(codes, details, &mut report);
        if let Some(history) = history {
            Self::check_history(codes, history, &mut report);
        }

        if report.errors.is_empty() && report.warnings.is_empty() {
            report.suggestions.push(ComplianceMessages::all_clear());
        } else {
            report.suggestions.push(ComplianceMessages::review_requirements());
        }
        report.is_compliant = report.errors.is_empty();

        report
            .details
            .insert("items_checked".into(), Value::from(codes.len()));
        if let Some(minutes) = details.duration_minutes {
            report
                .details
                .insert("duration_minutes".into(), Value::from(minutes));
        }

        tracing::info!(
            items = codes.len(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            compliant = report.is_compliant,
            "Compliance check complete"
        );

        report
    }

    fn check_mutual_exclusion<S: AsRef<str>>(codes: &[S], report: &mut ComplianceReport) {
        let levels: Vec<&str> = codes
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| CONSULTATION_LEVEL_CODES.contains(c))
            .collect();

        if levels.len() > 1 {
            report
                .errors
                .push(ComplianceMessages::multiple_consultation_levels(&levels));
        }
    }

    fn check_items<S: AsRef<str>>(
        &self,
        codes: &[S],
        details: &ConsultationDetails,
        report: &mut ComplianceReport,
    ) {
        for code in codes.iter().map(AsRef::as_ref) {
            let Some(item) = self.catalog.lookup(code) else {
                report.warnings.push(ComplianceMessages::not_configured(code));
                continue;
            };

            // Unknown duration: band cannot be checked.
            let Some(minutes) = details.duration_minutes else {
                continue;
            };

            if !item.duration_band.contains(minutes) {
                report.warnings.push(ComplianceMessages::duration_out_of_band(
                    code,
                    item.duration_band.label(),
                    minutes,
                ));
            }
        }
    }

    fn check_history<S: AsRef<str>>(
        codes: &[S],
        history: &PatientHistory,
        report: &mut ComplianceReport,
    ) {
        for code in codes.iter().map(AsRef::as_ref) {
            if history.recent_claims.iter().any(|c| c == code) {
                report.warnings.push(ComplianceMessages::recently_claimed(code));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;

    fn validator() -> ComplianceValidator {
        ComplianceValidator::new(Arc::new(Catalog::seeded()))
    }

    #[test]
    fn two_consultation_levels_conflict() {
        let report = validator().validate(&["23", "36"], None, &ConsultationDetails::with_duration(15));
        assert!(!report.is_compliant);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("multiple standard consultation levels"));
    }

    #[test]
    fn single_level_has_no_conflict() {
        let report = validator().validate(&["23"], None, &ConsultationDetails::with_duration(15));
        assert!(report.is_compliant);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(
            report.suggestions,
            vec!["All selected items meet basic compliance requirements"]
        );
    }

    #[test]
    fn level_with_other_items_is_allowed() {
        let report = validator().validate(
            &["23", "721", "732"],
            None,
            &ConsultationDetails::with_duration(15),
        );
        assert!(report.is_compliant);
    }

    #[test]
    fn out_of_band_duration_warns_without_error() {
        let report = validator().validate(&["23"], None, &ConsultationDetails::with_duration(25));
        assert!(report.is_compliant);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Item 23"));
        assert!(report.warnings[0].contains("6-20 minutes"));
        assert_eq!(
            report.suggestions,
            vec!["Review item requirements against the MBS schedule rules"]
        );
    }

    #[test]
    fn each_base_band_is_checked() {
        let v = validator();
        for (code, ok, bad) in [("3", 5, 6), ("23", 20, 21), ("36", 20, 41), ("44", 41, 40)] {
            let good = v.validate(&[code], None, &ConsultationDetails::with_duration(ok));
            assert!(good.warnings.is_empty(), "item {code} at {ok}");
            let off = v.validate(&[code], None, &ConsultationDetails::with_duration(bad));
            assert_eq!(off.warnings.len(), 1, "item {code} at {bad}");
        }
    }

    #[test]
    fn unconstrained_items_never_warn_on_duration() {
        let report =
            validator().validate(&["721", "10997"], None, &ConsultationDetails::with_duration(2));
        assert!(report.warnings.is_empty());
    }

    fn custom_validator(json: &str) -> ComplianceValidator {
        let items: Vec<CatalogItem> = serde_json::from_str(json).unwrap();
        ComplianceValidator::new(Arc::new(Catalog::from_items(items)))
    }

    #[test]
    fn annotated_band_is_enforced_with_its_own_label() {
        let v = custom_validator(r#"[{"item_number":"23","duration":"6-20 minutes (standard)"}]"#);
        assert!(v
            .validate(&["23"], None, &ConsultationDetails::with_duration(15))
            .warnings
            .is_empty());

        let report = v.validate(&["23"], None, &ConsultationDetails::with_duration(30));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("6-20 minutes (standard)"));
    }

    #[test]
    fn item_without_band_never_warns_on_duration() {
        let v = custom_validator(r#"[{"item_number":"23","description":"Level B"}]"#);
        let report = v.validate(&["23"], None, &ConsultationDetails::with_duration(90));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn recent_claim_warns() {
        let history = PatientHistory::with_recent_claims(["721"]);
        let report = validator().validate(
            &["721"],
            Some(&history),
            &ConsultationDetails::with_duration(25),
        );
        assert!(report.is_compliant);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("claimed recently"));
    }

    #[test]
    fn unknown_code_is_a_warning() {
        let report = validator().validate(&["9999"], None, &ConsultationDetails::with_duration(15));
        assert!(report.is_compliant);
        assert_eq!(report.warnings, vec!["MBS item 9999 is not configured in the schedule"]);
    }

    #[test]
    fn missing_duration_skips_band_check() {
        let report = validator().validate(&["3", "44"], None, &ConsultationDetails::default());
        assert!(!report.is_compliant);
        assert!(report.warnings.is_empty());
        assert!(!report.details.contains_key("duration_minutes"));
    }

    #[test]
    fn errors_and_warnings_accumulate() {
        let history = PatientHistory::with_recent_claims(["23"]);
        let report = validator().validate(
            &["23".to_string(), "44".to_string()],
            Some(&history),
            &ConsultationDetails::with_duration(30),
        );
        assert!(!report.is_compliant);
        assert_eq!(report.errors.len(), 1);
        // 23 and 44 both out of band at 30 minutes, 23 recently claimed
        assert_eq!(report.warnings.len(), 3);
        assert_eq!(report.details["items_checked"], 2);
        assert_eq!(report.details["duration_minutes"], 30);
    }

    #[test]
    fn empty_selection_is_compliant() {
        let codes: [&str; 0] = [];
        let report = validator().validate(&codes, None, &ConsultationDetails::with_duration(15));
        assert!(report.is_compliant);
        assert_eq!(report.suggestions.len(), 1);
    }
}
