/// Message builder for compliance findings.
pub struct ComplianceMessages;

impl ComplianceMessages {
    pub fn multiple_consultation_levels(codes: &[&str]) -> String {
        format!(
            "Cannot bill multiple standard consultation levels in one encounter (items {})",
            codes.join(", "),
        )
    }

    pub fn not_configured(code: &str) -> String {
        format!("MBS item {code} is not configured in the schedule")
    }

    pub fn duration_out_of_band(code: &str, band: &str, minutes: u32) -> String {
        format!(
            "Item {code} requires a consultation duration of {band}; \
             recorded duration was {minutes} minutes",
        )
    }

    pub fn recently_claimed(code: &str) -> String {
        format!(
            "Item {code} was claimed recently; re-check the minimum time between claims",
        )
    }

    pub fn all_clear() -> String {
        "All selected items meet basic compliance requirements".to_string()
    }

    pub fn review_requirements() -> String {
        "Review item requirements against the MBS schedule rules".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_message_names_exact_band() {
        let msg = ComplianceMessages::duration_out_of_band("23", "6-20 minutes", 25);
        assert!(msg.contains("Item 23"));
        assert!(msg.contains("6-20 minutes"));
        assert!(msg.contains("25 minutes"));
    }

    #[test]
    fn level_conflict_lists_items() {
        let msg = ComplianceMessages::multiple_consultation_levels(&["23", "36"]);
        assert!(msg.contains("23, 36"));
    }
}
