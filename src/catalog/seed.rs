use super::types::{CatalogItem, DurationBand};

/// The fixed schedule written when no catalog file exists yet.
pub fn seed_items() -> Vec<CatalogItem> {
    vec![
        item(
            "3",
            "Level A consultation - brief",
            "A1",
            18.95,
            DurationBand::parse("< 6 minutes"),
            &["Brief consultation", "Straightforward clinical problem"],
        ),
        item(
            "23",
            "Level B consultation - standard",
            "A1",
            40.85,
            DurationBand::parse("6-20 minutes"),
            &[
                "Standard consultation",
                "Taking history",
                "Clinical examination",
                "Management plan",
            ],
        ),
        item(
            "36",
            "Level C consultation - long",
            "A1",
            76.95,
            DurationBand::parse("20-40 minutes"),
            &[
                "Detailed history",
                "Comprehensive examination",
                "Complex problem",
            ],
        ),
        item(
            "44",
            "Level D consultation - prolonged",
            "A1",
            113.30,
            DurationBand::parse("> 40 minutes"),
            &[
                "Extended consultation",
                "Complex medical problem",
                "Detailed counselling",
            ],
        ),
        item(
            "721",
            "GP Mental Health Treatment Plan",
            "A20",
            96.65,
            DurationBand::parse("> 20 minutes"),
            &[
                "Mental health assessment",
                "Treatment plan development",
                "Referral arrangements",
            ],
        ),
        item(
            "723",
            "GP Mental Health Treatment Plan Review",
            "A20",
            75.05,
            DurationBand::parse("> 20 minutes"),
            &[
                "Review of mental health treatment plan",
                "Progress assessment",
            ],
        ),
        item(
            "703",
            "Health assessment for person aged 75 years and older",
            "A14",
            144.80,
            DurationBand::parse("> 30 minutes"),
            &[
                "Comprehensive health assessment",
                "Age 75+",
                "Annual assessment",
            ],
        ),
        item(
            "701",
            "Brief health assessment",
            "A14",
            63.75,
            DurationBand::parse("< 30 minutes"),
            &["Health assessment", "Specific patient groups"],
        ),
        item(
            "732",
            "GP Management Plan (GPMP)",
            "A15",
            150.35,
            DurationBand::parse("> 20 minutes"),
            &[
                "Chronic disease",
                "Comprehensive management plan",
                "Multidisciplinary care",
            ],
        ),
        item(
            "10997",
            "After hours consultation - urgent",
            "A11",
            137.95,
            DurationBand::parse("Variable"),
            &[
                "After hours service",
                "Urgent medical condition",
                "Outside normal hours",
            ],
        ),
    ]
}

fn item(
    code: &str,
    description: &str,
    category: &str,
    fee: f64,
    duration_band: DurationBand,
    requirements: &[&str],
) -> CatalogItem {
    CatalogItem {
        code: code.into(),
        description: description.into(),
        category: category.into(),
        fee,
        schedule_fee: fee,
        benefit: 100.0,
        duration_band,
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_the_ten_documented_codes_in_order() {
        let codes: Vec<String> = seed_items().into_iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            ["3", "23", "36", "44", "721", "723", "703", "701", "732", "10997"]
        );
    }

    #[test]
    fn only_base_consultations_carry_constrained_bands() {
        for item in seed_items() {
            let base = matches!(item.code.as_str(), "3" | "23" | "36" | "44");
            assert_eq!(item.duration_band.is_constrained(), base, "item {}", item.code);
        }
    }

    #[test]
    fn seed_fees_match_schedule_fees() {
        for item in seed_items() {
            assert_eq!(item.fee, item.schedule_fee);
            assert_eq!(item.benefit, 100.0);
        }
    }
}
