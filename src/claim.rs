use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::Catalog;

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("No billable MBS items among: {0}")]
    NoBillableItems(String),
}

/// One billed item on a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimLine {
    pub code: String,
    pub description: String,
    pub fee: f64,
    pub benefit: f64,
}

/// Claim payload ready for rendering or submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: String,
    pub claim_date: NaiveDateTime,
    pub consultation_date: NaiveDate,
    pub patient: Map<String, Value>,
    pub provider: Map<String, Value>,
    pub items: Vec<ClaimLine>,
    pub total_fee: f64,
    pub total_benefit: f64,
}

/// Assemble a claim from selected item codes.
///
/// Codes missing from the catalog are left off the claim; a claim with no
/// resolvable items is an error.
pub fn build_claim<S: AsRef<str>>(
    catalog: &Catalog,
    codes: &[S],
    patient: Map<String, Value>,
    provider: Map<String, Value>,
    consultation_date: NaiveDate,
) -> Result<Claim, ClaimError> {
    let items: Vec<ClaimLine> = codes
        .iter()
        .filter_map(|code| catalog.lookup(code.as_ref()))
        .map(|item| ClaimLine {
            code: item.code.clone(),
            description: item.description.clone(),
            fee: item.fee,
            benefit: item.benefit_amount(),
        })
        .collect();

    if items.is_empty() {
        let requested: Vec<&str> = codes.iter().map(|c| c.as_ref()).collect();
        return Err(ClaimError::NoBillableItems(requested.join(", ")));
    }

    let now = chrono::Local::now().naive_local();
    let claim = Claim {
        claim_id: new_claim_id(now.date()),
        claim_date: now,
        consultation_date,
        patient,
        provider,
        total_fee: items.iter().map(|l| l.fee).sum(),
        total_benefit: items.iter().map(|l| l.benefit).sum(),
        items,
    };

    tracing::info!(
        claim_id = %claim.claim_id,
        items = claim.items.len(),
        total_fee = claim.total_fee,
        "Claim assembled"
    );

    Ok(claim)
}

/// `CLM-YYYYMMDD-XXXXXXXX` with an upper-case random hex suffix.
fn new_claim_id(date: NaiveDate) -> String {
    let suffix: String = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("CLM-{}-{}", date.format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn totals_over_known_items() {
        let catalog = Catalog::seeded();
        let claim = build_claim(&catalog, &["23", "721"], Map::new(), Map::new(), date()).unwrap();

        assert_eq!(claim.items.len(), 2);
        assert!((claim.total_fee - (40.85 + 96.65)).abs() < 1e-9);
        assert!((claim.total_benefit - (40.85 + 96.65)).abs() < 1e-9);
        assert_eq!(claim.consultation_date, date());
    }

    #[test]
    fn unknown_codes_are_left_off() {
        let catalog = Catalog::seeded();
        let claim = build_claim(&catalog, &["23", "nope"], Map::new(), Map::new(), date()).unwrap();
        assert_eq!(claim.items.len(), 1);
        assert_eq!(claim.items[0].code, "23");
    }

    #[test]
    fn no_known_codes_is_an_error() {
        let catalog = Catalog::seeded();
        let err = build_claim(&catalog, &["x", "y"], Map::new(), Map::new(), date()).unwrap_err();
        assert!(matches!(err, ClaimError::NoBillableItems(ref s) if s == "x, y"));
    }

    #[test]
    fn claim_id_shape() {
        let id = new_claim_id(date());
        assert!(id.starts_with("CLM-20240115-"));
        let suffix = &id["CLM-20240115-".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn parties_are_carried_verbatim() {
        let catalog = Catalog::seeded();
        let mut patient = Map::new();
        patient.insert("medicare_number".into(), Value::from("2123456789"));
        let claim = build_claim(&catalog, &["3"], patient, Map::new(), date()).unwrap();
        assert_eq!(claim.patient["medicare_number"], "2123456789");
    }
}
