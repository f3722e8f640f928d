use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// DurationBand
// ---------------------------------------------------------------------------

/// Which consultation-length range a band text names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BandKind {
    /// Fewer than 6 minutes.
    UnderSix,
    /// 6 to 20 minutes inclusive.
    SixToTwenty,
    /// 20 to 40 minutes inclusive.
    TwentyToForty,
    /// More than 40 minutes.
    OverForty,
    #[default]
    Unconstrained,
}

impl BandKind {
    /// Classify band text by the range marker it contains, checked in
    /// this order: "< 6", "6-20", "20-40", "> 40". Whitespace is ignored.
    fn classify(text: &str) -> Self {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.contains("<6") {
            Self::UnderSix
        } else if compact.contains("6-20") {
            Self::SixToTwenty
        } else if compact.contains("20-40") {
            Self::TwentyToForty
        } else if compact.contains(">40") {
            Self::OverForty
        } else {
            Self::Unconstrained
        }
    }
}

/// Time-range eligibility attached to a schedule item.
///
/// Stored on disk as the human band text ("6-20 minutes"), which is kept
/// verbatim. Text naming none of the four consultation ranges places no
/// constraint on the consultation length; a record without a band is
/// unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DurationBand {
    text: String,
    kind: BandKind,
}

impl DurationBand {
    /// Parse band text such as "< 6 minutes" or "6-20 minutes (standard)".
    pub fn parse(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: BandKind::classify(text),
        }
    }

    pub fn kind(&self) -> BandKind {
        self.kind
    }

    /// Band text as written to the schedule file.
    pub fn label(&self) -> &str {
        &self.text
    }

    /// Whether a consultation of `minutes` length falls inside the band.
    pub fn contains(&self, minutes: u32) -> bool {
        match self.kind {
            BandKind::UnderSix => minutes < 6,
            BandKind::SixToTwenty => (6..=20).contains(&minutes),
            BandKind::TwentyToForty => (20..=40).contains(&minutes),
            BandKind::OverForty => minutes > 40,
            BandKind::Unconstrained => true,
        }
    }

    pub fn is_constrained(&self) -> bool {
        self.kind != BandKind::Unconstrained
    }
}

impl From<String> for DurationBand {
    fn from(text: String) -> Self {
        Self {
            kind: BandKind::classify(&text),
            text,
        }
    }
}

impl From<DurationBand> for String {
    fn from(band: DurationBand) -> Self {
        band.text
    }
}

// ---------------------------------------------------------------------------
// CatalogItem
// ---------------------------------------------------------------------------

/// One billable MBS schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "item_number")]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    pub schedule_fee: f64,
    /// Medicare benefit as a percentage of the schedule fee.
    #[serde(default)]
    pub benefit: f64,
    #[serde(default, rename = "duration")]
    pub duration_band: DurationBand,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl CatalogItem {
    /// Benefit amount paid for this item.
    pub fn benefit_amount(&self) -> f64 {
        self.schedule_fee * self.benefit / 100.0
    }
}

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog I/O failed ({0}): {1}")]
    Io(String, String),

    #[error("Catalog parse failed ({0}): {1}")]
    Parse(String, String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
