use std::sync::LazyLock;

use regex::Regex;

/// A duration pattern and the factor that converts its unit to minutes.
pub struct DurationPattern {
    pub regex: Regex,
    pub minutes_per_unit: u32,
}

/// Scanned in order; minutes before hours, first match wins.
pub static DURATION_PATTERNS: LazyLock<Vec<DurationPattern>> = LazyLock::new(|| {
    vec![
        DurationPattern {
            regex: Regex::new(r"(\d+)\s*(?:minutes?|mins?|分钟?)").expect("valid regex"),
            minutes_per_unit: 1,
        },
        DurationPattern {
            regex: Regex::new(r"(\d+)\s*(?:hours?|hrs?|小时?)").expect("valid regex"),
            minutes_per_unit: 60,
        },
    ]
});

/// Scanned in order; first match wins.
pub static AGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)\s*(?:years?\s*old|岁)",
        r"age[d]?\s*(\d+)",
        r"患者.*?(\d+)岁",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

pub static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?。！？]").expect("valid regex"));

pub static PATIENT_NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:patient|name|患者|姓名)[:\s]*([A-Za-z\s]+)",
        r"(?i)(?:mr|mrs|ms|miss|dr)\.?\s+([A-Za-z\s]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

pub static PATIENT_AGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:years?\s*old|岁|y/?o)").expect("valid regex")
});

pub static MEDICARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{10})\b").expect("valid regex"));

pub static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:0|\+61)\d{9,10}").expect("valid regex"));

pub static MEANINGFUL_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z\x{4e00}-\x{9fa5}]+").expect("valid regex"));

/// Long digit runs (IDs, phone numbers) and e-mail addresses.
pub static SENSITIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b\d{9,}\b",
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// First capture group of the first matching pattern, parsed as `u32`.
/// A capture that does not fit falls through to the next pattern.
pub fn first_number(patterns: &[Regex], text: &str) -> Option<u32> {
    patterns.iter().find_map(|re| capture_u32(re, text))
}

pub fn capture_u32(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)?.get(1)?.as_str().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(DURATION_PATTERNS.len(), 2);
        assert_eq!(AGE_PATTERNS.len(), 3);
        assert_eq!(PATIENT_NAME_PATTERNS.len(), 2);
        assert_eq!(SENSITIVE_PATTERNS.len(), 2);
        assert!(SENTENCE_SPLIT.is_match("a. b"));
    }

    #[test]
    fn first_number_respects_order() {
        assert_eq!(first_number(&AGE_PATTERNS, "80 years old, aged 81"), Some(80));
        assert_eq!(first_number(&AGE_PATTERNS, "aged 67"), Some(67));
        assert_eq!(first_number(&AGE_PATTERNS, "患者男，45岁"), Some(45));
        assert_eq!(first_number(&AGE_PATTERNS, "no age here"), None);
    }

    #[test]
    fn overflowing_capture_falls_through() {
        assert_eq!(
            first_number(&AGE_PATTERNS, "99999999999 years old, aged 70"),
            Some(70)
        );
    }

    #[test]
    fn meaningful_content_detects_latin_and_cjk() {
        assert!(MEANINGFUL_CONTENT.is_match("abc"));
        assert!(MEANINGFUL_CONTENT.is_match("头痛"));
        assert!(!MEANINGFUL_CONTENT.is_match("123 ... !!"));
    }
}
