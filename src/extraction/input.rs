use super::patterns::{MEANINGFUL_CONTENT, SENSITIVE_PATTERNS};
use super::types::TextInputReport;

const MIN_TEXT_CHARS: usize = 10;
const MAX_TEXT_CHARS: usize = 10_000;

/// Screen raw note text before it goes through extraction.
pub fn validate_text_input(text: &str) -> TextInputReport {
    let text_length = text.chars().count();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if text_length < MIN_TEXT_CHARS {
        errors.push(format!(
            "Text is too short: at least {MIN_TEXT_CHARS} characters are required"
        ));
    } else if text_length > MAX_TEXT_CHARS {
        warnings.push("Text is very long and may slow down processing".to_string());
    }

    if !MEANINGFUL_CONTENT.is_match(text) {
        errors.push("Text contains no meaningful content".to_string());
    }

    if SENSITIVE_PATTERNS.iter().any(|re| re.is_match(text)) {
        warnings.push(
            "Text may contain sensitive identifiers; check privacy before storing".to_string(),
        );
    }

    TextInputReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        text_length,
        word_count: text.split_whitespace().count(),
    }
}
