//! Full-name extraction.
//!
//! Two heuristics, in order of confidence: text following an explicit
//! "Name" label on the same line, then the first run of consecutive
//! capitalized words on a line free of card boilerplate.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bname\b\s*[:\-]?\s*").expect("valid regex"));

// Two or more consecutive capitalized words.
static CAPITALIZED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)+\b").expect("valid regex"));

// Words that mark a line as card boilerplate rather than a holder name.
// Only consulted by the fallback heuristic.
const BOILERPLATE: &[&str] = &[
    "national",
    "database",
    "registration",
    "authority",
    "nadra",
    "islamic",
    "republic",
    "pakistan",
    "identity",
    "card",
    "signature",
    "holder",
    "passport",
    "driving",
    "licence",
    "license",
    "visa",
];

/// Find the card holder's full name in OCR text.
///
/// The labelled form wins; the capitalized-run fallback is lower-confidence
/// and skips lines containing issuer boilerplate. Lines labelled "Father
/// Name" are never taken for the holder's name.
pub fn extract_full_name(text: &str) -> Option<String> {
    for line in text.lines() {
        if line.to_lowercase().contains("father") {
            continue;
        }
        if let Some(label) = NAME_LABEL.find(line) {
            let rest = &line[label.end()..];
            if let Some(m) = CAPITALIZED_RUN.find(rest) {
                return Some(m.as_str().to_string());
            }
        }
    }

    for line in text.lines() {
        let lower = line.to_lowercase();
        if BOILERPLATE.iter().any(|word| lower.contains(word)) {
            continue;
        }
        if let Some(m) = CAPITALIZED_RUN.find(line) {
            return Some(m.as_str().to_string());
        }
    }

    None
}
