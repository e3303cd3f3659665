//! CNIC number extraction.
//!
//! The CNIC is 13 digits printed in a 5-7-1 grouping (`42101-1234567-8`).
//! OCR often drops the hyphens, so a bare 13-digit run is accepted and
//! regrouped into the canonical form.

use once_cell::sync::Lazy;
use regex::Regex;

/// Total digits in a CNIC.
pub const CNIC_DIGITS: usize = 13;

// ASCII digit classes on purpose: the regrouping below slices by byte
// offset, which is only safe when every matched digit is one byte wide.
static GROUPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{5}-[0-9]{7}-[0-9]\b").expect("valid regex"));
static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Find the document number in OCR text.
///
/// Prefers the canonical grouped form; falls back to the first contiguous
/// 13-digit run, regrouped. Returns `None` when neither appears.
pub fn extract_document_number(text: &str) -> Option<String> {
    if let Some(m) = GROUPED.find(text) {
        return Some(m.as_str().to_string());
    }
    DIGIT_RUNS
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|run| run.len() == CNIC_DIGITS)
        .map(regroup)
}

/// Regroup a contiguous 13-digit run into the 5-7-1 form.
fn regroup(run: &str) -> String {
    format!("{}-{}-{}", &run[0..5], &run[5..12], &run[12..13])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_form_is_found_verbatim() {
        assert_eq!(
            extract_document_number("...42101-1234567-8...").as_deref(),
            Some("42101-1234567-8")
        );
    }

    #[test]
    fn bare_run_is_regrouped() {
        assert_eq!(
            extract_document_number("...4210112345678...").as_deref(),
            Some("42101-1234567-8")
        );
    }

    #[test]
    fn grouped_form_wins_over_bare_run() {
        let text = "9999999999999 then 42101-1234567-8";
        assert_eq!(
            extract_document_number(text).as_deref(),
            Some("42101-1234567-8")
        );
    }

    #[test]
    fn wrong_length_runs_are_ignored() {
        assert_eq!(extract_document_number("123456789012"), None); // 12 digits
        assert_eq!(extract_document_number("12345678901234"), None); // 14 digits
        assert_eq!(extract_document_number(""), None);
    }

    #[test]
    fn first_13_digit_run_is_taken() {
        let text = "phone 03001234567 cnic 4210112345678 other 5310198765432";
        assert_eq!(
            extract_document_number(text).as_deref(),
            Some("42101-1234567-8")
        );
    }
}
