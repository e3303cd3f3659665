//! Date-like substring extraction.

use once_cell::sync::Lazy;
use regex::Regex;

// Day/month/year with `/`, `-`, or `.` separators. Matches are kept
// verbatim; canonicalization happens at comparison time.
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]{1,2}[./-][0-9]{1,2}[./-][0-9]{2,4}\b").expect("valid regex")
});

/// All date-like substrings in order of appearance.
pub fn extract_dates(text: &str) -> Vec<String> {
    DATE.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_dates_in_order_of_appearance() {
        let dates = extract_dates("born 01/01/1990, issued 15-06-2015, expires 15.06.2025");
        assert_eq!(dates, vec!["01/01/1990", "15-06-2015", "15.06.2025"]);
    }

    #[test]
    fn short_year_and_single_digit_forms() {
        let dates = extract_dates("1/2/90 and 03-4-1985");
        assert_eq!(dates, vec!["1/2/90", "03-4-1985"]);
    }

    #[test]
    fn cnic_number_is_not_a_date() {
        assert!(extract_dates("42101-1234567-8").is_empty());
    }

    #[test]
    fn no_dates_in_plain_text() {
        assert!(extract_dates("no dates here, just words").is_empty());
    }
}
