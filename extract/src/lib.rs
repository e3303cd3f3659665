//! Structured field extraction from noisy identity-card OCR text.
//!
//! Extraction is best-effort and total: no operation here panics or errors.
//! A field that cannot be resolved stays `None` — it is never guessed.

pub mod dates;
pub mod document_number;
pub mod name;

pub use dates::extract_dates;
pub use document_number::extract_document_number;
pub use name::extract_full_name;

use verid_types::ExtractedFields;

/// Extract every supported field from one OCR text.
///
/// Dates are assigned by order of appearance: the first date-like substring
/// becomes the date of birth, the second the issue date. This mirrors the
/// field order printed on the card face; it is a documented convention, not
/// a structural guarantee.
pub fn extract_all(text: &str) -> ExtractedFields {
    let mut dates = extract_dates(text).into_iter();
    ExtractedFields {
        document_number: extract_document_number(text),
        full_name: extract_full_name(text),
        date_of_birth: dates.next(),
        issue_date: dates.next(),
    }
}
