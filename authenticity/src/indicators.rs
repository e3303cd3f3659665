//! The fixed indicator set.

use serde::{Deserialize, Serialize};

/// One independent boolean authenticity check over OCR text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Issuing-authority boilerplate phrases are present.
    IssuerBoilerplate,
    /// At least one Urdu (Arabic-block) code point is present.
    UrduScript,
    /// The grouped CNIC pattern, or a contiguous 13-digit run, is present.
    IdentifierPattern,
    /// A date-like substring is present.
    DateText,
    /// Field-label keywords (name, address, signature) are present.
    FieldLabels,
    /// Negative indicator: no keywords of another document type appear.
    /// Holds (true) when all such keywords are absent.
    NoForeignDocumentTerms,
}

const ISSUER_PHRASES: &[&str] = &[
    "national database",
    "registration authority",
    "nadra",
    "islamic republic of pakistan",
];

const FIELD_LABELS: &[&str] = &["name", "father", "address", "signature", "identity"];

const FOREIGN_DOCUMENT_TERMS: &[&str] = &["passport", "driving", "licence", "license", "visa"];

impl Indicator {
    /// Every indicator, in canonical order.
    pub const ALL: [Indicator; 6] = [
        Indicator::IssuerBoilerplate,
        Indicator::UrduScript,
        Indicator::IdentifierPattern,
        Indicator::DateText,
        Indicator::FieldLabels,
        Indicator::NoForeignDocumentTerms,
    ];

    /// Stable snake_case name, used in assessments and rejection reasons.
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::IssuerBoilerplate => "issuer_boilerplate",
            Indicator::UrduScript => "urdu_script",
            Indicator::IdentifierPattern => "identifier_pattern",
            Indicator::DateText => "date_text",
            Indicator::FieldLabels => "field_labels",
            Indicator::NoForeignDocumentTerms => "no_foreign_document_terms",
        }
    }

    /// Evaluate this indicator against raw OCR text.
    pub fn evaluate(&self, text: &str) -> bool {
        match self {
            Indicator::IssuerBoilerplate => contains_any(text, ISSUER_PHRASES),
            Indicator::UrduScript => has_urdu_script(text),
            Indicator::IdentifierPattern => {
                verid_extract::extract_document_number(text).is_some()
            }
            Indicator::DateText => !verid_extract::extract_dates(text).is_empty(),
            Indicator::FieldLabels => contains_any(text, FIELD_LABELS),
            Indicator::NoForeignDocumentTerms => foreign_terms(text).is_empty(),
        }
    }
}

/// The foreign-document keywords present in the text, for rejection reasons.
pub fn foreign_terms(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    FOREIGN_DOCUMENT_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .copied()
        .collect()
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    let lower = text.to_lowercase();
    phrases.iter().any(|phrase| lower.contains(phrase))
}

fn has_urdu_script(text: &str) -> bool {
    text.chars()
        .any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}
