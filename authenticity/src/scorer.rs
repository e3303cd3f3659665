//! Indicator evaluation, score, and decision.

use crate::indicators::{foreign_terms, Indicator};
use serde::{Deserialize, Serialize};
use verid_types::VerificationParams;

/// Whether the text plausibly depicts a genuine instance of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticityDecision {
    Valid,
    Invalid,
}

/// The outcome of scoring one OCR text against the indicator set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticityAssessment {
    /// Every indicator with its evaluated value, in canonical order.
    pub indicators: Vec<(Indicator, bool)>,
    /// Count of true indicators.
    pub score: u32,
    /// `score / total × 100`.
    pub confidence_pct: f32,
    pub decision: AuthenticityDecision,
    /// One human-readable line per failed required condition; empty when valid.
    pub rejection_reasons: Vec<String>,
}

impl AuthenticityAssessment {
    pub fn is_valid(&self) -> bool {
        self.decision == AuthenticityDecision::Valid
    }

    /// The evaluated value of one indicator.
    pub fn indicator(&self, which: Indicator) -> bool {
        self.indicators
            .iter()
            .find(|(i, _)| *i == which)
            .map(|(_, v)| *v)
            .unwrap_or(false)
    }
}

/// Scores OCR text against the fixed indicator set.
pub struct AuthenticityScorer {
    min_true_indicators: u32,
}

impl AuthenticityScorer {
    pub fn new(params: &VerificationParams) -> Self {
        Self {
            min_true_indicators: params.min_true_indicators,
        }
    }

    /// Assess one OCR text.
    ///
    /// Valid requires score at or above the configured minimum AND the
    /// identifier-pattern indicator AND the negative indicator — a high
    /// score without those two is still invalid. Empty or whitespace-only
    /// text scores 0 and is invalid.
    pub fn assess(&self, text: &str) -> AuthenticityAssessment {
        let total = Indicator::ALL.len() as u32;

        if text.trim().is_empty() {
            return AuthenticityAssessment {
                indicators: Indicator::ALL.iter().map(|i| (*i, false)).collect(),
                score: 0,
                confidence_pct: 0.0,
                decision: AuthenticityDecision::Invalid,
                rejection_reasons: vec!["no text recognized on the document".to_string()],
            };
        }

        let indicators: Vec<(Indicator, bool)> = Indicator::ALL
            .iter()
            .map(|i| (*i, i.evaluate(text)))
            .collect();
        let score = indicators.iter().filter(|(_, v)| *v).count() as u32;
        let confidence_pct = score as f32 / total as f32 * 100.0;

        let identifier_ok = indicators
            .iter()
            .any(|(i, v)| *i == Indicator::IdentifierPattern && *v);
        let negative_ok = indicators
            .iter()
            .any(|(i, v)| *i == Indicator::NoForeignDocumentTerms && *v);

        let mut rejection_reasons = Vec::new();
        if score < self.min_true_indicators {
            rejection_reasons.push(format!(
                "only {score} of {total} authenticity indicators matched (need {})",
                self.min_true_indicators
            ));
        }
        if !identifier_ok {
            rejection_reasons
                .push("no national identity number pattern found in the text".to_string());
        }
        if !negative_ok {
            rejection_reasons.push(format!(
                "text mentions a different document type: {}",
                foreign_terms(text).join(", ")
            ));
        }

        let decision = if rejection_reasons.is_empty() {
            AuthenticityDecision::Valid
        } else {
            AuthenticityDecision::Invalid
        };

        AuthenticityAssessment {
            indicators,
            score,
            confidence_pct,
            decision,
            rejection_reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> AuthenticityScorer {
        AuthenticityScorer::new(&VerificationParams::default())
    }

    const GENUINE_TEXT: &str = "\
ISLAMIC REPUBLIC OF PAKISTAN
National Identity Card شناختی کارڈ
Name: Muhammad Ahmad Khan
42101-1234567-8
Date of Birth 01/01/1990
Holder's Signature";

    #[test]
    fn genuine_card_text_is_valid() {
        let assessment = scorer().assess(GENUINE_TEXT);
        assert_eq!(assessment.score, 6);
        assert!(assessment.is_valid());
        assert!(assessment.rejection_reasons.is_empty());
        assert!((assessment.confidence_pct - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_text_scores_zero_and_is_invalid() {
        for text in ["", "   ", "\n\t "] {
            let assessment = scorer().assess(text);
            assert_eq!(assessment.score, 0);
            assert_eq!(assessment.confidence_pct, 0.0);
            assert!(!assessment.is_valid());
        }
    }

    #[test]
    fn missing_identifier_is_invalid_regardless_of_score() {
        // Everything except the identifier pattern.
        let text = "\
ISLAMIC REPUBLIC OF PAKISTAN شناختی
Name and Address and Signature
Date of Birth 01/01/1990";
        let assessment = scorer().assess(text);
        assert!(assessment.score >= 4, "score was {}", assessment.score);
        assert!(!assessment.is_valid());
        assert!(!assessment.indicator(Indicator::IdentifierPattern));
        assert!(assessment
            .rejection_reasons
            .iter()
            .any(|r| r.contains("identity number")));
    }

    #[test]
    fn foreign_document_term_is_invalid_regardless_of_score() {
        let text = format!("{GENUINE_TEXT}\nPASSPORT");
        let assessment = scorer().assess(&text);
        assert!(!assessment.is_valid());
        assert!(assessment
            .rejection_reasons
            .iter()
            .any(|r| r.contains("passport")));
    }

    #[test]
    fn low_score_is_invalid_even_with_identifier() {
        let assessment = scorer().assess("42101-1234567-8");
        // Identifier and the negative indicator hold, nothing else does.
        assert_eq!(assessment.score, 2);
        assert!(!assessment.is_valid());
    }

    #[test]
    fn score_is_monotonic_as_indicators_flip_true() {
        let mut text = String::from("42101-1234567-8");
        let mut last_score = scorer().assess(&text).score;
        for addition in [
            "Date of Birth 01/01/1990",
            "Name: Muhammad Ahmad Khan",
            "NADRA",
            "شناختی کارڈ",
        ] {
            text.push('\n');
            text.push_str(addition);
            let score = scorer().assess(&text).score;
            assert!(score >= last_score, "score dropped after adding {addition:?}");
            last_score = score;
        }
        assert_eq!(last_score, 6);
    }
}
