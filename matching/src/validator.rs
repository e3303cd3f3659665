//! Cross-validation of extracted fields against user-entered data.

use crate::canonical::canonicalize;
use crate::distance::similarity;
use serde::{Deserialize, Serialize};
use verid_types::{ExtractedFields, UserInput, VerificationParams};

/// Per-field verdicts from one cross-validation run.
///
/// `None` means the field was absent from extraction and was not compared —
/// neither a pass nor a fail. `overall` is true iff every compared field
/// passed; hard-requiring a missing field is caller policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldMatchResult {
    pub document_number: Option<bool>,
    pub date_of_birth: Option<bool>,
    pub issue_date: Option<bool>,
    pub name_matches: Option<bool>,
    /// Similarity of the lowercased names; 0.0 when the name was not compared.
    pub name_similarity: f64,
    pub overall: bool,
    /// One human-readable line per failing field; empty when all pass.
    pub reasons: Vec<String>,
}

/// Compares extracted fields against user input.
///
/// Callers run this only for documents whose authenticity check passed;
/// the validator itself is a pure comparison.
pub struct CrossValidator {
    name_similarity_threshold: f64,
}

impl CrossValidator {
    pub fn new(params: &VerificationParams) -> Self {
        Self {
            name_similarity_threshold: params.name_similarity_threshold,
        }
    }

    pub fn validate(&self, extracted: &ExtractedFields, input: &UserInput) -> FieldMatchResult {
        let mut reasons = Vec::new();

        let document_number = exact_verdict(
            "document number",
            extracted.document_number.as_deref(),
            input.document_number.as_deref(),
            &mut reasons,
        );
        let date_of_birth = exact_verdict(
            "date of birth",
            extracted.date_of_birth.as_deref(),
            input.date_of_birth.as_deref(),
            &mut reasons,
        );
        let issue_date = exact_verdict(
            "issue date",
            extracted.issue_date.as_deref(),
            input.issue_date.as_deref(),
            &mut reasons,
        );

        let (name_matches, name_similarity) = match extracted.full_name.as_deref() {
            None => (None, 0.0),
            Some(extracted_name) => {
                let entered = input.full_name.as_deref().unwrap_or("");
                let score = similarity(extracted_name, entered);
                let matches = score > self.name_similarity_threshold;
                if !matches {
                    reasons.push(format!(
                        "name similarity {score:.2} is not above the required {:.2}",
                        self.name_similarity_threshold
                    ));
                }
                (Some(matches), score)
            }
        };

        let overall = [document_number, date_of_birth, issue_date, name_matches]
            .iter()
            .all(|verdict| verdict.unwrap_or(true));

        FieldMatchResult {
            document_number,
            date_of_birth,
            issue_date,
            name_matches,
            name_similarity,
            overall,
            reasons,
        }
    }
}

/// Exact-field comparison by canonicalized equality.
///
/// Not compared when extraction has nothing; a missing user value against an
/// extracted one is a mismatch.
fn exact_verdict(
    label: &str,
    extracted: Option<&str>,
    entered: Option<&str>,
    reasons: &mut Vec<String>,
) -> Option<bool> {
    let extracted = extracted?;
    let matches = match entered {
        Some(value) => canonicalize(value) == canonicalize(extracted),
        None => false,
    };
    if !matches {
        reasons.push(format!(
            "{label} \"{}\" does not match the document's \"{extracted}\"",
            entered.unwrap_or("")
        ));
    }
    Some(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> CrossValidator {
        CrossValidator::new(&VerificationParams::default())
    }

    fn extracted() -> ExtractedFields {
        ExtractedFields {
            document_number: Some("42101-1234567-8".into()),
            full_name: Some("Muhammad Ahmad Khan".into()),
            date_of_birth: Some("01/01/1990".into()),
            issue_date: Some("15/06/2015".into()),
        }
    }

    fn matching_input() -> UserInput {
        UserInput {
            document_number: Some("4210112345678".into()),
            full_name: Some("muhammad ahmad khan".into()),
            date_of_birth: Some("01-01-1990".into()),
            issue_date: Some("15.06.2015".into()),
            city: Some("Karachi".into()),
            phone: Some("0300-1234567".into()),
        }
    }

    #[test]
    fn canonicalized_input_matches_in_full() {
        let result = validator().validate(&extracted(), &matching_input());
        assert_eq!(result.document_number, Some(true));
        assert_eq!(result.date_of_birth, Some(true));
        assert_eq!(result.issue_date, Some(true));
        assert_eq!(result.name_matches, Some(true));
        assert_eq!(result.name_similarity, 1.0);
        assert!(result.overall);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn one_digit_off_fails_that_field_only() {
        let mut input = matching_input();
        input.document_number = Some("4210112345679".into());
        let result = validator().validate(&extracted(), &input);
        assert_eq!(result.document_number, Some(false));
        assert_eq!(result.date_of_birth, Some(true));
        assert_eq!(result.issue_date, Some(true));
        assert_eq!(result.name_matches, Some(true));
        assert!(!result.overall);
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].contains("document number"));
    }

    #[test]
    fn dissimilar_name_fails_with_similarity_reason() {
        let mut input = matching_input();
        input.full_name = Some("Zainab Bibi".into());
        let result = validator().validate(&extracted(), &input);
        assert_eq!(result.name_matches, Some(false));
        assert!(!result.overall);
        assert!(result.reasons[0].contains("name similarity"));
    }

    #[test]
    fn missing_extraction_is_not_compared() {
        let fields = ExtractedFields {
            issue_date: None,
            full_name: None,
            ..extracted()
        };
        let result = validator().validate(&fields, &matching_input());
        assert_eq!(result.issue_date, None);
        assert_eq!(result.name_matches, None);
        assert_eq!(result.name_similarity, 0.0);
        // Uncompared fields neither pass nor fail.
        assert!(result.overall);
    }

    #[test]
    fn missing_user_value_against_extracted_is_a_mismatch() {
        let mut input = matching_input();
        input.date_of_birth = None;
        let result = validator().validate(&extracted(), &input);
        assert_eq!(result.date_of_birth, Some(false));
        assert!(!result.overall);
    }

    #[test]
    fn each_required_comparison_flips_overall() {
        for break_field in ["number", "dob", "issue", "name"] {
            let mut input = matching_input();
            match break_field {
                "number" => input.document_number = Some("99999-9999999-9".into()),
                "dob" => input.date_of_birth = Some("02/01/1990".into()),
                "issue" => input.issue_date = Some("16/06/2015".into()),
                _ => input.full_name = Some("Someone Else Entirely".into()),
            }
            let result = validator().validate(&extracted(), &input);
            assert!(!result.overall, "breaking {break_field} must fail overall");
            assert_eq!(result.reasons.len(), 1);
        }
    }
}
