//! Structured document field records.
//!
//! The pipeline works with a fixed record of named optional fields rather
//! than a loose key/value bag — the exact-match and fuzzy-match fields are
//! separated at the type level.

use serde::{Deserialize, Serialize};

/// One user-entered field of the identity document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentField {
    /// Compared by canonicalized exact equality.
    DocumentNumber,
    /// Compared by edit-distance similarity.
    FullName,
    /// Compared by canonicalized exact equality.
    DateOfBirth,
    /// Compared by canonicalized exact equality.
    IssueDate,
    /// Ancillary — never cross-validated.
    City,
    /// Ancillary — never cross-validated.
    Phone,
}

/// Fields recovered from OCR text.
///
/// Unresolved fields stay `None`, never guessed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub document_number: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub issue_date: Option<String>,
}

impl ExtractedFields {
    /// Whether no field at all was resolved.
    pub fn is_empty(&self) -> bool {
        self.document_number.is_none()
            && self.full_name.is_none()
            && self.date_of_birth.is_none()
            && self.issue_date.is_none()
    }
}

/// User-entered counterparts of the extracted fields plus ancillary data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub document_number: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub issue_date: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

impl UserInput {
    /// Pre-fill the validated fields from an extraction.
    ///
    /// Ancillary fields (city, phone) start unset — the user supplies them.
    pub fn prefilled_from(extracted: &ExtractedFields) -> Self {
        Self {
            document_number: extracted.document_number.clone(),
            full_name: extracted.full_name.clone(),
            date_of_birth: extracted.date_of_birth.clone(),
            issue_date: extracted.issue_date.clone(),
            city: None,
            phone: None,
        }
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: DocumentField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            DocumentField::DocumentNumber => self.document_number = value,
            DocumentField::FullName => self.full_name = value,
            DocumentField::DateOfBirth => self.date_of_birth = value,
            DocumentField::IssueDate => self.issue_date = value,
            DocumentField::City => self.city = value,
            DocumentField::Phone => self.phone = value,
        }
    }

    pub fn get(&self, field: DocumentField) -> Option<&str> {
        match field {
            DocumentField::DocumentNumber => self.document_number.as_deref(),
            DocumentField::FullName => self.full_name.as_deref(),
            DocumentField::DateOfBirth => self.date_of_birth.as_deref(),
            DocumentField::IssueDate => self.issue_date.as_deref(),
            DocumentField::City => self.city.as_deref(),
            DocumentField::Phone => self.phone.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefill_copies_validated_fields_only() {
        let extracted = ExtractedFields {
            document_number: Some("42101-1234567-8".into()),
            full_name: Some("Muhammad Ahmad Khan".into()),
            date_of_birth: Some("01/01/1990".into()),
            issue_date: None,
        };
        let input = UserInput::prefilled_from(&extracted);
        assert_eq!(input.document_number.as_deref(), Some("42101-1234567-8"));
        assert_eq!(input.full_name.as_deref(), Some("Muhammad Ahmad Khan"));
        assert_eq!(input.issue_date, None);
        assert_eq!(input.city, None);
        assert_eq!(input.phone, None);
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut input = UserInput::default();
        input.set(DocumentField::City, "Karachi");
        input.set(DocumentField::DocumentNumber, "42101-1234567-8");
        assert_eq!(input.get(DocumentField::City), Some("Karachi"));
        assert_eq!(
            input.get(DocumentField::DocumentNumber),
            Some("42101-1234567-8")
        );
        assert_eq!(input.get(DocumentField::Phone), None);
    }
}
