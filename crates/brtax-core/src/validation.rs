//! # Request and Presentation Contracts
//!
//! Entry points used by the layers that consume this crate:
//!
//! - Request validation: create/update requests for shareholders and
//!   companies carry a `document_type` and a raw `document`. The validator
//!   picks the algorithm from the type, never from the digit count, and
//!   reports failure as "invalid document for the given type".
//! - Presentation: stored values may still carry punctuation. They are
//!   stripped and re-rendered in the canonical display form.

use serde::{Deserialize, Serialize};

use crate::digits::normalize;
use crate::error::{FormatError, ValidationError};
use crate::format::format_document;
use crate::identity::TaxDocument;
use crate::kind::DocumentKind;

/// Validate a raw document against the caller-asserted kind.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDocument`] when `raw` is not a valid
/// document of `kind`.
pub fn validate_document(kind: DocumentKind, raw: &str) -> Result<TaxDocument, ValidationError> {
    TaxDocument::parse(kind, raw)
}

/// Render a stored document for display.
///
/// Punctuation in `stored` is stripped before formatting. Check digits are
/// not re-verified; the value is assumed to have been validated on write.
///
/// # Errors
///
/// Returns [`FormatError::LengthMismatch`] if the stored value does not
/// carry the digit count of `kind`.
pub fn display_document(kind: DocumentKind, stored: &str) -> Result<String, FormatError> {
    format_document(kind, &normalize(stored))
}

/// The document fields of a shareholder or company request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentField {
    /// Which document the caller claims `document` is.
    pub document_type: DocumentKind,
    /// Raw document text as entered, punctuation allowed.
    pub document: String,
}

impl DocumentField {
    /// Build a field from its parts.
    pub fn new(document_type: DocumentKind, document: impl Into<String>) -> Self {
        Self {
            document_type,
            document: document.into(),
        }
    }

    /// Validate the field, returning the typed document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocument`] when `document` is not
    /// a valid document of `document_type`.
    pub fn validate(&self) -> Result<TaxDocument, ValidationError> {
        validate_document(self.document_type, &self.document)
    }

    /// Boolean form of [`Self::validate`].
    pub fn is_valid(&self) -> bool {
        crate::checksum::is_valid(self.document_type, &self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_document_uses_asserted_kind() {
        let doc = validate_document(DocumentKind::Cpf, "529.982.247-25").unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cpf);

        let err = validate_document(DocumentKind::Cnpj, "529.982.247-25").unwrap_err();
        assert!(err.to_string().contains("invalid document for the given type"));
    }

    #[test]
    fn display_strips_stored_punctuation() {
        assert_eq!(
            display_document(DocumentKind::Cpf, "529.982.247-25").unwrap(),
            "529.982.247-25"
        );
        assert_eq!(
            display_document(DocumentKind::Cnpj, " 11222333/000181 ").unwrap(),
            "11.222.333/0001-81"
        );
    }

    #[test]
    fn display_rejects_wrong_length() {
        assert!(matches!(
            display_document(DocumentKind::Cnpj, "529.982.247-25"),
            Err(FormatError::LengthMismatch {
                expected: 14,
                actual: 11,
                ..
            })
        ));
    }

    #[test]
    fn document_field_from_request_json() {
        let body = r#"{"document_type": "cnpj", "document": "11.222.333/0001-81"}"#;
        let field: DocumentField = serde_json::from_str(body).unwrap();
        assert!(field.is_valid());
        assert_eq!(field.validate().unwrap().as_str(), "11222333000181");
    }

    #[test]
    fn document_field_invalid() {
        let field = DocumentField::new(DocumentKind::Cpf, "11111111111");
        assert!(!field.is_valid());
        assert!(field.validate().is_err());
    }

    #[test]
    fn document_field_unknown_type_rejected() {
        let body = r#"{"document_type": "rg", "document": "123"}"#;
        assert!(serde_json::from_str::<DocumentField>(body).is_err());
    }
}
