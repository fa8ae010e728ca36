//! # Document Kinds
//!
//! The closed set of Brazilian taxpayer documents handled by this crate.
//! The kind is always asserted by the caller (e.g. a `document_type` field
//! on a request) and never inferred from the digit count.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Brazilian taxpayer document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas: individual taxpayer, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: company taxpayer, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// All document kinds.
    pub fn all() -> &'static [DocumentKind] {
        &[Self::Cpf, Self::Cnpj]
    }

    /// Number of digits in a complete document of this kind, check digits
    /// included.
    pub fn digit_count(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }

    /// Number of leading digits the two check digits are computed from.
    pub fn base_len(self) -> usize {
        self.digit_count() - 2
    }

    /// Lower-case wire name (`"cpf"` / `"cnpj"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf => write!(f, "CPF"),
            Self::Cnpj => write!(f, "CNPJ"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            _ => Err(ValidationError::UnknownDocumentKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_counts() {
        assert_eq!(DocumentKind::Cpf.digit_count(), 11);
        assert_eq!(DocumentKind::Cnpj.digit_count(), 14);
        assert_eq!(DocumentKind::Cpf.base_len(), 9);
        assert_eq!(DocumentKind::Cnpj.base_len(), 12);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("cpf".parse::<DocumentKind>().unwrap(), DocumentKind::Cpf);
        assert_eq!("CNPJ".parse::<DocumentKind>().unwrap(), DocumentKind::Cnpj);
        assert_eq!(" Cnpj ".parse::<DocumentKind>().unwrap(), DocumentKind::Cnpj);
    }

    #[test]
    fn parse_unknown_rejected() {
        let err = "rg".parse::<DocumentKind>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownDocumentKind("rg".to_string()));
    }

    #[test]
    fn display_and_wire_name() {
        assert_eq!(DocumentKind::Cpf.to_string(), "CPF");
        assert_eq!(DocumentKind::Cnpj.as_str(), "cnpj");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DocumentKind::Cnpj).unwrap();
        assert_eq!(json, "\"cnpj\"");
        let kind: DocumentKind = serde_json::from_str("\"cpf\"").unwrap();
        assert_eq!(kind, DocumentKind::Cpf);
    }

    #[test]
    fn all_lists_every_kind() {
        assert_eq!(DocumentKind::all(), &[DocumentKind::Cpf, DocumentKind::Cnpj]);
    }
}
