//! # Taxpayer Identity Newtypes
//!
//! Validated newtypes for Brazilian taxpayer documents. A [`Cpf`] or
//! [`Cnpj`] can only be constructed from input that passes the modulo-11
//! check, so holders of these types never need to re-validate.
//!
//! ## Canonical form
//!
//! Both types store the digits-only form (punctuation stripped). The
//! constructors accept either form:
//! - `"52998224725"` or `"529.982.247-25"`
//! - `"11222333000181"` or `"11.222.333/0001-81"`
//!
//! `Display` renders the punctuated form; serde serializes the canonical
//! digits and deserializes through the validating constructor.

use serde::{Deserialize, Serialize};

use crate::checksum::{is_valid_cnpj, is_valid_cpf};
use crate::digits::normalize;
use crate::error::ValidationError;
use crate::kind::DocumentKind;

/// Implement `Deserialize` for string newtypes by routing through `new()`,
/// so invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Brazilian individual taxpayer number (CPF).
///
/// # Validation
///
/// - Exactly 11 digits after stripping non-digits
/// - Not a repeated-digit sequence
/// - Both check digits match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF from raw input, validating check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocument`] if the input is not a
    /// valid CPF.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !is_valid_cpf(&raw) {
            return Err(ValidationError::InvalidDocument {
                kind: DocumentKind::Cpf,
                value: raw,
            });
        }
        Ok(Self(normalize(&raw)))
    }

    /// The canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The punctuated form: `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Brazilian company taxpayer number (CNPJ).
///
/// # Validation
///
/// - Exactly 14 digits after stripping non-digits
/// - Not a repeated-digit sequence
/// - Both check digits match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from raw input, validating check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocument`] if the input is not a
    /// valid CNPJ.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !is_valid_cnpj(&raw) {
            return Err(ValidationError::InvalidDocument {
                kind: DocumentKind::Cnpj,
                value: raw,
            });
        }
        Ok(Self(normalize(&raw)))
    }

    /// The canonical 14-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 8-digit root shared by every branch of the same company.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number (`0001` for the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// The punctuated form: `DD.DDD.DDD/DDDD-DD`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        )
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A validated taxpayer document of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "document_type", content = "document", rename_all = "lowercase")]
pub enum TaxDocument {
    /// Individual taxpayer.
    Cpf(Cpf),
    /// Company taxpayer.
    Cnpj(Cnpj),
}

impl TaxDocument {
    /// Validate `raw` as a document of the asserted `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocument`] if `raw` is not a valid
    /// document of that kind.
    pub fn parse(kind: DocumentKind, raw: impl Into<String>) -> Result<Self, ValidationError> {
        match kind {
            DocumentKind::Cpf => Cpf::new(raw).map(Self::Cpf),
            DocumentKind::Cnpj => Cnpj::new(raw).map(Self::Cnpj),
        }
    }

    /// Kind of the wrapped document.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// Canonical digits-only form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(c) => c.as_str(),
            Self::Cnpj(c) => c.as_str(),
        }
    }

    /// Punctuated display form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(c) => c.formatted(),
            Self::Cnpj(c) => c.formatted(),
        }
    }
}

impl From<Cpf> for TaxDocument {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for TaxDocument {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

impl std::fmt::Display for TaxDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
