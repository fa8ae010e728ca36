//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout `brtax-core`. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - The boolean validators (`is_valid_cpf`, `is_valid_cnpj`) never return
//!   errors. Malformed input is simply `false`.
//! - Typed constructors ([`crate::Cpf::new`], [`crate::Cnpj::new`]) surface
//!   a [`ValidationError`] carrying the rejected input.
//! - Formatters surface a [`FormatError`] when the digit count does not match
//!   the target document kind. Truncating or padding would corrupt the
//!   identifier.

use thiserror::Error;

use crate::kind::DocumentKind;

/// Top-level error type for `brtax-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrtaxError {
    /// A document failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A document could not be formatted.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Validation failure for a taxpayer document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input is not a structurally valid document of the given kind:
    /// wrong digit count, a repeated-digit sequence, or a check-digit
    /// mismatch. The variants are deliberately not distinguished.
    #[error("invalid document for the given type ({kind}): {value:?}")]
    InvalidDocument {
        /// The document kind the caller asserted.
        kind: DocumentKind,
        /// The raw input as supplied.
        value: String,
    },

    /// The document type name is neither `cpf` nor `cnpj`.
    #[error("unknown document type: {0:?} (expected \"cpf\" or \"cnpj\")")]
    UnknownDocumentKind(String),
}

/// Caller error when rendering a document into its punctuated form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The number of digits does not match the target document kind.
    #[error("{kind} requires {expected} digits, got {actual}")]
    LengthMismatch {
        /// Target document kind.
        kind: DocumentKind,
        /// Digit count the kind requires.
        expected: usize,
        /// Digit count found in the input.
        actual: usize,
    },
}
