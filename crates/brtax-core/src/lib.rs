//! # brtax-core — Brazilian Taxpayer Document Primitives
//!
//! Normalization, check-digit validation and canonical formatting for the
//! two Brazilian taxpayer registries:
//!
//! - **CPF** (Cadastro de Pessoas Físicas): individuals, 11 digits.
//! - **CNPJ** (Cadastro Nacional da Pessoa Jurídica): companies, 14 digits.
//!
//! ## Key Design Principles
//!
//! 1. **Boolean validators never fail.** [`is_valid_cpf`] and
//!    [`is_valid_cnpj`] return `false` for every malformed input: empty,
//!    wrong length, repeated digits, bad check digits.
//!
//! 2. **Formatters fail loudly.** [`format_cpf`] and [`format_cnpj`] return
//!    [`FormatError::LengthMismatch`] rather than truncating or padding.
//!
//! 3. **Newtypes for validated documents.** [`Cpf`] and [`Cnpj`] can only
//!    hold documents that passed the check, including when deserialized.
//!
//! 4. **The caller asserts the kind.** A [`DocumentKind`] is never inferred
//!    from the digit count.
//!
//! ## Crate Policy
//!
//! - Pure functions only: no I/O, no logging, no shared state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checksum;
pub mod digits;
pub mod error;
pub mod format;
pub mod identity;
pub mod kind;
pub mod validation;

// Re-export primary types for ergonomic imports.
pub use checksum::{
    check_digits, cnpj_check_digits, cpf_check_digits, is_valid, is_valid_cnpj, is_valid_cpf,
};
pub use digits::{all_same_digit, normalize};
pub use error::{BrtaxError, FormatError, ValidationError};
pub use format::{format_cnpj, format_cpf, format_document};
pub use identity::{Cnpj, Cpf, TaxDocument};
pub use kind::DocumentKind;
pub use validation::{display_document, validate_document, DocumentField};
