//! # Modulo-11 Check Digits
//!
//! CPF and CNPJ numbers end in two check digits computed from the preceding
//! digits with a weighted modulo-11 sum. The weight vectors are fixed by the
//! Receita Federal and must not change.
//!
//! For each check digit:
//!
//! ```text
//! sum       = Σ digit[i] * weight[i]
//! remainder = sum mod 11
//! check     = 0            if remainder < 2
//!             11 - remainder otherwise
//! ```
//!
//! The second check digit is computed over the base digits followed by the
//! first check digit.
//!
//! ## Failure model
//!
//! [`is_valid_cpf`] and [`is_valid_cnpj`] absorb every kind of malformed
//! input into `false`: wrong digit count, a repeated-digit sequence such
//! as `"00000000000"`, or a check-digit mismatch.

use crate::digits::{all_same_digit, normalize, values};
use crate::error::FormatError;
use crate::kind::DocumentKind;

/// CPF first check digit weights: 10 down to 2 over the 9 base digits.
const CPF_WEIGHTS_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CPF second check digit weights: 11 down to 2 over the 9 base digits
/// plus the first check digit.
const CPF_WEIGHTS_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ first check digit weights over the 12 base digits.
const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ second check digit weights over the 12 base digits plus the first
/// check digit.
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// One modulo-11 check digit. `digits` and `weights` have equal length.
fn mod11_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        // remainder is in 2..=10, so the result is a single digit.
        (11 - remainder) as u8
    }
}

/// Both check digits for a base of numeric digit values.
fn check_pair(base: &[u8], weights_1: &[u32], weights_2: &[u32]) -> [u8; 2] {
    let first = mod11_digit(base, weights_1);
    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    let second = mod11_digit(&extended, weights_2);
    [first, second]
}

fn pair_for(kind: DocumentKind, base: &[u8]) -> [u8; 2] {
    match kind {
        DocumentKind::Cpf => check_pair(base, &CPF_WEIGHTS_1, &CPF_WEIGHTS_2),
        DocumentKind::Cnpj => check_pair(base, &CNPJ_WEIGHTS_1, &CNPJ_WEIGHTS_2),
    }
}

/// Compute the two check digits for a document base.
///
/// `base` is normalized first, so punctuation is ignored.
///
/// # Errors
///
/// Returns [`FormatError::LengthMismatch`] if the base does not contain
/// exactly [`DocumentKind::base_len`] digits.
pub fn check_digits(kind: DocumentKind, base: &str) -> Result<[u8; 2], FormatError> {
    let digits = normalize(base);
    if digits.len() != kind.base_len() {
        return Err(FormatError::LengthMismatch {
            kind,
            expected: kind.base_len(),
            actual: digits.len(),
        });
    }
    Ok(pair_for(kind, &values(&digits)))
}

/// Compute the two CPF check digits for a 9-digit base.
///
/// # Errors
///
/// Returns [`FormatError::LengthMismatch`] if `base` does not normalize to
/// exactly 9 digits.
pub fn cpf_check_digits(base: &str) -> Result<[u8; 2], FormatError> {
    check_digits(DocumentKind::Cpf, base)
}

/// Compute the two CNPJ check digits for a 12-digit base.
///
/// # Errors
///
/// Returns [`FormatError::LengthMismatch`] if `base` does not normalize to
/// exactly 12 digits.
pub fn cnpj_check_digits(base: &str) -> Result<[u8; 2], FormatError> {
    check_digits(DocumentKind::Cnpj, base)
}

fn is_valid_kind(kind: DocumentKind, raw: &str) -> bool {
    let digits = normalize(raw);
    if digits.len() != kind.digit_count() || all_same_digit(&digits) {
        return false;
    }
    let vals = values(&digits);
    let (base, check) = vals.split_at(kind.base_len());
    pair_for(kind, base) == [check[0], check[1]]
}

/// Whether `raw` contains a valid CPF.
///
/// Non-digit characters are ignored. Returns `false` for anything that is
/// not exactly 11 digits with matching check digits, and for the eleven
/// repeated-digit sequences.
pub fn is_valid_cpf(raw: &str) -> bool {
    is_valid_kind(DocumentKind::Cpf, raw)
}

/// Whether `raw` contains a valid CNPJ.
///
/// Non-digit characters are ignored. Returns `false` for anything that is
/// not exactly 14 digits with matching check digits, and for repeated-digit
/// sequences.
pub fn is_valid_cnpj(raw: &str) -> bool {
    is_valid_kind(DocumentKind::Cnpj, raw)
}

/// Dispatch to [`is_valid_cpf`] or [`is_valid_cnpj`].
pub fn is_valid(kind: DocumentKind, raw: &str) -> bool {
    is_valid_kind(kind, raw)
}
