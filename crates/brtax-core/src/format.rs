//! # Canonical Display Formats
//!
//! Renders documents in their punctuated display form:
//!
//! - CPF:  `DDD.DDD.DDD-DD`
//! - CNPJ: `DD.DDD.DDD/DDDD-DD`
//!
//! Input is normalized first, so both `"52998224725"` and
//! `"529.982.247-25"` format to the same string. A digit count that does
//! not match the target kind is a [`FormatError::LengthMismatch`]; the
//! formatters never truncate or pad. Check digits are not verified here.

use crate::digits::normalize;
use crate::error::FormatError;
use crate::kind::DocumentKind;

fn digits_for(kind: DocumentKind, raw: &str) -> Result<String, FormatError> {
    let digits = normalize(raw);
    if digits.len() != kind.digit_count() {
        return Err(FormatError::LengthMismatch {
            kind,
            expected: kind.digit_count(),
            actual: digits.len(),
        });
    }
    Ok(digits)
}

/// Render an 11-digit CPF as `DDD.DDD.DDD-DD`.
///
/// # Errors
///
/// Returns [`FormatError::LengthMismatch`] unless `digits` normalizes to
/// exactly 11 digits.
pub fn format_cpf(digits: &str) -> Result<String, FormatError> {
    let d = digits_for(DocumentKind::Cpf, digits)?;
    Ok(format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]))
}

/// Render a 14-digit CNPJ as `DD.DDD.DDD/DDDD-DD`.
///
/// # Errors
///
/// Returns [`FormatError::LengthMismatch`] unless `digits` normalizes to
/// exactly 14 digits.
pub fn format_cnpj(digits: &str) -> Result<String, FormatError> {
    let d = digits_for(DocumentKind::Cnpj, digits)?;
    Ok(format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    ))
}

/// Dispatch to [`format_cpf`] or [`format_cnpj`].
pub fn format_document(kind: DocumentKind, digits: &str) -> Result<String, FormatError> {
    match kind {
        DocumentKind::Cpf => format_cpf(digits),
        DocumentKind::Cnpj => format_cnpj(digits),
    }
}
