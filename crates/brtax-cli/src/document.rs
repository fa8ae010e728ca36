//! # Single-Document Subcommands
//!
//! `normalize`, `validate`, `format` and `check-digits` operate on one
//! document given on the command line.
//!
//! ## Usage
//!
//! ```bash
//! brtax normalize "529.982.247-25"
//! brtax validate --kind cpf 529.982.247-25
//! brtax --json validate --kind cnpj 11222333000181
//! brtax format --kind cnpj 11222333000181
//! brtax check-digits --kind cpf 529982247
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use brtax_core::{check_digits, format_document, is_valid, normalize, DocumentKind};

/// Arguments for `brtax normalize`.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Raw document text; every non-digit character is stripped.
    pub raw: String,
}

/// Arguments for `brtax validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document type asserted for the input (cpf or cnpj).
    #[arg(long, short)]
    pub kind: DocumentKind,

    /// Raw document text, punctuation allowed.
    pub raw: String,
}

/// Arguments for `brtax format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Target document type (cpf or cnpj).
    #[arg(long, short)]
    pub kind: DocumentKind,

    /// Document digits; punctuation is stripped before formatting.
    pub raw: String,
}

/// Arguments for `brtax check-digits`.
#[derive(Args, Debug)]
pub struct CheckDigitsArgs {
    /// Document type (cpf or cnpj).
    #[arg(long, short)]
    pub kind: DocumentKind,

    /// Base digits: 9 for a CPF, 12 for a CNPJ.
    pub base: String,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Asserted document type.
    pub kind: DocumentKind,
    /// Input exactly as given.
    pub input: String,
    /// Normalized digits.
    pub digits: String,
    /// Verdict.
    pub valid: bool,
    /// Punctuated form, present only for valid documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl ValidationReport {
    /// Validate `raw` as a document of `kind`.
    pub fn new(kind: DocumentKind, raw: &str) -> Self {
        let valid = is_valid(kind, raw);
        let formatted = if valid {
            format_document(kind, raw).ok()
        } else {
            None
        };
        Self {
            kind,
            input: raw.to_string(),
            digits: normalize(raw),
            valid,
            formatted,
        }
    }
}

/// A base completed with its check digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedDocument {
    /// Document type.
    pub kind: DocumentKind,
    /// Normalized base digits.
    pub base: String,
    /// The two computed check digits.
    pub check_digits: String,
    /// Base followed by check digits.
    pub digits: String,
    /// Punctuated form of the completed document.
    pub formatted: String,
}

/// Complete a 9- or 12-digit base with its check digits.
pub fn complete_document(kind: DocumentKind, base: &str) -> Result<CompletedDocument> {
    let [first, second] = check_digits(kind, base)
        .with_context(|| format!("cannot compute {kind} check digits for {base:?}"))?;
    let base = normalize(base);
    let digits = format!("{base}{first}{second}");
    let formatted = format_document(kind, &digits)?;
    Ok(CompletedDocument {
        kind,
        base,
        check_digits: format!("{first}{second}"),
        digits,
        formatted,
    })
}

/// Execute `brtax normalize`.
pub fn run_normalize(args: &NormalizeArgs, json: bool) -> Result<u8> {
    let digits = normalize(&args.raw);
    tracing::debug!(input = %args.raw, digits = %digits, "normalized");
    if json {
        let out = serde_json::json!({ "input": args.raw, "digits": digits });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{digits}");
    }
    Ok(0)
}

/// Execute `brtax validate`. Exits 1 when the document is invalid.
pub fn run_validate(args: &ValidateArgs, json: bool) -> Result<u8> {
    let report = ValidationReport::new(args.kind, &args.raw);
    tracing::info!(kind = %report.kind, valid = report.valid, "validated document");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(formatted) = &report.formatted {
        println!("VALID: {} {formatted}", report.kind);
    } else {
        println!("INVALID: {} {:?}", report.kind, report.input);
    }

    Ok(if report.valid { 0 } else { 1 })
}

/// Execute `brtax format`. A digit-count mismatch is an error.
pub fn run_format(args: &FormatArgs, json: bool) -> Result<u8> {
    let formatted = format_document(args.kind, &args.raw)
        .with_context(|| format!("cannot format {:?} as {}", args.raw, args.kind))?;
    if json {
        let out = serde_json::json!({
            "kind": args.kind,
            "input": args.raw,
            "formatted": formatted,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{formatted}");
    }
    Ok(0)
}

/// Execute `brtax check-digits`.
pub fn run_check_digits(args: &CheckDigitsArgs, json: bool) -> Result<u8> {
    let completed = complete_document(args.kind, &args.base)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&completed)?);
    } else {
        println!("  check digits: {}", completed.check_digits);
        println!("  document:     {}", completed.formatted);
    }
    Ok(0)
}
