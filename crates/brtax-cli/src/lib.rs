//! # brtax-cli — Brazilian Taxpayer Document CLI
//!
//! Command-line access to `brtax-core`: normalization, CPF/CNPJ
//! validation, formatting, check-digit completion and batch checks.
//!
//! ## Subcommands
//!
//! - `normalize` — Strip non-digit characters
//! - `validate` — Check a document against an asserted type
//! - `format` — Render the canonical punctuated form
//! - `check-digits` — Complete a base with its two check digits
//! - `check` — Validate a YAML/JSON manifest of documents
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `brtax-core`; no check-digit logic here.
//! - Handlers return the process exit code: 0 valid, 1 invalid or error.

pub mod check;
pub mod document;
