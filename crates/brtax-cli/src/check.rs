//! # Batch Manifest Check
//!
//! `brtax check <FILE>` validates every entry of a YAML or JSON manifest.
//! Each entry has the request-body shape used for shareholders and
//! companies:
//!
//! ```yaml
//! - document_type: cpf
//!   document: 529.982.247-25
//! - document_type: cnpj
//!   document: 11.222.333/0001-81
//! ```
//!
//! JSON manifests are accepted as-is since YAML is a superset of JSON.
//! The command exits 1 if any entry is invalid.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use brtax_core::DocumentField;

use crate::document::ValidationReport;

/// Arguments for `brtax check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to a YAML or JSON manifest of `{document_type, document}` entries.
    pub file: PathBuf,
}

/// Outcome of checking a whole manifest.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Number of entries checked.
    pub total: usize,
    /// Number of valid entries.
    pub valid: usize,
    /// Number of invalid entries.
    pub invalid: usize,
    /// Per-entry results in manifest order.
    pub entries: Vec<ValidationReport>,
}

impl CheckReport {
    /// Whether every entry passed.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<DocumentField>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest: {}", path.display()))?;
    parse_manifest(&content)
        .with_context(|| format!("failed to parse manifest: {}", path.display()))
}

/// Parse manifest text (YAML or JSON). An empty document is an empty list.
pub fn parse_manifest(content: &str) -> Result<Vec<DocumentField>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Vec<DocumentField> = serde_yaml::from_str(content)?;
    Ok(entries)
}

/// Validate every entry, preserving order.
pub fn check_entries(entries: &[DocumentField]) -> CheckReport {
    let reports: Vec<ValidationReport> = entries
        .iter()
        .map(|e| ValidationReport::new(e.document_type, &e.document))
        .collect();
    let valid = reports.iter().filter(|r| r.valid).count();
    CheckReport {
        total: reports.len(),
        valid,
        invalid: reports.len() - valid,
        entries: reports,
    }
}

/// Execute `brtax check`.
pub fn run_check(args: &CheckArgs, json: bool) -> Result<u8> {
    let entries = load_manifest(&args.file)?;
    tracing::debug!(path = %args.file.display(), entries = entries.len(), "loaded manifest");

    let report = check_entries(&entries);
    for (idx, entry) in report.entries.iter().enumerate() {
        if !entry.valid {
            tracing::warn!(index = idx, kind = %entry.kind, input = %entry.input, "invalid document");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &report.entries {
            match &entry.formatted {
                Some(formatted) => println!("  OK       {:<4} {formatted}", entry.kind.to_string()),
                None => println!("  INVALID  {:<4} {:?}", entry.kind.to_string(), entry.input),
            }
        }
        println!();
        println!(
            "Total: {} ({} valid, {} invalid)",
            report.total, report.valid, report.invalid
        );
    }

    Ok(if report.all_valid() { 0 } else { 1 })
}
