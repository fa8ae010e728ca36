//! # brtax CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brtax_cli::check::{run_check, CheckArgs};
use brtax_cli::document::{
    run_check_digits, run_format, run_normalize, run_validate, CheckDigitsArgs, FormatArgs,
    NormalizeArgs, ValidateArgs,
};

/// Brazilian taxpayer document toolkit.
///
/// Normalizes, validates and formats CPF and CNPJ numbers using the
/// Receita Federal modulo-11 check-digit rules.
#[derive(Parser, Debug)]
#[command(name = "brtax", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strip every non-digit character from the input.
    Normalize(NormalizeArgs),

    /// Validate a document against an asserted type.
    Validate(ValidateArgs),

    /// Render a document in its canonical punctuated form.
    Format(FormatArgs),

    /// Compute the two check digits for a document base.
    CheckDigits(CheckDigitsArgs),

    /// Validate every entry of a YAML or JSON manifest.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "brtax starting");

    let result = match &cli.command {
        Commands::Normalize(args) => run_normalize(args, cli.json),
        Commands::Validate(args) => run_validate(args, cli.json),
        Commands::Format(args) => run_format(args, cli.json),
        Commands::CheckDigits(args) => run_check_digits(args, cli.json),
        Commands::Check(args) => run_check(args, cli.json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brtax_core::DocumentKind;

    #[test]
    fn cli_parse_validate() {
        let cli = Cli::try_parse_from(["brtax", "validate", "--kind", "cpf", "529.982.247-25"])
            .unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.kind, DocumentKind::Cpf);
                assert_eq!(args.raw, "529.982.247-25");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_kind_case_insensitive() {
        let cli = Cli::try_parse_from(["brtax", "format", "-k", "CNPJ", "11222333000181"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Format(FormatArgs {
                kind: DocumentKind::Cnpj,
                ..
            })
        ));
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["brtax", "normalize", "1.2-3", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parse_check_digits() {
        let cli = Cli::try_parse_from(["brtax", "check-digits", "--kind", "cnpj", "112223330001"])
            .unwrap();
        assert!(matches!(cli.command, Commands::CheckDigits(_)));
    }

    #[test]
    fn cli_parse_check_file() {
        let cli = Cli::try_parse_from(["brtax", "check", "docs.yaml"]).unwrap();
        match cli.command {
            Commands::Check(args) => assert_eq!(args.file.to_str(), Some("docs.yaml")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["brtax", "validate", "--kind", "rg", "123"]).is_err());
    }

    #[test]
    fn cli_requires_kind_for_validate() {
        assert!(Cli::try_parse_from(["brtax", "validate", "52998224725"]).is_err());
    }
}
