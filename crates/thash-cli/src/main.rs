//! # thash CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use thash_cli::config::Config;
use thash_cli::digest::{run_digest, DigestArgs};
use thash_cli::list::run_list;

/// Bit-exact truncated digests over the SHA-2 family.
#[derive(Parser, Debug)]
#[command(name = "thash", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute digests of files or stdin.
    Digest(DigestArgs),

    /// List available hash algorithms.
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("thash CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = run(cli);

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Digest(args) => run_digest(&args, &config),
        Commands::List => run_list(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_digest_defaults() {
        let cli = Cli::try_parse_from(["thash", "digest"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Digest(args) => {
                assert!(args.hash.is_none());
                assert!(args.bits.is_none());
                assert!(args.files.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_digest_with_options() {
        let cli = Cli::try_parse_from([
            "thash",
            "-vv",
            "digest",
            "--hash",
            "SHA-512",
            "--bits",
            "100",
            "a.bin",
            "-",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Digest(args) => {
                assert_eq!(args.hash.as_deref(), Some("SHA-512"));
                assert_eq!(args.bits, Some(100));
                assert_eq!(args.files, vec![PathBuf::from("a.bin"), PathBuf::from("-")]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["thash", "list", "--config", "thash.yaml"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.config, Some(PathBuf::from("thash.yaml")));
    }

    #[test]
    fn cli_rejects_non_numeric_bits() {
        assert!(Cli::try_parse_from(["thash", "digest", "--bits", "twelve"]).is_err());
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["thash"]).is_err());
    }

    #[test]
    fn run_with_missing_config_fails() {
        let cli = Cli::try_parse_from(["thash", "list", "--config", "/nonexistent/thash.yaml"])
            .unwrap();
        assert!(run(cli).is_err());
    }
}
