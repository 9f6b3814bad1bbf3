//! # Digest Subcommand
//!
//! Hashes files or stdin with any registry specification, optionally
//! truncated to a bit width.
//!
//! ## Usage
//!
//! ```bash
//! # Full SHA-256 of a file:
//! thash digest Cargo.toml
//!
//! # First 12 bits of SHA-256 of stdin:
//! echo -n abc | thash digest --bits 12
//!
//! # Explicit truncation spec:
//! thash digest --hash 'Truncated(SHA-512,100)' a.bin b.bin
//! ```

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use thash_core::{HashFunction, HashOutput};

use crate::config::Config;

const READ_CHUNK: usize = 8 * 1024;

/// Arguments for the digest subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Hash specification, e.g. SHA-256 or Truncated(SHA-512,100).
    #[arg(long)]
    pub hash: Option<String>,

    /// Truncate the digest to this many bits.
    #[arg(long)]
    pub bits: Option<usize>,

    /// Files to hash. Reads stdin when none are given or the path is `-`.
    pub files: Vec<PathBuf>,
}

/// Execute the digest subcommand, printing to stdout.
pub fn run_digest(args: &DigestArgs, config: &Config) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_digests(args, config, &mut out)
}

/// Compute and write one `<hex>  <name>` line per input.
pub fn write_digests(args: &DigestArgs, config: &Config, out: &mut impl Write) -> Result<u8> {
    let settings = config.resolve(args.hash.as_deref(), args.bits);
    let spec = settings.spec();
    let mut hash = thash_crypto::create_hash(&spec)
        .with_context(|| format!("cannot build hash from '{spec}'"))?;

    tracing::info!(hash = %hash.name(), inputs = args.files.len(), "computing digests");

    if args.files.is_empty() {
        let digest = digest_reader(&mut *hash, std::io::stdin().lock())?;
        writeln!(out, "{digest}  -")?;
        return Ok(0);
    }

    for path in &args.files {
        let digest = if is_stdin(path) {
            digest_reader(&mut *hash, std::io::stdin().lock())?
        } else {
            digest_file(&mut *hash, path)?
        };
        writeln!(out, "{digest}  {}", path.display())?;
    }
    Ok(0)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Hash the contents of a file.
pub fn digest_file(hash: &mut dyn HashFunction, path: &Path) -> Result<HashOutput> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let digest = digest_reader(hash, file)
        .with_context(|| format!("failed to hash {}", path.display()))?;
    tracing::debug!(path = %path.display(), %digest, "hashed file");
    Ok(digest)
}

/// Stream a reader through `hash` in fixed-size chunks and finalize.
pub fn digest_reader(hash: &mut dyn HashFunction, mut reader: impl Read) -> Result<HashOutput> {
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                hash.reset();
                return Err(e).context("read failed");
            }
        };
        hash.update(&chunk[..n]);
    }
    Ok(hash.finalize()?)
}
