//! # List Subcommand
//!
//! Prints every base algorithm the registry knows with its output width.

use std::io::Write;

use anyhow::Result;

/// Execute the list subcommand, printing to stdout.
pub fn run_list() -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_list(&mut out)
}

/// Write one `<name>  <bits> bits` line per algorithm.
pub fn write_list(out: &mut impl Write) -> Result<u8> {
    let algorithms = thash_crypto::available_algorithms();
    for name in algorithms {
        let hash = thash_crypto::create_hash(name)?;
        writeln!(out, "  {:<12} {} bits", hash.name(), hash.output_bits())?;
    }
    writeln!(out)?;
    writeln!(out, "Any algorithm may be truncated: Truncated(<name>,<bits>)")?;
    writeln!(out, "Total: {} algorithms", algorithms.len())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_algorithm() {
        let mut out = Vec::new();
        assert_eq!(write_list(&mut out).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("SHA-256      256 bits"));
        assert!(text.contains("SHA-512-224  224 bits"));
        assert!(text.contains("Total: 6 algorithms"));
    }
}
