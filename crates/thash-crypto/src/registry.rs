//! Name -> HashFunction mapping.
//!
//! Accepts the identifiers reported by [`HashFunction::name`], so
//! `create_hash(&h.name())` rebuilds an equivalent hash. Truncation nests:
//! `Truncated(Truncated(SHA-512,300),100)` is a valid spec.

use thash_core::{HashError, HashFunction};

use crate::sha::{Sha224Hash, Sha256Hash, Sha384Hash, Sha512Hash, Sha512_224Hash, Sha512_256Hash};
use crate::truncated::TruncatedHash;

const TRUNCATED_PREFIX: &str = "truncated(";

/// Deepest `Truncated(...)` nesting [`create_hash`] will build.
pub const MAX_TRUNCATION_DEPTH: usize = 16;

/// Base algorithms known to the registry, in canonical spelling.
const AVAILABLE: &[&str] = &[
    "SHA-224",
    "SHA-256",
    "SHA-384",
    "SHA-512",
    "SHA-512-224",
    "SHA-512-256",
];

/// Canonical names of the base algorithms. Any of them may be wrapped in
/// `Truncated(<name>,<bits>)`.
pub fn available_algorithms() -> &'static [&'static str] {
    AVAILABLE
}

fn normalize(id: &str) -> String {
    id.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '/'))
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Build a hash from its specification string.
///
/// Base names are matched case-insensitively and ignore `-`, `_` and `/`,
/// so `sha256`, `SHA-256` and `SHA_256` are the same algorithm. More than
/// [`MAX_TRUNCATION_DEPTH`] nested truncations is [`HashError::InvalidSpec`].
pub fn create_hash(spec: &str) -> Result<Box<dyn HashFunction>, HashError> {
    create_nested(spec, 0)
}

fn create_nested(spec: &str, depth: usize) -> Result<Box<dyn HashFunction>, HashError> {
    let spec = spec.trim();

    if let Some((inner, bits)) = parse_truncated(spec)? {
        if depth >= MAX_TRUNCATION_DEPTH {
            tracing::warn!(depth, "rejected deeply nested truncation");
            return Err(HashError::InvalidSpec(format!(
                "truncation nested deeper than {MAX_TRUNCATION_DEPTH} levels"
            )));
        }
        let inner = create_nested(inner, depth + 1)?;
        let hash = TruncatedHash::new(inner, bits)?;
        tracing::debug!(spec, name = %hash.name(), "resolved truncated hash");
        return Ok(Box::new(hash));
    }

    let hash: Box<dyn HashFunction> = match normalize(spec).as_str() {
        "sha224" => Box::new(Sha224Hash::new()),
        "sha256" => Box::new(Sha256Hash::new()),
        "sha384" => Box::new(Sha384Hash::new()),
        "sha512" => Box::new(Sha512Hash::new()),
        "sha512224" => Box::new(Sha512_224Hash::new()),
        "sha512256" => Box::new(Sha512_256Hash::new()),
        _ => return Err(HashError::UnknownAlgorithm(spec.to_string())),
    };
    tracing::debug!(spec, name = %hash.name(), "resolved hash");
    Ok(hash)
}

/// Split `Truncated(<inner>,<bits>)` into its arguments.
///
/// Returns `Ok(None)` when `spec` is not a truncation at all.
fn parse_truncated(spec: &str) -> Result<Option<(&str, usize)>, HashError> {
    let is_truncated = spec
        .get(..TRUNCATED_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(TRUNCATED_PREFIX));
    if !is_truncated {
        return Ok(None);
    }

    let args = spec[TRUNCATED_PREFIX.len()..]
        .strip_suffix(')')
        .ok_or_else(|| HashError::InvalidSpec(format!("missing closing ')' in '{spec}'")))?;

    // The inner spec may itself contain commas; the bit count never does.
    let (inner, bits) = args
        .rsplit_once(',')
        .ok_or_else(|| HashError::InvalidSpec(format!("expected '<hash>,<bits>' in '{spec}'")))?;

    let bits = bits.trim().parse::<usize>().map_err(|e| {
        HashError::InvalidSpec(format!("invalid bit count '{}' in '{spec}': {e}", bits.trim()))
    })?;

    Ok(Some((inner.trim(), bits)))
}
