//! # Incremental Hash Capability
//!
//! [`HashFunction`] is the uniform interface every digest in the workspace
//! implements: concrete algorithms and decorators alike. Callers hold hashes
//! as `Box<dyn HashFunction>` and never inspect the concrete type.
//!
//! ## Contract
//!
//! - `update` may be called any number of times, including zero.
//! - `finalize_into` writes exactly `output_len()` bytes and leaves the hash
//!   in its initial empty state, ready for a new message.
//! - `fresh_instance` yields an independent hash of identical configuration
//!   with no accumulated input; `duplicate_with_state` yields an independent
//!   hash carrying the same in-progress state.

use crate::error::HashError;
use crate::output::HashOutput;

/// A streaming hash function with a fixed output length.
pub trait HashFunction: Send {
    /// Identifier of the algorithm and its parameters, e.g. `SHA-256`.
    ///
    /// Used for diagnostics and registry lookups, not for dispatch.
    fn name(&self) -> String;

    /// Output length in bytes.
    fn output_len(&self) -> usize;

    /// Absorb bytes into the state.
    fn update(&mut self, data: &[u8]);

    /// Write the digest of everything absorbed so far into `out` and reset.
    ///
    /// `out` must be exactly [`output_len`](Self::output_len) bytes long;
    /// otherwise [`HashError::OutputLength`] is returned and neither `out`
    /// nor the hash state is touched.
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError>;

    /// New hash of the same configuration, in the empty state.
    fn fresh_instance(&self) -> Box<dyn HashFunction>;

    /// New hash carrying a copy of the current in-progress state.
    fn duplicate_with_state(&self) -> Box<dyn HashFunction>;

    /// Discard any absorbed input.
    fn reset(&mut self);

    /// Native output length in bits.
    fn output_bits(&self) -> usize {
        self.output_len() * 8
    }

    /// Finalize into a freshly allocated [`HashOutput`] and reset.
    fn finalize(&mut self) -> Result<HashOutput, HashError> {
        let mut out = vec![0u8; self.output_len()];
        self.finalize_into(&mut out)?;
        Ok(HashOutput::new(out))
    }
}

impl std::fmt::Debug for dyn HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashFunction")
            .field("name", &self.name())
            .field("output_len", &self.output_len())
            .finish()
    }
}

/// Check a caller-supplied finalize buffer against the hash output length.
pub fn check_output_len(expected: usize, out: &[u8]) -> Result<(), HashError> {
    if out.len() != expected {
        return Err(HashError::OutputLength {
            expected,
            actual: out.len(),
        });
    }
    Ok(())
}

/// Compute a one-shot digest, leaving `hash` reset afterwards.
pub fn hash_one_shot(hash: &mut dyn HashFunction, data: &[u8]) -> Result<HashOutput, HashError> {
    hash.update(data);
    hash.finalize()
}

/// Domain-separated hashing: H(label || data)
pub fn hash_labeled(
    hash: &mut dyn HashFunction,
    label: &str,
    data: &[u8],
) -> Result<HashOutput, HashError> {
    hash.update(label.as_bytes());
    hash.update(data);
    hash.finalize()
}
