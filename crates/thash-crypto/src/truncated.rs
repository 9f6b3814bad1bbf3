//! # Truncated Digest Adapter
//!
//! [`TruncatedHash`] wraps any [`HashFunction`] and cuts its digest down to
//! an arbitrary number of bits. The result is itself a [`HashFunction`], so
//! it can stand in wherever a hash is expected (including inside another
//! `TruncatedHash`).
//!
//! ## Bit-exact truncation
//!
//! A request for `n` bits yields `ceil(n / 8)` bytes. When `n` is not a
//! multiple of 8 the unwanted low-order bits of the final byte are cleared,
//! so 12 bits of `e3 b0 c4 ..` is `e3 b0` and 12 bits of `ba 78 16 ..` is
//! `ba 70`.
//!
//! ## Security Invariant
//!
//! The wrapped hash finalizes into a scratch buffer owned by the adapter.
//! That buffer holds digest bytes which are never released to the caller, so
//! it is wiped with [`zeroize`] immediately after every finalize (also when
//! the inner hash fails) and again when the adapter is dropped.

use thash_core::{check_output_len, HashError, HashFunction};
use zeroize::{Zeroize, Zeroizing};

/// A hash whose output is the first `output_bits` bits of an inner hash.
pub struct TruncatedHash {
    hash: Box<dyn HashFunction>,
    output_bits: usize,
    buffer: Zeroizing<Vec<u8>>,
}

impl TruncatedHash {
    /// Wrap `hash`, truncating its digest to `output_bits` bits.
    ///
    /// Fails with [`HashError::InvalidConfiguration`] when `output_bits` is
    /// zero or exceeds `8 * hash.output_len()`. The value is never clamped.
    pub fn new(hash: Box<dyn HashFunction>, output_bits: usize) -> Result<Self, HashError> {
        // The scratch buffer is `output_len()` bytes; bound by that, not by
        // `output_bits()`, which implementors may override.
        let native_bits = hash.output_len() * 8;
        if output_bits == 0 {
            tracing::warn!(hash = %hash.name(), "rejected truncation to zero bits");
            return Err(HashError::InvalidConfiguration(format!(
                "truncating {} to zero bits produces an empty digest",
                hash.name()
            )));
        }
        if output_bits > native_bits {
            tracing::warn!(
                hash = %hash.name(),
                output_bits,
                native_bits,
                "rejected truncation beyond native output length"
            );
            return Err(HashError::InvalidConfiguration(format!(
                "{} produces {native_bits} bits, cannot truncate to {output_bits}",
                hash.name()
            )));
        }

        tracing::debug!(hash = %hash.name(), output_bits, "constructed truncated hash");
        Ok(Self::wrap(hash, output_bits))
    }

    /// Build the adapter for a configuration already known to be valid.
    fn wrap(hash: Box<dyn HashFunction>, output_bits: usize) -> Self {
        let buffer = Zeroizing::new(vec![0u8; hash.output_len()]);
        Self {
            hash,
            output_bits,
            buffer,
        }
    }

    /// Number of bits kept from the inner digest.
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }
}

/// Mask keeping the top `((output_bits - 1) % 8) + 1` bits of the last byte.
///
/// All ones when `output_bits` is a multiple of 8. `output_bits` must be
/// non-zero.
pub fn last_byte_mask(output_bits: usize) -> u8 {
    let bits_in_last_byte = ((output_bits - 1) % 8) + 1;
    0xFFu8 << (8 - bits_in_last_byte)
}

impl HashFunction for TruncatedHash {
    fn name(&self) -> String {
        format!("Truncated({},{})", self.hash.name(), self.output_bits)
    }

    fn output_len(&self) -> usize {
        self.output_bits.div_ceil(8)
    }

    // Reports the truncated width rather than the byte-rounded length.
    fn output_bits(&self) -> usize {
        self.output_bits
    }

    fn update(&mut self, data: &[u8]) {
        self.hash.update(data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError> {
        check_output_len(self.output_len(), out)?;

        let finalized = self.hash.finalize_into(self.buffer.as_mut_slice());
        if finalized.is_ok() {
            out.copy_from_slice(&self.buffer[..out.len()]);
        }
        self.buffer.as_mut_slice().zeroize();
        finalized?;

        if let Some(last) = out.last_mut() {
            *last &= last_byte_mask(self.output_bits);
        }
        Ok(())
    }

    fn fresh_instance(&self) -> Box<dyn HashFunction> {
        Box::new(Self::wrap(self.hash.fresh_instance(), self.output_bits))
    }

    fn duplicate_with_state(&self) -> Box<dyn HashFunction> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        self.hash.reset();
    }
}

impl Clone for TruncatedHash {
    fn clone(&self) -> Self {
        Self::wrap(self.hash.duplicate_with_state(), self.output_bits)
    }
}

impl std::fmt::Debug for TruncatedHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruncatedHash")
            .field("name", &self.name())
            .field("output_bits", &self.output_bits)
            .finish_non_exhaustive()
    }
}
