//! # Hash Output
//!
//! Owned digest bytes returned by [`HashFunction::finalize`](crate::HashFunction::finalize).
//! The bytes are wiped when the value is dropped.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The result of a hash computation.
///
/// Length is whatever the producing hash reports as its output length, so a
/// truncated hash yields a shorter value than the digest it wraps.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct HashOutput(Vec<u8>);

impl HashOutput {
    /// Wrap already-computed digest bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Return the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of digest bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the digest is empty. Never true for a hash built by this workspace.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Copy the bytes out into a plain vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl AsRef<[u8]> for HashOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for HashOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for HashOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HashOutput({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hex_is_lowercase_and_padded() {
        let out = HashOutput::new(vec![0x00, 0x0a, 0xff]);
        assert_eq!(out.to_hex(), "000aff");
        assert_eq!(out.to_string(), "000aff");
    }

    #[test]
    fn length_accessors() {
        let out = HashOutput::new(vec![1, 2, 3, 4]);
        assert_eq!(out.len(), 4);
        assert!(!out.is_empty());
        assert!(HashOutput::new(Vec::new()).is_empty());
    }

    #[test]
    fn as_ref_matches_as_bytes() {
        let out = HashOutput::new(vec![9, 8, 7]);
        assert_eq!(out.as_ref(), out.as_bytes());
        assert_eq!(out.to_vec(), vec![9, 8, 7]);
    }

    #[test]
    fn debug_shows_hex() {
        let out = HashOutput::new(vec![0xab]);
        assert_eq!(format!("{out:?}"), "HashOutput(ab)");
    }
}
