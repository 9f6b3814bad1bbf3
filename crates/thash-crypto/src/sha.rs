//! # SHA-2 Backends
//!
//! Adapts the `sha2` crate's digests to [`HashFunction`]. The algorithm
//! internals are entirely the `sha2` crate's; this module only maps the
//! RustCrypto `Digest` surface onto the workspace capability.

use sha2::digest::generic_array::GenericArray;
use sha2::digest::FixedOutputReset;
use sha2::Digest;
use thash_core::{check_output_len, HashError, HashFunction};

/// A `sha2` digest type together with its conventional name.
pub trait Sha2Variant: Digest + FixedOutputReset + Clone + Send + 'static {
    /// Conventional algorithm identifier, e.g. `SHA-256`.
    const NAME: &'static str;
}

impl Sha2Variant for sha2::Sha224 {
    const NAME: &'static str = "SHA-224";
}

impl Sha2Variant for sha2::Sha256 {
    const NAME: &'static str = "SHA-256";
}

impl Sha2Variant for sha2::Sha384 {
    const NAME: &'static str = "SHA-384";
}

impl Sha2Variant for sha2::Sha512 {
    const NAME: &'static str = "SHA-512";
}

impl Sha2Variant for sha2::Sha512_224 {
    const NAME: &'static str = "SHA-512-224";
}

impl Sha2Variant for sha2::Sha512_256 {
    const NAME: &'static str = "SHA-512-256";
}

/// Incremental SHA-2 hash exposed through [`HashFunction`].
#[derive(Clone)]
pub struct Sha2Hash<D> {
    inner: D,
}

pub type Sha224Hash = Sha2Hash<sha2::Sha224>;
pub type Sha256Hash = Sha2Hash<sha2::Sha256>;
pub type Sha384Hash = Sha2Hash<sha2::Sha384>;
pub type Sha512Hash = Sha2Hash<sha2::Sha512>;
pub type Sha512_224Hash = Sha2Hash<sha2::Sha512_224>;
pub type Sha512_256Hash = Sha2Hash<sha2::Sha512_256>;

impl<D: Sha2Variant> Sha2Hash<D> {
    /// Create a hash in the empty state.
    pub fn new() -> Self {
        Self {
            inner: <D as Digest>::new(),
        }
    }
}

impl<D: Sha2Variant> Default for Sha2Hash<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Sha2Variant> std::fmt::Debug for Sha2Hash<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha2Hash").field("name", &D::NAME).finish()
    }
}

impl<D: Sha2Variant> HashFunction for Sha2Hash<D> {
    fn name(&self) -> String {
        D::NAME.to_string()
    }

    fn output_len(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError> {
        check_output_len(self.output_len(), out)?;
        Digest::finalize_into_reset(&mut self.inner, GenericArray::from_mut_slice(out));
        Ok(())
    }

    fn fresh_instance(&self) -> Box<dyn HashFunction> {
        Box::new(Self::new())
    }

    fn duplicate_with_state(&self) -> Box<dyn HashFunction> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.inner);
    }
}
