//! # thash-crypto: Hash Backends for thash
//!
//! Concrete implementations of the [`HashFunction`](thash_core::HashFunction)
//! capability:
//!
//! - **SHA-2** family digests backed by the `sha2` crate.
//! - **Truncated digests** of any wrapped hash, at bit granularity, with the
//!   intermediate full-length digest wiped after every finalize.
//! - **Registry** that builds hashes from names such as `SHA-256` or
//!   `Truncated(SHA-512,100)`.
//!
//! ## Crate Policy
//!
//! - Depends only on `thash-core` internally.
//! - Hash algorithm internals come from RustCrypto; nothing is reimplemented.
//! - No `unsafe` code.

pub mod registry;
pub mod sha;
pub mod truncated;

// Re-export primary types.
pub use registry::{available_algorithms, create_hash, MAX_TRUNCATION_DEPTH};
pub use sha::{
    Sha224Hash, Sha256Hash, Sha2Hash, Sha2Variant, Sha384Hash, Sha512Hash, Sha512_224Hash,
    Sha512_256Hash,
};
pub use truncated::TruncatedHash;
