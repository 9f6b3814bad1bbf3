//! # thash-core: Foundational Types for thash
//!
//! Defines the capability every hash in the workspace shares, so that
//! concrete algorithms and decorators such as truncation are substitutable
//! for one another.
//!
//! ## Key Design Principles
//!
//! 1. **One capability trait.** [`HashFunction`] covers incremental update,
//!    finalize-and-reset, fresh and state-carrying copies, and reset. Callers
//!    hold `Box<dyn HashFunction>` and never downcast.
//!
//! 2. **Sensitive bytes are wiped.** [`HashOutput`] zeroizes its buffer on
//!    drop.
//!
//! 3. **Single error taxonomy.** [`HashError`] is shared by every backend so
//!    that decorators propagate inner failures unchanged.
//!
//! ## Crate Policy
//!
//! - No concrete hash algorithms here; those live in `thash-crypto`.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod hash;
pub mod output;

// Re-export primary types for ergonomic imports.
pub use error::HashError;
pub use hash::{check_output_len, hash_labeled, hash_one_shot, HashFunction};
pub use output::HashOutput;
