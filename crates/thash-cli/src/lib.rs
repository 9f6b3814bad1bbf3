//! # thash-cli: Command-Line Interface for thash
//!
//! Provides the `thash` binary.
//!
//! ## Subcommands
//!
//! - `thash digest`: Full or bit-truncated digests of files and stdin.
//! - `thash list`: Available base algorithms and their widths.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers, which take plain
//!   argument structs and an output sink so they can be tested directly.
//! - Handlers delegate all hashing to `thash-crypto`.

pub mod config;
pub mod digest;
pub mod list;
