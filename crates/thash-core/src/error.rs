//! # Hash Error Types
//!
//! Structured errors for every hash operation in the workspace.
//! Uses `thiserror` for ergonomic error definitions with diagnostic context.

use thiserror::Error;

/// Errors from hash construction, lookup, and finalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// A hash was configured with parameters it cannot honour, e.g. a
    /// truncation length of zero bits or longer than the wrapped digest.
    /// Raised only at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A finalize buffer does not match the hash output length.
    #[error("output buffer length mismatch: expected {expected} bytes, got {actual}")]
    OutputLength {
        /// Output length of the hash, in bytes.
        expected: usize,
        /// Length of the buffer supplied by the caller.
        actual: usize,
    },

    /// No hash is registered under the requested name.
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A hash specification string could not be parsed.
    #[error("invalid hash specification: {0}")]
    InvalidSpec(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_display() {
        let err = HashError::InvalidConfiguration("zero bits".to_string());
        assert!(format!("{err}").contains("zero bits"));
    }

    #[test]
    fn output_length_display() {
        let err = HashError::OutputLength {
            expected: 32,
            actual: 16,
        };
        let msg = format!("{err}");
        assert!(msg.contains("32 bytes"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn unknown_algorithm_display() {
        let err = HashError::UnknownAlgorithm("MD4".to_string());
        assert!(format!("{err}").contains("MD4"));
    }

    #[test]
    fn invalid_spec_display() {
        let err = HashError::InvalidSpec("Truncated(SHA-256".to_string());
        assert!(format!("{err}").contains("Truncated(SHA-256"));
    }

    #[test]
    fn all_variants_are_debug() {
        let variants: Vec<HashError> = vec![
            HashError::InvalidConfiguration("a".to_string()),
            HashError::OutputLength {
                expected: 1,
                actual: 2,
            },
            HashError::UnknownAlgorithm("b".to_string()),
            HashError::InvalidSpec("c".to_string()),
        ];
        for v in variants {
            assert!(!format!("{v:?}").is_empty());
        }
    }
}
