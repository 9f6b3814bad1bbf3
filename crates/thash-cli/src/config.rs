//! # CLI Configuration
//!
//! Optional YAML file supplying defaults for the `digest` subcommand:
//!
//! ```yaml
//! hash: SHA-512
//! bits: 100
//! ```
//!
//! Precedence is command-line flag, then config file, then built-in default
//! (`SHA-256`, no truncation).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Hash used when neither a flag nor the config file names one.
pub const DEFAULT_HASH: &str = "SHA-256";

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default hash specification, e.g. `SHA-512` or `Truncated(SHA-512,100)`.
    #[serde(default)]
    pub hash: Option<String>,
    /// Default truncation width in bits.
    #[serde(default)]
    pub bits: Option<usize>,
}

/// Effective hash selection after merging flags, config, and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSettings {
    /// Registry spec of the base hash, e.g. `SHA-256`.
    pub hash: String,
    /// Truncation width in bits; `None` keeps the full digest.
    pub bits: Option<usize>,
}

impl Config {
    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Merge command-line overrides over this config.
    pub fn resolve(&self, hash: Option<&str>, bits: Option<usize>) -> DigestSettings {
        DigestSettings {
            hash: hash
                .map(str::to_string)
                .or_else(|| self.hash.clone())
                .unwrap_or_else(|| DEFAULT_HASH.to_string()),
            bits: bits.or(self.bits),
        }
    }
}

impl DigestSettings {
    /// Registry specification for these settings.
    pub fn spec(&self) -> String {
        match self.bits {
            Some(bits) => format!("Truncated({},{bits})", self.hash),
            None => self.hash.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        let settings = Config::default().resolve(None, None);
        assert_eq!(settings.hash, DEFAULT_HASH);
        assert_eq!(settings.bits, None);
        assert_eq!(settings.spec(), "SHA-256");
    }

    #[test]
    fn config_overrides_defaults() {
        let config = Config {
            hash: Some("SHA-512".to_string()),
            bits: Some(100),
        };
        let settings = config.resolve(None, None);
        assert_eq!(settings.spec(), "Truncated(SHA-512,100)");
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            hash: Some("SHA-512".to_string()),
            bits: Some(100),
        };
        let settings = config.resolve(Some("SHA-384"), Some(12));
        assert_eq!(settings.spec(), "Truncated(SHA-384,12)");
    }

    #[test]
    fn load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thash.yaml");
        std::fs::write(&path, "hash: SHA-512\nbits: 100\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.hash.as_deref(), Some("SHA-512"));
        assert_eq!(config.bits, Some(100));
    }

    #[test]
    fn load_partial_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thash.yaml");
        std::fs::write(&path, "bits: 12\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.hash, None);
        assert_eq!(config.resolve(None, None).spec(), "Truncated(SHA-256,12)");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thash.yaml");
        std::fs::write(&path, "algorithm: SHA-512\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
