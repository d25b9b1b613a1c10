//! Configuration for the Pokédex.
//!
//! Maps directly to `pokedex.toml`. Every field has a serde default, so an
//! empty document is a valid configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PokedexError, Result};
use crate::types::GenerationId;

/// Top-level Pokédex configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PokedexConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Reference dataset location and connection tuning.
    #[serde(default)]
    pub store: StoreConfig,
    /// Output sizing.
    #[serde(default)]
    pub output: OutputConfig,
    /// Version alias table.
    #[serde(default)]
    pub versions: VersionsConfig,
}

impl PokedexConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `PokedexError::Config` if the TOML is invalid or fails validation.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| PokedexError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject values the composer cannot work with.
    ///
    /// # Errors
    /// Returns `PokedexError::Config` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.output.message_limit == 0 {
            return Err(PokedexError::Config(
                "output.message_limit must be greater than zero".to_string(),
            ));
        }
        if self.output.tm_batch_size == 0 {
            return Err(PokedexError::Config(
                "output.tm_batch_size must be greater than zero".to_string(),
            ));
        }
        if self.versions.aliases.is_empty() {
            return Err(PokedexError::Config(
                "versions must register at least one alias".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where the reference dataset lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite dataset file. Opened read-only.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    /// How long a session waits on a locked database before faulting.
    #[serde(default = "default_5000")]
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            busy_timeout_ms: 5000,
        }
    }
}

/// Output sizing for composed reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Maximum characters per emitted line for length-bounded listings.
    #[serde(default = "default_500")]
    pub message_limit: usize,
    /// Number of TM entries per line in full TM listings.
    #[serde(default = "default_5_usize")]
    pub tm_batch_size: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            message_limit: 500,
            tm_batch_size: 5,
        }
    }
}

/// Alias tokens and the generation each one selects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionsConfig {
    /// `token -> generation`, e.g. `red = "gen1"`.
    pub aliases: BTreeMap<String, GenerationId>,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        let aliases = ["red", "blue", "yellow"]
            .into_iter()
            .map(|token| (token.to_string(), GenerationId::Gen1))
            .collect();
        Self { aliases }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_store_path() -> PathBuf { PathBuf::from("sqlite/gen1.sqlite") }
fn default_5_usize() -> usize { 5 }
fn default_500() -> usize { 500 }
fn default_5000() -> u64 { 5000 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PokedexConfig::from_toml("").expect("parse");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.output.message_limit, 500);
        assert_eq!(config.output.tm_batch_size, 5);
        assert_eq!(config.store.path, PathBuf::from("sqlite/gen1.sqlite"));
        assert_eq!(config.versions.aliases.len(), 3);
        assert_eq!(config.versions.aliases.get("yellow"), Some(&GenerationId::Gen1));
    }

    #[test]
    fn custom_aliases_replace_defaults() {
        let config = PokedexConfig::from_toml(
            r#"
            [output]
            message_limit = 120

            [versions]
            green = "gen1"
            "#,
        )
        .expect("parse");
        assert_eq!(config.output.message_limit, 120);
        assert_eq!(config.versions.aliases.len(), 1);
        assert!(config.versions.aliases.contains_key("green"));
    }

    #[test]
    fn unknown_generation_is_rejected() {
        let err = PokedexConfig::from_toml("[versions]\ngold = \"gen2\"\n").unwrap_err();
        assert!(matches!(err, PokedexError::Config(_)));
    }

    #[test]
    fn zero_message_limit_is_rejected() {
        let err = PokedexConfig::from_toml("[output]\nmessage_limit = 0\n").unwrap_err();
        assert!(err.to_string().contains("message_limit"));
    }
}
