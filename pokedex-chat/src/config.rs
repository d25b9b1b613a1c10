//! Chat-side configuration.
//!
//! A chat config file is a core `pokedex.toml` with one extra `[chat]`
//! table:
//!
//! ```toml
//! [store]
//! path = "sqlite/gen1.sqlite"
//!
//! [chat]
//! default_game = "red"
//! command_prefix = "!"
//! ```

use serde::{Deserialize, Serialize};

use pokedex_core::config::PokedexConfig;
use pokedex_core::error::{PokedexError, Result};
use pokedex_core::version::VersionRegistry;

/// Core configuration plus chat settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatConfig {
    /// Everything the core library reads.
    #[serde(flatten)]
    pub pokedex: PokedexConfig,
    /// Chat settings.
    #[serde(default)]
    pub chat: ChatSection,
}

/// The `[chat]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSection {
    /// Game used by channels that never ran `!pokegame`.
    #[serde(default = "default_game")]
    pub default_game: String,
    /// Leading text marking a chat message as a command.
    #[serde(default = "default_prefix")]
    pub command_prefix: String,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            default_game: default_game(),
            command_prefix: default_prefix(),
        }
    }
}

fn default_game() -> String {
    "red".to_string()
}

fn default_prefix() -> String {
    "!".to_string()
}

impl ChatConfig {
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

    /// Validate the core section, then the chat section.
    ///
    /// # Errors
    /// Returns `PokedexError::Config` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        self.pokedex.validate()?;
        if self.chat.command_prefix.is_empty() {
            return Err(PokedexError::Config(
                "chat.command_prefix must not be empty".to_string(),
            ));
        }
        let registry = VersionRegistry::new(&self.pokedex.versions);
        if !registry.contains(&self.chat.default_game) {
            return Err(PokedexError::Config(format!(
                "chat.default_game '{}' is not a registered version",
                self.chat.default_game
            )));
        }
        Ok(())
    }
}
