//! Version Resolver.
//!
//! Resolution happens in two steps. The alias table decides which
//! generation a token belongs to without touching the dataset, so an
//! unknown token fails before any session is opened. The generation then
//! looks the token up in its own version table to get the [`Scope`] ids.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::VersionsConfig;
use crate::error::{PokedexError, Result};
use crate::types::GenerationId;

/// Alias token to generation mapping.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    aliases: BTreeMap<String, GenerationId>,
}

impl VersionRegistry {
    /// Build the registry from configuration.
    #[must_use]
    pub fn new(config: &VersionsConfig) -> Self {
        let aliases = config
            .aliases
            .iter()
            .map(|(token, generation)| (token.to_lowercase(), *generation))
            .collect();
        Self { aliases }
    }

    /// Normalise a user-supplied token the way aliases are stored.
    #[must_use]
    pub fn normalise(token: &str) -> String {
        token.trim().to_lowercase()
    }

    /// Which generation serves `token`.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::UnknownVersion`] if no alias matches.
    pub fn generation_for(&self, token: &str) -> Result<GenerationId> {
        let key = Self::normalise(token);
        let generation = self
            .aliases
            .get(&key)
            .copied()
            .ok_or_else(|| PokedexError::UnknownVersion(token.to_string()))?;
        debug!(token = %key, generation = %generation, "Version alias resolved");
        Ok(generation)
    }

    /// Whether `token` is a registered alias.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.aliases.contains_key(&Self::normalise(token))
    }

    /// All registered aliases, sorted.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::new(&VersionsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editions_alias_the_same_generation() {
        let registry = VersionRegistry::default();
        for token in ["red", "blue", "yellow"] {
            assert_eq!(registry.generation_for(token).expect(token), GenerationId::Gen1);
        }
    }

    #[test]
    fn tokens_are_case_insensitive() {
        let registry = VersionRegistry::default();
        assert!(registry.contains("Red"));
        assert_eq!(registry.generation_for(" BLUE ").expect("blue"), GenerationId::Gen1);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let registry = VersionRegistry::default();
        let err = registry.generation_for("gold").unwrap_err();
        assert!(matches!(err, PokedexError::UnknownVersion(ref t) if t == "gold"));
    }

    #[test]
    fn tokens_are_listed_sorted() {
        let registry = VersionRegistry::default();
        let tokens: Vec<_> = registry.tokens().collect();
        assert_eq!(tokens, vec!["blue", "red", "yellow"]);
    }
}
