//! Error types for the Pokédex core library.
//!
//! A query that matches nothing is not an error: resolvers return `None` and
//! the report renders its own not-found line.

use thiserror::Error;

use crate::types::GenerationId;

/// Top-level error type for all Pokédex operations.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The version token is not registered, or the dataset has no row for it.
    #[error("Unknown game version: {0}")]
    UnknownVersion(String),

    /// A version alias points at a generation with no installed implementation.
    #[error("No implementation installed for generation {0}")]
    UnsupportedGeneration(GenerationId),

    /// The reference dataset is unreachable or a query against it failed.
    #[error("Reference store fault: {0}")]
    ReferenceStore(#[from] rusqlite::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// Whether the error was caused by the caller's input rather than by the
    /// dataset or the host.
    ///
    /// `true` only for [`PokedexError::UnknownVersion`]: the caller can fix it
    /// by naming another game. Every other variant is an infrastructure fault.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::UnknownVersion(_))
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_version_is_a_user_error() {
        let err = PokedexError::UnknownVersion("gold".to_string());
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "Unknown game version: gold");
    }

    #[test]
    fn store_fault_wraps_rusqlite() {
        let err: PokedexError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(!err.is_user_error());
        assert!(err.to_string().starts_with("Reference store fault"));
    }

    #[test]
    fn only_unknown_version_is_a_user_error() {
        assert!(!PokedexError::Config("message_limit must be positive".to_string()).is_user_error());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gen1.sqlite");
        assert!(!PokedexError::Io(io).is_user_error());
    }
}
