//! Error types for chat dispatch.

use thiserror::Error;

use pokedex_core::error::PokedexError;

/// Why a chat message could not be answered.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The lookup itself failed.
    #[error(transparent)]
    Pokedex(#[from] PokedexError),

    /// The blocking lookup task panicked or was cancelled.
    #[error("Lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A reply line could not be delivered.
    #[error("Reply delivery failed: {0}")]
    Sink(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, DispatchError>;
