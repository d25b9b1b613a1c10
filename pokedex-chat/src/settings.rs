//! Per-channel settings.
//!
//! The only setting today is the game a channel's lookups run against.
//! Storage is behind [`ChannelSettings`] so a bot can keep it wherever it
//! keeps the rest of its channel state; [`MemorySettings`] is the in-process
//! implementation.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Where channel settings live.
pub trait ChannelSettings: Send + Sync {
    /// The channel's game token, if one was ever set.
    fn game(&self, channel: &str) -> Option<String>;

    /// Store the channel's game token.
    fn set_game(&self, channel: &str, game: &str);
}

/// Channel settings held in memory.
#[derive(Debug, Default)]
pub struct MemorySettings {
    games: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    /// Empty settings: every channel uses the default game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of channels with a game set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    /// Whether no channel has a game set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }
}

impl ChannelSettings for MemorySettings {
    fn game(&self, channel: &str) -> Option<String> {
        self.games.read().get(channel).cloned()
    }

    fn set_game(&self, channel: &str, game: &str) {
        self.games
            .write()
            .insert(channel.to_string(), game.to_lowercase());
    }
}
