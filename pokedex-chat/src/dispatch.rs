//! Async message handling.
//!
//! [`Dispatcher::handle`] turns one chat message into the lines to send
//! back. Lookups are blocking (SQLite), so each one runs on tokio's blocking
//! pool; inside that task the request still runs start to finish on a
//! single thread.

use std::sync::Arc;

use tracing::{debug, info, warn};

use pokedex_core::Pokedex;
use pokedex_core::types::Request;
use pokedex_core::version::VersionRegistry;

use crate::commands::{self, Command, CommandSpec};
use crate::config::ChatSection;
use crate::error::Result;
use crate::settings::ChannelSettings;
use crate::sink::MessageSink;

/// Reply when a game token is not registered.
pub const UNKNOWN_GAME: &str = "Unable to recognize the game";

/// Answers chat messages for any number of channels.
pub struct Dispatcher {
    pokedex: Arc<Pokedex>,
    settings: Arc<dyn ChannelSettings>,
    chat: ChatSection,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pokedex", &self.pokedex)
            .field("chat", &self.chat)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Build a dispatcher over a shared Pokédex and settings store.
    #[must_use]
    pub fn new(
        pokedex: Arc<Pokedex>,
        settings: Arc<dyn ChannelSettings>,
        chat: ChatSection,
    ) -> Self {
        Self {
            pokedex,
            settings,
            chat,
        }
    }

    /// The Pokédex lookups run against.
    #[must_use]
    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// The game a channel's lookups use.
    #[must_use]
    pub fn game_for(&self, channel: &str) -> String {
        self.settings
            .game(channel)
            .unwrap_or_else(|| self.chat.default_game.clone())
    }

    /// Answer one chat message.
    ///
    /// Returns `Ok(None)` when the message is not a Pokédex command.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DispatchError`] if the dataset faults or the lookup
    /// task dies. An unknown game is answered, not raised.
    pub async fn handle(&self, channel: &str, message: &str) -> Result<Option<Vec<String>>> {
        let Some(invocation) = commands::split(&self.chat.command_prefix, message) else {
            return Ok(None);
        };
        let Some(command) = Command::from_name(invocation.name) else {
            debug!(name = invocation.name, "Not a pokedex command");
            return Ok(None);
        };
        let lines = match command {
            Command::Game => self.game_command(channel, invocation.args),
            Command::Lookup(spec) => self.lookup(channel, spec, invocation.args).await?,
        };
        Ok(Some(lines))
    }

    /// Answer one chat message and deliver the reply through `sink`.
    ///
    /// Returns the number of lines sent; zero when the message is not a
    /// Pokédex command.
    ///
    /// # Errors
    ///
    /// As [`Dispatcher::handle`], plus [`crate::DispatchError::Sink`] when a
    /// line cannot be delivered. Lines before the failing one stay sent.
    pub async fn respond(
        &self,
        channel: &str,
        message: &str,
        sink: &dyn MessageSink,
    ) -> Result<usize> {
        let Some(lines) = self.handle(channel, message).await? else {
            return Ok(0);
        };
        for line in &lines {
            sink.send(channel, line)?;
        }
        Ok(lines.len())
    }

    fn game_command(&self, channel: &str, args: &str) -> Vec<String> {
        let Some(token) = args.split_whitespace().next() else {
            let game = self.game_for(channel);
            return vec![format!(
                "Bot Pokedex is currently set to {}",
                capitalise(&game)
            )];
        };
        let token = VersionRegistry::normalise(token);
        if !self.pokedex.registry().contains(&token) {
            return vec![UNKNOWN_GAME.to_string()];
        }
        self.settings.set_game(channel, &token);
        info!(channel = %channel, game = %token, "Channel game changed");
        vec![format!("Set the Bot Pokedex to Pokemon {}", capitalise(&token))]
    }

    async fn lookup(&self, channel: &str, spec: CommandSpec, args: &str) -> Result<Vec<String>> {
        if args.is_empty() {
            return Ok(vec![spec.usage.to_string()]);
        }
        let request = Request::new(spec.report, self.game_for(channel), args).with_flags(spec.flags);
        let pokedex = Arc::clone(&self.pokedex);
        let result = tokio::task::spawn_blocking(move || pokedex.lookup(&request)).await?;
        match result {
            Ok(report) => Ok(report.into_lines()),
            Err(e) if e.is_user_error() => {
                warn!(channel = %channel, error = %e, "Channel game is not usable");
                Ok(vec![UNKNOWN_GAME.to_string()])
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// `red` -> `Red`.
fn capitalise(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalise_first_letter_only() {
        assert_eq!(capitalise("red"), "Red");
        assert_eq!(capitalise("yellow"), "Yellow");
        assert_eq!(capitalise(""), "");
    }
}
