//! # pokedex-chat — Chat Integration for the Pokédex
//!
//! This crate sits between a chat runtime and the synchronous
//! `pokedex-core` library.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               chat runtime               │
//! │  ┌────────────────────────────────────┐  │
//! │  │            pokedex-chat            │  │
//! │  │  ┌───────────┐  ┌───────────────┐  │  │
//! │  │  │ Commands  │  │   Settings    │  │  │
//! │  │  └─────┬─────┘  └───────┬───────┘  │  │
//! │  │        ▼                ▼          │  │
//! │  │  ┌──────────────────────────────┐  │  │
//! │  │  │ Dispatcher (blocking pool)   │──┼──┼─▶ MessageSink
//! │  │  └──────────────┬───────────────┘  │  │
//! │  │                 ▼                  │  │
//! │  │  ┌──────────────────────────────┐  │  │
//! │  │  │         pokedex-core         │  │  │
//! │  │  └──────────────────────────────┘  │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `commands` — command names, suffix flags and usage hints
//! - `config` — `ChatConfig` (core config plus chat settings)
//! - `dispatch` — async message handling over a blocking lookup
//! - `error` — dispatch errors
//! - `settings` — per-channel game selection
//! - `sink` — delivery of reply lines

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod settings;
pub mod sink;

pub use commands::{Command, CommandSpec};
pub use config::ChatConfig;
pub use dispatch::Dispatcher;
pub use error::DispatchError;
pub use settings::{ChannelSettings, MemorySettings};
pub use sink::{MessageSink, RecordingSink, WriterSink};
