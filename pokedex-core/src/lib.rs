//! # Pokédex Core Library
//!
//! Answers free-text and numeric lookups against a read-only, versioned
//! Pokémon reference dataset and renders the answer as short text lines.
//!
//! A request flows through four stages:
//!
//! - **Version Resolver** ([`version`]): version token to dataset scope.
//! - **Identifier Resolver** ([`resolve`], [`gen1::resolve`]): raw query to
//!   entity id via ordered, short-circuiting strategies.
//! - **Report Composer** ([`gen1`]): one pure function per [`ReportKind`].
//! - **Paginator** ([`paginate`]): long listings split into bounded chunks.
//!
//! [`Pokedex`] wires them together over a [`ReferenceStore`].
//!
//! ```no_run
//! use pokedex_core::{Pokedex, PokedexConfig, ReportKind, Request};
//!
//! let dex = Pokedex::open(&PokedexConfig::default())?;
//! let report = dex.lookup(&Request::new(ReportKind::Dex, "red", "bulbasaur"))?;
//! for line in report.lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), pokedex_core::PokedexError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod encounter;
pub mod error;
pub mod format;
pub mod gen1;
pub mod generation;
pub mod metrics;
pub mod paginate;
pub mod pokedex;
pub mod resolve;
pub mod store;
pub mod types;
pub mod version;

pub use config::PokedexConfig;
pub use error::PokedexError;
pub use generation::{Generation, Report};
pub use paginate::Paginator;
pub use pokedex::Pokedex;
pub use store::{ReferenceStore, Session, SqliteStore};
pub use types::*;
pub use version::VersionRegistry;
