//! Per-generation resolver and composer pairs.
//!
//! A dataset generation plugs into the [`Pokedex`](crate::Pokedex) by
//! implementing [`Generation`]. Supporting a new generation means adding an
//! implementation and registering its version aliases; existing ones are left
//! untouched.

use serde::Serialize;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::store::Session;
use crate::types::{EntityId, EntityKind, GenerationId, Request, Scope};

/// The finished lines of one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    lines: Vec<String>,
    found: bool,
}

impl Report {
    /// A report whose subject was found.
    #[must_use]
    pub fn found(lines: Vec<String>) -> Self {
        Self { lines, found: true }
    }

    /// A report that ends in a single not-found line.
    #[must_use]
    pub fn not_found(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            found: false,
        }
    }

    /// Whether the report's subject was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// The lines, in delivery order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take ownership of the lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Identifier resolution and report composition for one dataset generation.
pub trait Generation: Send + Sync {
    /// Which generation this is.
    fn id(&self) -> GenerationId;

    /// Scope ids of a version token, or `None` if the dataset does not know it.
    ///
    /// # Errors
    /// Returns a store fault if the dataset query fails.
    fn scope(&self, session: &Session, token: &str) -> Result<Option<Scope>>;

    /// Turn a raw query into an entity id.
    ///
    /// # Errors
    /// Returns a store fault if the dataset query fails.
    fn resolve(
        &self,
        session: &Session,
        scope: Scope,
        kind: EntityKind,
        query: &str,
    ) -> Result<Option<EntityId>>;

    /// Compose the report a request asks for.
    ///
    /// # Errors
    /// Returns a store fault if any dataset query fails. Not-found subjects
    /// are reports, not errors.
    fn compose(
        &self,
        session: &Session,
        scope: Scope,
        request: &Request,
        output: &OutputConfig,
    ) -> Result<Report>;
}
