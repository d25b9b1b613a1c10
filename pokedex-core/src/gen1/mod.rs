//! Red, Blue and Yellow.
//!
//! Every report is a plain function from a [`ReportContext`] to a
//! [`Report`]; [`composer`] maps each [`ReportKind`] to its function.

pub mod effects;
pub mod resolve;
pub mod tables;

mod index;
mod locations;
mod moves;
mod pokemon;

use std::time::Instant;

use tracing::debug;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::generation::{Generation, Report};
use crate::store::Session;
use crate::types::{EntityId, EntityKind, GenerationId, ReportKind, Request, Scope};

use self::resolve::Lookup;
use self::tables::Gen1Tables;

/// Not-found line for species reports.
pub const POKEMON_NOT_FOUND: &str = "Pokemon Not Found";
/// Not-found line for move reports.
pub const MOVE_NOT_FOUND: &str = "Move Not Found";
/// Not-found line for location reports.
pub const LOCATION_NOT_FOUND: &str = "Location Not Found";
/// Not-found line for the learnset report, which accepts either.
pub const POKEMON_OR_MOVE_NOT_FOUND: &str = "Pokemon or Move Not Found";

/// Inputs shared by every Gen 1 report.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Resolver context (queries + scope).
    pub lookup: Lookup<'a>,
    /// The request being answered.
    pub request: &'a Request,
    /// Pagination settings.
    pub output: &'a OutputConfig,
}

impl<'a> ReportContext<'a> {
    fn tables(&self) -> Gen1Tables<'a> {
        self.lookup.tables
    }

    fn scope(&self) -> Scope {
        self.lookup.scope
    }

    fn query(&self) -> &'a str {
        &self.request.query
    }
}

/// A report composer.
pub type Composer = fn(&ReportContext<'_>) -> Result<Report>;

/// The composer for each report kind.
#[must_use]
pub fn composer(kind: ReportKind) -> Composer {
    match kind {
        ReportKind::Dex => pokemon::dex,
        ReportKind::Entry => pokemon::entry,
        ReportKind::Stats => pokemon::stats,
        ReportKind::Evolve => pokemon::evolve,
        ReportKind::Learn => pokemon::learn,
        ReportKind::Index => index::index,
        ReportKind::Move => moves::detail,
        ReportKind::TmHm => moves::tmhm,
        ReportKind::Tm => moves::tm,
        ReportKind::Hm => moves::hm,
        ReportKind::Location => locations::location,
        ReportKind::Wild => locations::wild,
        ReportKind::Surf => locations::surf,
        ReportKind::Fish => locations::fish,
    }
}

/// The Gen 1 generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gen1;

impl Generation for Gen1 {
    fn id(&self) -> GenerationId {
        GenerationId::Gen1
    }

    fn scope(&self, session: &Session, token: &str) -> Result<Option<Scope>> {
        Gen1Tables::new(session.conn()).scope(token)
    }

    fn resolve(
        &self,
        session: &Session,
        scope: Scope,
        kind: EntityKind,
        query: &str,
    ) -> Result<Option<EntityId>> {
        let lookup = Lookup {
            tables: Gen1Tables::new(session.conn()),
            scope,
        };
        resolve::resolve(&lookup, kind, query)
    }

    fn compose(
        &self,
        session: &Session,
        scope: Scope,
        request: &Request,
        output: &OutputConfig,
    ) -> Result<Report> {
        let start = Instant::now();
        let ctx = ReportContext {
            lookup: Lookup {
                tables: Gen1Tables::new(session.conn()),
                scope,
            },
            request,
            output,
        };
        let report = composer(request.report)(&ctx)?;
        debug!(
            report = ?request.report,
            lines = report.lines().len(),
            found = report.is_found(),
            elapsed_us = start.elapsed().as_micros(),
            "Composed report"
        );
        Ok(report)
    }
}
