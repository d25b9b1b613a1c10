//! The lookup pipeline.
//!
//! One request runs strictly in sequence: alias check, session acquire,
//! version scope, report composition. The alias check needs no dataset, so
//! an unknown version token fails before any session is opened. The session
//! is held for the rest of the request and dropped on every exit path.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use tracing::{info_span, warn};

use crate::config::{OutputConfig, PokedexConfig};
use crate::error::{PokedexError, Result};
use crate::gen1::Gen1;
use crate::generation::{Generation, Report};
use crate::metrics::{LatencyHistogram, PokedexCounters};
use crate::store::{ReferenceStore, Session, SqliteStore};
use crate::types::{EntityId, EntityKind, GenerationId, Request, Scope};
use crate::version::VersionRegistry;

/// Answers lookups against a reference dataset.
pub struct Pokedex {
    store: Arc<dyn ReferenceStore>,
    registry: VersionRegistry,
    generations: HashMap<GenerationId, Box<dyn Generation>>,
    output: OutputConfig,
    counters: PokedexCounters,
    latency: LatencyHistogram,
}

impl std::fmt::Debug for Pokedex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pokedex")
            .field("registry", &self.registry)
            .field("generations", &self.generations.keys().collect::<Vec<_>>())
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl Pokedex {
    /// Build a Pokédex over `store` with every built-in generation installed.
    #[must_use]
    pub fn new(config: &PokedexConfig, store: Arc<dyn ReferenceStore>) -> Self {
        Self {
            store,
            registry: VersionRegistry::new(&config.versions),
            generations: HashMap::new(),
            output: config.output.clone(),
            counters: PokedexCounters::new(),
            latency: LatencyHistogram::new(),
        }
        .with_generation(Gen1)
    }

    /// Open the dataset file named by `config.store` and build a Pokédex on it.
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be opened.
    pub fn open(config: &PokedexConfig) -> Result<Self> {
        let store = SqliteStore::open(&config.store)?;
        Ok(Self::new(config, Arc::new(store)))
    }

    /// Install (or replace) a generation implementation.
    #[must_use]
    pub fn with_generation(mut self, generation: impl Generation + 'static) -> Self {
        self.generations.insert(generation.id(), Box::new(generation));
        self
    }

    /// The alias table.
    #[must_use]
    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    /// Request counters.
    #[must_use]
    pub fn counters(&self) -> &PokedexCounters {
        &self.counters
    }

    /// Request latency history.
    #[must_use]
    pub fn latency(&self) -> &LatencyHistogram {
        &self.latency
    }

    /// Pagination settings applied to every report.
    #[must_use]
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Answer one request.
    ///
    /// # Errors
    ///
    /// - [`PokedexError::UnknownVersion`] if the version token is not
    ///   registered or the dataset has no such version.
    /// - [`PokedexError::ReferenceStore`] if the dataset fails mid-request.
    ///
    /// A query that matches nothing is a normal report ending in a
    /// not-found line.
    pub fn lookup(&self, request: &Request) -> Result<Report> {
        let span = info_span!(
            "pokedex_request",
            report = ?request.report,
            version = %request.version,
            query = %request.query,
        );
        let _enter = span.enter();
        let _timer = self.latency.start();
        self.counters.requests.fetch_add(1, Ordering::Relaxed);

        let result = self.scoped(&request.version, |generation, session, scope| {
            generation.compose(session, scope, request, &self.output)
        });
        self.record(&result);
        result
    }

    /// Resolve a raw query to an entity id without composing a report.
    ///
    /// # Errors
    /// Same as [`Pokedex::lookup`].
    pub fn resolve(&self, version: &str, kind: EntityKind, query: &str) -> Result<Option<EntityId>> {
        self.scoped(version, |generation, session, scope| {
            generation.resolve(session, scope, kind, query)
        })
    }

    /// Run `f` with the generation, a fresh session and the version scope.
    fn scoped<T>(
        &self,
        version: &str,
        f: impl FnOnce(&dyn Generation, &Session, Scope) -> Result<T>,
    ) -> Result<T> {
        let id = self.registry.generation_for(version)?;
        let generation = self
            .generations
            .get(&id)
            .ok_or(PokedexError::UnsupportedGeneration(id))?;
        let session = self.store.acquire()?;
        let token = VersionRegistry::normalise(version);
        let scope = generation
            .scope(&session, &token)?
            .ok_or_else(|| PokedexError::UnknownVersion(version.to_string()))?;
        f(&**generation, &session, scope)
    }

    fn record(&self, result: &Result<Report>) {
        match result {
            Ok(report) => {
                let lines = u64::try_from(report.lines().len()).unwrap_or(u64::MAX);
                self.counters.lines_emitted.fetch_add(lines, Ordering::Relaxed);
                if !report.is_found() {
                    self.counters.not_found.fetch_add(1, Ordering::Relaxed);
                }
            }
            Err(PokedexError::UnknownVersion(token)) => {
                self.counters.unknown_versions.fetch_add(1, Ordering::Relaxed);
                warn!(token = %token, "Unknown version requested");
            }
            Err(PokedexError::ReferenceStore(e)) => {
                self.counters.store_faults.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "Reference store fault");
            }
            Err(e) => warn!(error = %e, "Lookup failed"),
        }
    }
}
