//! Ordered, short-circuiting query resolution.
//!
//! Each entity kind declares its strategies as a plain slice. They run in
//! order and the first one that produces a match wins; later strategies are
//! never consulted. A strategy that cannot interpret the query (a malformed
//! number, a missing `0x` prefix) answers `Ok(None)` so resolution falls
//! through. Only dataset faults stop resolution early.

use tracing::trace;

use crate::error::Result;

/// One named way of turning a query into an id.
pub struct Strategy<C, T> {
    /// Short name for logs.
    pub name: &'static str,
    /// The lookup itself.
    pub run: fn(&C, &str) -> Result<Option<T>>,
}

impl<C, T> Clone for Strategy<C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for Strategy<C, T> {}

impl<C, T> std::fmt::Debug for Strategy<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

/// Run `strategies` in order against `query`, returning the first match.
///
/// # Errors
///
/// Propagates the first dataset fault raised by a strategy.
pub fn first_match<C, T>(strategies: &[Strategy<C, T>], ctx: &C, query: &str) -> Result<Option<T>> {
    for strategy in strategies {
        if let Some(found) = (strategy.run)(ctx, query)? {
            trace!(strategy = strategy.name, query, "Resolver strategy matched");
            return Ok(Some(found));
        }
    }
    trace!(query, tried = strategies.len(), "No resolver strategy matched");
    Ok(None)
}

/// Parse a plain decimal integer, tolerating surrounding whitespace.
#[must_use]
pub fn parse_decimal(query: &str) -> Option<i64> {
    query.trim().parse().ok()
}

/// Parse a `0x`-prefixed hexadecimal integer (prefix case-insensitive).
#[must_use]
pub fn parse_hex(query: &str) -> Option<i64> {
    let query = query.trim();
    let prefix = query.get(..2)?;
    if !prefix.eq_ignore_ascii_case("0x") {
        return None;
    }
    i64::from_str_radix(&query[2..], 16).ok()
}

/// Parse a number written either in decimal or as `0x` hex.
#[must_use]
pub fn parse_number(query: &str) -> Option<i64> {
    parse_decimal(query).or_else(|| parse_hex(query))
}
