//! Gen 1 identifier resolution.
//!
//! Strategy lists, tried top to bottom:
//!
//! | Kind           | Strategies                                               |
//! |----------------|----------------------------------------------------------|
//! | Species        | dex number 1-151, `0x` game index, name                  |
//! | Move (any)     | game index 1-165, `0x` game index 1-165, name            |
//! | Move (TM / HM) | TM / HM number, name                                     |
//! | Location       | map index, `0x` map index, name; used by the version only |

use crate::error::Result;
use crate::resolve::{Strategy, first_match, parse_decimal, parse_hex};
use crate::types::{DexNumber, EntityId, EntityKind, MapIndex, MoveIndex, MoveScope, Scope};

use super::tables::{Gen1Tables, Machine};

/// Highest dex number in Gen 1.
pub const MAX_DEX: i64 = 151;

/// Highest move game index in Gen 1.
pub const MAX_MOVE_INDEX: i64 = 165;

/// Everything a strategy may consult.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    /// Dataset queries.
    pub tables: Gen1Tables<'a>,
    /// Active version.
    pub scope: Scope,
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

fn dex_in_range(n: i64) -> Option<DexNumber> {
    if (1..=MAX_DEX).contains(&n) {
        u16::try_from(n).ok().map(DexNumber)
    } else {
        None
    }
}

fn species_by_dex(_: &Lookup<'_>, query: &str) -> Result<Option<DexNumber>> {
    Ok(parse_decimal(query).and_then(dex_in_range))
}

fn species_by_game_index(ctx: &Lookup<'_>, query: &str) -> Result<Option<DexNumber>> {
    match parse_hex(query) {
        Some(index) => ctx.tables.dex_by_game_index(index),
        None => Ok(None),
    }
}

fn species_by_name(ctx: &Lookup<'_>, query: &str) -> Result<Option<DexNumber>> {
    ctx.tables.dex_by_name(query)
}

fn species_strategies<'a>() -> [Strategy<Lookup<'a>, DexNumber>; 3] {
    [
        Strategy { name: "dex_number", run: species_by_dex },
        Strategy { name: "game_index_hex", run: species_by_game_index },
        Strategy { name: "species_name", run: species_by_name },
    ]
}

// ---------------------------------------------------------------------------
// Moves
// ---------------------------------------------------------------------------

fn move_in_range(n: i64) -> Option<MoveIndex> {
    if (1..=MAX_MOVE_INDEX).contains(&n) {
        u16::try_from(n).ok().map(MoveIndex)
    } else {
        None
    }
}

fn move_by_index(_: &Lookup<'_>, query: &str) -> Result<Option<MoveIndex>> {
    Ok(parse_decimal(query).and_then(move_in_range))
}

fn move_by_index_hex(_: &Lookup<'_>, query: &str) -> Result<Option<MoveIndex>> {
    Ok(parse_hex(query).and_then(move_in_range))
}

fn move_by_tm(ctx: &Lookup<'_>, query: &str) -> Result<Option<MoveIndex>> {
    match parse_decimal(query) {
        Some(number) => ctx.tables.move_by_machine(Machine::Tm, number),
        None => Ok(None),
    }
}

fn move_by_hm(ctx: &Lookup<'_>, query: &str) -> Result<Option<MoveIndex>> {
    match parse_decimal(query) {
        Some(number) => ctx.tables.move_by_machine(Machine::Hm, number),
        None => Ok(None),
    }
}

fn move_by_name(ctx: &Lookup<'_>, query: &str) -> Result<Option<MoveIndex>> {
    ctx.tables.move_by_name(query)
}

fn move_strategies<'a>(scope: MoveScope) -> Vec<Strategy<Lookup<'a>, MoveIndex>> {
    let by_name = Strategy { name: "move_name", run: move_by_name };
    match scope {
        MoveScope::Any => vec![
            Strategy { name: "move_index", run: move_by_index },
            Strategy { name: "move_index_hex", run: move_by_index_hex },
            by_name,
        ],
        MoveScope::Tm => vec![Strategy { name: "tm_number", run: move_by_tm }, by_name],
        MoveScope::Hm => vec![Strategy { name: "hm_number", run: move_by_hm }, by_name],
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

fn location_by_index(ctx: &Lookup<'_>, query: &str) -> Result<Option<MapIndex>> {
    match parse_decimal(query) {
        Some(index) => ctx.tables.used_location(index, ctx.scope),
        None => Ok(None),
    }
}

fn location_by_index_hex(ctx: &Lookup<'_>, query: &str) -> Result<Option<MapIndex>> {
    match parse_hex(query) {
        Some(index) => ctx.tables.used_location(index, ctx.scope),
        None => Ok(None),
    }
}

fn location_by_name(ctx: &Lookup<'_>, query: &str) -> Result<Option<MapIndex>> {
    ctx.tables.used_location_by_name(query, ctx.scope)
}

fn location_strategies<'a>() -> [Strategy<Lookup<'a>, MapIndex>; 3] {
    [
        Strategy { name: "map_index", run: location_by_index },
        Strategy { name: "map_index_hex", run: location_by_index_hex },
        Strategy { name: "location_name", run: location_by_name },
    ]
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Resolve a species query.
///
/// # Errors
/// Propagates dataset faults.
pub fn species(ctx: &Lookup<'_>, query: &str) -> Result<Option<DexNumber>> {
    first_match(&species_strategies(), ctx, query)
}

/// Resolve a move query under the given numbering.
///
/// # Errors
/// Propagates dataset faults.
pub fn move_index(ctx: &Lookup<'_>, query: &str, scope: MoveScope) -> Result<Option<MoveIndex>> {
    first_match(&move_strategies(scope), ctx, query)
}

/// Resolve a location query, restricted to maps the version uses.
///
/// # Errors
/// Propagates dataset faults.
pub fn location(ctx: &Lookup<'_>, query: &str) -> Result<Option<MapIndex>> {
    first_match(&location_strategies(), ctx, query)
}

/// Resolve `query` within `kind`.
///
/// # Errors
/// Propagates dataset faults.
pub fn resolve(ctx: &Lookup<'_>, kind: EntityKind, query: &str) -> Result<Option<EntityId>> {
    Ok(match kind {
        EntityKind::Species => species(ctx, query)?.map(EntityId::Species),
        EntityKind::Move(scope) => move_index(ctx, query, scope)?.map(EntityId::Move),
        EntityKind::Location => location(ctx, query)?.map(EntityId::Location),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dex_range_is_inclusive() {
        assert_eq!(dex_in_range(1), Some(DexNumber(1)));
        assert_eq!(dex_in_range(151), Some(DexNumber(151)));
        assert_eq!(dex_in_range(0), None);
        assert_eq!(dex_in_range(152), None);
        assert_eq!(dex_in_range(-4), None);
    }

    #[test]
    fn move_range_is_inclusive() {
        assert_eq!(move_in_range(165), Some(MoveIndex(165)));
        assert_eq!(move_in_range(166), None);
    }

    #[test]
    fn strategy_tables_are_ordered() {
        let names = species_strategies().map(|s| s.name);
        assert_eq!(names, ["dex_number", "game_index_hex", "species_name"]);
        let names = location_strategies().map(|s| s.name);
        assert_eq!(names, ["map_index", "map_index_hex", "location_name"]);
        let names: Vec<_> = move_strategies(MoveScope::Any).iter().map(|s| s.name).collect();
        assert_eq!(names, ["move_index", "move_index_hex", "move_name"]);
        assert_eq!(move_strategies(MoveScope::Tm)[0].name, "tm_number");
        assert_eq!(move_strategies(MoveScope::Hm)[0].name, "hm_number");
    }
}
