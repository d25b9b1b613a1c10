//! Species reports: dex, entry, stats, evolution and learnset.

use crate::error::Result;
use crate::format::{
    clean_dex_text, format_height, format_weight, hm_label, learn_levels, level_label, tm_label,
};
use crate::generation::Report;
use crate::paginate::Paginator;
use crate::types::{DexNumber, MoveScope};

use super::moves::{learners_by_level, machine_label, machine_learners, move_header};
use super::resolve;
use super::tables::{EvolutionRow, Machine, SpeciesRow};
use super::{POKEMON_NOT_FOUND, POKEMON_OR_MOVE_NOT_FOUND, ReportContext};

fn identity_line(name: &str, dex: DexNumber) -> String {
    format!("Pokemon Name: {name}, Pokedex Number: {dex}")
}

fn stats_line(species: &SpeciesRow) -> String {
    let s = species.stats;
    format!(
        "Base Stats HP: {}, Attack: {}, Defense: {}, Speed: {}, Special: {}",
        s.hp, s.attack, s.defense, s.speed, s.special
    )
}

fn lookup_species(ctx: &ReportContext<'_>) -> Result<Option<SpeciesRow>> {
    match resolve::species(&ctx.lookup, ctx.query())? {
        Some(dex) => ctx.tables().species(dex),
        None => Ok(None),
    }
}

/// `Learn Moves at: ---(2), L7, L13`.
fn learn_summary(ctx: &ReportContext<'_>, dex: DexNumber) -> Result<String> {
    let moves = ctx.tables().levelup_moves(dex, ctx.scope())?;
    Ok(format!(
        "Learn Moves at: {}",
        learn_levels(moves.iter().map(|(level, _)| *level)).join(", ")
    ))
}

fn hm_names(ctx: &ReportContext<'_>, dex: DexNumber) -> Result<Vec<String>> {
    Ok(ctx
        .tables()
        .machine_moves(dex, ctx.scope(), Machine::Hm)?
        .into_iter()
        .map(|(_, name)| name)
        .collect())
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

pub(super) fn dex(ctx: &ReportContext<'_>) -> Result<Report> {
    let Some(species) = lookup_species(ctx)? else {
        return Ok(Report::not_found(POKEMON_NOT_FOUND));
    };
    let mut lines = vec![format!(
        "{}, Weight: {}, Height: {}",
        identity_line(&species.name, species.dex),
        format_weight(species.weight_kg),
        format_height(species.height_m)
    )];
    if let Some(entry) = ctx.tables().dex_entry(species.dex, ctx.scope())? {
        lines.push(format!("Pokedex: {}", clean_dex_text(&entry)));
    }
    Ok(Report::found(lines))
}

pub(super) fn entry(ctx: &ReportContext<'_>) -> Result<Report> {
    let Some(species) = lookup_species(ctx)? else {
        return Ok(Report::not_found(POKEMON_NOT_FOUND));
    };
    let mut lines = vec![
        format!(
            "{}, Pokemon Index: 0x{:02X} ({}), Type: {}",
            identity_line(&species.name, species.dex),
            species.game_index,
            species.game_index,
            species.type_label()
        ),
        format!(
            "Catch Rate: {}, Experience Curve: {}, Weight: {}, Height: {}",
            species.catch_rate,
            species.experience_curve,
            format_weight(species.weight_kg),
            format_height(species.height_m)
        ),
        stats_line(&species),
    ];

    let tm_count = ctx
        .tables()
        .machine_moves(species.dex, ctx.scope(), Machine::Tm)?
        .len();
    let mut learn = format!(
        "{}; Learns {tm_count} TMs",
        learn_summary(ctx, species.dex)?
    );
    let hms = hm_names(ctx, species.dex)?;
    if !hms.is_empty() {
        learn.push_str("; ");
        learn.push_str(&hms.join(", "));
    }
    lines.push(learn);
    Ok(Report::found(lines))
}

pub(super) fn stats(ctx: &ReportContext<'_>) -> Result<Report> {
    let Some(species) = lookup_species(ctx)? else {
        return Ok(Report::not_found(POKEMON_NOT_FOUND));
    };
    Ok(Report::found(vec![
        identity_line(&species.name, species.dex),
        stats_line(&species),
    ]))
}

/// One clause per edge. Level wins over item, item over trade.
fn evolution_clause(edge: &EvolutionRow) -> Option<String> {
    if let Some(level) = edge.level.filter(|l| *l > 0) {
        return Some(format!("Evolves to {} at level {level}", edge.to_name));
    }
    if edge.item.is_some_and(|i| i != 0) {
        let item = edge.item_name.as_deref().unwrap_or_default();
        return Some(format!("Evolves to {} with item {item}", edge.to_name));
    }
    if edge.trade {
        return Some(format!("Evolves to {} with trading", edge.to_name));
    }
    None
}

pub(super) fn evolve(ctx: &ReportContext<'_>) -> Result<Report> {
    let Some(dex) = resolve::species(&ctx.lookup, ctx.query())? else {
        return Ok(Report::not_found(POKEMON_NOT_FOUND));
    };
    let Some(name) = ctx.tables().species_name(i64::from(dex.0))? else {
        return Ok(Report::not_found(POKEMON_NOT_FOUND));
    };
    let edges = ctx.tables().evolutions(dex)?;
    let mut lines = vec![identity_line(&name, dex)];
    if edges.is_empty() {
        lines.push(format!("{name} has no evolutions"));
    } else {
        lines.extend(edges.iter().filter_map(evolution_clause));
    }
    Ok(Report::found(lines))
}

// ---------------------------------------------------------------------------
// Learnset
// ---------------------------------------------------------------------------

/// Species learnset when the query names a species, otherwise the learners of
/// a move.
pub(super) fn learn(ctx: &ReportContext<'_>) -> Result<Report> {
    if let Some(dex) = resolve::species(&ctx.lookup, ctx.query())? {
        if let Some(name) = ctx.tables().species_name(i64::from(dex.0))? {
            return species_learnset(ctx, dex, &name);
        }
    }
    move_learnset(ctx)
}

fn species_learnset(ctx: &ReportContext<'_>, dex: DexNumber, name: &str) -> Result<Report> {
    let flags = ctx.request.flags;
    let mut lines = vec![identity_line(name, dex)];

    if flags.level {
        lines.extend(
            ctx.tables()
                .levelup_moves(dex, ctx.scope())?
                .into_iter()
                .map(|(level, mv)| format!("{}: {mv}", level_label(level))),
        );
    } else {
        lines.push(learn_summary(ctx, dex)?);
    }

    let tms = ctx.tables().machine_moves(dex, ctx.scope(), Machine::Tm)?;
    let hms = ctx.tables().machine_moves(dex, ctx.scope(), Machine::Hm)?;
    if flags.tmhm {
        let pager = Paginator::batched("", ctx.output.tm_batch_size);
        lines.extend(
            pager.paginate(tms.iter().map(|(n, mv)| format!("{}: {mv}", tm_label(*n)))),
        );
        if !hms.is_empty() {
            let listed: Vec<String> = hms
                .iter()
                .map(|(n, mv)| format!("{}: {mv}", hm_label(*n)))
                .collect();
            lines.push(listed.join(", "));
        }
    } else {
        let mut summary = format!("Learns {} TMs", tms.len());
        for (_, mv) in &hms {
            summary.push_str(", ");
            summary.push_str(mv);
        }
        lines.push(summary);
    }
    Ok(Report::found(lines))
}

fn move_learnset(ctx: &ReportContext<'_>) -> Result<Report> {
    let Some(index) = resolve::move_index(&ctx.lookup, ctx.query(), MoveScope::Any)? else {
        return Ok(Report::not_found(POKEMON_OR_MOVE_NOT_FOUND));
    };
    let Some(mv) = ctx.tables().move_record(index)? else {
        return Ok(Report::not_found(POKEMON_OR_MOVE_NOT_FOUND));
    };
    let flags = ctx.request.flags;
    let mut lines = vec![move_header(&mv)];
    lines.extend(learners_by_level(ctx, index, flags.level)?);
    if let Some(item) = machine_label(&mv) {
        lines.extend(machine_learners(ctx, index, &item, flags.tmhm)?);
    }
    Ok(Report::found(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(level: Option<u8>, item: Option<i64>, trade: bool) -> EvolutionRow {
        EvolutionRow {
            to: DexNumber(2),
            to_name: "Ivysaur".to_string(),
            level,
            item,
            item_name: item.map(|_| "Moon Stone".to_string()),
            trade,
        }
    }

    #[test]
    fn level_trigger_wins() {
        assert_eq!(
            evolution_clause(&edge(Some(16), Some(10), true)).as_deref(),
            Some("Evolves to Ivysaur at level 16")
        );
    }

    #[test]
    fn item_then_trade() {
        assert_eq!(
            evolution_clause(&edge(None, Some(10), true)).as_deref(),
            Some("Evolves to Ivysaur with item Moon Stone")
        );
        assert_eq!(
            evolution_clause(&edge(None, None, true)).as_deref(),
            Some("Evolves to Ivysaur with trading")
        );
        assert!(evolution_clause(&edge(None, None, false)).is_none());
    }
}
