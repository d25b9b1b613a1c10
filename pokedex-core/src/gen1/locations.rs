//! Location reports: location summary and grass, water and Super Rod tables.

use crate::encounter::{EncounterTable, SLOT_TOTAL, Weighting, slot_line, slot_weight};
use crate::error::Result;
use crate::generation::Report;
use crate::paginate::Paginator;
use crate::types::{EncounterKind, MapIndex};

use super::resolve;
use super::tables::LocationRow;
use super::{LOCATION_NOT_FOUND, ReportContext};

fn weighting(kind: EncounterKind) -> Weighting {
    match kind {
        EncounterKind::Grass | EncounterKind::Water => Weighting::SlotTable,
        EncounterKind::Fishing => Weighting::Occurrence,
    }
}

fn lookup_location(ctx: &ReportContext<'_>) -> Result<Option<LocationRow>> {
    match resolve::location(&ctx.lookup, ctx.query())? {
        Some(index) => ctx.tables().location(index, ctx.scope()),
        None => Ok(None),
    }
}

fn name_line(location: &LocationRow) -> String {
    format!("Location Name: {}, Index: {}", location.name, location.index)
}

fn rate_suffix(label: &str, rate: Option<u32>) -> String {
    match rate {
        Some(rate) if rate > 0 => format!(", {label} Encounter Rate: {rate}/256"),
        _ => String::new(),
    }
}

/// Aggregated table for one encounter kind, paginated under its label.
/// Nothing when the location has no such encounters.
fn aggregated(ctx: &ReportContext<'_>, index: MapIndex, kind: EncounterKind) -> Result<Vec<String>> {
    let slots = ctx.tables().encounters(index, ctx.scope(), kind)?;
    let table = EncounterTable::aggregate(&slots, weighting(kind));
    if table.is_empty() {
        return Ok(Vec::new());
    }
    let pager = Paginator::by_length(format!("{}: ", kind.label()), ctx.output.message_limit);
    Ok(pager.paginate(table.fragments()))
}

/// One line per slot under a bare label line.
fn per_slot(ctx: &ReportContext<'_>, index: MapIndex, kind: EncounterKind) -> Result<Vec<String>> {
    let slots = ctx.tables().encounters(index, ctx.scope(), kind)?;
    if slots.is_empty() {
        return Ok(Vec::new());
    }
    let mut lines = vec![format!("{}:", kind.label())];
    match weighting(kind) {
        Weighting::SlotTable => lines.extend(
            slots
                .iter()
                .map(|slot| slot_line(slot, slot_weight(slot.slot), SLOT_TOTAL)),
        ),
        Weighting::Occurrence => {
            let total = u32::try_from(slots.len()).unwrap_or(u32::MAX);
            lines.extend(slots.iter().map(|slot| slot_line(slot, 1, total)));
        }
    }
    Ok(lines)
}

fn encounter_report(ctx: &ReportContext<'_>, kind: EncounterKind) -> Result<Report> {
    let Some(location) = lookup_location(ctx)? else {
        return Ok(Report::not_found(LOCATION_NOT_FOUND));
    };
    let header = match kind {
        EncounterKind::Grass => name_line(&location) + &rate_suffix("Grass", location.grass_rate),
        EncounterKind::Water => name_line(&location) + &rate_suffix("Water", location.water_rate),
        EncounterKind::Fishing => name_line(&location),
    };
    let mut lines = vec![header];
    if ctx.request.flags.full {
        lines.extend(per_slot(ctx, location.index, kind)?);
    } else {
        lines.extend(aggregated(ctx, location.index, kind)?);
    }
    Ok(Report::found(lines))
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

pub(super) fn location(ctx: &ReportContext<'_>) -> Result<Report> {
    let Some(location) = lookup_location(ctx)? else {
        return Ok(Report::not_found(LOCATION_NOT_FOUND));
    };
    let mut header = format!(
        "{}, Height: {}, Width: {}, Number of Warps: {}",
        name_line(&location),
        location.height,
        location.width,
        location.warps
    );
    header.push_str(&rate_suffix("Grass", location.grass_rate));
    header.push_str(&rate_suffix("Water", location.water_rate));
    if location.fishing_slots > 0 {
        header.push_str(", Has Super Rod Fishing");
    }

    let mut lines = vec![header];
    for kind in [EncounterKind::Grass, EncounterKind::Water, EncounterKind::Fishing] {
        lines.extend(aggregated(ctx, location.index, kind)?);
    }
    Ok(Report::found(lines))
}

pub(super) fn wild(ctx: &ReportContext<'_>) -> Result<Report> {
    encounter_report(ctx, EncounterKind::Grass)
}

pub(super) fn surf(ctx: &ReportContext<'_>) -> Result<Report> {
    encounter_report(ctx, EncounterKind::Water)
}

pub(super) fn fish(ctx: &ReportContext<'_>) -> Result<Report> {
    encounter_report(ctx, EncounterKind::Fishing)
}
