//! Cross-kind index lookup: what does this number mean in each table?

use crate::error::Result;
use crate::generation::Report;
use crate::resolve::parse_number;

use super::ReportContext;
use super::tables::Gen1Tables;

type Probe = fn(&Gen1Tables<'_>, i64) -> Result<Option<String>>;

/// Version-independent probes, in display order.
const PROBES: &[(&str, Probe)] = &[
    ("Pokemon by Dex number", |t, n| t.species_name(n)),
    ("Pokemon by Index number", |t, n| t.species_name_by_game_index(n)),
    ("Move", |t, n| t.move_name(n)),
    ("Item", |t, n| t.item_name(n)),
    ("Experience Curve", |t, n| t.curve_name(n)),
    ("Type", |t, n| t.type_name(n)),
    ("Trainer Class", |t, n| t.trainer_class_name(n)),
];

pub(super) fn index(ctx: &ReportContext<'_>) -> Result<Report> {
    let Some(number) = parse_number(ctx.query()) else {
        return Ok(Report::not_found("Invalid number entered"));
    };
    let tables = ctx.tables();
    let mut lines = Vec::new();
    for (label, probe) in PROBES {
        if let Some(name) = probe(&tables, number)? {
            lines.push(format!("{label}: {name}"));
        }
    }
    if let Some(name) = tables.used_location_name(number, ctx.scope())? {
        lines.push(format!("Location: {name}"));
    }
    if lines.is_empty() {
        return Ok(Report::not_found("Nothing found"));
    }
    Ok(Report::found(lines))
}
