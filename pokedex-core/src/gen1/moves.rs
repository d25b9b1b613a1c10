//! Move reports: move detail and TM/HM learner listings.

use crate::error::Result;
use crate::format::{hm_label, level_label, or_marker, tm_label};
use crate::generation::Report;
use crate::paginate::Paginator;
use crate::types::{MoveIndex, MoveScope};

use super::effects::properties;
use super::resolve;
use super::tables::MoveRow;
use super::{MOVE_NOT_FOUND, ReportContext};

/// `Move Name: Tackle, Move Index: 33, Type: Normal, Base Power: 35, PP: 35,
/// Accuracy: 95`.
pub(super) fn move_header(mv: &MoveRow) -> String {
    format!(
        "Move Name: {}, Move Index: {}, Type: {}, Base Power: {}, PP: {}, Accuracy: {}",
        mv.name,
        mv.index,
        mv.type_name,
        or_marker(mv.power),
        or_marker(mv.pp),
        or_marker(mv.accuracy)
    )
}

/// `TM05` or `HM01`, if the move is taught by a machine. TM numbering wins.
pub(super) fn machine_label(mv: &MoveRow) -> Option<String> {
    mv.tm.map(tm_label).or_else(|| mv.hm.map(hm_label))
}

/// Level-up learners of a move: one line per species when `full`, otherwise
/// the start/learn counts.
pub(super) fn learners_by_level(
    ctx: &ReportContext<'_>,
    index: MoveIndex,
    full: bool,
) -> Result<Vec<String>> {
    if full {
        return Ok(ctx
            .tables()
            .move_learners(index, ctx.scope())?
            .into_iter()
            .map(|(name, level)| format!("{name} learns at {}", level_label(level)))
            .collect());
    }
    let counts = ctx.tables().move_learner_counts(index, ctx.scope())?;
    let mut lines = Vec::new();
    if counts.starts > 0 {
        lines.push(format!("{} Pokemon starts with this move", counts.starts));
    }
    if counts.learns > 0 {
        lines.push(format!("{} Pokemon learns this move", counts.learns));
    }
    Ok(lines)
}

/// Machine learners of a move: the paginated name list when `full`,
/// otherwise the distinct species count.
pub(super) fn machine_learners(
    ctx: &ReportContext<'_>,
    index: MoveIndex,
    item: &str,
    full: bool,
) -> Result<Vec<String>> {
    if full {
        let names = ctx.tables().machine_learners(index, ctx.scope())?;
        let pager = Paginator::by_length(
            format!("These Pokemon learns {item}: "),
            ctx.output.message_limit,
        );
        return Ok(pager.paginate(names));
    }
    let count = ctx.tables().machine_learner_count(index, ctx.scope())?;
    Ok(vec![format!("{count} Pokemon learns {item}")])
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

pub(super) fn detail(ctx: &ReportContext<'_>) -> Result<Report> {
    let Some(index) = resolve::move_index(&ctx.lookup, ctx.query(), MoveScope::Any)? else {
        return Ok(Report::not_found(MOVE_NOT_FOUND));
    };
    let Some(mv) = ctx.tables().move_record(index)? else {
        return Ok(Report::not_found(MOVE_NOT_FOUND));
    };
    let mut lines = vec![move_header(&mv), properties(&mv).join(", ")];
    lines.extend(learners_by_level(ctx, index, false)?);
    if let Some(item) = machine_label(&mv) {
        lines.extend(machine_learners(ctx, index, &item, false)?);
    }
    Ok(Report::found(lines))
}

/// Shared body of the TM/HM reports. `label` picks the machine numbering
/// the move must carry.
fn machine_report(
    ctx: &ReportContext<'_>,
    scope: MoveScope,
    label: fn(&MoveRow) -> Option<String>,
) -> Result<Report> {
    let Some(index) = resolve::move_index(&ctx.lookup, ctx.query(), scope)? else {
        return Ok(Report::not_found(MOVE_NOT_FOUND));
    };
    let Some(mv) = ctx.tables().move_record(index)? else {
        return Ok(Report::not_found(MOVE_NOT_FOUND));
    };
    let Some(item) = label(&mv) else {
        return Ok(Report::not_found(MOVE_NOT_FOUND));
    };
    let mut lines = vec![move_header(&mv)];
    lines.extend(machine_learners(ctx, index, &item, ctx.request.flags.full)?);
    Ok(Report::found(lines))
}

pub(super) fn tmhm(ctx: &ReportContext<'_>) -> Result<Report> {
    machine_report(ctx, MoveScope::Any, machine_label)
}

pub(super) fn tm(ctx: &ReportContext<'_>) -> Result<Report> {
    machine_report(ctx, MoveScope::Tm, |mv| mv.tm.map(tm_label))
}

pub(super) fn hm(ctx: &ReportContext<'_>) -> Result<Report> {
    machine_report(ctx, MoveScope::Hm, |mv| mv.hm.map(hm_label))
}
