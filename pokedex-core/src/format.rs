//! Display rules shared by every report.
//!
//! The dataset stores metric measurements; reports show imperial first with
//! the metric value in parentheses.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Pounds per kilogram, as the in-game Pokédex rounds it.
pub const POUNDS_PER_KILOGRAM: f64 = 2.205;

/// Inches per meter.
pub const INCHES_PER_METER: f64 = 39.3701;

/// Shown in place of a level-1 ("known from the start") entry and for absent
/// numeric move attributes.
pub const NONE_MARKER: &str = "---";

/// Convert kilograms to pounds for display.
///
/// Rounded to the nearest pound; a value that would round to zero keeps one
/// decimal place instead.
#[must_use]
pub fn pounds(kilograms: f64) -> f64 {
    let exact = kilograms * POUNDS_PER_KILOGRAM;
    let whole = exact.round();
    if whole == 0.0 {
        (exact * 10.0).round() / 10.0
    } else {
        whole
    }
}

/// `15 lbs (6.9kg)`, or `0.4 lbs (0.2kg)` for very light species.
#[must_use]
pub fn format_weight(kilograms: f64) -> String {
    let lbs = pounds(kilograms);
    if lbs.fract() == 0.0 {
        format!("{lbs:.0} lbs ({kilograms:.1}kg)")
    } else {
        format!("{lbs:.1} lbs ({kilograms:.1}kg)")
    }
}

/// Convert meters to whole inches.
#[must_use]
pub fn inches(meters: f64) -> i64 {
    // Dataset heights are at most a few meters; the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    let total = (meters * INCHES_PER_METER).round() as i64;
    total
}

/// `2'4" (0.7m)`.
#[must_use]
pub fn format_height(meters: f64) -> String {
    let total = inches(meters);
    format!("{}'{}\" ({meters:.1}m)", total / 12, total % 12)
}

/// Flatten embedded line breaks and form feeds of a dex entry.
#[must_use]
pub fn clean_dex_text(raw: &str) -> String {
    raw.replace(['\n', '\u{c}'], " ")
}

/// `---` for level 1, `L<n>` otherwise.
#[must_use]
pub fn level_label(level: u8) -> String {
    if level == 1 {
        NONE_MARKER.to_string()
    } else {
        format!("L{level}")
    }
}

/// `L<n>` when both ends agree, `L<min> - L<max>` otherwise.
#[must_use]
pub fn level_range(min: u8, max: u8) -> String {
    if min == max {
        format!("L{min}")
    } else {
        format!("L{min} - L{max}")
    }
}

/// Group level-up entries by level, ascending.
///
/// Level 1 collapses into a single `---` group, suffixed with the move count
/// when more than one move is known from the start.
#[must_use]
pub fn learn_levels<I>(levels: I) -> Vec<String>
where
    I: IntoIterator<Item = u8>,
{
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for level in levels {
        *counts.entry(level).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(level, count)| match (level, count) {
            (1, 1) => NONE_MARKER.to_string(),
            (1, n) => format!("{NONE_MARKER}({n})"),
            (level, _) => format!("L{level}"),
        })
        .collect()
}

/// `part / whole` as a percentage with one decimal place.
#[must_use]
pub fn percent(part: u32, whole: u32) -> String {
    if whole == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", f64::from(part) / f64::from(whole) * 100.0)
}

/// `TM05`.
#[must_use]
pub fn tm_label(number: u8) -> String {
    format!("TM{number:02}")
}

/// `HM01`.
#[must_use]
pub fn hm_label(number: u8) -> String {
    format!("HM{number:02}")
}

/// Render an optional attribute, using [`NONE_MARKER`] when absent.
#[must_use]
pub fn or_marker<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NONE_MARKER.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_rounds_to_whole_pounds() {
        assert_eq!(format_weight(6.9), "15 lbs (6.9kg)");
        assert_eq!(format_weight(60.0), "132 lbs (60.0kg)");
    }

    #[test]
    fn light_weight_keeps_a_decimal() {
        assert!((pounds(0.2) - 0.4).abs() < f64::EPSILON);
        assert_eq!(format_weight(0.2), "0.4 lbs (0.2kg)");
        assert_eq!(format_weight(0.1), "0.2 lbs (0.1kg)");
    }

    #[test]
    fn height_is_feet_and_inches() {
        assert_eq!(inches(0.7), 28);
        assert_eq!(format_height(0.7), "2'4\" (0.7m)");
        assert_eq!(format_height(0.4), "1'4\" (0.4m)");
        assert_eq!(format_height(0.2), "0'8\" (0.2m)");
        assert_eq!(format_height(8.8), "28'10\" (8.8m)");
    }

    #[test]
    fn height_rounds_to_the_nearest_inch() {
        // 0.3 m is 11.8 inches. Rounding gives a full foot, not the
        // truncated 0'11" some references print.
        assert_eq!(inches(0.3), 12);
        assert_eq!(format_height(0.3), "1'0\" (0.3m)");
    }

    #[test]
    fn dex_text_is_flattened() {
        assert_eq!(
            clean_dex_text("A strange seed was\nplanted on its\u{c}back at birth."),
            "A strange seed was planted on its back at birth."
        );
    }

    #[test]
    fn start_moves_collapse_into_one_group() {
        assert_eq!(learn_levels([1, 1, 7, 13]), vec!["---(2)", "L7", "L13"]);
        assert_eq!(learn_levels([13, 1, 7]), vec!["---", "L7", "L13"]);
        assert_eq!(learn_levels([20, 20]), vec!["L20"]);
        assert!(learn_levels([]).is_empty());
    }

    #[test]
    fn level_labels() {
        assert_eq!(level_label(1), "---");
        assert_eq!(level_label(16), "L16");
        assert_eq!(level_range(5, 5), "L5");
        assert_eq!(level_range(2, 5), "L2 - L5");
    }

    #[test]
    fn percentages() {
        assert_eq!(percent(256, 256), "100.0");
        assert_eq!(percent(51, 256), "19.9");
        assert_eq!(percent(1, 3), "33.3");
        assert_eq!(percent(1, 0), "0.0");
    }

    #[test]
    fn machine_labels_are_zero_padded() {
        assert_eq!(tm_label(5), "TM05");
        assert_eq!(tm_label(50), "TM50");
        assert_eq!(hm_label(1), "HM01");
    }

    #[test]
    fn absent_attributes_use_marker() {
        assert_eq!(or_marker(Some(40)), "40");
        assert_eq!(or_marker::<u8>(None), "---");
    }
}
