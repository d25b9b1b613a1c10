//! Core type definitions for the Pokédex.
//!
//! Identifiers are plain newtypes over the dataset's own integer keys; the
//! request-shaped types (`Request`, `ReportKind`, `FormatFlags`) describe what
//! a caller asks for.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// National dex number. Stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DexNumber(pub u16);

/// Internal game index of a move (unique within a generation).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MoveIndex(pub u16);

/// Internal map index of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MapIndex(pub u16);

impl fmt::Display for DexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MapIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved entity, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    /// A species, by dex number.
    Species(DexNumber),
    /// A move, by internal game index.
    Move(MoveIndex),
    /// A location, by map index.
    Location(MapIndex),
}

/// Which entity table a query is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Species table.
    Species,
    /// Move table, optionally narrowed to TM or HM numbering.
    Move(MoveScope),
    /// Locations used by the active version.
    Location,
}

/// How numeric move queries are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveScope {
    /// Numbers are internal game indices.
    #[default]
    Any,
    /// Numbers are TM numbers.
    Tm,
    /// Numbers are HM numbers.
    Hm,
}

// ---------------------------------------------------------------------------
// Version scoping
// ---------------------------------------------------------------------------

/// A dataset generation. Each one owns an Identifier-Resolver and
/// Report-Composer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationId {
    /// Red, Blue, Yellow.
    Gen1,
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gen1 => write!(f, "gen1"),
        }
    }
}

/// The pair of ids every dataset query is scoped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope {
    /// Game group shared by editions with identical learnsets.
    pub game_group: i64,
    /// The individual edition.
    pub version: i64,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Closed set of report types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Name, weight, height and dex entry.
    Dex,
    /// Full species summary.
    Entry,
    /// Cross-kind lookup of a number.
    Index,
    /// Move detail with effect narration.
    Move,
    /// Base stats.
    Stats,
    /// Learnset of a species, or learners of a move.
    Learn,
    /// Evolution edges.
    Evolve,
    /// Learners of a TM or HM move.
    TmHm,
    /// Learners of a TM, by TM number.
    Tm,
    /// Learners of an HM, by HM number.
    Hm,
    /// Location summary with aggregated encounter tables.
    Location,
    /// Grass encounters.
    Wild,
    /// Water encounters.
    Surf,
    /// Super Rod encounters.
    Fish,
}

/// Independent formatting switches.
///
/// The `-full` command suffix turns every switch on at once; the other
/// suffixes turn on exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FormatFlags {
    /// Full listing instead of a summarized count.
    pub full: bool,
    /// List level-up moves one per line.
    pub level: bool,
    /// List TM/HM moves by number.
    pub tmhm: bool,
    /// List egg moves. Not present in Gen 1 data.
    pub egg: bool,
    /// List tutor moves. Not present in Gen 1 data.
    pub tutor: bool,
}

impl FormatFlags {
    /// Every switch on.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            full: true,
            level: true,
            tmhm: true,
            egg: true,
            tutor: true,
        }
    }

    /// Derive flags from a command-name suffix such as `-full` or `-tmhm`.
    ///
    /// Unknown suffixes (and no suffix) yield the summary defaults.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "-full" => Self::all(),
            "-level" => Self {
                level: true,
                ..Self::default()
            },
            "-tmhm" => Self {
                tmhm: true,
                ..Self::default()
            },
            "-egg" => Self {
                egg: true,
                ..Self::default()
            },
            "-tutor" => Self {
                tutor: true,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

/// One top-level lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Which report to compose.
    pub report: ReportKind,
    /// Version token, e.g. `red`.
    pub version: String,
    /// The raw, user-typed query text.
    pub query: String,
    /// Formatting switches.
    #[serde(default)]
    pub flags: FormatFlags,
}

impl Request {
    /// Build a request with default flags.
    #[must_use]
    pub fn new(report: ReportKind, version: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            report,
            version: version.into(),
            query: query.into(),
            flags: FormatFlags::default(),
        }
    }

    /// Replace the formatting flags.
    #[must_use]
    pub fn with_flags(mut self, flags: FormatFlags) -> Self {
        self.flags = flags;
        self
    }
}

// ---------------------------------------------------------------------------
// Encounters
// ---------------------------------------------------------------------------

/// How a wild encounter is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncounterKind {
    /// Walking in grass or caves.
    Grass,
    /// Surfing.
    Water,
    /// Super Rod fishing.
    Fishing,
}

impl EncounterKind {
    /// Column value used by the dataset's `encounterType`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Water => "water",
            Self::Fishing => "fishing",
        }
    }

    /// Label used in report lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Grass => "Grass Encounters",
            Self::Water => "Water Encounters",
            Self::Fishing => "Super Rod Encounters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_suffix_sets_every_flag() {
        assert_eq!(FormatFlags::from_suffix("-full"), FormatFlags::all());
    }

    #[test]
    fn single_suffixes_set_one_flag() {
        let level = FormatFlags::from_suffix("-level");
        assert!(level.level && !level.full && !level.tmhm && !level.egg && !level.tutor);
        let tmhm = FormatFlags::from_suffix("-tmhm");
        assert!(tmhm.tmhm && !tmhm.level && !tmhm.full);
        assert!(FormatFlags::from_suffix("-egg").egg);
        assert!(FormatFlags::from_suffix("-tutor").tutor);
    }

    #[test]
    fn missing_suffix_is_summary() {
        assert_eq!(FormatFlags::from_suffix(""), FormatFlags::default());
        assert_eq!(FormatFlags::from_suffix("-bogus"), FormatFlags::default());
    }

    #[test]
    fn generation_id_round_trips_through_serde_names() {
        assert_eq!(GenerationId::Gen1.to_string(), "gen1");
    }
}
