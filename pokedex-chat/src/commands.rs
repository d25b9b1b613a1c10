//! Chat command table.
//!
//! Every lookup command is a base name plus an optional suffix. The suffix
//! picks the formatting flags (`-full` turns them all on, the others one
//! each); which suffixes a base name accepts is fixed per command.
//!
//! | Command          | Report   | Suffixes                                  |
//! |------------------|----------|-------------------------------------------|
//! | `pokedex`        | Dex      |                                           |
//! | `pokeentry`      | Entry    |                                           |
//! | `pokeindex`      | Index    |                                           |
//! | `pokemove`       | Move     |                                           |
//! | `pokestats`      | Stats    |                                           |
//! | `pokeevolve`     | Evolve   |                                           |
//! | `pokelearn`      | Learn    | `-level` `-tmhm` `-egg` `-tutor` `-full`  |
//! | `poketmhm`       | TmHm     | `-full`                                   |
//! | `poketm`         | Tm       | `-full`                                   |
//! | `pokehm`         | Hm       | `-full`                                   |
//! | `pokelocation`   | Location | `-full`                                   |
//! | `pokewild`       | Wild     | `-full`                                   |
//! | `pokesurf`       | Surf     | `-full`                                   |
//! | `pokefish`       | Fish     | `-full`                                   |
//!
//! `pokegame` is separate: it reads or changes the channel's game.

use pokedex_core::types::{FormatFlags, ReportKind};

/// Usage hint for species commands.
pub const USAGE_POKEMON: &str = "Please specify a pokemon or a number";
/// Usage hint for move commands.
pub const USAGE_MOVE: &str = "Please specify a move";
/// Usage hint for commands taking a bare number.
pub const USAGE_NUMBER: &str = "Please specify a number";
/// Usage hint for location commands.
pub const USAGE_LOCATION: &str = "Please specify a location or a number";
/// Usage hint for the learnset command.
pub const USAGE_LEARN: &str = "Please specify a pokemon or a number or a move";

const FULL_ONLY: &[&str] = &["-full"];
const LEARN_SUFFIXES: &[&str] = &["-level", "-tmhm", "-egg", "-tutor", "-full"];

/// One row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CommandDef {
    name: &'static str,
    report: ReportKind,
    usage: &'static str,
    suffixes: &'static [&'static str],
}

const fn def(
    name: &'static str,
    report: ReportKind,
    usage: &'static str,
    suffixes: &'static [&'static str],
) -> CommandDef {
    CommandDef {
        name,
        report,
        usage,
        suffixes,
    }
}

const COMMANDS: &[CommandDef] = &[
    def("pokedex", ReportKind::Dex, USAGE_POKEMON, &[]),
    def("pokeentry", ReportKind::Entry, USAGE_POKEMON, &[]),
    def("pokeindex", ReportKind::Index, USAGE_NUMBER, &[]),
    def("pokemove", ReportKind::Move, USAGE_MOVE, &[]),
    def("pokestats", ReportKind::Stats, USAGE_POKEMON, &[]),
    def("pokeevolve", ReportKind::Evolve, USAGE_POKEMON, &[]),
    def("pokelearn", ReportKind::Learn, USAGE_LEARN, LEARN_SUFFIXES),
    def("poketmhm", ReportKind::TmHm, USAGE_MOVE, FULL_ONLY),
    def("poketm", ReportKind::Tm, USAGE_NUMBER, FULL_ONLY),
    def("pokehm", ReportKind::Hm, USAGE_NUMBER, FULL_ONLY),
    def("pokelocation", ReportKind::Location, USAGE_LOCATION, FULL_ONLY),
    def("pokewild", ReportKind::Wild, USAGE_LOCATION, FULL_ONLY),
    def("pokesurf", ReportKind::Surf, USAGE_LOCATION, FULL_ONLY),
    def("pokefish", ReportKind::Fish, USAGE_LOCATION, FULL_ONLY),
];

/// Name of the game-selection command.
pub const GAME_COMMAND: &str = "pokegame";

/// A lookup command resolved from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Report to compose.
    pub report: ReportKind,
    /// Flags derived from the suffix.
    pub flags: FormatFlags,
    /// Reply when the command is sent without a query.
    pub usage: &'static str,
}

/// A recognised chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show or change the channel's game.
    Game,
    /// Run a lookup.
    Lookup(CommandSpec),
}

impl Command {
    /// Look up a command by name, without the prefix. Case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        if name == GAME_COMMAND {
            return Some(Self::Game);
        }
        COMMANDS.iter().find_map(|def| {
            let suffix = name.strip_prefix(def.name)?;
            if !suffix.is_empty() && !def.suffixes.contains(&suffix) {
                return None;
            }
            Some(Self::Lookup(CommandSpec {
                report: def.report,
                flags: FormatFlags::from_suffix(suffix),
                usage: def.usage,
            }))
        })
    }
}

/// Every accepted command name, without the prefix.
pub fn names() -> impl Iterator<Item = String> {
    std::iter::once(GAME_COMMAND.to_string()).chain(COMMANDS.iter().flat_map(|def| {
        std::iter::once(def.name.to_string())
            .chain(def.suffixes.iter().map(move |suffix| format!("{}{suffix}", def.name)))
    }))
}

/// A chat message split into command name and argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Command name without the prefix.
    pub name: &'a str,
    /// Everything after the name, trimmed. Empty when no argument was given.
    pub args: &'a str,
}

/// Split `message` into name and arguments if it starts with `prefix`.
#[must_use]
pub fn split<'a>(prefix: &str, message: &'a str) -> Option<Invocation<'a>> {
    let rest = message.trim_start().strip_prefix(prefix)?;
    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest.trim_end(), ""),
    };
    if name.is_empty() {
        return None;
    }
    Some(Invocation { name, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> CommandSpec {
        match Command::from_name(name) {
            Some(Command::Lookup(spec)) => spec,
            other => panic!("{name} is not a lookup: {other:?}"),
        }
    }

    #[test]
    fn base_names_use_summary_flags() {
        let spec = lookup("pokedex");
        assert_eq!(spec.report, ReportKind::Dex);
        assert_eq!(spec.flags, FormatFlags::default());
        assert_eq!(spec.usage, USAGE_POKEMON);
    }

    #[test]
    fn full_suffix_sets_every_flag() {
        assert_eq!(lookup("pokelearn-full").flags, FormatFlags::all());
        assert_eq!(lookup("pokewild-full").flags, FormatFlags::all());
    }

    #[test]
    fn learn_suffixes_set_one_flag() {
        let level = lookup("pokelearn-level").flags;
        assert!(level.level && !level.tmhm && !level.full);
        let tmhm = lookup("pokelearn-tmhm").flags;
        assert!(tmhm.tmhm && !tmhm.level && !tmhm.full);
        assert!(lookup("pokelearn-egg").flags.egg);
        assert!(lookup("pokelearn-tutor").flags.tutor);
    }

    #[test]
    fn suffixes_are_per_command() {
        assert!(Command::from_name("pokedex-full").is_none());
        assert!(Command::from_name("pokewild-level").is_none());
        assert!(Command::from_name("pokemon").is_none());
    }

    #[test]
    fn overlapping_names_resolve_to_the_right_command() {
        assert_eq!(lookup("poketm").report, ReportKind::Tm);
        assert_eq!(lookup("poketmhm").report, ReportKind::TmHm);
        assert_eq!(lookup("poketmhm-full").report, ReportKind::TmHm);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(lookup("PokeDex").report, ReportKind::Dex);
        assert_eq!(Command::from_name("POKEGAME"), Some(Command::Game));
    }

    #[test]
    fn every_listed_name_parses() {
        let all: Vec<String> = names().collect();
        assert_eq!(all.len(), 27);
        for name in &all {
            assert!(Command::from_name(name).is_some(), "{name}");
        }
    }

    #[test]
    fn split_separates_arguments() {
        assert_eq!(
            split("!", "!pokedex  Mr. Mime "),
            Some(Invocation {
                name: "pokedex",
                args: "Mr. Mime"
            })
        );
        assert_eq!(
            split("!", "!pokedex"),
            Some(Invocation {
                name: "pokedex",
                args: ""
            })
        );
        assert!(split("!", "pokedex bulbasaur").is_none());
        assert!(split("!", "! pokedex").is_none());
    }
}
