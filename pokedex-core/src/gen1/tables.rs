//! Typed queries over the Gen 1 dataset tables.
//!
//! Table and column names are those of the external dataset
//! (`gen1_pokemon.pokedexNumber`, `gen1_moves.gameIndexNumber`, ...). Each
//! method is a single point lookup or join; anything that involves
//! presentation or aggregation lives in the report modules.
//!
//! Scope columns: learnset tables (`gameIndex`) are keyed by the game group,
//! everything edition-specific (`versionId`) by the version.

use rusqlite::{Connection, OptionalExtension, params};

use crate::encounter::EncounterSlot;
use crate::error::Result;
use crate::types::{DexNumber, EncounterKind, MapIndex, MoveIndex, Scope};

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// Base stats of a Gen 1 species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    /// Hit points.
    pub hp: u16,
    /// Attack.
    pub attack: u16,
    /// Defense.
    pub defense: u16,
    /// Speed.
    pub speed: u16,
    /// Special.
    pub special: u16,
}

/// A species record with its lookup columns resolved to names.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesRow {
    /// Dex number.
    pub dex: DexNumber,
    /// Internal game index.
    pub game_index: u16,
    /// Display name.
    pub name: String,
    /// Primary type name.
    pub type1: String,
    /// Secondary type name, if any.
    pub type2: Option<String>,
    /// Experience curve name.
    pub experience_curve: String,
    /// Catch rate (0-255).
    pub catch_rate: u16,
    /// Height in meters.
    pub height_m: f64,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Base stats.
    pub stats: BaseStats,
}

impl SpeciesRow {
    /// `Grass/Poison`, or just `Normal`.
    #[must_use]
    pub fn type_label(&self) -> String {
        match &self.type2 {
            Some(second) if !second.is_empty() => format!("{}/{second}", self.type1),
            _ => self.type1.clone(),
        }
    }
}

/// Optional stat-stage deltas of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageModifiers {
    /// The deltas apply to the opponent rather than the user.
    pub enemy: bool,
    /// Attack delta.
    pub attack: Option<i8>,
    /// Defense delta.
    pub defense: Option<i8>,
    /// Speed delta.
    pub speed: Option<i8>,
    /// Special delta.
    pub special: Option<i8>,
    /// Accuracy delta.
    pub accuracy: Option<i8>,
    /// Evasion delta.
    pub evasion: Option<i8>,
}

/// A move record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoveRow {
    /// Internal game index.
    pub index: MoveIndex,
    /// Display name.
    pub name: String,
    /// Type name.
    pub type_name: String,
    /// Base power; absent for non-damaging or variable moves.
    pub power: Option<u16>,
    /// Base PP.
    pub pp: Option<u16>,
    /// Accuracy percentage.
    pub accuracy: Option<u16>,
    /// TM number.
    pub tm: Option<u8>,
    /// HM number.
    pub hm: Option<u8>,
    /// Targets the opponent.
    pub target_enemy: bool,
    /// Spends a turn charging.
    pub charging_turn: bool,
    /// Percentage of max HP healed.
    pub heal_rate: Option<f64>,
    /// Percentage of damage drained (positive) or recoiled (negative).
    pub drain_rate: Option<f64>,
    /// Primary effect tag.
    pub primary_effect: Option<String>,
    /// Secondary effect tag.
    pub second_effect: Option<String>,
    /// Secondary effect chance, out of 256.
    pub second_effect_chance: Option<f64>,
    /// Fixed damage dealt.
    pub static_damage: Option<f64>,
    /// Minimum turns/hits of a multi-turn effect.
    pub effect_min_turns: Option<i64>,
    /// Maximum turns/hits of a multi-turn effect.
    pub effect_max_turns: Option<i64>,
    /// Stat-stage deltas.
    pub stages: StageModifiers,
}

/// How a species evolves along one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionRow {
    /// Target species.
    pub to: DexNumber,
    /// Target species name.
    pub to_name: String,
    /// Level threshold.
    pub level: Option<u8>,
    /// Item index.
    pub item: Option<i64>,
    /// Item name.
    pub item_name: Option<String>,
    /// Evolves on trade.
    pub trade: bool,
}

/// A location as seen by one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRow {
    /// Map index.
    pub index: MapIndex,
    /// Display name.
    pub name: String,
    /// Height in blocks.
    pub height: i64,
    /// Width in blocks.
    pub width: i64,
    /// Number of warps leaving the map.
    pub warps: u32,
    /// Grass encounter rate out of 256.
    pub grass_rate: Option<u32>,
    /// Water encounter rate out of 256.
    pub water_rate: Option<u32>,
    /// Number of Super Rod slots.
    pub fishing_slots: u32,
}

/// Learners of a move, split by whether they know it from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LearnerCounts {
    /// Species that start with the move.
    pub starts: u32,
    /// Species that learn it at a later level.
    pub learns: u32,
}

/// Technical or hidden machine numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Machine {
    /// Technical machine.
    Tm,
    /// Hidden machine.
    Hm,
}

// ---------------------------------------------------------------------------
// Gen1Tables
// ---------------------------------------------------------------------------

/// Query facade over one session's connection.
#[derive(Debug, Clone, Copy)]
pub struct Gen1Tables<'a> {
    conn: &'a Connection,
}

impl<'a> Gen1Tables<'a> {
    /// Wrap a session connection.
    #[must_use]
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn single<T: rusqlite::types::FromSql>(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Option<T>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let value: Option<Option<T>> = stmt.query_row(params, |row| row.get(0)).optional()?;
        Ok(value.flatten())
    }

    // ------------------------------------------------------------------
    // Versions
    // ------------------------------------------------------------------

    /// Scope ids of a version token.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn scope(&self, token: &str) -> Result<Option<Scope>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT gen1_games.id, gen1_game_versions.id
                FROM gen1_game_versions, gen1_games
                WHERE LOWER(gen1_game_versions.shortName) = ?1
                    AND gen1_games.id = gen1_game_versions.gameIndex",
        )?;
        let scope = stmt
            .query_row(params![token.to_lowercase()], |row| {
                Ok(Scope {
                    game_group: row.get(0)?,
                    version: row.get(1)?,
                })
            })
            .optional()?;
        Ok(scope)
    }

    // ------------------------------------------------------------------
    // Species
    // ------------------------------------------------------------------

    /// Dex number of the species with internal index `game_index`.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn dex_by_game_index(&self, game_index: i64) -> Result<Option<DexNumber>> {
        Ok(self
            .single::<u16>(
                "SELECT pokedexNumber FROM gen1_pokemon WHERE gameIndexNumber = ?1",
                params![game_index],
            )?
            .map(DexNumber))
    }

    /// Dex number of the species named `name`, ignoring case.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn dex_by_name(&self, name: &str) -> Result<Option<DexNumber>> {
        Ok(self
            .single::<u16>(
                "SELECT pokedexNumber FROM gen1_pokemon WHERE LOWER(name) = ?1",
                params![name.trim().to_lowercase()],
            )?
            .map(DexNumber))
    }

    /// Full species record.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn species(&self, dex: DexNumber) -> Result<Option<SpeciesRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT pokedexNumber, gameIndexNumber, name,
                    (SELECT typeName FROM gen1_types
                        WHERE gen1_types.typeIndex = gen1_pokemon.type1),
                    (SELECT typeName FROM gen1_types
                        WHERE gen1_types.typeIndex = gen1_pokemon.type2),
                    (SELECT name FROM gen1_experiencecurve
                        WHERE gen1_experiencecurve.curveIndex = gen1_pokemon.experienceCurve),
                    catchRate, heightMeters, weightKilograms,
                    baseHP, baseAttack, baseDefense, baseSpeed, baseSpecial
                FROM gen1_pokemon
                WHERE pokedexNumber = ?1",
        )?;
        let row = stmt
            .query_row(params![dex.0], |row| {
                Ok(SpeciesRow {
                    dex: DexNumber(row.get(0)?),
                    game_index: row.get(1)?,
                    name: row.get(2)?,
                    type1: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    type2: row.get(4)?,
                    experience_curve: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                    catch_rate: row.get(6)?,
                    height_m: row.get(7)?,
                    weight_kg: row.get(8)?,
                    stats: BaseStats {
                        hp: row.get(9)?,
                        attack: row.get(10)?,
                        defense: row.get(11)?,
                        speed: row.get(12)?,
                        special: row.get(13)?,
                    },
                })
            })
            .optional()?;
        Ok(row)
    }

    /// Species name by dex number.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn species_name(&self, dex: i64) -> Result<Option<String>> {
        self.single(
            "SELECT name FROM gen1_pokemon WHERE pokedexNumber = ?1",
            params![dex],
        )
    }

    /// Species name by internal game index.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn species_name_by_game_index(&self, game_index: i64) -> Result<Option<String>> {
        self.single(
            "SELECT name FROM gen1_pokemon WHERE gameIndexNumber = ?1",
            params![game_index],
        )
    }

    /// Dex entry text for one version.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn dex_entry(&self, dex: DexNumber, scope: Scope) -> Result<Option<String>> {
        self.single(
            "SELECT entry FROM gen1_pokedex_entries
                WHERE pokedexNumber = ?1 AND versionId = ?2",
            params![dex.0, scope.version],
        )
    }

    // ------------------------------------------------------------------
    // Learnsets
    // ------------------------------------------------------------------

    /// `(level, move name)` for every level-up entry, in learn order.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn levelup_moves(&self, dex: DexNumber, scope: Scope) -> Result<Vec<(u8, String)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT l.levelUp, m.name
                FROM gen1_pokemon_levelup AS l, gen1_moves AS m
                WHERE l.moveIndex = m.gameIndexNumber
                    AND l.pokedexNumber = ?1
                    AND l.gameIndex = ?2
                ORDER BY l.levelUp ASC, l.levelUpOrder ASC",
        )?;
        let rows = stmt.query_map(params![dex.0, scope.game_group], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// `(machine number, move name)` for every TM or HM the species can use.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn machine_moves(
        &self,
        dex: DexNumber,
        scope: Scope,
        machine: Machine,
    ) -> Result<Vec<(u8, String)>> {
        let sql = match machine {
            Machine::Tm => {
                "SELECT m.tmNumber, m.name
                    FROM gen1_pokemon_tmhmcompatability AS c, gen1_moves AS m
                    WHERE c.pokedexNumber = ?1
                        AND c.gameIndex = ?2
                        AND m.gameIndexNumber = c.moveIndex
                        AND m.tmNumber IS NOT NULL
                    ORDER BY m.tmNumber"
            }
            Machine::Hm => {
                "SELECT m.hmNumber, m.name
                    FROM gen1_pokemon_tmhmcompatability AS c, gen1_moves AS m
                    WHERE c.pokedexNumber = ?1
                        AND c.gameIndex = ?2
                        AND m.gameIndexNumber = c.moveIndex
                        AND m.hmNumber IS NOT NULL
                    ORDER BY m.hmNumber"
            }
        };
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params![dex.0, scope.game_group], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// `(species name, level)` for every species learning `index` by level.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn move_learners(&self, index: MoveIndex, scope: Scope) -> Result<Vec<(String, u8)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT p.name, l.levelUp
                FROM gen1_pokemon_levelup AS l, gen1_pokemon AS p
                WHERE p.pokedexNumber = l.pokedexNumber
                    AND l.moveIndex = ?1
                    AND l.gameIndex = ?2
                ORDER BY p.pokedexNumber ASC, l.levelUp ASC",
        )?;
        let rows = stmt.query_map(params![index.0, scope.game_group], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// Distinct learner counts of a level-up move.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn move_learner_counts(&self, index: MoveIndex, scope: Scope) -> Result<LearnerCounts> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT COUNT(DISTINCT pokedexNumber), levelUp = 1
                FROM gen1_pokemon_levelup
                WHERE moveIndex = ?1 AND gameIndex = ?2
                GROUP BY levelUp = 1",
        )?;
        let rows = stmt.query_map(params![index.0, scope.game_group], |row| {
            Ok((row.get::<_, u32>(0)?, row.get::<_, bool>(1)?))
        })?;
        let mut counts = LearnerCounts::default();
        for row in rows {
            match row? {
                (n, true) => counts.starts = n,
                (n, false) => counts.learns = n,
            }
        }
        Ok(counts)
    }

    /// Names of every species compatible with a TM/HM move, by dex order.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn machine_learners(&self, index: MoveIndex, scope: Scope) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT p.name
                FROM gen1_pokemon_tmhmcompatability AS c, gen1_pokemon AS p
                WHERE p.pokedexNumber = c.pokedexNumber
                    AND c.moveIndex = ?1
                    AND c.gameIndex = ?2
                ORDER BY p.pokedexNumber ASC",
        )?;
        let rows = stmt.query_map(params![index.0, scope.game_group], |row| row.get(0))?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// Number of distinct species compatible with a TM/HM move.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn machine_learner_count(&self, index: MoveIndex, scope: Scope) -> Result<u32> {
        Ok(self
            .single(
                "SELECT COUNT(DISTINCT pokedexNumber)
                    FROM gen1_pokemon_tmhmcompatability
                    WHERE moveIndex = ?1 AND gameIndex = ?2",
                params![index.0, scope.game_group],
            )?
            .unwrap_or(0))
    }

    // ------------------------------------------------------------------
    // Moves
    // ------------------------------------------------------------------

    /// Move carried by TM/HM `number`.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn move_by_machine(&self, machine: Machine, number: i64) -> Result<Option<MoveIndex>> {
        let sql = match machine {
            Machine::Tm => "SELECT gameIndexNumber FROM gen1_moves WHERE tmNumber = ?1",
            Machine::Hm => "SELECT gameIndexNumber FROM gen1_moves WHERE hmNumber = ?1",
        };
        Ok(self.single::<u16>(sql, params![number])?.map(MoveIndex))
    }

    /// Move named `name`, ignoring case.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn move_by_name(&self, name: &str) -> Result<Option<MoveIndex>> {
        Ok(self
            .single::<u16>(
                "SELECT gameIndexNumber FROM gen1_moves WHERE LOWER(name) = ?1",
                params![name.trim().to_lowercase()],
            )?
            .map(MoveIndex))
    }

    /// Full move record.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn move_record(&self, index: MoveIndex) -> Result<Option<MoveRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT gameIndexNumber, name,
                    (SELECT typeName FROM gen1_types
                        WHERE gen1_types.typeIndex = gen1_moves.typeIndex),
                    basePower, basePP, accuracy, tmNumber, hmNumber, targetEnemy,
                    hasChargingTurn, healRate, drainRate, primaryEffect, secondEffect,
                    secondEffectChance, staticDamage, effectMinTurns, effectMaxTurns,
                    enemyStageModifier, attackStageModifier, defenseStageModifier,
                    speedStageModifier, specialStageModifier, accuracyStageModifier,
                    evasionStageModifier
                FROM gen1_moves
                WHERE gameIndexNumber = ?1",
        )?;
        let row = stmt
            .query_row(params![index.0], |row| {
                Ok(MoveRow {
                    index: MoveIndex(row.get(0)?),
                    name: row.get(1)?,
                    type_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    power: row.get(3)?,
                    pp: row.get(4)?,
                    accuracy: row.get(5)?,
                    tm: row.get(6)?,
                    hm: row.get(7)?,
                    target_enemy: row.get::<_, Option<bool>>(8)?.unwrap_or(false),
                    charging_turn: row.get::<_, Option<bool>>(9)?.unwrap_or(false),
                    heal_rate: row.get(10)?,
                    drain_rate: row.get(11)?,
                    primary_effect: row.get(12)?,
                    second_effect: row.get(13)?,
                    second_effect_chance: row.get(14)?,
                    static_damage: row.get(15)?,
                    effect_min_turns: row.get(16)?,
                    effect_max_turns: row.get(17)?,
                    stages: StageModifiers {
                        enemy: row.get::<_, Option<bool>>(18)?.unwrap_or(false),
                        attack: row.get(19)?,
                        defense: row.get(20)?,
                        speed: row.get(21)?,
                        special: row.get(22)?,
                        accuracy: row.get(23)?,
                        evasion: row.get(24)?,
                    },
                })
            })
            .optional()?;
        Ok(row)
    }

    /// Move name by internal index.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn move_name(&self, index: i64) -> Result<Option<String>> {
        self.single(
            "SELECT name FROM gen1_moves WHERE gameIndexNumber = ?1",
            params![index],
        )
    }

    // ------------------------------------------------------------------
    // Evolution
    // ------------------------------------------------------------------

    /// Outgoing evolution edges of a species.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn evolutions(&self, dex: DexNumber) -> Result<Vec<EvolutionRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT evo.toPokedexNumber,
                    (SELECT name FROM gen1_pokemon
                        WHERE gen1_pokemon.pokedexNumber = evo.toPokedexNumber),
                    evo.levelUp, evo.itemIndex,
                    (SELECT name FROM gen1_items
                        WHERE gen1_items.hexIndex = evo.itemIndex),
                    evo.isTrade
                FROM gen1_pokemon_evolution AS evo
                WHERE evo.fromPokedexNumber = ?1
                ORDER BY evo.toPokedexNumber ASC",
        )?;
        let rows = stmt.query_map(params![dex.0], |row| {
            Ok(EvolutionRow {
                to: DexNumber(row.get(0)?),
                to_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                level: row.get(2)?,
                item: row.get(3)?,
                item_name: row.get(4)?,
                trade: row.get::<_, Option<bool>>(5)?.unwrap_or(false),
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    // ------------------------------------------------------------------
    // Locations
    // ------------------------------------------------------------------

    /// `index` if that map is used by the scope's version.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn used_location(&self, index: i64, scope: Scope) -> Result<Option<MapIndex>> {
        Ok(self
            .single::<u16>(
                "SELECT mapIndex FROM gen1_locations
                    WHERE mapIndex = ?1
                        AND EXISTS (
                            SELECT 1 FROM gen1_location_used AS u
                                WHERE u.mapIndex = gen1_locations.mapIndex
                                    AND u.versionId = ?2)",
                params![index, scope.version],
            )?
            .map(MapIndex))
    }

    /// Map named `name` (ignoring case) if used by the scope's version.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn used_location_by_name(&self, name: &str, scope: Scope) -> Result<Option<MapIndex>> {
        Ok(self
            .single::<u16>(
                "SELECT mapIndex FROM gen1_locations
                    WHERE LOWER(name) = ?1
                        AND EXISTS (
                            SELECT 1 FROM gen1_location_used AS u
                                WHERE u.mapIndex = gen1_locations.mapIndex
                                    AND u.versionId = ?2)",
                params![name.trim().to_lowercase(), scope.version],
            )?
            .map(MapIndex))
    }

    /// Name of map `index` if used by the scope's version.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn used_location_name(&self, index: i64, scope: Scope) -> Result<Option<String>> {
        self.single(
            "SELECT name FROM gen1_locations
                WHERE mapIndex = ?1
                    AND EXISTS (
                        SELECT 1 FROM gen1_location_used AS u
                            WHERE u.mapIndex = gen1_locations.mapIndex
                                AND u.versionId = ?2)",
            params![index, scope.version],
        )
    }

    /// Location details as seen by the scope's version.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn location(&self, index: MapIndex, scope: Scope) -> Result<Option<LocationRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT l.mapIndex, l.name, l.height, l.width,
                    (SELECT COUNT(*) FROM gen1_location_warps AS w
                        WHERE w.fromMapIndex = l.mapIndex AND w.versionId = ?2),
                    (SELECT grassEncounterRate FROM gen1_location_used AS u
                        WHERE u.mapIndex = l.mapIndex AND u.versionId = ?2),
                    (SELECT waterEncounterRate FROM gen1_location_used AS u
                        WHERE u.mapIndex = l.mapIndex AND u.versionId = ?2),
                    (SELECT COUNT(*) FROM gen1_fishing AS f
                        WHERE f.locationId = l.mapIndex AND f.versionId = ?2)
                FROM gen1_locations AS l
                WHERE l.mapIndex = ?1",
        )?;
        let row = stmt
            .query_row(params![index.0, scope.version], |row| {
                Ok(LocationRow {
                    index: MapIndex(row.get(0)?),
                    name: row.get(1)?,
                    height: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
                    width: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
                    warps: row.get(4)?,
                    grass_rate: row.get(5)?,
                    water_rate: row.get(6)?,
                    fishing_slots: row.get(7)?,
                })
            })
            .optional()?;
        Ok(row)
    }

    /// Raw encounter slots of one kind at a location, in slot order.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn encounters(
        &self,
        index: MapIndex,
        scope: Scope,
        kind: EncounterKind,
    ) -> Result<Vec<EncounterSlot>> {
        let map_row = |row: &rusqlite::Row<'_>| {
            Ok(EncounterSlot {
                species: DexNumber(row.get(0)?),
                name: row.get(1)?,
                level: row.get(2)?,
                slot: row.get(3)?,
            })
        };
        let slots = if kind == EncounterKind::Fishing {
            let mut stmt = self.conn.prepare_cached(
                "SELECT f.pokedexNumber, p.name, f.pokemonLevel, f.slotIndex
                    FROM gen1_fishing AS f, gen1_pokemon AS p
                    WHERE f.versionId = ?1
                        AND f.locationId = ?2
                        AND p.pokedexNumber = f.pokedexNumber
                    ORDER BY f.slotIndex ASC",
            )?;
            let rows = stmt.query_map(params![scope.version, index.0], map_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        } else {
            let mut stmt = self.conn.prepare_cached(
                "SELECT w.pokedexNumber, p.name, w.pokemonLevel, w.slotIndex
                    FROM gen1_wild_encounters AS w, gen1_pokemon AS p
                    WHERE w.versionId = ?1
                        AND w.locationId = ?2
                        AND w.encounterType = ?3
                        AND p.pokedexNumber = w.pokedexNumber
                    ORDER BY w.slotIndex ASC",
            )?;
            let rows = stmt.query_map(params![scope.version, index.0, kind.as_str()], map_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(slots)
    }

    // ------------------------------------------------------------------
    // Index lookups
    // ------------------------------------------------------------------

    /// Item name by hex index.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn item_name(&self, index: i64) -> Result<Option<String>> {
        self.single("SELECT name FROM gen1_items WHERE hexIndex = ?1", params![index])
    }

    /// Experience curve name by index.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn curve_name(&self, index: i64) -> Result<Option<String>> {
        self.single(
            "SELECT name FROM gen1_experiencecurve WHERE curveIndex = ?1",
            params![index],
        )
    }

    /// Type name by index.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn type_name(&self, index: i64) -> Result<Option<String>> {
        self.single(
            "SELECT typeName FROM gen1_types WHERE typeIndex = ?1",
            params![index],
        )
    }

    /// Trainer class name by index.
    ///
    /// # Errors
    /// Returns a store fault if the query fails.
    pub fn trainer_class_name(&self, index: i64) -> Result<Option<String>> {
        self.single(
            "SELECT className FROM gen1_trainer_class WHERE gameIndex = ?1",
            params![index],
        )
    }
}
