//! Wild encounter rate aggregation.
//!
//! Grass and water tables have ten slots whose odds are fixed by the game
//! engine ([`SLOT_WEIGHTS`], out of 256). A species occupying several slots
//! gets the sum of their weights. Super Rod tables have no weight table:
//! every slot row is equally likely, so a species' weight is the number of
//! rows it occupies and the denominator is the total row count.

use crate::format::{level_range, percent};
use crate::types::DexNumber;

/// Per-slot odds for grass and water encounters.
pub const SLOT_WEIGHTS: [u32; 10] = [51, 51, 39, 25, 25, 25, 13, 13, 11, 3];

/// Denominator of [`SLOT_WEIGHTS`].
pub const SLOT_TOTAL: u32 = 256;

/// Weight of one grass/water slot. Out-of-range slots carry no weight.
#[must_use]
pub fn slot_weight(slot: u8) -> u32 {
    SLOT_WEIGHTS.get(usize::from(slot)).copied().unwrap_or(0)
}

/// One row of an encounter table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterSlot {
    /// Species found in this slot.
    pub species: DexNumber,
    /// Species display name.
    pub name: String,
    /// Level the species appears at.
    pub level: u8,
    /// Slot index (0..10 for grass/water).
    pub slot: u8,
}

/// How slot rows turn into weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Fixed 256-based slot table.
    SlotTable,
    /// One unit per row, out of the row count.
    Occurrence,
}

/// Aggregated odds for one species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesRate {
    /// Species.
    pub species: DexNumber,
    /// Species display name.
    pub name: String,
    /// Lowest level seen.
    pub min_level: u8,
    /// Highest level seen.
    pub max_level: u8,
    /// Summed weight.
    pub weight: u32,
}

/// A location's aggregated table for one encounter kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncounterTable {
    /// Species ordered by descending weight.
    pub rates: Vec<SpeciesRate>,
    /// Denominator for percentages.
    pub total: u32,
}

impl EncounterTable {
    /// Aggregate raw slot rows by species.
    ///
    /// Ties keep the order in which species first appear in `slots`.
    #[must_use]
    pub fn aggregate(slots: &[EncounterSlot], weighting: Weighting) -> Self {
        let mut rates: Vec<SpeciesRate> = Vec::new();
        for slot in slots {
            let weight = match weighting {
                Weighting::SlotTable => slot_weight(slot.slot),
                Weighting::Occurrence => 1,
            };
            if let Some(rate) = rates.iter_mut().find(|r| r.species == slot.species) {
                rate.min_level = rate.min_level.min(slot.level);
                rate.max_level = rate.max_level.max(slot.level);
                rate.weight += weight;
            } else {
                rates.push(SpeciesRate {
                    species: slot.species,
                    name: slot.name.clone(),
                    min_level: slot.level,
                    max_level: slot.level,
                    weight,
                });
            }
        }
        rates.sort_by(|a, b| b.weight.cmp(&a.weight));

        let total = match weighting {
            Weighting::SlotTable => SLOT_TOTAL,
            Weighting::Occurrence => rates.iter().map(|r| r.weight).sum(),
        };
        Self { rates, total }
    }

    /// Whether the location has no encounters of this kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Percentage for one species, one decimal place.
    #[must_use]
    pub fn percent_of(&self, rate: &SpeciesRate) -> String {
        percent(rate.weight, self.total)
    }

    /// `Pidgey L3 - L5 @ 50.0%` fragments, in table order.
    #[must_use]
    pub fn fragments(&self) -> Vec<String> {
        self.rates
            .iter()
            .map(|rate| {
                format!(
                    "{} {} @ {}%",
                    rate.name,
                    level_range(rate.min_level, rate.max_level),
                    self.percent_of(rate)
                )
            })
            .collect()
    }
}

/// `Pokemon: Pidgey, Level: L3, Rate: 19.9%` for one slot row.
#[must_use]
pub fn slot_line(slot: &EncounterSlot, weight: u32, total: u32) -> String {
    format!(
        "Pokemon: {}, Level: L{}, Rate: {}%",
        slot.name,
        slot.level,
        percent(weight, total)
    )
}
