//! Property-Based Tests for the Pokédex Core
//!
//! Uses `proptest` to check resolution, pagination and formatting
//! invariants under random inputs.

use std::sync::{Arc, OnceLock};

use proptest::prelude::*;

use pokedex_core::config::PokedexConfig;
use pokedex_core::encounter::{EncounterSlot, EncounterTable, SLOT_TOTAL, Weighting};
use pokedex_core::format::{format_height, format_weight, learn_levels};
use pokedex_core::paginate::{Paginator, SEPARATOR};
use pokedex_core::resolve::parse_number;
use pokedex_core::store::SqliteStore;
use pokedex_core::types::{DexNumber, EntityId, EntityKind, ReportKind, Request};
use pokedex_core::Pokedex;

const FIXTURE: &str = include_str!("fixtures/gen1.sql");

/// Species present in the fixture, by dex number and name.
const SPECIES: &[(u16, &str)] = &[
    (1, "Bulbasaur"),
    (2, "Ivysaur"),
    (3, "Venusaur"),
    (16, "Pidgey"),
    (19, "Rattata"),
    (60, "Poliwag"),
    (63, "Abra"),
    (64, "Kadabra"),
    (65, "Alakazam"),
    (92, "Gastly"),
    (98, "Krabby"),
    (129, "Magikarp"),
    (133, "Eevee"),
    (134, "Vaporeon"),
];

fn pokedex() -> &'static Pokedex {
    static DEX: OnceLock<Pokedex> = OnceLock::new();
    DEX.get_or_init(|| {
        let store = SqliteStore::from_script(FIXTURE).expect("fixture loads");
        Pokedex::new(&PokedexConfig::default(), Arc::new(store))
    })
}

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_species() -> impl Strategy<Value = (u16, &'static str)> {
    prop::sample::select(SPECIES)
}

/// Randomly re-case every character of `name`.
fn arb_casing(name: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect()
    })
}

fn arb_fragment() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z .'-]{0,14}"
}

fn arb_slots() -> impl Strategy<Value = Vec<EncounterSlot>> {
    prop::collection::vec((0u16..6, 2u8..60), 10).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(slot, (species, level))| EncounterSlot {
                species: DexNumber(species),
                name: format!("Species{species}"),
                level,
                slot: u8::try_from(slot).expect("ten slots"),
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Property: every dex number and name resolves to the same species
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn dex_number_and_name_resolve_alike((dex, name) in arb_species()) {
        let expected = Some(EntityId::Species(DexNumber(dex)));
        let by_number = pokedex()
            .resolve("red", EntityKind::Species, &dex.to_string())
            .expect("resolves");
        let by_name = pokedex()
            .resolve("red", EntityKind::Species, name)
            .expect("resolves");
        prop_assert_eq!(by_number, expected);
        prop_assert_eq!(by_name, expected);
    }

    #[test]
    fn name_resolution_ignores_case(
        query in arb_species().prop_flat_map(|(dex, name)| (Just(dex), arb_casing(name)))
    ) {
        let (dex, cased) = query;
        let resolved = pokedex()
            .resolve("blue", EntityKind::Species, &cased)
            .expect("resolves");
        prop_assert_eq!(resolved, Some(EntityId::Species(DexNumber(dex))));
    }

    #[test]
    fn out_of_range_dex_numbers_are_not_found(n in 152i64..100_000) {
        let report = pokedex()
            .lookup(&Request::new(ReportKind::Dex, "red", n.to_string()))
            .expect("lookup succeeds");
        prop_assert!(!report.is_found());
        prop_assert_eq!(report.lines().len(), 1);
    }

    #[test]
    fn every_dex_report_has_a_nonzero_weight((dex, _) in arb_species()) {
        let report = pokedex()
            .lookup(&Request::new(ReportKind::Dex, "yellow", dex.to_string()))
            .expect("lookup succeeds");
        prop_assert!(report.is_found());
        prop_assert!(!report.lines()[0].contains("Weight: 0 lbs"));
    }
}

// ---------------------------------------------------------------------------
// Property: pagination preserves fragments and respects the budget
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn length_pagination_preserves_order_and_budget(
        fragments in prop::collection::vec(arb_fragment(), 0..40),
        budget in 20usize..120,
    ) {
        let prefix = "Label: ";
        let chunks = Paginator::by_length(prefix, budget).paginate(fragments.clone());

        prop_assert!(!chunks.is_empty());
        let mut rejoined = Vec::new();
        for chunk in &chunks {
            prop_assert!(chunk.starts_with(prefix));
            let body = &chunk[prefix.len()..];
            let parts: Vec<&str> = if body.is_empty() {
                Vec::new()
            } else {
                body.split(SEPARATOR).collect()
            };
            if parts.len() > 1 {
                prop_assert!(chunk.chars().count() <= budget, "{} > {}", chunk, budget);
            }
            rejoined.extend(parts.into_iter().map(str::to_string));
        }
        prop_assert_eq!(rejoined, fragments);
    }

    #[test]
    fn batch_pagination_fills_every_chunk_but_the_last(
        fragments in prop::collection::vec(arb_fragment(), 0..40),
        size in 1usize..8,
    ) {
        let chunks = Paginator::batched("", size).paginate(fragments.clone());
        prop_assert_eq!(chunks.len(), fragments.len().div_ceil(size));
        for (i, chunk) in chunks.iter().enumerate() {
            let count = chunk.split(SEPARATOR).count();
            if i + 1 < chunks.len() {
                prop_assert_eq!(count, size);
            } else {
                prop_assert!(count <= size);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: encounter aggregation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn full_slot_tables_sum_to_the_total(slots in arb_slots()) {
        let table = EncounterTable::aggregate(&slots, Weighting::SlotTable);
        let sum: u32 = table.rates.iter().map(|r| r.weight).sum();
        prop_assert_eq!(sum, SLOT_TOTAL);
        prop_assert!(table.rates.windows(2).all(|w| w[0].weight >= w[1].weight));
        for rate in &table.rates {
            prop_assert!(rate.min_level <= rate.max_level);
        }
    }

    #[test]
    fn occurrence_weights_count_rows(slots in arb_slots()) {
        let table = EncounterTable::aggregate(&slots, Weighting::Occurrence);
        prop_assert_eq!(table.total as usize, slots.len());
    }
}

// ---------------------------------------------------------------------------
// Property: formatting helpers
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn weight_never_renders_as_zero(tenths in 1u32..10_000) {
        let kg = f64::from(tenths) / 10.0;
        let rendered = format_weight(kg);
        prop_assert!(!rendered.starts_with("0 lbs"), "{}", rendered);
        let metric = format!("({kg:.1}kg)");
        prop_assert!(rendered.ends_with(&metric), "{}", rendered);
    }

    #[test]
    fn height_inches_stay_below_twelve(tenths in 1u32..200) {
        let rendered = format_height(f64::from(tenths) / 10.0);
        let (_, rest) = rendered.split_once('\'').expect("feet marker");
        let (inches, _) = rest.split_once('"').expect("inch marker");
        let inches: u32 = inches.parse().expect("inches are numeric");
        prop_assert!(inches < 12);
    }

    #[test]
    fn learn_levels_are_unique_and_ascending(levels in prop::collection::vec(1u8..100, 0..20)) {
        let groups = learn_levels(levels.iter().copied());
        let mut distinct = levels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(groups.len(), distinct.len());
    }

    #[test]
    fn decimal_and_hex_parse_alike(n in 0i64..100_000) {
        prop_assert_eq!(parse_number(&n.to_string()), Some(n));
        let upper = format!("0x{n:X}");
        let lower = format!("0X{n:x}");
        prop_assert_eq!(parse_number(&upper), Some(n));
        prop_assert_eq!(parse_number(&lower), Some(n));
    }
}
