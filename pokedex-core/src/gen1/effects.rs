//! Move effect narration.
//!
//! The dataset tags each move with a primary effect (and optionally a
//! secondary effect with a chance out of 256). Both tags come from a closed
//! vocabulary; each tag maps to one fixed sentence. Unknown or absent tags
//! say nothing.

use super::tables::{MoveRow, StageModifiers};

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Primary effect tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum PrimaryEffect {
    BadlyPoison,
    Bide,
    Boom,
    Confusion,
    Conversion,
    Counter,
    Crash,
    Disable,
    Fatigue,
    Flee,
    Fly,
    FocusEnergy,
    Haze,
    HighCrit,
    LeechSeed,
    LevelDamage,
    LightScreen,
    Metronome,
    Mimic,
    MirrorMove,
    Mist,
    Multihit,
    Ohko,
    Paralyze,
    Payday,
    Poison,
    Psywave,
    Rage,
    Recharge,
    Reflect,
    Reset,
    Sleep,
    Stage,
    Static,
    Substitute,
    SuperFang,
    TargetSleep,
    Transform,
    Trap,
}

impl PrimaryEffect {
    /// Parse a dataset tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let effect = match tag {
            "badlyPoison" => Self::BadlyPoison,
            "bide" => Self::Bide,
            "boom" => Self::Boom,
            "confusion" => Self::Confusion,
            "conversion" => Self::Conversion,
            "counter" => Self::Counter,
            "crash" => Self::Crash,
            "disable" => Self::Disable,
            "fatigue" => Self::Fatigue,
            "flee" | "phazing" => Self::Flee,
            "fly" => Self::Fly,
            "focusEnergy" => Self::FocusEnergy,
            "haze" => Self::Haze,
            "highCrit" => Self::HighCrit,
            "leechSeed" => Self::LeechSeed,
            "levelDamage" => Self::LevelDamage,
            "lightscreen" => Self::LightScreen,
            "metronome" => Self::Metronome,
            "mimic" => Self::Mimic,
            "mirrorMove" => Self::MirrorMove,
            "mist" => Self::Mist,
            "multihit" => Self::Multihit,
            "ohko" => Self::Ohko,
            "paralyze" => Self::Paralyze,
            "payday" => Self::Payday,
            "poison" => Self::Poison,
            "psywave" => Self::Psywave,
            "rage" => Self::Rage,
            "recharge" => Self::Recharge,
            "reflect" => Self::Reflect,
            "reset" => Self::Reset,
            "sleep" => Self::Sleep,
            "stage" => Self::Stage,
            "static" => Self::Static,
            "substitute" => Self::Substitute,
            "superFang" => Self::SuperFang,
            "targetSleep" => Self::TargetSleep,
            "transform" => Self::Transform,
            "trap" => Self::Trap,
            _ => return None,
        };
        Some(effect)
    }

    /// Sentence describing this effect for `mv`.
    #[must_use]
    pub fn narrate(self, mv: &MoveRow) -> Option<String> {
        let fixed = match self {
            Self::BadlyPoison => "Badly Poisons the enemy",
            Self::Bide => "Wait 2 turns, Returns twice damage received",
            Self::Boom => "Faints, Enemy defense will be halved",
            Self::Confusion => "Applies Confusion status",
            Self::Conversion => "Changes user type to enemy type",
            Self::Counter => "Returns twice damage received from a Normal or Fighting move",
            Self::Crash => "User receive 1 HP damage if missed",
            Self::Disable => {
                return Some(format!(
                    "Disables one of enemy moves for {} turns",
                    turns(mv)
                ));
            }
            Self::Fatigue => {
                return Some(format!(
                    "Consecutively attacks for {} turns, afterwards user is confused",
                    turns(mv)
                ));
            }
            Self::Flee => "Escape a wild encounter",
            Self::Fly => "On Charging turn, user is semi-invulnerable",
            Self::FocusEnergy => "Decreases chance of critical hit by 4",
            Self::Haze => "Reset some of in-battle effects",
            Self::HighCrit => "High Critical-hit ratio",
            Self::LeechSeed => "Plant a seed at the target, drains 1/16 HP per turn",
            Self::LevelDamage => "Applies damage equal to user level",
            Self::LightScreen => "Doubles the users effective Special",
            Self::Metronome => "Executes a random move",
            Self::Mimic => "Copies a move the enemy has",
            Self::MirrorMove => "Uses the last move the enemy used on user",
            Self::Mist => "Prevents stat modifications from enemy",
            Self::Multihit => {
                return Some(format!(
                    "Execute the move {} times in same turn",
                    turns(mv)
                ));
            }
            Self::Ohko => "One Hit KO if user is faster",
            Self::Paralyze => "Paralyzes the enemy",
            Self::Payday => "Scatter coins twice the user's level",
            Self::Poison => "Poisons the enemy",
            Self::Psywave => "Deals Random amount of damage from 0.5 to 1.5 or the user's level",
            Self::Rage => {
                "Locks the user to only use Rage, user Attack will increase if hit by enemy"
            }
            Self::Recharge => "User needs to recharge after executed",
            Self::Reflect => "Doubles the users effective Defense",
            Self::Reset => "Heals to full, Remove all status ailment, Sleeps for 2 turns",
            Self::Sleep => "Sleep the enemy",
            Self::Stage => return stage_sentence("Applies", &mv.stages),
            Self::Static => {
                return Some(format!(
                    "Deals {} damage",
                    mv.static_damage.unwrap_or_default()
                ));
            }
            Self::Substitute => "Create a substitute using 25% of user Max HP",
            Self::SuperFang => "Deals damage equal to half enemy current HP",
            Self::TargetSleep => "Deals damage when the enemy is asleep",
            Self::Transform => "Transforms as the enemy",
            Self::Trap => "Traps the enemy",
        };
        Some(fixed.to_string())
    }
}

/// Secondary effect tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SecondaryEffect {
    Burn,
    Confusion,
    Flinch,
    Freeze,
    Paralyze,
    Poison,
    Stage,
}

impl SecondaryEffect {
    /// Parse a dataset tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let effect = match tag {
            "burn" => Self::Burn,
            "confusion" => Self::Confusion,
            "flinch" => Self::Flinch,
            "freeze" => Self::Freeze,
            "paralyze" => Self::Paralyze,
            "poison" => Self::Poison,
            "stage" => Self::Stage,
            _ => return None,
        };
        Some(effect)
    }

    /// Sentence describing this effect, prefixed with its chance.
    #[must_use]
    pub fn narrate(self, mv: &MoveRow) -> Option<String> {
        let chance = format!("{}%", chance_percent(mv.second_effect_chance.unwrap_or_default()));
        let verb = match self {
            Self::Burn => "burn",
            Self::Confusion => "confuse",
            Self::Flinch => "flinch",
            Self::Freeze => "freeze",
            Self::Paralyze => "paralyze",
            Self::Poison => "poison",
            Self::Stage => return stage_sentence(&format!("{chance} to"), &mv.stages),
        };
        Some(format!("{chance} to {verb} the enemy"))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `chance / 256 * 100`, one decimal place.
#[must_use]
pub fn chance_percent(chance: f64) -> String {
    format!("{:.1}", chance / 256.0 * 100.0)
}

fn turns(mv: &MoveRow) -> String {
    let min = mv.effect_min_turns.unwrap_or_default();
    let max = mv.effect_max_turns.unwrap_or_default();
    format!("{min}-{max}")
}

/// One clause for a single stat delta. A zero delta says nothing.
#[must_use]
pub fn stage_clause(prefix: &str, delta: i8, stat: &str, who: &str) -> Option<String> {
    let wording = match delta {
        i8::MIN..=-2 => "double decrease",
        -1 => "decrease",
        0 => return None,
        1 => "increase",
        2..=i8::MAX => "double increase",
    };
    Some(format!("{prefix} {wording} the {stat} stat on {who}"))
}

/// Every present stat delta, in attack/defense/speed/special/accuracy/evasion
/// order.
fn stage_sentence(prefix: &str, stages: &StageModifiers) -> Option<String> {
    let who = if stages.enemy { "enemy" } else { "self" };
    let clauses: Vec<String> = [
        (stages.attack, "Attack"),
        (stages.defense, "Defense"),
        (stages.speed, "Speed"),
        (stages.special, "Special"),
        (stages.accuracy, "Accuracy"),
        (stages.evasion, "Evasion"),
    ]
    .into_iter()
    .filter_map(|(delta, stat)| delta.and_then(|d| stage_clause(prefix, d, stat, who)))
    .collect();
    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(", "))
    }
}

/// Every property sentence of a move, in display order: targeting, charging,
/// healing, primary effect, secondary effect, drain or recoil.
#[must_use]
pub fn properties(mv: &MoveRow) -> Vec<String> {
    let mut out = Vec::new();
    out.push(if mv.target_enemy { "Targets enemy" } else { "Targets self" }.to_string());
    if mv.charging_turn {
        out.push("Has Charging Turn".to_string());
    }

    let primary = mv.primary_effect.as_deref().filter(|tag| !tag.is_empty());
    if let (Some(rate), None) = (mv.heal_rate.filter(|r| r.abs() > f64::EPSILON), primary) {
        out.push(format!("Heals {rate}% of Max HP"));
    }
    if let Some(sentence) = primary
        .and_then(PrimaryEffect::from_tag)
        .and_then(|effect| effect.narrate(mv))
    {
        out.push(sentence);
    }
    if let Some(sentence) = mv
        .second_effect
        .as_deref()
        .and_then(SecondaryEffect::from_tag)
        .and_then(|effect| effect.narrate(mv))
    {
        out.push(sentence);
    }

    match mv.drain_rate {
        Some(rate) if rate > 0.0 => out.push(format!("Recovers {rate}% of Damage Done")),
        Some(rate) if rate < 0.0 => out.push(format!("Recoils {}% of Damage Done", -rate)),
        _ => {}
    }
    out
}
