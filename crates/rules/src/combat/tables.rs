//! Static combat outcome tables
//!
//! Melee outcomes are keyed by defense type and the attacker/defender
//! result pair; the ignore column is keyed by the attacker result alone
//! and rejects composite lookups. Each entry carries impact dice counts
//! and the fumble/stumble/block/miss/tactical-advantage flags.

use serde::{Deserialize, Serialize};

use harnmaster_domain::{DefenseType, SuccessLevel};

use crate::error::CombatError;

/// One cell of a combat outcome table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeEntry {
    /// Attacker impact dice (d6); 0 means no strike landed
    pub atk_dice: i32,
    /// Defender impact dice (counterstrike only)
    pub def_dice: i32,
    pub atk_fumble: bool,
    pub def_fumble: bool,
    pub atk_stumble: bool,
    pub def_stumble: bool,
    pub block: bool,
    pub miss: bool,
    /// Defender gains a tactical advantage
    pub dta: bool,
}

impl OutcomeEntry {
    const fn atk(dice: i32) -> Self {
        Self {
            atk_dice: dice,
            def_dice: 0,
            atk_fumble: false,
            def_fumble: false,
            atk_stumble: false,
            def_stumble: false,
            block: false,
            miss: false,
            dta: false,
        }
    }

    const fn def(dice: i32) -> Self {
        Self {
            atk_dice: 0,
            def_dice: dice,
            atk_fumble: false,
            def_fumble: false,
            atk_stumble: false,
            def_stumble: false,
            block: false,
            miss: false,
            dta: false,
        }
    }

    const fn both(atk_dice: i32, def_dice: i32) -> Self {
        Self {
            atk_dice,
            def_dice,
            atk_fumble: false,
            def_fumble: false,
            atk_stumble: false,
            def_stumble: false,
            block: false,
            miss: false,
            dta: false,
        }
    }

    const fn fumble(attacker: bool, defender: bool) -> Self {
        Self {
            atk_dice: 0,
            def_dice: 0,
            atk_fumble: attacker,
            def_fumble: defender,
            atk_stumble: false,
            def_stumble: false,
            block: false,
            miss: false,
            dta: false,
        }
    }

    const fn stumble(attacker: bool, defender: bool) -> Self {
        Self {
            atk_dice: 0,
            def_dice: 0,
            atk_fumble: false,
            def_fumble: false,
            atk_stumble: attacker,
            def_stumble: defender,
            block: false,
            miss: false,
            dta: false,
        }
    }

    const fn blocked() -> Self {
        Self {
            atk_dice: 0,
            def_dice: 0,
            atk_fumble: false,
            def_fumble: false,
            atk_stumble: false,
            def_stumble: false,
            block: true,
            miss: false,
            dta: false,
        }
    }

    const fn missed() -> Self {
        Self {
            atk_dice: 0,
            def_dice: 0,
            atk_fumble: false,
            def_fumble: false,
            atk_stumble: false,
            def_stumble: false,
            block: false,
            miss: true,
            dta: false,
        }
    }

    const fn tactical_advantage() -> Self {
        Self {
            atk_dice: 0,
            def_dice: 0,
            atk_fumble: false,
            def_fumble: false,
            atk_stumble: false,
            def_stumble: false,
            block: false,
            miss: false,
            dta: true,
        }
    }

    const fn fumble_with_def(defender_dice: i32) -> Self {
        Self {
            atk_dice: 0,
            def_dice: defender_dice,
            atk_fumble: true,
            def_fumble: false,
            atk_stumble: false,
            def_stumble: false,
            block: false,
            miss: false,
            dta: false,
        }
    }
}

use harnmaster_domain::SuccessLevel::{
    CriticalFailure as CF, CriticalSuccess as CS, MarginalFailure as MF, MarginalSuccess as MS,
};

fn dodge_entry(atk: SuccessLevel, def: SuccessLevel) -> OutcomeEntry {
    match (atk, def) {
        (CF, CF) => OutcomeEntry::stumble(true, true),
        (CF, _) => OutcomeEntry::stumble(true, false),
        (MF, CF) => OutcomeEntry::stumble(false, true),
        (MF, CS) => OutcomeEntry::tactical_advantage(),
        (MF, _) => OutcomeEntry::missed(),
        (MS, CF) => OutcomeEntry::atk(2),
        (MS, MF) => OutcomeEntry::atk(1),
        (MS, MS) => OutcomeEntry::missed(),
        (MS, CS) => OutcomeEntry::tactical_advantage(),
        (CS, CF) => OutcomeEntry::atk(3),
        (CS, MF) => OutcomeEntry::atk(2),
        (CS, MS) => OutcomeEntry::atk(1),
        (CS, CS) => OutcomeEntry::missed(),
    }
}

fn block_entry(atk: SuccessLevel, def: SuccessLevel) -> OutcomeEntry {
    match (atk, def) {
        (CF, CF) => OutcomeEntry::fumble(true, true),
        (CF, _) => OutcomeEntry::fumble(true, false),
        (MF, CF) => OutcomeEntry::fumble(false, true),
        (MF, MF) => OutcomeEntry::missed(),
        (MF, MS) => OutcomeEntry::blocked(),
        (MF, CS) => OutcomeEntry::tactical_advantage(),
        (MS, CF) => OutcomeEntry::atk(2),
        (MS, MF) => OutcomeEntry::atk(1),
        (MS, MS) => OutcomeEntry::blocked(),
        (MS, CS) => OutcomeEntry::blocked(),
        (CS, CF) => OutcomeEntry::atk(3),
        (CS, MF) => OutcomeEntry::atk(2),
        (CS, MS) => OutcomeEntry::atk(1),
        (CS, CS) => OutcomeEntry::blocked(),
    }
}

fn counterstrike_entry(atk: SuccessLevel, def: SuccessLevel) -> OutcomeEntry {
    match (atk, def) {
        (CF, CF) => OutcomeEntry::fumble(true, true),
        (CF, MF) => OutcomeEntry::fumble(true, false),
        (CF, MS) => OutcomeEntry::fumble_with_def(1),
        (CF, CS) => OutcomeEntry::fumble_with_def(2),
        (MF, CF) => OutcomeEntry::fumble(false, true),
        (MF, MF) => OutcomeEntry::missed(),
        (MF, MS) => OutcomeEntry::def(1),
        (MF, CS) => OutcomeEntry::def(2),
        (MS, CF) => OutcomeEntry::atk(3),
        (MS, MF) => OutcomeEntry::atk(2),
        (MS, MS) => OutcomeEntry::atk(1),
        (MS, CS) => OutcomeEntry::def(1),
        (CS, CF) => OutcomeEntry::atk(4),
        (CS, MF) => OutcomeEntry::atk(3),
        (CS, MS) => OutcomeEntry::atk(2),
        (CS, CS) => OutcomeEntry::both(1, 1),
    }
}

fn ignore_entry(atk: SuccessLevel) -> OutcomeEntry {
    match atk {
        CF => OutcomeEntry::fumble(true, false),
        MF => OutcomeEntry::missed(),
        MS => OutcomeEntry::atk(3),
        CS => OutcomeEntry::atk(4),
    }
}

/// Melee outcome lookup.
///
/// Ignore takes the attacker result alone and rejects a composite key;
/// every other defense requires the defender's result.
pub fn melee_outcome(
    defense: DefenseType,
    attacker: SuccessLevel,
    defender: Option<SuccessLevel>,
) -> Result<OutcomeEntry, CombatError> {
    match defense {
        DefenseType::Ignore => match defender {
            None => Ok(ignore_entry(attacker)),
            Some(_) => Err(CombatError::CompositeKeyForIgnore),
        },
        _ => {
            let defender = defender.ok_or(CombatError::MissingDefenderResult(defense))?;
            let entry = match defense {
                DefenseType::Dodge => dodge_entry(attacker, defender),
                DefenseType::Block => block_entry(attacker, defender),
                DefenseType::Counterstrike => counterstrike_entry(attacker, defender),
                DefenseType::Ignore => unreachable!("handled above"),
            };
            Ok(entry)
        }
    }
}

fn missile_block_entry(atk: SuccessLevel, def: SuccessLevel) -> OutcomeEntry {
    match (atk, def) {
        (CF | MF, _) => OutcomeEntry::missed(),
        (MS, CF) => OutcomeEntry::atk(3),
        (MS, MF) => OutcomeEntry::atk(2),
        (MS, MS | CS) => OutcomeEntry::blocked(),
        (CS, CF) => OutcomeEntry::atk(4),
        (CS, MF) => OutcomeEntry::atk(3),
        (CS, MS) => OutcomeEntry::atk(1),
        (CS, CS) => OutcomeEntry::blocked(),
    }
}

fn missile_dodge_entry(atk: SuccessLevel, def: SuccessLevel) -> OutcomeEntry {
    match (atk, def) {
        (CF | MF, _) => OutcomeEntry::missed(),
        (MS, CF) => OutcomeEntry::atk(3),
        (MS, MF) => OutcomeEntry::atk(2),
        (MS, MS | CS) => OutcomeEntry::missed(),
        (CS, CF) => OutcomeEntry::atk(4),
        (CS, MF) => OutcomeEntry::atk(3),
        (CS, MS) => OutcomeEntry::atk(1),
        (CS, CS) => OutcomeEntry::missed(),
    }
}

fn missile_ignore_entry(atk: SuccessLevel) -> OutcomeEntry {
    match atk {
        CF | MF => OutcomeEntry::missed(),
        MS => OutcomeEntry::atk(2),
        CS => OutcomeEntry::atk(3),
    }
}

/// Missile outcome lookup. Counterstrike is not a missile defense.
pub fn missile_outcome(
    defense: DefenseType,
    attacker: SuccessLevel,
    defender: Option<SuccessLevel>,
) -> Result<OutcomeEntry, CombatError> {
    match defense {
        DefenseType::Ignore => match defender {
            None => Ok(missile_ignore_entry(attacker)),
            Some(_) => Err(CombatError::CompositeKeyForIgnore),
        },
        DefenseType::Counterstrike => Err(CombatError::NoTableEntry {
            defense,
            key: attacker.key().to_string(),
        }),
        DefenseType::Dodge | DefenseType::Block => {
            let defender = defender.ok_or(CombatError::MissingDefenderResult(defense))?;
            Ok(match defense {
                DefenseType::Dodge => missile_dodge_entry(attacker, defender),
                _ => missile_block_entry(attacker, defender),
            })
        }
    }
}
