//! Attack/defense exchange resolution
//!
//! Takes the already-rolled attacker and defender results, consults the
//! outcome tables, and produces the impact dice pools plus a chat-ready
//! description. Pure given its inputs; the caller rolls the dice.

use serde::{Deserialize, Serialize};

use harnmaster_domain::{DefenseType, ImpactDice, SuccessLevel};

use crate::combat::tables::{melee_outcome, missile_outcome, OutcomeEntry};
use crate::error::CombatError;

/// The resolved outcome of one exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResult {
    pub outcome: OutcomeEntry,
    pub atk_impact: ImpactDice,
    pub def_impact: ImpactDice,
    pub description: String,
    /// Defender's half of a counterstrike, described separately
    pub counterstrike_description: Option<String>,
}

/// Resolve a melee attack against the defender's chosen defense.
///
/// `defender` must be `None` for ignore and `Some` otherwise; a
/// mismatch is a caller logic error reported as a `CombatError`.
pub fn resolve_melee_exchange(
    attacker: SuccessLevel,
    defender: Option<SuccessLevel>,
    defense: DefenseType,
    atk_impact_modifier: i32,
    def_impact_modifier: i32,
) -> Result<ExchangeResult, CombatError> {
    let outcome = melee_outcome(defense, attacker, defender)?;
    tracing::debug!(
        ?defense,
        atk = attacker.key(),
        def = defender.map(|d| d.key()).unwrap_or("-"),
        "melee exchange resolved"
    );
    let atk_impact = ImpactDice::new(outcome.atk_dice, atk_impact_modifier);
    let def_impact = ImpactDice::new(outcome.def_dice, def_impact_modifier);
    let description = describe(&outcome, atk_impact, def_impact);
    let counterstrike_description = (defense == DefenseType::Counterstrike)
        .then(|| describe_counterstrike(&outcome, def_impact));

    Ok(ExchangeResult {
        outcome,
        atk_impact,
        def_impact,
        description,
        counterstrike_description,
    })
}

/// Resolve a missile attack. Missiles produce no defender impact.
pub fn resolve_missile_exchange(
    attacker: SuccessLevel,
    defender: Option<SuccessLevel>,
    defense: DefenseType,
    atk_impact_modifier: i32,
) -> Result<ExchangeResult, CombatError> {
    let outcome = missile_outcome(defense, attacker, defender)?;
    tracing::debug!(
        ?defense,
        atk = attacker.key(),
        def = defender.map(|d| d.key()).unwrap_or("-"),
        "missile exchange resolved"
    );
    let atk_impact = ImpactDice::new(outcome.atk_dice, atk_impact_modifier);
    let def_impact = ImpactDice::none();
    let description = describe(&outcome, atk_impact, def_impact);

    Ok(ExchangeResult {
        outcome,
        atk_impact,
        def_impact,
        description,
        counterstrike_description: None,
    })
}

/// Exactly one description branch fires, in fixed precedence order.
fn describe(outcome: &OutcomeEntry, atk_impact: ImpactDice, def_impact: ImpactDice) -> String {
    let atk_hit = outcome.atk_dice > 0;
    let def_hit = outcome.def_dice > 0;
    if atk_hit && def_hit {
        format!(
            "Both combatants strike: attacker {} impact, defender {} impact",
            atk_impact, def_impact
        )
    } else if atk_hit {
        format!("Attacker strikes for {} impact", atk_impact)
    } else if def_hit {
        format!("Defender strikes for {} impact", def_impact)
    } else if outcome.atk_fumble && outcome.def_fumble {
        "Both combatants fumble".to_string()
    } else if outcome.atk_fumble {
        "Attacker fumbles".to_string()
    } else if outcome.def_fumble {
        "Defender fumbles".to_string()
    } else if outcome.atk_stumble && outcome.def_stumble {
        "Both combatants stumble".to_string()
    } else if outcome.atk_stumble {
        "Attacker stumbles".to_string()
    } else if outcome.def_stumble {
        "Defender stumbles".to_string()
    } else if outcome.block {
        "Attack blocked".to_string()
    } else if outcome.miss {
        "Attack misses".to_string()
    } else if outcome.dta {
        "Defender gains a tactical advantage".to_string()
    } else {
        "No result".to_string()
    }
}

fn describe_counterstrike(outcome: &OutcomeEntry, def_impact: ImpactDice) -> String {
    if outcome.def_dice > 0 {
        format!("Counterstrike lands for {} impact", def_impact)
    } else if outcome.def_fumble {
        "Defender fumbles".to_string()
    } else {
        "Counterstrike misses".to_string()
    }
}
