//! The derived-attribute pipeline
//!
//! Two passes over an actor, run synchronously after every mutating
//! event. Phase A seeds the ephemeral working block from base data and
//! accumulates gear weight; active effects are then folded onto the
//! working values; Phase B turns the working values into the final
//! integer derived fields, skill/weapon mastery levels, and the
//! armor-location protection map. Every derived field is recomputed
//! from non-derived inputs, so re-running a pass is idempotent.

use std::collections::HashMap;

use harnmaster_domain::{
    Ability, ActiveEffect, Actor, ItemKind, ModifierTarget, ShockIndex, SkillCategory,
};

use crate::derived::modifiers::apply_modifiers;
use crate::derived::weight::compute_weights;
use crate::probability::success_probability_percent;

/// Skill tests below this target are hopeless; every mastery level is
/// floored here after penalties and effects.
const EML_FLOOR: i32 = 5;

/// Base move of 25 or more means the actor is on the five-foot scale,
/// where each penalty level costs five paces instead of one hex.
const HEX_SCALE_CUTOFF: f64 = 25.0;

/// Full recompute: base pass, effect application, derived pass.
pub fn recompute(actor: &mut Actor) {
    recompute_base_data(actor);
    apply_active_effects(actor);
    recompute_derived_data(actor);
}

/// Phase A: snapshot base data into the working block.
///
/// Container actors stop after their capacity percentage; the ability
/// pipeline never runs for them.
pub fn recompute_base_data(actor: &mut Actor) {
    tracing::debug!(actor = %actor.name, "base data pass");

    for ability in Ability::ALL {
        let base = actor.abilities.get(ability).base;
        actor.eph.set_ability(ability, f64::from(base));
    }

    actor.universal_penalty = 0;
    actor.physical_penalty = 0;
    actor.condition = 0;
    actor.dodge = 0;
    actor.initiative = 0;
    actor.shock_index = ShockIndex::default();
    actor.eph.stumble_target = 0;
    actor.eph.fumble_target = 0;

    let injury_levels: i32 = actor
        .items
        .iter()
        .filter_map(|item| match &item.kind {
            ItemKind::Injury(data) => Some(data.injury_level.max(0)),
            _ => None,
        })
        .sum();
    actor.total_injury_levels = injury_levels;
    actor.eph.total_injury_levels = f64::from(injury_levels);
    actor.eph.fatigue = f64::from(actor.fatigue.max(0));

    let totals = compute_weights(actor);
    actor.total_weight = totals.total;
    actor.eph.total_weight = totals.total;

    if actor.is_container() {
        actor.capacity.value = totals.total;
        let max = if actor.capacity.max <= 0.0 {
            1.0
        } else {
            actor.capacity.max
        };
        let pct = (((max - actor.capacity.value) / max) * 100.0).round() as i32;
        actor.capacity.pct = pct.clamp(0, 100);
        return;
    }

    // Endurance from the Condition skill when present, otherwise from
    // the big three. Floored at 1 to guard later divisions.
    let condition_ml = actor
        .skill_named("condition")
        .and_then(|item| item.as_skill())
        .map(|data| data.mastery_level);
    let endurance = match condition_ml {
        Some(ml) => {
            actor.condition = ml;
            (f64::from(ml) / 5.0).round()
        }
        None => {
            let sum = actor.eph.ability(Ability::Strength)
                + actor.eph.ability(Ability::Stamina)
                + actor.eph.ability(Ability::Will);
            (sum / 3.0).round()
        }
    }
    .max(1.0);
    actor.endurance = endurance as i32;
    actor.eph.endurance = endurance;

    let encumbrance = (actor.total_weight / endurance).floor();
    actor.encumbrance = encumbrance as i32;
    actor.eph.encumbrance = encumbrance;

    actor.eph.move_rate = actor.movement.base;
}

/// Fold enabled active effects onto the Phase-A working values.
///
/// Penalty, per-category, and weapon-level targets are consulted during
/// the derived pass instead, where their base values first exist.
pub fn apply_active_effects(actor: &mut Actor) {
    let effects: Vec<ActiveEffect> = actor.enabled_effects().cloned().collect();
    if effects.is_empty() {
        return;
    }

    for ability in Ability::ALL {
        let value = apply_modifiers(
            actor.eph.ability(ability),
            ModifierTarget::Ability(ability),
            &effects,
        );
        actor.eph.set_ability(ability, value);
    }
    actor.eph.fatigue = apply_modifiers(actor.eph.fatigue, ModifierTarget::Fatigue, &effects);
    actor.eph.move_rate = apply_modifiers(actor.eph.move_rate, ModifierTarget::Move, &effects);
    actor.eph.encumbrance = apply_modifiers(
        actor.eph.encumbrance,
        ModifierTarget::Encumbrance,
        &effects,
    );
    actor.eph.endurance =
        apply_modifiers(actor.eph.endurance, ModifierTarget::Endurance, &effects);
}

/// Phase B: the derived pass. The caller guarantees effects were
/// applied after Phase A; running this twice without intervening
/// changes yields identical output.
pub fn recompute_derived_data(actor: &mut Actor) {
    if actor.is_container() {
        return;
    }
    tracing::debug!(actor = %actor.name, "derived data pass");

    let effects: Vec<ActiveEffect> = actor.enabled_effects().cloned().collect();

    // Effects may have produced fractional working values; derived
    // fields are integers from here on.
    let endurance = actor.eph.endurance.round().max(1.0);
    actor.endurance = endurance as i32;
    actor.eph.endurance = endurance;
    let encumbrance = actor.eph.encumbrance.round().max(0.0);
    actor.encumbrance = encumbrance as i32;
    let fatigue = actor.eph.fatigue.round().max(0.0);
    actor.eph.fatigue = fatigue;
    let injury_levels = actor.eph.total_injury_levels.round().max(0.0);

    let universal = apply_modifiers(
        injury_levels + fatigue,
        ModifierTarget::UniversalPenalty,
        &effects,
    )
    .round()
    .max(0.0);
    actor.universal_penalty = universal as i32;

    let physical = apply_modifiers(
        universal + encumbrance,
        ModifierTarget::PhysicalPenalty,
        &effects,
    )
    .round()
    .max(0.0);
    actor.physical_penalty = physical as i32;

    actor.shock_index = ShockIndex {
        value: success_probability_percent(endurance, 3.5 * universal, universal),
        max: 100,
    };

    let base_move = actor.eph.move_rate.round();
    let move_penalty_scale = if base_move < HEX_SCALE_CUTOFF { 1.0 } else { 5.0 };
    actor.movement.effective = (base_move - physical * move_penalty_scale).max(0.0) as i32;

    for ability in Ability::ALL {
        let working = actor.eph.ability(ability).round();
        let penalty = if ability.is_penalty_exempt() {
            0.0
        } else if ability.takes_physical_penalty() {
            physical
        } else {
            universal
        };
        actor.abilities.get_mut(ability).effective = (working - penalty).max(0.0) as i32;
    }

    actor.eph.stumble_target = actor.abilities.agility.effective.max(0);
    actor.eph.fumble_target = actor.abilities.dexterity.effective.max(0);

    calc_skill_masteries(actor, &effects, universal as i32, physical as i32);
    calc_spell_masteries(actor);
    clamp_mastery_levels(actor);
    extract_named_skills(actor);
    calc_weapon_masteries(actor, &effects);
    generate_armor_location_map(actor);
}

/// Skill and psionic EMLs: mastery level less five per penalty level
/// (physical penalty for Combat/Physical, universal otherwise), then
/// the per-category effect modifier.
fn calc_skill_masteries(actor: &mut Actor, effects: &[ActiveEffect], universal: i32, physical: i32) {
    for item in actor.items.iter_mut() {
        match &mut item.kind {
            ItemKind::Skill(data) => {
                let penalty = match data.category {
                    Some(category) if category.takes_physical_penalty() => physical,
                    _ => universal,
                };
                let mut eml = f64::from(data.mastery_level - penalty * 5);
                if let Some(category) = data.category {
                    eml = apply_modifiers(
                        eml,
                        ModifierTarget::SkillCategoryEml(category),
                        effects,
                    );
                }
                data.effective_mastery_level = eml.round() as i32;
            }
            ItemKind::Psionic(data) => {
                let eml = apply_modifiers(
                    f64::from(data.mastery_level - universal * 5),
                    ModifierTarget::SkillCategoryEml(SkillCategory::Psionic),
                    effects,
                );
                data.effective_mastery_level = eml.round() as i32;
            }
            _ => {}
        }
    }
}

/// Spells and invocations derive their mastery from the governing
/// convocation/deity skill; unmatched ones reset to zero.
fn calc_spell_masteries(actor: &mut Actor) {
    let governing: HashMap<String, (i32, i32)> = actor
        .skills()
        .filter_map(|item| {
            item.as_skill()
                .map(|data| {
                    (
                        item.name.to_lowercase(),
                        (data.mastery_level, data.effective_mastery_level),
                    )
                })
        })
        .collect();

    for item in actor.items.iter_mut() {
        match &mut item.kind {
            ItemKind::Spell(data) => {
                match governing.get(&data.convocation.to_lowercase()) {
                    Some(&(ml, eml)) => {
                        data.effective_mastery_level = eml - data.level * 5;
                        data.skill_index = ml / 10;
                        data.mastery_level = ml;
                    }
                    None => {
                        data.effective_mastery_level = 0;
                        data.skill_index = 0;
                        data.mastery_level = 0;
                    }
                }
            }
            ItemKind::Invocation(data) => {
                match governing.get(&data.diety.to_lowercase()) {
                    Some(&(ml, eml)) => {
                        data.effective_mastery_level = eml - data.level * 5;
                        data.skill_index = ml / 10;
                        data.mastery_level = ml;
                    }
                    None => {
                        data.effective_mastery_level = 0;
                        data.skill_index = 0;
                        data.mastery_level = 0;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Floor every skill-like EML at 5.
fn clamp_mastery_levels(actor: &mut Actor) {
    for item in actor.items.iter_mut() {
        let eml = match &mut item.kind {
            ItemKind::Skill(data) => &mut data.effective_mastery_level,
            ItemKind::Spell(data) => &mut data.effective_mastery_level,
            ItemKind::Invocation(data) => &mut data.effective_mastery_level,
            ItemKind::Psionic(data) => &mut data.effective_mastery_level,
            _ => continue,
        };
        *eml = (*eml).max(EML_FLOOR);
    }
}

/// Pull the named utility skills into scalar actor fields.
fn extract_named_skills(actor: &mut Actor) {
    let eml_of = |actor: &Actor, name: &str| {
        actor
            .skill_named(name)
            .and_then(|item| item.as_skill())
            .map(|data| data.effective_mastery_level)
    };
    if let Some(eml) = eml_of(actor, "dodge") {
        actor.dodge = eml;
    }
    if let Some(eml) = eml_of(actor, "initiative") {
        actor.initiative = eml;
    }
    if let Some(eml) = eml_of(actor, "condition") {
        actor.condition = eml;
    }
}

/// Weapon attack/defense mastery from the associated combat skill.
///
/// Unset associations auto-bind to a combat skill with the weapon's own
/// name. "Throwing" counts as a combat skill regardless of category.
fn calc_weapon_masteries(actor: &mut Actor, effects: &[ActiveEffect]) {
    let combat_skills: HashMap<String, i32> = actor
        .skills()
        .filter_map(|item| {
            item.as_skill().and_then(|data| {
                let is_combat = data.category == Some(SkillCategory::Combat)
                    || item.name.eq_ignore_ascii_case("throwing");
                is_combat.then(|| (item.name.to_lowercase(), data.effective_mastery_level))
            })
        })
        .collect();

    for item in actor.items.iter_mut() {
        let name_key = item.name.to_lowercase();
        match &mut item.kind {
            ItemKind::WeaponGear(data) => {
                if data.assoc_skill.is_empty() && combat_skills.contains_key(&name_key) {
                    data.assoc_skill = item.name.clone();
                }
                let skill_eml = combat_skills
                    .get(&data.assoc_skill.to_lowercase())
                    .copied()
                    .unwrap_or(0);
                let aml = apply_modifiers(
                    f64::from(skill_eml + data.attack + data.attack_modifier),
                    ModifierTarget::MeleeAml,
                    effects,
                )
                .round() as i32;
                data.attack_mastery_level = aml.max(EML_FLOOR);
                let dml = apply_modifiers(
                    f64::from(skill_eml + data.defense),
                    ModifierTarget::MeleeDml,
                    effects,
                )
                .round() as i32;
                data.defense_mastery_level = dml.max(EML_FLOOR);
            }
            ItemKind::MissileGear(data) => {
                if data.assoc_skill.is_empty() && combat_skills.contains_key(&name_key) {
                    data.assoc_skill = item.name.clone();
                }
                let skill_eml = combat_skills
                    .get(&data.assoc_skill.to_lowercase())
                    .copied()
                    .unwrap_or(0);
                let aml = apply_modifiers(
                    f64::from(skill_eml + data.attack_modifier),
                    ModifierTarget::MissileAml,
                    effects,
                )
                .round() as i32;
                data.attack_mastery_level = aml.max(EML_FLOOR);
            }
            _ => {}
        }
    }
}

/// Rebuild every armorlocation's protection from the equipped armor.
///
/// With zero armorgear items the rebuild is skipped entirely so
/// manually entered values persist; with any armorgear present the
/// rebuild is total, zeroing locations nothing covers.
fn generate_armor_location_map(actor: &mut Actor) {
    let has_armor = actor
        .items
        .iter()
        .any(|item| matches!(item.kind, ItemKind::ArmorGear(_)));
    if !has_armor {
        tracing::debug!(actor = %actor.name, "no armorgear; keeping manual location values");
        return;
    }

    let mut coverage: HashMap<String, (harnmaster_domain::ProtectionValues, Vec<String>)> =
        HashMap::new();
    for item in &actor.items {
        if let ItemKind::ArmorGear(data) = &item.kind {
            if !(data.gear.is_carried && data.gear.is_equipped) {
                continue;
            }
            for location in &data.locations {
                let entry = coverage.entry(location.to_lowercase()).or_default();
                entry.0.add(&data.protection);
                if !data.material.is_empty() {
                    entry.1.push(data.material.clone());
                }
            }
        }
    }

    for item in actor.items.iter_mut() {
        let name_key = item.name.to_lowercase();
        if let ItemKind::ArmorLocation(data) = &mut item.kind {
            match coverage.get(&name_key) {
                Some((protection, layers)) => {
                    data.protection = *protection;
                    data.layers = layers.join(", ");
                }
                None => {
                    data.protection.clear();
                    data.layers.clear();
                }
            }
        }
    }
}
