//! Full gameplay-loop tests.
//!
//! These drive the engine the way the orchestration layer does: build
//! actors, recompute, roll an exchange with a deterministic source,
//! derive the injury, record it, recompute again, and check the derived
//! state along the whole path.

use harnmaster_domain::{
    standard_hit_locations, Ability, ActiveEffect, Actor, Aim, Aspect, DefenseType,
    EffectDuration, EffectMode, GameClock, GearCommon, Item, ItemKind, ModifierTarget,
    RuleOptions, SkillCategory, SkillData, WeaponGearData,
};

use crate::combat::{apply_injury, calc_injury, resolve_melee_exchange};
use crate::derived::{expire_effects, recompute};
use crate::dice::{roll_impact, roll_test, TestRollSpec};
use crate::random::FixedSource;

fn fighter(name: &str) -> Actor {
    let mut actor = Actor::character(name)
        .with_ability(Ability::Strength, 13)
        .with_ability(Ability::Stamina, 12)
        .with_ability(Ability::Will, 11)
        .with_ability(Ability::Dexterity, 12)
        .with_ability(Ability::Agility, 11)
        .with_ability(Ability::Intelligence, 10)
        .with_ability(Ability::Aura, 9)
        .with_ability(Ability::Eyesight, 12)
        .with_ability(Ability::Hearing, 11)
        .with_ability(Ability::Smell, 10)
        .with_ability(Ability::Voice, 11)
        .with_ability(Ability::Comeliness, 10)
        .with_ability(Ability::Morality, 10)
        .with_base_move(12.0)
        .with_item(Item::new(
            "Sword",
            ItemKind::Skill(SkillData::new(SkillCategory::Combat, 60)),
        ))
        .with_item(Item::new(
            "Broadsword",
            ItemKind::WeaponGear(WeaponGearData {
                gear: GearCommon::new(3.0, 1).equipped(),
                assoc_skill: "Sword".to_string(),
                attack: 5,
                defense: 5,
                ..WeaponGearData::default()
            }),
        ));
    for item in standard_hit_locations() {
        actor.items.push(item);
    }
    actor
}

#[test]
fn attack_injure_recompute_loop() {
    let options = RuleOptions::default();
    let mut attacker = fighter("Erane");
    let mut defender = fighter("Garth");
    recompute(&mut attacker);
    recompute(&mut defender);

    let aml = attacker
        .items
        .iter()
        .find_map(|item| match &item.kind {
            ItemKind::WeaponGear(data) => Some(data.attack_mastery_level),
            _ => None,
        })
        .unwrap();
    assert_eq!(aml, 65);

    // Attacker rolls 45 (success), defender dodge (EML floor) rolls 81 (failure)
    let mut dice = FixedSource::new([45, 81]);
    let atk_roll = roll_test(&TestRollSpec::d100(aml, 0), &mut dice);
    assert!(atk_roll.is_success && atk_roll.is_critical);
    let def_roll = roll_test(&TestRollSpec::d100(defender.dodge.max(5), 0), &mut dice);
    assert!(!def_roll.is_success);

    let exchange = resolve_melee_exchange(
        atk_roll.success_level,
        Some(def_roll.success_level),
        DefenseType::Dodge,
        4,
        0,
    )
    .unwrap();
    assert_eq!(exchange.outcome.atk_dice, 2);

    // Impact 4+4+4 = 12 with the +4 weapon aspect modifier
    let mut impact_dice = FixedSource::new([4, 4]);
    let impact = roll_impact(exchange.atk_impact, &mut impact_dice).unwrap();
    assert_eq!(impact, 12);

    let mut location_pick = FixedSource::new([1]);
    let injury = calc_injury(
        &defender,
        Some("Thorax"),
        impact,
        Aspect::Edged,
        Aim::Mid,
        &options,
        &mut location_pick,
    )
    .unwrap();
    assert_eq!(injury.effective_impact, 12); // no armor equipped
    assert_eq!(injury.injury_level, 3);

    apply_injury(&mut defender, &injury, &options).unwrap();
    recompute(&mut defender);

    assert_eq!(defender.total_injury_levels, 3);
    assert_eq!(defender.universal_penalty, 3);
    // Skill EML dropped by five per penalty level
    let sword_eml = defender
        .skill_named("sword")
        .and_then(|item| item.as_skill())
        .map(|data| data.effective_mastery_level)
        .unwrap();
    assert_eq!(sword_eml, 60 - 3 * 5);
    // Shock index degrades but stays a percentage
    assert!(defender.shock_index.value < 100);
    assert!(defender.shock_index.value >= 0);
}

#[test]
fn missed_attack_rolls_no_impact() {
    let exchange = resolve_melee_exchange(
        harnmaster_domain::SuccessLevel::MarginalFailure,
        Some(harnmaster_domain::SuccessLevel::MarginalSuccess),
        DefenseType::Dodge,
        3,
        0,
    )
    .unwrap();
    let mut dice = FixedSource::new([6]);
    assert_eq!(roll_impact(exchange.atk_impact, &mut dice), None);
}

#[test]
fn timed_effect_expires_and_recompute_reflects_it() {
    let mut actor = fighter("Erane").with_effect(
        ActiveEffect::new(
            "Battle fury",
            ModifierTarget::SkillCategoryEml(SkillCategory::Combat),
            EffectMode::Add,
            10.0,
        )
        .with_duration(EffectDuration::for_rounds(1, 3)),
    );
    recompute(&mut actor);
    let eml = |actor: &Actor| {
        actor
            .skill_named("sword")
            .and_then(|item| item.as_skill())
            .map(|data| data.effective_mastery_level)
            .unwrap()
    };
    assert_eq!(eml(&actor), 70);

    // Round 4: the fury has run its course
    assert_eq!(expire_effects(&mut actor, &GameClock::new(0, 4)), 1);
    recompute(&mut actor);
    assert_eq!(eml(&actor), 60);
}

#[test]
fn armored_defender_soaks_the_blow() {
    use harnmaster_domain::{ArmorGearData, ProtectionValues};

    let mut defender = fighter("Garth").with_item(Item::new(
        "Hauberk",
        ItemKind::ArmorGear(ArmorGearData {
            gear: GearCommon::new(12.0, 1).equipped(),
            locations: vec!["Thorax".to_string(), "Abdomen".to_string()],
            material: "Mail".to_string(),
            protection: ProtectionValues::new(3, 8, 5, 2),
        }),
    ));
    recompute(&mut defender);

    let mut source = FixedSource::new([1]);
    let injury = calc_injury(
        &defender,
        Some("Thorax"),
        10,
        Aspect::Edged,
        Aim::Mid,
        &RuleOptions::default(),
        &mut source,
    )
    .unwrap();
    assert_eq!(injury.armor_value, 8);
    assert_eq!(injury.effective_impact, 2);
    assert_eq!(injury.injury_level, 1);
}
