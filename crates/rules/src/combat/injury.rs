//! Injury resolution
//!
//! Turns an impact landing on a hit location into an injury record:
//! armor soaks the impact, the location's severity table grades what
//! remains, and the optional rules decide the secondary effects
//! (bleeding, amputation, forced or rolled fumbles and stumbles).

use serde::{Deserialize, Serialize};

use harnmaster_domain::{
    Actor, Aim, ArmorLocationData, Aspect, InjuryData, InjuryRecording, Item, ItemId, ItemKind,
    RuleOptions, Severity,
};

use crate::error::CombatError;
use crate::random::RandomSource;

/// The outcome record of an injury calculation. `injury_level` 0 means
/// the armor held and nothing else is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryResult {
    pub location: String,
    pub aspect: Aspect,
    pub impact: i32,
    pub armor_value: i32,
    pub effective_impact: i32,
    pub severity: Severity,
    pub injury_level: u8,
    pub is_kill_shot: bool,
    pub is_amputate: bool,
    pub is_bleeder: bool,
    pub is_fumble: bool,
    pub is_fumble_roll: bool,
    pub is_stumble: bool,
    pub is_stumble_roll: bool,
}

impl InjuryResult {
    fn clean(location: String, aspect: Aspect, impact: i32, armor_value: i32) -> Self {
        Self {
            location,
            aspect,
            impact,
            armor_value,
            effective_impact: 0,
            severity: Severity::NA,
            injury_level: 0,
            is_kill_shot: false,
            is_amputate: false,
            is_bleeder: false,
            is_fumble: false,
            is_fumble_roll: false,
            is_stumble: false,
            is_stumble_roll: false,
        }
    }
}

/// Compute the injury for an impact on a location.
///
/// `location` of `None` selects a weighted-random location over the
/// actor's armorlocation items using the aim band's probability
/// weights. An actor without any armorlocation items cannot be injured
/// and the call reports `NoArmorLocations`.
pub fn calc_injury(
    actor: &Actor,
    location: Option<&str>,
    impact: i32,
    aspect: Aspect,
    aim: Aim,
    options: &RuleOptions,
    source: &mut dyn RandomSource,
) -> Result<InjuryResult, CombatError> {
    let locations: Vec<(&Item, &ArmorLocationData)> = actor
        .items
        .iter()
        .filter_map(|item| item.as_armor_location().map(|data| (item, data)))
        .collect();
    if locations.is_empty() {
        return Err(CombatError::NoArmorLocations);
    }

    let (item, data) = match location {
        Some(name) => *locations
            .iter()
            .find(|(item, _)| item.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CombatError::UnknownLocation(name.to_string()))?,
        None => choose_weighted(&locations, aim, source),
    };

    let armor_value = data.protection.for_aspect(aspect);
    let effective_impact = (impact - armor_value).max(0);
    let severity = data.severity_table.for_impact(effective_impact);
    let injury_level = severity.injury_level();
    tracing::debug!(
        location = %item.name,
        impact,
        armor_value,
        effective_impact,
        severity = %severity,
        "injury calculated"
    );

    let mut result = InjuryResult::clean(item.name.clone(), aspect, impact, armor_value);
    result.effective_impact = effective_impact;
    result.severity = severity;
    result.injury_level = injury_level;
    result.is_kill_shot = severity.is_kill();
    if injury_level == 0 {
        return Ok(result);
    }

    result.is_amputate = severity.can_amputate()
        && data.is_amputate
        && options.amputation
        && aspect == Aspect::Edged;
    result.is_bleeder = options.bloodloss && injury_level >= 4 && aspect != Aspect::Fire;

    // With the limb-injury rule on, a heavy wound to a fumble/stumble
    // location forces the effect; otherwise (or for lighter wounds) a
    // confirmation roll against DEX/AGL is required.
    if data.is_fumble {
        if injury_level >= 4 && options.limb_injuries {
            result.is_fumble = true;
        } else if injury_level >= 2 {
            result.is_fumble_roll = true;
        }
    }
    if data.is_stumble {
        if injury_level >= 4 && options.limb_injuries {
            result.is_stumble = true;
        } else if injury_level >= 2 {
            result.is_stumble_roll = true;
        }
    }

    Ok(result)
}

/// Weighted pick over the aim band. All-zero weights fall back to the
/// first iterated location; zero-weight locations are never chosen
/// while any weight exists.
fn choose_weighted<'a>(
    locations: &[(&'a Item, &'a ArmorLocationData)],
    aim: Aim,
    source: &mut dyn RandomSource,
) -> (&'a Item, &'a ArmorLocationData) {
    let total: u32 = locations
        .iter()
        .map(|(_, data)| data.prob_weight.for_aim(aim))
        .sum();
    if total == 0 {
        return locations[0];
    }
    let mut pick = source.roll(total);
    for &(item, data) in locations {
        let weight = data.prob_weight.for_aim(aim);
        if weight >= pick {
            return (item, data);
        }
        pick -= weight;
    }
    locations[locations.len() - 1]
}

/// Record an injury result on the actor as an injury item. Returns the
/// new item's id, or `None` when nothing was recorded (level 0 or
/// recording disabled). The caller triggers a recompute afterwards.
pub fn apply_injury(
    actor: &mut Actor,
    result: &InjuryResult,
    options: &RuleOptions,
) -> Option<ItemId> {
    if result.injury_level == 0 || options.injury_recording == InjuryRecording::Never {
        return None;
    }
    let mut data = InjuryData::new(i32::from(result.injury_level), result.severity.to_string());
    data.aspect = Some(result.aspect);
    let item = Item::new(result.location.clone(), ItemKind::Injury(data));
    let id = item.id;
    tracing::debug!(actor = %actor.name, location = %result.location, severity = %result.severity, "injury recorded");
    actor.items.push(item);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSource;
    use harnmaster_domain::{
        standard_hit_locations, Actor, ProbWeights, ProtectionValues, SeverityTable,
    };

    fn location(name: &str, protection: ProtectionValues) -> Item {
        Item::new(
            name,
            ItemKind::ArmorLocation(ArmorLocationData {
                protection,
                prob_weight: ProbWeights::new(100, 100, 100),
                severity_table: SeverityTable::default(),
                ..ArmorLocationData::default()
            }),
        )
    }

    fn target_with_location(name: &str, protection: ProtectionValues) -> Actor {
        Actor::character("Target").with_item(location(name, protection))
    }

    #[test]
    fn armor_soaks_impact_before_severity() {
        let actor = target_with_location("Thorax", ProtectionValues::new(5, 5, 5, 5));
        let mut source = FixedSource::new([1]);
        let result = calc_injury(
            &actor,
            Some("Thorax"),
            12,
            Aspect::Blunt,
            Aim::Mid,
            &RuleOptions::default(),
            &mut source,
        )
        .unwrap();
        assert_eq!(result.armor_value, 5);
        assert_eq!(result.effective_impact, 7);
        // 5 <= 7 < 9: the ei5 bucket
        assert_eq!(result.severity.to_string(), "S2");
        assert_eq!(result.injury_level, 2);
    }

    #[test]
    fn fully_soaked_impact_is_no_injury() {
        let actor = target_with_location("Thorax", ProtectionValues::new(12, 12, 12, 12));
        let mut source = FixedSource::new([1]);
        let result = calc_injury(
            &actor,
            Some("Thorax"),
            10,
            Aspect::Edged,
            Aim::Mid,
            &RuleOptions::default(),
            &mut source,
        )
        .unwrap();
        assert_eq!(result.injury_level, 0);
        assert_eq!(result.severity, Severity::NA);
        assert!(!result.is_bleeder && !result.is_fumble_roll && !result.is_stumble_roll);
    }

    #[test]
    fn no_locations_is_an_error() {
        let actor = Actor::character("Ghost");
        let mut source = FixedSource::new([1]);
        let result = calc_injury(
            &actor,
            None,
            10,
            Aspect::Blunt,
            Aim::Mid,
            &RuleOptions::default(),
            &mut source,
        );
        assert_eq!(result.unwrap_err(), CombatError::NoArmorLocations);
    }

    #[test]
    fn unknown_named_location_is_an_error() {
        let actor = target_with_location("Thorax", ProtectionValues::default());
        let mut source = FixedSource::new([1]);
        let result = calc_injury(
            &actor,
            Some("Tail"),
            10,
            Aspect::Blunt,
            Aim::Mid,
            &RuleOptions::default(),
            &mut source,
        );
        assert!(matches!(result, Err(CombatError::UnknownLocation(_))));
    }

    #[test]
    fn random_location_respects_aim_weights() {
        let mut actor = Actor::character("Target");
        for item in standard_hit_locations() {
            actor.items.push(item);
        }
        // Low aim: skull/face/neck all have weight 0 and must never be hit
        let mut source = RngSourceForTest::new();
        for _ in 0..200 {
            let result = calc_injury(
                &actor,
                None,
                10,
                Aspect::Blunt,
                Aim::Low,
                &RuleOptions::default(),
                &mut source,
            )
            .unwrap();
            assert!(
                !matches!(result.location.as_str(), "Skull" | "Face" | "Neck"),
                "low aim hit {}",
                result.location
            );
        }
    }

    // Small deterministic LCG so the sweep covers many draw values
    struct RngSourceForTest {
        state: u64,
    }

    impl RngSourceForTest {
        fn new() -> Self {
            Self { state: 0x2545F491 }
        }
    }

    impl RandomSource for RngSourceForTest {
        fn roll(&mut self, sides: u32) -> u32 {
            self.state = self
                .state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((self.state >> 33) % u64::from(sides.max(1))) as u32 + 1
        }
    }

    #[test]
    fn all_zero_weights_pick_first_location() {
        let mut unweighted = location("Thorax", ProtectionValues::default());
        if let ItemKind::ArmorLocation(data) = &mut unweighted.kind {
            data.prob_weight = ProbWeights::default();
        }
        let mut second = location("Abdomen", ProtectionValues::default());
        if let ItemKind::ArmorLocation(data) = &mut second.kind {
            data.prob_weight = ProbWeights::default();
        }
        let actor = Actor::character("Target")
            .with_item(unweighted)
            .with_item(second);
        let mut source = FixedSource::new([5]);
        let result = calc_injury(
            &actor,
            None,
            6,
            Aspect::Blunt,
            Aim::Mid,
            &RuleOptions::default(),
            &mut source,
        )
        .unwrap();
        assert_eq!(result.location, "Thorax");
    }

    #[test]
    fn kill_shot_flag_from_k_codes() {
        let mut actor = Actor::character("Target");
        for item in standard_hit_locations() {
            actor.items.push(item);
        }
        let mut source = FixedSource::new([1]);
        let result = calc_injury(
            &actor,
            Some("Skull"),
            20,
            Aspect::Blunt,
            Aim::High,
            &RuleOptions::default(),
            &mut source,
        )
        .unwrap();
        assert_eq!(result.severity.to_string(), "K5");
        assert!(result.is_kill_shot);
    }

    #[test]
    fn bleeder_requires_rule_level_and_non_fire() {
        let actor = target_with_location("Thorax", ProtectionValues::default());
        let mut source = FixedSource::new([1]);
        let bloodloss = RuleOptions::default().with_bloodloss(true);

        let heavy = calc_injury(&actor, Some("Thorax"), 14, Aspect::Edged, Aim::Mid, &bloodloss, &mut source).unwrap();
        assert_eq!(heavy.injury_level, 4);
        assert!(heavy.is_bleeder);

        let burned = calc_injury(&actor, Some("Thorax"), 14, Aspect::Fire, Aim::Mid, &bloodloss, &mut source).unwrap();
        assert!(!burned.is_bleeder);

        let light = calc_injury(&actor, Some("Thorax"), 6, Aspect::Edged, Aim::Mid, &bloodloss, &mut source).unwrap();
        assert!(!light.is_bleeder);

        let rule_off = calc_injury(&actor, Some("Thorax"), 14, Aspect::Edged, Aim::Mid, &RuleOptions::default(), &mut source).unwrap();
        assert!(!rule_off.is_bleeder);
    }

    #[test]
    fn amputation_needs_rule_location_aspect_and_severity() {
        let mut actor = Actor::character("Target");
        for item in standard_hit_locations() {
            actor.items.push(item);
        }
        let mut source = FixedSource::new([1]);
        let options = RuleOptions::default().with_amputation(true);

        // Forearm G4+ edged with the rule on
        let severed = calc_injury(&actor, Some("Forearm"), 13, Aspect::Edged, Aim::Mid, &options, &mut source).unwrap();
        assert!(severed.severity.can_amputate());
        assert!(severed.is_amputate);

        // Blunt cannot sever
        let crushed = calc_injury(&actor, Some("Forearm"), 13, Aspect::Blunt, Aim::Mid, &options, &mut source).unwrap();
        assert!(!crushed.is_amputate);

        // Rule off
        let default_rules = calc_injury(&actor, Some("Forearm"), 13, Aspect::Edged, Aim::Mid, &RuleOptions::default(), &mut source).unwrap();
        assert!(!default_rules.is_amputate);

        // Thorax cannot be severed no matter the wound
        let thorax = calc_injury(&actor, Some("Thorax"), 13, Aspect::Edged, Aim::Mid, &options, &mut source).unwrap();
        assert!(!thorax.is_amputate);
    }

    #[test]
    fn fumble_forced_or_rolled_by_level_and_rule() {
        let mut actor = Actor::character("Target");
        for item in standard_hit_locations() {
            actor.items.push(item);
        }
        let mut source = FixedSource::new([1]);
        let limb_rule = RuleOptions::default().with_limb_injuries(true);

        // Level 4 on a fumble location with the rule on: forced
        let forced = calc_injury(&actor, Some("Hand"), 13, Aspect::Blunt, Aim::Mid, &limb_rule, &mut source).unwrap();
        assert!(forced.is_fumble);
        assert!(!forced.is_fumble_roll);

        // Same wound without the rule: roll required
        let rolled = calc_injury(&actor, Some("Hand"), 13, Aspect::Blunt, Aim::Mid, &RuleOptions::default(), &mut source).unwrap();
        assert!(!rolled.is_fumble);
        assert!(rolled.is_fumble_roll);

        // Level 2: roll required either way
        let light = calc_injury(&actor, Some("Hand"), 6, Aspect::Blunt, Aim::Mid, &limb_rule, &mut source).unwrap();
        assert!(!light.is_fumble);
        assert!(light.is_fumble_roll);

        // Level 1: nothing
        let graze = calc_injury(&actor, Some("Hand"), 2, Aspect::Blunt, Aim::Mid, &limb_rule, &mut source).unwrap();
        assert!(!graze.is_fumble && !graze.is_fumble_roll);

        // Leg wound drives stumble, not fumble
        let leg = calc_injury(&actor, Some("Knee"), 13, Aspect::Blunt, Aim::Low, &limb_rule, &mut source).unwrap();
        assert!(leg.is_stumble);
        assert!(!leg.is_fumble && !leg.is_fumble_roll);
    }

    #[test]
    fn apply_injury_records_an_item() {
        let mut actor = target_with_location("Thorax", ProtectionValues::default());
        let mut source = FixedSource::new([1]);
        let result = calc_injury(
            &actor,
            Some("Thorax"),
            10,
            Aspect::Edged,
            Aim::Mid,
            &RuleOptions::default(),
            &mut source,
        )
        .unwrap();
        let id = apply_injury(&mut actor, &result, &RuleOptions::default());
        assert!(id.is_some());
        let injury = actor
            .items
            .iter()
            .find_map(|item| match &item.kind {
                ItemKind::Injury(data) => Some((item.name.clone(), data.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(injury.0, "Thorax");
        assert_eq!(injury.1.injury_level, 3); // 9 <= 10 < 13
        assert_eq!(injury.1.severity, "S3");
    }

    #[test]
    fn apply_injury_skips_clean_results_and_never_mode() {
        let mut actor = target_with_location("Thorax", ProtectionValues::new(20, 20, 20, 20));
        let mut source = FixedSource::new([1]);
        let clean = calc_injury(
            &actor,
            Some("Thorax"),
            10,
            Aspect::Blunt,
            Aim::Mid,
            &RuleOptions::default(),
            &mut source,
        )
        .unwrap();
        assert!(apply_injury(&mut actor, &clean, &RuleOptions::default()).is_none());

        let mut wounded = target_with_location("Thorax", ProtectionValues::default());
        let result = calc_injury(
            &wounded,
            Some("Thorax"),
            10,
            Aspect::Blunt,
            Aim::Mid,
            &RuleOptions::default(),
            &mut source,
        )
        .unwrap();
        let never = RuleOptions::default().with_injury_recording(InjuryRecording::Never);
        assert!(apply_injury(&mut wounded, &result, &never).is_none());
    }
}
