//! Item entity - everything an actor owns, as a closed sum type
//!
//! The host's runtime type dispatch ("skill", "weapongear", ...) is
//! replaced by `ItemKind`, so every consumer matches exhaustively. Gear
//! variants share `GearCommon` for weight/carry/equip/container state.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::value_objects::{Aim, Aspect, SeverityTable, SkillCategory};

/// Where a gear item is stowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerRef {
    /// Carried directly (belt, back, hand)
    #[default]
    OnPerson,
    /// Inside a containergear item
    In(ItemId),
}

impl ContainerRef {
    pub fn is_on_person(&self) -> bool {
        matches!(self, ContainerRef::OnPerson)
    }
}

/// Fields shared by every gear item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearCommon {
    pub weight: f64,
    pub quantity: u32,
    pub is_carried: bool,
    pub is_equipped: bool,
    pub container: ContainerRef,
}

impl Default for GearCommon {
    fn default() -> Self {
        Self {
            weight: 0.0,
            quantity: 1,
            is_carried: true,
            is_equipped: false,
            container: ContainerRef::OnPerson,
        }
    }
}

impl GearCommon {
    pub fn new(weight: f64, quantity: u32) -> Self {
        Self {
            weight,
            quantity,
            ..Self::default()
        }
    }

    pub fn equipped(mut self) -> Self {
        self.is_equipped = true;
        self
    }

    pub fn not_carried(mut self) -> Self {
        self.is_carried = false;
        self
    }

    pub fn in_container(mut self, container: ItemId) -> Self {
        self.container = ContainerRef::In(container);
        self
    }
}

/// Per-aspect protection values of a hit location or a piece of armor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionValues {
    pub blunt: i32,
    pub edged: i32,
    pub piercing: i32,
    pub fire: i32,
    pub squeeze: i32,
    pub tear: i32,
}

impl ProtectionValues {
    pub fn new(blunt: i32, edged: i32, piercing: i32, fire: i32) -> Self {
        Self {
            blunt,
            edged,
            piercing,
            fire,
            squeeze: 0,
            tear: 0,
        }
    }

    /// Protection value consulted for an attack aspect. Aspects other
    /// than blunt/edged/piercing read the fire bucket (preserved source
    /// behavior; revisit if new aspects are added).
    pub fn for_aspect(&self, aspect: Aspect) -> i32 {
        match aspect {
            Aspect::Blunt => self.blunt,
            Aspect::Edged => self.edged,
            Aspect::Piercing => self.piercing,
            Aspect::Fire => self.fire,
        }
    }

    pub fn add(&mut self, other: &ProtectionValues) {
        self.blunt += other.blunt;
        self.edged += other.edged;
        self.piercing += other.piercing;
        self.fire += other.fire;
        self.squeeze += other.squeeze;
        self.tear += other.tear;
    }

    pub fn clear(&mut self) {
        *self = ProtectionValues::default();
    }
}

/// Hit-location selection weights per aim band. A weight of zero
/// excludes the location whenever any other location has weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbWeights {
    pub high: u32,
    pub mid: u32,
    pub low: u32,
}

impl ProbWeights {
    pub fn new(high: u32, mid: u32, low: u32) -> Self {
        Self { high, mid, low }
    }

    pub fn for_aim(&self, aim: Aim) -> u32 {
        match aim {
            Aim::High => self.high,
            Aim::Mid => self.mid,
            Aim::Low => self.low,
        }
    }
}

/// Skill item data. `effective_mastery_level` is derived every pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillData {
    pub category: Option<SkillCategory>,
    pub mastery_level: i32,
    pub effective_mastery_level: i32,
}

impl SkillData {
    pub fn new(category: SkillCategory, mastery_level: i32) -> Self {
        Self {
            category: Some(category),
            mastery_level,
            effective_mastery_level: mastery_level,
        }
    }
}

/// Spell item data; governed by the convocation skill of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellData {
    pub convocation: String,
    pub level: i32,
    pub mastery_level: i32,
    pub effective_mastery_level: i32,
    pub skill_index: i32,
}

impl SpellData {
    pub fn new(convocation: impl Into<String>, level: i32) -> Self {
        Self {
            convocation: convocation.into(),
            level,
            ..Self::default()
        }
    }
}

/// Invocation item data; governed by the ritual skill of the deity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationData {
    pub diety: String,
    pub level: i32,
    pub mastery_level: i32,
    pub effective_mastery_level: i32,
    pub skill_index: i32,
}

impl InvocationData {
    pub fn new(diety: impl Into<String>, level: i32) -> Self {
        Self {
            diety: diety.into(),
            level,
            ..Self::default()
        }
    }
}

/// Psionic talent data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsionicData {
    pub mastery_level: i32,
    pub effective_mastery_level: i32,
    /// Fatigue cost to manifest
    pub fatigue: i32,
}

impl PsionicData {
    pub fn new(mastery_level: i32) -> Self {
        Self {
            mastery_level,
            effective_mastery_level: mastery_level,
            fatigue: 0,
        }
    }
}

/// Character trait (physique, psyche, etc.); no pipeline role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitData {
    pub abbrev: String,
}

/// An injury currently afflicting the actor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryData {
    pub injury_level: i32,
    /// Severity code text as shown on the sheet ("S2", "K5", ...)
    pub severity: String,
    pub healing_rate: i32,
    pub aspect: Option<Aspect>,
}

impl InjuryData {
    pub fn new(injury_level: i32, severity: impl Into<String>) -> Self {
        Self {
            injury_level,
            severity: severity.into(),
            healing_rate: 0,
            aspect: None,
        }
    }
}

/// A hit location on the actor's body. Protection values are derived
/// from covering armor whenever any armorgear exists on the actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorLocationData {
    pub protection: ProtectionValues,
    /// Comma-joined material names of the covering layers
    pub layers: String,
    pub prob_weight: ProbWeights,
    pub is_stumble: bool,
    pub is_fumble: bool,
    pub is_amputate: bool,
    pub severity_table: SeverityTable,
}

impl Default for ArmorLocationData {
    fn default() -> Self {
        Self {
            protection: ProtectionValues::default(),
            layers: String::new(),
            prob_weight: ProbWeights::default(),
            is_stumble: false,
            is_fumble: false,
            is_amputate: false,
            severity_table: SeverityTable::default(),
        }
    }
}

/// Melee weapon data. AML/DML are derived every pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponGearData {
    pub gear: GearCommon,
    /// Governing combat skill; auto-bound from the weapon name when unset
    pub assoc_skill: String,
    /// Weapon attack bonus
    pub attack: i32,
    /// Weapon defense bonus
    pub defense: i32,
    /// Situational attack modifier
    pub attack_modifier: i32,
    pub attack_mastery_level: i32,
    pub defense_mastery_level: i32,
}

/// Missile weapon data. Missiles carry no defense value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissileGearData {
    pub gear: GearCommon,
    pub assoc_skill: String,
    pub attack_modifier: i32,
    pub attack_mastery_level: i32,
}

/// Worn armor: contributes protection to each covered location while
/// carried and equipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorGearData {
    pub gear: GearCommon,
    pub locations: Vec<String>,
    pub material: String,
    pub protection: ProtectionValues,
}

/// Miscellaneous gear with no combat role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscGearData {
    pub gear: GearCommon,
}

/// A container (pouch, chest, backpack). `capacity_value` is derived by
/// the weight accumulator from its contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerGearData {
    pub gear: GearCommon,
    pub capacity_max: f64,
    pub capacity_value: f64,
}

/// The closed set of item types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Skill(SkillData),
    Spell(SpellData),
    Invocation(InvocationData),
    Psionic(PsionicData),
    Trait(TraitData),
    Injury(InjuryData),
    ArmorLocation(ArmorLocationData),
    WeaponGear(WeaponGearData),
    MissileGear(MissileGearData),
    ArmorGear(ArmorGearData),
    MiscGear(MiscGearData),
    ContainerGear(ContainerGearData),
}

impl ItemKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ItemKind::Skill(_) => "skill",
            ItemKind::Spell(_) => "spell",
            ItemKind::Invocation(_) => "invocation",
            ItemKind::Psionic(_) => "psionic",
            ItemKind::Trait(_) => "trait",
            ItemKind::Injury(_) => "injury",
            ItemKind::ArmorLocation(_) => "armorlocation",
            ItemKind::WeaponGear(_) => "weapongear",
            ItemKind::MissileGear(_) => "missilegear",
            ItemKind::ArmorGear(_) => "armorgear",
            ItemKind::MiscGear(_) => "miscgear",
            ItemKind::ContainerGear(_) => "containergear",
        }
    }
}

/// An item owned by an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub notes: String,
    /// Opaque host-side script run after a roll involving this item
    pub custom_macro: Option<String>,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            notes: String::new(),
            custom_macro: None,
            kind,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Shared gear state, when this item is a gear type.
    pub fn gear(&self) -> Option<&GearCommon> {
        match &self.kind {
            ItemKind::WeaponGear(d) => Some(&d.gear),
            ItemKind::MissileGear(d) => Some(&d.gear),
            ItemKind::ArmorGear(d) => Some(&d.gear),
            ItemKind::MiscGear(d) => Some(&d.gear),
            ItemKind::ContainerGear(d) => Some(&d.gear),
            _ => None,
        }
    }

    pub fn gear_mut(&mut self) -> Option<&mut GearCommon> {
        match &mut self.kind {
            ItemKind::WeaponGear(d) => Some(&mut d.gear),
            ItemKind::MissileGear(d) => Some(&mut d.gear),
            ItemKind::ArmorGear(d) => Some(&mut d.gear),
            ItemKind::MiscGear(d) => Some(&mut d.gear),
            ItemKind::ContainerGear(d) => Some(&mut d.gear),
            _ => None,
        }
    }

    pub fn as_skill(&self) -> Option<&SkillData> {
        match &self.kind {
            ItemKind::Skill(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_armor_location(&self) -> Option<&ArmorLocationData> {
        match &self.kind {
            ItemKind::ArmorLocation(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_gear(&self) -> bool {
        self.gear().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gear_accessor_covers_all_gear_kinds() {
        let kinds = vec![
            ItemKind::WeaponGear(WeaponGearData::default()),
            ItemKind::MissileGear(MissileGearData::default()),
            ItemKind::ArmorGear(ArmorGearData::default()),
            ItemKind::MiscGear(MiscGearData::default()),
            ItemKind::ContainerGear(ContainerGearData::default()),
        ];
        for kind in kinds {
            let item = Item::new("x", kind);
            assert!(item.is_gear(), "{} should be gear", item.kind.type_name());
        }
        let skill = Item::new("Sword", ItemKind::Skill(SkillData::default()));
        assert!(!skill.is_gear());
    }

    #[test]
    fn protection_for_aspect_falls_back_to_fire() {
        let prot = ProtectionValues::new(1, 2, 3, 4);
        assert_eq!(prot.for_aspect(Aspect::Blunt), 1);
        assert_eq!(prot.for_aspect(Aspect::Edged), 2);
        assert_eq!(prot.for_aspect(Aspect::Piercing), 3);
        assert_eq!(prot.for_aspect(Aspect::Fire), 4);
    }

    #[test]
    fn protection_accumulates() {
        let mut total = ProtectionValues::default();
        total.add(&ProtectionValues::new(1, 2, 1, 0));
        total.add(&ProtectionValues::new(2, 1, 0, 3));
        assert_eq!(total.blunt, 3);
        assert_eq!(total.edged, 3);
        assert_eq!(total.piercing, 1);
        assert_eq!(total.fire, 3);
    }

    #[test]
    fn prob_weights_by_aim() {
        let weights = ProbWeights::new(10, 20, 30);
        assert_eq!(weights.for_aim(Aim::High), 10);
        assert_eq!(weights.for_aim(Aim::Mid), 20);
        assert_eq!(weights.for_aim(Aim::Low), 30);
    }

    #[test]
    fn item_serializes_with_kind_tag() {
        let item = Item::new("Dagger", ItemKind::WeaponGear(WeaponGearData::default()));
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("weaponGear"));
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
