//! Actor entity - characters, creatures, and containers
//!
//! An actor owns its items and active effects. Base abilities and base
//! move are authoritative input; every other numeric field here is
//! derived and overwritten by the recompute pipeline. The `eph` working
//! block is scratch state: recomputed every pass, never serialized, and
//! stale until the next recompute runs.

use serde::{Deserialize, Serialize};

use crate::entities::effect::ActiveEffect;
use crate::entities::item::{Item, ItemKind};
use crate::ids::ActorId;
use crate::value_objects::{Ability, AbilitySet};

/// The three actor variants. Containers carry capacity only; the
/// ability-derived pipeline does not run for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActorKind {
    Character,
    Creature,
    Container,
}

/// Movement rate: user-set base, derived effective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRate {
    pub base: f64,
    pub effective: i32,
}

/// Probabilistic measure of the actor's capacity to stay active under
/// accumulated injury and fatigue, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockIndex {
    pub value: i32,
    pub max: i32,
}

impl Default for ShockIndex {
    fn default() -> Self {
        Self { value: 0, max: 100 }
    }
}

/// Container capacity. `value` and `pct` are derived from contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub max: f64,
    pub value: f64,
    pub pct: i32,
}

/// Mutable scratch block recomputed on every pass. Consumers must treat
/// it as stale until a recompute has run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ephemeral {
    /// Working ability values, indexed by `Ability::index()`
    pub abilities: [f64; 13],
    pub move_rate: f64,
    pub fatigue: f64,
    pub endurance: f64,
    pub encumbrance: f64,
    pub total_injury_levels: f64,
    pub total_weight: f64,
    pub stumble_target: i32,
    pub fumble_target: i32,
}

impl Ephemeral {
    pub fn ability(&self, ability: Ability) -> f64 {
        self.abilities[ability.index()]
    }

    pub fn set_ability(&mut self, ability: Ability, value: f64) {
        self.abilities[ability.index()] = value;
    }
}

/// A character, creature, or container document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    pub abilities: AbilitySet,
    /// Accumulated fatigue levels (host-managed input)
    pub fatigue: i32,
    pub movement: MoveRate,

    // Derived scalars, overwritten every recompute
    pub universal_penalty: i32,
    pub physical_penalty: i32,
    pub endurance: i32,
    pub encumbrance: i32,
    pub condition: i32,
    pub dodge: i32,
    pub initiative: i32,
    pub shock_index: ShockIndex,
    pub total_injury_levels: i32,
    pub total_weight: f64,

    /// Container actors only
    pub capacity: Capacity,

    pub items: Vec<Item>,
    pub effects: Vec<ActiveEffect>,

    /// Working block; never persisted
    #[serde(skip)]
    pub eph: Ephemeral,
}

impl Actor {
    fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
            abilities: AbilitySet::default(),
            fatigue: 0,
            movement: MoveRate::default(),
            universal_penalty: 0,
            physical_penalty: 0,
            endurance: 0,
            encumbrance: 0,
            condition: 0,
            dodge: 0,
            initiative: 0,
            shock_index: ShockIndex::default(),
            total_injury_levels: 0,
            total_weight: 0.0,
            capacity: Capacity::default(),
            items: Vec::new(),
            effects: Vec::new(),
            eph: Ephemeral::default(),
        }
    }

    pub fn character(name: impl Into<String>) -> Self {
        Self::new(name, ActorKind::Character)
    }

    pub fn creature(name: impl Into<String>) -> Self {
        Self::new(name, ActorKind::Creature)
    }

    pub fn container(name: impl Into<String>, capacity_max: f64) -> Self {
        let mut actor = Self::new(name, ActorKind::Container);
        actor.capacity.max = capacity_max;
        actor
    }

    pub fn is_container(&self) -> bool {
        self.kind == ActorKind::Container
    }

    // ──────────────────────────────────────────────────────────────────
    // Builder-style setup
    // ──────────────────────────────────────────────────────────────────

    pub fn with_ability(mut self, ability: Ability, base: i32) -> Self {
        self.abilities = self.abilities.with(ability, base);
        self
    }

    pub fn with_fatigue(mut self, fatigue: i32) -> Self {
        self.fatigue = fatigue;
        self
    }

    pub fn with_base_move(mut self, base: f64) -> Self {
        self.movement.base = base;
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.effects.push(effect);
        self
    }

    // ──────────────────────────────────────────────────────────────────
    // Item access
    // ──────────────────────────────────────────────────────────────────

    pub fn items_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.kind.type_name() == type_name)
    }

    pub fn skills(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(|item| matches!(item.kind, ItemKind::Skill(_)))
    }

    pub fn armor_locations(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(|item| matches!(item.kind, ItemKind::ArmorLocation(_)))
    }

    /// Case-insensitive lookup of a skill item by name.
    pub fn skill_named(&self, name: &str) -> Option<&Item> {
        self.skills()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Effects that are not disabled, in insertion order.
    pub fn enabled_effects(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter().filter(|effect| !effect.disabled)
    }
}
