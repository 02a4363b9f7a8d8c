//! ActiveEffect entity - timed, prioritized modifier deltas
//!
//! Effects target a closed set of derived fields (no string key paths);
//! the rules layer folds them onto base values in ascending priority
//! order. Creation and toggling are the host's job; expiry against the
//! game clock is evaluated here.

use serde::{Deserialize, Serialize};

use crate::ids::{EffectId, ItemId};
use crate::value_objects::{Ability, GameClock, SkillCategory};

/// How an effect's value combines with the field it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectMode {
    /// Host-interpreted; a no-op for the rules fold
    Custom,
    Multiply,
    Add,
    /// Clamp from above: result = min(base, value)
    Downgrade,
    /// Clamp from below: result = max(base, value)
    Upgrade,
    Override,
}

impl EffectMode {
    /// Effects without an explicit priority sort at mode-constant x 10,
    /// so overrides land after adds by default.
    pub fn default_priority(self) -> i32 {
        let constant = match self {
            EffectMode::Custom => 0,
            EffectMode::Multiply => 1,
            EffectMode::Add => 2,
            EffectMode::Downgrade => 3,
            EffectMode::Upgrade => 4,
            EffectMode::Override => 5,
        };
        constant * 10
    }
}

/// The derived field an effect applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifierTarget {
    Ability(Ability),
    UniversalPenalty,
    PhysicalPenalty,
    Endurance,
    Move,
    Encumbrance,
    Fatigue,
    /// Per-category skill EML modifier (one key per category)
    SkillCategoryEml(SkillCategory),
    /// Melee weapon attack mastery level (item-level)
    MeleeAml,
    /// Melee weapon defense mastery level (item-level)
    MeleeDml,
    /// Missile weapon attack mastery level (item-level)
    MissileAml,
}

/// Remaining lifetime of an effect, in world seconds and/or combat
/// rounds. An unset pair never expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectDuration {
    pub start_world_seconds: Option<u64>,
    pub seconds: Option<u64>,
    pub start_round: Option<u64>,
    pub rounds: Option<u64>,
}

impl EffectDuration {
    pub fn permanent() -> Self {
        Self::default()
    }

    pub fn for_seconds(start: u64, seconds: u64) -> Self {
        Self {
            start_world_seconds: Some(start),
            seconds: Some(seconds),
            ..Self::default()
        }
    }

    pub fn for_rounds(start: u64, rounds: u64) -> Self {
        Self {
            start_round: Some(start),
            rounds: Some(rounds),
            ..Self::default()
        }
    }

    /// Whether the duration has elapsed at the given clock reading.
    pub fn is_expired(&self, clock: &GameClock) -> bool {
        let seconds_out = match (self.start_world_seconds, self.seconds) {
            (Some(start), Some(len)) => clock.world_seconds >= start.saturating_add(len),
            _ => false,
        };
        let rounds_out = match (self.start_round, self.rounds) {
            (Some(start), Some(len)) => clock.combat_round >= start.saturating_add(len),
            _ => false,
        };
        seconds_out || rounds_out
    }
}

/// A modifier delta attached to an actor, usually originated by an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEffect {
    pub id: EffectId,
    /// Display label, e.g. "Blessing of Peoni"
    pub label: String,
    pub target: ModifierTarget,
    pub mode: EffectMode,
    pub value: f64,
    /// Explicit ordering; `None` falls back to the mode default
    pub priority: Option<i32>,
    pub disabled: bool,
    pub duration: EffectDuration,
    /// The item that created this effect, if any
    pub origin: Option<ItemId>,
}

impl ActiveEffect {
    pub fn new(label: impl Into<String>, target: ModifierTarget, mode: EffectMode, value: f64) -> Self {
        Self {
            id: EffectId::new(),
            label: label.into(),
            target,
            mode,
            value,
            priority: None,
            disabled: false,
            duration: EffectDuration::permanent(),
            origin: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_duration(mut self, duration: EffectDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_origin(mut self, origin: ItemId) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Effective sort priority.
    pub fn priority(&self) -> i32 {
        self.priority.unwrap_or_else(|| self.mode.default_priority())
    }

    pub fn is_expired(&self, clock: &GameClock) -> bool {
        self.duration.is_expired(clock)
    }
}
