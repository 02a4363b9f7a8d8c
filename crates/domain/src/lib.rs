//! HarnMaster 3 domain layer
//!
//! Pure data model for the rules engine: actors, items, active effects,
//! and the value objects the derived-attribute and combat pipelines
//! operate on. No RNG and no logging live here - randomness is injected
//! at the rules layer and the domain stays side-effect free.

pub mod content;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use content::standard_hit_locations;
pub use entities::{
    ActiveEffect, Actor, ActorKind, ArmorGearData, ArmorLocationData, Capacity,
    ContainerGearData, ContainerRef, EffectDuration, EffectMode, Ephemeral, GearCommon,
    InjuryData, InvocationData, Item, ItemKind, MiscGearData, MissileGearData, ModifierTarget,
    MoveRate, ProbWeights, ProtectionValues, PsionicData, ShockIndex, SkillData, SpellData,
    TraitData, WeaponGearData,
};
pub use error::DomainError;
pub use ids::{ActorId, EffectId, ItemId};
pub use value_objects::{
    Ability, AbilityScore, AbilitySet, Aim, Aspect, DefenseType, GameClock, ImpactDice,
    InjuryRecording, RuleOptions, Severity, SeverityClass, SeverityTable, SkillCategory,
    SuccessLevel,
};
