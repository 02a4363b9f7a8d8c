//! Entities - documents with identity owned by the host's document layer

mod actor;
mod effect;
mod item;

pub use actor::{Actor, ActorKind, Capacity, Ephemeral, MoveRate, ShockIndex};
pub use effect::{ActiveEffect, EffectDuration, EffectMode, ModifierTarget};
pub use item::{
    ArmorGearData, ArmorLocationData, ContainerGearData, ContainerRef, GearCommon, InjuryData,
    InvocationData, Item, ItemKind, MiscGearData, MissileGearData, ProbWeights, ProtectionValues,
    PsionicData, SkillData, SpellData, TraitData, WeaponGearData,
};
