//! Error types for combat and injury resolution
//!
//! Every variant is a "nothing to do" signal the caller reports upward;
//! none of these abort the host. Data-shape problems inside the derived
//! pipeline are repaired in place instead of surfacing here.

use thiserror::Error;

use harnmaster_domain::DefenseType;

/// Failure modes of combat and injury resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombatError {
    /// Invalid defense/result combination - a logic error the caller
    /// must guard against, reported instead of panicking
    #[error("No combat table entry for {defense} / {key}")]
    NoTableEntry { defense: DefenseType, key: String },

    /// Dodge/block/counterstrike lookups need the defender's roll
    #[error("Defense {0} requires a defender result")]
    MissingDefenderResult(DefenseType),

    /// Ignore is keyed by the attacker result alone
    #[error("Defense 'ignore' rejects composite attacker/defender keys")]
    CompositeKeyForIgnore,

    /// The target actor has no armorlocation items to hit
    #[error("Actor has no hit locations")]
    NoArmorLocations,

    /// A named hit location does not exist on the target
    #[error("Unknown hit location: {0}")]
    UnknownLocation(String),
}
