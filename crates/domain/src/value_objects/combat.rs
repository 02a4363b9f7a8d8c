//! Combat value objects - damage aspects, aim zones, defense choices,
//! skill categories, and d100 success tiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Damage type of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Aspect {
    Blunt,
    Edged,
    Piercing,
    Fire,
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Aspect::Blunt => "Blunt",
            Aspect::Edged => "Edged",
            Aspect::Piercing => "Piercing",
            Aspect::Fire => "Fire",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Aspect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blunt" => Ok(Aspect::Blunt),
            "edged" => Ok(Aspect::Edged),
            "piercing" => Ok(Aspect::Piercing),
            "fire" => Ok(Aspect::Fire),
            other => Err(DomainError::parse(format!("Unknown aspect: {}", other))),
        }
    }
}

/// Vertical targeting band used for hit-location weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Aim {
    High,
    #[default]
    Mid,
    Low,
}

impl fmt::Display for Aim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Aim::High => "High",
            Aim::Mid => "Mid",
            Aim::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

/// Defense chosen by the target of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefenseType {
    Dodge,
    Block,
    Counterstrike,
    Ignore,
}

impl fmt::Display for DefenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DefenseType::Dodge => "Dodge",
            DefenseType::Block => "Block",
            DefenseType::Counterstrike => "Counterstrike",
            DefenseType::Ignore => "Ignore",
        };
        write!(f, "{}", s)
    }
}

/// Skill grouping. Each category has its own active-effect EML modifier
/// key; Combat and Physical skills take the physical penalty, everything
/// else the universal penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    Combat,
    Physical,
    Communication,
    Craft,
    Ritual,
    Magic,
    Psionic,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Combat,
        SkillCategory::Physical,
        SkillCategory::Communication,
        SkillCategory::Craft,
        SkillCategory::Ritual,
        SkillCategory::Magic,
        SkillCategory::Psionic,
    ];

    pub fn takes_physical_penalty(self) -> bool {
        matches!(self, SkillCategory::Combat | SkillCategory::Physical)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillCategory::Combat => "Combat",
            SkillCategory::Physical => "Physical",
            SkillCategory::Communication => "Communication",
            SkillCategory::Craft => "Craft",
            SkillCategory::Ritual => "Ritual",
            SkillCategory::Magic => "Magic",
            SkillCategory::Psionic => "Psionic",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SkillCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "combat" => Ok(SkillCategory::Combat),
            "physical" => Ok(SkillCategory::Physical),
            "communication" => Ok(SkillCategory::Communication),
            "craft" => Ok(SkillCategory::Craft),
            "ritual" => Ok(SkillCategory::Ritual),
            "magic" => Ok(SkillCategory::Magic),
            "psionic" => Ok(SkillCategory::Psionic),
            other => Err(DomainError::parse(format!(
                "Unknown skill category: {}",
                other
            ))),
        }
    }
}

/// Outcome tier of a d100 roll-under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuccessLevel {
    CriticalSuccess,
    MarginalSuccess,
    MarginalFailure,
    CriticalFailure,
}

impl SuccessLevel {
    pub fn from_flags(is_success: bool, is_critical: bool) -> Self {
        match (is_success, is_critical) {
            (true, true) => SuccessLevel::CriticalSuccess,
            (true, false) => SuccessLevel::MarginalSuccess,
            (false, false) => SuccessLevel::MarginalFailure,
            (false, true) => SuccessLevel::CriticalFailure,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(
            self,
            SuccessLevel::CriticalSuccess | SuccessLevel::MarginalSuccess
        )
    }

    pub fn is_critical(self) -> bool {
        matches!(
            self,
            SuccessLevel::CriticalSuccess | SuccessLevel::CriticalFailure
        )
    }

    /// Short key used in table dumps and chat output ("cs", "ms", "mf", "cf").
    pub fn key(self) -> &'static str {
        match self {
            SuccessLevel::CriticalSuccess => "cs",
            SuccessLevel::MarginalSuccess => "ms",
            SuccessLevel::MarginalFailure => "mf",
            SuccessLevel::CriticalFailure => "cf",
        }
    }
}

impl fmt::Display for SuccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SuccessLevel::CriticalSuccess => "Critical Success",
            SuccessLevel::MarginalSuccess => "Marginal Success",
            SuccessLevel::MarginalFailure => "Marginal Failure",
            SuccessLevel::CriticalFailure => "Critical Failure",
        };
        write!(f, "{}", s)
    }
}
