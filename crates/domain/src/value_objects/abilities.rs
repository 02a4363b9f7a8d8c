//! Ability scores - fixed base values and recomputed effective values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The thirteen abilities carried by characters and creatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    Strength,
    Stamina,
    Dexterity,
    Agility,
    Intelligence,
    Aura,
    Will,
    Eyesight,
    Hearing,
    Smell,
    Voice,
    Comeliness,
    Morality,
}

impl Ability {
    pub const ALL: [Ability; 13] = [
        Ability::Strength,
        Ability::Stamina,
        Ability::Dexterity,
        Ability::Agility,
        Ability::Intelligence,
        Ability::Aura,
        Ability::Will,
        Ability::Eyesight,
        Ability::Hearing,
        Ability::Smell,
        Ability::Voice,
        Ability::Comeliness,
        Ability::Morality,
    ];

    /// Stable index into working-value arrays.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|a| *a == self)
            .unwrap_or_default()
    }

    /// Abilities reduced by the physical penalty. Intelligence, aura, and
    /// will take the universal penalty instead; comeliness and morality
    /// take no penalty at all.
    pub fn takes_physical_penalty(self) -> bool {
        matches!(
            self,
            Ability::Strength
                | Ability::Stamina
                | Ability::Dexterity
                | Ability::Agility
                | Ability::Eyesight
                | Ability::Hearing
                | Ability::Smell
                | Ability::Voice
        )
    }

    pub fn is_penalty_exempt(self) -> bool {
        matches!(self, Ability::Comeliness | Ability::Morality)
    }

    pub fn abbrev(self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Stamina => "STA",
            Ability::Dexterity => "DEX",
            Ability::Agility => "AGL",
            Ability::Intelligence => "INT",
            Ability::Aura => "AUR",
            Ability::Will => "WIL",
            Ability::Eyesight => "EYE",
            Ability::Hearing => "HRG",
            Ability::Smell => "SML",
            Ability::Voice => "VOI",
            Ability::Comeliness => "CML",
            Ability::Morality => "MOR",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Ability::Strength),
            "STA" | "STAMINA" => Ok(Ability::Stamina),
            "DEX" | "DEXTERITY" => Ok(Ability::Dexterity),
            "AGL" | "AGILITY" => Ok(Ability::Agility),
            "INT" | "INTELLIGENCE" => Ok(Ability::Intelligence),
            "AUR" | "AURA" => Ok(Ability::Aura),
            "WIL" | "WILL" => Ok(Ability::Will),
            "EYE" | "EYESIGHT" => Ok(Ability::Eyesight),
            "HRG" | "HEARING" => Ok(Ability::Hearing),
            "SML" | "SMELL" => Ok(Ability::Smell),
            "VOI" | "VOICE" => Ok(Ability::Voice),
            "CML" | "COM" | "COMELINESS" => Ok(Ability::Comeliness),
            "MOR" | "MORALITY" => Ok(Ability::Morality),
            other => Err(DomainError::parse(format!("Unknown ability: {}", other))),
        }
    }
}

/// A single ability: the player-set base and the derived effective value.
///
/// `effective` is overwritten on every recompute pass and is never
/// authoritative state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScore {
    pub base: i32,
    pub effective: i32,
}

impl AbilityScore {
    pub fn new(base: i32) -> Self {
        Self {
            base,
            effective: base,
        }
    }
}

/// The full ability block for an actor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilitySet {
    pub strength: AbilityScore,
    pub stamina: AbilityScore,
    pub dexterity: AbilityScore,
    pub agility: AbilityScore,
    pub intelligence: AbilityScore,
    pub aura: AbilityScore,
    pub will: AbilityScore,
    pub eyesight: AbilityScore,
    pub hearing: AbilityScore,
    pub smell: AbilityScore,
    pub voice: AbilityScore,
    pub comeliness: AbilityScore,
    pub morality: AbilityScore,
}

impl AbilitySet {
    pub fn get(&self, ability: Ability) -> AbilityScore {
        match ability {
            Ability::Strength => self.strength,
            Ability::Stamina => self.stamina,
            Ability::Dexterity => self.dexterity,
            Ability::Agility => self.agility,
            Ability::Intelligence => self.intelligence,
            Ability::Aura => self.aura,
            Ability::Will => self.will,
            Ability::Eyesight => self.eyesight,
            Ability::Hearing => self.hearing,
            Ability::Smell => self.smell,
            Ability::Voice => self.voice,
            Ability::Comeliness => self.comeliness,
            Ability::Morality => self.morality,
        }
    }

    pub fn get_mut(&mut self, ability: Ability) -> &mut AbilityScore {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Stamina => &mut self.stamina,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Agility => &mut self.agility,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Aura => &mut self.aura,
            Ability::Will => &mut self.will,
            Ability::Eyesight => &mut self.eyesight,
            Ability::Hearing => &mut self.hearing,
            Ability::Smell => &mut self.smell,
            Ability::Voice => &mut self.voice,
            Ability::Comeliness => &mut self.comeliness,
            Ability::Morality => &mut self.morality,
        }
    }

    /// Builder-style: set one base value (effective resets to match).
    pub fn with(mut self, ability: Ability, base: i32) -> Self {
        *self.get_mut(ability) = AbilityScore::new(base);
        self
    }

    /// Set every base value at once (effective resets to match).
    pub fn with_all(mut self, base: i32) -> Self {
        for ability in Ability::ALL {
            *self.get_mut(ability) = AbilityScore::new(base);
        }
        self
    }
}
