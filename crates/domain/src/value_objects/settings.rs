//! Rule option settings and the game clock
//!
//! Optional rules are carried as an explicit value object passed into
//! every entry point that needs one - there are no ambient globals. The
//! host stores and round-trips these as JSON.

use serde::{Deserialize, Serialize};

/// How injuries produced by combat are recorded on the actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InjuryRecording {
    /// Never create injury items; the host displays the result only
    Never,
    /// Record, but the host may interpose a confirmation dialog
    Ask,
    #[default]
    Always,
}

/// Optional-rule flags consulted by injury resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOptions {
    /// Limbs can be severed by grievous/kill edged wounds
    pub amputation: bool,
    /// Serious wounds bleed until treated
    pub bloodloss: bool,
    /// Limb wounds force fumbles/stumbles instead of allowing a roll
    pub limb_injuries: bool,
    pub injury_recording: InjuryRecording,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            amputation: false,
            bloodloss: false,
            limb_injuries: false,
            injury_recording: InjuryRecording::Always,
        }
    }
}

impl RuleOptions {
    /// Builder-style toggles, used mostly from tests and host settings glue.
    pub fn with_amputation(mut self, on: bool) -> Self {
        self.amputation = on;
        self
    }

    pub fn with_bloodloss(mut self, on: bool) -> Self {
        self.bloodloss = on;
        self
    }

    pub fn with_limb_injuries(mut self, on: bool) -> Self {
        self.limb_injuries = on;
        self
    }

    pub fn with_injury_recording(mut self, mode: InjuryRecording) -> Self {
        self.injury_recording = mode;
        self
    }
}

/// The world/scene time context supplied by the orchestration layer on
/// each tick. Abstract units: world time in seconds, combat in rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClock {
    pub world_seconds: u64,
    pub combat_round: u64,
}

impl GameClock {
    pub fn new(world_seconds: u64, combat_round: u64) -> Self {
        Self {
            world_seconds,
            combat_round,
        }
    }
}
