//! Impact dice - the d6 damage pool produced by a combat exchange
//!
//! Unlike a skill test (which always rolls at least one die), a zero or
//! negative count here means the attack produced no impact at all: the
//! formula renders the literal "no" and nothing is rolled.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `{n}d6{±m}` impact pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDice {
    /// Number of d6 to roll; <= 0 means no impact
    pub count: i32,
    /// Flat modifier added to the rolled total
    pub modifier: i32,
}

impl ImpactDice {
    pub fn new(count: i32, modifier: i32) -> Self {
        Self { count, modifier }
    }

    pub fn none() -> Self {
        Self {
            count: 0,
            modifier: 0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.count <= 0
    }

    /// Minimum possible total, or 0 when there is no impact.
    pub fn min_total(&self) -> i32 {
        if self.is_none() {
            0
        } else {
            self.count + self.modifier
        }
    }

    /// Maximum possible total, or 0 when there is no impact.
    pub fn max_total(&self) -> i32 {
        if self.is_none() {
            0
        } else {
            self.count * 6 + self.modifier
        }
    }
}

impl fmt::Display for ImpactDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "no")
        } else if self.modifier > 0 {
            write!(f, "{}d6+{}", self.count, self.modifier)
        } else if self.modifier < 0 {
            write!(f, "{}d6{}", self.count, self.modifier)
        } else {
            write!(f, "{}d6", self.count)
        }
    }
}
