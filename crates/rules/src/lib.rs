//! HarnMaster 3 rules engine
//!
//! The computational core behind the actor sheet and combat flow:
//! derived-attribute recomputation, gear weight accumulation, active
//! effect application, dice tests, combat exchange tables, and injury
//! resolution. Everything here is a synchronous transform over the
//! domain types - the only side effects are in-place writes of derived
//! fields and the repair of dangling container references.
//!
//! The orchestration layer drives the engine after every mutating
//! event:
//!
//! ```
//! use harnmaster_domain::Actor;
//! use harnmaster_rules::recompute;
//!
//! let mut actor = Actor::character("Erane");
//! recompute(&mut actor);
//! assert!(actor.endurance >= 1);
//! ```

pub mod combat;
pub mod derived;
pub mod dice;
pub mod error;
pub mod probability;
pub mod random;

#[cfg(test)]
mod e2e_tests;

pub use combat::{
    apply_injury, calc_injury, melee_outcome, missile_outcome, resolve_melee_exchange,
    resolve_missile_exchange, ExchangeResult, InjuryResult, OutcomeEntry,
};
pub use derived::{
    apply_active_effects, apply_modifiers, compute_weights, expire_effects, recompute,
    recompute_base_data, recompute_derived_data, WeightTotals,
};
pub use dice::{roll_impact, roll_test, Die, TestRollResult, TestRollSpec};
pub use error::CombatError;
pub use probability::{normal_cdf, success_probability_percent};
pub use random::{FixedSource, RandomSource, RngSource};
