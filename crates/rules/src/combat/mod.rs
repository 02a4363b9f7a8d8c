//! Combat resolution - exchange tables and injury derivation

mod exchange;
mod injury;
mod tables;

pub use exchange::{resolve_melee_exchange, resolve_missile_exchange, ExchangeResult};
pub use injury::{apply_injury, calc_injury, InjuryResult};
pub use tables::{melee_outcome, missile_outcome, OutcomeEntry};
