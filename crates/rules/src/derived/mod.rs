//! The derived-attribute pipeline and its supporting services

mod engine;
mod modifiers;
mod weight;

pub use engine::{
    apply_active_effects, recompute, recompute_base_data, recompute_derived_data,
};
pub use modifiers::{apply_modifiers, expire_effects};
pub use weight::{compute_weights, WeightTotals};
