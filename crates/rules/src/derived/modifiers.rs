//! Modifier application - folding active effects onto derived fields
//!
//! Effects targeting the same field apply in ascending priority order
//! (stable for ties, so insertion order breaks them). The caller passes
//! the effect list already filtered to enabled effects.

use harnmaster_domain::{ActiveEffect, Actor, EffectMode, GameClock, ModifierTarget};

/// Fold every effect targeting `target` onto `base`.
pub fn apply_modifiers(base: f64, target: ModifierTarget, effects: &[ActiveEffect]) -> f64 {
    let mut applicable: Vec<&ActiveEffect> = effects
        .iter()
        .filter(|effect| effect.target == target)
        .collect();
    applicable.sort_by_key(|effect| effect.priority());
    applicable
        .into_iter()
        .fold(base, |value, effect| apply_one(value, effect))
}

fn apply_one(base: f64, effect: &ActiveEffect) -> f64 {
    match effect.mode {
        // Host-interpreted; the rules fold leaves the value alone
        EffectMode::Custom => base,
        EffectMode::Multiply => base * effect.value,
        EffectMode::Add => base + effect.value,
        EffectMode::Downgrade => base.min(effect.value),
        EffectMode::Upgrade => base.max(effect.value),
        EffectMode::Override => effect.value,
    }
}

/// Disable every enabled effect whose duration has elapsed. Returns the
/// number of effects newly disabled. Called by the orchestration layer
/// on each world-time or combat-round tick.
pub fn expire_effects(actor: &mut Actor, clock: &GameClock) -> usize {
    let mut expired = 0;
    for effect in actor.effects.iter_mut() {
        if !effect.disabled && effect.is_expired(clock) {
            effect.disabled = true;
            expired += 1;
            tracing::debug!(actor = %actor.name, effect = %effect.label, "effect expired");
        }
    }
    expired
}
