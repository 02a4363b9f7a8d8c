//! Gear weight accumulation
//!
//! Computes the actor's carried weight and each container's load. An
//! item stowed in a container inherits the container's carried state; a
//! reference to a container that no longer exists is repaired back to
//! on-person (and contributes nothing for the current pass).

use std::collections::HashMap;

use harnmaster_domain::{Actor, ContainerRef, ItemId, ItemKind};

/// Rounded weight totals per gear bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightTotals {
    pub total: f64,
    pub weapons: f64,
    pub missiles: f64,
    pub armor: f64,
    /// Miscellaneous gear and containers
    pub misc: f64,
}

/// Round to 2 decimals with a small epsilon to suppress float drift.
pub(crate) fn round_weight(value: f64) -> f64 {
    ((value + 1e-9) * 100.0).round() / 100.0
}

/// Accumulate carried weight over the actor's items.
///
/// Side effects: each containergear item's `capacity_value` is set to
/// its (effectively carried) load, and dangling container references
/// are reset to on-person.
pub fn compute_weights(actor: &mut Actor) -> WeightTotals {
    // Pass 1: container id -> its own carried flag
    let container_carried: HashMap<ItemId, bool> = actor
        .items
        .iter()
        .filter_map(|item| match &item.kind {
            ItemKind::ContainerGear(data) => Some((item.id, data.gear.is_carried)),
            _ => None,
        })
        .collect();

    // Pass 2: accumulate effectively carried weight
    let mut totals = WeightTotals::default();
    let mut container_loads: HashMap<ItemId, f64> = HashMap::new();
    let mut dangling: Vec<usize> = Vec::new();

    for (index, item) in actor.items.iter().enumerate() {
        let Some(gear) = item.gear() else { continue };

        let (carried, inside) = match gear.container {
            ContainerRef::OnPerson => (gear.is_carried, None),
            ContainerRef::In(id) => match container_carried.get(&id) {
                Some(&container_is_carried) => (container_is_carried, Some(id)),
                None => {
                    dangling.push(index);
                    (false, None)
                }
            },
        };
        if !carried {
            continue;
        }

        let weight = gear.weight.max(0.0) * f64::from(gear.quantity);
        totals.total += weight;
        match &item.kind {
            ItemKind::WeaponGear(_) => totals.weapons += weight,
            ItemKind::MissileGear(_) => totals.missiles += weight,
            ItemKind::ArmorGear(_) => totals.armor += weight,
            _ => totals.misc += weight,
        }
        if let Some(id) = inside {
            *container_loads.entry(id).or_default() += weight;
        }
    }

    // Repair dangling references now that iteration is done
    for index in dangling {
        let item = &mut actor.items[index];
        tracing::warn!(
            item = %item.name,
            "container reference unresolvable; resetting to on-person"
        );
        if let Some(gear) = item.gear_mut() {
            gear.container = ContainerRef::OnPerson;
        }
    }

    // Write container loads back
    for item in actor.items.iter_mut() {
        if let ItemKind::ContainerGear(data) = &mut item.kind {
            data.capacity_value = round_weight(container_loads.get(&item.id).copied().unwrap_or(0.0));
        }
    }

    totals.total = round_weight(totals.total);
    totals.weapons = round_weight(totals.weapons);
    totals.missiles = round_weight(totals.missiles);
    totals.armor = round_weight(totals.armor);
    totals.misc = round_weight(totals.misc);
    totals
}
