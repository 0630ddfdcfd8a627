//! Polymorphic vehicle reference resolution.

use rand::Rng;
use rand::seq::IndexedRandom;

use fixturelab_core::{TriState, Vehicle, VehicleRecord};

use crate::errors::GenerationError;

const CATALOG: &[(&str, TriState<bool>)] = &[
    ("honda civic", TriState::Present(true)),
    ("toyota corolla", TriState::Present(false)),
    ("mazda mx-5", TriState::Present(true)),
    ("volvo 240", TriState::Absent),
    ("ford mustang", TriState::Present(true)),
];

/// The fixed inline-vehicle catalog, independent of the caller's id pool.
pub fn catalog() -> Vec<VehicleRecord> {
    CATALOG
        .iter()
        .map(|(label, is_desirable)| VehicleRecord {
            label: (*label).to_string(),
            is_desirable: *is_desirable,
        })
        .collect()
}

/// Resolve one vehicle slot: with probability `inline_chance` an inlined
/// catalog record, otherwise an id from the caller-supplied pool.
///
/// An empty pool is a caller error even when `inline_chance` is 1.0.
pub fn pick_vehicle(
    pool: &[i64],
    inline_chance: f64,
    rng: &mut impl Rng,
) -> Result<Vehicle, GenerationError> {
    if pool.is_empty() {
        return Err(GenerationError::EmptyVehiclePool);
    }

    if rng.random_bool(inline_chance.clamp(0.0, 1.0)) {
        let record = catalog();
        let record = record.choose(rng).cloned().unwrap_or_else(|| VehicleRecord {
            label: "honda civic".to_string(),
            is_desirable: TriState::Present(true),
        });
        Ok(Vehicle::Inline(record))
    } else {
        Ok(Vehicle::ById(*pool.choose(rng).unwrap_or(&pool[0])))
    }
}
