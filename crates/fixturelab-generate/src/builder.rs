//! Assembly of one fixture record from its parts.

use rand::Rng;

use fixturelab_core::{HumanRecord, Vehicle};

use crate::samplers;

/// Compose one record from an allocated name, a resolved vehicle, and one
/// independent draw per sampler.
///
/// `with_version` is a variant-level switch: the decoy `schemaVersion` field
/// is sampled for every record of a batch or for none.
pub fn build_record(
    name: String,
    vehicle: Vehicle,
    with_version: bool,
    rng: &mut impl Rng,
) -> HumanRecord {
    HumanRecord {
        name,
        coordinates: samplers::coordinates(rng),
        is_heroic: samplers::heroic(rng),
        has_accessory: samplers::accessory(rng),
        vehicle,
        mood: samplers::mood(rng),
        impact_speed: samplers::impact_speed(rng),
        soundtrack_name: samplers::soundtrack_name(rng),
        wait_minutes: samplers::wait_minutes(rng),
        weapon_type: samplers::weapon_type(rng),
        schema_version: with_version.then(|| samplers::schema_version(rng)),
    }
}
