//! Stateless per-field value samplers.
//!
//! Each sampler draws from the caller's rng handle and nothing else, so any
//! field can be exercised in isolation with a seeded generator.

use rand::Rng;
use rand::seq::IndexedRandom;

use fixturelab_core::{Coordinates, Mood, TriState, WeaponType};

/// Uniform location: x in [-1000, 1000] at 3-decimal precision, y integer in
/// [-1000, 1000].
pub fn coordinates(rng: &mut impl Rng) -> Coordinates {
    let x = rng.random_range(-1000.0..=1000.0_f64);
    Coordinates {
        x: (x * 1000.0).round() / 1000.0,
        y: rng.random_range(-1000..=1000),
    }
}

pub fn mood(rng: &mut impl Rng) -> Mood {
    *Mood::ALL.choose(rng).unwrap_or(&Mood::Calm)
}

pub fn weapon_type(rng: &mut impl Rng) -> WeaponType {
    *WeaponType::ALL.choose(rng).unwrap_or(&WeaponType::Hammer)
}

pub fn impact_speed(rng: &mut impl Rng) -> i64 {
    rng.random_range(0..=300)
}

pub fn soundtrack_name(rng: &mut impl Rng) -> String {
    format!("Track_{}", rng.random_range(1..=100))
}

/// Half the records wait, half have no recorded wait at all.
pub fn wait_minutes(rng: &mut impl Rng) -> TriState<i64> {
    if rng.random_bool(0.5) {
        TriState::Absent
    } else {
        TriState::Present(rng.random_range(1..=120))
    }
}

pub fn heroic(rng: &mut impl Rng) -> bool {
    rng.random_bool(0.5)
}

/// Uniform over yes / no / unrecorded.
pub fn accessory(rng: &mut impl Rng) -> TriState<bool> {
    match rng.random_range(0..3) {
        0 => TriState::Present(true),
        1 => TriState::Present(false),
        _ => TriState::Absent,
    }
}

/// Decoy version marker in [1, 10]; unrelated to the structural schema.
pub fn schema_version(rng: &mut impl Rng) -> i64 {
    rng.random_range(1..=10)
}
