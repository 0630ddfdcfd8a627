//! Core contracts for fixturelab.
//!
//! This crate defines the canonical record shapes shared by the generation
//! engine and the CLI: the `HumanRecord` entity, its enumerations, the
//! tri-state field wrapper, and the polymorphic vehicle reference.

pub mod model;

pub use model::{Coordinates, HumanRecord, Mood, TriState, Vehicle, VehicleRecord, WeaponType};
