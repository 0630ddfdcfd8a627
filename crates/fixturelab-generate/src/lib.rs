//! Randomized HumanBeing fixture generation.
//!
//! This crate produces batches of `HumanRecord` fixtures with intentionally
//! messy shapes (duplicate names, a polymorphic vehicle slot, tri-state
//! fields) and renders them to YAML or JSON for seed-data loaders.

pub mod builder;
pub mod engine;
pub mod errors;
pub mod names;
pub mod output;
pub mod samplers;
pub mod vehicle;

pub use engine::{GenerateOptions, GenerationEngine};
pub use errors::GenerationError;
pub use output::{OutputFormat, render};
