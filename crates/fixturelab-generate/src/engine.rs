use rand::Rng;
use tracing::info;

use fixturelab_core::HumanRecord;

use crate::builder::build_record;
use crate::errors::GenerationError;
use crate::names::NameAllocator;
use crate::vehicle::pick_vehicle;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Number of records to produce.
    pub count: u64,
    /// Offset added to the record index when minting names.
    pub start_id: i64,
    /// Caller-supplied pool of vehicle ids; must be non-empty.
    pub vehicle_pool: Vec<i64>,
    /// Chance in [0, 1] of reusing an earlier name instead of minting.
    pub duplicate_chance: f64,
    /// Chance in [0, 1] of inlining a catalog vehicle instead of an id.
    pub inline_vehicle_chance: f64,
    /// Emit the decoy `schemaVersion` field on every record.
    pub schema_version_field: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: 0,
            start_id: 1,
            vehicle_pool: Vec::new(),
            duplicate_chance: 0.1,
            inline_vehicle_chance: 0.15,
            schema_version_field: false,
        }
    }
}

/// Entry point for producing a fixture batch.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate the configured batch, threading the name allocator
    /// sequentially so each record's duplicate candidates are exactly the
    /// names minted before it.
    ///
    /// All-or-nothing: the pool is validated before the first record is
    /// built, and any failure aborts the whole batch. A zero count yields an
    /// empty batch.
    pub fn run(&self, rng: &mut impl Rng) -> Result<Vec<HumanRecord>, GenerationError> {
        if self.options.vehicle_pool.is_empty() {
            return Err(GenerationError::EmptyVehiclePool);
        }

        info!(
            count = self.options.count,
            start_id = self.options.start_id,
            pool_size = self.options.vehicle_pool.len(),
            duplicate_chance = self.options.duplicate_chance,
            inline_vehicle_chance = self.options.inline_vehicle_chance,
            "generation started"
        );

        let mut names = NameAllocator::new();
        let mut records = Vec::with_capacity(self.options.count as usize);

        for index in 0..self.options.count {
            let name = names.next(
                index as i64,
                self.options.start_id,
                self.options.duplicate_chance,
                rng,
            );
            let vehicle = pick_vehicle(
                &self.options.vehicle_pool,
                self.options.inline_vehicle_chance,
                rng,
            )?;
            records.push(build_record(
                name,
                vehicle,
                self.options.schema_version_field,
                rng,
            ));
        }

        info!(
            records = records.len(),
            unique_names = names.minted().len(),
            "generation finished"
        );

        Ok(records)
    }
}
