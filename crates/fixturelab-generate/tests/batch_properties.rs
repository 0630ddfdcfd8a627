use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fixturelab_core::Vehicle;
use fixturelab_generate::errors::GenerationError;
use fixturelab_generate::vehicle::catalog;
use fixturelab_generate::{GenerateOptions, GenerationEngine};

fn options(count: u64) -> GenerateOptions {
    GenerateOptions {
        count,
        vehicle_pool: vec![10, 20],
        ..GenerateOptions::default()
    }
}

#[test]
fn batch_has_exactly_the_requested_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for count in [0, 1, 7, 50] {
        let records = GenerationEngine::new(options(count))
            .run(&mut rng)
            .expect("generation succeeds");
        assert_eq!(records.len() as u64, count);
    }
}

#[test]
fn zero_count_yields_empty_batch_without_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let records = GenerationEngine::new(options(0))
        .run(&mut rng)
        .expect("empty batch is valid");
    assert!(records.is_empty());
}

#[test]
fn empty_pool_fails_before_building_anything() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let opts = GenerateOptions {
        count: 5,
        vehicle_pool: Vec::new(),
        ..GenerateOptions::default()
    };
    let result = GenerationEngine::new(opts).run(&mut rng);
    assert!(matches!(result, Err(GenerationError::EmptyVehiclePool)));
}

#[test]
fn vehicle_ids_come_from_the_pool_and_inlines_from_the_catalog() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let opts = GenerateOptions {
        count: 200,
        vehicle_pool: vec![10, 20],
        inline_vehicle_chance: 0.5,
        ..GenerateOptions::default()
    };
    let records = GenerationEngine::new(opts)
        .run(&mut rng)
        .expect("generation succeeds");
    let known = catalog();
    for record in &records {
        match &record.vehicle {
            Vehicle::ById(id) => assert!([10, 20].contains(id)),
            Vehicle::Inline(inline) => assert!(known.contains(inline)),
        }
    }
}

#[test]
fn zero_duplicate_chance_keeps_names_distinct() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let opts = GenerateOptions {
        count: 100,
        duplicate_chance: 0.0,
        vehicle_pool: vec![1],
        ..GenerateOptions::default()
    };
    let records = GenerationEngine::new(opts)
        .run(&mut rng)
        .expect("generation succeeds");
    let mut names: Vec<_> = records.iter().map(|r| r.name.clone()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), records.len());
}

#[test]
fn full_duplicate_chance_reuses_only_the_first_mint() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let opts = GenerateOptions {
        count: 20,
        duplicate_chance: 1.0,
        vehicle_pool: vec![1],
        ..GenerateOptions::default()
    };
    let records = GenerationEngine::new(opts)
        .run(&mut rng)
        .expect("generation succeeds");
    let first = &records[0].name;
    for record in &records[1..] {
        assert_eq!(&record.name, first);
    }
}

#[test]
fn inline_chance_extremes_pin_the_vehicle_shape() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let only_ids = GenerationEngine::new(GenerateOptions {
        count: 50,
        inline_vehicle_chance: 0.0,
        vehicle_pool: vec![10, 20],
        ..GenerateOptions::default()
    })
    .run(&mut rng)
    .expect("generation succeeds");
    assert!(only_ids.iter().all(|r| !r.vehicle.is_inline()));

    let only_inline = GenerationEngine::new(GenerateOptions {
        count: 50,
        inline_vehicle_chance: 1.0,
        vehicle_pool: vec![10, 20],
        ..GenerateOptions::default()
    })
    .run(&mut rng)
    .expect("generation succeeds");
    assert!(only_inline.iter().all(|r| r.vehicle.is_inline()));
}

#[test]
fn deterministic_scenario_names_and_ids() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let opts = GenerateOptions {
        count: 3,
        start_id: 1,
        vehicle_pool: vec![10, 20],
        duplicate_chance: 0.0,
        inline_vehicle_chance: 0.0,
        ..GenerateOptions::default()
    };
    let records = GenerationEngine::new(opts)
        .run(&mut rng)
        .expect("generation succeeds");
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Human_1", "Human_2", "Human_3"]);
    for record in &records {
        assert!(matches!(record.vehicle, Vehicle::ById(10) | Vehicle::ById(20)));
    }
}

#[test]
fn schema_version_is_a_batch_level_switch() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let without = GenerationEngine::new(options(20))
        .run(&mut rng)
        .expect("generation succeeds");
    assert!(without.iter().all(|r| r.schema_version.is_none()));

    let with = GenerationEngine::new(GenerateOptions {
        schema_version_field: true,
        ..options(20)
    })
    .run(&mut rng)
    .expect("generation succeeds");
    for record in &with {
        let version = record.schema_version.expect("version present on every record");
        assert!((1..=10).contains(&version));
    }
}

#[test]
fn duplicate_names_always_repeat_an_earlier_mint() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let opts = GenerateOptions {
        count: 200,
        duplicate_chance: 0.4,
        vehicle_pool: vec![1],
        ..GenerateOptions::default()
    };
    let records = GenerationEngine::new(opts)
        .run(&mut rng)
        .expect("generation succeeds");
    let mut seen: Vec<&str> = Vec::new();
    for record in &records {
        let fresh = record.name.starts_with("Human_") && !seen.contains(&record.name.as_str());
        assert!(fresh || seen.contains(&record.name.as_str()));
        if fresh {
            seen.push(record.name.as_str());
        }
    }
}
