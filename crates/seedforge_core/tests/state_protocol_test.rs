//! # State Protocol Tests
//!
//! Save/restore, clone, reset, fork and the JSON payload, exercised through
//! the public facade the way a caller persisting a session would.

use seedforge_core::{
    Algorithm, Generator, GeneratorConfig, GeneratorSnapshot, NormalCache, Seed,
};

fn draws(rng: &mut Generator, n: usize) -> Vec<u32> {
    (0..n).map(|_| rng.random_int()).collect()
}

#[test]
fn test_round_trip_every_algorithm() {
    for algorithm in Algorithm::ALL {
        for n in [0, 1, 7, 100] {
            let mut rng = Generator::new("round-trip", algorithm);
            draws(&mut rng, 13);
            let mut untouched = rng.clone();
            let saved = rng.get_state();
            rng.set_state(&saved).unwrap();
            assert_eq!(draws(&mut rng, n), draws(&mut untouched, n), "{algorithm} n={n}");
        }
    }
}

#[test]
fn test_round_trip_resumes_cached_normal() {
    for algorithm in Algorithm::ALL {
        let mut rng = Generator::new("spare", algorithm);
        rng.normal(0.0, 1.0);
        let saved = rng.get_state();
        assert!(saved.normal_cache.spare.is_some(), "{algorithm}");

        let would_have_been = rng.normal(0.0, 1.0);
        rng.random();
        rng.set_state(&saved).unwrap();
        assert_eq!(rng.normal(0.0, 1.0).to_bits(), would_have_been.to_bits(), "{algorithm}");
    }
}

#[test]
fn test_round_trip_through_json() {
    for algorithm in Algorithm::ALL {
        let mut rng = Generator::new(20_240_601, algorithm);
        rng.normal(5.0, 2.0);
        draws(&mut rng, 3);

        let json = rng.get_state().to_json().unwrap();
        let mut restored = Generator::new("unrelated", Algorithm::default());
        restored.set_state(&GeneratorSnapshot::from_json(&json).unwrap()).unwrap();

        assert_eq!(restored.algorithm(), algorithm);
        assert_eq!(
            restored.normal(5.0, 2.0).to_bits(),
            rng.normal(5.0, 2.0).to_bits(),
            "{algorithm}"
        );
        assert_eq!(draws(&mut restored, 20), draws(&mut rng, 20), "{algorithm}");
    }
}

#[test]
fn test_payload_field_names() {
    let rng = Generator::new("fields", Algorithm::Pcg32);
    let json = rng.get_state().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["algorithm"], "pcg32");
    for key in ["stateHi", "stateLo", "incHi", "incLo", "seed"] {
        assert!(!value["generatorState"][key].is_null(), "missing {key}");
    }
    assert_eq!(value["generatorState"]["seed"], "fields");
    assert_eq!(value["normalCache"]["spare"], serde_json::Value::Null);
    assert_eq!(value["normalCache"]["hasSpare"], false);

    let lcg = Generator::new(3, Algorithm::Lcg);
    let json = lcg.get_state().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in ["state", "seed", "multiplier", "increment", "modulus"] {
        assert!(!value["generatorState"][key].is_null(), "missing {key}");
    }
}

#[test]
fn test_clone_matches_then_diverges() {
    for algorithm in Algorithm::ALL {
        let mut source = Generator::new("clone", algorithm);
        draws(&mut source, 5);
        let mut copy = source.clone();
        assert_eq!(draws(&mut copy, 40), draws(&mut source.clone(), 40), "{algorithm}");

        // Drawing from the copy leaves the source where it was.
        let mut reference = source.clone();
        draws(&mut copy, 10);
        assert_eq!(draws(&mut source, 10), draws(&mut reference, 10), "{algorithm}");
    }
}

#[test]
fn test_clone_carries_normal_cache() {
    let mut source = Generator::new("clone-normal", Algorithm::Sfc32);
    source.normal(0.0, 1.0);
    let mut copy = source.clone();
    assert_eq!(copy.normal(0.0, 1.0).to_bits(), source.normal(0.0, 1.0).to_bits());
}

#[test]
fn test_reset_after_set_state_from_other_algorithm() {
    let mut rng = Generator::new("home", Algorithm::Xorshift128Plus);
    let expected = draws(&mut rng, 10);
    let foreign = Generator::new("away", Algorithm::Lcg).get_state();
    rng.set_state(&foreign).unwrap();
    assert_eq!(rng.algorithm(), Algorithm::Lcg);
    rng.reset();
    assert_eq!(rng.algorithm(), Algorithm::Xorshift128Plus);
    assert_eq!(draws(&mut rng, 10), expected);
}

#[test]
fn test_set_seed_clears_spare() {
    let mut rng = Generator::new(1, Algorithm::Mulberry32);
    rng.normal(0.0, 1.0);
    rng.set_seed(2, None);
    assert_eq!(rng.get_state().normal_cache, NormalCache::default());
}

#[test]
fn test_fork_children_are_independent_of_later_parent_use() {
    let mut parent = Generator::new("world", Algorithm::Xoshiro128StarStar);
    let mut child = parent.fork("rivers");
    let expected = draws(&mut child.clone(), 20);
    draws(&mut parent, 100);
    assert_eq!(draws(&mut child, 20), expected);
    assert!(matches!(child.seed(), Seed::Text(s) if s.ends_with(":rivers")));
}

#[test]
fn test_config_built_generator_round_trips() {
    let config = GeneratorConfig::from_toml_str(
        r#"
            seed = "cfg"
            algorithm = "lcg"

            [lcg]
            multiplier = 69069
            increment = 1
            modulus = 65536
        "#,
    )
    .unwrap();
    let mut rng = Generator::from_config(&config).unwrap();
    draws(&mut rng, 4);
    let json = rng.get_state().to_json().unwrap();
    let mut restored = Generator::new(0, Algorithm::Lcg);
    restored.set_state(&GeneratorSnapshot::from_json(&json).unwrap()).unwrap();
    assert_eq!(draws(&mut restored, 50), draws(&mut rng, 50));
}

#[test]
fn test_sampling_utilities() {
    let mut rng = Generator::new("utilities", Algorithm::Pcg32);
    let items: Vec<u32> = (0..10).collect();

    let shuffled = rng.shuffled(&items);
    let mut sorted = shuffled;
    sorted.sort_unstable();
    assert_eq!(sorted, items);

    for n in [0, 3, 10, 25] {
        let sample = rng.sample(&items, n);
        assert_eq!(sample.len(), n.min(items.len()));
        let mut dedup = sample.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), sample.len());
    }

    for _ in 0..1000 {
        let (x, y) = rng.point_in_circle(4.0);
        assert!(x * x + y * y <= 16.0);
        let (x, y, z) = rng.point_in_sphere(4.0);
        assert!(x * x + y * y + z * z <= 16.0);
    }
}
