//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths and
//! that options survive a trip through JSON.

/// Math helpers are reachable and consistent with each other.
#[test]
fn test_math_module_exports() {
    use noise_core::math::fold::{fold, octave, to_lattice, PRIME_Y};
    use noise_core::math::hash::{squirrel5, HASH_MAX, HASH_MIN};
    use noise_core::math::interpolators::{lerp1, lerp2, lerp3, Cube, LatticeAxis};
    use noise_core::math::scale::{unit_closed, unit_closed_open, unit_open_closed, Scale};
    use noise_core::Dimensions;

    assert_eq!(fold(Dimensions::Two, [1, 1, 0, 0]), 1 + PRIME_Y);
    assert_eq!(octave(5, 1), 2);
    assert_eq!(to_lattice(-0.5), -1);
    assert_eq!(squirrel5(0, 0), -247101726);

    assert_eq!(lerp1(0.0, 2.0, 0.5), 1.0);
    assert_eq!(lerp2(1.0, 1.0, 1.0, 1.0, 0.3, 0.7), 1.0);
    let cube = Cube {
        f000: 2.0,
        f001: 2.0,
        f010: 2.0,
        f011: 2.0,
        f100: 2.0,
        f101: 2.0,
        f110: 2.0,
        f111: 2.0,
    };
    assert!((lerp3::<f64>(&cube, 0.1, 0.2, 0.3) - 2.0).abs() < 1e-12);
    assert_eq!(LatticeAxis::new(2.25).t, 0.25);

    let scale = Scale::new(0.0, 1.0).unwrap();
    assert_eq!(scale.apply(HASH_MAX as f64), unit_closed(HASH_MAX as f64));
    assert!(unit_open_closed(HASH_MIN as f64) > 0.0);
    assert!(unit_closed_open(HASH_MAX as f64) < 1.0);
}

/// Samplers and the channel helper are reachable.
#[test]
fn test_samplers_module_exports() {
    use noise_core::samplers::channel::channel_mask;
    use noise_core::samplers::dice::DiceSet;
    use noise_core::samplers::poisson::MAX_LAMBDA;
    use noise_core::samplers::{
        Ball, Boolean, Dice, Disc, Integers, ListPick, Normal, NormalPair, Poisson, UnitCircle,
        UnitSphere, VectorNoise,
    };
    use noise_core::{NoiseOptions, Sampler};

    let options = NoiseOptions::default().with_seed(9);
    let all = (
        Boolean::new(options.clone()).unwrap(),
        Integers::new(1, 3, options.clone()).unwrap(),
        ListPick::uniform(vec!['x', 'y'], options.clone()).unwrap(),
        Normal::new(options.clone()).unwrap(),
    );
    let (_flag, int, item, z) = all.sample(4);
    assert!((1..=3).contains(&int));
    assert!(item == 'x' || item == 'y');
    assert!(z.is_finite());

    let shapes = (
        UnitCircle::new(options.clone()).unwrap(),
        UnitSphere::new(options.clone()).unwrap(),
        Disc::new(options.clone()).unwrap(),
        Ball::new(options.clone()).unwrap(),
    );
    let _ = shapes.sample(4);

    let extras = (
        NormalPair::new(options.clone()).unwrap(),
        Poisson::new(MAX_LAMBDA, options.clone()).unwrap(),
        Dice::new(&"d4".parse::<DiceSet>().unwrap().0, options.clone()).unwrap(),
        VectorNoise::new([(0.0, 1.0); 4], options).unwrap(),
    );
    let (_, count, roll, v) = extras.sample(4);
    assert!(count < 200);
    assert!((1..=4).contains(&roll));
    assert!(v.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_eq!(channel_mask(0), 0);
}

/// Options round-trip through JSON with every symbolic seed form.
#[test]
fn test_options_json_round_trip() {
    use noise_core::{Dimensions, HashAlgorithm, NoiseOptions, Seed};

    let options = NoiseOptions::default()
        .with_dimensions(Dimensions::Three)
        .with_seed(Seed::declaration("caves"))
        .with_range(-1.0, 1.0)
        .with_octave(2)
        .with_algorithm(HashAlgorithm::Squirrel3);
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("\"declaration:caves\""));
    let back: noise_core::NoiseOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);

    let random: NoiseOptions = serde_json::from_str(r#"{"seed": "random"}"#).unwrap();
    assert_eq!(random.seed(), &Seed::Random);
    let fixed: NoiseOptions = serde_json::from_str(r#"{"seed": -12, "lerp": true}"#).unwrap();
    assert_eq!(fixed.seed(), &Seed::Fixed(-12));
    assert!(fixed.lerp());
    assert!(serde_json::from_str::<NoiseOptions>(r#"{"dimensions": 5}"#).is_err());
    assert!(serde_json::from_str::<NoiseOptions>(r#"{"seed": "sometimes"}"#).is_err());
}
