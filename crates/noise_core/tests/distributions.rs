//! Integration tests for output shaping.
//!
//! Statistical checks over large coordinate ranges:
//! - Range coverage and discrete fairness
//! - Interpolation continuity in one to three dimensions
//! - Octave coarsening
//! - Weighted list picks, ball uniformity and Poisson means
//! - Construction-time error gating

use approx::assert_relative_eq;
use noise_core::samplers::{Ball, Disc, Dice, ListPick, Normal, Poisson, UnitSphere};
use noise_core::{Dimensions, Noise, NoiseError, NoiseOptions, Sampler};

fn noise(options: NoiseOptions) -> Noise {
    Noise::new(options).unwrap()
}

// ========================================
// Scaling
// ========================================

#[test]
fn test_range_coverage() {
    let n = noise(NoiseOptions::default().with_range(0.0, 10.0));
    let (min, max) = n
        .sequence()
        .take(10_000)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    assert!(min >= 0.0 && min < 0.1, "min {}", min);
    assert!(max <= 10.0 && max > 9.9, "max {}", max);
}

#[test]
fn test_discrete_fairness() {
    let n = noise(
        NoiseOptions::default()
            .with_range(-2.0, 8.0)
            .with_discrete(true),
    );
    let total = 100_000;
    let mut buckets = [0usize; 11];
    for v in n.sequence().take(total) {
        assert_eq!(v.fract(), 0.0);
        buckets[(v + 2.0) as usize] += 1;
    }
    // 8.0 itself is hit only by the largest hash
    assert!(buckets[10] <= 1);
    for &count in &buckets[..10] {
        let deviation = (count as f64 - 10_000.0).abs() / 10_000.0;
        assert!(deviation < 0.1, "{:?}", buckets);
    }
}

// ========================================
// Interpolation
// ========================================

#[test]
fn test_lerp_1d_continuity() {
    let options = NoiseOptions::default().with_range(0.0, 10.0);
    let raw = noise(options.clone());
    let smooth = noise(options.with_lerp(true));
    for i in 0..100 {
        let (a, b) = (raw.sample(i), raw.sample(i + 1));
        assert_eq!(smooth.sample(i), a);
        let mid = smooth.sample(i as f64 + 0.5);
        if a != b {
            assert!(mid > a.min(b) && mid < a.max(b), "midpoint {} of {} and {}", mid, a, b);
        }
        // No jump just below the next lattice point
        assert!((smooth.sample(i as f64 + 1.0 - 1e-9) - b).abs() < 1e-6);
    }
}

#[test]
fn test_lerp_2d_continuity() {
    let options = NoiseOptions::default()
        .with_dimensions(Dimensions::Two)
        .with_range(0.0, 1.0);
    let raw = noise(options.clone());
    let smooth = noise(options.with_lerp(true));
    for x in -5..5 {
        for y in -5..5 {
            assert_eq!(smooth.sample((x, y)), raw.sample((x, y)));
            let (fx, fy) = (x as f64 + 0.3, y as f64 + 0.6);
            let here = smooth.sample((fx, fy));
            let near = smooth.sample((fx + 1e-7, fy - 1e-7));
            assert!((here - near).abs() < 1e-5);
            let corners = [
                raw.sample((x, y)),
                raw.sample((x + 1, y)),
                raw.sample((x, y + 1)),
                raw.sample((x + 1, y + 1)),
            ];
            let lo = corners.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = corners.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(here >= lo - 1e-12 && here <= hi + 1e-12);
        }
    }
}

#[test]
fn test_lerp_3d_continuity() {
    let options = NoiseOptions::default()
        .with_dimensions(Dimensions::Three)
        .with_range(-1.0, 1.0);
    let raw = noise(options.clone());
    let smooth = noise(options.with_lerp(true));
    for i in -10..10 {
        let p = (i, 2 * i, -i);
        assert_eq!(smooth.sample(p), raw.sample(p));
        let centre = (i as f64 + 0.5, 2.0 * i as f64 + 0.5, -i as f64 + 0.5);
        let mut mean = 0.0;
        for dx in 0..2 {
            for dy in 0..2 {
                for dz in 0..2 {
                    mean += raw.sample((i + dx, 2 * i + dy, -i + dz)) / 8.0;
                }
            }
        }
        assert_relative_eq!(smooth.sample(centre), mean, epsilon = 1e-9);
    }
}

#[test]
fn test_4d_lerp_is_rejected() {
    let result = Noise::new(
        NoiseOptions::default()
            .with_dimensions(Dimensions::Four)
            .with_lerp(true),
    );
    assert_eq!(result.unwrap_err(), NoiseError::UnsupportedInterpolation(4));
}

// ========================================
// Octaves
// ========================================

#[test]
fn test_octave_pairs() {
    let n = noise(NoiseOptions::default().with_octave(1));
    for i in -500..500 {
        assert_eq!(n.sample(2 * i), n.sample(2 * i + 1));
    }
}

#[test]
fn test_octave_blocks_in_two_dimensions() {
    let n = noise(
        NoiseOptions::default()
            .with_dimensions(Dimensions::Two)
            .with_octave(3),
    );
    // Octaves act on the folded scalar, so runs along x stay constant
    for x in 0..8 {
        assert_eq!(n.sample((x, 0)), n.sample((0, 0)));
    }
    assert_ne!(n.sample((8, 0)), n.sample((0, 0)));
}

// ========================================
// Samplers
// ========================================

#[test]
fn test_weighted_pick_pin() {
    let pick = ListPick::weighted(
        vec!["a", "b", "c"],
        &[1.0, 1.0, 2.0],
        NoiseOptions::default().with_seed(3),
    )
    .unwrap();
    assert_eq!(pick.sample(0), "c");
}

#[test]
fn test_ball_uniformity() {
    let ball = Ball::new(NoiseOptions::default())
        .unwrap()
        .with_radii(10.0, 20.0)
        .unwrap();
    let n = 100_000;
    let mut bins = [0usize; 10];
    for [x, y, z] in ball.sequence().take(n) {
        let d = (x * x + y * y + z * z).sqrt();
        assert!(d >= 10.0 - 1e-9 && d <= 20.0 + 1e-9);
        let k = ((d.powi(3) - 1_000.0) / 7_000.0 * 10.0) as usize;
        bins[k.min(9)] += 1;
    }
    for &count in &bins {
        let deviation = (count as f64 - 10_000.0).abs() / 10_000.0;
        assert!(deviation < 0.1, "{:?}", bins);
    }
}

#[test]
fn test_unit_ball_and_disc_radii() {
    let ball = Ball::new(NoiseOptions::default().with_seed(123)).unwrap();
    let disc = Disc::new(NoiseOptions::default().with_seed(123)).unwrap();
    for i in 0..10_000 {
        let [x, y, z] = ball.sample(i);
        assert!((x * x + y * y + z * z).sqrt() <= 1.0 + 1e-12);
        let [x, y] = disc.sample(i);
        assert!(x.hypot(y) <= 1.0 + 1e-12);
    }
}

#[test]
fn test_sphere_points_have_unit_length() {
    let sphere = UnitSphere::new(NoiseOptions::default().with_dimensions(Dimensions::Two)).unwrap();
    for x in 0..50 {
        for y in 0..50 {
            let [a, b, c] = sphere.sample((x, y));
            assert_relative_eq!((a * a + b * b + c * c).sqrt(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_poisson_mean() {
    let poisson = Poisson::new(2.0, NoiseOptions::default()).unwrap();
    let n = 10_000;
    let sum: u32 = poisson.sequence().take(n).sum();
    let expected = 2.0 * n as f64;
    assert!((sum as f64 - expected).abs() < 0.05 * expected, "sum {}", sum);
}

#[test]
fn test_poisson_lambda_gate() {
    assert_eq!(
        Poisson::new(-1.0, NoiseOptions::default()).unwrap_err(),
        NoiseError::InvalidLambda(-1.0)
    );
    assert_eq!(
        Poisson::new(50.0, NoiseOptions::default()).unwrap_err(),
        NoiseError::InvalidLambda(50.0)
    );
}

#[test]
fn test_normal_moments() {
    let normal = Normal::new(NoiseOptions::default()).unwrap();
    let n = 100_000;
    let values: Vec<f64> = normal.sequence().take(n).collect();
    let mean = values.iter().sum::<f64>() / n as f64;
    let sd = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64).sqrt();
    assert!(mean.abs() < 0.01 && (sd - 1.0).abs() < 0.01, "mean {} sd {}", mean, sd);
}

#[test]
fn test_dice_never_zero() {
    let dice = Dice::parse("3d6", NoiseOptions::default()).unwrap();
    for total in dice.sequence().take(10_000) {
        assert!((3..=18).contains(&total));
    }
}

#[test]
fn test_invalid_constructions() {
    assert_eq!(
        ListPick::<i32>::uniform(vec![], NoiseOptions::default()).unwrap_err(),
        NoiseError::EmptyList
    );
    assert!(matches!(
        ListPick::weighted(vec![1, 2], &[1.0, -2.0], NoiseOptions::default()),
        Err(NoiseError::InvalidWeight { index: 1, .. })
    ));
    assert!(matches!(
        Dice::new(&[0], NoiseOptions::default()),
        Err(NoiseError::InvalidDice(_))
    ));
    assert!(matches!(
        Noise::new(NoiseOptions::default().with_range(f64::NEG_INFINITY, 0.0)),
        Err(NoiseError::InvalidRange { .. })
    ));
}
