//! Behavioural tests for `Vec4xF64`, including the reference examples with a
//! 1e-6 absolute tolerance per lane.

use lanewise::{AlignedBuf, SimdLoad, SimdStore, Vec4xF64};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-6;

fn assert_lanes_close(actual: Vec4xF64, expected: [f64; 4]) {
    for (lane, (a, e)) in actual.to_array().iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() < TOLERANCE,
            "lane {lane}: expected {e}, got {a}"
        );
    }
}

#[test]
fn test_addition_example() {
    let a = Vec4xF64::from_lanes(0.0001, -2355.5, 42872.0, 0.29343);
    let b = Vec4xF64::from_lanes(0.0064, 64.5, 9125.0, -34965.0);
    assert_lanes_close(a + b, [0.0065, -2291.0, 51997.0, -34964.70657]);
}

#[test]
fn test_subtraction_and_multiplication() {
    let a = Vec4xF64::from_lanes(0.0001, -2355.5, 42872.0, 0.29343);
    let b = Vec4xF64::from_lanes(0.0064, 64.5, 9125.0, -34965.0);

    assert_lanes_close(a - b, [-0.0063, -2420.0, 33747.0, 34965.29343]);
    assert_lanes_close(a * b, [0.00000064, -151929.75, 391207000.0, -10259.77995]);
}

#[test]
fn test_division_example() {
    let a = Vec4xF64::from_lanes(0.0064, -2355.5, 42872.0, -34965.0);
    let b = Vec4xF64::from_lanes(0.0001, 64.5, 9125.0, 0.29343);
    assert_lanes_close(
        a / b,
        [64.0, -36.5193798449612, 4.698301369863014, -119159.5951334219],
    );
}

#[test]
fn test_scalar_broadcast_operands() {
    let a = Vec4xF64::from_lanes(1.0, -2.0, 4.0, 8.0);

    assert_eq!((a + 0.5).to_array(), [1.5, -1.5, 4.5, 8.5]);
    assert_eq!((a - 1.0).to_array(), [0.0, -3.0, 3.0, 7.0]);
    assert_eq!((a * -2.0).to_array(), [-2.0, 4.0, -8.0, -16.0]);
    assert_eq!((a / 4.0).to_array(), [0.25, -0.5, 1.0, 2.0]);
}

#[test]
fn test_sum_examples() {
    assert_eq!(Vec4xF64::from_lanes(1.0, 2.0, 3.0, 4.0).sum(), 10.0);

    let v = Vec4xF64::from_lanes(0.0001, -2355.5, 42872.0, 0.29343);
    assert!((v.sum() - 40516.79353).abs() < TOLERANCE);
}

#[test]
fn test_default_and_epsilon() {
    let zero = Vec4xF64::default();
    assert!(zero.to_array().iter().all(|l| l.to_bits() == 0));
    assert_ne!(zero, Vec4xF64::splat(1e-300));
}

#[test]
fn test_storage_roundtrip_through_aligned_buffer() {
    let mut buf = AlignedBuf::<f64>::for_vector::<Vec4xF64>(12).unwrap();
    let vectors = [
        Vec4xF64::from_lanes(13.37, 9344.01, 12211.59, -340.007),
        Vec4xF64::from_lanes(0.0001, 956.112, -4350.555, -1.11111111111),
        Vec4xF64::splat(-0.0),
    ];

    for (i, v) in vectors.iter().enumerate() {
        unsafe { v.store_temporal(buf.as_mut_ptr().add(4 * i)) };
    }

    for (i, v) in vectors.iter().enumerate() {
        let back = unsafe { Vec4xF64::from_ptr(buf.as_ptr().add(4 * i)) };
        assert_eq!(back.to_array().map(f64::to_bits), v.to_array().map(f64::to_bits));
    }
}

#[test]
fn test_trait_entry_points_pick_by_alignment() {
    let mut buf = AlignedBuf::<f64>::for_vector::<Vec4xF64>(9).unwrap();
    buf.iter_mut().enumerate().for_each(|(i, x)| *x = i as f64);

    let aligned = unsafe { Vec4xF64::load_at(buf.as_ptr()) };
    let shifted = unsafe { Vec4xF64::load_at(buf.as_ptr().add(1)) };
    assert_eq!(aligned.to_array(), [0.0, 1.0, 2.0, 3.0]);
    assert_eq!(shifted.to_array(), [1.0, 2.0, 3.0, 4.0]);

    unsafe { shifted.stream_at(buf.as_mut_ptr().add(4)) };
    unsafe { aligned.store_at(buf.as_mut_ptr().add(5)) };
    assert_eq!(&buf[4..], &[1.0, 0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_random_ops_match_scalar() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..1_000 {
        let a: [f64; 4] = std::array::from_fn(|_| rng.random_range(-1e6..=1e6));
        let b: [f64; 4] = std::array::from_fn(|_| rng.random_range(-1e6..=1e6));
        let c: [f64; 4] = std::array::from_fn(|_| rng.random_range(-1e6..=1e6));
        let (va, vb, vc) = (Vec4xF64::from(a), Vec4xF64::from(b), Vec4xF64::from(c));

        let sum = (va + vb).to_array();
        let quotient = (va / vb).to_array();
        let fused = Vec4xF64::fma(va, vb, vc).to_array();
        let rounded = va.round().to_array();

        for lane in 0..4 {
            assert_eq!(sum[lane], a[lane] + b[lane]);
            assert_eq!(quotient[lane], a[lane] / b[lane]);
            assert_eq!(fused[lane], a[lane].mul_add(b[lane], c[lane]));
            assert_eq!(rounded[lane], a[lane].round_ties_even());
        }

        let tree = (a[0] + a[1]) + (a[2] + a[3]);
        assert_eq!(va.sum(), tree);
    }
}

#[test]
fn test_equality_semantics() {
    let a = Vec4xF64::from_lanes(1.0, 2.0, 3.0, 4.0);
    assert_eq!(a, Vec4xF64::from([1.0, 2.0, 3.0, 4.0]));
    assert_ne!(a, Vec4xF64::from_lanes(1.0, 2.0, 3.0, 5.0));
    assert_eq!(Vec4xF64::splat(0.0), Vec4xF64::splat(-0.0));

    let with_nan = Vec4xF64::from_lanes(1.0, f64::NAN, 3.0, 4.0);
    assert!(with_nan != with_nan);
    assert!(!(with_nan == a));
}

#[test]
fn test_bitwise_and_compound_ops() {
    let mut v = Vec4xF64::splat(3.0);
    v += Vec4xF64::splat(1.0);
    v *= 0.5;
    v -= 1.0;
    v /= Vec4xF64::splat(2.0);
    assert_eq!(v, Vec4xF64::splat(0.5));

    let sign = Vec4xF64::splat(-0.0);
    let negated = -v;
    assert_eq!(negated, Vec4xF64::splat(-0.5));
    assert_eq!(negated & sign, sign);
    assert_eq!(negated ^ sign, v);
    assert_eq!(v | sign, negated);
    assert_eq!(negated.abs(), v);

    let mut masked = negated;
    masked &= Vec4xF64::splat(f64::from_bits(!(1u64 << 63)));
    assert_eq!(masked, v);
    masked |= sign;
    assert_eq!(masked, negated);
    masked ^= sign;
    assert_eq!(masked, v);
}

#[test]
fn test_random_unary_ops_match_scalar() {
    let mut rng = StdRng::seed_from_u64(64);

    for _ in 0..256 {
        let lanes: [f64; 4] = std::array::from_fn(|_| rng.random_range(-1.0e6..1.0e6));
        let v = Vec4xF64::from(lanes);

        let abs = v.abs().to_array();
        let neg = (-v).to_array();
        let sqrt = v.sqrt().to_array();
        for lane in 0..4 {
            assert_eq!(abs[lane], lanes[lane].abs());
            assert_eq!(neg[lane], -lanes[lane]);
            if lanes[lane] < 0.0 {
                assert!(sqrt[lane].is_nan());
            } else {
                assert_eq!(sqrt[lane], lanes[lane].sqrt());
            }
        }

        let mut broadcast = v;
        broadcast.set(&lanes[0]);
        assert_eq!(broadcast.to_array(), [lanes[0]; 4]);
    }
}
