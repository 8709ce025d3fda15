//! Behavioural tests for `Vec8xF32`: the common vector contract plus the
//! half split/join and the pair-broadcast unpack.

use lanewise::{AlignedBuf, Vec4xF32, Vec8xF32};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_lanes(rng: &mut StdRng) -> [f32; 8] {
    std::array::from_fn(|_| rng.random_range(-1000.0..=1000.0))
}

#[test]
fn test_halves_compose_to_identity() {
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..200 {
        let lanes = random_lanes(&mut rng);
        let v = Vec8xF32::from(lanes);

        assert_eq!(v.low().to_array(), [lanes[0], lanes[1], lanes[2], lanes[3]]);
        assert_eq!(v.high().to_array(), [lanes[4], lanes[5], lanes[6], lanes[7]]);
        assert_eq!(Vec8xF32::from_halves(v.low(), v.high()).to_array(), lanes);
    }
}

#[test]
fn test_from_halves_of_distinct_vectors() {
    let lo = Vec4xF32::from_lanes(1.0, 2.0, 3.0, 4.0);
    let hi = Vec4xF32::from_lanes(-1.0, -2.0, -3.0, -4.0);
    let v = Vec8xF32::from_halves(lo, hi);

    assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0, -1.0, -2.0, -3.0, -4.0]);
    assert_eq!(v.low(), lo);
    assert_eq!(v.high(), hi);
}

#[test]
fn test_unpack8x4_of_one_to_eight() {
    let v = Vec8xF32::from_lanes(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    let mut a = Vec8xF32::new();
    let mut b = Vec8xF32::new();
    let mut c = Vec8xF32::new();
    let mut d = Vec8xF32::new();

    v.unpack8x4(&mut a, &mut b, &mut c, &mut d);

    assert_eq!(a.to_array(), [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]);
    assert_eq!(b.to_array(), [3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0]);
    assert_eq!(c.to_array(), [5.0, 5.0, 5.0, 5.0, 6.0, 6.0, 6.0, 6.0]);
    assert_eq!(d.to_array(), [7.0, 7.0, 7.0, 7.0, 8.0, 8.0, 8.0, 8.0]);
}

#[test]
fn test_unpack8x4_replicates_bits() {
    let v = Vec8xF32::from_lanes(
        -0.0,
        f32::MIN_POSITIVE,
        1e-45,
        -1e-45,
        0.1,
        -0.1,
        f32::MAX,
        -f32::MAX,
    );
    let source = v.to_array();

    for (k, out) in v.unpack8x4_array().iter().enumerate() {
        let out = out.to_array();
        for lane in 0..4 {
            assert_eq!(out[lane].to_bits(), source[2 * k].to_bits());
            assert_eq!(out[lane + 4].to_bits(), source[2 * k + 1].to_bits());
        }
    }
}

#[test]
fn test_unpack_feeds_outer_product() {
    // Each unpacked vector times a column yields two rows of a 4-wide outer
    // product; this is the shape of a packed matmul micro-kernel.
    let row = Vec8xF32::from_lanes(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    let col = Vec4xF32::from_lanes(1.0, 10.0, 100.0, 1000.0);
    let cols = Vec8xF32::from_halves(col, col);

    let products: Vec<[f32; 8]> = row
        .unpack8x4_array()
        .iter()
        .map(|v| (*v * cols).to_array())
        .collect();

    for (k, product) in products.iter().enumerate() {
        let r0 = (2 * k + 1) as f32;
        let r1 = (2 * k + 2) as f32;
        assert_eq!(product[..4], [r0, r0 * 10.0, r0 * 100.0, r0 * 1000.0]);
        assert_eq!(product[4..], [r1, r1 * 10.0, r1 * 100.0, r1 * 1000.0]);
    }
}

#[test]
fn test_storage_roundtrip() {
    let mut rng = StdRng::seed_from_u64(64);
    let mut buf = AlignedBuf::<f32>::for_vector::<Vec8xF32>(24).unwrap();

    for _ in 0..100 {
        let v = Vec8xF32::from(random_lanes(&mut rng));

        unsafe { v.store_nontemporal(buf.as_mut_ptr().add(8)) };
        let back = unsafe { Vec8xF32::from_ptr(buf.as_ptr().add(8)) };
        assert_eq!(back.to_array().map(f32::to_bits), v.to_array().map(f32::to_bits));

        unsafe { v.store_unaligned(buf.as_mut_ptr().add(13)) };
        let mut back = Vec8xF32::new();
        unsafe { back.load_unaligned(buf.as_ptr().add(13)) };
        assert_eq!(back.to_array().map(f32::to_bits), v.to_array().map(f32::to_bits));
    }
}

#[test]
fn test_ops_match_scalar_random() {
    let mut rng = StdRng::seed_from_u64(888);

    for _ in 0..1_000 {
        let a = random_lanes(&mut rng);
        let b = random_lanes(&mut rng);
        let (va, vb) = (Vec8xF32::from(a), Vec8xF32::from(b));

        let sum = (va + vb).to_array();
        let diff = (va - vb).to_array();
        let fused = Vec8xF32::fms(va, vb, va).to_array();
        let floor = va.floor().to_array();

        for lane in 0..8 {
            assert_eq!(sum[lane], a[lane] + b[lane]);
            assert_eq!(diff[lane], a[lane] - b[lane]);
            assert_eq!(fused[lane], a[lane].mul_add(b[lane], -a[lane]));
            assert_eq!(floor[lane], a[lane].floor());
        }
    }
}

#[test]
fn test_sum_close_to_sequential() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..1_000 {
        let a = random_lanes(&mut rng);
        let tree = Vec8xF32::from(a).sum() as f64;
        let sequential: f64 = a.iter().map(|x| *x as f64).sum();
        assert!((tree - sequential).abs() <= 2e-3, "{tree} vs {sequential}");
    }

    assert_eq!(Vec8xF32::splat(1.0).sum(), 8.0);
}

#[test]
fn test_bitwise_and_compound_ops() {
    let mut v = Vec8xF32::splat(3.0);
    v += Vec8xF32::splat(1.0);
    v *= 0.5;
    v -= 1.0;
    v /= Vec8xF32::splat(2.0);
    assert_eq!(v, Vec8xF32::splat(0.5));

    let negated = -v;
    assert_eq!(negated, Vec8xF32::splat(-0.5));
    assert_eq!((negated & Vec8xF32::splat(-0.0)), Vec8xF32::splat(-0.0));
    assert_eq!((negated ^ Vec8xF32::splat(-0.0)), v);
    assert_eq!(negated.abs(), v);
}

#[test]
fn test_debug_lists_lanes() {
    let v = Vec8xF32::splat(1.0);
    assert_eq!(
        format!("{v:?}"),
        "Vec8xF32([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0])"
    );
}
