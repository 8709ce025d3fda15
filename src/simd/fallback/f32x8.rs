//! 8 × f32 kernels on a `[f32; 8]` register.

use super::f32x4;

super::lane_kernels!(f32, u32, 8);

/// Folds the high half onto the low half (`q_i = l_i + l_{i+4}`), then
/// reduces as `(q0 + q2) + (q1 + q3)`.
#[inline(always)]
pub(crate) fn sum(a: Packed) -> f32 {
    let q: [f32; 4] = std::array::from_fn(|lane| a[lane] + a[lane + 4]);
    (q[0] + q[2]) + (q[1] + q[3])
}

#[inline(always)]
pub(crate) fn from_halves(lo: f32x4::Packed, hi: f32x4::Packed) -> Packed {
    std::array::from_fn(|lane| if lane < 4 { lo[lane] } else { hi[lane - 4] })
}

#[inline(always)]
pub(crate) fn low(a: Packed) -> f32x4::Packed {
    [a[0], a[1], a[2], a[3]]
}

#[inline(always)]
pub(crate) fn high(a: Packed) -> f32x4::Packed {
    [a[4], a[5], a[6], a[7]]
}

#[inline(always)]
pub(crate) fn unpack8x4(a: Packed) -> [Packed; 4] {
    std::array::from_fn(|block| {
        from_halves(f32x4::splat(a[2 * block]), f32x4::splat(a[2 * block + 1]))
    })
}
