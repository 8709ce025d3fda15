//! 8 × f32 kernels on a 256-bit `__m256` register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::f32x4;

pub(crate) type Packed = __m256;

#[inline(always)]
pub(crate) fn zero() -> Packed {
    unsafe { _mm256_setzero_ps() }
}

#[inline(always)]
pub(crate) fn splat(value: f32) -> Packed {
    unsafe { _mm256_broadcast_ss(&value) }
}

#[inline(always)]
pub(crate) fn from_array(lanes: [f32; 8]) -> Packed {
    unsafe {
        _mm256_setr_ps(
            lanes[0], lanes[1], lanes[2], lanes[3], lanes[4], lanes[5], lanes[6], lanes[7],
        )
    }
}

#[inline(always)]
pub(crate) fn to_array(packed: Packed) -> [f32; 8] {
    // SAFETY: same size, every bit pattern valid for both.
    unsafe { std::mem::transmute::<Packed, [f32; 8]>(packed) }
}

/// # Safety
///
/// `ptr` must be 32-byte aligned and point to 8 readable `f32`.
#[inline(always)]
pub(crate) unsafe fn load(ptr: *const f32) -> Packed {
    _mm256_load_ps(ptr)
}

/// # Safety
///
/// `ptr` must point to 8 readable `f32`.
#[inline(always)]
pub(crate) unsafe fn loadu(ptr: *const f32) -> Packed {
    _mm256_loadu_ps(ptr)
}

/// # Safety
///
/// `ptr` must be 32-byte aligned and point to 8 writable `f32`.
#[inline(always)]
pub(crate) unsafe fn store(ptr: *mut f32, packed: Packed) {
    _mm256_store_ps(ptr, packed)
}

/// # Safety
///
/// `ptr` must point to 8 writable `f32`.
#[inline(always)]
pub(crate) unsafe fn storeu(ptr: *mut f32, packed: Packed) {
    _mm256_storeu_ps(ptr, packed)
}

/// # Safety
///
/// `ptr` must be 32-byte aligned and point to 8 writable `f32`.
#[inline(always)]
pub(crate) unsafe fn stream(ptr: *mut f32, packed: Packed) {
    _mm256_stream_ps(ptr, packed);
    _mm_sfence();
}

#[inline(always)]
pub(crate) fn add(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_add_ps(a, b) }
}

#[inline(always)]
pub(crate) fn sub(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_sub_ps(a, b) }
}

#[inline(always)]
pub(crate) fn mul(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_mul_ps(a, b) }
}

#[inline(always)]
pub(crate) fn div(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_div_ps(a, b) }
}

#[inline(always)]
pub(crate) fn and(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_and_ps(a, b) }
}

#[inline(always)]
pub(crate) fn or(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_or_ps(a, b) }
}

#[inline(always)]
pub(crate) fn xor(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_xor_ps(a, b) }
}

#[inline(always)]
pub(crate) fn abs(a: Packed) -> Packed {
    unsafe { _mm256_andnot_ps(_mm256_set1_ps(-0.0), a) }
}

#[inline(always)]
pub(crate) fn round(a: Packed) -> Packed {
    unsafe { _mm256_round_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(a) }
}

#[inline(always)]
pub(crate) fn ceil(a: Packed) -> Packed {
    unsafe { _mm256_ceil_ps(a) }
}

#[inline(always)]
pub(crate) fn floor(a: Packed) -> Packed {
    unsafe { _mm256_floor_ps(a) }
}

#[inline(always)]
pub(crate) fn trunc(a: Packed) -> Packed {
    unsafe { _mm256_round_ps::<{ _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC }>(a) }
}

#[inline(always)]
pub(crate) fn sqrt(a: Packed) -> Packed {
    unsafe { _mm256_sqrt_ps(a) }
}

#[inline(always)]
pub(crate) fn eq_all(a: Packed, b: Packed) -> bool {
    unsafe { _mm256_movemask_ps(_mm256_cmp_ps::<_CMP_EQ_OQ>(a, b)) == 0xFF }
}

/// Folds the high half onto the low half, then reduces the resulting
/// 4 lanes as `(q0 + q2) + (q1 + q3)`.
///
/// `permute2f128` + `hadd` would be shorter but is slower on most cores.
#[inline(always)]
pub(crate) fn sum(a: Packed) -> f32 {
    unsafe {
        let hi = _mm256_extractf128_ps::<1>(a);
        let lo = _mm256_castps256_ps128(a);
        let quad = _mm_add_ps(lo, hi);
        let dual = _mm_add_ps(quad, _mm_movehl_ps(quad, quad));
        let single = _mm_add_ss(dual, _mm_shuffle_ps::<0b01>(dual, dual));
        _mm_cvtss_f32(single)
    }
}

#[inline(always)]
pub(crate) fn fmadd(a: Packed, b: Packed, c: Packed) -> Packed {
    unsafe { _mm256_fmadd_ps(a, b, c) }
}

#[inline(always)]
pub(crate) fn fmsub(a: Packed, b: Packed, c: Packed) -> Packed {
    unsafe { _mm256_fmsub_ps(a, b, c) }
}

#[inline(always)]
pub(crate) fn from_halves(lo: f32x4::Packed, hi: f32x4::Packed) -> Packed {
    unsafe { _mm256_insertf128_ps::<1>(_mm256_castps128_ps256(lo), hi) }
}

#[inline(always)]
pub(crate) fn low(a: Packed) -> f32x4::Packed {
    unsafe { _mm256_castps256_ps128(a) }
}

#[inline(always)]
pub(crate) fn high(a: Packed) -> f32x4::Packed {
    unsafe { _mm256_extractf128_ps::<1>(a) }
}

/// Broadcasts lane pairs `(2k, 2k + 1)` of `a` into `[a[2k] × 4, a[2k + 1] × 4]`
/// for k = 0..4.
#[inline(always)]
pub(crate) fn unpack8x4(a: Packed) -> [Packed; 4] {
    unsafe {
        let lo = _mm256_castps256_ps128(a);
        let hi = _mm256_extractf128_ps::<1>(a);

        [
            from_halves(
                _mm_permute_ps::<0b00_00_00_00>(lo),
                _mm_permute_ps::<0b01_01_01_01>(lo),
            ),
            from_halves(
                _mm_permute_ps::<0b10_10_10_10>(lo),
                _mm_permute_ps::<0b11_11_11_11>(lo),
            ),
            from_halves(
                _mm_permute_ps::<0b00_00_00_00>(hi),
                _mm_permute_ps::<0b01_01_01_01>(hi),
            ),
            from_halves(
                _mm_permute_ps::<0b10_10_10_10>(hi),
                _mm_permute_ps::<0b11_11_11_11>(hi),
            ),
        ]
    }
}
