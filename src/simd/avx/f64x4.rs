//! 4 × f64 kernels on a 256-bit `__m256d` register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pub(crate) type Packed = __m256d;

#[inline(always)]
pub(crate) fn zero() -> Packed {
    unsafe { _mm256_setzero_pd() }
}

#[inline(always)]
pub(crate) fn splat(value: f64) -> Packed {
    unsafe { _mm256_broadcast_sd(&value) }
}

#[inline(always)]
pub(crate) fn from_array(lanes: [f64; 4]) -> Packed {
    unsafe { _mm256_setr_pd(lanes[0], lanes[1], lanes[2], lanes[3]) }
}

#[inline(always)]
pub(crate) fn to_array(packed: Packed) -> [f64; 4] {
    // SAFETY: same size, every bit pattern valid for both.
    unsafe { std::mem::transmute::<Packed, [f64; 4]>(packed) }
}

/// # Safety
///
/// `ptr` must be 32-byte aligned and point to 4 readable `f64`.
#[inline(always)]
pub(crate) unsafe fn load(ptr: *const f64) -> Packed {
    _mm256_load_pd(ptr)
}

/// # Safety
///
/// `ptr` must point to 4 readable `f64`.
#[inline(always)]
pub(crate) unsafe fn loadu(ptr: *const f64) -> Packed {
    _mm256_loadu_pd(ptr)
}

/// # Safety
///
/// `ptr` must be 32-byte aligned and point to 4 writable `f64`.
#[inline(always)]
pub(crate) unsafe fn store(ptr: *mut f64, packed: Packed) {
    _mm256_store_pd(ptr, packed)
}

/// # Safety
///
/// `ptr` must point to 4 writable `f64`.
#[inline(always)]
pub(crate) unsafe fn storeu(ptr: *mut f64, packed: Packed) {
    _mm256_storeu_pd(ptr, packed)
}

/// # Safety
///
/// `ptr` must be 32-byte aligned and point to 4 writable `f64`.
#[inline(always)]
pub(crate) unsafe fn stream(ptr: *mut f64, packed: Packed) {
    _mm256_stream_pd(ptr, packed);
    _mm_sfence();
}

#[inline(always)]
pub(crate) fn add(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_add_pd(a, b) }
}

#[inline(always)]
pub(crate) fn sub(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_sub_pd(a, b) }
}

#[inline(always)]
pub(crate) fn mul(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_mul_pd(a, b) }
}

#[inline(always)]
pub(crate) fn div(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_div_pd(a, b) }
}

#[inline(always)]
pub(crate) fn and(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_and_pd(a, b) }
}

#[inline(always)]
pub(crate) fn or(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_or_pd(a, b) }
}

#[inline(always)]
pub(crate) fn xor(a: Packed, b: Packed) -> Packed {
    unsafe { _mm256_xor_pd(a, b) }
}

#[inline(always)]
pub(crate) fn abs(a: Packed) -> Packed {
    unsafe { _mm256_andnot_pd(_mm256_set1_pd(-0.0), a) }
}

#[inline(always)]
pub(crate) fn round(a: Packed) -> Packed {
    unsafe { _mm256_round_pd::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(a) }
}

#[inline(always)]
pub(crate) fn ceil(a: Packed) -> Packed {
    unsafe { _mm256_ceil_pd(a) }
}

#[inline(always)]
pub(crate) fn floor(a: Packed) -> Packed {
    unsafe { _mm256_floor_pd(a) }
}

#[inline(always)]
pub(crate) fn trunc(a: Packed) -> Packed {
    unsafe { _mm256_round_pd::<{ _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC }>(a) }
}

#[inline(always)]
pub(crate) fn sqrt(a: Packed) -> Packed {
    unsafe { _mm256_sqrt_pd(a) }
}

#[inline(always)]
pub(crate) fn eq_all(a: Packed, b: Packed) -> bool {
    unsafe { _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_EQ_OQ>(a, b)) == 0b1111 }
}

/// `(l0 + l1) + (l2 + l3)`: one in-lane horizontal add, then the two
/// 128-bit halves are combined.
#[inline(always)]
pub(crate) fn sum(a: Packed) -> f64 {
    unsafe {
        let pairs = _mm256_hadd_pd(a, a);
        let hi = _mm256_extractf128_pd::<1>(pairs);
        let lo = _mm256_castpd256_pd128(pairs);
        _mm_cvtsd_f64(_mm_add_sd(lo, hi))
    }
}

#[inline(always)]
pub(crate) fn fmadd(a: Packed, b: Packed, c: Packed) -> Packed {
    unsafe { _mm256_fmadd_pd(a, b, c) }
}

#[inline(always)]
pub(crate) fn fmsub(a: Packed, b: Packed, c: Packed) -> Packed {
    unsafe { _mm256_fmsub_pd(a, b, c) }
}
