//! 4 × f32 kernels on a 128-bit `__m128` register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pub(crate) type Packed = __m128;

#[inline(always)]
pub(crate) fn zero() -> Packed {
    unsafe { _mm_setzero_ps() }
}

#[inline(always)]
pub(crate) fn splat(value: f32) -> Packed {
    unsafe { _mm_broadcast_ss(&value) }
}

#[inline(always)]
pub(crate) fn from_array(lanes: [f32; 4]) -> Packed {
    unsafe { _mm_setr_ps(lanes[0], lanes[1], lanes[2], lanes[3]) }
}

#[inline(always)]
pub(crate) fn to_array(packed: Packed) -> [f32; 4] {
    // SAFETY: `__m128` and `[f32; 4]` have the same size and every bit
    // pattern is a valid value of both.
    unsafe { std::mem::transmute::<Packed, [f32; 4]>(packed) }
}

/// # Safety
///
/// `ptr` must be 16-byte aligned and point to 4 readable `f32`.
#[inline(always)]
pub(crate) unsafe fn load(ptr: *const f32) -> Packed {
    _mm_load_ps(ptr)
}

/// # Safety
///
/// `ptr` must point to 4 readable `f32`.
#[inline(always)]
pub(crate) unsafe fn loadu(ptr: *const f32) -> Packed {
    _mm_loadu_ps(ptr)
}

/// # Safety
///
/// `ptr` must be 16-byte aligned and point to 4 writable `f32`.
#[inline(always)]
pub(crate) unsafe fn store(ptr: *mut f32, packed: Packed) {
    _mm_store_ps(ptr, packed)
}

/// # Safety
///
/// `ptr` must point to 4 writable `f32`.
#[inline(always)]
pub(crate) unsafe fn storeu(ptr: *mut f32, packed: Packed) {
    _mm_storeu_ps(ptr, packed)
}

/// Non-temporal store followed by a store fence, so the values are globally
/// visible before any later load of the same buffer.
///
/// # Safety
///
/// `ptr` must be 16-byte aligned and point to 4 writable `f32`.
#[inline(always)]
pub(crate) unsafe fn stream(ptr: *mut f32, packed: Packed) {
    _mm_stream_ps(ptr, packed);
    _mm_sfence();
}

#[inline(always)]
pub(crate) fn add(a: Packed, b: Packed) -> Packed {
    unsafe { _mm_add_ps(a, b) }
}

#[inline(always)]
pub(crate) fn sub(a: Packed, b: Packed) -> Packed {
    unsafe { _mm_sub_ps(a, b) }
}

#[inline(always)]
pub(crate) fn mul(a: Packed, b: Packed) -> Packed {
    unsafe { _mm_mul_ps(a, b) }
}

#[inline(always)]
pub(crate) fn div(a: Packed, b: Packed) -> Packed {
    unsafe { _mm_div_ps(a, b) }
}

#[inline(always)]
pub(crate) fn and(a: Packed, b: Packed) -> Packed {
    unsafe { _mm_and_ps(a, b) }
}

#[inline(always)]
pub(crate) fn or(a: Packed, b: Packed) -> Packed {
    unsafe { _mm_or_ps(a, b) }
}

#[inline(always)]
pub(crate) fn xor(a: Packed, b: Packed) -> Packed {
    unsafe { _mm_xor_ps(a, b) }
}

/// Clears the sign bit of every lane.
#[inline(always)]
pub(crate) fn abs(a: Packed) -> Packed {
    unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), a) }
}

#[inline(always)]
pub(crate) fn round(a: Packed) -> Packed {
    unsafe { _mm_round_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(a) }
}

#[inline(always)]
pub(crate) fn ceil(a: Packed) -> Packed {
    unsafe { _mm_ceil_ps(a) }
}

#[inline(always)]
pub(crate) fn floor(a: Packed) -> Packed {
    unsafe { _mm_floor_ps(a) }
}

#[inline(always)]
pub(crate) fn trunc(a: Packed) -> Packed {
    unsafe { _mm_round_ps::<{ _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC }>(a) }
}

#[inline(always)]
pub(crate) fn sqrt(a: Packed) -> Packed {
    unsafe { _mm_sqrt_ps(a) }
}

/// Ordered equality on every lane; NaN never compares equal.
#[inline(always)]
pub(crate) fn eq_all(a: Packed, b: Packed) -> bool {
    unsafe { _mm_movemask_ps(_mm_cmpeq_ps(a, b)) == 0b1111 }
}

/// `(l0 + l1) + (l2 + l3)` via two horizontal adds.
#[inline(always)]
pub(crate) fn sum(a: Packed) -> f32 {
    unsafe {
        let pairs = _mm_hadd_ps(a, a);
        let total = _mm_hadd_ps(pairs, pairs);
        _mm_cvtss_f32(total)
    }
}

#[inline(always)]
pub(crate) fn fmadd(a: Packed, b: Packed, c: Packed) -> Packed {
    unsafe { _mm_fmadd_ps(a, b, c) }
}

#[inline(always)]
pub(crate) fn fmsub(a: Packed, b: Packed, c: Packed) -> Packed {
    unsafe { _mm_fmsub_ps(a, b, c) }
}
