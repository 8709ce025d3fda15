//! 8-lane f32 vector.
//!
//! [`Vec8xF32`] holds 8 single-precision lanes in one 256-bit register. On
//! top of the common vector surface it can be split into and joined from two
//! [`Vec4xF32`] halves, and [`Vec8xF32::unpack8x4`] broadcasts lane pairs
//! into four 8-lane vectors (the building block of 4-wide outer products).
//!
//! # Memory Layout
//!
//! - **Size**: 32 bytes, 8 consecutive `f32`, no padding
//! - **Alignment**: 32 bytes ([`ALIGNMENT`])
//! - **Lane order**: `e0` at the lowest address, `e0..e3` form the low half
//!
//! # Example
//!
//! ```rust
//! use lanewise::simd::{Vec4xF32, Vec8xF32};
//!
//! let v = Vec8xF32::from_lanes(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
//! assert_eq!(v.low().to_array(), [1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(v.high().to_array(), [5.0, 6.0, 7.0, 8.0]);
//! assert_eq!(Vec8xF32::from_halves(v.low(), v.high()), v);
//!
//! let [a, _, _, d] = v.unpack8x4_array();
//! assert_eq!(a.to_array(), [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]);
//! assert_eq!(d.to_array(), [7.0, 7.0, 7.0, 7.0, 8.0, 8.0, 8.0, 8.0]);
//! ```

use crate::simd::backend::f32x8;
use crate::simd::Vec4xF32;

/// Alignment boundary in bytes for the aligned load/store entry points.
pub const ALIGNMENT: usize = 32;

/// Number of f32 lanes in a [`Vec8xF32`].
pub const LANE_COUNT: usize = 8;

/// Eight packed `f32` lanes.
#[derive(Copy, Clone)]
#[repr(C, align(32))]
pub struct Vec8xF32 {
    packed: f32x8::Packed,
}

impl Vec8xF32 {
    /// All lanes `+0.0`.
    #[inline(always)]
    pub fn new() -> Self {
        Self::from_packed(f32x8::zero())
    }

    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self::from_packed(f32x8::splat(value))
    }

    /// Lanes in argument order, `e0` first.
    #[allow(clippy::too_many_arguments)]
    #[inline(always)]
    pub fn from_lanes(
        e0: f32,
        e1: f32,
        e2: f32,
        e3: f32,
        e4: f32,
        e5: f32,
        e6: f32,
        e7: f32,
    ) -> Self {
        Self::from_packed(f32x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7]))
    }

    /// Joins two 4-lane halves: `lo` becomes `e0..e3`, `hi` becomes `e4..e7`.
    #[inline(always)]
    pub fn from_halves(lo: Vec4xF32, hi: Vec4xF32) -> Self {
        Self::from_packed(f32x8::from_halves(lo.packed(), hi.packed()))
    }

    /// Loads 8 lanes from 32-byte aligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and point to at least 8 readable `f32`.
    #[inline(always)]
    pub unsafe fn from_ptr(ptr: *const f32) -> Self {
        let mut vector = Self::new();
        vector.load(ptr);
        vector
    }

    #[inline(always)]
    pub(crate) fn from_packed(packed: f32x8::Packed) -> Self {
        Self { packed }
    }

    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and point to at least 8 readable `f32`.
    #[inline(always)]
    pub unsafe fn load(&mut self, ptr: *const f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        self.packed = f32x8::load(ptr);
    }

    /// # Safety
    ///
    /// `ptr` must point to at least 8 readable `f32`.
    #[inline(always)]
    pub unsafe fn load_unaligned(&mut self, ptr: *const f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        self.packed = f32x8::loadu(ptr);
    }

    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and point to at least 8 writable `f32`.
    #[inline(always)]
    pub unsafe fn store_temporal(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        f32x8::store(ptr, self.packed)
    }

    /// Streaming store, bypasses the cache.
    ///
    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and point to at least 8 writable `f32`.
    #[inline(always)]
    pub unsafe fn store_nontemporal(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        f32x8::stream(ptr, self.packed)
    }

    /// # Safety
    ///
    /// `ptr` must point to at least 8 writable `f32`.
    #[inline(always)]
    pub unsafe fn store_unaligned(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        f32x8::storeu(ptr, self.packed)
    }

    /// # Safety
    ///
    /// Same contract as [`Vec8xF32::store_nontemporal`].
    #[deprecated(note = "use `store_nontemporal` or `store_temporal`")]
    #[inline(always)]
    pub unsafe fn store(&self, ptr: *mut f32) {
        self.store_nontemporal(ptr)
    }

    #[inline(always)]
    pub fn set(&mut self, value: &f32) {
        self.packed = f32x8::splat(*value);
    }

    #[allow(clippy::too_many_arguments)]
    #[inline(always)]
    pub fn set_lanes(
        &mut self,
        e0: f32,
        e1: f32,
        e2: f32,
        e3: f32,
        e4: f32,
        e5: f32,
        e6: f32,
        e7: f32,
    ) {
        self.packed = f32x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7]);
    }

    /// Lanes `e0..e3`.
    #[inline(always)]
    pub fn low(&self) -> Vec4xF32 {
        Vec4xF32::from_packed(f32x8::low(self.packed))
    }

    /// Lanes `e4..e7`.
    #[inline(always)]
    pub fn high(&self) -> Vec4xF32 {
        Vec4xF32::from_packed(f32x8::high(self.packed))
    }

    /// Broadcasts lane pairs into four vectors:
    ///
    /// ```text
    /// a = [e0 e0 e0 e0 | e1 e1 e1 e1]
    /// b = [e2 e2 e2 e2 | e3 e3 e3 e3]
    /// c = [e4 e4 e4 e4 | e5 e5 e5 e5]
    /// d = [e6 e6 e6 e6 | e7 e7 e7 e7]
    /// ```
    ///
    /// `self` is left unchanged.
    #[inline(always)]
    pub fn unpack8x4(&self, a: &mut Self, b: &mut Self, c: &mut Self, d: &mut Self) {
        let [pa, pb, pc, pd] = f32x8::unpack8x4(self.packed);
        a.packed = pa;
        b.packed = pb;
        c.packed = pc;
        d.packed = pd;
    }

    /// Same as [`Vec8xF32::unpack8x4`], returning `[a, b, c, d]`.
    #[inline(always)]
    pub fn unpack8x4_array(&self) -> [Self; 4] {
        f32x8::unpack8x4(self.packed).map(Self::from_packed)
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 8] {
        f32x8::to_array(self.packed)
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 8] {
        // SAFETY: single 32-byte field, 8 consecutive f32 on every backend.
        unsafe { &*(self as *const Self as *const [f32; 8]) }
    }

    #[inline(always)]
    pub fn e0(&self) -> f32 {
        self.as_array()[0]
    }

    #[inline(always)]
    pub fn e1(&self) -> f32 {
        self.as_array()[1]
    }

    #[inline(always)]
    pub fn e2(&self) -> f32 {
        self.as_array()[2]
    }

    #[inline(always)]
    pub fn e3(&self) -> f32 {
        self.as_array()[3]
    }

    #[inline(always)]
    pub fn e4(&self) -> f32 {
        self.as_array()[4]
    }

    #[inline(always)]
    pub fn e5(&self) -> f32 {
        self.as_array()[5]
    }

    #[inline(always)]
    pub fn e6(&self) -> f32 {
        self.as_array()[6]
    }

    #[inline(always)]
    pub fn e7(&self) -> f32 {
        self.as_array()[7]
    }

    /// Rounds to nearest, ties to even.
    #[inline(always)]
    pub fn round(self) -> Self {
        Self::from_packed(f32x8::round(self.packed))
    }

    #[inline(always)]
    pub fn ceil(self) -> Self {
        Self::from_packed(f32x8::ceil(self.packed))
    }

    #[inline(always)]
    pub fn floor(self) -> Self {
        Self::from_packed(f32x8::floor(self.packed))
    }

    #[inline(always)]
    pub fn trunc(self) -> Self {
        Self::from_packed(f32x8::trunc(self.packed))
    }

    #[inline(always)]
    pub fn sqrt(self) -> Self {
        Self::from_packed(f32x8::sqrt(self.packed))
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        Self::from_packed(f32x8::abs(self.packed))
    }

    /// Sum of all lanes. The high half is folded onto the low half first
    /// (`q_i = e_i + e_{i+4}`), then `(q0 + q2) + (q1 + q3)`.
    #[inline(always)]
    pub fn sum(self) -> f32 {
        f32x8::sum(self.packed)
    }

    /// `a * b + c`, fused.
    #[inline(always)]
    pub fn fma(a: Self, b: Self, c: Self) -> Self {
        Self::from_packed(f32x8::fmadd(a.packed, b.packed, c.packed))
    }

    /// `a * b - c`, fused.
    #[inline(always)]
    pub fn fms(a: Self, b: Self, c: Self) -> Self {
        Self::from_packed(f32x8::fmsub(a.packed, b.packed, c.packed))
    }
}

impl_vector_ops!(Vec8xF32, f32, 8, f32x8);
impl_simd_traits!(Vec8xF32, f32, 8, 32, f32x8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{Alignment, SimdLoad, SimdStore};

    #[repr(C, align(32))]
    struct Aligned([f32; 16]);

    fn iota() -> Vec8xF32 {
        Vec8xF32::from_lanes(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0)
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn test_size_and_alignment() {
            assert_eq!(std::mem::size_of::<Vec8xF32>(), 32);
            assert_eq!(std::mem::align_of::<Vec8xF32>(), ALIGNMENT);
        }

        #[test]
        fn test_is_aligned_32_byte_boundary() {
            let buffer = Aligned([0.0; 16]);
            let ptr = buffer.0.as_ptr();

            assert!(Vec8xF32::is_aligned(ptr));
            assert!(!Vec8xF32::is_aligned(unsafe { ptr.add(4) }));
            assert!(Vec8xF32::is_aligned(unsafe { ptr.add(8) }));
        }
    }

    mod lane_tests {
        use super::*;

        #[test]
        fn test_named_lanes_follow_from_lanes() {
            let v = Vec8xF32::from_lanes(-1.5, 2.0, 3.25, -0.0, 5.0, 6.5, f32::INFINITY, 8.0);
            let named = [v.e0(), v.e1(), v.e2(), v.e3(), v.e4(), v.e5(), v.e6(), v.e7()];

            assert_eq!(named, v.to_array());
            assert_eq!(v.e3().to_bits(), (-0.0f32).to_bits());
            for (i, lane) in named.iter().enumerate() {
                assert_eq!(*lane, v[i]);
            }
        }

        #[test]
        fn test_named_lanes_see_set_lanes() {
            let mut v = iota();
            v.set_lanes(8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0);
            assert_eq!(v.e0(), 8.0);
            assert_eq!(v.e4(), 4.0);
            assert_eq!(v.e7(), 1.0);
        }
    }

    mod halves_tests {
        use super::*;

        #[test]
        fn test_low_and_high() {
            let v = iota();
            assert_eq!(v.low().to_array(), [1.0, 2.0, 3.0, 4.0]);
            assert_eq!(v.high().to_array(), [5.0, 6.0, 7.0, 8.0]);
        }

        #[test]
        fn test_split_join_roundtrip() {
            let v = Vec8xF32::from_lanes(-0.0, 1.5, f32::MAX, -7.25, 1e-30, 3.0, -3.0, 0.1);
            let joined = Vec8xF32::from_halves(v.low(), v.high());
            assert_eq!(joined.to_array(), v.to_array());
            assert!(joined.to_array()[0].is_sign_negative());
        }

        #[test]
        fn test_from_halves_order() {
            let lo = Vec4xF32::splat(1.0);
            let hi = Vec4xF32::splat(2.0);
            assert_eq!(
                Vec8xF32::from_halves(lo, hi).to_array(),
                [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]
            );
        }
    }

    mod unpack_tests {
        use super::*;

        #[test]
        fn test_unpack8x4_out_params() {
            let v = iota();
            let (mut a, mut b, mut c, mut d) = (
                Vec8xF32::new(),
                Vec8xF32::new(),
                Vec8xF32::new(),
                Vec8xF32::new(),
            );
            v.unpack8x4(&mut a, &mut b, &mut c, &mut d);

            assert_eq!(a.to_array(), [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]);
            assert_eq!(b.to_array(), [3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0]);
            assert_eq!(c.to_array(), [5.0, 5.0, 5.0, 5.0, 6.0, 6.0, 6.0, 6.0]);
            assert_eq!(d.to_array(), [7.0, 7.0, 7.0, 7.0, 8.0, 8.0, 8.0, 8.0]);
            assert_eq!(v, iota());
        }

        #[test]
        fn test_unpack8x4_array_matches_out_params() {
            let v = Vec8xF32::from_lanes(0.5, -1.0, 2.5, -3.0, 4.5, -5.0, 6.5, -7.0);
            let mut out = [Vec8xF32::new(); 4];
            let [a, b, c, d] = &mut out;
            v.unpack8x4(a, b, c, d);

            assert_eq!(v.unpack8x4_array(), out);
        }
    }

    mod load_store_tests {
        use super::*;

        #[test]
        fn test_aligned_roundtrip() {
            let mut buffer = Aligned([0.0; 16]);
            for (i, lane) in buffer.0.iter_mut().enumerate() {
                *lane = i as f32 * 0.5;
            }

            let v = unsafe { Vec8xF32::from_ptr(buffer.0.as_ptr().add(8)) };
            assert_eq!(&v.to_array(), &buffer.0[8..]);

            let mut out = Aligned([0.0; 16]);
            unsafe {
                v.store_temporal(out.0.as_mut_ptr());
                v.store_nontemporal(out.0.as_mut_ptr().add(8));
            }
            assert_eq!(&out.0[..8], &buffer.0[8..]);
            assert_eq!(&out.0[8..], &buffer.0[8..]);
        }

        #[test]
        fn test_unaligned_roundtrip() {
            let source: Vec<f32> = (0..11).map(|i| i as f32).collect();
            let mut v = Vec8xF32::new();
            unsafe { v.load_unaligned(source.as_ptr().add(3)) };
            assert_eq!(&v.to_array(), &source[3..]);

            let mut out = vec![0.0f32; 11];
            unsafe { v.store_unaligned(out.as_mut_ptr().add(1)) };
            assert_eq!(&out[1..9], &source[3..]);
            assert_eq!(out[0], 0.0);
            assert_eq!(&out[9..], &[0.0, 0.0]);
        }

        #[test]
        fn test_trait_load_store() {
            let buffer = Aligned([3.0; 16]);
            let v = unsafe { Vec8xF32::load_at(buffer.0.as_ptr().add(1)) };
            assert_eq!(v, Vec8xF32::splat(3.0));

            let mut out = Aligned([0.0; 16]);
            unsafe { v.store_at(out.0.as_mut_ptr().add(8)) };
            assert_eq!(&out.0[8..], &[3.0; 8]);
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_elementwise_ops() {
            let a = iota();
            let b = Vec8xF32::splat(2.0);

            assert_eq!((a + b).to_array(), [3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
            assert_eq!((a - b).to_array(), [-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
            assert_eq!((a * b).to_array(), [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]);
            assert_eq!((a / b).to_array(), [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
            assert_eq!(a * 2.0, a * b);
        }

        #[test]
        fn test_division_by_zero_follows_ieee() {
            let a = Vec8xF32::from_lanes(1.0, -1.0, 0.0, 2.0, 2.0, 2.0, 2.0, 2.0);
            let q = (a / 0.0).to_array();

            assert_eq!(q[0], f32::INFINITY);
            assert_eq!(q[1], f32::NEG_INFINITY);
            assert!(q[2].is_nan());
        }

        #[test]
        fn test_unary_ops() {
            let v = Vec8xF32::from_lanes(-2.5, -1.5, -0.5, 0.5, 1.5, 2.5, -4.0, 9.0);
            assert_eq!(
                v.round().to_array(),
                [-2.0, -2.0, -0.0, 0.0, 2.0, 2.0, -4.0, 9.0]
            );
            assert_eq!(v.abs().to_array(), [2.5, 1.5, 0.5, 0.5, 1.5, 2.5, 4.0, 9.0]);
            assert_eq!(v.abs().sqrt().to_array()[7], 3.0);
            assert_eq!((-v).to_array()[6], 4.0);
        }

        #[test]
        fn test_fused_operations() {
            let a = iota();
            let b = Vec8xF32::splat(2.0);
            let c = Vec8xF32::splat(1.0);

            assert_eq!(
                Vec8xF32::fma(a, b, c).to_array(),
                [3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0]
            );
            assert_eq!(
                Vec8xF32::fms(a, b, c).to_array(),
                [1.0, 3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0]
            );
        }
    }

    mod reduction_tests {
        use super::*;

        #[test]
        fn test_sum_iota() {
            assert_eq!(iota().sum(), 36.0);
        }

        #[test]
        fn test_sum_folds_halves_first() {
            // e_i and e_{i+4} cancel exactly before any cross-lane add.
            let v = Vec8xF32::from_lanes(1e8, 1.0, -1e8, 1.0, -1e8, 1.0, 1e8, 1.0);
            assert_eq!(v.sum(), 4.0);
        }

        #[test]
        fn test_equality_and_nan() {
            assert_eq!(iota(), iota());
            let mut v = iota();
            v.set_lanes(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, f32::NAN);
            assert_ne!(v, v);
        }
    }
}
