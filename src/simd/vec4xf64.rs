//! 4-lane f64 vector.
//!
//! [`Vec4xF64`] holds 4 double-precision lanes in one 256-bit register. Its
//! aligned entry points need 32-byte alignment, twice the boundary of
//! [`crate::simd::Vec4xF32`].

use crate::simd::backend::f64x4;

/// Alignment boundary in bytes for the aligned load/store entry points.
pub const ALIGNMENT: usize = 32;

/// Number of f64 lanes in a [`Vec4xF64`].
pub const LANE_COUNT: usize = 4;

/// Four packed `f64` lanes, laid out as 4 consecutive `f64` on a 32-byte
/// boundary.
#[derive(Copy, Clone)]
#[repr(C, align(32))]
pub struct Vec4xF64 {
    packed: f64x4::Packed,
}

impl Vec4xF64 {
    /// All lanes `+0.0`.
    #[inline(always)]
    pub fn new() -> Self {
        Self::from_packed(f64x4::zero())
    }

    /// Broadcasts `value` to every lane.
    #[inline(always)]
    pub fn splat(value: f64) -> Self {
        Self::from_packed(f64x4::splat(value))
    }

    /// Lanes in argument order: `x` is lane 0, `w` is lane 3.
    #[inline(always)]
    pub fn from_lanes(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_packed(f64x4::from_array([x, y, z, w]))
    }

    /// Loads 4 lanes from 32-byte aligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and point to at least 4 readable `f64`.
    #[inline(always)]
    pub unsafe fn from_ptr(ptr: *const f64) -> Self {
        let mut vector = Self::new();
        vector.load(ptr);
        vector
    }

    #[inline(always)]
    pub(crate) fn from_packed(packed: f64x4::Packed) -> Self {
        Self { packed }
    }

    /// Replaces all lanes with `ptr[0..4]`.
    ///
    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and point to at least 4 readable `f64`.
    #[inline(always)]
    pub unsafe fn load(&mut self, ptr: *const f64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        self.packed = f64x4::load(ptr);
    }

    /// # Safety
    ///
    /// `ptr` must point to at least 4 readable `f64`.
    #[inline(always)]
    pub unsafe fn load_unaligned(&mut self, ptr: *const f64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        self.packed = f64x4::loadu(ptr);
    }

    /// Regular store, destination expected to be read again soon.
    ///
    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and point to at least 4 writable `f64`.
    #[inline(always)]
    pub unsafe fn store_temporal(&self, ptr: *mut f64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        f64x4::store(ptr, self.packed)
    }

    /// Streaming store that bypasses the cache. Same values as
    /// [`Vec4xF64::store_temporal`].
    ///
    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and point to at least 4 writable `f64`.
    #[inline(always)]
    pub unsafe fn store_nontemporal(&self, ptr: *mut f64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        f64x4::stream(ptr, self.packed)
    }

    /// # Safety
    ///
    /// `ptr` must point to at least 4 writable `f64`.
    #[inline(always)]
    pub unsafe fn store_unaligned(&self, ptr: *mut f64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        f64x4::storeu(ptr, self.packed)
    }

    /// Historical single-store API, always non-temporal.
    ///
    /// # Safety
    ///
    /// Same contract as [`Vec4xF64::store_nontemporal`].
    #[deprecated(note = "use `store_nontemporal` or `store_temporal`")]
    #[inline(always)]
    pub unsafe fn store(&self, ptr: *mut f64) {
        self.store_nontemporal(ptr)
    }

    /// Broadcasts `*value` to every lane.
    #[inline(always)]
    pub fn set(&mut self, value: &f64) {
        self.packed = f64x4::splat(*value);
    }

    #[inline(always)]
    pub fn set_lanes(&mut self, x: f64, y: f64, z: f64, w: f64) {
        self.packed = f64x4::from_array([x, y, z, w]);
    }

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.as_array()[0]
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.as_array()[1]
    }

    #[inline(always)]
    pub fn z(&self) -> f64 {
        self.as_array()[2]
    }

    #[inline(always)]
    pub fn w(&self) -> f64 {
        self.as_array()[3]
    }

    #[inline(always)]
    pub fn to_array(self) -> [f64; 4] {
        f64x4::to_array(self.packed)
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f64; 4] {
        // SAFETY: single 32-byte field, 4 consecutive f64 on every backend.
        unsafe { &*(self as *const Self as *const [f64; 4]) }
    }

    /// Rounds to nearest, ties to even.
    #[inline(always)]
    pub fn round(self) -> Self {
        Self::from_packed(f64x4::round(self.packed))
    }

    #[inline(always)]
    pub fn ceil(self) -> Self {
        Self::from_packed(f64x4::ceil(self.packed))
    }

    #[inline(always)]
    pub fn floor(self) -> Self {
        Self::from_packed(f64x4::floor(self.packed))
    }

    #[inline(always)]
    pub fn trunc(self) -> Self {
        Self::from_packed(f64x4::trunc(self.packed))
    }

    #[inline(always)]
    pub fn sqrt(self) -> Self {
        Self::from_packed(f64x4::sqrt(self.packed))
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        Self::from_packed(f64x4::abs(self.packed))
    }

    /// Sum of all lanes as `(x + y) + (z + w)`.
    #[inline(always)]
    pub fn sum(self) -> f64 {
        f64x4::sum(self.packed)
    }

    /// `a * b + c`, fused.
    #[inline(always)]
    pub fn fma(a: Self, b: Self, c: Self) -> Self {
        Self::from_packed(f64x4::fmadd(a.packed, b.packed, c.packed))
    }

    /// `a * b - c`, fused.
    #[inline(always)]
    pub fn fms(a: Self, b: Self, c: Self) -> Self {
        Self::from_packed(f64x4::fmsub(a.packed, b.packed, c.packed))
    }
}

impl_vector_ops!(Vec4xF64, f64, 4, f64x4);
impl_simd_traits!(Vec4xF64, f64, 4, 32, f64x4);
