//! 4-lane f32 vector.
//!
//! This module provides [`Vec4xF32`], a value type holding 4 single-precision
//! lanes in one 128-bit register (`__m128` on the `avx` backend, an aligned
//! `[f32; 4]` on the `fallback` backend).
//!
//! # Memory Layout
//!
//! - **Size**: 16 bytes, 4 consecutive `f32`, no padding
//! - **Alignment**: 16 bytes ([`ALIGNMENT`])
//! - **Lane order**: lane 0 (`x`) at the lowest address
//!
//! # Supported Operations
//!
//! ## Loading and Storing
//! - `load()`, `load_unaligned()` - replace all lanes from memory
//! - `store_temporal()`, `store_nontemporal()`, `store_unaligned()` - write all lanes
//!
//! ## Arithmetic
//! - `+`, `-`, `*`, `/` with another vector or a broadcast scalar
//! - `&`, `|`, `^` on the raw lane bits
//! - `round()`, `ceil()`, `floor()`, `trunc()`, `sqrt()`, `abs()`
//! - `sum()` horizontal reduction, `fma()` / `fms()` fused operations
//!
//! # Example
//!
//! ```rust
//! use lanewise::simd::Vec4xF32;
//!
//! let a = Vec4xF32::from_lanes(1.0, 2.0, 3.0, 4.0);
//! let b = Vec4xF32::splat(0.5);
//!
//! let scaled = a * b + 1.0;
//! assert_eq!(scaled.to_array(), [1.5, 2.0, 2.5, 3.0]);
//! assert_eq!(a.sum(), 10.0);
//! ```

use crate::simd::backend::f32x4;

/// Alignment boundary in bytes for the aligned load/store entry points.
pub const ALIGNMENT: usize = 16;

/// Number of f32 lanes in a [`Vec4xF32`].
pub const LANE_COUNT: usize = 4;

/// Four packed `f32` lanes.
///
/// The only stored field is the packed register, so the named lane view
/// ([`Vec4xF32::x`] ... [`Vec4xF32::w`], indexing, [`Vec4xF32::as_array`])
/// and the packed view always describe the same bits.
///
/// Arithmetic never mutates its operands; `load*`, `set*` and the compound
/// assignment operators are the only in-place updates.
#[derive(Copy, Clone)]
#[repr(C, align(16))]
pub struct Vec4xF32 {
    packed: f32x4::Packed,
}

impl Vec4xF32 {
    /// All lanes `+0.0`.
    #[inline(always)]
    pub fn new() -> Self {
        Self::from_packed(f32x4::zero())
    }

    /// Broadcasts `value` to every lane.
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self::from_packed(f32x4::splat(value))
    }

    /// Lanes in argument order: `x` is lane 0, `w` is lane 3.
    #[inline(always)]
    pub fn from_lanes(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_packed(f32x4::from_array([x, y, z, w]))
    }

    /// Loads 4 lanes from 16-byte aligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be 16-byte aligned and point to at least 4 readable `f32`.
    #[inline(always)]
    pub unsafe fn from_ptr(ptr: *const f32) -> Self {
        let mut vector = Self::new();
        vector.load(ptr);
        vector
    }

    #[inline(always)]
    pub(crate) fn from_packed(packed: f32x4::Packed) -> Self {
        Self { packed }
    }

    #[inline(always)]
    pub(crate) fn packed(self) -> f32x4::Packed {
        self.packed
    }

    /// Replaces all lanes with `ptr[0..4]`.
    ///
    /// # Safety
    ///
    /// `ptr` must be 16-byte aligned and point to at least 4 readable `f32`.
    /// Alignment is only checked in debug builds.
    #[inline(always)]
    pub unsafe fn load(&mut self, ptr: *const f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        self.packed = f32x4::load(ptr);
    }

    /// Replaces all lanes with `ptr[0..4]`, no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least 4 readable `f32`.
    #[inline(always)]
    pub unsafe fn load_unaligned(&mut self, ptr: *const f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        self.packed = f32x4::loadu(ptr);
    }

    /// Writes all lanes to 16-byte aligned memory with a regular store; the
    /// destination is expected to be read again soon.
    ///
    /// # Safety
    ///
    /// `ptr` must be 16-byte aligned and point to at least 4 writable `f32`.
    #[inline(always)]
    pub unsafe fn store_temporal(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        f32x4::store(ptr, self.packed)
    }

    /// Writes all lanes to 16-byte aligned memory with a streaming store that
    /// bypasses the cache. Use it for output that will not be read back soon;
    /// the stored values are identical to [`Vec4xF32::store_temporal`].
    ///
    /// # Safety
    ///
    /// `ptr` must be 16-byte aligned and point to at least 4 writable `f32`.
    #[inline(always)]
    pub unsafe fn store_nontemporal(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % ALIGNMENT == 0,
            "Pointer must be {ALIGNMENT}-byte aligned"
        );

        f32x4::stream(ptr, self.packed)
    }

    /// Writes all lanes to memory with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least 4 writable `f32`.
    #[inline(always)]
    pub unsafe fn store_unaligned(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        f32x4::storeu(ptr, self.packed)
    }

    /// Historical single-store API, always non-temporal.
    ///
    /// # Safety
    ///
    /// Same contract as [`Vec4xF32::store_nontemporal`].
    #[deprecated(note = "use `store_nontemporal` or `store_temporal`")]
    #[inline(always)]
    pub unsafe fn store(&self, ptr: *mut f32) {
        self.store_nontemporal(ptr)
    }

    /// Broadcasts `*value` to every lane.
    #[inline(always)]
    pub fn set(&mut self, value: &f32) {
        self.packed = f32x4::splat(*value);
    }

    /// Overwrites the lanes in argument order.
    #[inline(always)]
    pub fn set_lanes(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.packed = f32x4::from_array([x, y, z, w]);
    }

    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.as_array()[0]
    }

    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.as_array()[1]
    }

    #[inline(always)]
    pub fn z(&self) -> f32 {
        self.as_array()[2]
    }

    #[inline(always)]
    pub fn w(&self) -> f32 {
        self.as_array()[3]
    }

    /// Copies the lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        f32x4::to_array(self.packed)
    }

    /// Borrows the lanes in place.
    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 4] {
        // SAFETY: `Vec4xF32` is `repr(C)` over a single 16-byte field laid out
        // as 4 consecutive f32 on every backend.
        unsafe { &*(self as *const Self as *const [f32; 4]) }
    }

    /// Rounds to nearest, ties to even.
    #[inline(always)]
    pub fn round(self) -> Self {
        Self::from_packed(f32x4::round(self.packed))
    }

    #[inline(always)]
    pub fn ceil(self) -> Self {
        Self::from_packed(f32x4::ceil(self.packed))
    }

    #[inline(always)]
    pub fn floor(self) -> Self {
        Self::from_packed(f32x4::floor(self.packed))
    }

    #[inline(always)]
    pub fn trunc(self) -> Self {
        Self::from_packed(f32x4::trunc(self.packed))
    }

    /// Per-lane square root. Negative lanes produce NaN.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        Self::from_packed(f32x4::sqrt(self.packed))
    }

    /// Clears the sign bit of every lane.
    #[inline(always)]
    pub fn abs(self) -> Self {
        Self::from_packed(f32x4::abs(self.packed))
    }

    /// Sum of all lanes, reduced pairwise as `(x + y) + (z + w)`.
    ///
    /// The result can differ in the last bits from a left-to-right sum.
    #[inline(always)]
    pub fn sum(self) -> f32 {
        f32x4::sum(self.packed)
    }

    /// `a * b + c` with a single rounding per lane.
    #[inline(always)]
    pub fn fma(a: Self, b: Self, c: Self) -> Self {
        Self::from_packed(f32x4::fmadd(a.packed, b.packed, c.packed))
    }

    /// `a * b - c` with a single rounding per lane.
    #[inline(always)]
    pub fn fms(a: Self, b: Self, c: Self) -> Self {
        Self::from_packed(f32x4::fmsub(a.packed, b.packed, c.packed))
    }
}

impl_vector_ops!(Vec4xF32, f32, 4, f32x4);
impl_simd_traits!(Vec4xF32, f32, 4, 16, f32x4);
