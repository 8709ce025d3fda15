//! Fixed-width vector value types and the traits they share.
//!
//! # Available Types
//!
//! | Type | Lanes | Element | Alignment |
//! |------|-------|---------|-----------|
//! | [`Vec4xF32`] | 4 | `f32` | 16 bytes |
//! | [`Vec4xF64`] | 4 | `f64` | 32 bytes |
//! | [`Vec8xF32`] | 8 | `f32` | 32 bytes |
//!
//! Each type is laid out as exactly `LANES` consecutive scalars with no
//! padding, aligned to its alignment boundary, so an array of vectors can be
//! reinterpreted as a flat scalar buffer and the other way around.
//!
//! # Backends
//!
//! The build script selects one backend at compile time:
//!
//! - `avx`: SSE4.1/AVX/FMA intrinsics, one instruction per operation.
//! - `fallback`: portable per-lane code with the same reduction order.
//!
//! There is no runtime dispatch; [`crate::backend`] reports which one was
//! compiled in.

use std::ops::{Add, Mul};

#[macro_use]
mod macros;

#[cfg(all(avx, any(target_arch = "x86", target_arch = "x86_64")))]
pub(crate) mod avx;
#[cfg(all(avx, any(target_arch = "x86", target_arch = "x86_64")))]
pub(crate) use avx as backend;

#[cfg(not(all(avx, any(target_arch = "x86", target_arch = "x86_64"))))]
pub(crate) mod fallback;
#[cfg(not(all(avx, any(target_arch = "x86", target_arch = "x86_64"))))]
pub(crate) use fallback as backend;

pub mod slice;
mod traits;
pub mod vec4xf32;
pub mod vec4xf64;
pub mod vec8xf32;

pub use vec4xf32::Vec4xF32;
pub use vec4xf64::Vec4xF64;
pub use vec8xf32::Vec8xF32;

pub use traits::{SimdAdd, SimdFma, SimdSum};

/// Pointer alignment checks against a vector type's alignment boundary.
pub trait Alignment<T> {
    /// Returns `true` if `ptr` satisfies the type's alignment requirement.
    fn is_aligned(ptr: *const T) -> bool;
}

/// Constructors that read a whole vector from scalar memory.
pub trait SimdLoad<T>: Sized + Alignment<T> {
    /// Loads `LANES` scalars from an aligned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to the type's alignment and point to at least
    /// `LANES` readable scalars.
    unsafe fn load_aligned(ptr: *const T) -> Self;

    /// Loads `LANES` scalars from a pointer with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `LANES` readable scalars.
    unsafe fn load_unaligned_at(ptr: *const T) -> Self;

    /// Loads `LANES` scalars, picking the aligned path when `ptr` allows it.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `LANES` readable scalars.
    #[inline(always)]
    unsafe fn load_at(ptr: *const T) -> Self {
        match Self::is_aligned(ptr) {
            true => Self::load_aligned(ptr),
            false => Self::load_unaligned_at(ptr),
        }
    }
}

/// Writing a whole vector out to scalar memory.
pub trait SimdStore<T>: Alignment<T> {
    /// Regular store to aligned memory (temporal hint).
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to the type's alignment and point to at least
    /// `LANES` writable scalars.
    unsafe fn store_aligned_at(&self, ptr: *mut T);

    /// Streaming store to aligned memory (non-temporal hint). The written
    /// values are identical to [`SimdStore::store_aligned_at`].
    ///
    /// # Safety
    ///
    /// Same contract as [`SimdStore::store_aligned_at`].
    unsafe fn stream_at(&self, ptr: *mut T);

    /// Store with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `LANES` writable scalars.
    unsafe fn store_unaligned_at(&self, ptr: *mut T);

    /// Stores `LANES` scalars, picking the aligned path when `ptr` allows it.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `LANES` writable scalars.
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut T) {
        match Self::is_aligned(ptr) {
            true => self.store_aligned_at(ptr),
            false => self.store_unaligned_at(ptr),
        }
    }
}

/// The lane-width-independent surface used by the slice helpers.
///
/// Loads and stores go through [`SimdLoad`] and [`SimdStore`] bounded on
/// [`SimdVector::Scalar`] at the use site.
pub trait SimdVector: Copy + Send + Sync + Add<Output = Self> + Mul<Output = Self> {
    /// Lane element type.
    type Scalar: num::Float + Send + Sync;

    /// Number of lanes.
    const LANES: usize;

    /// Alignment boundary in bytes required by the aligned entry points.
    const ALIGNMENT: usize;

    /// Broadcasts `value` to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Pairwise (tree) sum of all lanes.
    fn horizontal_sum(self) -> Self::Scalar;

    /// `self * b + c` with a single rounding per lane.
    fn mul_add(self, b: Self, c: Self) -> Self;
}
