//! # lanewise
//!
//! Fixed-width SIMD vector value types for `f32` and `f64`:
//!
//! - [`Vec4xF32`]: 4 × `f32`, 16-byte aligned
//! - [`Vec4xF64`]: 4 × `f64`, 32-byte aligned
//! - [`Vec8xF32`]: 8 × `f32`, 32-byte aligned
//!
//! Each type is a plain `Copy` value wrapping one hardware register. It
//! offers aligned and unaligned loads, temporal and non-temporal stores,
//! lane-wise arithmetic and bitwise operators (with vector or broadcast scalar
//! operands), rounding, square root, a horizontal sum with a fixed pairwise
//! order, and fused multiply-add/subtract.
//!
//! # Backend selection
//!
//! The build script picks one implementation per build:
//!
//! - **avx**: when the target provides SSE4.1, AVX and FMA.
//! - **fallback**: portable per-lane code everywhere else, or when the
//!   `portable` feature is enabled.
//!
//! Both backends return bit-identical results for the same inputs, including
//! the summation order of [`Vec4xF32::sum`] and friends. [`backend`] names the
//! one that was compiled in.
//!
//! # Quick start
//!
//! ```rust
//! use lanewise::{Vec4xF64, Vec8xF32};
//!
//! let a = Vec4xF64::from_lanes(0.0001, -2355.5, 42872.0, 0.29343);
//! let b = Vec4xF64::from_lanes(0.0064, 64.5, 9125.0, -34965.0);
//! let c = a + b;
//! assert!((c.w() + 34964.70657).abs() < 1e-6);
//!
//! let v = Vec8xF32::splat(0.5) * 4.0;
//! assert_eq!(v.sum(), 16.0);
//! ```
//!
//! # Slice helpers
//!
//! [`SimdAdd`], [`SimdFma`] and [`SimdSum`] run over whole `f32`/`f64`
//! slices with single-threaded, rayon-parallel and scalar variants, and
//! [`utils::AlignedBuf`] provides buffers suitable for the aligned entry
//! points.

pub mod error;
pub mod simd;
pub mod utils;

pub use error::{LanewiseError, Result};
pub use simd::{
    Alignment, SimdAdd, SimdFma, SimdLoad, SimdStore, SimdSum, SimdVector, Vec4xF32, Vec4xF64,
    Vec8xF32,
};
pub use utils::AlignedBuf;

/// Name of the backend selected at build time: `"avx"` or `"fallback"`.
pub fn backend() -> &'static str {
    simd::backend::NAME
}
