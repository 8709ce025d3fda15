//! Slice-level operations built on the vector types.
//!
//! Each trait offers three strategies over the same computation:
//! `simd_*` (one thread, vector lanes), `par_simd_*` (rayon chunks of vector
//! lanes) and `scalar_*` (plain per-element loop, the reference result).
//! Implementations for `&[f32]` and `&[f64]` live in [`crate::simd::slice`].

/// Element-wise addition of two equally long slices.
pub trait SimdAdd<Rhs = Self> {
    type Output;

    fn simd_add(self, rhs: Rhs) -> Self::Output;
    fn par_simd_add(self, rhs: Rhs) -> Self::Output;
    fn scalar_add(self, rhs: Rhs) -> Self::Output;
}

/// Element-wise fused multiply-add: `self[i] * b[i] + c[i]`.
pub trait SimdFma<Rhs = Self> {
    type Output;

    fn simd_fma(self, b: Rhs, c: Rhs) -> Self::Output;
    fn par_simd_fma(self, b: Rhs, c: Rhs) -> Self::Output;
    fn scalar_fma(self, b: Rhs, c: Rhs) -> Self::Output;
}

/// Sum of all elements.
///
/// The three strategies add in different orders, so their results may
/// differ in the last bits for inputs that are not exactly representable.
pub trait SimdSum {
    type Output;

    fn simd_sum(self) -> Self::Output;
    fn par_simd_sum(self) -> Self::Output;
    fn scalar_sum(self) -> Self::Output;
}
