//! Slice operations over `f32` and `f64` buffers.
//!
//! `f32` slices are processed 8 lanes at a time with [`Vec8xF32`], `f64`
//! slices 4 lanes at a time with [`Vec4xF64`]. The `len % LANES` tail is
//! handled with scalar code, so any length (including zero) is accepted.
//!
//! Inputs need not be aligned: every block goes through
//! [`SimdLoad::load_at`]/[`SimdStore::store_at`], which take the aligned path
//! whenever the pointer allows it.
//!
//! # Example
//!
//! ```rust
//! use lanewise::{SimdAdd, SimdFma, SimdSum};
//!
//! let a: Vec<f32> = (0..1000).map(|i| i as f32).collect();
//! let b: Vec<f32> = vec![1.0; 1000];
//!
//! let c = a.as_slice().simd_add(b.as_slice()).unwrap();
//! assert_eq!(c[999], 1000.0);
//!
//! let d = a.as_slice().par_simd_fma(b.as_slice(), b.as_slice()).unwrap();
//! assert_eq!(d, c);
//!
//! assert_eq!(b.as_slice().simd_sum(), 1000.0);
//! assert!(a.as_slice().simd_add(&b[..10]).is_err());
//! ```

use num::{Float, Zero};
use rayon::prelude::*;

use crate::{
    error::{LanewiseError, Result},
    simd::{SimdAdd, SimdFma, SimdLoad, SimdStore, SimdSum, SimdVector, Vec4xF64, Vec8xF32},
};

/// Elements per rayon task. Rounded down to a multiple of the lane count
/// before use.
pub const PARALLEL_CHUNK_SIZE: usize = 16 * 1024;

#[inline(always)]
fn parallel_chunk_len<V: SimdVector>() -> usize {
    ((PARALLEL_CHUNK_SIZE / V::LANES) * V::LANES).max(V::LANES)
}

fn ensure_same_len(expected: usize, found: usize, operand: &'static str) -> Result<()> {
    if expected != found {
        return Err(LanewiseError::LengthMismatch {
            operand,
            expected,
            found,
        });
    }
    Ok(())
}

// ================================================================================================
// BLOCK KERNELS
// ================================================================================================

/// Lane-parallel accumulation followed by one horizontal sum, then the tail.
#[inline(always)]
fn simd_sum_block<V>(data: &[V::Scalar]) -> V::Scalar
where
    V: SimdVector + SimdLoad<V::Scalar>,
{
    let blocks = data.chunks_exact(V::LANES);
    let tail = blocks.remainder();

    let mut acc = V::splat(V::Scalar::zero());
    for block in blocks {
        // SAFETY: `block` holds exactly `LANES` readable scalars.
        acc = acc + unsafe { V::load_at(block.as_ptr()) };
    }

    tail.iter().fold(acc.horizontal_sum(), |sum, &x| sum + x)
}

#[inline(always)]
fn simd_add_block<V>(a: &[V::Scalar], b: &[V::Scalar], out: &mut [V::Scalar])
where
    V: SimdVector + SimdLoad<V::Scalar> + SimdStore<V::Scalar>,
{
    debug_assert!(a.len() == out.len() && b.len() == out.len());

    let step = V::LANES;
    let complete = out.len() - out.len() % step;

    for i in (0..complete).step_by(step) {
        // SAFETY: `i + LANES <= len` for all three slices.
        unsafe {
            let va = V::load_at(a.as_ptr().add(i));
            let vb = V::load_at(b.as_ptr().add(i));
            (va + vb).store_at(out.as_mut_ptr().add(i));
        }
    }

    for i in complete..out.len() {
        out[i] = a[i] + b[i];
    }
}

#[inline(always)]
fn simd_fma_block<V>(a: &[V::Scalar], b: &[V::Scalar], c: &[V::Scalar], out: &mut [V::Scalar])
where
    V: SimdVector + SimdLoad<V::Scalar> + SimdStore<V::Scalar>,
{
    debug_assert!(a.len() == out.len() && b.len() == out.len() && c.len() == out.len());

    let step = V::LANES;
    let complete = out.len() - out.len() % step;

    for i in (0..complete).step_by(step) {
        // SAFETY: `i + LANES <= len` for all four slices.
        unsafe {
            let va = V::load_at(a.as_ptr().add(i));
            let vb = V::load_at(b.as_ptr().add(i));
            let vc = V::load_at(c.as_ptr().add(i));
            va.mul_add(vb, vc).store_at(out.as_mut_ptr().add(i));
        }
    }

    for i in complete..out.len() {
        out[i] = a[i].mul_add(b[i], c[i]);
    }
}

// ================================================================================================
// SLICE OPERATIONS
// ================================================================================================

fn simd_sum<V>(data: &[V::Scalar]) -> V::Scalar
where
    V: SimdVector + SimdLoad<V::Scalar>,
{
    simd_sum_block::<V>(data)
}

/// Each rayon chunk is reduced with [`simd_sum_block`]; the partial sums are
/// then combined in rayon's reduction order.
fn parallel_simd_sum<V>(data: &[V::Scalar]) -> V::Scalar
where
    V: SimdVector + SimdLoad<V::Scalar>,
{
    let chunk = parallel_chunk_len::<V>();
    if data.len() <= chunk {
        return simd_sum_block::<V>(data);
    }

    data.par_chunks(chunk)
        .map(simd_sum_block::<V>)
        .reduce(<V::Scalar as Zero>::zero, |x, y| x + y)
}

fn scalar_sum<T: Float>(data: &[T]) -> T {
    data.iter().fold(T::zero(), |sum, &x| sum + x)
}

fn simd_add<V>(a: &[V::Scalar], b: &[V::Scalar]) -> Result<Vec<V::Scalar>>
where
    V: SimdVector + SimdLoad<V::Scalar> + SimdStore<V::Scalar>,
{
    ensure_same_len(a.len(), b.len(), "rhs")?;

    let mut out = vec![V::Scalar::zero(); a.len()];
    simd_add_block::<V>(a, b, &mut out);
    Ok(out)
}

fn parallel_simd_add<V>(a: &[V::Scalar], b: &[V::Scalar]) -> Result<Vec<V::Scalar>>
where
    V: SimdVector + SimdLoad<V::Scalar> + SimdStore<V::Scalar>,
{
    ensure_same_len(a.len(), b.len(), "rhs")?;

    let chunk = parallel_chunk_len::<V>();
    if a.len() <= chunk {
        return simd_add::<V>(a, b);
    }

    let mut out = vec![V::Scalar::zero(); a.len()];
    out.par_chunks_mut(chunk)
        .zip(a.par_chunks(chunk))
        .zip(b.par_chunks(chunk))
        .for_each(|((out, a), b)| simd_add_block::<V>(a, b, out));

    Ok(out)
}

fn scalar_add<T: Float>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    ensure_same_len(a.len(), b.len(), "rhs")?;

    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect())
}

fn simd_fma<V>(a: &[V::Scalar], b: &[V::Scalar], c: &[V::Scalar]) -> Result<Vec<V::Scalar>>
where
    V: SimdVector + SimdLoad<V::Scalar> + SimdStore<V::Scalar>,
{
    ensure_same_len(a.len(), b.len(), "b")?;
    ensure_same_len(a.len(), c.len(), "c")?;

    let mut out = vec![V::Scalar::zero(); a.len()];
    simd_fma_block::<V>(a, b, c, &mut out);
    Ok(out)
}

fn parallel_simd_fma<V>(
    a: &[V::Scalar],
    b: &[V::Scalar],
    c: &[V::Scalar],
) -> Result<Vec<V::Scalar>>
where
    V: SimdVector + SimdLoad<V::Scalar> + SimdStore<V::Scalar>,
{
    ensure_same_len(a.len(), b.len(), "b")?;
    ensure_same_len(a.len(), c.len(), "c")?;

    let chunk = parallel_chunk_len::<V>();
    if a.len() <= chunk {
        return simd_fma::<V>(a, b, c);
    }

    let mut out = vec![V::Scalar::zero(); a.len()];
    out.par_chunks_mut(chunk)
        .zip(a.par_chunks(chunk))
        .zip(b.par_chunks(chunk))
        .zip(c.par_chunks(chunk))
        .for_each(|(((out, a), b), c)| simd_fma_block::<V>(a, b, c, out));

    Ok(out)
}

fn scalar_fma<T: Float>(a: &[T], b: &[T], c: &[T]) -> Result<Vec<T>> {
    ensure_same_len(a.len(), b.len(), "b")?;
    ensure_same_len(a.len(), c.len(), "c")?;

    Ok(a.iter()
        .zip(b.iter())
        .zip(c.iter())
        .map(|((&x, &y), &z)| x.mul_add(y, z))
        .collect())
}

// ================================================================================================
// TRAIT IMPLEMENTATIONS
// ================================================================================================

macro_rules! impl_slice_ops {
    ($scalar:ty, $vector:ty) => {
        impl SimdSum for &[$scalar] {
            type Output = $scalar;

            #[inline(always)]
            fn simd_sum(self) -> Self::Output {
                simd_sum::<$vector>(self)
            }

            #[inline(always)]
            fn par_simd_sum(self) -> Self::Output {
                parallel_simd_sum::<$vector>(self)
            }

            #[inline(always)]
            fn scalar_sum(self) -> Self::Output {
                scalar_sum(self)
            }
        }

        impl<'b> SimdAdd<&'b [$scalar]> for &[$scalar] {
            type Output = Result<Vec<$scalar>>;

            /// # Errors
            ///
            /// [`LanewiseError::LengthMismatch`] if the lengths differ.
            #[inline(always)]
            fn simd_add(self, rhs: &'b [$scalar]) -> Self::Output {
                simd_add::<$vector>(self, rhs)
            }

            #[inline(always)]
            fn par_simd_add(self, rhs: &'b [$scalar]) -> Self::Output {
                parallel_simd_add::<$vector>(self, rhs)
            }

            #[inline(always)]
            fn scalar_add(self, rhs: &'b [$scalar]) -> Self::Output {
                scalar_add(self, rhs)
            }
        }

        impl<'b> SimdFma<&'b [$scalar]> for &[$scalar] {
            type Output = Result<Vec<$scalar>>;

            /// # Errors
            ///
            /// [`LanewiseError::LengthMismatch`] if `b` or `c` is not
            /// as long as `self`.
            #[inline(always)]
            fn simd_fma(self, b: &'b [$scalar], c: &'b [$scalar]) -> Self::Output {
                simd_fma::<$vector>(self, b, c)
            }

            #[inline(always)]
            fn par_simd_fma(self, b: &'b [$scalar], c: &'b [$scalar]) -> Self::Output {
                parallel_simd_fma::<$vector>(self, b, c)
            }

            #[inline(always)]
            fn scalar_fma(self, b: &'b [$scalar], c: &'b [$scalar]) -> Self::Output {
                scalar_fma(self, b, c)
            }
        }
    };
}

impl_slice_ops!(f32, Vec8xF32);
impl_slice_ops!(f64, Vec4xF64);
