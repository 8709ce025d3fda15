//! Portable per-lane kernels.
//!
//! Used when the build script finds no SSE4.1/AVX/FMA support (or the
//! `portable` feature is on). Registers are plain `[T; N]` arrays; the vector
//! types add the alignment through `#[repr(align)]`. Every function matches
//! the signature of its counterpart in the `avx` backend, and `sum` keeps the
//! same association order so results agree across backends.

/// Backend name reported by [`crate::backend`].
pub(crate) const NAME: &str = "fallback";

#[inline(always)]
pub(crate) fn map<T: Copy, const N: usize>(a: [T; N], f: impl Fn(T) -> T) -> [T; N] {
    std::array::from_fn(|lane| f(a[lane]))
}

#[inline(always)]
pub(crate) fn zip<T: Copy, const N: usize>(a: [T; N], b: [T; N], f: impl Fn(T, T) -> T) -> [T; N] {
    std::array::from_fn(|lane| f(a[lane], b[lane]))
}

#[inline(always)]
pub(crate) fn zip3<T: Copy, const N: usize>(
    a: [T; N],
    b: [T; N],
    c: [T; N],
    f: impl Fn(T, T, T) -> T,
) -> [T; N] {
    std::array::from_fn(|lane| f(a[lane], b[lane], c[lane]))
}

/// Expands the per-lane kernels shared by every register shape.
///
/// `$bits` is the unsigned integer type with the same width as `$scalar`,
/// used for the bitwise operators.
macro_rules! lane_kernels {
    ($scalar:ty, $bits:ty, $lanes:expr) => {
        pub(crate) type Packed = [$scalar; $lanes];

        #[inline(always)]
        pub(crate) fn zero() -> Packed {
            [0.0; $lanes]
        }

        #[inline(always)]
        pub(crate) fn splat(value: $scalar) -> Packed {
            [value; $lanes]
        }

        #[inline(always)]
        pub(crate) fn from_array(lanes: [$scalar; $lanes]) -> Packed {
            lanes
        }

        #[inline(always)]
        pub(crate) fn to_array(packed: Packed) -> [$scalar; $lanes] {
            packed
        }

        /// # Safety
        ///
        /// `ptr` must be aligned for the vector type and point to `LANES`
        /// readable scalars.
        #[inline(always)]
        pub(crate) unsafe fn load(ptr: *const $scalar) -> Packed {
            std::ptr::read(ptr as *const Packed)
        }

        /// # Safety
        ///
        /// `ptr` must point to `LANES` readable scalars.
        #[inline(always)]
        pub(crate) unsafe fn loadu(ptr: *const $scalar) -> Packed {
            std::ptr::read_unaligned(ptr as *const Packed)
        }

        /// # Safety
        ///
        /// `ptr` must be aligned for the vector type and point to `LANES`
        /// writable scalars.
        #[inline(always)]
        pub(crate) unsafe fn store(ptr: *mut $scalar, packed: Packed) {
            std::ptr::write(ptr as *mut Packed, packed)
        }

        /// # Safety
        ///
        /// `ptr` must point to `LANES` writable scalars.
        #[inline(always)]
        pub(crate) unsafe fn storeu(ptr: *mut $scalar, packed: Packed) {
            std::ptr::write_unaligned(ptr as *mut Packed, packed)
        }

        /// There is no portable non-temporal hint; this is a regular store.
        ///
        /// # Safety
        ///
        /// Same contract as [`store`].
        #[inline(always)]
        pub(crate) unsafe fn stream(ptr: *mut $scalar, packed: Packed) {
            store(ptr, packed)
        }

        #[inline(always)]
        pub(crate) fn add(a: Packed, b: Packed) -> Packed {
            super::zip(a, b, |x, y| x + y)
        }

        #[inline(always)]
        pub(crate) fn sub(a: Packed, b: Packed) -> Packed {
            super::zip(a, b, |x, y| x - y)
        }

        #[inline(always)]
        pub(crate) fn mul(a: Packed, b: Packed) -> Packed {
            super::zip(a, b, |x, y| x * y)
        }

        #[inline(always)]
        pub(crate) fn div(a: Packed, b: Packed) -> Packed {
            super::zip(a, b, |x, y| x / y)
        }

        #[inline(always)]
        pub(crate) fn and(a: Packed, b: Packed) -> Packed {
            super::zip(a, b, |x, y| <$scalar>::from_bits(x.to_bits() & y.to_bits()))
        }

        #[inline(always)]
        pub(crate) fn or(a: Packed, b: Packed) -> Packed {
            super::zip(a, b, |x, y| <$scalar>::from_bits(x.to_bits() | y.to_bits()))
        }

        #[inline(always)]
        pub(crate) fn xor(a: Packed, b: Packed) -> Packed {
            super::zip(a, b, |x, y| <$scalar>::from_bits(x.to_bits() ^ y.to_bits()))
        }

        #[inline(always)]
        pub(crate) fn abs(a: Packed) -> Packed {
            super::map(a, |x| <$scalar>::from_bits(x.to_bits() & !(1 as $bits).rotate_right(1)))
        }

        #[inline(always)]
        pub(crate) fn round(a: Packed) -> Packed {
            super::map(a, <$scalar>::round_ties_even)
        }

        #[inline(always)]
        pub(crate) fn ceil(a: Packed) -> Packed {
            super::map(a, <$scalar>::ceil)
        }

        #[inline(always)]
        pub(crate) fn floor(a: Packed) -> Packed {
            super::map(a, <$scalar>::floor)
        }

        #[inline(always)]
        pub(crate) fn trunc(a: Packed) -> Packed {
            super::map(a, <$scalar>::trunc)
        }

        #[inline(always)]
        pub(crate) fn sqrt(a: Packed) -> Packed {
            super::map(a, <$scalar>::sqrt)
        }

        #[inline(always)]
        pub(crate) fn eq_all(a: Packed, b: Packed) -> bool {
            a.iter().zip(b.iter()).all(|(x, y)| x == y)
        }

        #[inline(always)]
        pub(crate) fn fmadd(a: Packed, b: Packed, c: Packed) -> Packed {
            super::zip3(a, b, c, <$scalar>::mul_add)
        }

        #[inline(always)]
        pub(crate) fn fmsub(a: Packed, b: Packed, c: Packed) -> Packed {
            super::zip3(a, b, c, |x, y, z| x.mul_add(y, -z))
        }
    };
}

pub(crate) use lane_kernels;

pub(crate) mod f32x4;
pub(crate) mod f32x8;
pub(crate) mod f64x4;
