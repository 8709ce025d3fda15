//! Operator and trait boilerplate shared by the three vector types.
//!
//! Every vector type wraps a single backend register (`packed`) and routes
//! each operator to the matching kernel function of its backend module, so
//! the impls below only differ by type, scalar, lane count and kernel module.

/// Elementwise operators, compound assignment, comparison and lane access.
///
/// `$kernel` must name a backend module in scope at the invocation site.
macro_rules! impl_vector_ops {
    (@binary $ty:ident, $scalar:ty, $kernel:ident,
     $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl std::ops::$trait for $ty {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::from_packed($kernel::$op(self.packed, rhs.packed))
            }
        }

        impl std::ops::$trait<$scalar> for $ty {
            type Output = Self;

            /// Broadcasts the scalar to every lane first.
            #[inline(always)]
            fn $method(self, rhs: $scalar) -> Self::Output {
                Self::from_packed($kernel::$op(self.packed, $kernel::splat(rhs)))
            }
        }

        impl std::ops::$assign_trait for $ty {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                self.packed = $kernel::$op(self.packed, rhs.packed);
            }
        }

        impl std::ops::$assign_trait<$scalar> for $ty {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: $scalar) {
                self.packed = $kernel::$op(self.packed, $kernel::splat(rhs));
            }
        }
    };

    (@bitwise $ty:ident, $kernel:ident,
     $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl std::ops::$trait for $ty {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::from_packed($kernel::$op(self.packed, rhs.packed))
            }
        }

        impl std::ops::$assign_trait for $ty {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                self.packed = $kernel::$op(self.packed, rhs.packed);
            }
        }
    };

    ($ty:ident, $scalar:ty, $lanes:expr, $kernel:ident) => {
        impl_vector_ops!(@binary $ty, $scalar, $kernel, Add, add, AddAssign, add_assign, add);
        impl_vector_ops!(@binary $ty, $scalar, $kernel, Sub, sub, SubAssign, sub_assign, sub);
        impl_vector_ops!(@binary $ty, $scalar, $kernel, Mul, mul, MulAssign, mul_assign, mul);
        impl_vector_ops!(@binary $ty, $scalar, $kernel, Div, div, DivAssign, div_assign, div);

        impl_vector_ops!(@bitwise $ty, $kernel, BitAnd, bitand, BitAndAssign, bitand_assign, and);
        impl_vector_ops!(@bitwise $ty, $kernel, BitOr, bitor, BitOrAssign, bitor_assign, or);
        impl_vector_ops!(@bitwise $ty, $kernel, BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

        impl std::ops::Neg for $ty {
            type Output = Self;

            /// Flips the sign bit of every lane (`-0.0` stays a signed zero).
            #[inline(always)]
            fn neg(self) -> Self::Output {
                self ^ Self::splat(-0.0)
            }
        }

        impl PartialEq for $ty {
            /// `true` iff every lane compares equal. A NaN lane on either side
            /// makes the vectors unequal.
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                $kernel::eq_all(self.packed, other.packed)
            }
        }

        impl Default for $ty {
            #[inline(always)]
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:?})", stringify!($ty), self.as_array())
            }
        }

        impl std::ops::Index<usize> for $ty {
            type Output = $scalar;

            #[inline(always)]
            fn index(&self, lane: usize) -> &Self::Output {
                &self.as_array()[lane]
            }
        }

        impl From<[$scalar; $lanes]> for $ty {
            #[inline(always)]
            fn from(lanes: [$scalar; $lanes]) -> Self {
                Self::from_packed($kernel::from_array(lanes))
            }
        }

        impl From<$ty> for [$scalar; $lanes] {
            #[inline(always)]
            fn from(vector: $ty) -> Self {
                vector.to_array()
            }
        }
    };
}

/// `Alignment`, `SimdLoad`, `SimdStore` and `SimdVector` for a vector type.
///
/// The type must provide the inherent `splat`, `sum` and `fma` functions and
/// the `$kernel` module must expose `load`, `loadu`, `store`, `storeu` and
/// `stream`.
macro_rules! impl_simd_traits {
    ($ty:ident, $scalar:ty, $lanes:expr, $align:expr, $kernel:ident) => {
        impl $crate::simd::Alignment<$scalar> for $ty {
            #[inline(always)]
            fn is_aligned(ptr: *const $scalar) -> bool {
                (ptr as usize) % $align == 0
            }
        }

        impl $crate::simd::SimdLoad<$scalar> for $ty {
            #[inline(always)]
            unsafe fn load_aligned(ptr: *const $scalar) -> Self {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");
                debug_assert!(
                    <$ty as $crate::simd::Alignment<$scalar>>::is_aligned(ptr),
                    "Pointer must be {}-byte aligned",
                    $align
                );

                Self::from_packed($kernel::load(ptr))
            }

            #[inline(always)]
            unsafe fn load_unaligned_at(ptr: *const $scalar) -> Self {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                Self::from_packed($kernel::loadu(ptr))
            }
        }

        impl $crate::simd::SimdStore<$scalar> for $ty {
            #[inline(always)]
            unsafe fn store_aligned_at(&self, ptr: *mut $scalar) {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");
                debug_assert!(
                    <$ty as $crate::simd::Alignment<$scalar>>::is_aligned(ptr),
                    "Pointer must be {}-byte aligned",
                    $align
                );

                $kernel::store(ptr, self.packed)
            }

            #[inline(always)]
            unsafe fn stream_at(&self, ptr: *mut $scalar) {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");
                debug_assert!(
                    <$ty as $crate::simd::Alignment<$scalar>>::is_aligned(ptr),
                    "Pointer must be {}-byte aligned",
                    $align
                );

                $kernel::stream(ptr, self.packed)
            }

            #[inline(always)]
            unsafe fn store_unaligned_at(&self, ptr: *mut $scalar) {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                $kernel::storeu(ptr, self.packed)
            }
        }

        impl $crate::simd::SimdVector for $ty {
            type Scalar = $scalar;

            const LANES: usize = $lanes;
            const ALIGNMENT: usize = $align;

            #[inline(always)]
            fn splat(value: $scalar) -> Self {
                <$ty>::splat(value)
            }

            #[inline(always)]
            fn horizontal_sum(self) -> $scalar {
                self.sum()
            }

            #[inline(always)]
            fn mul_add(self, b: Self, c: Self) -> Self {
                <$ty>::fma(self, b, c)
            }
        }
    };
}
