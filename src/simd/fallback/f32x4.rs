//! 4 × f32 kernels on a `[f32; 4]` register.

super::lane_kernels!(f32, u32, 4);

/// `(l0 + l1) + (l2 + l3)`, the order two `hadd` instructions produce.
#[inline(always)]
pub(crate) fn sum(a: Packed) -> f32 {
    (a[0] + a[1]) + (a[2] + a[3])
}
