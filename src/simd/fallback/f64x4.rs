//! 4 × f64 kernels on a `[f64; 4]` register.

super::lane_kernels!(f64, u64, 4);

#[inline(always)]
pub(crate) fn sum(a: Packed) -> f64 {
    (a[0] + a[1]) + (a[2] + a[3])
}
