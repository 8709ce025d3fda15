//! SSE4.1 / AVX / FMA kernels.
//!
//! Each submodule wraps one hardware register shape and exposes the same
//! function set as its counterpart in [`crate::simd::fallback`], so the vector
//! types can be written once against either backend.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Piledriver (2012+) and later
//! - **Instruction Sets**: SSE3, SSE4.1, AVX and FMA
//! - **Selection**: The build script only enables this module when all of the
//!   above are available to the target
//!
//! Intrinsics that take no pointer are safe to call in some target-feature
//! contexts and unsafe in others, hence the module-wide `unused_unsafe`.
#![allow(unused_unsafe)]

pub(crate) mod f32x4;
pub(crate) mod f32x8;
pub(crate) mod f64x4;

/// Backend name reported by [`crate::backend`].
pub(crate) const NAME: &str = "avx";
