//! Error types for lanewise buffer operations.
//!
//! The vector types themselves never fail: their preconditions (alignment,
//! buffer length) are documented and only checked in debug builds. The
//! buffer-level helpers ([`crate::utils::AlignedBuf`] and the slice traits in
//! [`crate::simd::slice`]) validate their inputs and report problems through
//! [`LanewiseError`].

use std::fmt;

/// Errors reported by [`crate::AlignedBuf`] and the slice traits.
///
/// Every variant carries the numbers that caused it, so callers can match on
/// them instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanewiseError {
    /// The allocator returned null for a valid layout.
    AllocationFailed {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        alignment: usize,
    },
    /// The alignment is not a power of two, or is below the element's own
    /// alignment.
    InvalidAlignment {
        alignment: usize,
        /// Smallest alignment the element type accepts.
        min: usize,
    },
    /// `len * elem_size` does not fit in an allocation (`isize::MAX` bytes).
    CapacityOverflow { len: usize, elem_size: usize },
    /// An operand of an element-wise slice operation is not as long as the
    /// receiver.
    LengthMismatch {
        /// Which operand was short or long (`"rhs"`, `"b"`, `"c"`).
        operand: &'static str,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for LanewiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LanewiseError::AllocationFailed { size, alignment } => write!(
                f,
                "allocation of {size} bytes with {alignment} byte alignment failed"
            ),
            LanewiseError::InvalidAlignment { alignment, min } => write!(
                f,
                "invalid alignment {alignment}: must be a power of two and at least {min}"
            ),
            LanewiseError::CapacityOverflow { len, elem_size } => write!(
                f,
                "buffer of {len} elements of {elem_size} bytes exceeds the maximum allocation size"
            ),
            LanewiseError::LengthMismatch {
                operand,
                expected,
                found,
            } => write!(f, "{operand} has {found} elements, expected {expected}"),
        }
    }
}

impl std::error::Error for LanewiseError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, LanewiseError>;
