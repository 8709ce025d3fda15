//! Aligned scalar buffers.
//!
//! The aligned entry points of the vector types (`load`, `store_temporal`,
//! `store_nontemporal`) need 16- or 32-byte aligned memory, which `Vec<f32>`
//! does not guarantee. [`AlignedBuf`] owns a zero-initialised allocation with
//! a caller-chosen alignment and derefs to a plain slice.
//!
//! # Example
//!
//! ```rust
//! use lanewise::simd::Vec8xF32;
//! use lanewise::utils::AlignedBuf;
//!
//! let mut buf = AlignedBuf::<f32>::for_vector::<Vec8xF32>(16).unwrap();
//! buf.iter_mut().enumerate().for_each(|(i, x)| *x = i as f32);
//!
//! let v = unsafe { Vec8xF32::from_ptr(buf[8..].as_ptr()) };
//! assert_eq!(v.sum(), 8.0 + 9.0 + 10.0 + 11.0 + 12.0 + 13.0 + 14.0 + 15.0);
//! ```

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use num::Float;

use crate::error::{LanewiseError, Result};
use crate::simd::SimdVector;

/// Owned, zero-initialised buffer of `len` scalars whose first element sits
/// on an `align`-byte boundary.
///
/// Memory is released with the same layout it was allocated with when the
/// buffer is dropped. Zero-length buffers do not allocate; their pointer is
/// still aligned so that slice views stay valid.
pub struct AlignedBuf<T: Float> {
    ptr: NonNull<T>,
    len: usize,
    layout: Layout,
}

impl<T: Float> AlignedBuf<T> {
    /// Allocates `len` zeroed scalars aligned to `align` bytes.
    ///
    /// # Errors
    ///
    /// - [`LanewiseError::InvalidAlignment`] if `align` is not a power of
    ///   two or is smaller than `align_of::<T>()`.
    /// - [`LanewiseError::CapacityOverflow`] if the byte size does not fit in
    ///   one allocation.
    /// - [`LanewiseError::AllocationFailed`] if the allocator fails.
    pub fn new(len: usize, align: usize) -> Result<Self> {
        let layout = Self::layout_for(len, align)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: Self::dangling(align),
                len,
                layout,
            });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc_zeroed(layout) } as *mut T;
        let ptr = NonNull::new(raw).ok_or(LanewiseError::AllocationFailed {
            size: layout.size(),
            alignment: align,
        })?;

        Ok(Self { ptr, len, layout })
    }

    /// Allocates `len` zeroed scalars aligned for the vector type `V`.
    pub fn for_vector<V: SimdVector<Scalar = T>>(len: usize) -> Result<Self> {
        Self::new(len, V::ALIGNMENT)
    }

    /// Copies `data` into a new buffer aligned to `align` bytes.
    pub fn from_slice(data: &[T], align: usize) -> Result<Self> {
        let mut buf = Self::new(data.len(), align)?;
        buf.copy_from_slice(data);
        Ok(buf)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alignment in bytes the buffer was created with.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.layout.align()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn layout_for(len: usize, align: usize) -> Result<Layout> {
        let elem_size = mem::size_of::<T>();
        let min = mem::align_of::<T>();

        if !align.is_power_of_two() || align < min {
            return Err(LanewiseError::InvalidAlignment {
                alignment: align,
                min,
            });
        }

        let overflow = LanewiseError::CapacityOverflow { len, elem_size };
        let size = len.checked_mul(elem_size).ok_or(overflow)?;

        // align is valid here, so the only remaining failure is size > isize::MAX
        Layout::from_size_align(size, align).map_err(|_| overflow)
    }

    fn dangling(align: usize) -> NonNull<T> {
        // `align` is a non-zero power of two, so this is a well-aligned
        // non-null address; it is never dereferenced for a zero-length slice.
        match NonNull::new(align as *mut T) {
            Some(ptr) => ptr,
            None => NonNull::dangling(),
        }
    }
}

impl<T: Float> Drop for AlignedBuf<T> {
    fn drop(&mut self) {
        if self.layout.size() > 0 {
            // SAFETY: allocated in `new`/`clone` with exactly this layout.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, self.layout) };
        }
    }
}

impl<T: Float> Deref for AlignedBuf<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: `ptr` is valid for `len` initialised elements.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Float> DerefMut for AlignedBuf<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: `ptr` is valid for `len` initialised elements and uniquely
        // borrowed through `&mut self`.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Float> Clone for AlignedBuf<T> {
    fn clone(&self) -> Self {
        if self.layout.size() == 0 {
            return Self {
                ptr: Self::dangling(self.layout.align()),
                len: self.len,
                layout: self.layout,
            };
        }

        // SAFETY: non-zero size, same layout as the source allocation.
        let raw = unsafe { alloc_zeroed(self.layout) } as *mut T;
        let ptr = match NonNull::new(raw) {
            Some(ptr) => ptr,
            None => handle_alloc_error(self.layout),
        };

        // SAFETY: both regions hold `len` elements and do not overlap.
        unsafe { std::ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), self.len) };

        Self {
            ptr,
            len: self.len,
            layout: self.layout,
        }
    }
}

impl<T: Float + fmt::Debug> fmt::Debug for AlignedBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("alignment", &self.alignment())
            .field("data", &self.deref())
            .finish()
    }
}

// SAFETY: `AlignedBuf` uniquely owns its allocation, like `Vec<T>`.
unsafe impl<T: Float + Send> Send for AlignedBuf<T> {}
unsafe impl<T: Float + Sync> Sync for AlignedBuf<T> {}
