//! Allocation errors, and the never-returning helpers that the infallible APIs use
//! when a request cannot be satisfied or a precondition is violated.
//!
//! # Examples
//!
//! ```
//! use relovec::prelude::*;
//!
//! let mut v: Vector<u64> = Vector::new();
//! let err = v.try_reserve(usize::MAX).unwrap_err();
//! assert!(matches!(err, AllocError::CapacityOverflow { .. }));
//! // The failed reservation left the vector untouched.
//! assert_eq!(v.capacity(), 0);
//! ```

use core::alloc::Layout;

/// The memory source could not satisfy a capacity request.
///
/// Returned by the `try_` entry points such as
/// [`RawBuf::try_with_capacity`][crate::raw::RawBuf::try_with_capacity] and
/// [`Vector::try_reserve`][crate::vector::Vector::try_reserve]. The object that
/// made the request is left unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The byte size of the requested capacity does not fit in `isize`.
    #[error("capacity overflow: {requested} slots exceed the maximum allocation size")]
    CapacityOverflow {
        /// Number of slots that was requested.
        requested: usize,
    },
    /// The global allocator returned null.
    #[error("memory allocation of {size} bytes (align {align}) failed")]
    AllocFailed {
        /// Size of the failed request in bytes.
        size: usize,
        /// Alignment of the failed request.
        align: usize,
    },
}

impl AllocError {
    pub(crate) fn failed(layout: Layout) -> Self {
        AllocError::AllocFailed {
            size: layout.size(),
            align: layout.align(),
        }
    }

    /// Diverges: panics on capacity overflow, aborts through
    /// [`handle_alloc_error`][alloc::alloc::handle_alloc_error] on allocator failure.
    #[inline(never)]
    #[cold]
    pub(crate) fn raise(self) -> ! {
        match self {
            AllocError::CapacityOverflow { .. } => capacity_overflow(),
            AllocError::AllocFailed { size, align } => {
                // Safety: the layout was validated before it reached the allocator.
                let layout = unsafe { Layout::from_size_align_unchecked(size, align) };
                alloc::alloc::handle_alloc_error(layout)
            }
        }
    }
}

#[inline(never)]
#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[inline(never)]
#[cold]
pub(crate) fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index {index} out of bounds for Vector of length {len}")
}

#[inline(never)]
#[cold]
pub(crate) fn pop_empty() -> ! {
    panic!("pop_back on empty Vector")
}
