#![warn(missing_docs)]

//! Strategies for moving live elements from an old buffer into a new one.
//!
//! When a [`Vector`][crate::vector::Vector] outgrows its buffer it allocates a larger one,
//! transfers every live element across, and only then disposes of the old elements and
//! installs the new buffer. How the transfer happens is chosen at compile time by the
//! vector's strategy parameter `R: Relocation<T>`:
//!
//! | Strategy       | Requires          | Transfer                         | If a transfer panics                                   |
//! |----------------|-------------------|----------------------------------|--------------------------------------------------------|
//! | [`ByMove`]     | nothing           | bitwise move                     | cannot panic                                           |
//! | [`ByClone`]    | `T: Clone`        | `clone()`, old elements kept     | old buffer untouched (strong guarantee)                |
//! | [`ByRelocate`] | `T: Relocate`     | [`Relocate::relocate`] hook      | old elements valid but possibly moved-from (weak)      |
//!
//! Rust moves never fail, so [`ByMove`] (the default) is the right strategy for almost
//! every type. The other two exist for types whose transfer runs user code that can
//! fail: pick [`ByClone`] if such a type is `Clone`, and [`ByRelocate`] otherwise.
//!
//! Shifting elements inside one buffer (by `insert` or `erase` without reallocation) is
//! always a bitwise move; strategies only govern transfers into a fresh buffer.
//!
//! # Examples
//!
//! ```
//! use relovec::prelude::*;
//!
//! // A Clone type relocated by cloning: the old buffer stays intact until the new
//! // one is complete.
//! let mut v: Vector<String, ByClone> = Vector::new();
//! v.push_back("a".to_string());
//! v.push_back("b".to_string());
//! v.push_back("c".to_string());
//! assert_eq!(v, ["a", "b", "c"]);
//! assert_eq!(v.capacity(), 4);
//! ```

use crate::guard::SlotGuard;
use alloc::string::String;
use alloc::vec::Vec;
use core::ptr::{self, NonNull};

mod private {
    pub trait Sealed {}
}

/// Compile-time choice of how live elements are transferred during reallocation.
///
/// Sealed: the implementations are [`ByMove`], [`ByClone`] and [`ByRelocate`].
pub trait Relocation<T>: private::Sealed {
    /// True if a panic during [`Self::relocate`] leaves every source element exactly as
    /// it was.
    const STRONG: bool;

    /// Constructs `len` elements at `dst` from the `len` live elements at `src`.
    ///
    /// If this panics, no element is left constructed at `dst`, and the source
    /// elements are still live (for [`ByRelocate`], possibly in a moved-from state).
    ///
    /// # Safety
    ///
    /// * `src` points to `len` live elements.
    /// * `dst` points to `len` uninitialized slots that do not overlap `src`.
    unsafe fn relocate(src: NonNull<T>, dst: NonNull<T>, len: usize);

    /// Disposes of the source elements after a successful [`Self::relocate`]. Afterwards
    /// the source slots are uninitialized.
    ///
    /// # Safety
    ///
    /// Must follow a successful `relocate(src, _, len)` call, exactly once.
    unsafe fn release(src: NonNull<T>, len: usize);
}

/// Relocates by bitwise move. The default strategy.
pub struct ByMove;

/// Relocates by cloning, then dropping the originals once every clone has succeeded.
pub struct ByClone;

/// Relocates through the [`Relocate`] hook, then drops the moved-from originals.
pub struct ByRelocate;

impl private::Sealed for ByMove {}
impl private::Sealed for ByClone {}
impl private::Sealed for ByRelocate {}

impl<T> Relocation<T> for ByMove {
    const STRONG: bool = true;

    #[inline]
    unsafe fn relocate(src: NonNull<T>, dst: NonNull<T>, len: usize) {
        ptr::copy_nonoverlapping(src.as_ptr(), dst.as_ptr(), len);
    }

    #[inline(always)]
    unsafe fn release(_src: NonNull<T>, _len: usize) {
        // The bits now live in the destination; the source slots are already logically
        // uninitialized.
    }
}

impl<T: Clone> Relocation<T> for ByClone {
    const STRONG: bool = true;

    unsafe fn relocate(src: NonNull<T>, dst: NonNull<T>, len: usize) {
        let mut built = SlotGuard::new(dst);
        for i in 0..len {
            let value = (*src.as_ptr().add(i)).clone();
            dst.as_ptr().add(i).write(value);
            built.len += 1;
        }
        built.disarm();
    }

    #[inline]
    unsafe fn release(src: NonNull<T>, len: usize) {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(src.as_ptr(), len));
    }
}

impl<T: Relocate> Relocation<T> for ByRelocate {
    const STRONG: bool = false;

    unsafe fn relocate(src: NonNull<T>, dst: NonNull<T>, len: usize) {
        let mut built = SlotGuard::new(dst);
        for i in 0..len {
            let value = <T as Relocate>::relocate(&mut *src.as_ptr().add(i));
            dst.as_ptr().add(i).write(value);
            built.len += 1;
        }
        built.disarm();
    }

    #[inline]
    unsafe fn release(src: NonNull<T>, len: usize) {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(src.as_ptr(), len));
    }
}

/// A move operation that runs user code and may fail.
///
/// `relocate` takes the value out of `src` and returns it, leaving `src` valid but
/// unspecified (typically empty), so that it can still be dropped. It may panic; if it
/// does, `src` must still be valid. Used by the [`ByRelocate`] strategy.
///
/// With the `macro` feature, `#[derive(Relocate)]` implements this field by field for
/// structs.
///
/// # Examples
///
/// ```
/// use relovec::prelude::*;
///
/// struct Ticket {
///     id: u32,
///     holder: String,
/// }
///
/// impl Relocate for Ticket {
///     fn relocate(src: &mut Self) -> Self {
///         Ticket {
///             id: src.id,
///             holder: Relocate::relocate(&mut src.holder),
///         }
///     }
/// }
///
/// let mut v: Vector<Ticket, ByRelocate> = Vector::new();
/// for id in 0..5 {
///     v.push_back(Ticket { id, holder: format!("holder {id}") });
/// }
/// assert_eq!(v[4].holder, "holder 4");
/// ```
pub trait Relocate: Sized {
    /// Moves the value out of `src`, leaving `src` valid but unspecified.
    fn relocate(src: &mut Self) -> Self;
}

macro_rules! relocate_by_copy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Relocate for $ty {
                #[inline(always)]
                fn relocate(src: &mut Self) -> Self {
                    *src
                }
            }
        )*
    };
}

relocate_by_copy!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
);

impl Relocate for String {
    #[inline]
    fn relocate(src: &mut Self) -> Self {
        core::mem::take(src)
    }
}

impl<T> Relocate for Vec<T> {
    #[inline]
    fn relocate(src: &mut Self) -> Self {
        core::mem::take(src)
    }
}

impl<T> Relocate for Option<T> {
    #[inline]
    fn relocate(src: &mut Self) -> Self {
        src.take()
    }
}
