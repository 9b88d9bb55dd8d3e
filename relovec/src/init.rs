#![warn(missing_docs)]

//! Standard [`Initializer`]s: the arguments of [`Vector::emplace_back`] and
//! [`Vector::emplace`].
//!
//! An initializer builds a `T` directly into a slot. If it panics, the slot is left
//! uninitialized and the container that asked for it is unchanged.
//!
//! # Examples
//!
//! ```
//! use relovec::prelude::*;
//!
//! let template = String::from("x");
//! let mut v: Vector<String> = Vector::new();
//! v.emplace_back(MoveFrom(String::from("moved")));
//! v.emplace_back(CloneFrom(&template));
//! v.emplace_back(FromFn(|| "built".repeat(2)));
//! v.emplace_back(FillWithDefault);
//! assert_eq!(v, ["moved", "x", "builtbuilt", ""]);
//! ```
//!
//! [`Vector::emplace_back`]: crate::vector::Vector::emplace_back
//! [`Vector::emplace`]: crate::vector::Vector::emplace

use crate::Initializer;
use core::ptr::NonNull;

/// Initializer that moves an existing value into the slot.
///
/// # Examples
///
/// ```
/// use relovec::prelude::*;
/// let mut v: Vector<u8> = Vector::new();
/// assert_eq!(*v.emplace_back(MoveFrom(4)), 4);
/// ```
pub struct MoveFrom<T>(pub T);

unsafe impl<T> Initializer<T> for MoveFrom<T> {
    #[inline(always)]
    unsafe fn initialize(self, dst: NonNull<T>) {
        dst.as_ptr().write(self.0);
    }
}

/// Initializer that runs a closure to produce the value.
///
/// # Examples
///
/// ```
/// use relovec::prelude::*;
/// let mut v: Vector<Vec<u8>> = Vector::new();
/// v.emplace_back(FromFn(|| vec![1, 2, 3]));
/// assert_eq!(v[0], [1, 2, 3]);
/// ```
pub struct FromFn<F>(pub F);

unsafe impl<T, F: FnOnce() -> T> Initializer<T> for FromFn<F> {
    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) {
        dst.as_ptr().write((self.0)());
    }
}

/// Initializer that writes `T::default()`.
///
/// # Examples
///
/// ```
/// use relovec::prelude::*;
/// let mut v: Vector<u32> = Vector::new();
/// assert_eq!(*v.emplace_back(FillWithDefault), 0);
/// ```
pub struct FillWithDefault;

unsafe impl<T: Default> Initializer<T> for FillWithDefault {
    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) {
        dst.as_ptr().write(T::default());
    }
}

/// Initializer that clones from a reference.
///
/// # Examples
///
/// ```
/// use relovec::prelude::*;
/// let s = String::from("copy me");
/// let mut v: Vector<String> = Vector::new();
/// v.emplace_back(CloneFrom(&s));
/// assert_eq!(v[0], s);
/// ```
pub struct CloneFrom<'a, T>(pub &'a T);

unsafe impl<'a, T: Clone> Initializer<T> for CloneFrom<'a, T> {
    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) {
        dst.as_ptr().write(self.0.clone());
    }
}
