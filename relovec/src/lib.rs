#![doc = crate::docs::crate_docs!(
//! # `relovec`
//! A growable array with a pluggable, compile-time choice of how elements survive
//! reallocation.
//!
//! 1. [Summary](#summary)
//! 1. [Layout](#layout)
//! 1. [Examples](#examples)
//! 1. [Relocation strategies](#relocation-strategies)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! `relovec` splits a dynamic array into two layers:
//!
//! * [`RawBuf<T>`][crate::raw::RawBuf] owns a block of `capacity` uninitialized,
//!   `T`-aligned slots. It allocates and frees memory and never constructs or drops a `T`.
//! * [`Vector<T, R>`][crate::vector::Vector] owns a `RawBuf<T>` plus a length, and
//!   manages element lifetimes: construction, destruction, insertion, erasure and growth.
//!
//! When a `Vector` has to grow, it builds the new buffer completely before touching the
//! old one. The type parameter `R` decides how live elements get from the old buffer to
//! the new one, and therefore which guarantee holds if that transfer panics.
//!
//! # Layout
//!
//! ```svgbob
//! "Vector<T>"
//! +----------+-------+
//! | "buf"    | "len" |
//! +----------+-------+
//!   |
//!   |  "RawBuf<T>: capacity slots"
//!   |  +-------+-------+-------+-------+------------+------------+
//!   '->| "[0]" | "[1]" | "[2]" | "[3]" |  "uninit"  |  "uninit"  |
//!      +-------+-------+-------+-------+------------+------------+
//!      |<--------- len live -------->|<--- capacity - len --->|
//! ```
//!
//! # Examples
//!
//! ```
//! use relovec::prelude::*;
//!
//! let mut v: Vector<u32> = Vector::new();
//! v.push_back(1);
//! v.push_back(2);
//! v.push_back(3);
//! assert_eq!((v.len(), v.capacity()), (3, 4));
//!
//! v.insert(0, 0);
//! v.erase(3);
//! v.resize(5);
//! assert_eq!(v, [0, 1, 2, 0, 0]);
//! ```
//!
)]
//! # Relocation strategies
//!
//! | Strategy                                      | Requires       | Guarantee if a transfer panics |
//! |-----------------------------------------------|----------------|--------------------------------|
//! | [`ByMove`][crate::relocate::ByMove] (default) |                | transfers cannot panic         |
//! | [`ByClone`][crate::relocate::ByClone]         | `T: Clone`     | strong: the vector is unchanged |
//! | [`ByRelocate`][crate::relocate::ByRelocate]   | `T: Relocate`  | weak: the vector is valid, elements may be moved-from |
//!
//! See the [`relocate`] module for details.
//!
//! # Feature flags
//!
//! This crate has no *required* dependencies beyond `thiserror` and `tracing`. The
//! following feature flags exist:
//!
//! * `macro`. Enables `#[derive(Relocate)]`. Adds a dependency on `relovec_macro`, `syn`
//!   and `quote`.
//! * `doc`. Renders the diagrams in this documentation. Adds a dependency on
//!   `svgbobdoc`.
//!
//! Reallocations are reported as `tracing` events at `TRACE` level, and failed fallible
//! reservations at `DEBUG` level.

#![no_std]
extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

use core::ptr::NonNull;

pub mod error;
pub mod init;
pub mod prelude;
pub mod raw;
pub mod relocate;
pub mod vector;

mod docs;
mod guard;
#[cfg(test)]
mod testing;

pub use error::AllocError;
pub use raw::RawBuf;
pub use relocate::{ByClone, ByMove, ByRelocate, Relocate, Relocation};
#[cfg(feature = "macro")]
pub use relovec_macro::Relocate;
pub use vector::Vector;

/// Constructs a `T` directly into an uninitialized slot.
///
/// Initializers are the arguments of [`Vector::emplace_back`] and [`Vector::emplace`]:
/// they let the vector decide where the value goes before it is built. The standard ones
/// live in the [`init`] module.
///
/// # Examples
///
/// A user-defined initializer:
///
/// ```
/// use relovec::prelude::*;
/// use std::ptr::NonNull;
///
/// struct Repeat(char, usize);
///
/// unsafe impl Initializer<String> for Repeat {
///     unsafe fn initialize(self, dst: NonNull<String>) {
///         dst.as_ptr().write(std::iter::repeat(self.0).take(self.1).collect());
///     }
/// }
///
/// let mut v: Vector<String> = Vector::new();
/// v.emplace_back(Repeat('z', 3));
/// assert_eq!(v, ["zzz"]);
/// ```
///
/// # Safety
///
/// When `initialize(dst)` returns normally, `dst` must hold a fully constructed `T`. If it
/// panics, `dst` must be left uninitialized: nothing written there will be dropped.
pub unsafe trait Initializer<T> {
    /// Writes a `T` to `dst`.
    ///
    /// # Safety
    ///
    /// `dst` is valid for writes and aligned, and does not currently hold a live value.
    unsafe fn initialize(self, dst: NonNull<T>);
}
