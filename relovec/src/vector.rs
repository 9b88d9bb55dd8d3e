//! A growable array that owns a [`RawBuf`] and tracks how many of its slots are live.
//!
//! # Examples
//!
//! ```
//! use relovec::prelude::*;
//!
//! let mut v: Vector<u32> = Vector::new();
//! v.push_back(10);
//! v.push_back(20);
//! v.push_back(30);
//! v.insert(1, 99);
//! assert_eq!(v, [10, 99, 20, 30]);
//! assert_eq!(v.erase(0), 0);
//! assert_eq!(v, [99, 20, 30]);
//! ```
//!
//! # Growth
//!
//! An append or insert into a full vector reallocates to `max(1, 2 * len)` slots, so
//! appending one at a time from empty observes capacities 0, 1, 2, 4, 8, … The new
//! element is constructed in the new buffer first, then the live elements are
//! transferred by the vector's [`Relocation`] strategy, the new buffer is installed, and
//! only then are the old elements released. Until the install, the vector itself has
//! not been touched, so a panic anywhere before it leaves the vector as it was.

use crate::error::{capacity_overflow, out_of_bounds, pop_empty, AllocError};
use crate::guard::SlotGuard;
use crate::init::MoveFrom;
use crate::raw::RawBuf;
use crate::relocate::{ByMove, Relocate, Relocation};
use crate::Initializer;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::{fmt, slice};

/// A contiguous growable array, parameterized by the strategy `R` that transfers elements
/// into a new buffer when it grows.
///
/// Element `i` lives in slot `i` of the buffer for every `i < len()`; slots
/// `[len(), capacity())` are uninitialized.
///
/// # Examples
///
/// ```
/// use relovec::prelude::*;
///
/// let mut v: Vector<String> = Vector::with_len(2);
/// v[0].push_str("left");
/// v.push_back("right".to_string());
/// assert_eq!(v, ["left", "", "right"]);
/// assert_eq!(v.capacity(), 4);
/// ```
pub struct Vector<T, R: Relocation<T> = ByMove> {
    buf: RawBuf<T>,
    len: usize,
    _strategy: PhantomData<R>,
}

impl<T, R: Relocation<T>> Vector<T, R> {
    /// Creates an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Vector {
            buf: RawBuf::new(),
            len: 0,
            _strategy: PhantomData,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let v: Vector<u8> = Vector::with_capacity(5);
    /// assert_eq!((v.len(), v.capacity()), (0, 5));
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
            _strategy: PhantomData,
        }
    }

    /// Creates a vector of `len` default values, with capacity exactly `len`.
    ///
    /// If `T::default()` panics, the elements built so far are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let v: Vector<i64> = Vector::with_len(3);
    /// assert_eq!(v, [0, 0, 0]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Creates a vector of `len` elements, element `i` being `f(i)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let v: Vector<usize> = Vector::from_fn(4, |i| i * i);
    /// assert_eq!(v, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> Self {
        let mut v = Self::with_capacity(len);
        for i in 0..len {
            // Safety: i < len == capacity, and slot i is uninitialized.
            unsafe { v.buf.slot(i).as_ptr().write(f(i)) };
            v.len += 1;
        }
        v
    }

    /// Creates a vector of `len` clones of `value`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self::from_fn(len, |_| value.clone())
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Address of the first slot. Dangling when the capacity is zero.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: the first len slots are live.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: the first len slots are live, and we have unique access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Reference to element `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < len()`. Checked in debug builds only.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        self.buf.get_unchecked(index)
    }

    /// Mutable reference to element `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < len()`. Checked in debug builds only.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        self.buf.get_unchecked_mut(index)
    }

    /// Iterates over references, front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates over mutable references, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Exchanges buffers and lengths. Never touches an element.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let mut a: Vector<u8> = vector![1, 2];
    /// let mut b: Vector<u8> = vector![3];
    /// a.swap_with(&mut b);
    /// assert_eq!(a, [3]);
    /// assert_eq!(b, [1, 2]);
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap_with(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with capacity 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let mut a: Vector<u8> = vector![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Drops the current contents and takes over those of `rhs`, leaving `rhs` empty.
    #[inline]
    pub fn take_from(&mut self, rhs: &mut Self) {
        *self = rhs.take();
    }

    /// Ensures the capacity is at least `new_capacity` (a total, not an increment).
    ///
    /// Does nothing if the capacity is already large enough; otherwise reallocates to
    /// exactly `new_capacity` slots. Panics on capacity overflow; see
    /// [`Self::try_reserve`] for a fallible variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let mut v: Vector<u8> = vector![1];
    /// v.reserve(10);
    /// assert_eq!(v.capacity(), 10);
    /// v.reserve(3);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            err.raise()
        }
    }

    /// Like [`Self::reserve`], but reports allocation failure. On error the vector is
    /// unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let new_buf = RawBuf::try_with_capacity(new_capacity).map_err(|err| {
            tracing::debug!(%err, requested = new_capacity, len = self.len, "reserve failed");
            err
        })?;
        let len = self.len;
        unsafe {
            self.note_reallocation(&new_buf);
            R::relocate(self.buf.slot(0), new_buf.slot(0), len);
            self.install(new_buf, len);
        }
        Ok(())
    }

    /// Grows or shrinks to `new_len` elements, filling with `T::default()`.
    ///
    /// Growing reserves exactly `new_len`. If a default construction panics, the new
    /// elements built so far are dropped and the length is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let mut v: Vector<u32> = vector![1, 2];
    /// v.resize(5);
    /// assert_eq!(v, [1, 2, 0, 0, 0]);
    /// v.resize(1);
    /// assert_eq!(v, [1]);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Grows or shrinks to `new_len` elements, filling with the results of `f`.
    pub fn resize_with(&mut self, new_len: usize, mut f: impl FnMut() -> T) {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        unsafe {
            let mut built = SlotGuard::new(self.buf.slot(len));
            for i in len..new_len {
                self.buf.slot(i).as_ptr().write(f());
                built.len += 1;
            }
            built.disarm();
        }
        self.len = new_len;
    }

    /// Drops every element past the first `len`. No effect if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        self.len = len;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot(len).as_ptr(),
                tail,
            ));
        }
    }

    /// Drops every element. Keeps the buffer.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Appends `value`, returning a reference to it.
    #[inline]
    pub fn push_back(&mut self, value: T) -> &mut T {
        self.emplace_back(MoveFrom(value))
    }

    /// Appends the value built by `init`, returning a reference to it.
    ///
    /// If `init` panics, the vector is unchanged, even when the call would have
    /// reallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let mut v: Vector<String> = Vector::new();
    /// v.emplace_back(FromFn(|| "abc".to_uppercase())).push('!');
    /// assert_eq!(v, ["ABC!"]);
    /// ```
    pub fn emplace_back(&mut self, init: impl Initializer<T>) -> &mut T {
        let len = self.len;
        if len == self.capacity() {
            let new_buf = RawBuf::with_capacity(self.grown_capacity());
            unsafe {
                init.initialize(new_buf.slot(len));
                let pushed = SlotGuard::covering(new_buf.slot(len), 1);
                self.note_reallocation(&new_buf);
                R::relocate(self.buf.slot(0), new_buf.slot(0), len);
                pushed.disarm();
                self.install(new_buf, len + 1);
            }
        } else {
            unsafe { init.initialize(self.buf.slot(len)) };
            self.len = len + 1;
        }
        unsafe { self.buf.get_unchecked_mut(len) }
    }

    /// Removes and drops the last element.
    ///
    /// # Panics
    ///
    /// If the vector is empty. See [`Self::pop`] for a non-panicking variant.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            pop_empty()
        }
        self.len -= 1;
        unsafe { ptr::drop_in_place(self.buf.slot(self.len).as_ptr()) }
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.buf.slot(self.len).as_ptr().read() })
    }

    /// Inserts `value` at `index`, shifting later elements back by one.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace(index, MoveFrom(value))
    }

    /// Inserts the value built by `init` at `index`, returning a reference to it.
    ///
    /// `index == len()` is the same as [`Self::emplace_back`]. Otherwise, without
    /// reallocation the value is built into a temporary before any element is shifted,
    /// and with reallocation it is built straight into the new buffer, with the
    /// elements before and after it relocated around it. Either way a panicking `init`
    /// leaves the vector unchanged.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::prelude::*;
    /// let mut v: Vector<String> = vector!["a".to_string(), "c".to_string()];
    /// v.emplace(1, CloneFrom(&"b".to_string()));
    /// assert_eq!(v, ["a", "b", "c"]);
    /// ```
    pub fn emplace(&mut self, index: usize, init: impl Initializer<T>) -> &mut T {
        let len = self.len;
        if index > len {
            out_of_bounds(index, len)
        }
        if index == len {
            return self.emplace_back(init);
        }
        if len == self.capacity() {
            let new_buf = RawBuf::with_capacity(self.grown_capacity());
            unsafe {
                init.initialize(new_buf.slot(index));
                let inserted = SlotGuard::covering(new_buf.slot(index), 1);
                self.note_reallocation(&new_buf);
                R::relocate(self.buf.slot(0), new_buf.slot(0), index);
                let prefix = SlotGuard::covering(new_buf.slot(0), index);
                R::relocate(self.buf.slot(index), new_buf.slot(index + 1), len - index);
                prefix.disarm();
                inserted.disarm();
                self.install(new_buf, len + 1);
            }
        } else {
            let mut value = MaybeUninit::<T>::uninit();
            unsafe {
                init.initialize(NonNull::from(&mut value).cast());
                let at = self.buf.slot(index).as_ptr();
                ptr::copy(at, at.add(1), len - index);
                at.write(value.assume_init());
            }
            self.len = len + 1;
        }
        unsafe { self.buf.get_unchecked_mut(index) }
    }

    /// Removes and drops the element at `index`, shifting later elements forward.
    /// Returns `index`, now the position of the element that followed the removed one.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at `index`, shifting later elements forward.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            out_of_bounds(index, len)
        }
        unsafe {
            let at = self.buf.slot(index).as_ptr();
            let removed = at.read();
            ptr::copy(at.add(1), at, len - index - 1);
            self.len = len - 1;
            removed
        }
    }

    /// Capacity after the next reallocating append: `max(1, 2 * len)`.
    #[inline]
    fn grown_capacity(&self) -> usize {
        match self.len {
            0 => 1,
            len => len.checked_mul(2).unwrap_or_else(|| capacity_overflow()),
        }
    }

    #[inline]
    fn note_reallocation(&self, new_buf: &RawBuf<T>) {
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = new_buf.capacity(),
            len = self.len,
            "reallocating"
        );
    }

    /// Installs a fully populated `new_buf` holding `new_len` elements, then releases
    /// the elements left in the old buffer.
    ///
    /// # Safety
    ///
    /// The old buffer's elements were all relocated into `new_buf`.
    #[inline]
    unsafe fn install(&mut self, mut new_buf: RawBuf<T>, new_len: usize) {
        let old_len = self.len;
        self.buf.swap_with(&mut new_buf);
        self.len = new_len;
        // The vector is consistent from here on, even if a release panics.
        R::release(new_buf.slot(0), old_len);
    }
}

impl<T, R: Relocation<T>> Drop for Vector<T, R> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) }
    }
}

impl<T, R: Relocation<T>> Default for Vector<T, R> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R: Relocation<T>> Clone for Vector<T, R> {
    /// Clones into a buffer of exactly `len()` slots.
    fn clone(&self) -> Self {
        let src = self.as_slice();
        Self::from_fn(src.len(), |i| src[i].clone())
    }

    /// Reuses the existing buffer and elements where it can.
    ///
    /// If `source` does not fit in the current capacity, it is cloned in full before
    /// anything in `self` changes.
    fn clone_from(&mut self, source: &Self) {
        let rhs = source.as_slice();
        if rhs.len() > self.capacity() {
            let mut copy = source.clone();
            self.swap_with(&mut copy);
            return;
        }
        let shared = core::cmp::min(self.len, rhs.len());
        for (dst, src) in self.iter_mut().zip(&rhs[..shared]) {
            dst.clone_from(src);
        }
        if rhs.len() < self.len {
            self.truncate(rhs.len());
        } else {
            for item in &rhs[shared..] {
                unsafe { self.buf.slot(self.len).as_ptr().write(item.clone()) };
                self.len += 1;
            }
        }
    }
}

impl<T, R: Relocation<T>> Deref for Vector<T, R> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, R: Relocation<T>> DerefMut for Vector<T, R> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, R: Relocation<T>> AsRef<[T]> for Vector<T, R> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, R: Relocation<T>> AsMut<[T]> for Vector<T, R> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, R: Relocation<T>> fmt::Debug for Vector<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, R1, R2> PartialEq<Vector<U, R2>> for Vector<T, R1>
where
    T: PartialEq<U>,
    R1: Relocation<T>,
    R2: Relocation<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U, R2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, R: Relocation<T>> PartialEq<[U]> for Vector<T, R> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, R: Relocation<T>> PartialEq<&[U]> for Vector<T, R> {
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, R: Relocation<T>, const N: usize> PartialEq<[U; N]> for Vector<T, R> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: Eq, R: Relocation<T>> Eq for Vector<T, R> {}

impl<T: Hash, R: Relocation<T>> Hash for Vector<T, R> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state)
    }
}

impl<T, R: Relocation<T>> Extend<T> for Vector<T, R> {
    /// Appends one element at a time, following the usual growth policy.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, R: Relocation<T>> FromIterator<T> for Vector<T, R> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Vector::new();
        v.extend(iter);
        v
    }
}

/// A moved-from vector is empty.
impl<T, R: Relocation<T>> Relocate for Vector<T, R> {
    #[inline]
    fn relocate(src: &mut Self) -> Self {
        src.take()
    }
}

impl<'a, T, R: Relocation<T>> IntoIterator for &'a Vector<T, R> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, R: Relocation<T>> IntoIterator for &'a mut Vector<T, R> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, R: Relocation<T>> IntoIterator for Vector<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        let mut this = ManuallyDrop::new(self);
        IntoIter {
            buf: this.buf.take(),
            start: 0,
            end: this.len,
        }
    }
}

/// Owning iterator over the elements of a [`Vector`].
///
/// Dropping it drops the elements not yet yielded, then frees the buffer.
///
/// # Examples
///
/// ```
/// use relovec::prelude::*;
/// let v: Vector<String> = vector!["a".into(), "b".into(), "c".into()];
/// let mut it = v.into_iter();
/// assert_eq!(it.next_back().as_deref(), Some("c"));
/// assert_eq!(it.len(), 2);
/// assert_eq!(it.collect::<Vec<_>>(), ["a", "b"]);
/// ```
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.slot(self.start).as_ptr(), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let value = unsafe { self.buf.slot(self.start).as_ptr().read() };
        self.start += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.start;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        Some(unsafe { self.buf.slot(self.end).as_ptr().read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot(self.start).as_ptr(),
                self.end - self.start,
            ));
        }
    }
}

/// Creates a [`Vector`] from a list of elements, or from `value; n` clones.
///
/// Elements are appended one at a time, so the capacity follows the growth policy.
///
/// # Examples
///
/// ```
/// use relovec::prelude::*;
///
/// let v: Vector<i32> = vector![1, 2, 3];
/// assert_eq!((v.len(), v.capacity()), (3, 4));
///
/// let w: Vector<&str, ByClone> = vector!["x"; 2];
/// assert_eq!(w, ["x", "x"]);
///
/// let e: Vector<u8> = vector![];
/// assert!(e.is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::vector::Vector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::vector::Vector::from_elem($value, $n)
    };
    ($($x:expr),+ $(,)?) => {{
        let mut v = $crate::vector::Vector::new();
        $(
            v.push_back($x);
        )+
        v
    }};
}
