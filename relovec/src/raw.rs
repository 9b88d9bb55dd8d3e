//! Owner of a block of uninitialized slots.
//!
//! [`RawBuf<T>`] knows how many slots exist, never how many of them hold a value. It
//! never constructs or drops a `T`; that is the job of its owner, typically a
//! [`Vector`][crate::vector::Vector].
//!
//! # Examples
//!
//! Manually constructing into and destroying out of the slots:
//!
//! ```
//! use relovec::raw::RawBuf;
//!
//! let buf: RawBuf<String> = RawBuf::with_capacity(2);
//! assert_eq!(buf.capacity(), 2);
//! unsafe {
//!     buf.slot(0).as_ptr().write("hello".to_string());
//!     assert_eq!(buf.get_unchecked(0), "hello");
//!     // The buffer does not drop its contents: we must.
//!     buf.slot(0).as_ptr().drop_in_place();
//! }
//! ```

use crate::error::AllocError;
use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

/// A block of `capacity` uninitialized, `T`-aligned slots.
///
/// A `RawBuf` can be moved but not cloned: duplicating reserved space says nothing about
/// how to duplicate whatever values the owner built inside it. Duplication is a
/// [`Vector`][crate::vector::Vector]-level operation.
///
/// ```compile_fail
/// use relovec::raw::RawBuf;
/// let a: RawBuf<u32> = RawBuf::with_capacity(4);
/// let b = a.clone();
/// ```
///
/// With capacity 0 no memory is owned, and the address is dangling (well aligned, never
/// dereferenced). Zero-sized `T` never allocates.
///
/// # Examples
///
/// ```
/// use relovec::raw::RawBuf;
///
/// let empty: RawBuf<u8> = RawBuf::new();
/// assert_eq!(empty.capacity(), 0);
///
/// let buf: RawBuf<u8> = RawBuf::with_capacity(16);
/// assert_eq!(buf.capacity(), 16);
/// ```
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// Safety: a RawBuf is a uniquely owned allocation, like Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An empty buffer. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Reserves `capacity` uninitialized slots.
    ///
    /// Panics if the byte size overflows, and aborts through
    /// [`handle_alloc_error`][alloc::alloc::handle_alloc_error] if the allocator fails.
    /// See [`Self::try_with_capacity`] for a fallible variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::raw::RawBuf;
    /// let buf: RawBuf<u64> = RawBuf::with_capacity(3);
    /// assert_eq!(buf.capacity(), 3);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| e.raise())
    }

    /// Reserves `capacity` uninitialized slots, reporting failure instead of diverging.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::raw::RawBuf;
    /// use relovec::error::AllocError;
    ///
    /// assert!(RawBuf::<u32>::try_with_capacity(8).is_ok());
    /// assert_eq!(
    ///     RawBuf::<u32>::try_with_capacity(usize::MAX).unwrap_err(),
    ///     AllocError::CapacityOverflow { requested: usize::MAX },
    /// );
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow {
            requested: capacity,
        })?;
        if layout.size() == 0 {
            return Ok(RawBuf {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }
        // Safety: layout has non-zero size.
        let ptr = unsafe { alloc::alloc::alloc(layout) };
        let ptr = NonNull::new(ptr.cast::<T>()).ok_or_else(|| AllocError::failed(layout))?;
        Ok(RawBuf {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Address of slot 0.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable address of slot 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of the slot at `offset`. `offset == capacity` gives the one-past-the-end
    /// address.
    ///
    /// # Panics
    ///
    /// Panics if `offset > capacity`.
    #[inline]
    pub fn slot(&self, offset: usize) -> NonNull<T> {
        assert!(
            offset <= self.capacity,
            "slot {offset} out of range for RawBuf of capacity {}",
            self.capacity
        );
        // Safety: `offset` is within (or one past) the block, so the result is non-null.
        unsafe { NonNull::new_unchecked(self.ptr.as_ptr().add(offset)) }
    }

    /// Reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// `index < capacity`, and the slot holds an initialized `T`. The bound is checked
    /// in debug builds only.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity);
        &*self.ptr.as_ptr().add(index)
    }

    /// Mutable reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// Same as [`Self::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.capacity);
        &mut *self.ptr.as_ptr().add(index)
    }

    /// Exchanges address and capacity with `other`.
    ///
    /// This is how a [`Vector`][crate::vector::Vector] installs a fully populated new
    /// buffer: until the swap, the old buffer has not been touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::raw::RawBuf;
    /// let mut a: RawBuf<u8> = RawBuf::with_capacity(1);
    /// let mut b: RawBuf<u8> = RawBuf::with_capacity(7);
    /// a.swap_with(&mut b);
    /// assert_eq!((a.capacity(), b.capacity()), (7, 1));
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the block out, leaving `self` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use relovec::raw::RawBuf;
    /// let mut a: RawBuf<u8> = RawBuf::with_capacity(4);
    /// let b = a.take();
    /// assert_eq!(a.capacity(), 0);
    /// assert_eq!(b.capacity(), 4);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    #[inline]
    fn layout(&self) -> Layout {
        // Safety: validated by Layout::array when this block was allocated.
        unsafe {
            Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            )
        }
    }
}

impl<T> Default for RawBuf<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for RawBuf<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuf")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let layout = self.layout();
        if layout.size() != 0 {
            unsafe {
                alloc::alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, Brittle};
    use std::string::{String, ToString};

    #[test]
    fn zero_capacity_does_not_allocate() {
        let buf: RawBuf<u64> = RawBuf::with_capacity(0);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.as_ptr(), NonNull::<u64>::dangling().as_ptr() as *const u64);
    }

    #[test]
    fn zero_sized_elements_have_any_capacity() {
        let buf: RawBuf<()> = RawBuf::with_capacity(usize::MAX);
        assert_eq!(buf.capacity(), usize::MAX);
    }

    #[test]
    fn slots_are_aligned() {
        #[repr(align(64))]
        struct Wide(#[allow(dead_code)] u8);
        let buf: RawBuf<Wide> = RawBuf::with_capacity(3);
        for i in 0..=3 {
            assert_eq!(buf.slot(i).as_ptr() as usize % 64, 0);
        }
    }

    #[test]
    #[should_panic(expected = "out of range for RawBuf of capacity 0")]
    fn slot_past_end_panics() {
        RawBuf::<u8>::new().slot(usize::MAX);
    }

    #[test]
    #[should_panic(expected = "slot 4 out of range")]
    fn slot_beyond_one_past_end_panics() {
        let buf: RawBuf<u32> = RawBuf::with_capacity(3);
        let end = buf.slot(3).as_ptr() as usize;
        assert_eq!(end - buf.as_ptr() as usize, 3 * core::mem::size_of::<u32>());
        buf.slot(4);
    }

    #[test]
    fn overflow_is_reported() {
        let err = RawBuf::<u32>::try_with_capacity(usize::MAX / 2).unwrap_err();
        assert_eq!(
            err,
            AllocError::CapacityOverflow {
                requested: usize::MAX / 2
            }
        );
        assert_eq!(
            err.to_string(),
            std::format!(
                "capacity overflow: {} slots exceed the maximum allocation size",
                usize::MAX / 2
            )
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn infallible_overflow_panics() {
        let _ = RawBuf::<u32>::with_capacity(usize::MAX);
    }

    #[test]
    fn drop_releases_without_dropping_elements() {
        let _scope = testing::scope();
        let buf: RawBuf<Brittle> = RawBuf::with_capacity(2);
        unsafe {
            buf.slot(0).as_ptr().write(Brittle::new(1));
            buf.slot(1).as_ptr().write(Brittle::new(2));
        }
        drop(buf);
        // Both values were leaked along with the block.
        assert_eq!(testing::live(), 2);
    }

    #[test]
    fn swap_and_take_exchange_ownership() {
        let mut a: RawBuf<String> = RawBuf::with_capacity(1);
        unsafe { a.slot(0).as_ptr().write("a".to_string()) };
        let mut b: RawBuf<String> = RawBuf::new();
        let a_addr = a.as_ptr();

        b.swap_with(&mut a);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 1);
        assert_eq!(b.as_ptr(), a_addr);

        let mut c = b.take();
        assert_eq!(b.capacity(), 0);
        assert_eq!(c.capacity(), 1);
        unsafe {
            assert_eq!(c.get_unchecked(0), "a");
            c.get_unchecked_mut(0).push('!');
            assert_eq!(c.get_unchecked(0), "a!");
            c.slot(0).as_ptr().drop_in_place();
        }
    }
}
