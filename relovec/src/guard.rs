use core::ptr::{self, NonNull};

/// Drops `len` contiguous constructed slots starting at `start` unless disarmed.
///
/// Held across code that may panic while a run of slots is being populated, so that the
/// slots built so far are dropped during unwinding instead of leaking.
pub(crate) struct SlotGuard<T> {
    start: NonNull<T>,
    pub(crate) len: usize,
}

impl<T> SlotGuard<T> {
    #[inline(always)]
    pub(crate) fn new(start: NonNull<T>) -> Self {
        SlotGuard { start, len: 0 }
    }

    #[inline(always)]
    pub(crate) fn covering(start: NonNull<T>, len: usize) -> Self {
        SlotGuard { start, len }
    }

    /// The slots are now owned elsewhere.
    #[inline(always)]
    pub(crate) fn disarm(self) {
        core::mem::forget(self);
    }
}

impl<T> Drop for SlotGuard<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start.as_ptr(), self.len));
        }
    }
}
