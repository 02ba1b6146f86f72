//! The storage capability a `Vector` is built on.
//!
//! A `Vector` never touches the heap directly: every block it owns comes from
//! [`Allocator::allocate`], every element it holds is written with
//! [`Allocator::construct`] and torn down with [`Allocator::destroy`].

use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::mem;
use core::ptr::{self, NonNull};

/// Raw storage and element lifecycle for values of type `T`.
///
/// # Safety
///
/// Implementors must return from `allocate(n)` a block that is properly
/// aligned for `T` and valid for reads and writes of `n` consecutive slots,
/// and must keep it valid until it is handed back to `deallocate` with the same
/// `n`. `max_size` must never report more slots than `allocate` can serve.
pub unsafe trait Allocator<T> {
    /// Allocates uninitialized storage for `n` slots.
    ///
    /// `Vector` never asks for zero slots. Exhaustion is fatal.
    fn allocate(&self, n: usize) -> NonNull<T>;

    /// Releases a block previously obtained from `allocate(n)`.
    ///
    /// # Safety
    ///
    /// `block` must come from `self.allocate(n)` with the same `n`, and every
    /// slot in it must already be destroyed or moved out.
    unsafe fn deallocate(&self, block: NonNull<T>, n: usize);

    /// Writes `value` into an uninitialized slot.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes and must not hold a live element.
    unsafe fn construct(&self, slot: *mut T, value: T) {
        unsafe { ptr::write(slot, value) }
    }

    /// Drops the element in `slot` in place, leaving it uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live element that nothing else will drop.
    unsafe fn destroy(&self, slot: *mut T) {
        unsafe { ptr::drop_in_place(slot) }
    }

    /// Upper bound on the number of slots a single block can hold.
    fn max_size(&self) -> usize {
        isize::MAX as usize / mem::size_of::<T>().max(1)
    }
}

/// The system allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

fn block_layout<T>(n: usize) -> Layout {
    match Layout::array::<T>(n) {
        Ok(layout) => layout,
        Err(_) => panic!("capacity overflow: cannot lay out {n} elements"),
    }
}

unsafe impl<T> Allocator<T> for Global {
    fn allocate(&self, n: usize) -> NonNull<T> {
        let layout = block_layout::<T>(n);
        if layout.size() == 0 {
            return NonNull::dangling();
        }
        // Safe: layout has non-zero size
        #[allow(unsafe_code)]
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(block) => block,
            None => handle_alloc_error(layout),
        }
    }

    unsafe fn deallocate(&self, block: NonNull<T>, n: usize) {
        let layout = block_layout::<T>(n);
        if layout.size() != 0 {
            unsafe { dealloc(block.as_ptr().cast::<u8>(), layout) }
        }
    }
}
