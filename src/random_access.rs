//! Random-access cursors over a contiguous run of live elements.
//!
//! [`Iter`] is the read-only cursor and is `Copy`. [`IterMut`] grants write
//! access and therefore cannot be duplicated; it converts one way into an
//! [`Iter`] over the same elements.
//!
//! A cursor may wander anywhere (positions are plain addresses and never
//! dereferenced on their own), but it only reads slots inside the window of
//! live elements it was created with. Reading outside that window panics.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};

use crate::iterator::{
    BidirectionalCursor, ForwardCursor, IteratorTraits, RandomAccessCursor,
    RandomAccessCursorMut, RandomAccessIteratorTag,
};

/// Signed slot distance from `origin` to `target`.
#[allow(clippy::cast_possible_wrap)]
fn slot_distance<T>(target: *const T, origin: *const T) -> isize {
    let bytes = (target as usize as isize).wrapping_sub(origin as usize as isize);
    bytes / mem::size_of::<T>() as isize
}

/// Whether `slot` lies inside `[first, last)`.
fn holds<T>(first: *const T, last: *const T, slot: *const T) -> bool {
    first <= slot && slot < last
}

/// Read-only random-access cursor.
pub struct Iter<'a, T> {
    ptr: *const T,
    first: *const T,
    last: *const T,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    /// `ptr` is the starting position, `[first, last)` the live window.
    pub(crate) fn new(ptr: *const T, first: *const T, last: *const T) -> Self {
        Self {
            ptr,
            first,
            last,
            _marker: PhantomData,
        }
    }

    fn element(&self, slot: *const T) -> &'a T {
        assert!(
            holds(self.first, self.last, slot),
            "cursor read at offset {} outside {} live elements",
            slot_distance(slot, self.first),
            slot_distance(self.last, self.first)
        );
        // Safe: the slot is inside the live window, and the `'a` borrow keeps
        // the owning vector from mutating or reallocating
        #[allow(unsafe_code)]
        unsafe {
            &*slot
        }
    }

    /// Slot offset of the cursor from the first live element.
    #[must_use]
    pub fn offset(&self) -> isize {
        slot_distance(self.ptr, self.first)
    }

    /// Raw address of the slot under the cursor.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Returns the element under the cursor with the full `'a` lifetime.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on a live element.
    #[must_use]
    pub fn into_ref(self) -> &'a T {
        self.element(self.ptr)
    }

    /// Moves forward one slot and returns the position before the move.
    pub fn post_increment(&mut self) -> Self {
        let prior = *self;
        self.ptr = self.ptr.wrapping_add(1);
        prior
    }

    /// Moves backward one slot and returns the position before the move.
    pub fn post_decrement(&mut self) -> Self {
        let prior = *self;
        self.ptr = self.ptr.wrapping_sub(1);
        prior
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("offset", &self.offset())
            .field("live", &slot_distance(self.last, self.first))
            .finish()
    }
}

impl<'a, T> IteratorTraits for Iter<'a, T> {
    type Category = RandomAccessIteratorTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = &'a T;
}

impl<T> ForwardCursor for Iter<'_, T> {
    fn get(&self) -> &T {
        self.element(self.ptr)
    }

    fn increment(&mut self) {
        self.ptr = self.ptr.wrapping_add(1);
    }
}

impl<T> BidirectionalCursor for Iter<'_, T> {
    fn decrement(&mut self) {
        self.ptr = self.ptr.wrapping_sub(1);
    }

    fn get_prev(&self) -> &T {
        self.element(self.ptr.wrapping_sub(1))
    }
}

impl<T> RandomAccessCursor for Iter<'_, T> {
    fn advance_by(&mut self, n: isize) {
        self.ptr = self.ptr.wrapping_offset(n);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        slot_distance(self.ptr, origin.ptr)
    }

    fn get_at(&self, n: isize) -> &T {
        self.element(self.ptr.wrapping_offset(n))
    }
}

impl<T> Deref for Iter<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.element(self.ptr)
    }
}

impl<T> Index<isize> for Iter<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        self.element(self.ptr.wrapping_offset(n))
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T> PartialOrd for Iter<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Iter<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr.cmp(&other.ptr)
    }
}

impl<T> Add<isize> for Iter<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.advance_by(n);
        self
    }
}

impl<'a, T> Add<Iter<'a, T>> for isize {
    type Output = Iter<'a, T>;

    fn add(self, it: Iter<'a, T>) -> Iter<'a, T> {
        it + self
    }
}

impl<T> Sub<isize> for Iter<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.advance_by(-n);
        self
    }
}

impl<T> Sub for Iter<'_, T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        self.distance_from(&origin)
    }
}

impl<T> AddAssign<isize> for Iter<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.advance_by(n);
    }
}

impl<T> SubAssign<isize> for Iter<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.advance_by(-n);
    }
}

/// Mutable random-access cursor.
///
/// Holds the owning vector's exclusive borrow, so at most one mutable cursor
/// over a vector exists at a time.
pub struct IterMut<'a, T> {
    ptr: *mut T,
    first: *mut T,
    last: *mut T,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// `ptr` is the starting position, `[first, last)` the live window.
    pub(crate) fn new(ptr: *mut T, first: *mut T, last: *mut T) -> Self {
        Self {
            ptr,
            first,
            last,
            _marker: PhantomData,
        }
    }

    fn check(&self, slot: *mut T) -> *mut T {
        assert!(
            holds(self.first.cast_const(), self.last.cast_const(), slot.cast_const()),
            "cursor read at offset {} outside {} live elements",
            slot_distance(slot.cast_const(), self.first.cast_const()),
            slot_distance(self.last.cast_const(), self.first.cast_const())
        );
        slot
    }

    fn element(&self, slot: *mut T) -> &T {
        let slot = self.check(slot);
        // Safe: live slot, and the cursor owns the vector's exclusive borrow
        #[allow(unsafe_code)]
        unsafe {
            &*slot
        }
    }

    fn element_mut(&mut self, slot: *mut T) -> &mut T {
        let slot = self.check(slot);
        // Safe: live slot; the returned reference borrows the cursor mutably,
        // so no other reference into the vector can be produced meanwhile
        #[allow(unsafe_code)]
        unsafe {
            &mut *slot
        }
    }

    /// Slot offset of the cursor from the first live element.
    #[must_use]
    pub fn offset(&self) -> isize {
        slot_distance(self.ptr.cast_const(), self.first.cast_const())
    }

    /// Whether the cursor sits one past the last live element.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.ptr == self.last
    }

    /// Raw address of the slot under the cursor.
    #[must_use]
    pub fn as_mut_ptr(&self) -> *mut T {
        self.ptr
    }

    /// Turns the cursor into a mutable reference for the rest of `'a`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on a live element.
    #[must_use]
    pub fn into_mut(self) -> &'a mut T {
        let slot = self.check(self.ptr);
        // Safe: the cursor is consumed, handing its exclusive borrow over
        #[allow(unsafe_code)]
        unsafe {
            &mut *slot
        }
    }
}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("offset", &self.offset())
            .field(
                "live",
                &slot_distance(self.last.cast_const(), self.first.cast_const()),
            )
            .finish()
    }
}

impl<'a, T> From<IterMut<'a, T>> for Iter<'a, T> {
    fn from(it: IterMut<'a, T>) -> Self {
        Iter::new(it.ptr.cast_const(), it.first.cast_const(), it.last.cast_const())
    }
}

impl<'a, T> IteratorTraits for IterMut<'a, T> {
    type Category = RandomAccessIteratorTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *mut T;
    type Reference = &'a mut T;
}

impl<T> ForwardCursor for IterMut<'_, T> {
    fn get(&self) -> &T {
        self.element(self.ptr)
    }

    fn increment(&mut self) {
        self.ptr = self.ptr.wrapping_add(1);
    }
}

impl<T> BidirectionalCursor for IterMut<'_, T> {
    fn decrement(&mut self) {
        self.ptr = self.ptr.wrapping_sub(1);
    }

    fn get_prev(&self) -> &T {
        self.element(self.ptr.wrapping_sub(1))
    }
}

impl<T> RandomAccessCursor for IterMut<'_, T> {
    fn advance_by(&mut self, n: isize) {
        self.ptr = self.ptr.wrapping_offset(n);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        slot_distance(self.ptr.cast_const(), origin.ptr.cast_const())
    }

    fn get_at(&self, n: isize) -> &T {
        self.element(self.ptr.wrapping_offset(n))
    }
}

impl<T> RandomAccessCursorMut for IterMut<'_, T> {
    fn get_mut(&mut self) -> &mut T {
        self.element_mut(self.ptr)
    }

    fn get_at_mut(&mut self, n: isize) -> &mut T {
        self.element_mut(self.ptr.wrapping_offset(n))
    }
}

impl<T> Deref for IterMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.element(self.ptr)
    }
}

impl<T> DerefMut for IterMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.element_mut(self.ptr)
    }
}

impl<T> Index<isize> for IterMut<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        self.element(self.ptr.wrapping_offset(n))
    }
}

impl<T> IndexMut<isize> for IterMut<'_, T> {
    fn index_mut(&mut self, n: isize) -> &mut T {
        self.element_mut(self.ptr.wrapping_offset(n))
    }
}

impl<T> PartialEq for IterMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for IterMut<'_, T> {}

impl<T> PartialOrd for IterMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for IterMut<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr.cmp(&other.ptr)
    }
}

impl<T> Add<isize> for IterMut<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.advance_by(n);
        self
    }
}

impl<'a, T> Add<IterMut<'a, T>> for isize {
    type Output = IterMut<'a, T>;

    fn add(self, it: IterMut<'a, T>) -> IterMut<'a, T> {
        it + self
    }
}

impl<T> Sub<isize> for IterMut<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.advance_by(-n);
        self
    }
}

impl<T> Sub for &IterMut<'_, T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        self.distance_from(origin)
    }
}

impl<T> AddAssign<isize> for IterMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.advance_by(n);
    }
}

impl<T> SubAssign<isize> for IterMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.advance_by(-n);
    }
}
