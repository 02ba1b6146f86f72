use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use crate::algorithm::{equal, lexicographical_compare};
use crate::allocator::{Allocator, Global};
use crate::error::VectorError;
use crate::iterator::{distance, DistanceStrategy, ForwardCursor};
use crate::random_access::{Iter, IterMut};
use crate::reverse::ReverseIterator;
use crate::trace::trace_event;

/// A contiguous, growable array that owns its storage.
///
/// The storage block is addressed by three positions: `start` (first slot),
/// `end` (one past the last live element) and `end_capacity` (one past the
/// last allocated slot), with `start <= end <= end_capacity` at all times.
/// Slots in `[start, end)` hold live elements; `[end, end_capacity)` is
/// allocated but uninitialized.
pub struct Vector<T, A: Allocator<T> = Global> {
    alloc: A,
    start: NonNull<T>,
    end: NonNull<T>,
    end_capacity: NonNull<T>,
    _marker: PhantomData<T>,
}

// Safe: the vector uniquely owns its block and elements, like `Box<[T]>`
#[allow(unsafe_code)]
unsafe impl<T: Send, A: Allocator<T> + Send> Send for Vector<T, A> {}
#[allow(unsafe_code)]
unsafe impl<T: Sync, A: Allocator<T> + Sync> Sync for Vector<T, A> {}

fn slots_between<T>(last: NonNull<T>, first: NonNull<T>) -> usize {
    (last.as_ptr() as usize - first.as_ptr() as usize) / mem::size_of::<T>()
}

#[cold]
#[track_caller]
fn length_overflow(requested: usize, max: usize) -> ! {
    panic!("{}", VectorError::LengthOutOfRange { requested, max })
}

impl<T> Vector<T> {
    /// Creates an empty vector. Nothing is allocated.
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`Vector::max_size`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a vector holding `n` copies of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Vector::max_size`].
    #[must_use]
    pub fn from_elem(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(n, value, Global)
    }

    /// Creates a vector holding copies of the elements in `[first, last)`,
    /// in order. Exactly `distance(first, last)` slots are allocated.
    ///
    /// # Panics
    ///
    /// Panics if the range is longer than [`Vector::max_size`].
    #[must_use]
    pub fn from_range<I>(first: I, last: I) -> Self
    where
        T: Clone,
        I: ForwardCursor<Value = T> + Clone,
        I::Category: DistanceStrategy<I>,
    {
        Self::from_range_in(first, last, Global)
    }
}

impl<T, A: Allocator<T>> Vector<T, A> {
    const ELEMENT_SIZE_CHECK: () = assert!(
        mem::size_of::<T>() != 0,
        "zero-sized element types are not supported"
    );

    fn from_block(alloc: A, block: NonNull<T>, capacity: usize) -> Self {
        let () = Self::ELEMENT_SIZE_CHECK;
        // Safe: `block` spans `capacity` slots
        #[allow(unsafe_code)]
        let end_capacity = unsafe { block.add(capacity) };
        Self {
            alloc,
            start: block,
            end: block,
            end_capacity,
            _marker: PhantomData,
        }
    }

    /// Creates an empty vector that will draw storage from `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self::from_block(alloc, NonNull::dangling(), 0)
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the allocator's maximum size.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(vector) => vector,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`Vector::with_capacity_in`].
    ///
    /// # Errors
    ///
    /// Returns `VectorError::LengthOutOfRange` if `capacity` exceeds the
    /// allocator's maximum size.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, VectorError> {
        let max = alloc.max_size();
        if capacity > max {
            return Err(VectorError::LengthOutOfRange {
                requested: capacity,
                max,
            });
        }
        let block = acquire(&alloc, capacity);
        Ok(Self::from_block(alloc, block, capacity))
    }

    /// Creates a vector holding `n` copies of `value`, using `alloc`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the allocator's maximum size.
    pub fn from_elem_in(n: usize, value: T, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity_in(n, alloc);
        vector.append_exact(n, iter::repeat_n(value, n));
        vector
    }

    /// Creates a vector holding copies of `[first, last)`, using `alloc`.
    ///
    /// # Panics
    ///
    /// Panics if the range is longer than the allocator's maximum size.
    pub fn from_range_in<I>(first: I, last: I, alloc: A) -> Self
    where
        T: Clone,
        I: ForwardCursor<Value = T> + Clone,
        I::Category: DistanceStrategy<I>,
    {
        let n = distance(first.clone(), last);
        let mut vector = Self::with_capacity_in(n, alloc);
        vector.append_exact(n, CursorValues::new(first, n));
        vector
    }

    /// Returns the allocator backing this vector.
    #[must_use]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        slots_between(self.end, self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        slots_between(self.end_capacity, self.start)
    }

    /// Largest length the allocator can represent.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.alloc.max_size()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // Safe: `[start, end)` are live, initialized elements
        #[allow(unsafe_code)]
        unsafe {
            slice::from_raw_parts(self.start.as_ptr(), self.len())
        }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safe: `[start, end)` are live, initialized elements
        #[allow(unsafe_code)]
        unsafe {
            slice::from_raw_parts_mut(self.start.as_ptr(), self.len())
        }
    }

    fn slot(&self, index: usize) -> *mut T {
        self.start.as_ptr().wrapping_add(index)
    }

    /// Moves `end` to `start + len`.
    ///
    /// # Safety
    ///
    /// `len <= capacity()`, and exactly the slots below `len` must be live.
    #[allow(unsafe_code)]
    unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.end = unsafe { self.start.add(len) };
    }

    fn check_length(&self, requested: usize) -> Result<(), VectorError> {
        let max = self.max_size();
        if requested > max {
            Err(VectorError::LengthOutOfRange { requested, max })
        } else {
            Ok(())
        }
    }

    /// Length after adding `additional` elements.
    ///
    /// # Panics
    ///
    /// Panics if that length exceeds the allocator's maximum size.
    #[track_caller]
    fn grown_length(&self, additional: usize) -> usize {
        let max = self.max_size();
        match self.len().checked_add(additional) {
            Some(len) if len <= max => len,
            Some(len) => length_overflow(len, max),
            None => length_overflow(usize::MAX, max),
        }
    }

    /// Replaces the storage block with a fresh one of exactly `capacity`
    /// slots, relocating every live element in order.
    fn reallocate(&mut self, capacity: usize) {
        let len = self.len();
        debug_assert!(capacity >= len);
        let old_capacity = self.capacity();
        let block = acquire(&self.alloc, capacity);
        trace_event!("reallocate: capacity {} -> {}, len {}", old_capacity, capacity, len);
        // Safe: the new block is disjoint from the old one and holds at least
        // `len` slots; the old slots are treated as moved-from afterwards
        #[allow(unsafe_code)]
        unsafe {
            ptr::copy_nonoverlapping(self.start.as_ptr(), block.as_ptr(), len);
            release(&self.alloc, self.start, old_capacity);
            self.start = block;
            self.end = block.add(len);
            self.end_capacity = block.add(capacity);
        }
    }

    /// Requests room for at least `n` elements.
    ///
    /// Does nothing when `n <= capacity()`. Otherwise the storage moves to a
    /// block of exactly `n` slots and every previously obtained cursor,
    /// pointer and reference into the vector is invalidated.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::LengthOutOfRange` if `n` exceeds
    /// [`Vector::max_size`].
    pub fn reserve(&mut self, n: usize) -> Result<(), VectorError> {
        if n <= self.capacity() {
            return Ok(());
        }
        self.check_length(n)?;
        self.reallocate(n);
        Ok(())
    }

    /// Appends up to `n` items from `items`; the storage must have room.
    fn append_exact<I: Iterator<Item = T>>(&mut self, n: usize, items: I) {
        debug_assert!(self.len() + n <= self.capacity());
        for item in items.take(n) {
            // Safe: capacity checked above, and `end` only advances after the
            // slot is constructed
            #[allow(unsafe_code)]
            unsafe {
                self.alloc.construct(self.end.as_ptr(), item);
                self.end = self.end.add(1);
            }
        }
    }

    /// Appends `value`, doubling the capacity when the storage is full.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::LengthOutOfRange` if the vector already holds
    /// [`Vector::max_size`] elements.
    pub fn try_push_back(&mut self, value: T) -> Result<(), VectorError> {
        if self.end == self.end_capacity {
            let capacity = self.capacity();
            let max = self.max_size();
            if capacity >= max {
                return Err(VectorError::LengthOutOfRange {
                    requested: capacity.saturating_add(1),
                    max,
                });
            }
            let doubled = if capacity == 0 { 1 } else { capacity.saturating_mul(2) };
            self.reallocate(doubled.min(max));
        }
        self.append_exact(1, iter::once(value));
        Ok(())
    }

    /// Appends `value`, doubling the capacity when the storage is full.
    ///
    /// # Panics
    ///
    /// Panics if the vector already holds [`Vector::max_size`] elements.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            panic!("{err}");
        }
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // Safe: the vector is non-empty, so `end - 1` is live; moving `end`
        // first hands ownership of that slot to the caller
        #[allow(unsafe_code)]
        unsafe {
            self.end = self.end.sub(1);
            Some(ptr::read(self.end.as_ptr()))
        }
    }

    /// Returns the element at `n`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::IndexOutOfRange` if `n >= len()`.
    pub fn at(&self, n: usize) -> Result<&T, VectorError> {
        let length = self.len();
        self.as_slice()
            .get(n)
            .ok_or(VectorError::IndexOutOfRange { index: n, length })
    }

    /// Returns the element at `n` mutably.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::IndexOutOfRange` if `n >= len()`.
    pub fn at_mut(&mut self, n: usize) -> Result<&mut T, VectorError> {
        let length = self.len();
        self.as_mut_slice()
            .get_mut(n)
            .ok_or(VectorError::IndexOutOfRange { index: n, length })
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(first) => first,
            None => panic!("front() called on an empty vector"),
        }
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(first) => first,
            None => panic!("front_mut() called on an empty vector"),
        }
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => panic!("back() called on an empty vector"),
        }
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => panic!("back_mut() called on an empty vector"),
        }
    }

    /// Cursor at the first element.
    #[must_use]
    pub fn begin(&self) -> Iter<'_, T> {
        Iter::new(self.start.as_ptr(), self.start.as_ptr(), self.end.as_ptr())
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Iter<'_, T> {
        Iter::new(self.end.as_ptr(), self.start.as_ptr(), self.end.as_ptr())
    }

    /// Reverse cursor at the last element.
    #[must_use]
    pub fn rbegin(&self) -> ReverseIterator<Iter<'_, T>> {
        ReverseIterator::new(self.end())
    }

    /// Reverse cursor one before the first element.
    #[must_use]
    pub fn rend(&self) -> ReverseIterator<Iter<'_, T>> {
        ReverseIterator::new(self.begin())
    }

    fn cursor_mut(&mut self, index: usize) -> IterMut<'_, T> {
        IterMut::new(self.slot(index), self.start.as_ptr(), self.end.as_ptr())
    }

    /// Mutable cursor at the first element.
    pub fn begin_mut(&mut self) -> IterMut<'_, T> {
        self.cursor_mut(0)
    }

    /// Mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len();
        self.cursor_mut(len)
    }

    /// Mutable reverse cursor at the last element.
    pub fn rbegin_mut(&mut self) -> ReverseIterator<IterMut<'_, T>> {
        ReverseIterator::new(self.end_mut())
    }

    /// Mutable reverse cursor one before the first element.
    pub fn rend_mut(&mut self) -> ReverseIterator<IterMut<'_, T>> {
        ReverseIterator::new(self.begin_mut())
    }

    /// Inserts up to `n` items from `items` before `index`.
    ///
    /// With enough spare capacity the tail is shifted right in place;
    /// otherwise a block of exactly `len() + n` slots receives the prefix,
    /// the new items and the suffix.
    #[track_caller]
    fn insert_exact<I: Iterator<Item = T>>(&mut self, index: usize, n: usize, items: I) {
        let len = self.len();
        assert!(
            index <= len,
            "insertion index {index} is beyond vector length {len}"
        );
        if n == 0 {
            return;
        }
        let new_len = self.grown_length(n);
        if self.capacity() >= new_len {
            let mut gap = Gap::open(self, index, n);
            gap.fill(items);
        } else {
            self.insert_reallocating(index, n, new_len, items);
        }
    }

    fn insert_reallocating<I: Iterator<Item = T>>(
        &mut self,
        index: usize,
        n: usize,
        capacity: usize,
        items: I,
    ) {
        let len = self.len();
        let old_capacity = self.capacity();
        trace_event!(
            "insert {} at {}: capacity {} -> {}, len {}",
            n,
            index,
            old_capacity,
            capacity,
            len
        );
        let mut fresh = FreshBlock::new(&self.alloc, capacity, index);
        fresh.fill(n, items);
        let (block, filled) = fresh.into_parts();
        // Safe: the new block is disjoint from the old one; prefix and suffix
        // land around the `filled` new elements, and the old slots become
        // moved-from before the old block is released
        #[allow(unsafe_code)]
        unsafe {
            let old = self.start.as_ptr();
            let dst = block.as_ptr();
            ptr::copy_nonoverlapping(old, dst, index);
            ptr::copy_nonoverlapping(old.add(index), dst.add(index + filled), len - index);
            release(&self.alloc, self.start, old_capacity);
            self.start = block;
            self.end = block.add(len + filled);
            self.end_capacity = block.add(capacity);
        }
    }

    /// Inserts `value` before `index` and returns a cursor at it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` or the new length exceeds
    /// [`Vector::max_size`].
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> IterMut<'_, T> {
        self.insert_exact(index, 1, iter::once(value));
        self.cursor_mut(index)
    }

    /// Inserts `n` copies of `value` before `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` or the new length exceeds
    /// [`Vector::max_size`].
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, n: usize, value: T)
    where
        T: Clone,
    {
        self.insert_exact(index, n, iter::repeat_n(value, n));
    }

    /// Inserts copies of `[first, last)` before `index`, in order.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` or the new length exceeds
    /// [`Vector::max_size`].
    #[track_caller]
    pub fn insert_range<I>(&mut self, index: usize, first: I, last: I)
    where
        T: Clone,
        I: ForwardCursor<Value = T> + Clone,
        I::Category: DistanceStrategy<I>,
    {
        let n = distance(first.clone(), last);
        self.insert_exact(index, n, CursorValues::new(first, n));
    }

    /// Inserts clones of `items` before `index`, in order.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` or the new length exceeds
    /// [`Vector::max_size`].
    #[track_caller]
    pub fn insert_slice(&mut self, index: usize, items: &[T])
    where
        T: Clone,
    {
        self.insert_exact(index, items.len(), items.iter().cloned());
    }

    /// Removes the element at `index` and returns a cursor at the element
    /// that took its place (the end position if none did).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> IterMut<'_, T> {
        let len = self.len();
        assert!(index < len, "erase index {index} is beyond vector length {len}");
        self.erase_range(index, index + 1)
    }

    /// Removes the elements in `[first, last)`, shifting the tail left, and
    /// returns a cursor at `first`.
    ///
    /// # Panics
    ///
    /// Panics if `first > last` or `last > len()`.
    #[track_caller]
    pub fn erase_range(&mut self, first: usize, last: usize) -> IterMut<'_, T> {
        let len = self.len();
        assert!(
            first <= last && last <= len,
            "erase range {first}..{last} is invalid for vector length {len}"
        );
        let count = last - first;
        if count > 0 {
            // Safe: `[first, last)` are live; hiding everything from `first`
            // on keeps a panicking destructor from exposing dead slots, and
            // the tail is relocated into the hole before it is re-exposed
            #[allow(unsafe_code)]
            unsafe {
                self.set_len(first);
                for index in first..last {
                    self.alloc.destroy(self.slot(index));
                }
                ptr::copy(self.slot(last), self.slot(first), len - last);
                self.set_len(len - count);
            }
        }
        self.cursor_mut(first)
    }

    /// Destroys the elements from `len` on, last to first.
    fn truncate_to(&mut self, len: usize) {
        while self.len() > len {
            // Safe: `end - 1` is live; `end` moves before the destructor runs
            #[allow(unsafe_code)]
            unsafe {
                self.end = self.end.sub(1);
                self.alloc.destroy(self.end.as_ptr());
            }
        }
    }

    /// Destroys every element, last to first. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate_to(0);
    }

    /// Shrinks to `n` elements, or grows by inserting copies of `value` at
    /// the end.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::LengthOutOfRange` if `n` exceeds
    /// [`Vector::max_size`].
    pub fn resize(&mut self, n: usize, value: T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.check_length(n)?;
        let len = self.len();
        if n < len {
            self.truncate_to(n);
        } else {
            self.insert_n(len, n - len, value);
        }
        Ok(())
    }

    /// Like [`Vector::resize`], filling with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::LengthOutOfRange` if `n` exceeds
    /// [`Vector::max_size`].
    pub fn resize_default(&mut self, n: usize) -> Result<(), VectorError>
    where
        T: Clone + Default,
    {
        self.resize(n, T::default())
    }

    /// Empties the vector and makes sure it can hold `n` elements, moving to
    /// a block of exactly `n` slots if the current one is too small.
    #[track_caller]
    fn clear_for(&mut self, n: usize) {
        self.clear();
        if n > self.capacity() {
            let max = self.max_size();
            if n > max {
                length_overflow(n, max);
            }
            let old_capacity = self.capacity();
            trace_event!("assign: capacity {} -> {}", old_capacity, n);
            let block = acquire(&self.alloc, n);
            // Safe: the vector is empty, so the old block holds nothing
            #[allow(unsafe_code)]
            unsafe {
                release(&self.alloc, self.start, old_capacity);
                self.start = block;
                self.end = block;
                self.end_capacity = block.add(n);
            }
        }
    }

    /// Replaces the contents with `n` copies of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Vector::max_size`].
    #[track_caller]
    pub fn assign_fill(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        self.clear_for(n);
        self.append_exact(n, iter::repeat_n(value, n));
    }

    /// Replaces the contents with copies of `[first, last)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is longer than [`Vector::max_size`].
    #[track_caller]
    pub fn assign_range<I>(&mut self, first: I, last: I)
    where
        T: Clone,
        I: ForwardCursor<Value = T> + Clone,
        I::Category: DistanceStrategy<I>,
    {
        let n = distance(first.clone(), last);
        self.clear_for(n);
        self.append_exact(n, CursorValues::new(first, n));
    }

    /// Exchanges the contents of two vectors in constant time. No element is
    /// copied, moved, constructed or destroyed.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.start, &mut other.start);
        mem::swap(&mut self.end, &mut other.end);
        mem::swap(&mut self.end_capacity, &mut other.end_capacity);
        mem::swap(&mut self.alloc, &mut other.alloc);
    }
}

/// Exchanges the contents of `a` and `b`.
pub fn swap<T, A: Allocator<T>>(a: &mut Vector<T, A>, b: &mut Vector<T, A>) {
    a.swap(b);
}

fn acquire<T, A: Allocator<T>>(alloc: &A, capacity: usize) -> NonNull<T> {
    if capacity == 0 {
        NonNull::dangling()
    } else {
        alloc.allocate(capacity)
    }
}

/// # Safety
///
/// `block` must come from `acquire(alloc, capacity)` and hold no live element.
#[allow(unsafe_code)]
unsafe fn release<T, A: Allocator<T>>(alloc: &A, block: NonNull<T>, capacity: usize) {
    if capacity != 0 {
        unsafe { alloc.deallocate(block, capacity) };
    }
}

/// Clones `n` consecutive elements starting at a cursor.
struct CursorValues<I> {
    cursor: I,
    remaining: usize,
}

impl<I> CursorValues<I> {
    fn new(cursor: I, remaining: usize) -> Self {
        Self { cursor, remaining }
    }
}

impl<I> Iterator for CursorValues<I>
where
    I: ForwardCursor,
    I::Value: Clone,
{
    type Item = I::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.cursor.get().clone();
        self.cursor.increment();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// A hole of `width` slots opened at `index` inside the live range.
///
/// While the hole is open the vector's length stops at `index`, so a panic
/// while filling never exposes uninitialized slots. Dropping the guard keeps
/// whatever was filled and slides the tail down over the unfilled rest.
struct Gap<'v, T, A: Allocator<T>> {
    vector: &'v mut Vector<T, A>,
    index: usize,
    width: usize,
    filled: usize,
    tail: usize,
}

impl<'v, T, A: Allocator<T>> Gap<'v, T, A> {
    fn open(vector: &'v mut Vector<T, A>, index: usize, width: usize) -> Self {
        let tail = vector.len() - index;
        debug_assert!(vector.len() + width <= vector.capacity());
        // Safe: spare capacity covers `width` more slots; the tail moves
        // high-to-low so no element is overwritten before it is read
        #[allow(unsafe_code)]
        unsafe {
            ptr::copy(vector.slot(index), vector.slot(index + width), tail);
            vector.set_len(index);
        }
        Self {
            vector,
            index,
            width,
            filled: 0,
            tail,
        }
    }

    fn fill<I: Iterator<Item = T>>(&mut self, items: I) {
        for item in items.take(self.width) {
            // Safe: slot lies inside the hole and is not yet constructed
            #[allow(unsafe_code)]
            unsafe {
                let slot = self.vector.slot(self.index + self.filled);
                self.vector.alloc.construct(slot, item);
            }
            self.filled += 1;
        }
    }
}

impl<T, A: Allocator<T>> Drop for Gap<'_, T, A> {
    fn drop(&mut self) {
        // Safe: both ranges lie inside the block; afterwards exactly
        // `index + filled + tail` leading slots are live
        #[allow(unsafe_code)]
        unsafe {
            if self.filled < self.width {
                ptr::copy(
                    self.vector.slot(self.index + self.width),
                    self.vector.slot(self.index + self.filled),
                    self.tail,
                );
            }
            self.vector.set_len(self.index + self.filled + self.tail);
        }
    }
}

/// A new block being populated before it replaces a vector's storage.
///
/// Dropping it without `into_parts` destroys what was constructed and
/// returns the block to the allocator, leaving the vector untouched.
struct FreshBlock<'v, T, A: Allocator<T>> {
    alloc: &'v A,
    block: NonNull<T>,
    capacity: usize,
    index: usize,
    filled: usize,
}

impl<'v, T, A: Allocator<T>> FreshBlock<'v, T, A> {
    fn new(alloc: &'v A, capacity: usize, index: usize) -> Self {
        Self {
            alloc,
            block: acquire(alloc, capacity),
            capacity,
            index,
            filled: 0,
        }
    }

    fn fill<I: Iterator<Item = T>>(&mut self, n: usize, items: I) {
        for item in items.take(n) {
            // Safe: `index + n <= capacity`, slot not yet constructed
            #[allow(unsafe_code)]
            unsafe {
                let slot = self.block.as_ptr().add(self.index + self.filled);
                self.alloc.construct(slot, item);
            }
            self.filled += 1;
        }
    }

    fn into_parts(self) -> (NonNull<T>, usize) {
        let parts = (self.block, self.filled);
        mem::forget(self);
        parts
    }
}

impl<T, A: Allocator<T>> Drop for FreshBlock<'_, T, A> {
    fn drop(&mut self) {
        // Safe: exactly the `filled` slots from `index` were constructed
        #[allow(unsafe_code)]
        unsafe {
            for offset in 0..self.filled {
                self.alloc.destroy(self.block.as_ptr().add(self.index + offset));
            }
            release(self.alloc, self.block, self.capacity);
        }
    }
}

impl<T, A: Allocator<T>> Drop for Vector<T, A> {
    fn drop(&mut self) {
        self.clear();
        let capacity = self.capacity();
        // Safe: every element was destroyed by `clear`
        #[allow(unsafe_code)]
        unsafe {
            release(&self.alloc, self.start, capacity);
        }
    }
}

impl<T, A: Allocator<T>> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator<T>> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Allocator<T> + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        Self::from_range_in(self.begin(), self.end(), self.alloc.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.insert_slice(0, source.as_slice());
    }
}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Hash, A: Allocator<T>> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, A, B> PartialEq<Vector<T, B>> for Vector<T, A>
where
    T: PartialEq,
    A: Allocator<T>,
    B: Allocator<T>,
{
    fn eq(&self, other: &Vector<T, B>) -> bool {
        self.len() == other.len() && equal(self.begin(), self.end(), other.begin())
    }
}

impl<T: Eq, A: Allocator<T>> Eq for Vector<T, A> {}

// `<=`, `>` and `>=` are spelled out from `<` so that incomparable elements
// behave the same way through every operator.
impl<T: PartialOrd, A: Allocator<T>> PartialOrd for Vector<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.lt(other) {
            Some(Ordering::Less)
        } else if other.lt(self) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        lexicographical_compare(self.begin(), self.end(), other.begin(), other.end())
    }

    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<T: Ord, A: Allocator<T>> Ord for Vector<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.lt(other) {
            Ordering::Less
        } else if other.lt(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T, A: Allocator<T>> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator<T>> Extend<&'a T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, items: I) {
        self.extend(items.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut vector = Self::new();
        vector.extend(items);
        vector
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        let mut vector = Self::with_capacity(items.len());
        vector.append_exact(items.len(), items.iter().cloned());
        vector
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        let mut vector = Self::with_capacity(N);
        vector.append_exact(N, items.into_iter());
        vector
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn test_empty_vector_allocates_nothing() {
        let vector: Vector<u32> = Vector::new();
        assert_eq!(vector.len(), 0);
        assert_eq!(vector.capacity(), 0);
        assert!(vector.is_empty());
    }

    #[test]
    fn test_gap_slides_tail_over_unfilled_slots() {
        let mut vector: Vector<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        vector.reserve(8).unwrap();
        {
            let mut gap = Gap::open(&mut vector, 1, 3);
            gap.fill(iter::once("x".to_string()));
        }
        assert_eq!(vector.as_slice(), ["a", "x", "b", "c"]);
        assert_eq!(vector.capacity(), 8);
    }

    #[test]
    fn test_short_range_closes_fresh_block() {
        let mut vector: Vector<u8> = Vector::from([1, 2, 3]);
        vector.insert_exact(1, 4, [7, 8].into_iter());
        assert_eq!(vector.as_slice(), [1, 7, 8, 2, 3]);
        assert_eq!(vector.capacity(), 7);
    }

    #[test]
    fn test_cursor_values_clone_in_order() {
        let source: Vector<u16> = Vector::from([4, 5, 6]);
        let values: Vector<u16> = CursorValues::new(source.begin() + 1, 2).collect();
        assert_eq!(values.as_slice(), [5, 6]);
    }
}
