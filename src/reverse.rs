//! Direction-inverting adaptor for bidirectional cursors.
//!
//! A `ReverseIterator` stores a base cursor positioned one slot *past* the
//! element it yields. That look-back convention lets `rbegin` wrap `end` and
//! `rend` wrap `begin` without ever forming a position before the first slot.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};

use crate::iterator::{
    BidirectionalCursor, ForwardCursor, IteratorTraits, RandomAccessCursor,
    RandomAccessCursorMut,
};
use crate::random_access::{Iter, IterMut};

/// Traverses the sequence of its base cursor backward.
#[derive(Debug, Clone, Copy)]
pub struct ReverseIterator<I> {
    current: I,
}

impl<I> ReverseIterator<I> {
    /// Wraps `base`; the new cursor yields the element just before `base`.
    pub fn new(base: I) -> Self {
        Self { current: base }
    }

    /// Returns a copy of the stored base cursor.
    #[must_use]
    pub fn base(&self) -> I
    where
        I: Clone,
    {
        self.current.clone()
    }

    /// Borrows the stored base cursor.
    #[must_use]
    pub fn base_ref(&self) -> &I {
        &self.current
    }

    /// Unwraps the stored base cursor.
    #[must_use]
    pub fn into_base(self) -> I {
        self.current
    }
}

impl<I: BidirectionalCursor + Clone> ReverseIterator<I> {
    /// Moves forward (toward the front of the base sequence) and returns the
    /// position before the move.
    pub fn post_increment(&mut self) -> Self {
        let prior = self.clone();
        self.current.decrement();
        prior
    }

    /// Moves backward and returns the position before the move.
    pub fn post_decrement(&mut self) -> Self {
        let prior = self.clone();
        self.current.increment();
        prior
    }
}

impl<'a, T> From<ReverseIterator<IterMut<'a, T>>> for ReverseIterator<Iter<'a, T>> {
    fn from(it: ReverseIterator<IterMut<'a, T>>) -> Self {
        ReverseIterator::new(Iter::from(it.current))
    }
}

impl<I: IteratorTraits> IteratorTraits for ReverseIterator<I> {
    type Category = I::Category;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

impl<I: BidirectionalCursor> ForwardCursor for ReverseIterator<I> {
    fn get(&self) -> &I::Value {
        self.current.get_prev()
    }

    fn increment(&mut self) {
        self.current.decrement();
    }
}

impl<I: BidirectionalCursor> BidirectionalCursor for ReverseIterator<I> {
    fn decrement(&mut self) {
        self.current.increment();
    }

    fn get_prev(&self) -> &I::Value {
        self.current.get()
    }
}

impl<I: RandomAccessCursor> RandomAccessCursor for ReverseIterator<I> {
    fn advance_by(&mut self, n: isize) {
        self.current.advance_by(-n);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        origin.current.distance_from(&self.current)
    }

    fn get_at(&self, n: isize) -> &I::Value {
        self.current.get_at(-n - 1)
    }
}

impl<I: RandomAccessCursorMut> RandomAccessCursorMut for ReverseIterator<I> {
    fn get_mut(&mut self) -> &mut I::Value {
        self.current.get_at_mut(-1)
    }

    fn get_at_mut(&mut self, n: isize) -> &mut I::Value {
        self.current.get_at_mut(-n - 1)
    }
}

impl<I: BidirectionalCursor> Deref for ReverseIterator<I> {
    type Target = I::Value;

    fn deref(&self) -> &I::Value {
        self.current.get_prev()
    }
}

impl<I: RandomAccessCursorMut> DerefMut for ReverseIterator<I> {
    fn deref_mut(&mut self) -> &mut I::Value {
        self.current.get_at_mut(-1)
    }
}

impl<I: RandomAccessCursor> Index<isize> for ReverseIterator<I> {
    type Output = I::Value;

    fn index(&self, n: isize) -> &I::Value {
        self.current.get_at(-n - 1)
    }
}

impl<I: RandomAccessCursorMut> IndexMut<isize> for ReverseIterator<I> {
    fn index_mut(&mut self, n: isize) -> &mut I::Value {
        self.current.get_at_mut(-n - 1)
    }
}

// Equality compares the bases directly; ordering flips their sense.
impl<I: PartialEq> PartialEq for ReverseIterator<I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<I: Eq> Eq for ReverseIterator<I> {}

impl<I: PartialOrd> PartialOrd for ReverseIterator<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.current.partial_cmp(&self.current)
    }
}

impl<I: Ord> Ord for ReverseIterator<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.current.cmp(&self.current)
    }
}

impl<I: RandomAccessCursor> Add<isize> for ReverseIterator<I> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.current.advance_by(-n);
        self
    }
}

impl<I: RandomAccessCursor> Add<ReverseIterator<I>> for isize {
    type Output = ReverseIterator<I>;

    fn add(self, it: ReverseIterator<I>) -> ReverseIterator<I> {
        it + self
    }
}

impl<I: RandomAccessCursor> Sub<isize> for ReverseIterator<I> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.current.advance_by(n);
        self
    }
}

impl<I: RandomAccessCursor> Sub for ReverseIterator<I> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        rhs.current.distance_from(&self.current)
    }
}

impl<I: RandomAccessCursor> AddAssign<isize> for ReverseIterator<I> {
    fn add_assign(&mut self, n: isize) {
        self.current.advance_by(-n);
    }
}

impl<I: RandomAccessCursor> SubAssign<isize> for ReverseIterator<I> {
    fn sub_assign(&mut self, n: isize) {
        self.current.advance_by(n);
    }
}
