//! Traversal capabilities shared by every cursor in the crate.
//!
//! A cursor is a position inside a sequence. What a cursor can do is
//! advertised twice: by the traits it implements ([`ForwardCursor`],
//! [`BidirectionalCursor`], [`RandomAccessCursor`]) and by its
//! [`IteratorTraits::Category`] tag. Generic helpers such as [`distance`] and
//! [`advance`] dispatch on the tag, so a random-access cursor gets O(1)
//! arithmetic while a forward-only cursor is stepped one slot at a time.

use core::fmt::Debug;

/// Marker for a traversal capability.
pub trait IteratorCategory: Debug + Default + Copy + Eq {
    /// Human-readable name of the capability.
    const NAME: &'static str;
}

/// The cursor can only move forward, one slot at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForwardIteratorTag;

/// The cursor can move one slot at a time in either direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BidirectionalIteratorTag;

/// The cursor can jump by any signed offset in constant time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomAccessIteratorTag;

impl IteratorCategory for ForwardIteratorTag {
    const NAME: &'static str = "forward";
}

impl IteratorCategory for BidirectionalIteratorTag {
    const NAME: &'static str = "bidirectional";
}

impl IteratorCategory for RandomAccessIteratorTag {
    const NAME: &'static str = "random access";
}

// A stronger capability can always stand in for a weaker one.
impl From<BidirectionalIteratorTag> for ForwardIteratorTag {
    fn from(_: BidirectionalIteratorTag) -> Self {
        ForwardIteratorTag
    }
}

impl From<RandomAccessIteratorTag> for ForwardIteratorTag {
    fn from(_: RandomAccessIteratorTag) -> Self {
        ForwardIteratorTag
    }
}

impl From<RandomAccessIteratorTag> for BidirectionalIteratorTag {
    fn from(_: RandomAccessIteratorTag) -> Self {
        BidirectionalIteratorTag
    }
}

/// Associated properties a cursor exposes to generic code.
pub trait IteratorTraits {
    /// Traversal capability tag.
    type Category: IteratorCategory;
    /// Element type the cursor yields.
    type Value;
    /// Signed distance between two cursors.
    type Difference;
    /// Raw pointer to an element.
    type Pointer;
    /// Reference to an element.
    type Reference;
}

/// A cursor that can read its element and step forward.
pub trait ForwardCursor: IteratorTraits + PartialEq {
    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on a live element.
    fn get(&self) -> &Self::Value;

    /// Moves the cursor one slot forward.
    fn increment(&mut self);
}

/// A cursor that can also step backward.
pub trait BidirectionalCursor: ForwardCursor {
    /// Moves the cursor one slot backward.
    fn decrement(&mut self);

    /// Returns the element one slot before the cursor without moving it.
    ///
    /// # Panics
    ///
    /// Panics if there is no live element before the cursor.
    fn get_prev(&self) -> &Self::Value;
}

/// A cursor that can jump by arbitrary offsets in constant time.
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Moves the cursor by `n` slots; negative values move backward.
    fn advance_by(&mut self, n: isize);

    /// Signed number of slots from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;

    /// Returns the element `n` slots away without moving the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the target slot does not hold a live element.
    fn get_at(&self, n: isize) -> &Self::Value;
}

/// Write access through a random-access cursor.
pub trait RandomAccessCursorMut: RandomAccessCursor {
    /// Returns the element under the cursor mutably.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on a live element.
    fn get_mut(&mut self) -> &mut Self::Value;

    /// Returns the element `n` slots away mutably.
    ///
    /// # Panics
    ///
    /// Panics if the target slot does not hold a live element.
    fn get_at_mut(&mut self, n: isize) -> &mut Self::Value;
}

/// Distance computation selected by a capability tag.
pub trait DistanceStrategy<I> {
    /// Number of increments that take `first` to `last`.
    fn distance(first: I, last: I) -> usize;
}

impl<I: ForwardCursor> DistanceStrategy<I> for ForwardIteratorTag {
    fn distance(mut first: I, last: I) -> usize {
        let mut n = 0;
        while first != last {
            first.increment();
            n += 1;
        }
        n
    }
}

impl<I: BidirectionalCursor> DistanceStrategy<I> for BidirectionalIteratorTag {
    fn distance(first: I, last: I) -> usize {
        <ForwardIteratorTag as DistanceStrategy<I>>::distance(first, last)
    }
}

impl<I: RandomAccessCursor> DistanceStrategy<I> for RandomAccessIteratorTag {
    #[allow(clippy::cast_sign_loss)]
    fn distance(first: I, last: I) -> usize {
        let n = last.distance_from(&first);
        assert!(n >= 0, "range end precedes range start by {} slots", -n);
        n as usize
    }
}

/// Movement selected by a capability tag.
pub trait AdvanceStrategy<I> {
    /// Moves `it` by `n` slots.
    fn advance(it: &mut I, n: isize);
}

impl<I: ForwardCursor> AdvanceStrategy<I> for ForwardIteratorTag {
    fn advance(it: &mut I, n: isize) {
        assert!(n >= 0, "a forward cursor cannot move backward by {} slots", -n);
        for _ in 0..n {
            it.increment();
        }
    }
}

impl<I: BidirectionalCursor> AdvanceStrategy<I> for BidirectionalIteratorTag {
    fn advance(it: &mut I, n: isize) {
        if n >= 0 {
            for _ in 0..n {
                it.increment();
            }
        } else {
            for _ in n..0 {
                it.decrement();
            }
        }
    }
}

impl<I: RandomAccessCursor> AdvanceStrategy<I> for RandomAccessIteratorTag {
    fn advance(it: &mut I, n: isize) {
        it.advance_by(n);
    }
}

/// Number of elements in the range `[first, last)`.
///
/// Constant time for random-access cursors, linear otherwise.
///
/// # Panics
///
/// Panics if a random-access `last` lies before `first`.
pub fn distance<I>(first: I, last: I) -> usize
where
    I: IteratorTraits,
    I::Category: DistanceStrategy<I>,
{
    <I::Category as DistanceStrategy<I>>::distance(first, last)
}

/// Moves `it` by `n` slots using the cheapest movement its category allows.
///
/// # Panics
///
/// Panics if `n` is negative and `it` is forward-only.
pub fn advance<I>(it: &mut I, n: isize)
where
    I: IteratorTraits,
    I::Category: AdvanceStrategy<I>,
{
    <I::Category as AdvanceStrategy<I>>::advance(it, n);
}

/// Name of the traversal capability of `I`.
#[must_use]
pub fn category_name<I: IteratorTraits>() -> &'static str {
    <I::Category as IteratorCategory>::NAME
}
