//! Single-pass sequence comparisons over cursor ranges.

use crate::iterator::ForwardCursor;

/// Tests whether `[first1, last1)` matches the range starting at `first2`
/// element by element.
///
/// The second range must hold at least as many elements as the first; a
/// shorter one makes the second cursor read past its live window and panic.
pub fn equal<I1, I2>(first1: I1, last1: I1, first2: I2) -> bool
where
    I1: ForwardCursor,
    I2: ForwardCursor,
    I1::Value: PartialEq<I2::Value>,
{
    equal_by(first1, last1, first2, |a, b| a == b)
}

/// Like [`equal`], with `pred` deciding whether two elements match.
pub fn equal_by<I1, I2, P>(mut first1: I1, last1: I1, mut first2: I2, mut pred: P) -> bool
where
    I1: ForwardCursor,
    I2: ForwardCursor,
    P: FnMut(&I1::Value, &I2::Value) -> bool,
{
    while first1 != last1 {
        if !pred(first1.get(), first2.get()) {
            return false;
        }
        first1.increment();
        first2.increment();
    }
    true
}

/// Tests whether `[first1, last1)` orders strictly before `[first2, last2)`.
///
/// The first differing element decides; a strict prefix orders before its
/// extension; equal sequences are not less than one another.
pub fn lexicographical_compare<I1, I2>(first1: I1, last1: I1, first2: I2, last2: I2) -> bool
where
    I1: ForwardCursor,
    I2: ForwardCursor<Value = I1::Value>,
    I1::Value: PartialOrd,
{
    lexicographical_compare_by(first1, last1, first2, last2, |a, b| a < b)
}

/// Like [`lexicographical_compare`], with `less` as the strict ordering.
pub fn lexicographical_compare_by<I1, I2, C>(
    mut first1: I1,
    last1: I1,
    mut first2: I2,
    last2: I2,
    mut less: C,
) -> bool
where
    I1: ForwardCursor,
    I2: ForwardCursor<Value = I1::Value>,
    C: FnMut(&I1::Value, &I1::Value) -> bool,
{
    while first1 != last1 {
        if first2 == last2 || less(first2.get(), first1.get()) {
            return false;
        }
        if less(first1.get(), first2.get()) {
            return true;
        }
        first1.increment();
        first2.increment();
    }
    first2 != last2
}
