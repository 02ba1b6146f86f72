use growvec::{equal, lexicographical_compare, ReverseIterator, Vector};
use quickcheck::{QuickCheck, TestResult};

const TESTS: u64 = 1_000;

/// Property: after fill construction every element equals the fill value and
/// exactly `n` slots are allocated.
#[test]
fn fill_construction_quickcheck() {
    fn prop(n: u8, value: i16) -> bool {
        let n = usize::from(n);
        let vector = Vector::from_elem(n, value);
        vector.len() == n && vector.capacity() == n && vector.iter().all(|item| *item == value)
    }

    QuickCheck::new()
        .tests(TESTS)
        .quickcheck(prop as fn(u8, i16) -> bool);
}

/// Property: inserting `n` copies at `pos` and erasing `[pos, pos + n)`
/// restores the original sequence.
#[test]
fn insert_erase_round_trip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(items: Vec<i32>, pos: usize, n: u8, value: i32, spare: u8) -> bool {
        let pos = pos % (items.len() + 1);
        let n = usize::from(n);
        let mut vector = Vector::from(&items[..]);
        // vary between the in-place and the reallocating paths
        vector.reserve(items.len() + usize::from(spare)).unwrap();

        vector.insert_n(pos, n, value);
        let inserted = vector.len() == items.len() + n
            && vector[pos..pos + n].iter().all(|item| *item == value);
        vector.erase_range(pos, pos + n);
        inserted && vector.as_slice() == &items[..]
    }

    QuickCheck::new()
        .tests(TESTS)
        .quickcheck(prop as fn(Vec<i32>, usize, u8, i32, u8) -> bool);
}

/// Property: a range insert followed by erasing it is an identity, and the
/// inserted run matches its source.
#[test]
fn range_insert_round_trip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(items: Vec<u8>, extra: Vec<u8>, pos: usize) -> bool {
        let pos = pos % (items.len() + 1);
        let source = Vector::from(&extra[..]);
        let mut vector = Vector::from(&items[..]);

        vector.insert_range(pos, source.begin(), source.end());
        let inserted = vector[pos..pos + extra.len()] == extra[..];
        vector.erase_range(pos, pos + extra.len());
        inserted && vector.as_slice() == &items[..]
    }

    QuickCheck::new()
        .tests(TESTS)
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>, usize) -> bool);
}

/// Property: `reserve` either keeps the block or moves to exactly `n` slots,
/// and the elements survive either way.
#[test]
fn reserve_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(items: Vec<u16>, n: u16) -> bool {
        let n = usize::from(n);
        let mut vector: Vector<u16> = items.iter().copied().collect();
        let before = vector.capacity();
        vector.reserve(n).unwrap();
        let expected = before.max(n);
        vector.capacity() == expected && vector.as_slice() == &items[..]
    }

    QuickCheck::new()
        .tests(TESTS)
        .quickcheck(prop as fn(Vec<u16>, u16) -> bool);
}

/// Property: for equal-sized vectors `equal` agrees with `==`.
#[test]
fn equal_matches_equality_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(left: Vec<u8>, right: Vec<u8>) -> TestResult {
        if left.len() != right.len() {
            return TestResult::discard();
        }
        let v = Vector::from(&left[..]);
        let w = Vector::from(&right[..]);
        TestResult::from_bool(equal(v.begin(), v.end(), w.begin()) == (v == w))
    }

    QuickCheck::new()
        .tests(TESTS)
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> TestResult);
}

/// Property: the vector ordering agrees with slice ordering, and every
/// relational operator agrees with `lexicographical_compare`.
#[test]
fn ordering_matches_slices_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(left: Vec<i8>, right: Vec<i8>) -> bool {
        let v = Vector::from(&left[..]);
        let w = Vector::from(&right[..]);
        let less = lexicographical_compare(v.begin(), v.end(), w.begin(), w.end());
        let greater = lexicographical_compare(w.begin(), w.end(), v.begin(), v.end());

        v.cmp(&w) == left.cmp(&right)
            && (v < w) == less
            && (v > w) == greater
            && (v <= w) == !greater
            && (v >= w) == !less
            && (v == w) == (left == right)
    }

    QuickCheck::new()
        .tests(TESTS)
        .quickcheck(prop as fn(Vec<i8>, Vec<i8>) -> bool);
}

/// Property: wrapping any non-begin cursor in a reverse cursor yields the
/// element before it and unwraps to the same position.
#[test]
fn reverse_round_trip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(items: Vec<char>, offset: usize) -> TestResult {
        if items.is_empty() {
            return TestResult::discard();
        }
        let vector = Vector::from(&items[..]);
        let offset = 1 + offset % items.len();
        let it = vector.begin() + offset as isize;
        let rit = ReverseIterator::new(it);
        TestResult::from_bool(rit.base() == it && *rit == *(it - 1))
    }

    QuickCheck::new()
        .tests(TESTS)
        .quickcheck(prop as fn(Vec<char>, usize) -> TestResult);
}

/// Property: `swap` exchanges contents and leaves both vectors intact.
#[test]
fn swap_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(left: Vec<String>, right: Vec<String>) -> bool {
        let mut a: Vector<String> = left.iter().cloned().collect();
        let mut b: Vector<String> = right.iter().cloned().collect();
        a.swap(&mut b);
        a.as_slice() == &right[..] && b.as_slice() == &left[..]
    }

    QuickCheck::new()
        .tests(TESTS)
        .quickcheck(prop as fn(Vec<String>, Vec<String>) -> bool);
}
