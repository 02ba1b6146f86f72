#![no_std]
#![warn(unsafe_op_in_unsafe_fn)]

//! `growvec`: a growable, contiguous vector with an explicit allocation
//! lifecycle and random-access cursors.
//!
//! A [`Vector`] owns one block of storage obtained from an [`Allocator`] and
//! keeps three positions into it: the first slot, one past the last live
//! element, and one past the last allocated slot. Elements are constructed
//! into and destroyed from slots through the allocator, so a custom
//! allocator observes every block and every element lifecycle event.
//!
//! This crate is `no_std` compatible; it needs only `alloc`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`: amortized O(1), capacity doubles when full
//! - `pop_back()`, `at()`, `front()`, `back()`: O(1)
//! - `insert()`, `erase()`: O(n) in the number of elements after the position
//! - `reserve()`: O(n) when it reallocates, O(1) otherwise
//! - `swap()`: O(1), no element is touched
//! - Cursor arithmetic: O(1)
//!
//! ## Growth Policy
//! - `push_back()` on a full vector doubles the capacity (first growth: 1 slot)
//! - `reserve(n)` grows to exactly `n` slots, never more
//! - Inserting past the spare capacity allocates exactly `len() + count` slots
//! - Capacity never shrinks
//!
//! ## `no_std` Compatibility
//!
//! Enable the optional `std` feature to get `std::error::Error` on
//! [`VectorError`], and the `log` feature to trace every reallocation under
//! the `growvec` target:
//! ```toml
//! [dependencies]
//! growvec = { version = "0.1", features = ["std", "log"] }
//! ```
//!
//! # Basic Usage
//!
//! ```
//! # use growvec::Vector;
//! let mut numbers = Vector::new();
//! for i in 0..5 {
//!     numbers.push_back(i);
//! }
//!
//! assert_eq!(numbers.len(), 5);
//! assert_eq!(numbers.capacity(), 8);
//! assert_eq!(*numbers.front(), 0);
//! assert_eq!(*numbers.back(), 4);
//!
//! // Checked access reports the offending index
//! assert_eq!(numbers.at(2), Ok(&2));
//! assert!(numbers.at(5).is_err());
//!
//! // A vector dereferences to a slice
//! assert_eq!(numbers.iter().sum::<i32>(), 10);
//! ```
//!
//! # Insertion and Erasure
//!
//! Positions are element indices. Insertion and erasure return a cursor at
//! the affected position:
//!
//! ```
//! # use growvec::Vector;
//! let mut letters = Vector::from(['a', 'b', 'c']);
//!
//! let it = letters.insert(1, 'x');
//! assert_eq!(*it, 'x');
//! assert_eq!(letters.as_slice(), ['a', 'x', 'b', 'c']);
//!
//! letters.insert_n(0, 2, '-');
//! assert_eq!(letters.as_slice(), ['-', '-', 'a', 'x', 'b', 'c']);
//!
//! let it = letters.erase_range(0, 3);
//! assert_eq!(*it, 'x');
//! assert_eq!(letters.as_slice(), ['x', 'b', 'c']);
//! ```
//!
//! # Cursors
//!
//! [`Vector::begin`] and [`Vector::end`] return random-access cursors that
//! support pointer-style arithmetic. Reverse cursors wrap a base cursor one
//! slot past the element they yield:
//!
//! ```
//! # use growvec::{distance, Vector};
//! let numbers = Vector::from([10, 20, 30, 40]);
//!
//! let first = numbers.begin();
//! let last = numbers.end();
//! assert_eq!(last - first, 4);
//! assert_eq!(first[2], 30);
//! assert_eq!(*(first + 3), 40);
//! assert_eq!(distance(first, last), 4);
//!
//! let r = numbers.rbegin();
//! assert_eq!(*r, 40);
//! assert_eq!(r[1], 30);
//! assert_eq!(*r.base_ref(), numbers.end());
//!
//! // A range can seed a new vector
//! let middle = Vector::from_range(first + 1, last - 1);
//! assert_eq!(middle.as_slice(), [20, 30]);
//! ```
//!
//! # Comparison
//!
//! Vectors compare lexicographically:
//!
//! ```
//! # use growvec::Vector;
//! let short = Vector::from([1, 2]);
//! let long = Vector::from([1, 2, 3]);
//! let other = Vector::from([1, 3]);
//!
//! assert!(short < long);
//! assert!(long < other);
//! assert!(short <= short.clone());
//! assert_ne!(short, long);
//! ```

extern crate alloc;

mod algorithm;
mod allocator;
mod error;
mod iterator;
mod random_access;
mod reverse;
mod trace;
mod vector;

// Re-export public types and traits
pub use algorithm::{equal, equal_by, lexicographical_compare, lexicographical_compare_by};
pub use allocator::{Allocator, Global};
pub use error::VectorError;
pub use iterator::{
    advance, category_name, distance, AdvanceStrategy, BidirectionalCursor,
    BidirectionalIteratorTag, DistanceStrategy, ForwardCursor, ForwardIteratorTag,
    IteratorCategory, IteratorTraits, RandomAccessCursor, RandomAccessCursorMut,
    RandomAccessIteratorTag,
};
pub use random_access::{Iter, IterMut};
pub use reverse::ReverseIterator;
pub use vector::{swap, Vector};
