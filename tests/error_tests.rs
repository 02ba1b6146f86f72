use std::ptr::NonNull;

use growvec::{Allocator, Global, Vector, VectorError};

/// The system allocator with a small element ceiling.
#[derive(Clone, Copy)]
struct Ceiling(usize);

unsafe impl<T> Allocator<T> for Ceiling {
    fn allocate(&self, n: usize) -> NonNull<T> {
        Global.allocate(n)
    }

    unsafe fn deallocate(&self, block: NonNull<T>, n: usize) {
        unsafe { Global.deallocate(block, n) }
    }

    fn max_size(&self) -> usize {
        self.0
    }
}

#[test]
fn test_at_past_end() {
    let vector = Vector::from([1, 2, 3]);
    assert_eq!(
        vector.at(3),
        Err(VectorError::IndexOutOfRange {
            index: 3,
            length: 3
        })
    );
    assert_eq!(
        Vector::<u8>::new().at(0),
        Err(VectorError::IndexOutOfRange {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn test_at_mut_past_end() {
    let mut vector = Vector::from([1]);
    assert_eq!(
        vector.at_mut(7),
        Err(VectorError::IndexOutOfRange {
            index: 7,
            length: 1
        })
    );
}

#[test]
fn test_reserve_beyond_max_size() {
    let mut vector: Vector<u32, Ceiling> = Vector::new_in(Ceiling(8));
    vector.push_back(1);
    assert_eq!(
        vector.reserve(9),
        Err(VectorError::LengthOutOfRange {
            requested: 9,
            max: 8
        })
    );
    assert_eq!(vector.capacity(), 1);
    assert_eq!(vector.reserve(8), Ok(()));
    assert_eq!(vector.capacity(), 8);
}

#[test]
fn test_reserve_within_capacity_never_fails() {
    let mut vector = Vector::with_capacity_in(4, Ceiling(4));
    vector.push_back('a');
    assert_eq!(vector.reserve(2), Ok(()));
}

#[test]
fn test_resize_beyond_max_size() {
    let mut vector = Vector::from_elem_in(2, 0u16, Ceiling(5));
    assert_eq!(
        vector.resize(6, 1),
        Err(VectorError::LengthOutOfRange {
            requested: 6,
            max: 5
        })
    );
    assert_eq!(vector.as_slice(), [0, 0]);
    assert_eq!(
        vector.resize_default(100),
        Err(VectorError::LengthOutOfRange {
            requested: 100,
            max: 5
        })
    );
}

#[test]
fn test_reserve_beyond_global_max_size() {
    let mut vector: Vector<u64> = Vector::new();
    let max = vector.max_size();
    assert_eq!(
        vector.reserve(max + 1),
        Err(VectorError::LengthOutOfRange {
            requested: max + 1,
            max
        })
    );
}

#[test]
fn test_try_with_capacity_in() {
    assert!(Vector::<u8, Ceiling>::try_with_capacity_in(3, Ceiling(3)).is_ok());
    assert_eq!(
        Vector::<u8, Ceiling>::try_with_capacity_in(4, Ceiling(3)).err(),
        Some(VectorError::LengthOutOfRange {
            requested: 4,
            max: 3
        })
    );
}

#[test]
fn test_try_push_back_at_max_size() {
    let mut vector = Vector::with_capacity_in(2, Ceiling(2));
    assert_eq!(vector.try_push_back(1u8), Ok(()));
    assert_eq!(vector.try_push_back(2), Ok(()));
    assert_eq!(
        vector.try_push_back(3),
        Err(VectorError::LengthOutOfRange {
            requested: 3,
            max: 2
        })
    );
}

#[test]
#[should_panic(expected = "Length out of range: requested 3 elements, but the maximum is 2")]
fn test_push_back_panics_at_max_size() {
    let mut vector = Vector::from_elem_in(2, 0u8, Ceiling(2));
    vector.push_back(1);
}

#[test]
#[should_panic(expected = "Length out of range: requested 4 elements, but the maximum is 3")]
fn test_insert_panics_beyond_max_size() {
    let mut vector = Vector::from_elem_in(2, 0u8, Ceiling(3));
    vector.insert_n(1, 2, 9);
}

#[test]
#[should_panic(expected = "Length out of range: requested 6 elements, but the maximum is 5")]
fn test_assign_panics_beyond_max_size() {
    let mut vector = Vector::new_in(Ceiling(5));
    vector.assign_fill(6, 'z');
}

#[test]
fn test_error_display() {
    let error = VectorError::IndexOutOfRange {
        index: 5,
        length: 2,
    };
    assert_eq!(
        error.to_string(),
        "Index out of range: index 5 is beyond vector length 2"
    );

    let error = VectorError::LengthOutOfRange {
        requested: 10,
        max: 4,
    };
    assert_eq!(
        error.to_string(),
        "Length out of range: requested 10 elements, but the maximum is 4"
    );
}

#[test]
fn test_error_is_cloneable_and_comparable() {
    let error = VectorError::IndexOutOfRange {
        index: 1,
        length: 0,
    };
    assert_eq!(error.clone(), error);
    assert_ne!(
        error,
        VectorError::LengthOutOfRange {
            requested: 1,
            max: 0
        }
    );
}
