use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr::NonNull;
use std::rc::Rc;

use growvec::{Allocator, Global, Vector};

#[derive(Default)]
struct Stats {
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    slots_allocated: Cell<usize>,
    constructed: Cell<usize>,
    destroyed: Cell<usize>,
}

impl Stats {
    fn bump(cell: &Cell<usize>, by: usize) {
        cell.set(cell.get() + by);
    }
}

/// Wraps `Global` and counts every lifecycle event.
#[derive(Clone, Default)]
struct Counting {
    stats: Rc<Stats>,
    max: Option<usize>,
}

impl Counting {
    fn limited(max: usize) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }
}

unsafe impl<T> Allocator<T> for Counting {
    fn allocate(&self, n: usize) -> NonNull<T> {
        Stats::bump(&self.stats.allocations, 1);
        Stats::bump(&self.stats.slots_allocated, n);
        Global.allocate(n)
    }

    unsafe fn deallocate(&self, block: NonNull<T>, n: usize) {
        Stats::bump(&self.stats.deallocations, 1);
        unsafe { Global.deallocate(block, n) }
    }

    unsafe fn construct(&self, slot: *mut T, value: T) {
        Stats::bump(&self.stats.constructed, 1);
        unsafe { Global.construct(slot, value) }
    }

    unsafe fn destroy(&self, slot: *mut T) {
        Stats::bump(&self.stats.destroyed, 1);
        unsafe { Allocator::<T>::destroy(&Global, slot) }
    }

    fn max_size(&self) -> usize {
        self.max
            .unwrap_or_else(|| Allocator::<T>::max_size(&Global))
    }
}

/// Clones until its shared budget runs out, then panics.
struct Fragile {
    id: u32,
    budget: Rc<Cell<u32>>,
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        assert!(left > 0, "clone budget exhausted");
        self.budget.set(left - 1);
        Self {
            id: self.id,
            budget: Rc::clone(&self.budget),
        }
    }
}

fn fragile(id: u32, budget: &Rc<Cell<u32>>) -> Fragile {
    Fragile {
        id,
        budget: Rc::clone(budget),
    }
}

fn ids<A: Allocator<Fragile>>(vector: &Vector<Fragile, A>) -> Vec<u32> {
    vector.iter().map(|item| item.id).collect()
}

#[test]
fn test_empty_vector_never_allocates() {
    let alloc = Counting::default();
    {
        let vector: Vector<u32, Counting> = Vector::new_in(alloc.clone());
        assert_eq!(vector.capacity(), 0);
    }
    assert_eq!(alloc.stats.allocations.get(), 0);
    assert_eq!(alloc.stats.deallocations.get(), 0);
}

#[test]
fn test_every_block_and_element_is_released() {
    let alloc = Counting::default();
    {
        let mut vector = Vector::from_elem_in(5, String::from("x"), alloc.clone());
        vector.push_back(String::from("y"));
        vector.insert_n(2, 3, String::from("z"));
        vector.erase_range(0, 2);
        vector.pop_back();
        vector.resize(10, String::new()).unwrap();
    }
    let stats = &alloc.stats;
    assert_eq!(stats.allocations.get(), stats.deallocations.get());
    // pop_back hands its element to the caller instead of destroying it
    assert_eq!(stats.constructed.get(), stats.destroyed.get() + 1);
}

#[test]
fn test_amortized_growth_is_linear() {
    let alloc = Counting::default();
    let mut vector = Vector::new_in(alloc.clone());
    let pushes = 10_000;
    for i in 0..pushes {
        vector.push_back(i);
    }

    let stats = &alloc.stats;
    // 1, 2, 4, ..., 16384
    assert_eq!(stats.allocations.get(), 15);
    assert!(stats.slots_allocated.get() < 4 * pushes);
    assert_eq!(stats.constructed.get(), pushes);
}

#[test]
fn test_reserve_allocates_exactly_once() {
    let alloc = Counting::default();
    let mut vector = Vector::new_in(alloc.clone());
    vector.push_back(1u16);
    vector.reserve(100).unwrap();
    vector.reserve(50).unwrap();

    assert_eq!(vector.capacity(), 100);
    assert_eq!(alloc.stats.allocations.get(), 2);
    assert_eq!(alloc.stats.deallocations.get(), 1);
}

#[test]
fn test_with_capacity_in_and_allocator_access() {
    let alloc = Counting::default();
    let vector: Vector<u64, Counting> = Vector::with_capacity_in(12, alloc.clone());
    assert_eq!(vector.capacity(), 12);
    assert_eq!(alloc.stats.slots_allocated.get(), 12);
    assert!(Rc::ptr_eq(&vector.allocator().stats, &alloc.stats));
}

#[test]
fn test_max_size_comes_from_allocator() {
    let vector: Vector<u8, Counting> = Vector::new_in(Counting::limited(3));
    assert_eq!(vector.max_size(), 3);
    assert_eq!(Vector::<u64>::new().max_size(), isize::MAX as usize / 8);
}

#[test]
fn test_push_back_growth_stops_at_max_size() {
    let mut vector = Vector::new_in(Counting::limited(3));
    vector.push_back(1u8);
    vector.push_back(2);
    vector.push_back(3);
    assert_eq!(vector.capacity(), 3);
    assert!(vector.try_push_back(4).is_err());
    assert_eq!(vector.as_slice(), [1, 2, 3]);
}

#[test]
fn test_swap_exchanges_allocators() {
    let left_alloc = Counting::default();
    let right_alloc = Counting::default();
    let mut left = Vector::from_elem_in(2, 1u8, left_alloc.clone());
    let mut right = Vector::from_elem_in(3, 2u8, right_alloc.clone());

    left.swap(&mut right);
    assert!(Rc::ptr_eq(&left.allocator().stats, &right_alloc.stats));
    drop(left);
    assert_eq!(right_alloc.stats.deallocations.get(), 1);
    assert_eq!(left_alloc.stats.deallocations.get(), 0);
}

#[test]
fn test_clone_uses_cloned_allocator() {
    let alloc = Counting::default();
    let source = Vector::from_elem_in(4, 7i32, alloc.clone());
    let copy = source.clone();
    assert_eq!(copy, source);
    assert_eq!(alloc.stats.allocations.get(), 2);
}

#[test]
fn test_panicking_clone_during_in_place_insert() {
    let budget = Rc::new(Cell::new(100));
    let mut vector = Vector::with_capacity(10);
    for id in 0..3 {
        vector.push_back(fragile(id, &budget));
    }

    budget.set(1);
    let result = catch_unwind(AssertUnwindSafe(|| {
        vector.insert_n(1, 3, fragile(9, &budget));
    }));
    assert!(result.is_err());

    // the clone that succeeded stays; the tail closes the rest of the gap
    assert_eq!(ids(&vector), [0, 9, 1, 2]);
    assert_eq!(Rc::strong_count(&budget), 1 + vector.len());
}

#[test]
fn test_panicking_clone_during_reallocating_insert() {
    let alloc = Counting::default();
    let budget = Rc::new(Cell::new(100));
    let mut vector = Vector::new_in(alloc.clone());
    for id in 0..3 {
        vector.push_back(fragile(id, &budget));
    }
    let capacity = vector.capacity();

    budget.set(1);
    let result = catch_unwind(AssertUnwindSafe(|| {
        vector.insert_n(0, capacity, fragile(9, &budget));
    }));
    assert!(result.is_err());

    assert_eq!(ids(&vector), [0, 1, 2]);
    assert_eq!(vector.capacity(), capacity);
    assert_eq!(Rc::strong_count(&budget), 1 + vector.len());
    let stats = &alloc.stats;
    assert_eq!(stats.allocations.get(), stats.deallocations.get() + 1);
}

#[test]
fn test_panicking_clone_during_assign() {
    let budget = Rc::new(Cell::new(100));
    let mut vector = Vector::from_elem(2, fragile(0, &budget));

    budget.set(2);
    let result = catch_unwind(AssertUnwindSafe(|| {
        vector.assign_fill(5, fragile(1, &budget));
    }));
    assert!(result.is_err());

    assert_eq!(ids(&vector), [1, 1]);
    assert_eq!(Rc::strong_count(&budget), 1 + vector.len());
}
