use lifostack::*;
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

/// Counts live allocations made by the current thread.
struct Counting;

thread_local! {
  static LIVE: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for Counting {
  unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
    let ptr = System.alloc(layout);
    if !ptr.is_null() {
      let _ = LIVE.try_with(|live| live.set(live.get() + 1));
    }
    ptr
  }

  unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
    let _ = LIVE.try_with(|live| live.set(live.get() - 1));
    System.dealloc(ptr, layout)
  }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live() -> isize { LIVE.with(Cell::get) }

// Hits every logging callsite once so their one-time registration isn't counted as a leak.
fn warm_up() {
  for kind in [StackKind::Array, StackKind::LinkedList] {
    let mut s = AnyStack::create(kind, 0);
    let _ = s.push(0u8).map(|_| ());
    s.destroy();
  }
}

fn cycle(kind: StackKind, n: u64) {
  let before = live();
  let mut s = AnyStack::create(kind, n as usize);
  for i in 0..n {
    s.push(i).unwrap();
  }
  for _ in 0..n {
    assert!(s.pop().is_some());
  }
  assert_eq!(s.pop(), None);
  s.destroy();
  assert_eq!(live(), before, "{} stack leaked", kind);
}

#[test]
fn no_outstanding_allocations() {
  warm_up();
  for n in [0, 1, 17, 1000] {
    cycle(StackKind::Array, n);
    cycle(StackKind::LinkedList, n);
  }
}

#[test]
fn linked_list_allocates_per_node() {
  warm_up();
  let before = live();
  let mut s = LinkedListStack::new();
  s.push_all(0..8u8).unwrap();
  assert_eq!(live() - before, 8);
  s.pop();
  assert_eq!(live() - before, 7);
  s.destroy();
  assert_eq!(live(), before);
}

#[test]
fn array_allocates_once() {
  warm_up();
  let before = live();
  let mut s = ArrayStack::new(64);
  assert_eq!(live() - before, 1);
  s.push_all(0..64u8).unwrap();
  assert_eq!(live() - before, 1);
  s.destroy();
  assert_eq!(live(), before);
}
