use alloc::boxed::Box;
use core::fmt;
use crate::{Overflow, Stack};

pub(crate) struct StackNode<T> {
  value: T,
  next:  Link<T>,
}

type Link<T> = Option<Box<StackNode<T>>>;

/// An unbounded stack made of singly linked heap nodes. The head node is the top of the stack.
pub struct LinkedListStack<T> {
  head: Link<T>,
  len:  usize,
}

impl<T> LinkedListStack<T> {
  pub fn new() -> LinkedListStack<T> {
    LinkedListStack { head: None, len: 0 }
  }

  /// Unlinks and frees every node, returning how many were released.
  ///
  /// Iterative so long chains can't overflow the call stack through recursive drops.
  fn release(&mut self) -> usize {
    let mut released = 0;
    let mut link = self.head.take();
    while let Some(mut node) = link {
      link = node.next.take();
      released += 1;
    }
    self.len = 0;
    released
  }
}

impl<T> Default for LinkedListStack<T> {
  fn default() -> Self { LinkedListStack::new() }
}

impl<T> Stack<T> for LinkedListStack<T> {
  fn init(&mut self) {
    self.release();
  }

  fn destroy(&mut self) {
    let released = self.release();
    tracing::trace!(released, "linked list stack destroyed");
  }

  fn push(&mut self, value: T) -> Result<&mut Self, Overflow<T>> {
    let next = self.head.take();
    self.head = Some(Box::new(StackNode { value, next }));
    self.len += 1;
    Ok(self)
  }

  fn pop(&mut self) -> Option<T> {
    let node = self.head.take()?;
    let StackNode { value, next } = *node;
    self.head = next;
    self.len -= 1;
    Some(value)
  }

  fn peek(&self) -> Option<&T> {
    self.head.as_ref().map(|node| &node.value)
  }

  fn peek_mut(&mut self) -> Option<&mut T> {
    self.head.as_mut().map(|node| &mut node.value)
  }

  fn len(&self) -> usize { self.len }

  fn capacity(&self) -> Option<usize> { None }

  fn clear(&mut self) {
    self.release();
  }
}

impl<T> Drop for LinkedListStack<T> {
  fn drop(&mut self) {
    self.release();
  }
}

impl<T: fmt::Debug> fmt::Debug for LinkedListStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut list = f.debug_list();
    let mut link = &self.head;
    while let Some(node) = link {
      list.entry(&node.value);
      link = &node.next;
    }
    list.finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn head_is_most_recent_push() {
    let mut s = LinkedListStack::new();
    s.push('a').unwrap().push('b').unwrap();
    assert_eq!(s.head.as_ref().map(|n| n.value), Some('b'));
    assert_eq!(s.head.as_ref().and_then(|n| n.next.as_ref()).map(|n| n.value), Some('a'));
  }

  #[test]
  fn pop_to_empty_clears_head() {
    let mut s = LinkedListStack::new();
    s.push_all(0..16).unwrap();
    while s.pop().is_some() {}
    assert!(s.head.is_none());
    assert_eq!(s.len(), 0);
  }

  #[test]
  fn release_counts_nodes() {
    let mut s = LinkedListStack::new();
    s.push_all(0..5).unwrap();
    assert_eq!(s.release(), 5);
    assert!(s.head.is_none());
    assert_eq!(s.release(), 0);
  }

  #[test]
  fn long_chain_drops_without_recursion() {
    let mut s = LinkedListStack::new();
    s.push_all(0..1_000_000u32).unwrap();
    drop(s);
  }

  #[test]
  fn debug_lists_top_first() {
    let mut s = LinkedListStack::new();
    s.push_all([1, 2, 3]).unwrap();
    assert_eq!(format!("{:?}", s), "[3, 2, 1]");
  }
}
