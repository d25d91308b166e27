use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use crate::{Overflow, Stack};

/// A fixed-capacity stack stored in a single heap buffer.
///
/// The buffer is allocated once by [`Stack::init`] and never grows.
pub struct ArrayStack<T> {
  slots:    Box<[Option<T>]>,
  top:      usize, // Index of the next free slot
  capacity: usize,
}

impl<T> ArrayStack<T> {
  /// Creates and initialises a stack that holds at most `capacity` values.
  ///
  /// A zero capacity is allowed and yields a stack that is always full.
  pub fn new(capacity: usize) -> ArrayStack<T> {
    let mut stack = ArrayStack { slots: Box::default(), top: 0, capacity };
    stack.init();
    stack
  }
}

impl<T> Stack<T> for ArrayStack<T> {
  fn init(&mut self) {
    let mut slots = Vec::with_capacity(self.capacity);
    slots.resize_with(self.capacity, || None);
    self.slots = slots.into_boxed_slice();
    self.top = 0;
  }

  fn destroy(&mut self) {
    // Until the next init this behaves as a zero-capacity stack.
    self.slots = Box::default();
    self.top = 0;
  }

  fn push(&mut self, value: T) -> Result<&mut Self, Overflow<T>> {
    if self.top >= self.slots.len() {
      tracing::trace!(capacity = self.slots.len(), "array stack overflow");
      return Err(Overflow { value, capacity: self.slots.len() });
    }
    self.slots[self.top] = Some(value);
    self.top += 1;
    Ok(self)
  }

  fn pop(&mut self) -> Option<T> {
    let top = self.top.checked_sub(1)?;
    let value = self.slots.get_mut(top)?.take();
    self.top = top;
    value
  }

  fn peek(&self) -> Option<&T> {
    let top = self.top.checked_sub(1)?;
    self.slots.get(top)?.as_ref()
  }

  fn peek_mut(&mut self) -> Option<&mut T> {
    let top = self.top.checked_sub(1)?;
    self.slots.get_mut(top)?.as_mut()
  }

  fn len(&self) -> usize { self.top }

  fn capacity(&self) -> Option<usize> { Some(self.slots.len()) }

  fn clear(&mut self) {
    for slot in &mut self.slots[..self.top] {
      *slot = None;
    }
    self.top = 0;
  }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("ArrayStack")
      .field("values", &&self.slots[..self.top])
      .field("capacity", &self.slots.len())
      .finish()
  }
}
