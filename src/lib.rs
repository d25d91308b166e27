#![cfg_attr(not(feature="std"), no_std)]

extern crate alloc;

mod error;
pub mod stack;

pub use error::*;
pub use stack::{AnyStack, ArrayStack, LinkedListStack, StackConfig, StackKind};

/// A last-in-first-out container.
///
/// Both backing stores in [`stack`] implement this, as does the runtime-selected [`AnyStack`].
/// `init` and `destroy` manage the backing storage explicitly; dropping a stack releases it too.
pub trait Stack<T> {
  /// Resets the stack to a freshly created state, (re)acquiring backing storage. Any values still
  /// held are dropped.
  fn init(&mut self);

  /// Releases the backing storage. Values still held are dropped.
  fn destroy(&mut self);

  /// Pushes a value on top. Returns `self` so pushes can be chained.
  ///
  /// Fails only when a bounded stack is full, in which case the value is handed back untouched.
  fn push(&mut self, value: T) -> Result<&mut Self, Overflow<T>>;

  /// Removes and returns the top value, or `None` if the stack is empty.
  fn pop(&mut self) -> Option<T>;

  fn peek(&self) -> Option<&T>;
  fn peek_mut(&mut self) -> Option<&mut T>;

  fn len(&self) -> usize;

  /// The maximum number of values the stack can hold, or `None` if unbounded.
  fn capacity(&self) -> Option<usize>;

  /// Drops every held value, keeping the backing storage usable.
  fn clear(&mut self);

  fn is_empty(&self) -> bool { self.len() == 0 }

  fn is_full(&self) -> bool {
    self.capacity().is_some_and(|cap| self.len() >= cap)
  }

  /// Pushes every value in order, stopping at the first overflow.
  fn push_all<I>(&mut self, values: I) -> Result<&mut Self, Overflow<T>>
  where I: IntoIterator<Item = T> {
    for value in values {
      self.push(value)?;
    }
    Ok(self)
  }
}
