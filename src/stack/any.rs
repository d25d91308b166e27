use core::fmt;
use crate::{Overflow, Stack};
use super::{ArrayStack, LinkedListStack, StackConfig, StackKind};

/// A stack whose backing store is chosen at runtime.
///
/// Callers drive it through [`Stack`] without caring which variant they got.
pub enum AnyStack<T> {
  Array(ArrayStack<T>),
  LinkedList(LinkedListStack<T>),
}

macro_rules! dispatch {
  ($self:expr, $s:ident => $body:expr) => {
    match $self {
      AnyStack::Array($s) => $body,
      AnyStack::LinkedList($s) => $body,
    }
  };
}

impl<T> AnyStack<T> {
  /// Creates and initialises a stack of the given kind.
  ///
  /// `capacity` bounds an [`StackKind::Array`] stack (zero means always full) and is ignored for
  /// [`StackKind::LinkedList`].
  pub fn create(kind: StackKind, capacity: usize) -> AnyStack<T> {
    tracing::debug!(%kind, capacity, "creating stack");
    match kind {
      StackKind::Array => AnyStack::Array(ArrayStack::new(capacity)),
      StackKind::LinkedList => AnyStack::LinkedList(LinkedListStack::new()),
    }
  }

  pub fn from_config(config: &StackConfig) -> AnyStack<T> {
    AnyStack::create(config.kind, config.capacity)
  }

  /// Releases the backing storage and consumes the handle.
  pub fn destroy(mut self) {
    tracing::debug!(kind = %self.kind(), len = self.len(), "destroying stack");
    <Self as Stack<T>>::destroy(&mut self);
  }

  pub fn kind(&self) -> StackKind {
    match self {
      AnyStack::Array(_) => StackKind::Array,
      AnyStack::LinkedList(_) => StackKind::LinkedList,
    }
  }
}

impl<T> Stack<T> for AnyStack<T> {
  fn init(&mut self) { dispatch!(self, s => s.init()) }

  fn destroy(&mut self) { dispatch!(self, s => s.destroy()) }

  fn push(&mut self, value: T) -> Result<&mut Self, Overflow<T>> {
    dispatch!(self, s => { s.push(value)?; });
    Ok(self)
  }

  fn pop(&mut self) -> Option<T> { dispatch!(self, s => s.pop()) }

  fn peek(&self) -> Option<&T> { dispatch!(self, s => s.peek()) }

  fn peek_mut(&mut self) -> Option<&mut T> { dispatch!(self, s => s.peek_mut()) }

  fn len(&self) -> usize { dispatch!(self, s => s.len()) }

  fn capacity(&self) -> Option<usize> { dispatch!(self, s => s.capacity()) }

  fn clear(&mut self) { dispatch!(self, s => s.clear()) }
}

impl<T> From<ArrayStack<T>> for AnyStack<T> {
  fn from(stack: ArrayStack<T>) -> Self { AnyStack::Array(stack) }
}

impl<T> From<LinkedListStack<T>> for AnyStack<T> {
  fn from(stack: LinkedListStack<T>) -> Self { AnyStack::LinkedList(stack) }
}

impl<T: fmt::Debug> fmt::Debug for AnyStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    dispatch!(self, s => f.debug_tuple(self.kind().name()).field(s).finish())
  }
}
