use alloc::string::String;
use thiserror::Error;

/// A push was refused because a bounded stack is full. The rejected value is handed back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("stack overflow: capacity {capacity} exhausted")]
pub struct Overflow<T> {
  pub value: T,
  pub capacity: usize,
}

impl<T> Overflow<T> {
  pub fn into_value(self) -> T { self.value }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StackError {
  #[error("stack overflow: capacity {capacity} exhausted")]
  Overflow { capacity: usize },
  #[error("unknown stack kind tag: {0}")]
  UnknownKind(u32),
  #[error("unknown stack kind name: {0:?}")]
  UnknownKindName(String),
}

/// Drops the rejected value, so `?` works across pushes and kind parsing.
impl<T> From<Overflow<T>> for StackError {
  fn from(overflow: Overflow<T>) -> Self {
    StackError::Overflow { capacity: overflow.capacity }
  }
}
