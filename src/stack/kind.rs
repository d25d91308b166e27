use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use crate::StackError;

/// Selects the backing store of an [`AnyStack`](super::AnyStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature="serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature="serde", serde(rename_all = "kebab-case"))]
#[repr(u32)]
pub enum StackKind {
  /// Unbounded, one heap node per value.
  #[default]
  LinkedList = 0,
  /// Bounded by a capacity fixed at creation.
  Array = 1,
}

impl StackKind {
  pub fn tag(self) -> u32 { self as u32 }

  pub fn name(self) -> &'static str {
    match self {
      StackKind::LinkedList => "linked-list",
      StackKind::Array => "array",
    }
  }
}

impl TryFrom<u32> for StackKind {
  type Error = StackError;
  fn try_from(tag: u32) -> Result<Self, StackError> {
    match tag {
      0 => Ok(StackKind::LinkedList),
      1 => Ok(StackKind::Array),
      other => Err(StackError::UnknownKind(other)),
    }
  }
}

impl FromStr for StackKind {
  type Err = StackError;
  fn from_str(s: &str) -> Result<Self, StackError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("array") {
      Ok(StackKind::Array)
    } else if ["linked-list", "linked_list", "linkedlist", "list"].iter().any(|n| s.eq_ignore_ascii_case(n)) {
      Ok(StackKind::LinkedList)
    } else {
      Err(StackError::UnknownKindName(s.to_string()))
    }
  }
}

impl fmt::Display for StackKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Everything needed to build an [`AnyStack`](super::AnyStack).
///
/// `capacity` only matters for [`StackKind::Array`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature="serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackConfig {
  pub kind: StackKind,
  #[cfg_attr(feature="serde", serde(default))]
  pub capacity: usize,
}

impl StackConfig {
  pub fn array(capacity: usize) -> Self {
    StackConfig { kind: StackKind::Array, capacity }
  }

  pub fn linked_list() -> Self {
    StackConfig { kind: StackKind::LinkedList, capacity: 0 }
  }
}
