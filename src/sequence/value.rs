//! Heterogeneous sequences over a closed set of element kinds.

use super::Sequence;

pub type ValueSequence = Sequence<Value>;

/// Element of a heterogeneous sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
  #[default]
  Unit,
  Bool(bool),
  Char(char),
  Int(i64),
  Index(usize),
  Str(String),
  Seq(ValueSequence),
}

impl Value {
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Unit => "unit",
      Self::Bool(_) => "bool",
      Self::Char(_) => "char",
      Self::Int(_) => "int",
      Self::Index(_) => "index",
      Self::Str(_) => "str",
      Self::Seq(_) => "seq",
    }
  }
}

impl From<()> for Value {
  fn from(_: ()) -> Self {
    Self::Unit
  }
}
impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}
impl From<char> for Value {
  fn from(value: char) -> Self {
    Self::Char(value)
  }
}
impl From<i64> for Value {
  fn from(value: i64) -> Self {
    Self::Int(value)
  }
}
impl From<usize> for Value {
  fn from(value: usize) -> Self {
    Self::Index(value)
  }
}
impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Self::Str(value.to_owned())
  }
}
impl From<String> for Value {
  fn from(value: String) -> Self {
    Self::Str(value)
  }
}
impl From<ValueSequence> for Value {
  fn from(value: ValueSequence) -> Self {
    Self::Seq(value)
  }
}

impl std::fmt::Display for Value {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Unit => write!(f, "()"),
      Self::Bool(b) => write!(f, "{b}"),
      Self::Char(c) => write!(f, "{c:?}"),
      Self::Int(i) => write!(f, "{i}"),
      Self::Index(i) => write!(f, "{i}"),
      Self::Str(s) => write!(f, "{s:?}"),
      Self::Seq(s) => write!(f, "{s}"),
    }
  }
}
