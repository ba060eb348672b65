//! Immutable, fixed-length sequences and their structural algebra.
//!
//! A [`Sequence`] never changes after construction. Every operation returns a
//! fresh sequence owning copies of the elements it keeps.
//!
//! The compound operations ([`Sequence::set`], [`Sequence::init`],
//! [`Sequence::tail`]) are expressed purely through [`Sequence::select`],
//! [`Sequence::append`] and [`Sequence::concatenate`].

pub mod error;
pub mod indices;
pub mod value;

pub use error::SequenceError;
pub use indices::{init_indices, Indices};
pub use value::{Value, ValueSequence};

use itertools::Itertools as _;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence<T> {
  elements: Vec<T>,
}

// Constructors
impl<T> Sequence<T> {
  pub fn new(elements: Vec<T>) -> Self {
    Self { elements }
  }
  pub fn empty() -> Self {
    Self::new(Vec::new())
  }
  pub fn single(element: T) -> Self {
    Self::new(vec![element])
  }
}

impl<T> Sequence<T> {
  pub fn size(&self) -> usize {
    self.elements.len()
  }
  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn try_get(&self, i: usize) -> Result<&T, SequenceError> {
    self.elements.get(i).ok_or(SequenceError::OutOfRange {
      position: i,
      size: self.size(),
    })
  }

  /// Element at position `i`.
  ///
  /// Panics if `i >= self.size()`.
  #[track_caller]
  pub fn get(&self, i: usize) -> &T {
    contract(self.try_get(i))
  }

  pub fn try_head(&self) -> Result<&T, SequenceError> {
    self.ensure_nonempty("head")?;
    self.try_get(0)
  }
  #[track_caller]
  pub fn head(&self) -> &T {
    contract(self.try_head())
  }

  pub fn try_last(&self) -> Result<&T, SequenceError> {
    self.ensure_nonempty("last")?;
    self.try_get(self.size() - 1)
  }
  #[track_caller]
  pub fn last(&self) -> &T {
    contract(self.try_last())
  }

  fn ensure_nonempty(&self, operation: &'static str) -> Result<(), SequenceError> {
    if self.is_empty() {
      Err(SequenceError::Empty { operation })
    } else {
      Ok(())
    }
  }
}

impl<T: Clone> Sequence<T> {
  /// `self` followed by `elements`.
  pub fn append<I: IntoIterator<Item = T>>(&self, elements: I) -> Self {
    let mut appended = self.elements.clone();
    appended.extend(elements);
    Self::new(appended)
  }

  /// `elements` followed by `self`.
  pub fn prepend<I: IntoIterator<Item = T>>(&self, elements: I) -> Self {
    let mut prepended: Vec<T> = elements.into_iter().collect();
    prepended.extend_from_slice(&self.elements);
    Self::new(prepended)
  }

  pub fn concatenate(&self, other: &Self) -> Self {
    self.append(other.iter().cloned())
  }

  /// The elements at `positions`, in the given order.
  ///
  /// The positions must be strictly increasing and in bounds.
  pub fn try_select(&self, positions: &Indices) -> Result<Self, SequenceError> {
    if let Some((previous, next)) = positions.first_non_increasing() {
      return Err(SequenceError::NotStrictlyIncreasing { previous, next });
    }
    if let Some(&position) = positions.as_slice().last() {
      if position >= self.size() {
        return Err(SequenceError::OutOfRange {
          position,
          size: self.size(),
        });
      }
    }

    let mut selected = Vec::with_capacity(positions.size());
    let mut wanted = positions.iter().copied().peekable();
    for (i, element) in self.iter().enumerate() {
      match wanted.peek() {
        None => break,
        Some(&w) if w == i => {
          selected.push(element.clone());
          wanted.next();
        }
        Some(_) => {}
      }
    }
    debug_assert_eq!(selected.len(), positions.size());
    Ok(Self::new(selected))
  }
  #[track_caller]
  pub fn select(&self, positions: &Indices) -> Self {
    contract(self.try_select(positions))
  }

  /// `self` with position `i` replaced by `value`.
  pub fn try_set(&self, i: usize, value: T) -> Result<Self, SequenceError> {
    self.try_get(i)?;
    let before = self.try_select(&Indices::counting(i))?;
    let after = self.try_select(&Indices::offset_counting(i + 1, self.size() - i - 1))?;
    Ok(before.append([value]).concatenate(&after))
  }
  #[track_caller]
  pub fn set(&self, i: usize, value: T) -> Self {
    contract(self.try_set(i, value))
  }

  /// All elements but the last.
  pub fn try_init(&self) -> Result<Self, SequenceError> {
    self.ensure_nonempty("init")?;
    self.try_select(&Indices::counting(self.size() - 1))
  }
  #[track_caller]
  pub fn init(&self) -> Self {
    contract(self.try_init())
  }

  /// All elements but the first.
  pub fn try_tail(&self) -> Result<Self, SequenceError> {
    self.ensure_nonempty("tail")?;
    self.try_select(&Indices::offset_counting(1, self.size() - 1))
  }
  #[track_caller]
  pub fn tail(&self) -> Self {
    contract(self.try_tail())
  }
}

#[track_caller]
fn contract<R>(result: Result<R, SequenceError>) -> R {
  result.unwrap_or_else(|err| panic!("sequence contract violated: {err}"))
}

impl<T> std::ops::Index<usize> for Sequence<T> {
  type Output = T;
  #[track_caller]
  fn index(&self, index: usize) -> &Self::Output {
    self.get(index)
  }
}

// Conversions
impl<T> Sequence<T> {
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.elements.iter()
  }
  pub fn as_slice(&self) -> &[T] {
    self.elements.as_slice()
  }
  pub fn into_vec(self) -> Vec<T> {
    self.elements
  }
}

impl<T> From<Vec<T>> for Sequence<T> {
  fn from(value: Vec<T>) -> Self {
    Self::new(value)
  }
}
impl<T, const N: usize> From<[T; N]> for Sequence<T> {
  fn from(value: [T; N]) -> Self {
    Self::new(value.into())
  }
}
impl<T> From<Sequence<T>> for Vec<T> {
  fn from(value: Sequence<T>) -> Self {
    value.elements
  }
}
impl<T> FromIterator<T> for Sequence<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl<T> IntoIterator for Sequence<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;
  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}
impl<'a, T> IntoIterator for &'a Sequence<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;
  fn into_iter(self) -> Self::IntoIter {
    self.elements.iter()
  }
}

impl<T: std::fmt::Display> std::fmt::Display for Sequence<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}]", self.iter().join(", "))
  }
}
