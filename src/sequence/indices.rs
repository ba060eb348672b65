//! Sequences of non-negative integers.
//!
//! Used both as positions (the argument of [`Sequence::select`]) and as the
//! index tuples describing simplex faces.

use super::Sequence;

pub type Indices = Sequence<usize>;

/// `len` copies of `value`.
pub fn init_indices(len: usize, value: usize) -> Indices {
  Indices::new(vec![value; len])
}

impl Indices {
  /// `[0, 1, ..., n-1]`
  pub fn counting(n: usize) -> Self {
    Self::offset_counting(0, n)
  }

  /// `[offset, offset+1, ..., offset+n-1]`
  pub fn offset_counting(offset: usize, n: usize) -> Self {
    (offset..offset + n).collect()
  }

  /// Every element shifted up by `offset`.
  pub fn offset(&self, offset: usize) -> Self {
    self.iter().map(|i| i + offset).collect()
  }

  /// Empty and singleton sequences are trivially strictly increasing.
  pub fn is_strictly_increasing(&self) -> bool {
    self.first_non_increasing().is_none()
  }

  /// First adjacent pair `(previous, next)` with `previous >= next`.
  pub fn first_non_increasing(&self) -> Option<(usize, usize)> {
    self
      .as_slice()
      .windows(2)
      .map(|w| (w[0], w[1]))
      .find(|&(previous, next)| previous >= next)
  }
}

#[cfg(test)]
mod test {
  use super::{init_indices, Indices};

  #[test]
  fn init() {
    assert_eq!(init_indices(0, 0), Indices::empty());
    assert_eq!(init_indices(1, 0), Indices::from([0]));
    assert_eq!(init_indices(2, 0), Indices::from([0, 0]));
    assert_eq!(init_indices(3, 4), Indices::from([4, 4, 4]));
  }

  #[test]
  fn counting_ranges() {
    assert_eq!(Indices::counting(0), Indices::empty());
    assert_eq!(Indices::counting(3), Indices::from([0, 1, 2]));
    assert_eq!(Indices::offset_counting(2, 3), Indices::from([2, 3, 4]));
    assert_eq!(Indices::offset_counting(5, 0), Indices::empty());
    assert_eq!(Indices::counting(3).offset(2), Indices::offset_counting(2, 3));
  }

  #[test]
  fn strictly_increasing() {
    assert!(Indices::empty().is_strictly_increasing());
    assert!(Indices::single(3).is_strictly_increasing());
    assert!(Indices::from([0, 2, 5]).is_strictly_increasing());
    assert!(!Indices::from([0, 2, 2]).is_strictly_increasing());
    assert!(!Indices::from([1, 0]).is_strictly_increasing());

    assert_eq!(Indices::empty().first_non_increasing(), None);
    assert_eq!(Indices::from([0, 2, 5]).first_non_increasing(), None);
    assert_eq!(Indices::from([0, 3, 3, 1]).first_non_increasing(), Some((3, 3)));
    assert_eq!(Indices::from([4, 1, 0]).first_non_increasing(), Some((4, 1)));
  }

  #[test]
  fn algebra_on_indices() {
    let s = Indices::from([1, 2, 3]);
    assert_eq!(s.select(&Indices::from([0, 2])), Indices::from([1, 3]));
    assert_eq!(s.set(0, 0), Indices::from([0, 2, 3]));
    assert_eq!(s.set(1, 0), Indices::from([1, 0, 3]));
    assert_eq!(s.set(2, 0), Indices::from([1, 2, 0]));
    assert_eq!(*s.head(), 1);
    assert_eq!(*s.last(), 3);
    assert_eq!(s.init(), Indices::from([1, 2]));
    assert_eq!(s.tail(), Indices::from([2, 3]));
  }
}
