//! Enumeration of the faces of the standard simplex as index tuples.
//!
//! A face of the `n`-simplex is encoded as an index tuple `(x_0, ..., x_{d-1})`
//! with `x_i <= n - i - 1`. Read left to right, every entry chooses one of the
//! vertices not chosen so far, out of a pool shrinking by one per step.
//! The tuple length is the face dimension plus one.

pub mod lattice;

pub use lattice::FaceLattice;

use crate::{
  sequence::{init_indices, Indices, Sequence},
  Dim,
};

use rayon::prelude::*;
use std::iter::FusedIterator;

/// All face tuples of one simplex, ordered by length and then by generation order.
pub type FaceCollection = Sequence<Indices>;

/// Every face tuple of the `n`-simplex.
///
/// Tuples come grouped by increasing length `1..=n`. Within one length they
/// appear in odometer order: the rightmost entry that can still grow is
/// incremented and all entries after it are reset to zero.
pub fn enumerate_simplexes(n: Dim) -> FaceCollection {
  let faces: FaceCollection = SimplexFaces::new(n).collect();
  tracing::debug!(n, nfaces = faces.size(), "enumerated simplex faces");
  faces
}

/// Enumerates several independent simplices in parallel.
pub fn enumerate_simplexes_batch(ns: &[Dim]) -> Vec<FaceCollection> {
  ns.par_iter().map(|&n| enumerate_simplexes(n)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  Start,
  IncreaseDimension,
  Advance,
  Done,
}

/// Lazy face enumeration of the `n`-simplex.
///
/// Yields the same tuples in the same order as [`enumerate_simplexes`].
#[derive(Debug, Clone)]
pub struct SimplexFaces {
  n: Dim,
  phase: Phase,
  current: Indices,
}

impl SimplexFaces {
  pub fn new(n: Dim) -> Self {
    Self {
      n,
      phase: Phase::Start,
      current: Indices::empty(),
    }
  }

  pub fn n(&self) -> Dim {
    self.n
  }

  /// Largest position of `self.current` that is not at its maximum `n - i - 1`.
  ///
  /// [`None`] means every position is maximal and the current length is exhausted.
  fn last_non_max(&self) -> Option<usize> {
    let n = self.n;
    (0..self.current.size())
      .rev()
      .find(|&i| *self.current.get(i) != n - i - 1)
  }

  fn emit(&mut self, next: Indices) -> Option<Indices> {
    debug_assert!(is_face_tuple(self.n, &next));
    self.current = next;
    Some(self.current.clone())
  }
}

impl Iterator for SimplexFaces {
  type Item = Indices;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      match self.phase {
        Phase::Done => return None,
        Phase::Start => {
          if self.n == 0 {
            self.phase = Phase::Done;
            continue;
          }
          self.phase = Phase::Advance;
          return self.emit(Indices::single(0));
        }
        Phase::IncreaseDimension => {
          let len = self.current.size();
          if len == self.n {
            self.phase = Phase::Done;
            continue;
          }
          tracing::trace!(n = self.n, len = len + 1, "increasing face dimension");
          self.phase = Phase::Advance;
          return self.emit(init_indices(len + 1, 0));
        }
        Phase::Advance => match self.last_non_max() {
          None => {
            self.phase = if self.current.size() == self.n {
              Phase::Done
            } else {
              Phase::IncreaseDimension
            };
          }
          Some(ilast) => {
            let len = self.current.size();
            let incremented = self.current.get(ilast) + 1;
            let next = self
              .current
              .select(&Indices::counting(ilast))
              .append([incremented])
              .concatenate(&init_indices(len - ilast - 1, 0));
            return self.emit(next);
          }
        },
      }
    }
  }
}

impl FusedIterator for SimplexFaces {}

/// `n (n-1) ... (n-k+1)`
///
/// [`None`] if the result does not fit into a `usize`.
pub fn falling_factorial(n: usize, k: usize) -> Option<usize> {
  if k > n {
    return Some(0);
  }
  (n - k + 1..=n).try_fold(1usize, |acc, f| acc.checked_mul(f))
}

/// Number of face tuples of length `len` of the `n`-simplex.
///
/// [`None`] on overflow.
pub fn nfaces_of_len(n: Dim, len: usize) -> Option<usize> {
  if len == 0 {
    Some(0)
  } else {
    falling_factorial(n, len)
  }
}

/// Total number of face tuples of the `n`-simplex.
///
/// [`None`] on overflow.
pub fn nfaces(n: Dim) -> Option<usize> {
  (1..=n).try_fold(0usize, |acc, len| acc.checked_add(nfaces_of_len(n, len)?))
}

/// Whether `tuple` is a valid face tuple of the `n`-simplex.
pub fn is_face_tuple(n: Dim, tuple: &Indices) -> bool {
  !tuple.is_empty()
    && tuple.size() <= n
    && tuple.iter().enumerate().all(|(i, &x)| x < n - i)
}

/// The ordered vertices picked by a face tuple.
///
/// Step `i` picks the `tuple[i]`-th smallest vertex among those of `0..n`
/// not yet picked.
pub fn decode_vertices(n: Dim, tuple: &Indices) -> Indices {
  assert!(is_face_tuple(n, tuple), "{tuple} is not a face tuple of {n}");
  let mut remaining = Indices::counting(n);
  let mut vertices = Indices::empty();
  for &x in tuple {
    vertices = vertices.append([*remaining.get(x)]);
    let keep = Indices::counting(x).concatenate(&Indices::offset_counting(
      x + 1,
      remaining.size() - x - 1,
    ));
    remaining = remaining.select(&keep);
  }
  vertices
}
