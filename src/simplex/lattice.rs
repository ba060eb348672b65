use super::{enumerate_simplexes, FaceCollection};
use crate::{sequence::Indices, Dim};

use indexmap::IndexSet;

/// The face tuples of the `n`-simplex, graded by tuple length.
///
/// The rank of a face is its position in [`enumerate_simplexes`].
#[derive(Debug, Clone)]
pub struct FaceLattice {
  n: Dim,
  faces: IndexSet<Indices>,
  /// `graded[len - 1]` holds the faces of length `len`.
  graded: Vec<Vec<Indices>>,
}

impl FaceLattice {
  pub fn new(n: Dim) -> Self {
    let faces: IndexSet<Indices> = enumerate_simplexes(n).into_iter().collect();

    let mut graded = vec![Vec::new(); n];
    for face in &faces {
      graded[face.size() - 1].push(face.clone());
    }

    tracing::debug!(n, nfaces = faces.len(), "built face lattice");
    Self { n, faces, graded }
  }

  pub fn n(&self) -> Dim {
    self.n
  }
  pub fn nfaces(&self) -> usize {
    self.faces.len()
  }

  /// All faces of length `len`. Empty if there are none.
  pub fn faces_of_len(&self, len: usize) -> &[Indices] {
    len
      .checked_sub(1)
      .and_then(|i| self.graded.get(i))
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  /// Faces grouped by length, starting at length 1.
  pub fn graded(&self) -> &[Vec<Indices>] {
    &self.graded
  }

  pub fn rank(&self, face: &Indices) -> Option<usize> {
    self.faces.get_index_of(face)
  }
  pub fn face(&self, rank: usize) -> Option<&Indices> {
    self.faces.get_index(rank)
  }

  pub fn iter(&self) -> indexmap::set::Iter<'_, Indices> {
    self.faces.iter()
  }

  pub fn into_collection(self) -> FaceCollection {
    self.faces.into_iter().collect()
  }
}

#[cfg(test)]
mod test {
  use super::FaceLattice;
  use crate::{
    sequence::Indices,
    simplex::{enumerate_simplexes, falling_factorial},
  };

  #[test]
  fn grading() {
    let lattice = FaceLattice::new(3);
    let graded = lattice.graded();
    assert_eq!(graded.len(), 3);
    assert_eq!(
      graded[0],
      [Indices::from([0]), Indices::from([1]), Indices::from([2])]
    );
    assert_eq!(
      graded[2],
      [
        Indices::from([0, 0, 0]),
        Indices::from([0, 1, 0]),
        Indices::from([1, 0, 0]),
        Indices::from([1, 1, 0]),
        Indices::from([2, 0, 0]),
        Indices::from([2, 1, 0]),
      ]
    );
    assert!(lattice.faces_of_len(0).is_empty());
    assert!(lattice.faces_of_len(4).is_empty());

    for n in 0..=5 {
      let lattice = FaceLattice::new(n);
      for len in 1..=n {
        assert_eq!(
          Some(lattice.faces_of_len(len).len()),
          falling_factorial(n, len)
        );
      }
    }
  }

  #[test]
  fn rank_roundtrip() {
    for n in 0..=5 {
      let lattice = FaceLattice::new(n);
      for (rank, face) in enumerate_simplexes(n).iter().enumerate() {
        assert_eq!(lattice.rank(face), Some(rank));
        assert_eq!(lattice.face(rank), Some(face));
      }
      for (rank, face) in lattice.iter().enumerate() {
        assert_eq!(lattice.rank(face), Some(rank));
      }
      assert_eq!(lattice.face(lattice.nfaces()), None);
    }
    let lattice = FaceLattice::new(2);
    assert_eq!(lattice.rank(&Indices::from([0, 1])), None);
  }

  #[test]
  fn collection() {
    for n in 0..=4 {
      let lattice = FaceLattice::new(n);
      assert_eq!(lattice.n(), n);
      assert!(lattice.iter().eq(enumerate_simplexes(n).iter()));
      assert_eq!(lattice.into_collection(), enumerate_simplexes(n));
    }
  }
}
