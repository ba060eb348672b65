//! Immutable sequences with a structural algebra, and the enumeration of
//! simplex faces as index tuples built on top of it.

pub mod sequence;
pub mod simplex;

pub use sequence::{init_indices, Indices, Sequence, SequenceError, Value, ValueSequence};
pub use simplex::{enumerate_simplexes, FaceCollection, FaceLattice, SimplexFaces};

pub type Dim = usize;
