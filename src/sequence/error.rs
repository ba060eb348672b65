/// Violation of a [`Sequence`](super::Sequence) operation's precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
  #[error("position {position} out of range for sequence of size {size}")]
  OutOfRange { position: usize, size: usize },

  #[error("selected positions not strictly increasing: {previous} followed by {next}")]
  NotStrictlyIncreasing { previous: usize, next: usize },

  #[error("`{operation}` of empty sequence")]
  Empty { operation: &'static str },
}
