use thiserror::Error;

/// A caller-contract violation the store refuses to absorb.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("index {index} is out of bounds for a queue of {len} episodes")]
    InvalidIndex { index: usize, len: usize },
}
