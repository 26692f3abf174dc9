use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested key or value is not present.
    #[error("not found")]
    NotFound,

    /// Pop, dequeue, peek or extract on a container with no elements.
    #[error("collection is empty")]
    EmptyCollection,

    /// Insert into a fixed-capacity container that is already full.
    #[error("capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// Positional access outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
