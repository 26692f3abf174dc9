use crate::graph::VertexId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),
}
