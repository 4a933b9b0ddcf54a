//! Error management.

use crate::types::VId;
use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Error {
    #[display(
        fmt = "edge ({}, {}) is out of range for {} vertices",
        u,
        v,
        num_vertices
    )]
    VertexOutOfRange { u: VId, v: VId, num_vertices: usize },
    #[display(fmt = "{} vertices exceed the limit of {}", num_vertices, max)]
    TooManyVertices { num_vertices: usize, max: usize },
    #[display(fmt = "parse error: {}", _0)]
    Parse(String),
    #[display(fmt = "search aborted")]
    Aborted,
    #[display(fmt = "no coloring at index {} (only {} found)", index, len)]
    NoSuchColoring { index: usize, len: usize },
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
