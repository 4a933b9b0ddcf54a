//! Various types shared across the crate.

/// The vertex id type.
pub type VId = usize;

/// An undirected edge between two vertices.
pub type Edge = (VId, VId);
