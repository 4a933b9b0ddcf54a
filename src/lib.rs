//! Exhaustive 3-coloring of small undirected graphs.

pub mod coloring;
pub mod error;
pub mod front_end;
pub mod graph;
pub mod label;
pub mod report;
pub mod search;
pub mod types;

pub use search::solve;
