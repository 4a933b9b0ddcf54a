//! Graphs to be colored.

pub use graph::{Graph, MAX_VERTICES};

mod graph;

/// The 8-vertex, 14-edge graph used as the end-to-end regression scenario.
///
/// It has exactly six colorings, which are one coloring up to relabeling.
pub fn reference() -> Graph {
    Graph {
        num_vertices: 8,
        edges: vec![
            (0, 1),
            (0, 4),
            (0, 5),
            (1, 7),
            (1, 2),
            (2, 3),
            (2, 7),
            (1, 3),
            (3, 4),
            (3, 6),
            (4, 5),
            (4, 6),
            (5, 6),
            (6, 7),
        ],
    }
}
