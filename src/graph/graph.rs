use crate::{
    error::{Error, Result},
    types::{Edge, VId},
};
use itertools::Itertools;

/// Largest vertex count a `Graph` accepts.
///
/// Well past what the search finishes in practice; it bounds the per-vertex
/// tables built before searching.
pub const MAX_VERTICES: usize = 64;

/// An undirected graph given by its vertex count and edge list.
///
/// The edge list is authoritative: the search walks it directly.
/// `(u, v)` and `(v, u)` are the same constraint. A self-loop `(v, v)` is
/// accepted and makes the graph non-colorable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub(super) num_vertices: usize,
    pub(super) edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph, rejecting more than [`MAX_VERTICES`] vertices and any
    /// edge with an endpoint `>= num_vertices`.
    pub fn new<E>(num_vertices: usize, edges: E) -> Result<Self>
    where
        E: IntoIterator<Item = Edge>,
    {
        if num_vertices > MAX_VERTICES {
            return Err(Error::TooManyVertices {
                num_vertices,
                max: MAX_VERTICES,
            });
        }
        let edges: Vec<Edge> = edges.into_iter().collect();
        if let Some(&(u, v)) = edges
            .iter()
            .find(|&&(u, v)| u >= num_vertices || v >= num_vertices)
        {
            return Err(Error::VertexOutOfRange { u, v, num_vertices });
        }
        Ok(Self {
            num_vertices,
            edges,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_self_loop(&self) -> bool {
        self.edges.iter().any(|&(u, v)| u == v)
    }

    /// Sorted, deduplicated neighbors of `v`.
    pub fn neighbors(&self, v: VId) -> Vec<VId> {
        self.edges
            .iter()
            .filter_map(|&(a, b)| {
                if a == v {
                    Some(b)
                } else if b == v {
                    Some(a)
                } else {
                    None
                }
            })
            .sorted()
            .dedup()
            .collect()
    }

    /// For each vertex `v`, the endpoints `u <= v` of its edges.
    ///
    /// Once vertices `0..=v` are labeled, these are exactly the constraints
    /// that become checkable at `v`.
    pub(crate) fn backward_neighbors(&self) -> Vec<Vec<VId>> {
        let mut backward = vec![vec![]; self.num_vertices];
        for &(u, v) in &self.edges {
            let (lo, hi) = if u <= v { (u, v) } else { (v, u) };
            backward[hi].push(lo);
        }
        for us in backward.iter_mut() {
            us.sort_unstable();
            us.dedup();
        }
        backward
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(graph (vertices {})", self.num_vertices)?;
        if !self.edges.is_empty() {
            write!(
                f,
                "\n       (edges {})",
                self.edges
                    .iter()
                    .map(|(u, v)| format!("({} {})", u, v))
                    .join(" ")
            )?;
        }
        writeln!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let graph = Graph::new(3, vec![(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.edges(), &[(0, 1), (1, 2), (2, 0)]);
        assert!(!graph.has_self_loop());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Graph::new(3, vec![(0, 1), (1, 3)]),
            Err(Error::VertexOutOfRange {
                u: 1,
                v: 3,
                num_vertices: 3
            })
        );
        assert_eq!(
            Graph::new(0, vec![(0, 0)]),
            Err(Error::VertexOutOfRange {
                u: 0,
                v: 0,
                num_vertices: 0
            })
        );
    }

    #[test]
    fn test_too_many_vertices() {
        assert!(Graph::new(MAX_VERTICES, vec![(0, MAX_VERTICES - 1)]).is_ok());
        assert_eq!(
            Graph::new(MAX_VERTICES + 1, vec![]),
            Err(Error::TooManyVertices {
                num_vertices: MAX_VERTICES + 1,
                max: MAX_VERTICES
            })
        );
        assert_eq!(
            Graph::new(usize::MAX, vec![]),
            Err(Error::TooManyVertices {
                num_vertices: usize::MAX,
                max: MAX_VERTICES
            })
        );
    }

    #[test]
    fn test_empty() {
        let graph = Graph::new(0, vec![]).unwrap();
        assert_eq!(graph.num_vertices(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Graph::new(3, vec![(0, 1), (1, 2)]).unwrap().to_string(),
            "(graph (vertices 3)\n       (edges (0 1) (1 2)))\n"
        );
        assert_eq!(
            Graph::new(2, vec![]).unwrap().to_string(),
            "(graph (vertices 2))\n"
        );
    }

    #[test]
    fn test_neighbors() {
        let graph = Graph::new(4, vec![(0, 1), (2, 0), (1, 0), (3, 3)]).unwrap();
        assert_eq!(graph.neighbors(0), vec![1, 2]);
        assert_eq!(graph.neighbors(1), vec![0]);
        assert_eq!(graph.neighbors(3), vec![3]);
        assert!(graph.has_self_loop());
    }

    #[test]
    fn test_backward_neighbors() {
        let graph = Graph::new(4, vec![(0, 1), (2, 0), (1, 0), (3, 3), (3, 1)]).unwrap();
        assert_eq!(
            graph.backward_neighbors(),
            vec![vec![], vec![0], vec![0], vec![1, 3]]
        );
    }
}
