//! Colorings and the set of valid colorings found by a solve.

use crate::{graph::Graph, label::Label, types::VId};
use itertools::Itertools;

/// One label per vertex, indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coloring(Vec<Label>);

impl Coloring {
    pub fn new(labels: Vec<Label>) -> Self {
        Self(labels)
    }

    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, v: VId) -> Option<Label> {
        self.0.get(v).copied()
    }

    /// Whether this coloring covers `graph` and no edge joins equal labels.
    pub fn is_valid(&self, graph: &Graph) -> bool {
        self.len() == graph.num_vertices()
            && graph.edges().iter().all(|&(u, v)| self.0[u] != self.0[v])
    }

    /// Relabels every vertex through the bijection `perm`. See
    /// [`Label::permute`].
    pub fn permute(&self, perm: &[Label; 3]) -> Self {
        Self(self.0.iter().map(|label| label.permute(perm)).collect())
    }
}

impl From<Vec<Label>> for Coloring {
    fn from(labels: Vec<Label>) -> Self {
        Self(labels)
    }
}

impl std::fmt::Display for Coloring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

/// All valid colorings of a graph, in lexicographic order.
///
/// Vertex 0 is the most significant digit and labels count as `0 < 1 < 2`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolutionSet(Vec<Coloring>);

impl SolutionSet {
    pub(crate) fn new(colorings: Vec<Coloring>) -> Self {
        Self(colorings)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_colorable(&self) -> bool {
        !self.is_empty()
    }

    /// The `k`-th coloring.
    pub fn get(&self, k: usize) -> Option<&Coloring> {
        self.0.get(k)
    }

    pub fn first(&self) -> Option<&Coloring> {
        self.0.first()
    }

    pub fn contains(&self, coloring: &Coloring) -> bool {
        self.0.binary_search(coloring).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coloring> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Coloring] {
        &self.0
    }
}

impl IntoIterator for SolutionSet {
    type Item = Coloring;
    type IntoIter = std::vec::IntoIter<Coloring>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Coloring;
    type IntoIter = std::slice::Iter<'a, Coloring>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
