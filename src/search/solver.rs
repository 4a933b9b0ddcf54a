use super::{interrupt::Interrupt, odometer::Assignments};
use crate::{
    coloring::{Coloring, SolutionSet},
    error::Result,
    graph::Graph,
    label::{equals, Label},
    types::{Edge, VId},
};
use log::{debug, info};
use rayon::prelude::*;
use std::{
    sync::{atomic::AtomicBool, Arc},
    time::{Duration, Instant},
};

/// Number of leading vertices whose labels are fixed per parallel branch.
const FAN_OUT_DEPTH: usize = 2;

/// How candidate colorings are enumerated.
///
/// Both strategies visit colorings in the same order and find the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Test every one of the `3^n` assignments against every edge.
    Exhaustive,
    /// Label vertices in order and drop a partial assignment as soon as an
    /// edge between labeled vertices collides.
    Pruned,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Pruned
    }
}

/// Finds all valid 3-colorings of a graph.
///
/// ```
/// use tricolor::{graph::Graph, search::Solver};
///
/// let triangle = Graph::new(3, vec![(0, 1), (1, 2), (2, 0)]).unwrap();
/// let solutions = Solver::new(&triangle).parallel(true).solve().unwrap();
/// assert_eq!(solutions.len(), 6);
/// ```
pub struct Solver<'a> {
    graph: &'a Graph,
    backward: Vec<Vec<VId>>,
    strategy: Strategy,
    parallel: bool,
    abort_flag: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl<'a> Solver<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            backward: graph.backward_neighbors(),
            strategy: Strategy::default(),
            parallel: false,
            abort_flag: None,
            deadline: None,
        }
    }

    pub fn strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Split the search over the labels of the first vertices and run the
    /// branches on the rayon pool.
    pub fn parallel(&mut self, parallel: bool) -> &mut Self {
        self.parallel = parallel;
        self
    }

    /// Abort the search with [`Error::Aborted`](crate::error::Error) once `flag`
    /// is set.
    pub fn abort_flag(&mut self, flag: Arc<AtomicBool>) -> &mut Self {
        self.abort_flag = Some(flag);
        self
    }

    pub fn deadline(&mut self, deadline: Instant) -> &mut Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.deadline(Instant::now() + timeout)
    }

    /// All valid colorings, in lexicographic order.
    pub fn solve(&self) -> Result<SolutionSet> {
        let time_start = Instant::now();
        let colorings: Vec<Coloring> = self
            .search(|found: &mut Vec<Coloring>, labels| {
                found.push(Coloring::new(labels.to_vec()))
            })?
            .into_iter()
            .flatten()
            .collect();
        info!(
            "found {} colorings in {}ms",
            colorings.len(),
            time_start.elapsed().as_millis()
        );
        Ok(SolutionSet::new(colorings))
    }

    /// Number of valid colorings, without materializing them.
    pub fn count(&self) -> Result<usize> {
        let time_start = Instant::now();
        let count: usize = self
            .search(|count: &mut usize, _| *count += 1)?
            .into_iter()
            .sum();
        info!(
            "counted {} colorings in {}ms",
            count,
            time_start.elapsed().as_millis()
        );
        Ok(count)
    }
}

// private methods
impl<'a> Solver<'a> {
    /// Runs one branch per label prefix and returns the per-branch states in
    /// prefix order.
    fn search<S, F>(&self, visit: F) -> Result<Vec<S>>
    where
        S: Default + Send,
        F: Fn(&mut S, &[Label]) + Sync,
    {
        let depth = if self.parallel {
            self.graph.num_vertices().min(FAN_OUT_DEPTH)
        } else {
            0
        };
        info!(
            "searching {} vertices, {} edges, {:?}, {} branches",
            self.graph.num_vertices(),
            self.graph.num_edges(),
            self.strategy,
            3usize.pow(depth as u32)
        );
        let prefixes: Vec<Vec<Label>> = Assignments::new(depth).collect();
        let branch = |prefix: &Vec<Label>| -> Result<S> {
            let mut state = S::default();
            let mut interrupt = Interrupt::new(self.abort_flag.as_deref(), self.deadline);
            interrupt.check()?;
            let mut emit = |labels: &[Label]| visit(&mut state, labels);
            match self.strategy {
                Strategy::Exhaustive => self.exhaustive(prefix, &mut interrupt, &mut emit)?,
                Strategy::Pruned => self.pruned(prefix, &mut interrupt, &mut emit)?,
            }
            debug!("branch {:?} done", prefix);
            Ok(state)
        };
        if self.parallel {
            prefixes.par_iter().map(branch).collect()
        } else {
            prefixes.iter().map(branch).collect()
        }
    }

    fn exhaustive(
        &self,
        prefix: &[Label],
        interrupt: &mut Interrupt,
        emit: &mut dyn FnMut(&[Label]),
    ) -> Result<()> {
        let mut labels = prefix.to_vec();
        let mut assignments = Assignments::new(self.graph.num_vertices() - prefix.len());
        while let Some(suffix) = assignments.current() {
            interrupt.tick()?;
            labels.truncate(prefix.len());
            labels.extend_from_slice(suffix);
            if is_proper(self.graph.edges(), &labels) {
                emit(&labels);
            }
            assignments.advance();
        }
        Ok(())
    }

    fn pruned(
        &self,
        prefix: &[Label],
        interrupt: &mut Interrupt,
        emit: &mut dyn FnMut(&[Label]),
    ) -> Result<()> {
        let mut labels = Vec::with_capacity(self.graph.num_vertices());
        for &label in prefix {
            if !self.fits(&labels, label) {
                return Ok(());
            }
            labels.push(label);
        }
        self.extend(&mut labels, interrupt, emit)
    }

    fn extend(
        &self,
        labels: &mut Vec<Label>,
        interrupt: &mut Interrupt,
        emit: &mut dyn FnMut(&[Label]),
    ) -> Result<()> {
        if labels.len() == self.graph.num_vertices() {
            emit(labels);
            return Ok(());
        }
        for &label in &Label::ALL {
            interrupt.tick()?;
            if self.fits(labels, label) {
                labels.push(label);
                self.extend(labels, interrupt, emit)?;
                labels.pop();
            }
        }
        Ok(())
    }

    /// Whether `label` can go on the next vertex given the labels so far.
    fn fits(&self, labels: &[Label], label: Label) -> bool {
        let v = labels.len();
        self.backward[v]
            .iter()
            .all(|&u| u != v && !equals(labels[u], label))
    }
}

/// Whether no edge joins two equal labels. Stops at the first collision.
fn is_proper(edges: &[Edge], labels: &[Label]) -> bool {
    edges.iter().all(|&(u, v)| !equals(labels[u], labels[v]))
}

/// Validates `(num_vertices, edges)` and returns every valid 3-coloring.
///
/// An empty result means the graph is not 3-colorable.
pub fn solve<E>(num_vertices: usize, edges: E) -> Result<SolutionSet>
where
    E: IntoIterator<Item = Edge>,
{
    Solver::new(&Graph::new(num_vertices, edges)?).solve()
}
