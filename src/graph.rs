//! Exhaustive construction of the reachable state graph.
//!
//! Vertices are canonical arrangements, edges are single one-cell slides.
//! Every generated arrangement is canonicalized before it is stored or
//! compared, so interchangeable blocks never produce duplicate vertices.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

use crate::error::SolveError;
use crate::geometry::Direction;
use crate::grid::{Labels, State};

/// Undirected graph: every canonical state mapped to its canonical neighbors.
pub type Graph<const CELLS: usize> = FxHashMap<State<CELLS>, FxHashSet<State<CELLS>>>;

/// Vertex count between progress log events.
const PROGRESS_INTERVAL: usize = 10_000;

/// Frontier-driven traversal of the move relation.
///
/// Owns the partial graph and the set of states waiting to be expanded.
/// The frontier is a set, so a state is never queued twice.
pub struct GraphBuilder<const WIDTH: usize, const HEIGHT: usize, const CELLS: usize> {
    labels: Labels,
    graph: Graph<CELLS>,
    pending: BTreeSet<State<CELLS>>,
}

impl<const WIDTH: usize, const HEIGHT: usize, const CELLS: usize>
    GraphBuilder<WIDTH, HEIGHT, CELLS>
{
    /// Starts a traversal from `initial`, which need not be canonical.
    pub fn new(initial: State<CELLS>) -> Self {
        const { assert!(WIDTH * HEIGHT == CELLS, "CELLS must equal WIDTH * HEIGHT") };

        let labels = Labels::gather(&initial);
        let start = initial.canonical(&labels);
        Self {
            labels,
            graph: Graph::default(),
            pending: BTreeSet::from([start]),
        }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// The graph built so far.
    pub fn graph(&self) -> &Graph<CELLS> {
        &self.graph
    }

    /// Number of states queued but not yet expanded.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Canonical states reachable from `state` in one slide.
    pub fn neighbors(&self, state: &State<CELLS>) -> impl Iterator<Item = State<CELLS>> + '_ {
        let state = *state;
        self.labels.iter().flat_map(move |label| {
            Direction::ALL.into_iter().filter_map(move |direction| {
                state
                    .slide::<WIDTH, HEIGHT>(label, direction)
                    .map(|moved| moved.canonical(&self.labels))
            })
        })
    }

    /// Expands one pending state: adds it as a vertex with all its edges, and
    /// queues neighbors that are neither vertices nor pending.
    ///
    /// Returns `Ok(false)` once the frontier is empty.
    pub fn expand_next(&mut self) -> Result<bool, SolveError> {
        let Some(current) = self.pending.pop_first() else {
            return Ok(false);
        };
        let current = current.canonical(&self.labels);
        if self.graph.contains_key(&current) {
            return Err(SolveError::DuplicateVertex);
        }

        let edges: FxHashSet<State<CELLS>> = self.neighbors(&current).collect();
        for neighbor in &edges {
            if !self.graph.contains_key(neighbor) && *neighbor != current {
                self.pending.insert(*neighbor);
            }
        }
        self.graph.insert(current, edges);

        if self.graph.len() % PROGRESS_INTERVAL == 0 {
            debug!(
                vertices = self.graph.len(),
                pending = self.pending.len(),
                "graph progress"
            );
        }
        Ok(true)
    }

    /// Expands states until the graph is closed under the move relation.
    pub fn build(mut self) -> Result<Graph<CELLS>, SolveError> {
        info!("Generating graph...");
        while self.expand_next()? {}
        info!(vertices = self.graph.len(), "Graph generated");
        Ok(self.graph)
    }
}

/// Builds the complete state graph reachable from `initial`.
pub fn build_graph<const WIDTH: usize, const HEIGHT: usize, const CELLS: usize>(
    initial: State<CELLS>,
) -> Result<Graph<CELLS>, SolveError> {
    GraphBuilder::<WIDTH, HEIGHT, CELLS>::new(initial).build()
}
