//! Multi-source breadth-first solver over the state graph.
//!
//! Propagates outwards from every goal state at once, so the first time a
//! state is reached it is via a shortest path to the nearest goal. Each state
//! records the neighbor it was reached from, which is its next move.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::info;

use crate::error::SolveError;
use crate::graph::Graph;
use crate::grid::State;

/// Next-step map: every state points at a neighbor one move closer to a goal.
/// Goal states point at themselves.
pub struct Solution<const CELLS: usize> {
    next: FxHashMap<State<CELLS>, State<CELLS>>,
}

impl<const CELLS: usize> Solution<CELLS> {
    /// The state to move to from `state`; `state` itself if it is a goal.
    pub fn next_step(&self, state: &State<CELLS>) -> Result<&State<CELLS>, SolveError> {
        self.next.get(state).ok_or(SolveError::UnknownState)
    }

    pub fn is_goal(&self, state: &State<CELLS>) -> Result<bool, SolveError> {
        Ok(self.next_step(state)? == state)
    }

    /// Every state from `start` to the goal, both included.
    pub fn path_from(&self, start: &State<CELLS>) -> Result<Vec<State<CELLS>>, SolveError> {
        let mut path = vec![*start];
        let mut current = *start;
        loop {
            let next = *self.next_step(&current)?;
            if next == current {
                return Ok(path);
            }
            path.push(next);
            current = next;
        }
    }

    /// Minimum number of moves from `start` to a goal.
    pub fn distance(&self, start: &State<CELLS>) -> Result<usize, SolveError> {
        Ok(self.path_from(start)?.len() - 1)
    }

    /// Number of goal states.
    pub fn goals(&self) -> usize {
        self.next.iter().filter(|(state, next)| state == next).count()
    }

    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }
}

/// Computes the next-step map for every vertex of `graph`.
///
/// Fails if some vertex cannot reach any state satisfying `is_goal`.
pub fn solve<const CELLS: usize>(
    graph: &Graph<CELLS>,
    is_goal: impl Fn(&State<CELLS>) -> bool,
) -> Result<Solution<CELLS>, SolveError> {
    info!("Finding solutions...");

    // states are queued in non-decreasing distance from a goal
    let mut frontier: VecDeque<State<CELLS>> = VecDeque::new();
    let mut next: FxHashMap<State<CELLS>, State<CELLS>> = FxHashMap::default();
    next.reserve(graph.len());

    for &state in graph.keys() {
        if !is_goal(&state) {
            continue;
        }
        next.insert(state, state);
        frontier.push_back(state);
    }

    while let Some(state) = frontier.pop_front() {
        let Some(neighbors) = graph.get(&state) else {
            continue;
        };
        for &neighbor in neighbors {
            // first write wins: a later discovery is never shorter
            if next.contains_key(&neighbor) {
                continue;
            }
            next.insert(neighbor, state);
            frontier.push_back(neighbor);
        }
    }

    if next.len() != graph.len() {
        return Err(SolveError::IncompleteSolution {
            mapped: next.len(),
            vertices: graph.len(),
        });
    }

    info!("Done.");
    Ok(Solution { next })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rustc_hash::FxHashSet;

    /// States on a 1x1 "board", used as opaque vertex names.
    fn v(name: u8) -> State<1> {
        State::new([name])
    }

    /// Builds an undirected graph from an edge list.
    fn graph_from_edges(vertices: &[u8], edges: &[(u8, u8)]) -> Graph<1> {
        let mut graph: Graph<1> = vertices.iter().map(|&n| (v(n), FxHashSet::default())).collect();
        for &(a, b) in edges {
            graph.get_mut(&v(a)).unwrap().insert(v(b));
            graph.get_mut(&v(b)).unwrap().insert(v(a));
        }
        graph
    }

    /// Plain BFS distance from `start` to the nearest goal.
    fn bfs_distance(graph: &Graph<1>, start: State<1>, goals: &[State<1>]) -> Option<usize> {
        let mut seen = FxHashSet::from_iter([start]);
        let mut queue = VecDeque::from([(start, 0)]);
        while let Some((state, depth)) = queue.pop_front() {
            if goals.contains(&state) {
                return Some(depth);
            }
            for &neighbor in &graph[&state] {
                if seen.insert(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }
        None
    }

    /// A ring a-b-c-d-e-f-a with a chord b-e and a tail f-g-h. Goals: a, h.
    fn sample_graph() -> (Graph<1>, Vec<State<1>>) {
        let graph = graph_from_edges(
            b"abcdefgh",
            &[
                (b'a', b'b'),
                (b'b', b'c'),
                (b'c', b'd'),
                (b'd', b'e'),
                (b'e', b'f'),
                (b'f', b'a'),
                (b'b', b'e'),
                (b'f', b'g'),
                (b'g', b'h'),
            ],
        );
        (graph, vec![v(b'a'), v(b'h')])
    }

    #[test]
    fn test_next_steps_follow_shortest_paths() {
        let (graph, goals) = sample_graph();
        let solution = solve(&graph, |state| goals.contains(state)).unwrap();

        for &state in graph.keys() {
            let expected = bfs_distance(&graph, state, &goals).unwrap();
            assert_eq!(
                solution.distance(&state).unwrap(),
                expected,
                "distance from {}",
                char::from(state.cells()[0])
            );
        }
    }

    #[test]
    fn test_solution_covers_graph() {
        let (graph, goals) = sample_graph();
        let solution = solve(&graph, |state| goals.contains(state)).unwrap();

        assert_eq!(solution.len(), graph.len());
        assert_eq!(solution.goals(), 2);
        for (state, neighbors) in &graph {
            let next = solution.next_step(state).unwrap();
            if goals.contains(state) {
                assert_eq!(next, state, "goals map to themselves");
                assert!(solution.is_goal(state).unwrap());
            } else {
                assert!(neighbors.contains(next), "next step must be a neighbor");
            }
        }
    }

    #[test]
    fn test_path_ends_at_goal() {
        let (graph, goals) = sample_graph();
        let solution = solve(&graph, |state| goals.contains(state)).unwrap();

        let path = solution.path_from(&v(b'd')).unwrap();
        assert_eq!(path.len(), 4, "d-e-b-a or d-c-b-a");
        assert_eq!(path[0], v(b'd'));
        assert!(goals.contains(path.last().unwrap()));

        assert_eq!(solution.path_from(&v(b'h')).unwrap(), vec![v(b'h')]);
    }

    #[test]
    fn test_unreachable_goal_is_an_error() {
        let graph = graph_from_edges(b"abxy", &[(b'a', b'b'), (b'x', b'y')]);
        let result = solve(&graph, |state| *state == v(b'a'));
        assert_eq!(
            result.err(),
            Some(SolveError::IncompleteSolution {
                mapped: 2,
                vertices: 4
            })
        );

        let result = solve(&graph, |_| false);
        assert!(matches!(
            result,
            Err(SolveError::IncompleteSolution { mapped: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_state_lookup_fails() {
        let (graph, goals) = sample_graph();
        let solution = solve(&graph, |state| goals.contains(state)).unwrap();
        assert_eq!(
            solution.path_from(&v(b'z')).err(),
            Some(SolveError::UnknownState)
        );
    }
}
