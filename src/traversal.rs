//! Breadth-first search, depth-first search and Dijkstra's shortest paths
//!
//! All functions work on any [`WeightedGraph`] and return an empty result
//! when the start node is not part of the graph.
//!
//! Dijkstra uses the crate's own [`PriorityQueue`] and handles stale entries
//! lazily: instead of decreasing a key in place, an improved distance is
//! pushed again and entries whose distance is already worse than the
//! recorded one are skipped when they come out of the queue.
//!
//! # Example
//!
//! ```rust
//! use classic_algos::graph::Graph;
//! use classic_algos::traversal::{bfs, dijkstra};
//!
//! let mut graph = Graph::directed_weighted();
//! graph.add_edge("a", "b", 1);
//! graph.add_edge("b", "c", 2);
//! graph.add_edge("a", "c", 5);
//!
//! assert_eq!(bfs(&graph, &"a"), vec!["a", "b", "c"]);
//!
//! let paths = dijkstra(&graph, &"a");
//! assert_eq!(paths.distance(&"c"), Some(3));
//! assert_eq!(paths.path_to(&"c"), Some(vec!["a", "b", "c"]));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::WeightedGraph;
use crate::priority_queue::PriorityQueue;

/// Level-order visitation from `start`
pub fn bfs<G: WeightedGraph>(graph: &G, start: &G::Node) -> Vec<G::Node> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::from([start.clone()]);
    let mut order = Vec::new();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node.clone()) {
            continue;
        }
        for (neighbor, _) in graph.neighbors(&node) {
            if !visited.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
        order.push(node);
    }

    order
}

/// Depth-first visitation from `start`, recursing into neighbors in order
///
/// The call stack grows with the length of the current DFS path, so a long
/// chain of nodes can overflow it. Use [`dfs_iterative`] for large graphs;
/// both produce the same order.
pub fn dfs_recursive<G: WeightedGraph>(graph: &G, start: &G::Node) -> Vec<G::Node> {
    fn visit<G: WeightedGraph>(
        graph: &G,
        node: &G::Node,
        visited: &mut FxHashSet<G::Node>,
        order: &mut Vec<G::Node>,
    ) {
        visited.insert(node.clone());
        order.push(node.clone());
        for (neighbor, _) in graph.neighbors(node) {
            if !visited.contains(&neighbor) {
                visit(graph, &neighbor, visited, order);
            }
        }
    }

    if !graph.contains(start) {
        return Vec::new();
    }
    let mut visited = FxHashSet::default();
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    order
}

/// Depth-first visitation with an explicit stack
///
/// Neighbors are pushed in reverse so the visiting order matches
/// [`dfs_recursive`]. Memory use is bounded by the heap, not the call stack.
pub fn dfs_iterative<G: WeightedGraph>(graph: &G, start: &G::Node) -> Vec<G::Node> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = FxHashSet::default();
    let mut stack = vec![start.clone()];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        for (neighbor, _) in graph.neighbors(&node).into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
        order.push(node);
    }

    order
}

/// Queue entry ordered by distance only
#[derive(Debug, Clone)]
struct Frontier<N> {
    distance: u64,
    node: N,
}

impl<N> PartialEq for Frontier<N> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<N> Eq for Frontier<N> {}

impl<N> PartialOrd for Frontier<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Frontier<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

/// Result of [`dijkstra`]: distances and predecessors from one source
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    /// Finalized distance per node, `None` if unreachable
    pub distances: FxHashMap<N, Option<u64>>,
    /// Predecessor on a shortest path, `None` for the source and unreachable nodes
    pub previous: FxHashMap<N, Option<N>>,
}

impl<N: Clone + Eq + std::hash::Hash> ShortestPaths<N> {
    fn empty() -> Self {
        Self {
            distances: FxHashMap::default(),
            previous: FxHashMap::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distance(&self, node: &N) -> Option<u64> {
        self.distances.get(node).copied().flatten()
    }

    /// Nodes from the source to `target`, or `None` if it is unreachable
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        self.distance(target)?;

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(Some(prev)) = self.previous.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Single-source shortest paths over non-negative edge weights
pub fn dijkstra<G: WeightedGraph>(graph: &G, start: &G::Node) -> ShortestPaths<G::Node> {
    if !graph.contains(start) {
        return ShortestPaths::empty();
    }

    let mut paths = ShortestPaths::empty();
    for node in graph.nodes() {
        paths.distances.insert(node.clone(), None);
        paths.previous.insert(node.clone(), None);
    }
    paths.distances.insert(start.clone(), Some(0));

    let mut queue = PriorityQueue::new();
    queue.enqueue(Frontier {
        distance: 0,
        node: start.clone(),
    });

    while let Ok(Frontier { distance, node }) = queue.dequeue() {
        // Stale entry: a shorter distance was already settled
        if paths.distance(&node).is_some_and(|best| distance > best) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = distance.saturating_add(weight);
            let improves = paths
                .distance(&neighbor)
                .map_or(true, |current| candidate < current);
            if improves {
                paths.distances.insert(neighbor.clone(), Some(candidate));
                paths.previous.insert(neighbor.clone(), Some(node.clone()));
                queue.enqueue(Frontier {
                    distance: candidate,
                    node: neighbor,
                });
            }
        }
    }

    paths
}
