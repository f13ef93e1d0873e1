//! Random graph generation for tests and benchmarks
//!
//! Graphs are undirected, weighted adjacency lists over nodes `0..n`, with
//! edge weights drawn uniformly from `1..=10`. Callers pass the RNG so runs
//! can be made reproducible with a seeded [`StdRng`](rand::rngs::StdRng).

use rand::seq::index::sample;
use rand::Rng;
use tracing::debug;

use crate::graph::{Graph, Representation};

/// Inclusive range of generated edge weights
pub const WEIGHT_RANGE: std::ops::RangeInclusive<u64> = 1..=10;

fn empty_graph(n: usize) -> Graph<usize> {
    let mut graph = Graph::new(false, true, Representation::List);
    for node in 0..n {
        graph.add_node(node);
    }
    graph
}

/// About one edge per node, each between two distinct random nodes
///
/// Parallel edges may occur. With fewer than two nodes no edge is added.
pub fn sparse_graph<R: Rng>(n: usize, rng: &mut R) -> Graph<usize> {
    let mut graph = empty_graph(n);
    if n < 2 {
        return graph;
    }

    for _ in 0..n {
        let pair = sample(rng, n, 2);
        let weight = rng.random_range(WEIGHT_RANGE);
        graph.add_edge(pair.index(0), pair.index(1), weight);
    }

    debug!(nodes = n, edges = graph.edge_count(), "generated sparse graph");
    graph
}

/// Complete graph: one edge for every unordered pair of distinct nodes
pub fn dense_graph<R: Rng>(n: usize, rng: &mut R) -> Graph<usize> {
    let mut graph = empty_graph(n);
    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(u, v, rng.random_range(WEIGHT_RANGE));
        }
    }

    debug!(nodes = n, edges = n * n.saturating_sub(1) / 2, "generated dense graph");
    graph
}
