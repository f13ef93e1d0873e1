//! Simple weighted graph with adjacency-list or adjacency-matrix storage
//!
//! The traversal algorithms in [`crate::traversal`] only need the
//! [`WeightedGraph`] trait: a node list and a neighbor query. [`Graph`] is the
//! bundled implementation.
//!
//! Nodes keep their insertion order, which makes traversal output
//! deterministic. Unweighted graphs store every edge with weight 1. In the
//! matrix representation a weight of 0 means "no edge".
//!
//! # Example
//!
//! ```rust
//! use classic_algos::graph::{Graph, Representation, WeightedGraph};
//!
//! let mut graph = Graph::new(false, true, Representation::List);
//! graph.add_edge("a", "b", 4);
//! graph.add_edge("a", "c", 1);
//!
//! assert_eq!(graph.neighbors(&"a"), vec![("b", 4), ("c", 1)]);
//! assert!(graph.has_edge(&"b", &"a"));
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Read access needed by graph traversals
///
/// Implement this for your own graph type to run [`bfs`](crate::traversal::bfs),
/// [`dfs_iterative`](crate::traversal::dfs_iterative) or
/// [`dijkstra`](crate::traversal::dijkstra) on it.
pub trait WeightedGraph {
    type Node: Clone + Eq + Hash;

    /// All nodes, in a stable order
    fn nodes(&self) -> &[Self::Node];

    /// Outgoing edges of `node` as `(neighbor, weight)`; empty for unknown nodes
    fn neighbors(&self, node: &Self::Node) -> Vec<(Self::Node, u64)>;

    fn contains(&self, node: &Self::Node) -> bool;
}

/// Edge storage layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    #[default]
    List,
    Matrix,
}

#[derive(Debug, Clone)]
enum Adjacency {
    /// Per node, `(target index, weight)` in insertion order
    List(Vec<Vec<(usize, u64)>>),
    /// `matrix[i][j]` is the weight of edge i -> j, 0 for none
    Matrix(Vec<Vec<u64>>),
}

/// A directed or undirected graph over hashable nodes
#[derive(Debug, Clone)]
pub struct Graph<N> {
    directed: bool,
    weighted: bool,
    nodes: Vec<N>,
    index: FxHashMap<N, usize>,
    adjacency: Adjacency,
}

impl<N: Clone + Eq + Hash> Graph<N> {
    pub fn new(directed: bool, weighted: bool, representation: Representation) -> Self {
        let adjacency = match representation {
            Representation::List => Adjacency::List(Vec::new()),
            Representation::Matrix => Adjacency::Matrix(Vec::new()),
        };
        Self {
            directed,
            weighted,
            nodes: Vec::new(),
            index: FxHashMap::default(),
            adjacency,
        }
    }

    /// Undirected, unweighted adjacency-list graph
    pub fn undirected() -> Self {
        Self::new(false, false, Representation::List)
    }

    /// Directed, weighted adjacency-list graph
    pub fn directed_weighted() -> Self {
        Self::new(true, true, Representation::List)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn representation(&self) -> Representation {
        match self.adjacency {
            Adjacency::List(_) => Representation::List,
            Adjacency::Matrix(_) => Representation::Matrix,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        let stored: usize = match &self.adjacency {
            Adjacency::List(lists) => lists.iter().map(Vec::len).sum(),
            Adjacency::Matrix(rows) => rows
                .iter()
                .map(|row| row.iter().filter(|&&w| w != 0).count())
                .sum(),
        };
        if self.directed {
            stored
        } else {
            // Self-loops are stored once, every other edge twice
            let loops = (0..self.nodes.len())
                .filter(|&i| self.has_edge_by_index(i, i))
                .count();
            (stored - loops) / 2 + loops
        }
    }

    /// Adds `node` if it is not already present, returning its index
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&existing) = self.index.get(&node) {
            return existing;
        }
        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node);

        match &mut self.adjacency {
            Adjacency::List(lists) => lists.push(Vec::new()),
            Adjacency::Matrix(rows) => {
                for row in rows.iter_mut() {
                    row.push(0);
                }
                rows.push(vec![0; id + 1]);
            }
        }
        id
    }

    /// Adds an edge, creating missing endpoints
    ///
    /// Unweighted graphs ignore `weight` and store 1. Undirected graphs also
    /// store the reverse edge. Lists keep parallel edges; the matrix keeps
    /// only the latest weight.
    pub fn add_edge(&mut self, u: N, v: N, weight: u64) {
        let i = self.add_node(u);
        let j = self.add_node(v);
        let w = if self.weighted { weight } else { 1 };

        match &mut self.adjacency {
            Adjacency::List(lists) => {
                lists[i].push((j, w));
                if !self.directed {
                    lists[j].push((i, w));
                }
            }
            Adjacency::Matrix(rows) => {
                rows[i][j] = w;
                if !self.directed {
                    rows[j][i] = w;
                }
            }
        }
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        match (self.index.get(u), self.index.get(v)) {
            (Some(&i), Some(&j)) => self.has_edge_by_index(i, j),
            _ => false,
        }
    }

    fn has_edge_by_index(&self, i: usize, j: usize) -> bool {
        match &self.adjacency {
            Adjacency::List(lists) => lists[i].iter().any(|&(target, _)| target == j),
            Adjacency::Matrix(rows) => rows[i][j] != 0,
        }
    }
}

impl<N: Clone + Eq + Hash> WeightedGraph for Graph<N> {
    type Node = N;

    fn nodes(&self) -> &[N] {
        &self.nodes
    }

    fn neighbors(&self, node: &N) -> Vec<(N, u64)> {
        let Some(&i) = self.index.get(node) else {
            return Vec::new();
        };
        match &self.adjacency {
            Adjacency::List(lists) => lists[i]
                .iter()
                .map(|&(j, w)| (self.nodes[j].clone(), w))
                .collect(),
            Adjacency::Matrix(rows) => rows[i]
                .iter()
                .enumerate()
                .filter(|&(_, &w)| w != 0)
                .map(|(j, &w)| (self.nodes[j].clone(), w))
                .collect(),
        }
    }

    fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }
}

impl<N: Clone + Eq + Hash + fmt::Display> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.adjacency {
            Adjacency::List(lists) => {
                for (node, edges) in self.nodes.iter().zip(lists) {
                    write!(f, "{node}: [")?;
                    for (k, &(j, w)) in edges.iter().enumerate() {
                        if k > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "({}, {w})", self.nodes[j])?;
                    }
                    writeln!(f, "]")?;
                }
            }
            Adjacency::Matrix(rows) => {
                for row in rows {
                    let cells: Vec<String> = row.iter().map(u64::to_string).collect();
                    writeln!(f, "{}", cells.join("\t"))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_undirected_unweighted() {
        let mut graph = Graph::undirected();
        graph.add_edge(1, 2, 9);
        graph.add_edge(1, 3, 9);

        assert_eq!(graph.nodes(), &[1, 2, 3]);
        // Weights are dropped on unweighted graphs
        assert_eq!(graph.neighbors(&1), vec![(2, 1), (3, 1)]);
        assert_eq!(graph.neighbors(&3), vec![(1, 1)]);
        assert!(graph.has_edge(&2, &1));
        assert!(!graph.has_edge(&2, &3));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_list_directed_weighted() {
        let mut graph = Graph::directed_weighted();
        graph.add_edge('a', 'b', 5);
        graph.add_node('c');

        assert_eq!(graph.neighbors(&'a'), vec![('b', 5)]);
        assert!(graph.neighbors(&'b').is_empty());
        assert!(graph.neighbors(&'z').is_empty());
        assert!(graph.contains(&'c'));
        assert!(!graph.has_edge(&'b', &'a'));
    }

    #[test]
    fn test_matrix_representation() {
        let mut graph = Graph::new(false, true, Representation::Matrix);
        graph.add_edge(0, 1, 3);
        graph.add_edge(1, 2, 7);
        graph.add_edge(0, 1, 4);

        assert_eq!(graph.representation(), Representation::Matrix);
        assert_eq!(graph.neighbors(&1), vec![(0, 4), (2, 7)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.to_string(), "0\t4\t0\n4\t0\t7\n0\t7\t0\n");
    }

    #[test]
    fn test_display_list() {
        let mut graph = Graph::new(true, true, Representation::List);
        graph.add_edge(1, 2, 3);
        assert_eq!(graph.to_string(), "1: [(2, 3)]\n2: []\n");
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph: Graph<&str> = Graph::undirected();
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.add_node("y"), 1);
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.node_count(), 2);
    }
}
