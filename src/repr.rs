/*!
# Graph Representation

A [`Graph`] stores one growable adjacency row of `(neighbor, weight)` pairs
per node. Directedness is a runtime property chosen at construction: for an
undirected graph every inserted edge is mirrored into both endpoint rows as an
explicit two-push operation, so the symmetry invariant is established at
insertion time and never needs a later check.

The store is append-only: nodes are fixed at construction and edges can only
be added. Algorithms treat the graph as read-only.
*/

use std::ops::Range;

use crate::{
    edge::{Edge, NumEdges, Weight},
    error::GraphError,
    node::{Node, NumNodes},
};

/// A weighted graph over nodes `0..n`, directed or undirected.
#[derive(Clone, Debug)]
pub struct Graph {
    adj: Vec<Vec<(Node, Weight)>>,
    directed: bool,
    num_edges: NumEdges,
}

impl Graph {
    /// Creates a graph with `n` singleton nodes and no edges.
    /// ** Panics if `n == 0` **
    pub fn new(n: NumNodes, directed: bool) -> Self {
        assert!(n > 0);
        Self {
            adj: vec![Vec::new(); n as usize],
            directed,
            num_edges: 0,
        }
    }

    /// Fallible variant of [`Graph::new`].
    pub fn try_new(n: NumNodes, directed: bool) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::NoVertices);
        }
        Ok(Self::new(n, directed))
    }

    /// Creates a graph from a number of nodes and an iterator over edges.
    /// Edges rejected by [`Graph::add_edge`] are silently skipped.
    /// ** Panics if `n == 0` **
    pub fn from_edges(n: NumNodes, directed: bool, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n, directed);
        for edge in edges {
            let Edge(u, v, w) = edge.into();
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Returns *true* if the graph is directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of nodes of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }

    /// Returns the number of nodes as usize
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    /// Returns *true* if the graph has no nodes. As construction requires at
    /// least one node, this only exists for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Returns the number of edges of the graph. Undirected edges are counted
    /// once even though they occupy two adjacency entries.
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Returns an iterator over V.
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Adds the edge `(u, v)` with weight `w` to the graph; for undirected
    /// graphs the mirror entry `(v, u, w)` is inserted as well.
    ///
    /// Returns *false* without mutating the graph if `u` or `v` is out of
    /// range or if `w == 0` (the "no edge" weight is not insertable).
    ///
    /// Parallel edges are not deduplicated: inserting `(u, v)` twice yields
    /// two adjacency entries.
    pub fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        let n = self.number_of_nodes();
        if u >= n || v >= n || w == 0 {
            return false;
        }

        self.adj[u as usize].push((v, w));
        if !self.directed {
            self.adj[v as usize].push((u, w));
        }
        self.num_edges += 1;

        true
    }

    /// Returns *true* if the edge (u,v) exists in the graph.
    /// Out-of-range endpoints yield *false*.
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adj
            .get(u as usize)
            .is_some_and(|nbs| nbs.iter().any(|&(x, _)| x == v))
    }

    /// Returns the weight of the first stored edge (u,v), or `None` if the
    /// edge does not exist (including out-of-range endpoints).
    pub fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.adj
            .get(u as usize)?
            .iter()
            .find(|&&(x, _)| x == v)
            .map(|&(_, w)| w)
    }

    /// Returns the number of outgoing neighbors of `u`
    /// ** Panics if `u >= n` **
    pub fn out_degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].len() as NumNodes
    }

    /// Returns the number of incoming neighbors of `u`. For undirected graphs
    /// this is an alias of [`Graph::out_degree_of`] by mirrored insertion; for
    /// directed graphs it scans all adjacency rows and should be avoided in
    /// hot paths.
    /// ** Panics if `u >= n` **
    pub fn in_degree_of(&self, u: Node) -> NumNodes {
        assert!(u < self.number_of_nodes());
        if !self.directed {
            return self.out_degree_of(u);
        }

        self.adj
            .iter()
            .map(|nbs| nbs.iter().filter(|&&(v, _)| v == u).count() as NumNodes)
            .sum()
    }

    /// Returns an iterator over the (outgoing) neighborhood of a given vertex
    /// together with the edge weights.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.adj[u as usize].iter().copied()
    }

    /// Returns the neighborhood of a given vertex as a slice of
    /// `(neighbor, weight)` pairs.
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[(Node, Weight)] {
        &self.adj[u as usize]
    }

    /// Returns an iterator over all stored adjacency entries as [`Edge`]s.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are
    /// considered — for an undirected graph this visits every edge exactly
    /// once (self-loops excepted, which occupy two normalized entries).
    pub fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .map(move |(v, w)| Edge(u, v, w))
                .filter(move |e| !only_normalized || e.is_normalized())
        })
    }

    /// Returns the arc-reversed copy of the graph. Only meaningful for
    /// directed graphs; for undirected graphs this clones the edge set.
    pub fn transposed(&self) -> Self {
        let mut rev = Self::new(self.number_of_nodes(), self.directed);
        if self.directed {
            for u in self.vertices() {
                for (v, w) in self.neighbors_of(u) {
                    rev.adj[v as usize].push((u, w));
                }
            }
            rev.num_edges = self.num_edges;
        } else {
            rev = self.clone();
        }
        rev
    }

    pub(crate) fn check_vertex(&self, vertex: Node) -> Result<(), GraphError> {
        if vertex < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                order: self.number_of_nodes(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn graph_new() {
        for n in 1..50 {
            let graph = Graph::new(n, n % 2 == 0);

            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    #[test]
    fn try_new_rejects_empty() {
        assert_eq!(Graph::try_new(0, true), Err(GraphError::NoVertices));
        assert!(Graph::try_new(1, true).is_ok());
    }

    impl PartialEq for Graph {
        fn eq(&self, other: &Self) -> bool {
            self.directed == other.directed && self.adj == other.adj
        }
    }

    #[test]
    fn add_edge_rejections() {
        let mut g = Graph::new(3, true);
        let pristine = g.clone();

        assert!(!g.add_edge(0, 3, 1));
        assert!(!g.add_edge(3, 0, 1));
        assert!(!g.add_edge(0, 1, 0));
        assert_eq!(g, pristine);
        assert_eq!(g.number_of_edges(), 0);

        assert!(g.add_edge(0, 1, 1));
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let mut g = Graph::new(4, false);
        assert!(g.add_edge(0, 1, 7));
        assert!(g.add_edge(1, 2, -3));

        assert!(g.has_edge(0, 1) && g.has_edge(1, 0));
        assert_eq!(g.weight_of(0, 1), Some(7));
        assert_eq!(g.weight_of(1, 0), Some(7));
        assert_eq!(g.weight_of(2, 1), Some(-3));
        assert_eq!(g.weight_of(0, 2), None);

        // mirrored entries count as one edge
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.out_degree_of(1), 2);
        assert_eq!(g.in_degree_of(1), 2);
    }

    #[test]
    fn directed_degrees() {
        let g = Graph::from_edges(4, true, [(0, 1, 1), (2, 1, 1), (3, 1, 1), (1, 0, 1)]);

        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.out_degree_of(1), 1);
        assert_eq!(g.in_degree_of(1), 3);
        assert_eq!(g.in_degree_of(0), 1);
        assert_eq!(g.in_degree_of(2), 0);
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 2));
    }

    #[test]
    fn normalized_edge_iteration() {
        let g = Graph::from_edges(4, false, [(0, 1, 10), (3, 2, 4), (1, 3, 15)]);

        let all = g.edges(false).count();
        assert_eq!(all, 6);

        let normalized = g.edges(true).sorted().collect_vec();
        assert_eq!(normalized, vec![Edge(0, 1, 10), Edge(1, 3, 15), Edge(2, 3, 4)]);
    }

    #[test]
    fn transpose_reverses_arcs() {
        let g = Graph::from_edges(3, true, [(0, 1, 2), (1, 2, 3), (2, 0, 4)]);
        let t = g.transposed();

        assert_eq!(t.number_of_edges(), 3);
        assert!(t.has_edge(1, 0) && t.has_edge(2, 1) && t.has_edge(0, 2));
        assert_eq!(t.weight_of(1, 0), Some(2));
        assert!(!t.has_edge(0, 1));
    }

    #[test]
    fn self_loops() {
        let mut g = Graph::new(2, false);
        assert!(g.add_edge(0, 0, 5));

        // mirrored insertion also applies to loops
        assert_eq!(g.out_degree_of(0), 2);
        assert_eq!(g.number_of_edges(), 1);
        assert!(g.has_edge(0, 0));
    }
}
