/*!
Minimum spanning trees of undirected graphs.

- [`Graph::mst_kruskal`] sorts all edges and greedily joins components with a
  union-find forest, `O(E log E)`,
- [`Graph::mst_prim`] grows a tree from node 0 with the indexed min-heap,
  `O((V + E) log V)`.

Neither treats a disconnected input as an error. Kruskal then yields a
minimum spanning *forest* across all components; Prim only spans the
component containing node 0. On a connected graph both produce `V - 1` edges
of equal total weight.
*/

use bit_vec::BitVec;
use itertools::Itertools;

use crate::{
    edge::{Edge, Weight},
    node::{Node, OptionalNode},
    repr::Graph,
    utils::{DisjointSets, IndexedMinHeap},
};

/// The edges chosen by an MST run and their summed weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult {
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl MstResult {
    /// The selected tree (or forest) edges
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of the selected edges' weights
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns *true* if the selection spans all `n` nodes of the graph it
    /// was computed on, i.e. it is a single tree with `n - 1` edges
    pub fn spans(&self, n: Node) -> bool {
        self.edges.len() + 1 == n as usize
    }
}

impl Graph {
    /// Computes a minimum spanning tree using **Kruskal's algorithm**.
    ///
    /// Edges are considered in ascending weight order; an edge is taken iff
    /// its endpoints are still in different union-find components. On a
    /// disconnected graph this produces a minimum spanning forest.
    ///
    /// Only meaningful on undirected graphs.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(
    ///     4,
    ///     false,
    ///     [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
    /// );
    ///
    /// let mst = g.mst_kruskal();
    /// assert!(mst.spans(4));
    /// assert_eq!(mst.total_weight(), 19);
    /// ```
    pub fn mst_kruskal(&self) -> MstResult {
        let n = self.number_of_nodes();
        let mut sets = DisjointSets::new(n);

        let mut edges = Vec::with_capacity(n as usize - 1);
        let mut total_weight = 0;

        for edge in self
            .edges(true)
            .sorted_by_key(|e| e.weight())
        {
            if sets.union(edge.source(), edge.target()) {
                total_weight += edge.weight();
                edges.push(edge);

                if edges.len() == n as usize - 1 {
                    break;
                }
            }
        }

        MstResult { edges, total_weight }
    }

    /// Computes a minimum spanning tree using **Prim's algorithm**, growing
    /// the tree from node 0.
    ///
    /// The heap holds fringe nodes keyed by their cheapest connection to the
    /// tree; extracting a node finalizes the edge to its recorded parent.
    /// Nodes in other components are never reached, so on a disconnected
    /// graph only the component of node 0 is spanned.
    ///
    /// Only meaningful on undirected graphs.
    pub fn mst_prim(&self) -> MstResult {
        let n = self.number_of_nodes();
        let mut key: Vec<Option<Weight>> = vec![None; n as usize];
        let mut parent: Vec<Option<OptionalNode>> = vec![None; n as usize];
        let mut in_tree = BitVec::from_elem(n as usize, false);

        let mut heap = IndexedMinHeap::new(n);
        key[0] = Some(0);
        heap.insert(0, 0);

        let mut edges = Vec::with_capacity(n as usize - 1);
        let mut total_weight = 0;

        while let Some((u, weight)) = heap.extract_min() {
            in_tree.set(u as usize, true);

            if let Some(p) = parent[u as usize] {
                total_weight += weight;
                edges.push(Edge(p.get(), u, weight));
            }

            for (v, w) in self.neighbors_of(u) {
                if in_tree[v as usize] {
                    continue;
                }

                if key[v as usize].is_none_or(|kv| w < kv) {
                    key[v as usize] = Some(w);
                    parent[v as usize] = OptionalNode::new(u);

                    if heap.contains(v) {
                        heap.decrease_key(v, w);
                    } else {
                        heap.insert(v, w);
                    }
                }
            }
        }

        MstResult { edges, total_weight }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::utils::DisjointSets;

    fn square_with_diagonals() -> Graph {
        Graph::from_edges(
            4,
            false,
            [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
        )
    }

    fn assert_is_spanning_tree(graph: &Graph, mst: &MstResult) {
        assert!(mst.spans(graph.number_of_nodes()));

        let mut sets = DisjointSets::new(graph.number_of_nodes());
        for edge in mst.edges() {
            assert!(graph.has_edge(edge.source(), edge.target()));
            assert_eq!(graph.weight_of(edge.source(), edge.target()), Some(edge.weight()));
            // a repeated join would mean the selection contains a cycle
            assert!(sets.union(edge.source(), edge.target()));
        }
    }

    #[test]
    fn kruskal_square() {
        let g = square_with_diagonals();
        let mst = g.mst_kruskal();

        assert_eq!(mst.total_weight(), 19);
        assert_is_spanning_tree(&g, &mst);
    }

    #[test]
    fn prim_square() {
        let g = square_with_diagonals();
        let mst = g.mst_prim();

        assert_eq!(mst.total_weight(), 19);
        assert_is_spanning_tree(&g, &mst);
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        // components {0, 1, 2} and {3, 4}
        let g = Graph::from_edges(5, false, [(0, 1, 2), (1, 2, 3), (3, 4, 7)]);

        let kruskal = g.mst_kruskal();
        assert!(!kruskal.spans(5));
        assert_eq!(kruskal.edges().len(), 3);
        assert_eq!(kruskal.total_weight(), 12);

        // Prim only covers the component of node 0
        let prim = g.mst_prim();
        assert_eq!(prim.edges().len(), 2);
        assert_eq!(prim.total_weight(), 5);
    }

    #[test]
    fn single_node_graph() {
        let g = Graph::new(1, false);

        for mst in [g.mst_kruskal(), g.mst_prim()] {
            assert!(mst.edges().is_empty());
            assert_eq!(mst.total_weight(), 0);
            assert!(mst.spans(1));
        }
    }

    #[test]
    fn kruskal_and_prim_agree_on_random_connected_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for _ in 0..10 {
            // a random spanning tree first keeps the graph connected, then
            // extra edges create alternatives
            let n = 60;
            let mut g = Graph::new(n, false);
            for v in 1..n {
                let u = rng.random_range(0..v);
                g.add_edge(u, v, rng.random_range(1..100));
            }
            for _ in 0..2 * n {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u != v && !g.has_edge(u, v) {
                    g.add_edge(u, v, rng.random_range(1..100));
                }
            }

            let kruskal = g.mst_kruskal();
            let prim = g.mst_prim();

            assert_is_spanning_tree(&g, &kruskal);
            assert_is_spanning_tree(&g, &prim);
            assert_eq!(kruskal.total_weight(), prim.total_weight());
        }
    }
}
