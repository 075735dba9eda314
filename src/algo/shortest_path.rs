/*!
Single-source shortest paths.

Two engines share the [`ShortestPathResult`] type:

- [`Graph::dijkstra`] for graphs with **non-negative** edge weights, driven by
  the indexed min-heap with decrease-key,
- [`Graph::bellman_ford`] for arbitrary weights, with negative-cycle
  detection.

Dijkstra inserts nodes into the heap lazily on first relaxation instead of
pre-filling it with infinite keys; the extraction order and all produced
distances are identical to the textbook formulation, and no "infinity"
sentinel exists anywhere.
*/

use crate::{
    edge::Weight,
    error::GraphError,
    node::{Node, NumNodes, OptionalNode},
    repr::Graph,
    utils::IndexedMinHeap,
};

/// Distances and predecessors produced by a shortest-path run.
///
/// Once [`ShortestPathResult::has_negative_cycle`] is *true*, distances only
/// indicate reachability and [`ShortestPathResult::path_to`] refuses to
/// reconstruct paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    dist: Vec<Option<Weight>>,
    parent: Vec<Option<OptionalNode>>,
    has_negative_cycle: bool,
}

impl ShortestPathResult {
    fn new(n: NumNodes, source: Node) -> Self {
        let mut dist = vec![None; n as usize];
        dist[source as usize] = Some(0);
        Self {
            dist,
            parent: vec![None; n as usize],
            has_negative_cycle: false,
        }
    }

    /// Shortest-path weight from the source to `u`, `None` if unreached
    pub fn distance_of(&self, u: Node) -> Option<Weight> {
        self.dist[u as usize]
    }

    /// Predecessor of `u` on its shortest path; `None` for the source and
    /// unreached nodes
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parent[u as usize].map(|p| p.get())
    }

    /// Returns *true* if an edge could still be relaxed after `V - 1`
    /// Bellman-Ford passes, i.e. a negative-weight cycle is reachable from
    /// the source. Dijkstra never sets this.
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Reconstructs the shortest path from the source to `dest` by walking
    /// the parent array backwards.
    ///
    /// Returns `None` if `dest` is out of range, unreached, or if a negative
    /// cycle was detected (distances are unreliable then).
    pub fn path_to(&self, dest: Node) -> Option<Vec<Node>> {
        if self.has_negative_cycle || self.dist.get(dest as usize)?.is_none() {
            return None;
        }

        let mut path = vec![dest];
        let mut node = dest;
        while let Some(p) = self.parent_of(node) {
            path.push(p);
            node = p;
        }

        path.reverse();
        Some(path)
    }
}

impl Graph {
    /// Computes shortest paths from `source` using **Dijkstra's algorithm**
    /// in `O((V + E) log V)`.
    ///
    /// All edge weights must be non-negative; this precondition is not
    /// checked and negative weights silently produce wrong distances.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(
    ///     5,
    ///     true,
    ///     [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)],
    /// );
    ///
    /// let sp = g.dijkstra(0).unwrap();
    /// assert_eq!(sp.distance_of(3), Some(4));
    /// assert_eq!(sp.path_to(4), Some(vec![0, 2, 1, 3, 4]));
    /// ```
    pub fn dijkstra(&self, source: Node) -> Result<ShortestPathResult, GraphError> {
        self.check_vertex(source)?;

        let mut result = ShortestPathResult::new(self.number_of_nodes(), source);
        let mut heap = IndexedMinHeap::new(self.number_of_nodes());
        heap.insert(source, 0);

        while let Some((u, du)) = heap.extract_min() {
            for (v, w) in self.neighbors_of(u) {
                let new_dist = du + w;
                if result.dist[v as usize].is_none_or(|dv| new_dist < dv) {
                    result.dist[v as usize] = Some(new_dist);
                    result.parent[v as usize] = OptionalNode::new(u);

                    if heap.contains(v) {
                        heap.decrease_key(v, new_dist);
                    } else {
                        heap.insert(v, new_dist);
                    }
                }
            }
        }

        Ok(result)
    }

    /// Computes shortest paths from `source` using the **Bellman-Ford
    /// algorithm** in `O(V * E)`, handling negative edge weights.
    ///
    /// Every edge is relaxed exactly `V - 1` times; one extra pass then
    /// checks whether any edge still relaxes, which flags a reachable
    /// negative-weight cycle in the result.
    pub fn bellman_ford(&self, source: Node) -> Result<ShortestPathResult, GraphError> {
        self.check_vertex(source)?;

        let n = self.number_of_nodes();
        let mut result = ShortestPathResult::new(n, source);

        for _ in 1..n {
            for u in self.vertices() {
                let Some(du) = result.dist[u as usize] else {
                    continue;
                };

                for (v, w) in self.neighbors_of(u) {
                    let new_dist = du + w;
                    if result.dist[v as usize].is_none_or(|dv| new_dist < dv) {
                        result.dist[v as usize] = Some(new_dist);
                        result.parent[v as usize] = OptionalNode::new(u);
                    }
                }
            }
        }

        'check: for u in self.vertices() {
            let Some(du) = result.dist[u as usize] else {
                continue;
            };

            for (v, w) in self.neighbors_of(u) {
                if result.dist[v as usize].is_none_or(|dv| du + w < dv) {
                    result.has_negative_cycle = true;
                    break 'check;
                }
            }
        }

        Ok(result)
    }
}
