/*!
Breadth-first and depth-first traversal.

Both traversals yield a [`TraversalResult`]: the visit order, a parent array
describing the traversal tree and a per-node hop count (BFS) or depth (DFS).
Edge weights are never consulted.

DFS runs on an explicit stack of `(node, next-neighbor-index)` frames that
emulates the recursive walk exactly, so depth is only bounded by available
heap memory, not by the call stack.
*/

use std::collections::VecDeque;

use crate::{
    error::GraphError,
    node::{Node, NumNodes, OptionalNode},
    repr::Graph,
};

/// The outcome of a single BFS or DFS invocation. Owned by the caller and
/// immutable after return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    dist: Vec<Option<OptionalNode>>,
    parent: Vec<Option<OptionalNode>>,
    order: Vec<Node>,
}

impl TraversalResult {
    fn new(n: NumNodes) -> Self {
        Self {
            dist: vec![None; n as usize],
            parent: vec![None; n as usize],
            order: Vec::with_capacity(n as usize),
        }
    }

    /// Hop count (BFS) or tree depth (DFS) of `u`, `None` if `u` was not reached
    pub fn distance_of(&self, u: Node) -> Option<NumNodes> {
        self.dist[u as usize].map(|d| d.get())
    }

    /// Predecessor of `u` in the traversal tree; `None` for roots and
    /// unreached nodes
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parent[u as usize].map(|p| p.get())
    }

    /// The nodes in discovery order
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Returns *true* if `u` was reached by the traversal
    pub fn did_visit(&self, u: Node) -> bool {
        self.dist[u as usize].is_some()
    }
}

impl Graph {
    /// Traverses all nodes reachable from `source` in **breadth-first order**.
    /// Distances are hop counts from `source`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(3, false, [(0, 1, 1), (1, 2, 1)]);
    ///
    /// let r = g.bfs(0).unwrap();
    /// assert_eq!(r.order(), &[0, 1, 2]);
    /// assert_eq!(r.distance_of(2), Some(2));
    /// ```
    pub fn bfs(&self, source: Node) -> Result<TraversalResult, GraphError> {
        self.check_vertex(source)?;

        let mut result = TraversalResult::new(self.number_of_nodes());
        let mut queue = VecDeque::with_capacity(self.len());

        result.dist[source as usize] = OptionalNode::new(0);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            result.order.push(u);
            let du = result.dist[u as usize].map_or(0, |d| d.get());

            for (v, _) in self.neighbors_of(u) {
                if result.dist[v as usize].is_none() {
                    result.dist[v as usize] = OptionalNode::new(du + 1);
                    result.parent[v as usize] = OptionalNode::new(u);
                    queue.push_back(v);
                }
            }
        }

        Ok(result)
    }

    /// Traverses all nodes reachable from `source` in **depth-first
    /// pre-order**. Distances are depths in the DFS tree.
    pub fn dfs(&self, source: Node) -> Result<TraversalResult, GraphError> {
        self.check_vertex(source)?;

        let mut result = TraversalResult::new(self.number_of_nodes());
        self.dfs_from(source, &mut result);
        Ok(result)
    }

    /// Runs [`Graph::dfs`] from every yet-unvisited node in increasing id
    /// order, covering disconnected graphs. Every new root gets depth 0 and
    /// no parent.
    pub fn dfs_full(&self) -> TraversalResult {
        let mut result = TraversalResult::new(self.number_of_nodes());
        for u in self.vertices() {
            if result.dist[u as usize].is_none() {
                self.dfs_from(u, &mut result);
            }
        }
        result
    }

    fn dfs_from(&self, root: Node, result: &mut TraversalResult) {
        result.dist[root as usize] = OptionalNode::new(0);
        result.order.push(root);

        let mut stack: Vec<(Node, usize)> = vec![(root, 0)];

        while let Some(&mut (u, ref mut idx)) = stack.last_mut() {
            if let Some(&(v, _)) = self.as_neighbors_slice(u).get(*idx) {
                *idx += 1;

                if result.dist[v as usize].is_none() {
                    let depth = result.dist[u as usize].map_or(0, |d| d.get()) + 1;
                    result.dist[v as usize] = OptionalNode::new(depth);
                    result.parent[v as usize] = OptionalNode::new(u);
                    result.order.push(v);
                    stack.push((v, 0));
                }
            } else {
                stack.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::random_graph;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = Graph::from_edges(
            6,
            false,
            [(1, 2, 1), (1, 0, 1), (4, 3, 1), (0, 5, 1), (2, 4, 1), (5, 4, 1)],
        );

        let r = graph.bfs(1).unwrap();
        let order = r.order();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert!(order[1..3].contains(&0) && order[1..3].contains(&2));
        assert!(order[3..5].contains(&4) && order[3..5].contains(&5));
        assert_eq!(order[5], 3);

        assert_eq!(r.distance_of(1), Some(0));
        assert_eq!(r.distance_of(4), Some(2));
        assert_eq!(r.distance_of(3), Some(3));
    }

    #[test]
    fn bfs_distance_parent_invariant() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for _ in 0..10 {
                let graph = random_graph(rng, 60, 120, directed, 1..5);
                let r = graph.bfs(0).unwrap();

                for v in graph.vertices() {
                    match (r.distance_of(v), r.parent_of(v)) {
                        (Some(0), None) => assert_eq!(v, 0),
                        (Some(d), Some(p)) => {
                            assert_eq!(r.distance_of(p), Some(d - 1));
                            assert!(graph.has_edge(p, v));
                        }
                        (None, None) => {}
                        other => panic!("inconsistent entry for {v}: {other:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_rejects_bad_source() {
        let graph = Graph::new(3, true);
        assert_eq!(
            graph.bfs(3),
            Err(GraphError::VertexOutOfRange { vertex: 3, order: 3 })
        );
    }

    #[test]
    fn dfs_depths_follow_tree() {
        let graph = Graph::from_edges(6, true, [(0, 1, 1), (1, 2, 1), (0, 3, 1), (3, 4, 1)]);
        let r = graph.dfs(0).unwrap();

        assert_eq!(r.distance_of(0), Some(0));
        assert_eq!(r.distance_of(2), Some(2));
        assert_eq!(r.parent_of(2), Some(1));
        assert_eq!(r.parent_of(4), Some(3));
        assert!(!r.did_visit(5));
        assert_eq!(r.distance_of(5), None);
        assert_eq!(r.order().len(), 5);
    }

    #[test]
    fn dfs_full_covers_disconnected() {
        let graph = Graph::from_edges(7, false, [(1, 2, 1), (2, 3, 1), (4, 5, 1)]);
        let r = graph.dfs_full();

        assert_eq!(r.order().len(), 7);
        assert_eq!(r.order().iter().copied().sorted().collect_vec(), (0..7).collect_vec());

        // component roots are discovered in id order with no parent
        for root in [0, 1, 4, 6] {
            assert_eq!(r.distance_of(root), Some(0));
            assert_eq!(r.parent_of(root), None);
        }
        assert_eq!(r.parent_of(3), Some(2));
    }

    #[test]
    fn dfs_survives_long_path() {
        let n: NumNodes = 100_000;
        let mut graph = Graph::new(n, true);
        for u in 0..n - 1 {
            graph.add_edge(u, u + 1, 1);
        }

        let r = graph.dfs(0).unwrap();
        assert_eq!(r.distance_of(n - 1), Some(n - 1));
    }
}
