/*!
Cycle detection and connectivity predicates.

Directed graphs get a three-coloring DFS ([`Graph::has_cycle_directed`]),
undirected graphs a union-find sweep over their edges
([`Graph::has_cycle_undirected`]). [`Graph::is_connected`] and
[`Graph::is_dag`] are thin layers over BFS and the directed check.
*/

use crate::{algo::Color, node::Node, repr::Graph, utils::DisjointSets};

impl Graph {
    /// Returns *true* if the graph contains a directed cycle.
    ///
    /// A DFS over all roots colors nodes white, gray (on the current path)
    /// and black (finished); any edge into a gray node closes a cycle.
    /// Self-loops count.
    ///
    /// Only meaningful on directed graphs.
    pub fn has_cycle_directed(&self) -> bool {
        let n = self.number_of_nodes();
        let mut color = vec![Color::White; n as usize];

        for root in self.vertices() {
            if color[root as usize] != Color::White {
                continue;
            }

            color[root as usize] = Color::Gray;
            let mut stack: Vec<(Node, usize)> = vec![(root, 0)];

            while let Some(&mut (u, ref mut idx)) = stack.last_mut() {
                if let Some(&(v, _)) = self.as_neighbors_slice(u).get(*idx) {
                    *idx += 1;

                    match color[v as usize] {
                        Color::White => {
                            color[v as usize] = Color::Gray;
                            stack.push((v, 0));
                        }
                        Color::Gray => return true,
                        Color::Black => {}
                    }
                } else {
                    color[u as usize] = Color::Black;
                    stack.pop();
                }
            }
        }

        false
    }

    /// Returns *true* if the graph contains an undirected cycle.
    ///
    /// Every edge is offered to a union-find forest; an edge whose endpoints
    /// already share a root closes a cycle. Each edge is considered once in
    /// its normalized direction; self-loops are skipped.
    ///
    /// Only meaningful on undirected graphs.
    pub fn has_cycle_undirected(&self) -> bool {
        let mut sets = DisjointSets::new(self.number_of_nodes());

        self.edges(true)
            .filter(|e| !e.is_loop())
            .any(|e| !sets.union(e.source(), e.target()))
    }

    /// Returns *true* if every node is reachable from node 0.
    ///
    /// For undirected graphs this is exactly graph connectivity; for
    /// directed graphs it tests reachability from node 0 only.
    pub fn is_connected(&self) -> bool {
        match self.bfs(0) {
            Ok(r) => r.order().len() == self.len(),
            Err(_) => false,
        }
    }

    /// Returns *true* for a directed graph without directed cycles
    pub fn is_dag(&self) -> bool {
        self.is_directed() && !self.has_cycle_directed()
    }
}
