/*!
Topological sorting of directed graphs.

Two independent engines produce a [`TopoSortResult`]:

- [`Graph::topo_sort_kahn`] repeatedly strips zero-in-degree nodes,
- [`Graph::topo_sort_dfs`] reverses a depth-first finish order, aborting as
  soon as a back edge proves a cycle.

Both run in `O(V + E)`. On a cyclic input Kahn still emits a partial order
over the nodes outside any cycle; the DFS variant stops at the first back
edge and leaves whatever it had emitted so far.
*/

use std::collections::VecDeque;

use crate::{
    algo::Color,
    node::{Node, NumNodes},
    repr::Graph,
};

/// A (possibly partial) topological order together with the verdict whether
/// the input was acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoSortResult {
    order: Vec<Node>,
    is_dag: bool,
}

impl TopoSortResult {
    /// The emitted order. Complete and topological iff
    /// [`TopoSortResult::is_dag`] holds.
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Returns *true* if every node was emitted, i.e. the graph is acyclic
    pub fn is_dag(&self) -> bool {
        self.is_dag
    }
}

impl Graph {
    /// Topologically sorts the graph using **Kahn's algorithm**: compute all
    /// in-degrees in one sweep, then repeatedly emit a node of in-degree
    /// zero and decrement its successors.
    ///
    /// If the graph contains a cycle, the nodes on (or only reachable
    /// through) cycles never reach in-degree zero; the result then carries a
    /// partial order of the remaining nodes and `is_dag()` is *false*.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(4, true, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
    ///
    /// let topo = g.topo_sort_kahn();
    /// assert!(topo.is_dag());
    /// assert_eq!(topo.order()[0], 0);
    /// assert_eq!(topo.order()[3], 3);
    /// ```
    pub fn topo_sort_kahn(&self) -> TopoSortResult {
        let n = self.number_of_nodes();
        let mut in_degree = vec![0 as NumNodes; n as usize];
        for u in self.vertices() {
            for (v, _) in self.neighbors_of(u) {
                in_degree[v as usize] += 1;
            }
        }

        let mut queue: VecDeque<Node> = self
            .vertices()
            .filter(|&u| in_degree[u as usize] == 0)
            .collect();

        let mut order = Vec::with_capacity(n as usize);
        while let Some(u) = queue.pop_front() {
            order.push(u);

            for (v, _) in self.neighbors_of(u) {
                in_degree[v as usize] -= 1;
                if in_degree[v as usize] == 0 {
                    queue.push_back(v);
                }
            }
        }

        let is_dag = order.len() == n as usize;
        TopoSortResult { order, is_dag }
    }

    /// Topologically sorts the graph via **depth-first search**: nodes are
    /// pushed onto a stack as their DFS call finishes, and popping the stack
    /// yields a topological order.
    ///
    /// Encountering a gray node (an ancestor on the current DFS path) proves
    /// a cycle; the sort aborts immediately with `is_dag()` *false* and a
    /// truncated order.
    pub fn topo_sort_dfs(&self) -> TopoSortResult {
        let n = self.number_of_nodes();
        let mut color = vec![Color::White; n as usize];
        let mut finished: Vec<Node> = Vec::with_capacity(n as usize);

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
                        Color::Gray => {
                            finished.reverse();
                            return TopoSortResult {
                                order: finished,
                                is_dag: false,
                            };
                        }
                        Color::Black => {}
                    }
                } else {
                    color[u as usize] = Color::Black;
                    finished.push(u);
                    stack.pop();
                }
            }
        }

        finished.reverse();
        TopoSortResult {
            order: finished,
            is_dag: true,
        }
    }
}
