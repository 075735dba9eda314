/*!
Strongly connected components of directed graphs.

- [`Graph::scc_tarjan`] runs a single DFS maintaining discovery indices,
  low-links and a path stack,
- [`Graph::scc_kosaraju`] runs one DFS for a finish order, transposes the
  graph and runs a second DFS in reverse finish order.

Both are `O(V + E)` and label every node with a component id in
`0..num_components`. The two engines number components in different orders,
but the induced partitions are identical.

All walks use explicit stacks, so component structure is recoverable from
graphs whose SCCs are far deeper than the call stack allows.
*/

use bit_vec::BitVec;

use crate::{
    node::{Node, NumNodes},
    repr::Graph,
};

/// A labeling of every node with its strongly connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    component: Vec<NumNodes>,
    num_components: NumNodes,
}

impl SccResult {
    /// The component id of `u`, in `0..num_components()`
    pub fn component_of(&self, u: Node) -> NumNodes {
        self.component[u as usize]
    }

    /// Number of strongly connected components
    pub fn num_components(&self) -> NumNodes {
        self.num_components
    }

    /// Returns *true* if `u` and `v` lie on a common directed cycle (or are
    /// the same node)
    pub fn same_component(&self, u: Node, v: Node) -> bool {
        self.component_of(u) == self.component_of(v)
    }
}

impl Graph {
    /// Computes strongly connected components using **Tarjan's algorithm**.
    ///
    /// A single DFS assigns each node a discovery index and a low-link, the
    /// smallest index reachable through the DFS subtree plus one back edge.
    /// A node whose low-link equals its own index roots a component; all
    /// nodes above it on the path stack belong to that component and are
    /// popped together.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// // a 3-cycle feeding a chain of two singletons
    /// let g = Graph::from_edges(
    ///     5,
    ///     true,
    ///     [(0, 1, 1), (1, 2, 1), (2, 0, 1), (1, 3, 1), (3, 4, 1)],
    /// );
    ///
    /// let scc = g.scc_tarjan();
    /// assert_eq!(scc.num_components(), 3);
    /// assert!(scc.same_component(0, 2));
    /// assert!(!scc.same_component(3, 4));
    /// ```
    pub fn scc_tarjan(&self) -> SccResult {
        let n = self.number_of_nodes();
        let mut disc: Vec<Option<NumNodes>> = vec![None; n as usize];
        let mut low = vec![0 as NumNodes; n as usize];
        let mut on_path = BitVec::from_elem(n as usize, false);
        let mut path: Vec<Node> = Vec::new();

        let mut component = vec![0 as NumNodes; n as usize];
        let mut num_components = 0;
        let mut next_disc = 0;

        for root in self.vertices() {
            if disc[root as usize].is_some() {
                continue;
            }

            disc[root as usize] = Some(next_disc);
            low[root as usize] = next_disc;
            next_disc += 1;
            path.push(root);
            on_path.set(root as usize, true);

            let mut stack: Vec<(Node, usize)> = vec![(root, 0)];

            while let Some(&mut (u, ref mut idx)) = stack.last_mut() {
                if let Some(&(v, _)) = self.as_neighbors_slice(u).get(*idx) {
                    *idx += 1;

                    match disc[v as usize] {
                        None => {
                            disc[v as usize] = Some(next_disc);
                            low[v as usize] = next_disc;
                            next_disc += 1;
                            path.push(v);
                            on_path.set(v as usize, true);
                            stack.push((v, 0));
                        }
                        Some(dv) if on_path[v as usize] => {
                            low[u as usize] = low[u as usize].min(dv);
                        }
                        // cross edge into a finished component
                        Some(_) => {}
                    }
                } else {
                    stack.pop();

                    if disc[u as usize] == Some(low[u as usize]) {
                        // u roots a component; everything above it on the
                        // path stack belongs to it
                        while let Some(w) = path.pop() {
                            on_path.set(w as usize, false);
                            component[w as usize] = num_components;
                            if w == u {
                                break;
                            }
                        }
                        num_components += 1;
                    }

                    if let Some(&mut (p, _)) = stack.last_mut() {
                        low[p as usize] = low[p as usize].min(low[u as usize]);
                    }
                }
            }
        }

        SccResult {
            component,
            num_components,
        }
    }

    /// Computes strongly connected components using **Kosaraju's algorithm**.
    ///
    /// The first DFS records nodes in finish order, the graph is transposed,
    /// and a second DFS over the reversed finish order collects one
    /// component per tree.
    pub fn scc_kosaraju(&self) -> SccResult {
        let n = self.number_of_nodes();

        let mut finished: Vec<Node> = Vec::with_capacity(n as usize);
        let mut visited = BitVec::from_elem(n as usize, false);

        for root in self.vertices() {
            if visited[root as usize] {
                continue;
            }

            visited.set(root as usize, true);
            let mut stack: Vec<(Node, usize)> = vec![(root, 0)];

            while let Some(&mut (u, ref mut idx)) = stack.last_mut() {
                if let Some(&(v, _)) = self.as_neighbors_slice(u).get(*idx) {
                    *idx += 1;
                    if !visited[v as usize] {
                        visited.set(v as usize, true);
                        stack.push((v, 0));
                    }
                } else {
                    finished.push(u);
                    stack.pop();
                }
            }
        }

        let transposed = self.transposed();
        let mut component = vec![0 as NumNodes; n as usize];
        let mut assigned = BitVec::from_elem(n as usize, false);
        let mut num_components = 0;

        for &root in finished.iter().rev() {
            if assigned[root as usize] {
                continue;
            }

            assigned.set(root as usize, true);
            component[root as usize] = num_components;
            let mut stack: Vec<(Node, usize)> = vec![(root, 0)];

            while let Some(&mut (u, ref mut idx)) = stack.last_mut() {
                if let Some(&(v, _)) = transposed.as_neighbors_slice(u).get(*idx) {
                    *idx += 1;
                    if !assigned[v as usize] {
                        assigned.set(v as usize, true);
                        component[v as usize] = num_components;
                        stack.push((v, 0));
                    }
                } else {
                    stack.pop();
                }
            }

            num_components += 1;
        }

        SccResult {
            component,
            num_components,
        }
    }
}
