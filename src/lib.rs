/*!
`wgraphs` is a small graph data structure & algorithms library for graphs that are

- **w**eighted : every edge carries an integer weight,
- numbered : nodes are `0` to `n - 1`,
- directed **or** undirected, chosen at construction time.

# Representation

Nodes are `u32` in the range `0..n` where `n` is the number of nodes of the graph.
Each node owns a growable adjacency row of `(neighbor, weight)` pairs; for
undirected graphs every inserted edge is mirrored into both rows at insertion
time. Edges with weight `0` are rejected (weight `0` doubles as the "no edge"
value in several classical formulations and must never be storable).

See [`Graph`](repr::Graph) for the store itself and the [`algo`] submodules
for the algorithms implemented on it:

- [`algo::traversal`]: BFS / DFS visit orders with parents and depths,
- [`algo::shortest_path`]: Dijkstra and Bellman-Ford (with negative-cycle detection),
- [`algo::toposort`]: Kahn's and DFS-based topological ordering,
- [`algo::mst`]: Kruskal's and Prim's minimum spanning trees,
- [`algo::scc`]: Tarjan's and Kosaraju's strongly connected components,
- [`algo::cycles`]: directed and undirected cycle detection.

All algorithms treat the graph as read-only, return independent owned result
objects and run on explicit work stacks, so even adversarially deep graphs
(e.g. one long path or cycle) cannot exhaust the call stack.

# Usage

```
use wgraphs::prelude::*;

let mut g = Graph::new(5, true);
g.add_edge(0, 2, 1);
g.add_edge(2, 1, 2);
g.add_edge(1, 3, 1);
g.add_edge(3, 4, 3);

let sp = g.dijkstra(0).unwrap();
assert_eq!(sp.distance_of(4), Some(7));
assert_eq!(sp.path_to(4), Some(vec![0, 2, 1, 3, 4]));
```

In most use-cases, `use wgraphs::prelude::*;` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod utils;

/// `wgraphs::prelude` includes the node/edge/weight definitions, the graph
/// store, the error type and every algorithm result type.
pub mod prelude {
    pub use super::{algo::*, edge::*, error::*, node::*, repr::*};
}
