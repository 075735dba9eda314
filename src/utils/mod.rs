/*!
# Utilities

Algorithm-local data structures:
- [`IndexedMinHeap`]: binary min-heap over `(node, key)` pairs with a position
  index enabling `O(log n)` decrease-key (Dijkstra, Prim),
- [`DisjointSets`]: union-find forest with path compression and union by rank
  (Kruskal, undirected cycle detection).

Both are transient helpers owned by a single algorithm invocation and are not
part of the public API.
*/

mod dset;
mod heap;

pub(crate) use dset::DisjointSets;
pub(crate) use heap::IndexedMinHeap;
