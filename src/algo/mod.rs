/*!
# Graph Algorithms

This module provides the **graph algorithms** implemented on [`Graph`](crate::repr::Graph).
Each submodule contributes one inherent `impl Graph` block plus its owned
result type; results never borrow the graph and algorithms never mutate it.

Directed-only algorithms (topological sorting, strongly connected components,
directed cycle detection) do not validate directedness: running them on an
undirected graph is a documented caller error and produces meaningless
results, not a panic.
*/

pub mod cycles;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod toposort;
pub mod traversal;

pub use mst::*;
pub use scc::*;
pub use shortest_path::*;
pub use toposort::*;
pub use traversal::*;

/// DFS vertex states shared by the three-coloring walks (DFS-based
/// topological sort and directed cycle detection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// not yet discovered
    White,
    /// on the current DFS path
    Gray,
    /// finished
    Black,
}
