use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Errors surfaced by graph construction and by algorithm entry points that
/// take a source vertex.
///
/// Invalid edge insertions are *not* errors: [`Graph::add_edge`](crate::repr::Graph::add_edge)
/// reports them as a plain `false` without mutating the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A graph must have at least one vertex.
    #[error("a graph needs at least one vertex")]
    NoVertices,

    /// A vertex id passed to an algorithm was not in `0..order`.
    #[error("vertex {vertex} out of range for a graph with {order} vertices")]
    VertexOutOfRange { vertex: Node, order: NumNodes },
}
