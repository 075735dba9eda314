use std::fmt::{Debug, Display};

use crate::node::Node;

/// Edge weights are signed so that Bellman-Ford can work on negative weights.
/// A weight of `0` is rejected by the graph store ("no edge" value).
pub type Weight = i64;

/// Weight assigned to edges of unweighted graphs by convention
pub const UNIT_WEIGHT: Weight = 1;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An edge is defined by two endpoints and a weight.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node, pub Weight);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},w{})", self.0, self.1, self.2)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the source endpoint
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the target endpoint
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reversed(&self) -> Self {
        Edge(self.1, self.0, self.2)
    }
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge(value.0, value.1, value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(Edge(3, 1, 5).normalized(), Edge(1, 3, 5));
        assert!(Edge(1, 3, 5).is_normalized());
        assert!(!Edge(3, 1, 5).is_normalized());
        assert!(Edge(2, 2, 1).is_loop());
        assert_eq!(Edge(0, 4, -2).reversed(), Edge(4, 0, -2));
    }
}
