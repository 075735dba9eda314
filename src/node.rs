/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This saves space compared to `usize`/`u64` and lets algorithms manipulate node
values directly without abstracting over them.
*/

use std::num::NonZero;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need a `Vec<Option<Node>>` (parent arrays, heap position
/// indices). This instead uses the `NonZero`-Wrapper so that `INVALID_NODE`
/// becomes the niche and `Option<OptionalNode>` stays 4 bytes wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNode(NonZero<Node>);

impl OptionalNode {
    /// Returns `Some(OptionalNode)` if `n != INVALID_NODE` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ INVALID_NODE) {
            Some(inner) => Some(OptionalNode(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ INVALID_NODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_roundtrip() {
        for n in [0, 1, 17, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(n).unwrap().get(), n);
        }
        assert!(OptionalNode::new(INVALID_NODE).is_none());
    }

    #[test]
    fn optional_node_is_niche_packed() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }
}
