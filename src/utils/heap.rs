use crate::{
    edge::Weight,
    node::{Node, NumNodes, OptionalNode},
};

/// A binary min-heap over `(node, key)` pairs with a position index `pos` so
/// that the slot of any contained node can be found in `O(1)` and its key
/// lowered in `O(log n)`.
///
/// Invariant: `pos[nodes[i].0] == i` for every live slot `i`. Every swap
/// updates `pos` for both swapped elements together with the data swap.
pub(crate) struct IndexedMinHeap {
    nodes: Vec<(Node, Weight)>,
    pos: Vec<Option<OptionalNode>>,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold the nodes `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            nodes: Vec::with_capacity(n as usize),
            pos: vec![None; n as usize],
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if `u` is currently in the heap
    pub fn contains(&self, u: Node) -> bool {
        self.pos[u as usize].is_some()
    }

    /// Inserts `u` with the given key.
    /// ** Panics in debug builds if `u` is already contained **
    pub fn insert(&mut self, u: Node, key: Weight) {
        debug_assert!(!self.contains(u));

        let slot = self.nodes.len();
        self.nodes.push((u, key));
        self.pos[u as usize] = OptionalNode::new(slot as Node);
        self.sift_up(slot);
    }

    /// Removes and returns the `(node, key)` pair with the smallest key, or
    /// `None` if the heap is empty.
    pub fn extract_min(&mut self) -> Option<(Node, Weight)> {
        let min = *self.nodes.first()?;
        self.pos[min.0 as usize] = None;

        let last = self.nodes.pop()?;
        if !self.nodes.is_empty() {
            self.nodes[0] = last;
            self.pos[last.0 as usize] = OptionalNode::new(0);
            self.sift_down(0);
        }

        Some(min)
    }

    /// Lowers the key of a contained node and restores heap order.
    /// ** Panics if `u` is not contained; debug-panics if the key grows **
    pub fn decrease_key(&mut self, u: Node, new_key: Weight) {
        let slot = self.pos[u as usize]
            .map(|p| p.get() as usize)
            .expect("decrease_key on a node that is not in the heap");
        debug_assert!(new_key <= self.nodes[slot].1);

        self.nodes[slot].1 = new_key;
        self.sift_up(slot);
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.pos[self.nodes[i].0 as usize] = OptionalNode::new(j as Node);
        self.pos[self.nodes[j].0 as usize] = OptionalNode::new(i as Node);
        self.nodes.swap(i, j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.nodes[parent].1 <= self.nodes[i].1 {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let mut smallest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < self.nodes.len() && self.nodes[child].1 < self.nodes[smallest].1 {
                    smallest = child;
                }
            }

            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
