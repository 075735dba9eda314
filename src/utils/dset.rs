use crate::node::{Node, NumNodes};

/// A union-find forest over the nodes `0..n` with path compression and union
/// by rank, bounding the amortized cost of `find`/`union` to near `O(1)`.
pub(crate) struct DisjointSets {
    parent: Vec<Node>,
    rank: Vec<u8>,
}

impl DisjointSets {
    /// Creates `n` singleton sets, each node its own root with rank 0
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
        }
    }

    /// Returns the root of the set containing `x`, compressing every visited
    /// node's parent pointer directly to the root.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Joins the sets containing `x` and `y`. Returns *false* if they were
    /// already in the same set — for callers doing cycle detection this
    /// directly signals "edge closes a cycle".
    /// ** Panics if `x >= n || y >= n` **
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);

        if rx == ry {
            return false;
        }

        if self.rank[rx as usize] < self.rank[ry as usize] {
            self.parent[rx as usize] = ry;
        } else if self.rank[rx as usize] > self.rank[ry as usize] {
            self.parent[ry as usize] = rx;
        } else {
            self.parent[ry as usize] = rx;
            self.rank[rx as usize] += 1;
        }

        true
    }
}
