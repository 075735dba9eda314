/*!
Shared helpers for unit tests. Only compiled for `cfg(test)`.
*/

use std::ops::Range;

use rand::Rng;

use crate::{edge::Weight, node::NumNodes, repr::Graph};

/// Generates a uniform random simple graph with `n` nodes and exactly `m`
/// edges, each weighted uniformly from `weights`. No self-loops, no parallel
/// edges. Connectivity is not guaranteed.
///
/// ** Panics if `m` exceeds the number of possible edges or `weights` is empty **
pub(crate) fn random_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: u64,
    directed: bool,
    weights: Range<Weight>,
) -> Graph {
    let possible = (n as u64) * (n as u64 - 1) / if directed { 1 } else { 2 };
    assert!(m <= possible);

    let mut graph = Graph::new(n, directed);
    while (graph.number_of_edges() as u64) < m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v && !graph.has_edge(u, v) {
            graph.add_edge(u, v, rng.random_range(weights.clone()));
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn generated_graphs_are_simple() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for directed in [true, false] {
            let graph = random_graph(rng, 30, 80, directed, 1..10);

            assert_eq!(graph.number_of_nodes(), 30);
            assert_eq!(graph.number_of_edges(), 80);
            assert_eq!(graph.is_directed(), directed);

            let edges = graph.edges(!directed).collect_vec();
            assert_eq!(edges.len(), 80);
            assert_eq!(edges.iter().map(|e| (e.source(), e.target())).unique().count(), 80);
            for e in edges {
                assert!(!e.is_loop());
                assert!((1..10).contains(&e.weight()));
            }
        }
    }
}
