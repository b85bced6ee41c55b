//! Integration tests for the shortest-path algorithms.
//!
//! Fixed-shape cases are checked directly; arbitrary graphs are checked
//! against petgraph's Dijkstra implementation as an independent oracle for
//! both the single-source tree and every row of the Floyd–Warshall matrix.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use reelgraph_core::{INFINITY, Graph, dijkstra, floyd_warshall};
use rstest::rstest;

/// Builds a dense-id graph with `n` vertices and the given edges.
fn dense_graph(n: usize, edges: &[(usize, usize)]) -> Graph<usize> {
    let mut g = Graph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    for (u, v) in edges {
        g.add_edge(u, v).unwrap();
    }
    g
}

/// Mirrors a dense-id graph into a petgraph `DiGraph` whose node indices
/// coincide with the vertex ids.
fn mirror(n: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
    let mut g = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..n).map(|_| g.add_node(())).collect();
    for &(u, v) in edges {
        g.update_edge(nodes[u], nodes[v], ());
    }
    g
}

/// Reference single-source distances from petgraph, keyed by vertex id.
fn oracle_distances(n: usize, edges: &[(usize, usize)], source: usize) -> HashMap<usize, u32> {
    let g = mirror(n, edges);
    petgraph::algo::dijkstra(&g, NodeIndex::new(source), None, |_| 1u32)
        .into_iter()
        .map(|(node, d)| (node.index(), d))
        .collect()
}

#[rstest]
#[case::chain(4, &[(0, 1), (1, 2), (2, 3)], 0, 3, Some(vec![0, 1, 2, 3]))]
#[case::shortcut(4, &[(0, 1), (1, 2), (2, 3), (0, 3)], 0, 3, Some(vec![0, 3]))]
#[case::unreachable(3, &[(1, 0), (2, 1)], 0, 2, None)]
#[case::to_self(3, &[(0, 1), (1, 2)], 1, 1, Some(vec![1]))]
fn dijkstra_reconstructs_expected_path(
    #[case] n: usize,
    #[case] edges: &[(usize, usize)],
    #[case] source: usize,
    #[case] dest: usize,
    #[case] expected: Option<Vec<usize>>,
) {
    let g = dense_graph(n, edges);
    let tree = dijkstra(&g, source).unwrap();
    assert_eq!(tree.path_to(dest), expected);
}

#[rstest]
#[case::triangle(3, &[(0, 1), (1, 2), (2, 0)])]
#[case::star(5, &[(0, 1), (0, 2), (0, 3), (0, 4)])]
#[case::two_components(6, &[(0, 1), (1, 2), (3, 4), (4, 5)])]
fn floyd_warshall_agrees_with_dijkstra_per_source(
    #[case] n: usize,
    #[case] edges: &[(usize, usize)],
) {
    let g = dense_graph(n, edges);
    let all_pairs = floyd_warshall(&g).unwrap();
    for source in 0..n {
        let tree = dijkstra(&g, source).unwrap();
        for dest in 0..n {
            let fw = all_pairs[source][dest];
            assert_eq!(
                tree.distance(dest),
                (fw != INFINITY).then_some(fw),
                "disagreement for {source} -> {dest}"
            );
        }
    }
}

/// A vertex count together with a set of edges over it.
fn arbitrary_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..10).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..40),
        )
    })
}

proptest! {
    #[test]
    fn dijkstra_matches_petgraph_oracle(
        (n, edges) in arbitrary_graph(),
        source_pick in any::<proptest::sample::Index>(),
    ) {
        let source = source_pick.index(n);
        let g = dense_graph(n, &edges);
        let tree = dijkstra(&g, source).unwrap();
        let oracle = oracle_distances(n, &edges, source);

        for v in 0..n {
            prop_assert_eq!(tree.distance(v), oracle.get(&v).copied());
        }
    }

    #[test]
    fn floyd_warshall_matches_petgraph_oracle((n, edges) in arbitrary_graph()) {
        let g = dense_graph(n, &edges);
        let dist = floyd_warshall(&g).unwrap();

        for source in 0..n {
            let oracle = oracle_distances(n, &edges, source);
            for dest in 0..n {
                let expected = oracle.get(&dest).copied().unwrap_or(INFINITY);
                prop_assert_eq!(dist[source][dest], expected);
            }
        }
    }

    #[test]
    fn dijkstra_paths_are_consistent(
        (n, edges) in arbitrary_graph(),
        source_pick in any::<proptest::sample::Index>(),
    ) {
        let source = source_pick.index(n);
        let g = dense_graph(n, &edges);
        let tree = dijkstra(&g, source).unwrap();

        for dest in 0..n {
            if let Some(path) = tree.path_to(dest) {
                // Path endpoints and length agree with the reported distance.
                prop_assert_eq!(path.first().copied(), Some(source));
                prop_assert_eq!(path.last().copied(), Some(dest));
                let hops = u32::try_from(path.len() - 1).unwrap();
                prop_assert_eq!(tree.distance(dest), Some(hops));
                // Every step follows an actual edge.
                for pair in path.windows(2) {
                    prop_assert!(g.edge_exists(&pair[0], &pair[1]).unwrap());
                }
            } else {
                prop_assert_eq!(tree.distance(dest), None);
            }
        }
    }
}
