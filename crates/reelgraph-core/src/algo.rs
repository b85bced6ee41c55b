//! Shortest-path algorithms over dense-id graphs.
//!
//! The algorithms in this module work on a [`Graph<usize>`] whose vertex ids
//! form the contiguous range `0..n`, because their results are dense
//! matrices and arrays indexed by vertex id. A graph over arbitrary keys is
//! adapted through [`DenseIndex`], an explicit bijection between keys and
//! dense ids, rather than through any implicit global numbering.
//!
//! | Operation | Algorithm | Complexity |
//! |-----------|-----------|------------|
//! | All-pairs distances | Floyd–Warshall | O(n^3) |
//! | Single-source tree | Dijkstra + indexed min-heap | O(n^2 log n) |
//!
//! Edges are unit cost: a distance is a number of hops. Unreachable pairs
//! are reported as [`INFINITY`], never as an error.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::queue::PriorityQueue;

/// Sentinel distance for "no known finite path".
///
/// Callers must compare against this value before treating a distance as
/// real.
pub const INFINITY: u32 = u32::MAX;

/// Verifies that the graph's vertex ids form the dense range `0..n` and
/// returns `n`.
fn check_dense(graph: &Graph<usize>) -> Result<usize> {
    let len = graph.num_vertices();
    for &id in graph.vertices() {
        if id >= len {
            return Err(Error::NonDenseVertex { id, len });
        }
    }
    Ok(len)
}

/// Builds the unit-cost adjacency matrix of a dense-id graph.
///
/// Cell `(i, j)` is `1` if the edge `i -> j` exists and [`INFINITY`]
/// otherwise, including on the diagonal unless a self-loop is present.
///
/// # Errors
///
/// Returns [`Error::NonDenseVertex`] if any vertex id falls outside `0..n`.
pub fn adjacency_matrix(graph: &Graph<usize>) -> Result<Vec<Vec<u32>>> {
    let n = check_dense(graph)?;
    let mut matrix = vec![vec![INFINITY; n]; n];
    for u in 0..n {
        for &v in graph.neighbors(&u)? {
            matrix[u][v] = 1;
        }
    }
    Ok(matrix)
}

/// Computes all-pairs shortest hop counts with Floyd–Warshall.
///
/// The distance from every vertex to itself is `0`; unreachable pairs keep
/// the [`INFINITY`] sentinel. A relaxation through an intermediate vertex is
/// skipped only when one of its legs is still `INFINITY` — a finite `0` is a
/// real zero-length path, never an "unknown" marker.
///
/// # Errors
///
/// Returns [`Error::NonDenseVertex`] if any vertex id falls outside `0..n`.
pub fn floyd_warshall(graph: &Graph<usize>) -> Result<Vec<Vec<u32>>> {
    let mut dist = adjacency_matrix(graph)?;
    let n = dist.len();
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0;
    }
    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == INFINITY {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == INFINITY {
                    continue;
                }
                let alt = dist[i][k] + dist[k][j];
                if alt < dist[i][j] {
                    dist[i][j] = alt;
                }
            }
        }
    }
    debug!(vertices = n, "computed all-pairs shortest paths");
    Ok(dist)
}

/// The result of a single-source Dijkstra run.
///
/// Holds the per-vertex distance and predecessor arrays, indexed by dense
/// vertex id. The predecessor of the source and of every unreached vertex is
/// `None`.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    dist: Vec<u32>,
    prev: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// The source vertex this tree was grown from.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// The shortest hop count from the source to `v`, or `None` if `v` is
    /// out of range or unreachable.
    #[must_use]
    pub fn distance(&self, v: usize) -> Option<u32> {
        match self.dist.get(v) {
            Some(&d) if d != INFINITY => Some(d),
            _ => None,
        }
    }

    /// The predecessor of `v` on its shortest path from the source, or
    /// `None` for the source itself, unreached vertices, and out-of-range
    /// ids.
    #[must_use]
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.prev.get(v).copied().flatten()
    }

    /// The full predecessor array, indexed by vertex id.
    #[must_use]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.prev
    }

    /// Reconstructs the shortest path from the source to `dest` by walking
    /// the predecessor array backward.
    ///
    /// The returned path includes both endpoints; for `dest == source` it is
    /// the single-vertex path. Returns `None` if `dest` is out of range or
    /// unreachable.
    #[must_use]
    pub fn path_to(&self, dest: usize) -> Option<Vec<usize>> {
        self.distance(dest)?;
        let mut path = vec![dest];
        let mut current = dest;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes the single-source shortest-path tree with Dijkstra's algorithm.
///
/// Every edge costs one hop. All vertices are seeded into the indexed
/// min-heap keyed by their current distance; each relaxation that improves a
/// neighbor lowers its key in place. Correct only because edge costs are
/// non-negative (here, exactly 1).
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `source` is not a vertex of the
/// graph, or [`Error::NonDenseVertex`] if any vertex id falls outside
/// `0..n`.
pub fn dijkstra(graph: &Graph<usize>, source: usize) -> Result<ShortestPathTree> {
    let n = check_dense(graph)?;
    if !graph.contains_vertex(&source) {
        return Err(Error::UnknownVertex(format!("{source}")));
    }

    let mut dist = vec![INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[source] = 0;

    let mut queue = PriorityQueue::new();
    for v in 0..n {
        queue.push(u64::from(dist[v]), v)?;
    }

    while !queue.is_empty() {
        let u = queue.pop()?;
        if dist[u] == INFINITY {
            // Everything still in the queue is unreachable.
            continue;
        }
        for &v in graph.neighbors(&u)? {
            let alt = dist[u] + 1;
            if alt < dist[v] {
                dist[v] = alt;
                prev[v] = Some(u);
                if queue.is_present(v) {
                    queue.change_priority(u64::from(alt), v)?;
                } else {
                    queue.push(u64::from(alt), v)?;
                }
            }
        }
    }

    debug!(vertices = n, source, "computed single-source shortest paths");
    Ok(ShortestPathTree { source, dist, prev })
}

/// An explicit bijection between arbitrary vertex keys and dense ids
/// `0..n`.
///
/// Built from a generic [`Graph`] together with its densified `Graph<usize>`
/// image, so that the dense-id algorithms can run over graphs keyed by
/// anything orderable. Ids are assigned in sorted key order, which makes the
/// numbering — and therefore matrix and array layouts — deterministic.
#[derive(Debug, Clone)]
pub struct DenseIndex<V> {
    ids: HashMap<V, usize>,
    keys: Vec<V>,
}

impl<V> DenseIndex<V>
where
    V: Eq + Hash + Ord + Clone + fmt::Debug,
{
    /// Builds the bijection for `graph` and returns it alongside the
    /// densified graph with identical edge structure.
    ///
    /// # Errors
    ///
    /// This operation reads the graph only through its own vertex set, so
    /// it cannot observe an unknown vertex in a well-formed graph; the
    /// `Result` propagates the graph's own access errors unchanged.
    pub fn from_graph(graph: &Graph<V>) -> Result<(Self, Graph<usize>)> {
        let mut keys: Vec<V> = graph.vertices().cloned().collect();
        keys.sort_unstable();
        let ids: HashMap<V, usize> = keys
            .iter()
            .enumerate()
            .map(|(id, key)| (key.clone(), id))
            .collect();

        let mut dense = Graph::new();
        for id in 0..keys.len() {
            dense.add_vertex(id);
        }
        for (u, key) in keys.iter().enumerate() {
            for neighbor in graph.neighbors(key)? {
                dense.add_edge(&u, &ids[neighbor])?;
            }
        }
        Ok((Self { ids, keys }, dense))
    }

    /// The dense id assigned to `key`, or `None` if the key was not a
    /// vertex of the indexed graph.
    #[must_use]
    pub fn id_of(&self, key: &V) -> Option<usize> {
        self.ids.get(key).copied()
    }

    /// The vertex key assigned to a dense id, or `None` if out of range.
    #[must_use]
    pub fn key_of(&self, id: usize) -> Option<&V> {
        self.keys.get(id)
    }

    /// The number of indexed vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the indexed graph had no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn adjacency_matrix_marks_edges_and_infinity() {
        let g = dense_graph(3, &[(0, 1), (1, 2)]);
        let matrix = adjacency_matrix(&g).unwrap();
        assert_eq!(matrix[0][1], 1);
        assert_eq!(matrix[1][2], 1);
        assert_eq!(matrix[1][0], INFINITY);
        assert_eq!(matrix[0][0], INFINITY);
    }

    #[test]
    fn adjacency_matrix_round_trips_edge_exists() {
        let g = dense_graph(4, &[(0, 1), (1, 3), (3, 0), (2, 2)]);
        let matrix = adjacency_matrix(&g).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(matrix[i][j] == 1, g.edge_exists(&i, &j).unwrap());
            }
        }
    }

    #[test]
    fn non_dense_ids_are_rejected() {
        let mut g = Graph::new();
        g.add_vertex(0);
        g.add_vertex(5);
        let err = adjacency_matrix(&g).unwrap_err();
        assert_eq!(err, Error::NonDenseVertex { id: 5, len: 2 });
        assert!(floyd_warshall(&g).is_err());
        assert!(dijkstra(&g, 0).is_err());
    }

    #[test]
    fn floyd_warshall_on_three_cycle() {
        let g = dense_graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let dist = floyd_warshall(&g).unwrap();
        assert_eq!(dist[0][1], 1);
        assert_eq!(dist[0][2], 2);
        assert_eq!(dist[1][0], 2);
        assert_eq!(dist[2][1], 2);
    }

    #[test]
    fn floyd_warshall_self_distance_is_zero() {
        let g = dense_graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let dist = floyd_warshall(&g).unwrap();
        for (i, row) in dist.iter().enumerate() {
            assert_eq!(row[i], 0);
        }
    }

    #[test]
    fn floyd_warshall_keeps_sentinel_for_unreachable_pairs() {
        let g = dense_graph(3, &[(0, 1)]);
        let dist = floyd_warshall(&g).unwrap();
        assert_eq!(dist[0][2], INFINITY);
        assert_eq!(dist[1][0], INFINITY);
        assert_eq!(dist[2][0], INFINITY);
    }

    #[test]
    fn dijkstra_on_a_single_path() {
        // source -> a -> b with unit edges.
        let g = dense_graph(3, &[(0, 1), (1, 2)]);
        let tree = dijkstra(&g, 0).unwrap();
        assert_eq!(tree.predecessor(2), Some(1));
        assert_eq!(tree.predecessor(1), Some(0));
        assert_eq!(tree.predecessor(0), None);
        assert_eq!(tree.distance(2), Some(2));
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn dijkstra_prefers_fewer_hops() {
        // Direct edge 0 -> 3 beats the long way around.
        let g = dense_graph(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        let tree = dijkstra(&g, 0).unwrap();
        assert_eq!(tree.distance(3), Some(1));
        assert_eq!(tree.predecessor(3), Some(0));
    }

    #[test]
    fn dijkstra_leaves_disconnected_vertices_unreached() {
        let g = dense_graph(3, &[(0, 1)]);
        let tree = dijkstra(&g, 0).unwrap();
        assert_eq!(tree.predecessor(2), None);
        assert_eq!(tree.distance(2), None);
        assert_eq!(tree.path_to(2), None);
    }

    #[test]
    fn dijkstra_path_to_source_is_trivial() {
        let g = dense_graph(2, &[(0, 1)]);
        let tree = dijkstra(&g, 0).unwrap();
        assert_eq!(tree.path_to(0), Some(vec![0]));
        assert_eq!(tree.distance(0), Some(0));
    }

    #[test]
    fn dijkstra_rejects_unknown_source() {
        let g = dense_graph(2, &[]);
        assert!(matches!(dijkstra(&g, 7), Err(Error::UnknownVertex(_))));
    }

    #[test]
    fn dijkstra_respects_edge_direction() {
        let g = dense_graph(2, &[(0, 1)]);
        let tree = dijkstra(&g, 1).unwrap();
        assert_eq!(tree.distance(0), None);
    }

    #[test]
    fn empty_graph_is_handled() {
        let g: Graph<usize> = Graph::new();
        assert!(floyd_warshall(&g).unwrap().is_empty());
        assert!(adjacency_matrix(&g).unwrap().is_empty());
    }

    #[test]
    fn dense_index_assigns_sorted_ids() {
        let mut g = Graph::new();
        g.add_vertex(30_u32);
        g.add_vertex(10);
        g.add_vertex(20);
        g.add_edge(&10, &30).unwrap();

        let (index, dense) = DenseIndex::from_graph(&g).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.id_of(&10), Some(0));
        assert_eq!(index.id_of(&20), Some(1));
        assert_eq!(index.id_of(&30), Some(2));
        assert_eq!(index.key_of(2), Some(&30));
        assert_eq!(index.id_of(&99), None);

        assert!(dense.edge_exists(&0, &2).unwrap());
        assert_eq!(dense.num_edges(), 1);
    }

    #[test]
    fn dense_index_preserves_shortest_paths() {
        let mut g = Graph::new();
        for id in [100_u32, 205, 317] {
            g.add_vertex(id);
        }
        g.add_edge(&100, &205).unwrap();
        g.add_edge(&205, &317).unwrap();

        let (index, dense) = DenseIndex::from_graph(&g).unwrap();
        let source = index.id_of(&100).unwrap();
        let dest = index.id_of(&317).unwrap();
        let tree = dijkstra(&dense, source).unwrap();
        assert_eq!(tree.distance(dest), Some(2));

        let path: Vec<u32> = tree
            .path_to(dest)
            .unwrap()
            .into_iter()
            .map(|id| *index.key_of(id).unwrap())
            .collect();
        assert_eq!(path, vec![100, 205, 317]);
    }

    #[test]
    fn dense_index_on_empty_graph() {
        let g: Graph<u32> = Graph::new();
        let (index, dense) = DenseIndex::from_graph(&g).unwrap();
        assert!(index.is_empty());
        assert_eq!(dense.num_vertices(), 0);
    }
}
