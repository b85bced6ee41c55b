//! A mutable directed graph over a generic vertex key type.
//!
//! [`Graph`] maps each vertex key to the set of its outgoing neighbors, so
//! there are no parallel edges and edge insertion is idempotent. Edges may
//! only be added between vertices that already exist; referencing an absent
//! vertex is an [`Error::UnknownVertex`] at the call site.
//!
//! The graph exclusively owns its adjacency structure. Keys are cloned in on
//! insertion and handed back by reference; callers never hold pointers into
//! the graph. Single-writer access is assumed throughout.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};

/// A directed graph mapping vertex keys to their outgoing neighbor sets.
///
/// Vertex identity is equality-based: two keys that compare equal are the
/// same vertex. Self-loops are permitted; duplicate edges collapse.
///
/// # Examples
///
/// ```
/// use reelgraph_core::Graph;
///
/// let mut g = Graph::new();
/// g.add_vertex("a");
/// g.add_vertex("b");
/// g.add_edge(&"a", &"b")?;
///
/// assert_eq!(g.num_vertices(), 2);
/// assert_eq!(g.num_edges(), 1);
/// assert!(g.edge_exists(&"a", &"b")?);
/// # Ok::<(), reelgraph_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph<V> {
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edges in the graph.
    ///
    /// This is the sum of out-degrees over all vertices.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Adds a vertex to the graph.
    ///
    /// Has no effect if the vertex is already present; existing edges are
    /// untouched.
    pub fn add_vertex(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    /// Adds the directed edge `u -> v`.
    ///
    /// Adding an edge that already exists is a no-op. On error the graph is
    /// left unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either endpoint is not a vertex
    /// of the graph.
    pub fn add_edge(&mut self, u: &V, v: &V) -> Result<()> {
        if !self.adjacency.contains_key(v) {
            return Err(Error::UnknownVertex(format!("{v:?}")));
        }
        let Some(neighbors) = self.adjacency.get_mut(u) else {
            return Err(Error::UnknownVertex(format!("{u:?}")));
        };
        neighbors.insert(v.clone());
        Ok(())
    }

    /// Returns an iterator over the vertex keys of the graph.
    ///
    /// Iteration order is unspecified.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Returns the set of direct successors of `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `v` is not a vertex of the graph.
    pub fn neighbors(&self, v: &V) -> Result<&HashSet<V>> {
        self.adjacency
            .get(v)
            .ok_or_else(|| Error::UnknownVertex(format!("{v:?}")))
    }

    /// Returns `true` if `v` is a vertex of the graph.
    #[must_use]
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Returns `true` if the directed edge `u -> v` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either endpoint is not a vertex
    /// of the graph.
    pub fn edge_exists(&self, u: &V, v: &V) -> Result<bool> {
        if !self.adjacency.contains_key(v) {
            return Err(Error::UnknownVertex(format!("{v:?}")));
        }
        let neighbors = self
            .adjacency
            .get(u)
            .ok_or_else(|| Error::UnknownVertex(format!("{u:?}")))?;
        Ok(neighbors.contains(v))
    }

    /// Returns the out-degree of `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `v` is not a vertex of the graph.
    pub fn degree(&self, v: &V) -> Result<usize> {
        self.neighbors(v).map(HashSet::len)
    }
}
