//! Building the movie graph and deriving reports from it.
//!
//! Movies are vertices; a directed edge joins two movies when enough
//! reviewers connect them under the chosen [`AdjacencyPolicy`]. The relation
//! is symmetric, so the pair scan inserts both directions. The graph is a
//! plain value returned to the caller — nothing here keeps a shared
//! "current graph" instance.

use reelgraph_core::{DenseIndex, Graph, INFINITY, dijkstra, floyd_warshall};
use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::domain::Movie;
use crate::error::{Error, Result};

/// Reviewers that must agree before two movies become adjacent.
pub const DEFAULT_THRESHOLD: usize = 12;

/// How a pair of movies qualifies for an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyPolicy {
    /// At least `threshold` reviewers gave both movies the same score.
    SharedRating,
    /// At least `threshold` reviewers rated both movies, regardless of
    /// score.
    SharedViewing,
}

impl AdjacencyPolicy {
    /// Parses a policy name from the command line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for anything other than `shared-rating`
    /// (or `rating`) and `shared-viewing` (or `viewing`).
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "shared-rating" | "rating" => Ok(Self::SharedRating),
            "shared-viewing" | "viewing" => Ok(Self::SharedViewing),
            _ => Err(Error::Config(format!(
                "invalid policy '{name}'. Use 'shared-rating' or 'shared-viewing'."
            ))),
        }
    }

    /// Counts the reviewers connecting `a` and `b` under this policy,
    /// stopping early once `limit` is reached.
    fn agreement(self, a: &Movie, b: &Movie, limit: usize) -> usize {
        let mut count = 0;
        for (reviewer, rating_a) in a.ratings() {
            let connected = match self {
                Self::SharedRating => b.rating_from(reviewer) == Some(rating_a),
                Self::SharedViewing => b.rated_by(reviewer),
            };
            if connected {
                count += 1;
                if count >= limit {
                    break;
                }
            }
        }
        count
    }
}

/// Builds the movie-affinity graph for a dataset.
///
/// Every movie becomes a vertex; each ordered pair of distinct movies with
/// at least `threshold` connecting reviewers becomes an edge. The dataset's
/// ordered iteration makes the result deterministic.
///
/// # Errors
///
/// Returns [`Error::Config`] if `threshold` is zero. Graph mutation errors
/// cannot occur here (every endpoint is inserted first) but are propagated
/// unchanged if they do.
pub fn build_graph(
    dataset: &Dataset,
    policy: AdjacencyPolicy,
    threshold: usize,
) -> Result<Graph<u32>> {
    if threshold == 0 {
        return Err(Error::Config("threshold must be at least 1".into()));
    }

    let mut graph = Graph::new();
    for movie in dataset.movies() {
        graph.add_vertex(movie.id());
    }
    for a in dataset.movies() {
        for b in dataset.movies() {
            if a.id() == b.id() {
                continue;
            }
            if policy.agreement(a, b, threshold) >= threshold {
                graph.add_edge(&a.id(), &b.id())?;
            }
        }
    }
    debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        ?policy,
        threshold,
        "movie graph built"
    );
    Ok(graph)
}

/// Aggregate statistics for a movie graph, derived from one Floyd–Warshall
/// run over its densified image.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    /// Number of vertices.
    pub num_vertices: usize,
    /// Number of directed edges.
    pub num_edges: usize,
    /// Edge density `2E / (V * (V - 1))`; the graph is symmetric by
    /// construction, so the undirected formula applies.
    pub density: f64,
    /// The largest out-degree in the graph.
    pub max_degree: usize,
    /// The lowest-id movie attaining `max_degree`, if the graph is
    /// non-empty.
    pub max_degree_movie: Option<u32>,
    /// The longest finite shortest path between distinct vertices, in hops.
    pub diameter: u32,
    /// The (from, to) movie pair attaining `diameter`, if any pair is
    /// connected.
    pub diameter_endpoints: Option<(u32, u32)>,
    /// Mean finite shortest-path length over distinct vertex pairs.
    pub avg_path_length: f64,
}

/// Computes [`GraphSummary`] statistics for a movie graph.
///
/// # Errors
///
/// Propagates graph access errors from densification; none occur for a
/// well-formed graph.
#[allow(clippy::cast_precision_loss)]
pub fn summarize(graph: &Graph<u32>) -> Result<GraphSummary> {
    let (index, dense) = DenseIndex::from_graph(graph)?;
    let n = index.len();

    let mut max_degree = 0;
    let mut max_degree_movie = None;
    for id in 0..n {
        let movie = index.key_of(id).copied().unwrap_or_default();
        let degree = graph.degree(&movie)?;
        if degree > max_degree || max_degree_movie.is_none() {
            max_degree = degree;
            max_degree_movie = Some(movie);
        }
    }

    let dist = floyd_warshall(&dense)?;
    let mut diameter = 0;
    let mut diameter_endpoints = None;
    let mut finite_sum = 0u64;
    let mut finite_pairs = 0u64;
    for i in 0..n {
        for j in 0..n {
            if i == j || dist[i][j] == INFINITY {
                continue;
            }
            finite_sum += u64::from(dist[i][j]);
            finite_pairs += 1;
            if dist[i][j] > diameter {
                diameter = dist[i][j];
                let from = index.key_of(i).copied().unwrap_or_default();
                let to = index.key_of(j).copied().unwrap_or_default();
                diameter_endpoints = Some((from, to));
            }
        }
    }

    let num_vertices = graph.num_vertices();
    let num_edges = graph.num_edges();
    let density = if num_vertices < 2 {
        0.0
    } else {
        2.0 * num_edges as f64 / (num_vertices as f64 * (num_vertices as f64 - 1.0))
    };
    let avg_path_length = if finite_pairs == 0 {
        0.0
    } else {
        finite_sum as f64 / finite_pairs as f64
    };

    Ok(GraphSummary {
        num_vertices,
        num_edges,
        density,
        max_degree,
        max_degree_movie,
        diameter,
        diameter_endpoints,
        avg_path_length,
    })
}

/// Finds the fewest-hops path between two movies.
///
/// Returns `None` when no path exists.
///
/// # Errors
///
/// Returns [`Error::MovieNotFound`] if either movie id is not a vertex of
/// the graph.
pub fn shortest_path(graph: &Graph<u32>, from: u32, to: u32) -> Result<Option<Vec<u32>>> {
    if !graph.contains_vertex(&from) {
        return Err(Error::MovieNotFound(from));
    }
    if !graph.contains_vertex(&to) {
        return Err(Error::MovieNotFound(to));
    }

    let (index, dense) = DenseIndex::from_graph(graph)?;
    let source = index
        .id_of(&from)
        .ok_or(Error::MovieNotFound(from))?;
    let dest = index.id_of(&to).ok_or(Error::MovieNotFound(to))?;

    let tree = dijkstra(&dense, source)?;
    let Some(path) = tree.path_to(dest) else {
        return Ok(None);
    };
    let movie_ids = path
        .into_iter()
        .map(|id| index.key_of(id).copied().ok_or(Error::MovieNotFound(to)))
        .collect::<Result<Vec<u32>>>()?;
    Ok(Some(movie_ids))
}

/// A movie's profile and its direct graph neighborhood.
#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    /// The movie's id.
    pub id: u32,
    /// The movie's title.
    pub title: String,
    /// How many reviewers rated the movie.
    pub num_ratings: usize,
    /// Mean rating in stars, absent when the movie has no ratings.
    pub mean_rating: Option<f64>,
    /// Adjacent movies as (id, title) pairs, in ascending id order.
    pub neighbors: Vec<(u32, String)>,
}

/// Builds a [`NodeReport`] for one movie.
///
/// # Errors
///
/// Returns [`Error::MovieNotFound`] if the id is absent from the dataset or
/// from the graph.
pub fn node_report(dataset: &Dataset, graph: &Graph<u32>, movie_id: u32) -> Result<NodeReport> {
    let movie = dataset
        .movie(movie_id)
        .ok_or(Error::MovieNotFound(movie_id))?;
    if !graph.contains_vertex(&movie_id) {
        return Err(Error::MovieNotFound(movie_id));
    }

    let mut neighbor_ids: Vec<u32> = graph.neighbors(&movie_id)?.iter().copied().collect();
    neighbor_ids.sort_unstable();
    let neighbors = neighbor_ids
        .into_iter()
        .map(|id| {
            let title = dataset
                .movie(id)
                .map_or_else(|| "<unknown title>".to_string(), |m| m.title().to_string());
            (id, title)
        })
        .collect();

    Ok(NodeReport {
        id: movie_id,
        title: movie.title().to_string(),
        num_ratings: movie.num_ratings(),
        mean_rating: movie.mean_rating(),
        neighbors,
    })
}

/// Finds movies whose title contains the keyword, case-insensitively.
///
/// Results come back in ascending movie-id order.
#[must_use]
pub fn search_titles<'a>(dataset: &'a Dataset, keyword: &str) -> Vec<&'a Movie> {
    let needle = keyword.to_lowercase();
    dataset
        .movies()
        .filter(|movie| movie.title().to_lowercase().contains(&needle))
        .collect()
}
