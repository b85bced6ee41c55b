//! CLI command implementations.

pub mod node;
pub mod path;
pub mod search;
pub mod stats;

use std::path::Path;

use reelgraph::analyzer::{self, AdjacencyPolicy};
use reelgraph::dataset::Dataset;
use reelgraph_core::Graph;

/// Loads the dataset and builds the movie graph the way every graph-backed
/// command needs it.
fn load_graph(
    ratings: &Path,
    movies: &Path,
    policy: &str,
    threshold: usize,
) -> Result<(Dataset, Graph<u32>), reelgraph::Error> {
    let policy = AdjacencyPolicy::parse(policy)?;
    let dataset = Dataset::load(ratings, movies)?;
    let graph = analyzer::build_graph(&dataset, policy, threshold)?;
    Ok((dataset, graph))
}
