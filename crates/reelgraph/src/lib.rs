//! # Reelgraph: Movie-Affinity Graph Analysis
//!
//! Reelgraph turns MovieLens-style rating data into a directed graph of
//! movies and answers questions about it: graph-wide statistics, per-movie
//! neighborhoods, fewest-hops paths between two movies, and title search.
//! The graph and shortest-path machinery live in `reelgraph-core`; this
//! crate supplies the dataset loader, the domain records, and the analysis
//! layer the CLI drives.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use reelgraph::analyzer::{self, AdjacencyPolicy};
//! use reelgraph::dataset::Dataset;
//!
//! let dataset = Dataset::load(Path::new("ratings.csv"), Path::new("movies.csv"))?;
//! let graph = analyzer::build_graph(&dataset, AdjacencyPolicy::SharedRating, 12)?;
//!
//! let summary = analyzer::summarize(&graph)?;
//! println!("{} movies, {} edges", summary.num_vertices, summary.num_edges);
//! # Ok::<(), reelgraph::Error>(())
//! ```

pub mod analyzer;
pub mod dataset;
pub mod domain;
mod error;

pub use error::{Error, Result};
