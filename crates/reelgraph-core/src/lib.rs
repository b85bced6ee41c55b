//! # Reelgraph Core: Graphs, Heaps, and Shortest Paths
//!
//! The algorithmic foundation of reelgraph: a generic directed [`Graph`], an
//! indexed binary min-heap [`PriorityQueue`] with O(log n) decrease-key, and
//! the two shortest-path algorithms built on them — [`floyd_warshall`]
//! all-pairs distances and [`dijkstra`] single-source trees over unit-cost
//! edges.
//!
//! ## Design Philosophy
//!
//! - **Values, not ambience** - graphs and queues are plain owned values
//!   passed into every call; there is no shared global instance
//! - **Errors, not aborts** - misuse (unknown vertices, duplicate pushes,
//!   empty pops) is a typed [`Error`], so failure paths are testable
//! - **Sentinels for absence** - an unreachable pair is [`INFINITY`], not an
//!   error; callers check the sentinel before trusting a distance
//! - **Single-threaded by contract** - every operation runs to completion
//!   without I/O, blocking, or internal locking
//!
//! ## Quick Start
//!
//! ```
//! use reelgraph_core::{dijkstra, Graph};
//!
//! let mut g = Graph::new();
//! for v in 0..3 {
//!     g.add_vertex(v);
//! }
//! g.add_edge(&0, &1)?;
//! g.add_edge(&1, &2)?;
//!
//! let tree = dijkstra(&g, 0)?;
//! assert_eq!(tree.distance(2), Some(2));
//! assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
//! # Ok::<(), reelgraph_core::Error>(())
//! ```

mod algo;
mod error;
mod graph;
mod queue;

pub use algo::{
    DenseIndex, INFINITY, ShortestPathTree, adjacency_matrix, dijkstra, floyd_warshall,
};
pub use error::{Error, Result};
pub use graph::Graph;
pub use queue::PriorityQueue;
