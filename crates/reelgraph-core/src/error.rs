//! Error types for reelgraph-core operations.
//!
//! Two families of failure exist in this crate:
//!
//! - **Invalid reference**: an operation named a vertex or queue element
//!   that is not present in the structure.
//! - **Precondition violation**: an operation was called in a state where
//!   its contract does not hold (duplicate push, pop on an empty queue).
//!
//! Both surface immediately as an error at the call site; nothing in this
//! crate recovers internally or retries. Unreachable vertex pairs are *not*
//! errors — they are reported through the [`INFINITY`](crate::INFINITY)
//! distance sentinel instead.

use thiserror::Error;

/// The error type for graph and priority queue operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operation referenced a vertex that is not in the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// A dense-id algorithm was given a graph whose vertex ids do not form
    /// the contiguous range `0..n`.
    #[error("vertex id {id} is outside the dense range 0..{len}")]
    NonDenseVertex {
        /// The offending vertex id.
        id: usize,
        /// The number of vertices in the graph.
        len: usize,
    },

    /// `push` was called with an element that is already in the queue.
    #[error("element {0} is already present in the queue")]
    DuplicateElement(usize),

    /// Operation referenced a queue element that is not present.
    #[error("element {0} is not present in the queue")]
    UnknownElement(usize),

    /// `pop` or a peek operation was called on an empty queue.
    #[error("priority queue is empty")]
    EmptyQueue,
}

/// A specialized Result type for reelgraph-core operations.
pub type Result<T> = std::result::Result<T, Error>;
