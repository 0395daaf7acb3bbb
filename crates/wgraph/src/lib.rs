//! Weighted graph representations and all-pairs shortest paths.
//!
//! This crate provides two interchangeable in-memory representations of a
//! weighted graph and the Floyd-Warshall algorithm on top of the dense one:
//!
//! - **MatrixGraph**: Dense adjacency matrix, at most one edge per ordered pair
//! - **ListGraph**: Adjacency list, parallel edges with distinct weights allowed
//! - **Floyd-Warshall**: O(n³) all-pairs shortest distances over a weight table
//!
//! Both graphs are generic over the vertex label (any [`Vertex`]) and the edge
//! weight (any [`Weight`], `f64` by default). Precondition violations such as a
//! duplicate vertex or a self-loop on an undirected graph never panic: the
//! operation leaves the graph untouched, logs a `tracing` warning and returns a
//! [`GraphError`].
//!
//! # Example
//!
//! ```
//! use wgraph::MatrixGraph;
//!
//! let mut graph: MatrixGraph<&str> = MatrixGraph::new(false);
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v).unwrap();
//! }
//! graph.add_edge(&"A", &"B", 1.0).unwrap();
//! graph.add_edge(&"B", &"C", 2.0).unwrap();
//! graph.add_edge(&"A", &"D", 10.0).unwrap();
//! graph.add_edge(&"C", &"D", 1.0).unwrap();
//!
//! let paths = graph.shortest_paths().unwrap();
//! assert_eq!(paths.distance(&"A", &"D"), Some(4.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod config;
pub mod models;

// Re-export main types
pub use algorithms::floyd_warshall::{floyd_warshall, DistanceTable, ShortestPaths};
pub use config::GraphConfig;
pub use models::list::ListGraph;
pub use models::matrix::MatrixGraph;
pub use models::vertex::{Vertex, Weight};

/// Graph error types.
///
/// Every variant describes a rejected operation; the graph it was raised
/// against is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Vertex is already part of the graph.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    /// Vertex is not part of the graph.
    #[error("Vertex {0} does not exist")]
    MissingVertex(String),

    /// Self-loop requested on an undirected graph.
    #[error("An undirected graph cannot have self-loops (vertex {0})")]
    InvalidSelfLoop(String),

    /// Identical (target, weight) edge already stored for the source.
    #[error("Edge ({from}, {to}, {weight}) already exists")]
    DuplicateEdge {
        /// Start vertex.
        from: String,
        /// End vertex.
        to: String,
        /// Edge weight.
        weight: String,
    },

    /// Weight table is not square.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Number of rows.
        expected: usize,
        /// Length of the first row that differs.
        actual: usize,
    },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
