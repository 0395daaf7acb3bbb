//! Graph algorithms.
//!
//! This module provides shortest-path algorithms over weight tables:
//! - [`floyd_warshall`]: All-pairs shortest distances

pub mod floyd_warshall;

pub use floyd_warshall::{floyd_warshall, DistanceTable, ShortestPaths};
