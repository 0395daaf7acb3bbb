//! Graph data models.
//!
//! This module provides the two graph representations and the traits they
//! are generic over:
//! - [`MatrixGraph`]: Dense adjacency matrix
//! - [`ListGraph`]: Adjacency list with parallel edges
//! - [`Vertex`], [`Weight`]: Vertex label and edge weight traits

pub mod list;
pub mod matrix;
pub mod vertex;

pub use list::ListGraph;
pub use matrix::MatrixGraph;
pub use vertex::{Vertex, Weight};
