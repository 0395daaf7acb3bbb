//! Adjacency-matrix weighted graph.
//!
//! Memory layout:
//! - `vertices[i]` = label of the vertex owning row and column `i`
//! - `weights[i][j]` = weight of the edge i -> j, `W::ZERO` when absent
//!
//! The table is always `n x n` for `n` vertices. Undirected graphs keep it
//! symmetric and never write the diagonal.

use std::collections::HashMap;

use super::vertex::{Vertex, Weight};
use crate::algorithms::floyd_warshall::{floyd_warshall, ShortestPaths};
use crate::config::GraphConfig;
use crate::{GraphError, Result};

/// Weighted graph backed by a dense adjacency matrix.
///
/// At most one edge exists per ordered pair; adding a second one overwrites
/// the first.
#[derive(Debug, Clone)]
pub struct MatrixGraph<V: Vertex, W: Weight = f64> {
    directed: bool,
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    weights: Vec<Vec<W>>,
}

impl<V: Vertex, W: Weight> MatrixGraph<V, W> {
    /// Create an empty graph.
    pub fn new(directed: bool) -> Self {
        Self::with_config(&GraphConfig {
            directed,
            ..GraphConfig::default()
        })
    }

    /// Create an empty graph from configuration.
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            directed: config.directed,
            vertices: Vec::with_capacity(config.vertex_capacity),
            index: HashMap::with_capacity(config.vertex_capacity),
            weights: Vec::with_capacity(config.vertex_capacity),
        }
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Vertices in matrix index order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Matrix index of a vertex.
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// The weight table, `weights()[i][j]` being the edge i -> j.
    pub fn weights(&self) -> &[Vec<W>] {
        &self.weights
    }

    /// Owned copy of the weight table, ready to hand to
    /// [`floyd_warshall`].
    pub fn to_weight_table(&self) -> Vec<Vec<W>> {
        self.weights.clone()
    }

    /// Stored weight of v1 -> v2 (`W::ZERO` if there is no edge).
    ///
    /// Returns `None` if either vertex is absent.
    pub fn weight(&self, v1: &V, v2: &V) -> Option<W> {
        let i = self.index_of(v1)?;
        let j = self.index_of(v2)?;
        Some(self.weights[i][j])
    }

    /// Add a vertex.
    ///
    /// Grows every existing row by one zero column and appends a zero row,
    /// so the table stays square.
    pub fn add_vertex(&mut self, v: V) -> Result<()> {
        if self.index.contains_key(&v) {
            tracing::warn!(vertex = ?v, "Vertex already exists");
            return Err(GraphError::DuplicateVertex(format!("{:?}", v)));
        }

        let n = self.vertices.len() + 1;
        for row in &mut self.weights {
            row.push(W::ZERO);
        }
        self.weights.push(vec![W::ZERO; n]);

        tracing::trace!(vertex = ?v, index = n - 1, "Vertex added");
        self.index.insert(v.clone(), n - 1);
        self.vertices.push(v);
        Ok(())
    }

    /// Add or overwrite the edge v1 -> v2 (and v2 -> v1 when undirected).
    ///
    /// A weight of `W::ZERO` is stored as-is, which makes it
    /// indistinguishable from "no edge" once the table is passed to
    /// [`floyd_warshall`].
    pub fn add_edge(&mut self, v1: &V, v2: &V, weight: W) -> Result<()> {
        let (i, j) = self.edge_indices(v1, v2)?;

        self.weights[i][j] = weight;
        if !self.directed {
            self.weights[j][i] = weight;
        }

        tracing::trace!(from = ?v1, to = ?v2, %weight, "Edge set");
        Ok(())
    }

    /// Run Floyd-Warshall on a copy of the weight table.
    ///
    /// The graph itself is left untouched.
    pub fn shortest_paths(&self) -> Result<ShortestPaths<'_, V, W>> {
        let table = floyd_warshall(self.to_weight_table())?;
        Ok(ShortestPaths::new(&self.vertices, table))
    }

    /// Resolve both endpoints and reject undirected self-loops.
    fn edge_indices(&self, v1: &V, v2: &V) -> Result<(usize, usize)> {
        let Some(i) = self.index_of(v1) else {
            tracing::warn!(vertex = ?v1, "Vertex does not exist");
            return Err(GraphError::MissingVertex(format!("{:?}", v1)));
        };
        let Some(j) = self.index_of(v2) else {
            tracing::warn!(vertex = ?v2, "Vertex does not exist");
            return Err(GraphError::MissingVertex(format!("{:?}", v2)));
        };
        if !self.directed && i == j {
            tracing::warn!(vertex = ?v1, "An undirected graph cannot have self-loops");
            return Err(GraphError::InvalidSelfLoop(format!("{:?}", v1)));
        }
        Ok((i, j))
    }
}
