//! Adjacency-list weighted graph.
//!
//! Each vertex maps to the ordered list of `(target, weight)` tuples leaving
//! it. The key set of the map is the vertex set. Undirected graphs store every
//! edge twice, once from each endpoint.
//!
//! Unlike [`MatrixGraph`](crate::MatrixGraph), parallel edges between the
//! same pair are allowed as long as their weights differ.

use std::fmt;

use indexmap::IndexMap;

use super::vertex::{Vertex, Weight};
use crate::config::GraphConfig;
use crate::{GraphError, Result};

/// Weighted graph backed by an adjacency list.
#[derive(Debug, Clone)]
pub struct ListGraph<V: Vertex, W: Weight = f64> {
    directed: bool,
    adjacency: IndexMap<V, Vec<(V, W)>>,
}

impl<V: Vertex, W: Weight> ListGraph<V, W> {
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
            adjacency: IndexMap::with_capacity(config.vertex_capacity),
        }
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Remove every vertex and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Number of vertices.
    pub fn number_of_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if a vertex is part of the graph.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// All edges as `(source, target, weight)`.
    ///
    /// Directed graphs list every stored tuple. Undirected graphs list each
    /// edge once, from the endpoint that was visited first.
    pub fn edges(&self) -> Vec<(V, V, W)> {
        let mut edges: Vec<(V, V, W)> = Vec::new();
        for (v, list) in &self.adjacency {
            for (target, weight) in list {
                if !self.directed
                    && edges
                        .iter()
                        .any(|(s, t, w)| s == target && t == v && w == weight)
                {
                    continue;
                }
                edges.push((v.clone(), target.clone(), *weight));
            }
        }
        edges
    }

    /// Add a vertex with no edges.
    pub fn add_vertex(&mut self, v: V) -> Result<()> {
        if self.adjacency.contains_key(&v) {
            tracing::warn!(vertex = ?v, "Vertex already exists");
            return Err(GraphError::DuplicateVertex(format!("{:?}", v)));
        }
        tracing::trace!(vertex = ?v, "Vertex added");
        self.adjacency.insert(v, Vec::new());
        Ok(())
    }

    /// Remove a vertex together with every edge pointing at it.
    pub fn remove_vertex(&mut self, v: &V) -> Result<()> {
        if self.adjacency.shift_remove(v).is_none() {
            tracing::warn!(vertex = ?v, "Vertex is not in graph");
            return Err(GraphError::MissingVertex(format!("{:?}", v)));
        }
        for list in self.adjacency.values_mut() {
            list.retain(|(target, _)| target != v);
        }
        tracing::trace!(vertex = ?v, "Vertex removed");
        Ok(())
    }

    /// Add the edge v1 -> v2 (mirrored as v2 -> v1 when undirected).
    ///
    /// Rejected if v1 already holds an identical `(v2, weight)` tuple.
    pub fn add_edge(&mut self, v1: &V, v2: &V, weight: W) -> Result<()> {
        self.require_vertex(v1)?;
        self.require_vertex(v2)?;
        if !self.directed && v1 == v2 {
            tracing::warn!(vertex = ?v1, "An undirected graph cannot have self-loops");
            return Err(GraphError::InvalidSelfLoop(format!("{:?}", v1)));
        }
        if self.adjacency[v1]
            .iter()
            .any(|(target, w)| target == v2 && *w == weight)
        {
            tracing::warn!(from = ?v1, to = ?v2, %weight, "Edge already exists");
            return Err(GraphError::DuplicateEdge {
                from: format!("{:?}", v1),
                to: format!("{:?}", v2),
                weight: weight.to_string(),
            });
        }

        if let Some(list) = self.adjacency.get_mut(v1) {
            list.push((v2.clone(), weight));
        }
        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(v2) {
                list.push((v1.clone(), weight));
            }
        }
        tracing::trace!(from = ?v1, to = ?v2, %weight, "Edge added");
        Ok(())
    }

    /// Remove the edge v1 -> v2 with exactly this weight (and its mirror when
    /// undirected).
    ///
    /// Returns `Ok(false)` without touching the graph if no such edge exists.
    pub fn remove_edge(&mut self, v1: &V, v2: &V, weight: W) -> Result<bool> {
        self.require_vertex(v1)?;
        self.require_vertex(v2)?;

        let removed = self
            .adjacency
            .get_mut(v1)
            .is_some_and(|list| remove_first(list, v2, weight));
        if removed && !self.directed {
            if let Some(list) = self.adjacency.get_mut(v2) {
                remove_first(list, v1, weight);
            }
        }
        if removed {
            tracing::trace!(from = ?v1, to = ?v2, %weight, "Edge removed");
        }
        Ok(removed)
    }

    /// The `(target, weight)` tuples leaving v, in insertion order.
    pub fn adjacent_vertices(&self, v: &V) -> Result<&[(V, W)]> {
        self.require_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Check if some edge leads from v1 to v2.
    pub fn is_adjacent(&self, v1: &V, v2: &V) -> Result<bool> {
        self.require_vertex(v1)?;
        self.require_vertex(v2)?;
        Ok(self.adjacency[v1].iter().any(|(target, _)| target == v2))
    }

    fn require_vertex(&self, v: &V) -> Result<()> {
        if self.adjacency.contains_key(v) {
            Ok(())
        } else {
            tracing::warn!(vertex = ?v, "Vertex does not exist");
            Err(GraphError::MissingVertex(format!("{:?}", v)))
        }
    }
}

fn remove_first<V: Vertex, W: Weight>(list: &mut Vec<(V, W)>, target: &V, weight: W) -> bool {
    match list.iter().position(|(t, w)| t == target && *w == weight) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

impl<V: Vertex + fmt::Display, W: Weight> fmt::Display for ListGraph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, list) in &self.adjacency {
            for (target, weight) in list {
                writeln!(f, "{} -> {} edge weight: {}", v, target, weight)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(directed: bool, vertices: &[&'static str]) -> ListGraph<&'static str> {
        let mut graph = ListGraph::new(directed);
        for &v in vertices {
            graph.add_vertex(v).unwrap();
        }
        graph
    }

    #[test]
    fn test_add_vertex() {
        let mut g = graph(false, &["A", "B"]);
        assert_eq!(g.number_of_vertices(), 2);
        assert_eq!(g.vertices(), vec!["A", "B"]);
        assert!(g.adjacent_vertices(&"A").unwrap().is_empty());

        let err = g.add_vertex("A").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateVertex(_)));
        assert_eq!(g.number_of_vertices(), 2);
    }

    #[test]
    fn test_undirected_edge_is_mirrored() {
        let mut g = graph(false, &["A", "B"]);
        g.add_edge(&"A", &"B", 4.0).unwrap();

        assert_eq!(g.adjacent_vertices(&"A").unwrap(), &[("B", 4.0)]);
        assert_eq!(g.adjacent_vertices(&"B").unwrap(), &[("A", 4.0)]);
    }

    #[test]
    fn test_parallel_edges_with_distinct_weights() {
        let mut g = graph(true, &["A", "B"]);
        g.add_edge(&"A", &"B", 1.0).unwrap();
        g.add_edge(&"A", &"B", 2.0).unwrap();

        assert_eq!(g.adjacent_vertices(&"A").unwrap(), &[("B", 1.0), ("B", 2.0)]);
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut g = graph(false, &["A", "B"]);
        g.add_edge(&"A", &"B", 1.0).unwrap();

        let err = g.add_edge(&"A", &"B", 1.0).unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateEdge {
                from: "\"A\"".to_string(),
                to: "\"B\"".to_string(),
                weight: "1".to_string(),
            }
        );
        // The mirrored tuple counts as a duplicate too
        assert!(g.add_edge(&"B", &"A", 1.0).is_err());
        assert_eq!(g.adjacent_vertices(&"A").unwrap().len(), 1);
        assert_eq!(g.adjacent_vertices(&"B").unwrap().len(), 1);
    }

    #[test]
    fn test_self_loops() {
        let mut undirected = graph(false, &["A"]);
        let err = undirected.add_edge(&"A", &"A", 1.0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidSelfLoop(_)));
        assert!(undirected.adjacent_vertices(&"A").unwrap().is_empty());

        let mut directed = graph(true, &["A"]);
        directed.add_edge(&"A", &"A", 1.0).unwrap();
        assert!(directed.is_adjacent(&"A", &"A").unwrap());
        assert_eq!(directed.edges(), vec![("A", "A", 1.0)]);
    }

    #[test]
    fn test_missing_vertex() {
        let mut g = graph(false, &["A"]);
        assert!(matches!(
            g.add_edge(&"A", &"Z", 1.0),
            Err(GraphError::MissingVertex(_))
        ));
        assert!(matches!(
            g.remove_edge(&"Z", &"A", 1.0),
            Err(GraphError::MissingVertex(_))
        ));
        assert!(g.adjacent_vertices(&"Z").is_err());
        assert!(!g.is_adjacent(&"A", &"Z").unwrap_or_default());
        assert!(g.remove_vertex(&"Z").is_err());
    }

    #[test]
    fn test_remove_edge() {
        let mut g = graph(false, &["A", "B"]);
        g.add_edge(&"A", &"B", 3.0).unwrap();

        assert!(!g.remove_edge(&"A", &"B", 9.0).unwrap());
        assert_eq!(g.adjacent_vertices(&"A").unwrap().len(), 1);

        assert!(g.remove_edge(&"B", &"A", 3.0).unwrap());
        assert!(g.adjacent_vertices(&"A").unwrap().is_empty());
        assert!(g.adjacent_vertices(&"B").unwrap().is_empty());
    }

    #[test]
    fn test_remove_directed_self_loop() {
        let mut g = graph(true, &["A"]);
        g.add_edge(&"A", &"A", 2.0).unwrap();
        assert!(g.remove_edge(&"A", &"A", 2.0).unwrap());
        assert!(g.adjacent_vertices(&"A").unwrap().is_empty());
    }

    #[test]
    fn test_remove_vertex_strips_incoming_edges() {
        let mut g = graph(true, &["A", "B", "C"]);
        g.add_edge(&"A", &"B", 1.0).unwrap();
        g.add_edge(&"C", &"B", 2.0).unwrap();
        g.add_edge(&"C", &"A", 3.0).unwrap();

        g.remove_vertex(&"B").unwrap();
        assert_eq!(g.vertices(), vec!["A", "C"]);
        assert!(g.adjacent_vertices(&"A").unwrap().is_empty());
        assert_eq!(g.adjacent_vertices(&"C").unwrap(), &[("A", 3.0)]);
    }

    #[test]
    fn test_edges_deduplicates_undirected() {
        let mut g = graph(false, &["A", "B", "C"]);
        g.add_edge(&"A", &"B", 1.0).unwrap();
        g.add_edge(&"B", &"C", 2.0).unwrap();
        g.add_edge(&"A", &"B", 5.0).unwrap();

        assert_eq!(
            g.edges(),
            vec![("A", "B", 1.0), ("A", "B", 5.0), ("B", "C", 2.0)]
        );
    }

    #[test]
    fn test_edges_directed_lists_everything() {
        let mut g = graph(true, &["A", "B"]);
        g.add_edge(&"A", &"B", 1.0).unwrap();
        g.add_edge(&"B", &"A", 1.0).unwrap();

        assert_eq!(g.edges(), vec![("A", "B", 1.0), ("B", "A", 1.0)]);
    }

    #[test]
    fn test_clear() {
        let mut g = graph(false, &["A", "B"]);
        g.add_edge(&"A", &"B", 1.0).unwrap();
        g.clear();

        assert_eq!(g.number_of_vertices(), 0);
        assert!(g.edges().is_empty());
        assert!(!g.is_directed());
    }

    #[test]
    fn test_display() {
        let mut g = graph(false, &["A", "B"]);
        g.add_edge(&"A", &"B", 2.5).unwrap();

        assert_eq!(
            g.to_string(),
            "A -> B edge weight: 2.5\nB -> A edge weight: 2.5\n"
        );
    }
}
