//! Graph construction configuration.

/// Configuration shared by [`MatrixGraph`](crate::MatrixGraph) and
/// [`ListGraph`](crate::ListGraph).
///
/// The `directed` flag is read once at construction and is fixed for the
/// lifetime of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether an edge (v1, v2) is one-way.
    pub directed: bool,
    /// Number of vertices to reserve space for up front.
    pub vertex_capacity: usize,
}

impl GraphConfig {
    /// Create new graph configuration (undirected, no reserved capacity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build directed graphs.
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Build undirected graphs.
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    /// Reserve space for `capacity` vertices.
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undirected() {
        let config = GraphConfig::default();
        assert!(!config.directed);
        assert_eq!(config.vertex_capacity, 0);
    }

    #[test]
    fn test_builder() {
        let config = GraphConfig::new().directed().with_vertex_capacity(16);
        assert!(config.directed);
        assert_eq!(config.vertex_capacity, 16);

        let config = config.undirected();
        assert!(!config.directed);
    }
}
