//! Floyd-Warshall all-pairs shortest paths.
//!
//! Works on a dense weight table where `W::ZERO` means "no edge". Before
//! relaxation every off-diagonal zero becomes `W::INFINITY` and the diagonal
//! becomes zero. A genuine zero-weight edge is therefore read as a missing
//! edge; callers must not use weight 0 for a real edge.
//!
//! Legs are summed with [`Weight::relax_add`], so integer tables never
//! overflow: sums saturate and a finite pair never turns into the unreachable
//! sentinel.
//!
//! Negative cycles are not detected. They yield well-defined but meaningless
//! distances (saturated at `MIN` for integers).

use crate::models::{Vertex, Weight};
use crate::{GraphError, Result};

/// Floyd-Warshall over a square weight table.
///
/// Takes the table by value and relaxes it in place; pass a clone (see
/// [`MatrixGraph::to_weight_table`](crate::MatrixGraph::to_weight_table)) to
/// keep the original.
///
/// Time: O(n³), Memory: O(n²) (no extra allocation).
///
/// # Errors
///
/// [`GraphError::DimensionMismatch`] if some row length differs from the
/// number of rows.
pub fn floyd_warshall<W: Weight>(mut table: Vec<Vec<W>>) -> Result<DistanceTable<W>> {
    let n = table.len();
    if let Some(row) = table.iter().find(|row| row.len() != n) {
        return Err(GraphError::DimensionMismatch {
            expected: n,
            actual: row.len(),
        });
    }

    tracing::debug!(vertices = n, "Running Floyd-Warshall");

    for (i, row) in table.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            if i == j {
                *cell = W::ZERO;
            } else if cell.is_zero() {
                *cell = W::INFINITY;
            }
        }
    }

    // k must stay outermost
    for k in 0..n {
        for i in 0..n {
            let d_ik = table[i][k];
            if d_ik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let d_kj = table[k][j];
                if d_kj.is_infinite() {
                    continue;
                }
                let through_k = d_ik.relax_add(d_kj);
                if through_k < table[i][j] {
                    table[i][j] = through_k;
                }
            }
        }
    }

    Ok(DistanceTable { distances: table })
}

/// All-pairs distance table produced by [`floyd_warshall`].
///
/// `distances[i][j]` is the shortest distance from vertex i to vertex j, or
/// `W::INFINITY` if j is unreachable from i.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<W: Weight> {
    distances: Vec<Vec<W>>,
}

impl<W: Weight> DistanceTable<W> {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance from i to j (`W::INFINITY` if unreachable).
    ///
    /// Returns `None` if an index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        self.distances.get(i)?.get(j).copied()
    }

    /// Check if j is reachable from i.
    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_some_and(|d| !d.is_infinite())
    }

    /// Rows of the table.
    pub fn rows(&self) -> &[Vec<W>] {
        &self.distances
    }

    /// Unwrap into the raw table.
    pub fn into_inner(self) -> Vec<Vec<W>> {
        self.distances
    }
}

/// Distance table labelled with the vertices of the graph it came from.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, V: Vertex, W: Weight> {
    vertices: &'g [V],
    table: DistanceTable<W>,
}

impl<'g, V: Vertex, W: Weight> ShortestPaths<'g, V, W> {
    /// Label `table` with `vertices`, `vertices[i]` owning row and column i.
    pub fn new(vertices: &'g [V], table: DistanceTable<W>) -> Self {
        Self { vertices, table }
    }

    /// Shortest distance between two labelled vertices.
    ///
    /// Returns `None` if either vertex is unknown or `to` is unreachable.
    pub fn distance(&self, from: &V, to: &V) -> Option<W> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        self.table.get(i, j).filter(|d| !d.is_infinite())
    }

    /// Distances from one vertex to every other vertex, in vertex order.
    ///
    /// Unreachable targets carry `None`. Empty if `from` is unknown.
    pub fn distances_from<'a>(
        &'a self,
        from: &V,
    ) -> impl Iterator<Item = (&'g V, Option<W>)> + 'a {
        let source = self.position(from);
        let vertices = self.vertices;
        source
            .into_iter()
            .flat_map(move |i| {
                vertices
                    .iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != i)
                    .map(move |(j, v)| (v, self.table.get(i, j)))
            })
            .map(|(v, d)| (v, d.filter(|d| !d.is_infinite())))
    }

    /// The underlying distance table.
    pub fn table(&self) -> &DistanceTable<W> {
        &self.table
    }

    fn position(&self, v: &V) -> Option<usize> {
        self.vertices.iter().position(|x| x == v)
    }
}
