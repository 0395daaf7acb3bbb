//! Fuzz target for graph mutation sequences.
//!
//! Drives random operation sequences against both graph representations and
//! checks the structural invariants after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wgraph::{floyd_warshall, ListGraph, MatrixGraph};

/// Operations applied to both graphs.
#[derive(Debug, Arbitrary)]
enum GraphOp {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge { from: u8, to: u8, weight: i16 },
    RemoveEdge { from: u8, to: u8, weight: i16 },
    ShortestPaths,
}

/// Fuzz input: graph kind and operation sequence.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    directed: bool,
    ops: Vec<GraphOp>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit operations
    if input.ops.len() > 256 {
        return;
    }

    let mut matrix: MatrixGraph<u8, i64> = MatrixGraph::new(input.directed);
    let mut list: ListGraph<u8, i64> = ListGraph::new(input.directed);

    for op in &input.ops {
        match *op {
            GraphOp::AddVertex(v) => {
                let _ = matrix.add_vertex(v % 32);
                let _ = list.add_vertex(v % 32);
            }
            GraphOp::RemoveVertex(v) => {
                let _ = list.remove_vertex(&(v % 32));
            }
            GraphOp::AddEdge { from, to, weight } => {
                let (from, to, weight) = (from % 32, to % 32, i64::from(weight));
                let before = matrix.to_weight_table();
                if matrix.add_edge(&from, &to, weight).is_err() {
                    assert_eq!(matrix.to_weight_table(), before);
                }
                let _ = list.add_edge(&from, &to, weight);
            }
            GraphOp::RemoveEdge { from, to, weight } => {
                let _ = list.remove_edge(&(from % 32), &(to % 32), i64::from(weight));
            }
            GraphOp::ShortestPaths => {
                let table = floyd_warshall(matrix.to_weight_table())
                    .expect("matrix graph tables are always square");
                assert_eq!(table.len(), matrix.number_of_vertices());
            }
        }

        // Matrix stays square and, when undirected, symmetric with an empty diagonal
        let n = matrix.number_of_vertices();
        let weights = matrix.weights();
        assert_eq!(weights.len(), n);
        for (i, row) in weights.iter().enumerate() {
            assert_eq!(row.len(), n);
            if !matrix.is_directed() {
                assert_eq!(row[i], 0);
                for (j, w) in row.iter().enumerate() {
                    assert_eq!(*w, weights[j][i]);
                }
            }
        }

        // List never points at a vertex it does not hold, and mirrors undirected edges
        for v in list.vertices() {
            for (target, weight) in list.adjacent_vertices(&v).unwrap() {
                assert!(list.contains_vertex(target));
                if !list.is_directed() {
                    assert_ne!(*target, v);
                    let back = list.adjacent_vertices(target).unwrap();
                    assert!(back.contains(&(v, *weight)));
                }
            }
        }
    }
});
