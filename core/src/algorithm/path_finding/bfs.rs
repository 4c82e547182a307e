//! Breadth-first augmenting path search (Edmonds-Karp)
//!
//! Always returns a path with the fewest edges, which bounds the number of
//! augmentations by O(VE) regardless of capacities.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;

use log::trace;

use super::{AugmentingPathFinder, Path, SearchOutcome};
use crate::algorithm::traits::VertexId;
use crate::data_structures::residual::ResidualGraph;

/// Shortest augmenting path finder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    fn reconstruct_path(parents: &[Option<VertexId>], source: VertexId, target: VertexId) -> Path {
        let mut path = vec![target];
        let mut current = target;

        while current != source {
            match parents[current] {
                Some(parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}

impl AugmentingPathFinder for BreadthFirstSearch {
    fn search(&self, residual: &ResidualGraph, source: VertexId, target: VertexId) -> SearchOutcome {
        if !residual.contains(source) || !residual.contains(target) {
            return SearchOutcome { path: None, vertices_explored: 0 };
        }

        let n = residual.vertex_count();
        let mut marked = vec![false; n];
        let mut parents: Vec<Option<VertexId>> = vec![None; n];
        let mut queue = VecDeque::from([source]);
        let mut vertices_explored = 0;
        marked[source] = true;

        while let Some(u) = queue.pop_front() {
            vertices_explored += 1;
            if u == target {
                trace!("BFS reached {} after exploring {} vertices", target, vertices_explored);
                let path = Self::reconstruct_path(&parents, source, target);
                return SearchOutcome { path: Some(path), vertices_explored };
            }

            for v in (0..n).rev() {
                if residual.is_open(u, v) && !marked[v] {
                    marked[v] = true;
                    parents[v] = Some(u);
                    queue.push_back(v);
                }
            }
        }

        SearchOutcome { path: None, vertices_explored }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::CapacityMatrix;

    fn residual(rows: Vec<Vec<i64>>) -> ResidualGraph {
        ResidualGraph::new(&CapacityMatrix::from_rows(rows).unwrap())
    }

    #[test]
    fn test_finds_fewest_edge_path() {
        // Long route 0 -> 1 -> 2 -> 4 and short route 0 -> 3 -> 4
        let graph = residual(vec![
            vec![0, 9, 0, 1, 0],
            vec![0, 0, 9, 0, 0],
            vec![0, 0, 0, 0, 9],
            vec![0, 0, 0, 0, 1],
            vec![0, 0, 0, 0, 0],
        ]);
        let outcome = BreadthFirstSearch.search(&graph, 0, 4);
        assert_eq!(outcome.path, Some(vec![0, 3, 4]));
    }

    #[test]
    fn test_ties_break_towards_highest_vertex() {
        let graph = residual(vec![
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ]);
        let outcome = BreadthFirstSearch.search(&graph, 0, 3);
        assert_eq!(outcome.path, Some(vec![0, 2, 3]));
    }

    #[test]
    fn test_unreachable_target() {
        let graph = residual(vec![vec![0, 0], vec![1, 0]]);
        assert_eq!(BreadthFirstSearch.search(&graph, 0, 1).path, None);
    }

    #[test]
    fn test_source_is_target() {
        let graph = residual(vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(BreadthFirstSearch.search(&graph, 0, 0).path, Some(vec![0]));
    }
}
