//! Depth-first augmenting path search
//!
//! The search keeps an explicit stack of `(vertex, path_so_far)` entries.
//! A vertex is marked the moment it is pushed, so each vertex enters the
//! stack at most once. Neighbours are examined from the highest index to
//! the lowest, which fixes which path is returned when several exist.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::trace;

use super::{AugmentingPathFinder, Path, SearchOutcome};
use crate::algorithm::traits::VertexId;
use crate::data_structures::residual::ResidualGraph;

/// Depth-first path finder (classic Ford-Fulkerson)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirstSearch;

impl AugmentingPathFinder for DepthFirstSearch {
    fn search(&self, residual: &ResidualGraph, source: VertexId, target: VertexId) -> SearchOutcome {
        if !residual.contains(source) || !residual.contains(target) {
            return SearchOutcome { path: None, vertices_explored: 0 };
        }

        let n = residual.vertex_count();
        let mut marked = vec![false; n];
        let mut stack: Vec<(VertexId, Path)> = vec![(source, vec![source])];
        let mut vertices_explored = 0;
        marked[source] = true;

        while let Some((u, path_to_u)) = stack.pop() {
            vertices_explored += 1;
            if u == target {
                trace!("DFS reached {} after exploring {} vertices", target, vertices_explored);
                return SearchOutcome { path: Some(path_to_u), vertices_explored };
            }

            for v in (0..n).rev() {
                if residual.is_open(u, v) && !marked[v] {
                    marked[v] = true;
                    let mut path_to_v = Vec::with_capacity(path_to_u.len() + 1);
                    path_to_v.extend_from_slice(&path_to_u);
                    path_to_v.push(v);
                    stack.push((v, path_to_v));
                }
            }
        }

        SearchOutcome { path: None, vertices_explored }
    }
}

/// Any path from `source` to `target` in the residual graph
pub fn find_path(residual: &ResidualGraph, source: VertexId, target: VertexId) -> Option<Path> {
    DepthFirstSearch.search(residual, source, target).path
}
