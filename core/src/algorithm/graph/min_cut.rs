//! Minimum cut extraction from a saturated residual graph
//!
//! Once no augmenting path remains, the vertices still reachable from the
//! source through strictly positive residual capacity form the source side
//! of a minimum cut. The cut itself is every original edge leaving that
//! side, and its total capacity equals the maximum flow.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeSet;

use crate::algorithm::traits::{Capacity, VertexId};
use crate::data_structures::graph::CapacityMatrix;
use crate::data_structures::residual::ResidualGraph;

/// Directed edge `(from, to)` of the original graph
pub type CutEdge = (VertexId, VertexId);

/// Vertices reachable from `source` over edges with positive residual
/// capacity. Always contains `source`.
pub fn reachable_from(residual: &ResidualGraph, source: VertexId) -> BTreeSet<VertexId> {
    let n = residual.vertex_count();
    let mut reachable = BTreeSet::from([source]);
    let mut stack = vec![source];

    while let Some(u) = stack.pop() {
        for v in 0..n {
            if residual.has_capacity(u, v) && reachable.insert(v) {
                stack.push(v);
            }
        }
    }

    reachable
}

/// Original edges leaving the reachable set, in row-major order
pub fn extract_cut(graph: &CapacityMatrix, reachable: &BTreeSet<VertexId>) -> Vec<CutEdge> {
    graph
        .edges()
        .filter(|(from, to, _)| reachable.contains(from) && !reachable.contains(to))
        .map(|(from, to, _)| (from, to))
        .collect()
}

/// Sum of the original capacities of `cut`, saturating at `Capacity::MAX`
pub fn cut_capacity(graph: &CapacityMatrix, cut: &[CutEdge]) -> Capacity {
    cut.iter()
        .map(|&(from, to)| graph.capacity(from, to))
        .fold(0, Capacity::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> CapacityMatrix {
        CapacityMatrix::from_rows(vec![
            vec![0, 3, 2, 0],
            vec![0, 0, 0, 4],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_reachable_includes_source_only_when_isolated() {
        let graph = CapacityMatrix::from_rows(vec![vec![0, 0], vec![5, 0]]).unwrap();
        let residual = ResidualGraph::new(&graph);
        assert_eq!(reachable_from(&residual, 0), BTreeSet::from([0]));
    }

    #[test]
    fn test_reachable_follows_positive_residuals() {
        let graph = graph();
        let mut residual = ResidualGraph::new(&graph);
        residual.augment(&[0, 2, 3], 1);

        // 2 -> 3 is saturated but 2 -> 0 now carries reverse capacity
        assert_eq!(reachable_from(&residual, 0), BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(reachable_from(&residual, 2), BTreeSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_extract_cut_row_major() {
        let graph = graph();
        let reachable = BTreeSet::from([0, 2]);
        let cut = extract_cut(&graph, &reachable);

        assert_eq!(cut, vec![(0, 1), (2, 3)]);
        assert_eq!(cut_capacity(&graph, &cut), 4);
    }

    #[test]
    fn test_cut_capacity_saturates() {
        let max = Capacity::MAX;
        let graph = CapacityMatrix::from_rows(vec![
            vec![0, max, max],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();

        assert_eq!(cut_capacity(&graph, &[(0, 1), (0, 2)]), max);
    }

    #[test]
    fn test_extract_cut_is_repeatable() {
        let graph = graph();
        let residual = ResidualGraph::new(&graph);
        let reachable = reachable_from(&residual, 1);

        let first = extract_cut(&graph, &reachable);
        let second = extract_cut(&graph, &reachable);
        assert_eq!(first, second);
        assert_eq!(first, Vec::new());
    }
}
