//! Correctness verification for flow results
//!
//! Checks a computed [`MaxFlowResult`] against the original graph using the
//! flow decomposition recorded by the solver:
//!
//! - **Duality**: the cut capacity equals the flow value
//! - **Separation**: the target lies outside the source side of the cut
//! - **Capacity**: net flow on every edge stays within its capacity
//! - **Conservation**: every vertex other than source and target has zero
//!   net outflow; the source emits and the target absorbs exactly the flow
//!   value

use crate::algorithm::graph::max_flow::{FlowPath, MaxFlowResult};
use crate::algorithm::traits::{Capacity, FlowError, VertexId};
use crate::data_structures::graph::CapacityMatrix;

/// Net flow matrix (row-major, antisymmetric) induced by `flow_paths`
///
/// Entries saturate at the bounds of `Capacity`; a saturated entry then
/// fails [`verify_capacity`].
pub fn net_flow(vertex_count: usize, flow_paths: &[FlowPath]) -> Vec<Capacity> {
    let mut net = vec![0 as Capacity; vertex_count * vertex_count];

    for path in flow_paths {
        for edge in path.vertices.windows(2) {
            let (u, v) = (edge[0], edge[1]);
            let forward = &mut net[u * vertex_count + v];
            *forward = forward.saturating_add(path.flow);
            let reverse = &mut net[v * vertex_count + u];
            *reverse = reverse.saturating_sub(path.flow);
        }
    }

    net
}

/// Cut capacity must equal the flow value
pub fn verify_duality(graph: &CapacityMatrix, result: &MaxFlowResult) -> Result<(), FlowError> {
    let capacity = result.cut_capacity(graph);
    if capacity == result.max_flow {
        Ok(())
    } else {
        Err(FlowError::VerificationFailed(format!(
            "cut capacity {} differs from max flow {}",
            capacity, result.max_flow
        )))
    }
}

/// Target must not be on the source side unless it is the source
pub fn verify_separation(
    result: &MaxFlowResult,
    source: VertexId,
    target: VertexId,
) -> Result<(), FlowError> {
    if source != target && result.source_side.contains(&target) {
        return Err(FlowError::VerificationFailed(format!(
            "target {} still reachable from source {} after saturation",
            target, source
        )));
    }
    Ok(())
}

/// Net flow on every edge must not exceed its original capacity
pub fn verify_capacity(graph: &CapacityMatrix, net: &[Capacity]) -> Result<(), FlowError> {
    let n = graph.vertex_count();
    for (index, &flow) in net.iter().enumerate() {
        let (u, v) = (index / n, index % n);
        if flow > graph.capacity(u, v) {
            return Err(FlowError::VerificationFailed(format!(
                "net flow {} on edge {} -> {} exceeds capacity {}",
                flow,
                u,
                v,
                graph.capacity(u, v)
            )));
        }
    }
    Ok(())
}

/// Net outflow is zero at inner vertices and `max_flow` at the source
pub fn verify_conservation(
    vertex_count: usize,
    net: &[Capacity],
    source: VertexId,
    target: VertexId,
    max_flow: Capacity,
) -> Result<(), FlowError> {
    for (vertex, row) in net.chunks(vertex_count).enumerate() {
        // Partial sums of one row can leave `Capacity` even when the total fits
        let outflow: i128 = row.iter().map(|&flow| i128::from(flow)).sum();
        let expected = i128::from(if source == target {
            0
        } else if vertex == source {
            max_flow
        } else if vertex == target {
            -max_flow
        } else {
            0
        });

        if outflow != expected {
            return Err(FlowError::VerificationFailed(format!(
                "vertex {} has net outflow {}, expected {}",
                vertex, outflow, expected
            )));
        }
    }
    Ok(())
}

/// Run every check against `result`
pub fn verify_result(
    graph: &CapacityMatrix,
    source: VertexId,
    target: VertexId,
    result: &MaxFlowResult,
) -> Result<(), FlowError> {
    let net = net_flow(graph.vertex_count(), &result.flow_paths);

    verify_duality(graph, result)?;
    verify_separation(result, source, target)?;
    verify_capacity(graph, &net)?;
    verify_conservation(graph.vertex_count(), &net, source, target, result.max_flow)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::algorithm::traits::AlgorithmMetrics;

    fn graph() -> CapacityMatrix {
        CapacityMatrix::from_rows(vec![
            vec![0, 4, 3, 0],
            vec![0, 0, 1, 2],
            vec![0, 0, 0, 5],
            vec![0, 0, 0, 0],
        ])
        .unwrap()
    }

    fn result(max_flow: Capacity, min_cut: Vec<(VertexId, VertexId)>, paths: Vec<FlowPath>) -> MaxFlowResult {
        MaxFlowResult {
            max_flow,
            min_cut,
            source_side: BTreeSet::from([0]),
            flow_paths: paths,
            metrics: AlgorithmMetrics::default(),
        }
    }

    fn path(vertices: Vec<VertexId>, flow: Capacity) -> FlowPath {
        FlowPath { vertices, flow }
    }

    #[test]
    fn test_valid_result_passes() {
        let graph = graph();
        let valid = result(
            6,
            vec![(0, 2), (1, 2), (1, 3)],
            vec![path(vec![0, 1, 3], 2), path(vec![0, 2, 3], 3), path(vec![0, 1, 2, 3], 1)],
        );
        assert_eq!(verify_result(&graph, 0, 3, &valid), Ok(()));
    }

    #[test]
    fn test_duality_violation() {
        let graph = graph();
        let wrong = result(6, vec![(0, 1), (0, 2)], Vec::new());
        assert!(matches!(
            verify_duality(&graph, &wrong),
            Err(FlowError::VerificationFailed(_))
        ));
    }

    #[test]
    fn test_capacity_violation() {
        let graph = graph();
        let net = net_flow(4, &[path(vec![0, 1, 3], 3)]);
        assert!(verify_capacity(&graph, &net).is_err());
    }

    #[test]
    fn test_conservation_violation() {
        // Flow that stops at vertex 1
        let net = net_flow(4, &[path(vec![0, 1], 2)]);
        assert!(verify_conservation(4, &net, 0, 3, 2).is_err());

        let net = net_flow(4, &[path(vec![0, 1, 3], 2)]);
        assert_eq!(verify_conservation(4, &net, 0, 3, 2), Ok(()));
    }

    #[test]
    fn test_conservation_with_large_opposing_flows() {
        let big = Capacity::MAX / 2 + 1;
        // Row 1 reads [+big, 0, +big, -big, -big]; its running sum leaves i64
        let net = net_flow(5, &[path(vec![3, 1, 0], big), path(vec![4, 1, 2], big)]);

        assert_eq!(
            verify_conservation(5, &net, 3, 0, big),
            Err(FlowError::VerificationFailed(format!(
                "vertex 2 has net outflow {}, expected 0",
                -big
            )))
        );
    }

    #[test]
    fn test_net_flow_saturates() {
        let max = Capacity::MAX;
        let net = net_flow(2, &[path(vec![0, 1], max), path(vec![0, 1], max)]);
        assert_eq!(net, vec![0, max, Capacity::MIN, 0]);

        let graph = CapacityMatrix::from_rows(vec![vec![0, 5], vec![0, 0]]).unwrap();
        assert_eq!(
            verify_capacity(&graph, &net),
            Err(FlowError::VerificationFailed(format!(
                "net flow {} on edge 0 -> 1 exceeds capacity 5",
                max
            )))
        );
    }

    #[test]
    fn test_reverse_edges_cancel_in_net_flow() {
        let net = net_flow(3, &[path(vec![0, 1, 2], 2), path(vec![0, 2, 1], 1)]);
        // (1, 2) and (2, 1) in a 3x3 row-major buffer
        assert_eq!(net[5], 1);
        assert_eq!(net[7], -1);
    }

    #[test]
    fn test_separation_violation() {
        let mut reachable = result(0, Vec::new(), Vec::new());
        reachable.source_side = BTreeSet::from([0, 3]);
        assert!(verify_separation(&reachable, 0, 3).is_err());
        assert_eq!(verify_separation(&reachable, 0, 0), Ok(()));
    }
}
