//! FLOWCUT core: maximum flow and minimum cut on dense capacity matrices
//!
//! The crate computes the maximum flow between a source and a target
//! vertex of a directed graph with non-negative integer capacities, using
//! the augmenting-path (Ford-Fulkerson) method, and returns a matching
//! minimum edge cut.
//!
//! ```
//! use flowcut_core::{compute_max_flow, CapacityMatrix};
//!
//! let graph = CapacityMatrix::from_rows(vec![
//!     vec![0, 20, 0, 0, 0],
//!     vec![0, 0, 5, 6, 0],
//!     vec![0, 0, 0, 0, 7],
//!     vec![0, 0, 0, 0, 8],
//!     vec![0, 0, 0, 0, 0],
//! ])?;
//!
//! let result = compute_max_flow(&graph, 0, 4)?;
//! assert_eq!(result.max_flow, 11);
//! assert_eq!(result.min_cut, vec![(1, 2), (1, 3)]);
//! # Ok::<(), flowcut_core::FlowError>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod validation;

pub use crate::algorithm::graph::{
    AugmentationStrategy, CutEdge, FlowPath, MaxFlowConfig, MaxFlowResult, MaxFlowSolver,
};
pub use crate::algorithm::path_finding::{AugmentingPathFinder, BreadthFirstSearch, DepthFirstSearch};
pub use crate::algorithm::traits::{Algorithm, AlgorithmMetrics, Capacity, FlowError, VertexId};
pub use crate::data_structures::{CapacityMatrix, ResidualGraph};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum flow from `source` to `target` with the default configuration
pub fn compute_max_flow(
    graph: &CapacityMatrix,
    source: VertexId,
    target: VertexId,
) -> Result<MaxFlowResult, FlowError> {
    MaxFlowSolver::new().solve(graph, source, target)
}

/// Validate raw nested rows, then compute the maximum flow
pub fn compute_max_flow_from_rows(
    rows: Vec<Vec<Capacity>>,
    source: VertexId,
    target: VertexId,
) -> Result<MaxFlowResult, FlowError> {
    let graph = CapacityMatrix::from_rows(rows)?;
    compute_max_flow(&graph, source, target)
}
