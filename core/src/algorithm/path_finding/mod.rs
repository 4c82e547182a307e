//! Augmenting path searches over a residual graph
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod bfs;
pub mod dfs;

pub use self::bfs::BreadthFirstSearch;
pub use self::dfs::{find_path, DepthFirstSearch};

use crate::algorithm::traits::VertexId;
use crate::data_structures::residual::ResidualGraph;

/// Vertex sequence from source to target, no vertex repeated
pub type Path = Vec<VertexId>;

/// Result of one augmenting path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The path found, if the target is reachable
    pub path: Option<Path>,
    /// Number of vertices popped before the search ended
    pub vertices_explored: usize,
}

/// Strategy for locating the next augmenting path
///
/// Implementations treat an edge as traversable iff its residual
/// capacity is nonzero, scan neighbours from the highest vertex id down,
/// and return `None` for out-of-range endpoints.
pub trait AugmentingPathFinder: std::fmt::Debug + Send + Sync {
    fn search(&self, residual: &ResidualGraph, source: VertexId, target: VertexId) -> SearchOutcome;
}
