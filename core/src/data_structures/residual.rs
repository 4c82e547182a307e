//! Residual capacity graph
//!
//! A mutable copy of a [`CapacityMatrix`] that tracks remaining forward
//! capacity and accumulated reverse capacity while flow is pushed. For every
//! vertex pair `{u, v}` the sum `residual[u][v] + residual[v][u]` equals the
//! original `graph[u][v] + graph[v][u]` after every augmentation.

use crate::algorithm::traits::{Capacity, VertexId};
use crate::data_structures::graph::CapacityMatrix;

/// Residual graph owned by a single flow computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualGraph {
    vertex_count: usize,
    residual: Vec<Capacity>,
}

impl ResidualGraph {
    /// Deep copy of the original capacities
    pub fn new(graph: &CapacityMatrix) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            residual: graph.as_slice().to_vec(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count
    }

    /// Remaining capacity of `from -> to`
    #[inline]
    pub fn residual(&self, from: VertexId, to: VertexId) -> Capacity {
        self.residual[from * self.vertex_count + to]
    }

    /// Edge predicate used while searching for augmenting paths: any
    /// nonzero residual counts as open.
    #[inline]
    pub fn is_open(&self, from: VertexId, to: VertexId) -> bool {
        self.residual(from, to) != 0
    }

    /// Edge predicate used for post-saturation reachability: strictly
    /// positive residual only. Must stay distinct from [`Self::is_open`].
    #[inline]
    pub fn has_capacity(&self, from: VertexId, to: VertexId) -> bool {
        self.residual(from, to) > 0
    }

    /// Minimum residual capacity over the edges of `path`
    ///
    /// Returns `None` for paths with fewer than two vertices, which have no
    /// edges and therefore no bottleneck.
    pub fn bottleneck(&self, path: &[VertexId]) -> Option<Capacity> {
        path.windows(2)
            .map(|edge| self.residual(edge[0], edge[1]))
            .min()
    }

    /// Push `flow` along `path`, shrinking forward and growing reverse
    /// capacities on every edge.
    ///
    /// `flow` must not exceed the path's bottleneck; this is not checked
    /// in release builds.
    pub fn augment(&mut self, path: &[VertexId], flow: Capacity) {
        debug_assert!(flow > 0, "augmenting flow must be positive");
        debug_assert!(
            self.bottleneck(path).map_or(true, |bottleneck| flow <= bottleneck),
            "augmenting flow exceeds path bottleneck"
        );

        let n = self.vertex_count;
        for edge in path.windows(2) {
            let (u, v) = (edge[0], edge[1]);
            self.residual[u * n + v] -= flow;
            self.residual[v * n + u] += flow;
        }
    }

    /// Combined capacity of the pair `u -> v` and `v -> u`
    #[cfg(test)]
    fn pair_total(&self, u: VertexId, v: VertexId) -> Capacity {
        self.residual(u, v) + self.residual(v, u)
    }

    /// Whether no residual entry is negative
    pub(crate) fn is_non_negative(&self) -> bool {
        self.residual.iter().all(|&capacity| capacity >= 0)
    }
}

impl From<&CapacityMatrix> for ResidualGraph {
    fn from(graph: &CapacityMatrix) -> Self {
        Self::new(graph)
    }
}
