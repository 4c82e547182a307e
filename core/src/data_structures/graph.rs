//! Dense capacity matrix representation
//!
//! This module implements the validated, immutable input graph of a flow
//! computation: a square matrix of non-negative integer capacities stored
//! row-major in a single contiguous buffer. Entry `(u, v)` is the capacity
//! of the directed edge `u -> v`; `0` is the only value meaning "no edge".
//!
//! Every constructor validates its input, so a `CapacityMatrix` value is
//! always square, non-empty and free of negative entries.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Capacity, FlowError, VertexId};

/// Square matrix of edge capacities indexed by vertex id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Capacity>>", into = "Vec<Vec<Capacity>>")]
pub struct CapacityMatrix {
    /// Number of vertices (matrix dimension)
    vertex_count: usize,
    /// Row-major capacities, `vertex_count * vertex_count` entries
    capacities: Vec<Capacity>,
}

impl CapacityMatrix {
    /// Create an edgeless matrix over `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Result<Self, FlowError> {
        if vertex_count == 0 {
            return Err(FlowError::InvalidGraph(
                "graph must contain at least one vertex".to_string(),
            ));
        }

        let cells = vertex_count.checked_mul(vertex_count).ok_or_else(|| {
            FlowError::InvalidGraph(format!("{} vertices exceed addressable matrix size", vertex_count))
        })?;

        Ok(Self {
            vertex_count,
            capacities: vec![0; cells],
        })
    }

    /// Build a matrix from nested rows, rejecting ragged or negative input
    pub fn from_rows(rows: Vec<Vec<Capacity>>) -> Result<Self, FlowError> {
        let vertex_count = rows.len();
        let mut matrix = Self::new(vertex_count)?;

        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != vertex_count {
                return Err(FlowError::InvalidGraph(format!(
                    "row {} has {} entries, expected {}",
                    from,
                    row.len(),
                    vertex_count
                )));
            }
            for (to, capacity) in row.into_iter().enumerate() {
                matrix.set_capacity(from, to, capacity)?;
            }
        }

        Ok(matrix)
    }

    /// Build a matrix from an edge list; parallel edges accumulate
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = (VertexId, VertexId, Capacity)>,
    {
        let mut matrix = Self::new(vertex_count)?;

        for (from, to, capacity) in edges {
            let existing = matrix.get(from, to).ok_or(FlowError::VertexOutOfRange {
                vertex: from.max(to),
                vertex_count,
            })?;
            let total = existing.checked_add(capacity).ok_or_else(|| {
                FlowError::InvalidGraph(format!("capacity overflow on edge {} -> {}", from, to))
            })?;
            matrix.set_capacity(from, to, total)?;
        }

        Ok(matrix)
    }

    /// Set the capacity of edge `from -> to`
    pub fn set_capacity(
        &mut self,
        from: VertexId,
        to: VertexId,
        capacity: Capacity,
    ) -> Result<(), FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity < 0 {
            return Err(FlowError::NegativeCapacity { from, to, capacity });
        }

        let index = self.offset(from, to);
        self.capacities[index] = capacity;
        Ok(())
    }

    /// Number of vertices in the graph
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Capacity of `from -> to`, or `None` when either index is out of range
    #[inline]
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<Capacity> {
        if from < self.vertex_count && to < self.vertex_count {
            Some(self.capacities[self.offset(from, to)])
        } else {
            None
        }
    }

    /// Capacity of `from -> to`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn capacity(&self, from: VertexId, to: VertexId) -> Capacity {
        self[(from, to)]
    }

    /// Whether `from -> to` is an edge of the graph
    #[inline]
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.get(from, to).is_some_and(|capacity| capacity > 0)
    }

    /// Fail with `VertexOutOfRange` unless `vertex` indexes this matrix
    pub fn check_vertex(&self, vertex: VertexId) -> Result<(), FlowError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(FlowError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Capacities of every edge leaving `from`, indexed by target vertex
    pub fn row(&self, from: VertexId) -> &[Capacity] {
        let start = from * self.vertex_count;
        &self.capacities[start..start + self.vertex_count]
    }

    /// All edges `(from, to, capacity)` with positive capacity, row-major
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Capacity)> + '_ {
        self.capacities
            .iter()
            .enumerate()
            .filter(|(_, capacity)| **capacity > 0)
            .map(move |(index, &capacity)| {
                (index / self.vertex_count, index % self.vertex_count, capacity)
            })
    }

    /// Number of edges with positive capacity
    pub fn edge_count(&self) -> usize {
        self.capacities.iter().filter(|&&capacity| capacity > 0).count()
    }

    /// Total capacity leaving `from`, an upper bound on any flow out of it;
    /// `None` if the sum does not fit in `Capacity`
    pub fn outgoing_capacity(&self, from: VertexId) -> Option<Capacity> {
        self.row(from)
            .iter()
            .try_fold(0 as Capacity, |total, &capacity| total.checked_add(capacity))
    }

    /// Fail with `InvalidGraph` unless a flow computation from `source` stays
    /// within `Capacity`.
    ///
    /// Residual entries never exceed `graph[u][v] + graph[v][u]`, and the
    /// accumulated flow never exceeds the source's outgoing capacity, so both
    /// sums must be representable.
    pub fn check_flow_bounds(&self, source: VertexId) -> Result<(), FlowError> {
        self.check_vertex(source)?;

        for u in 0..self.vertex_count {
            for v in u + 1..self.vertex_count {
                if self.capacity(u, v).checked_add(self.capacity(v, u)).is_none() {
                    return Err(FlowError::InvalidGraph(format!(
                        "capacity overflow: edges {} <-> {} sum past {}",
                        u,
                        v,
                        Capacity::MAX
                    )));
                }
            }
        }

        if self.outgoing_capacity(source).is_none() {
            return Err(FlowError::InvalidGraph(format!(
                "capacity overflow: outgoing capacity of source {} exceeds {}",
                source,
                Capacity::MAX
            )));
        }

        Ok(())
    }

    /// Nested-row copy of the matrix
    pub fn to_rows(&self) -> Vec<Vec<Capacity>> {
        self.capacities
            .chunks(self.vertex_count)
            .map(<[Capacity]>::to_vec)
            .collect()
    }

    /// Raw row-major buffer
    pub(crate) fn as_slice(&self) -> &[Capacity] {
        &self.capacities
    }

    #[inline]
    fn offset(&self, from: VertexId, to: VertexId) -> usize {
        from * self.vertex_count + to
    }
}

impl Index<(VertexId, VertexId)> for CapacityMatrix {
    type Output = Capacity;

    fn index(&self, (from, to): (VertexId, VertexId)) -> &Capacity {
        assert!(
            from < self.vertex_count && to < self.vertex_count,
            "edge ({}, {}) out of range for {} vertices",
            from,
            to,
            self.vertex_count
        );
        &self.capacities[self.offset(from, to)]
    }
}

impl TryFrom<Vec<Vec<Capacity>>> for CapacityMatrix {
    type Error = FlowError;

    fn try_from(rows: Vec<Vec<Capacity>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CapacityMatrix> for Vec<Vec<Capacity>> {
    fn from(matrix: CapacityMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let matrix = CapacityMatrix::from_rows(vec![vec![0, 3], vec![1, 0]]).unwrap();

        assert_eq!(matrix.vertex_count(), 2);
        assert_eq!(matrix.capacity(0, 1), 3);
        assert_eq!(matrix[(1, 0)], 1);
        assert!(matrix.has_edge(0, 1));
        assert!(!matrix.has_edge(0, 0));
        assert!(!matrix.has_edge(0, 5));
    }

    #[test]
    fn test_empty_graph_rejected() {
        assert!(matches!(
            CapacityMatrix::from_rows(Vec::new()),
            Err(FlowError::InvalidGraph(_))
        ));
        assert!(CapacityMatrix::new(0).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = CapacityMatrix::from_rows(vec![vec![0, 1], vec![0]]);
        assert!(matches!(result, Err(FlowError::InvalidGraph(_))));
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let result = CapacityMatrix::from_rows(vec![vec![0, 1], vec![-2, 0]]);
        assert_eq!(
            result,
            Err(FlowError::NegativeCapacity { from: 1, to: 0, capacity: -2 })
        );
    }

    #[test]
    fn test_set_capacity_out_of_range() {
        let mut matrix = CapacityMatrix::new(2).unwrap();
        assert_eq!(
            matrix.set_capacity(0, 2, 1),
            Err(FlowError::VertexOutOfRange { vertex: 2, vertex_count: 2 })
        );
    }

    #[test]
    fn test_from_edges_accumulates_parallel_edges() {
        let matrix = CapacityMatrix::from_edges(3, vec![(0, 1, 4), (0, 1, 6), (1, 2, 5)]).unwrap();

        assert_eq!(matrix.capacity(0, 1), 10);
        assert_eq!(matrix.capacity(1, 2), 5);
        assert_eq!(matrix.edge_count(), 2);
        assert_eq!(matrix.outgoing_capacity(0), Some(10));
    }

    #[test]
    fn test_from_edges_out_of_range() {
        let result = CapacityMatrix::from_edges(2, vec![(0, 3, 1)]);
        assert_eq!(
            result,
            Err(FlowError::VertexOutOfRange { vertex: 3, vertex_count: 2 })
        );
    }

    #[test]
    fn test_oversized_vertex_count_rejected() {
        assert!(matches!(
            CapacityMatrix::new(usize::MAX),
            Err(FlowError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_flow_bounds_reject_overflowing_pairs() {
        let max = Capacity::MAX;
        let matrix = CapacityMatrix::from_rows(vec![vec![0, max], vec![max, 0]]).unwrap();

        assert!(matches!(
            matrix.check_flow_bounds(0),
            Err(FlowError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_flow_bounds_reject_overflowing_source_outflow() {
        let max = Capacity::MAX;
        let matrix = CapacityMatrix::from_rows(vec![
            vec![0, max, max],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();

        assert_eq!(matrix.outgoing_capacity(0), None);
        assert!(matches!(
            matrix.check_flow_bounds(0),
            Err(FlowError::InvalidGraph(_))
        ));
        assert_eq!(matrix.check_flow_bounds(1), Ok(()));
    }

    #[test]
    fn test_flow_bounds_accept_max_single_edge() {
        let matrix = CapacityMatrix::from_rows(vec![vec![0, Capacity::MAX], vec![0, 0]]).unwrap();
        assert_eq!(matrix.check_flow_bounds(0), Ok(()));
    }

    #[test]
    fn test_edges_are_row_major() {
        let matrix = CapacityMatrix::from_rows(vec![
            vec![0, 2, 1],
            vec![0, 0, 0],
            vec![7, 0, 0],
        ])
        .unwrap();

        let edges: Vec<_> = matrix.edges().collect();
        assert_eq!(edges, vec![(0, 1, 2), (0, 2, 1), (2, 0, 7)]);
    }

    #[test]
    fn test_json_roundtrip_validates() {
        let matrix: CapacityMatrix = serde_json::from_str("[[0, 5], [0, 0]]").unwrap();
        assert_eq!(matrix.capacity(0, 1), 5);
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[[0,5],[0,0]]");

        let ragged: Result<CapacityMatrix, _> = serde_json::from_str("[[0, 5], [0]]");
        assert!(ragged.is_err());

        let negative: Result<CapacityMatrix, _> = serde_json::from_str("[[0, -1], [0, 0]]");
        assert!(negative.is_err());
    }
}
