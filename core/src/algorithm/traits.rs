//! Core algorithm trait definitions for the FLOWCUT flow core
//!
//! This module establishes the vocabulary shared by every flow component:
//! vertex and capacity types, the typed error taxonomy, the configurable
//! algorithm interface and the execution profiler.
//!
//! # Key Design Principles
//! - Validation happens once at the public boundary
//! - Internal primitives assume a well-formed residual graph
//! - Deterministic behavior for given inputs
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;
use std::fmt::Debug;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Vertex identifier, an index into the capacity matrix
pub type VertexId = usize;

/// Integer edge capacity; `0` means "no edge"
pub type Capacity = i64;

/// Comprehensive error types for flow computations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("Negative capacity {capacity} on edge {from} -> {to}")]
    NegativeCapacity {
        from: VertexId,
        to: VertexId,
        capacity: Capacity,
    },

    #[error("Augmentation limit of {limit} exceeded before saturation")]
    AugmentationLimitExceeded { limit: usize },

    #[error("Result verification failed: {0}")]
    VerificationFailed(String),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Algorithm execution metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmMetrics {
    /// Successful augmentations (one per augmenting path)
    pub augmentations: usize,
    /// Vertices popped by path searches across all iterations
    pub vertices_explored: usize,
    /// Wall-clock time of the whole computation
    pub execution_time: Duration,
}

/// Algorithm complexity information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmComplexity {
    pub time_complexity: String,
    pub space_complexity: String,
}

/// Configurable algorithm with a string parameter surface
///
/// # Invariants
/// - State isolation between runs
/// - Deterministic behavior for given inputs
pub trait Algorithm: Debug + Send + Sync {
    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's category (e.g., max_flow)
    fn category(&self) -> &'static str;

    /// Returns the algorithm's description
    fn description(&self) -> String;

    /// Returns the asymptotic complexity in Big-O notation
    fn complexity(&self) -> AlgorithmComplexity;

    /// Returns all parameters with their current values
    fn parameters(&self) -> HashMap<String, String>;

    /// Sets algorithm parameter with type validation
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), FlowError>;

    /// Gets algorithm parameter value
    fn get_parameter(&self, name: &str) -> Option<String> {
        self.parameters().get(name).cloned()
    }
}

/// Performance profiling for a single computation
#[derive(Debug)]
pub struct AlgorithmProfiler {
    metrics: AlgorithmMetrics,
    start_time: Option<Instant>,
}

impl AlgorithmProfiler {
    pub fn new() -> Self {
        Self {
            metrics: AlgorithmMetrics::default(),
            start_time: None,
        }
    }

    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.metrics.execution_time = start.elapsed();
        }
    }

    pub fn record_augmentation(&mut self) {
        self.metrics.augmentations += 1;
    }

    pub fn record_exploration(&mut self, vertices: usize) {
        self.metrics.vertices_explored += vertices;
    }

    pub fn augmentations(&self) -> usize {
        self.metrics.augmentations
    }

    pub fn get_metrics(&self) -> AlgorithmMetrics {
        self.metrics.clone()
    }
}

impl Default for AlgorithmProfiler {
    fn default() -> Self {
        Self::new()
    }
}
