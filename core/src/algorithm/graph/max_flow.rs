//! Augmenting-Path Maximum Flow Implementation
//!
//! This module implements the Ford-Fulkerson method over a dense capacity
//! matrix. The solver repeatedly finds an augmenting path in the residual
//! graph, pushes its bottleneck capacity, and on saturation extracts the
//! minimum cut from the vertices still reachable from the source.
//!
//! # State Machine
//!
//! - **Running**: residual graph present, accumulated flow starts at zero
//! - **Augmenting**: one path search; a found path is saturated by its
//!   bottleneck and the solver returns to running
//! - **Terminated**: no path remains; reachable set and cut are computed
//!   against the original graph
//!
//! Termination is guaranteed for integer capacities: each augmentation adds
//! a positive integer to a flow bounded by the source's outgoing capacity.
//! The depth-first strategy gives no polynomial bound on the number of
//! augmentations; the shortest-path strategy (Edmonds-Karp) bounds it by
//! O(VE).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::min_cut::{cut_capacity, extract_cut, reachable_from, CutEdge};
use crate::algorithm::path_finding::{AugmentingPathFinder, BreadthFirstSearch, DepthFirstSearch};
use crate::algorithm::traits::{
    Algorithm, AlgorithmComplexity, AlgorithmMetrics, AlgorithmProfiler, Capacity, FlowError,
    VertexId,
};
use crate::data_structures::graph::CapacityMatrix;
use crate::data_structures::residual::ResidualGraph;
use crate::validation::correctness;

/// Augmenting path selection strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentationStrategy {
    /// Ford-Fulkerson with depth-first path finding, neighbours high to low
    #[default]
    DepthFirst,
    /// Edmonds-Karp with breadth-first shortest augmenting paths
    ShortestPath,
}

impl AugmentationStrategy {
    fn path_finder(self) -> &'static dyn AugmentingPathFinder {
        match self {
            AugmentationStrategy::DepthFirst => &DepthFirstSearch,
            AugmentationStrategy::ShortestPath => &BreadthFirstSearch,
        }
    }
}

impl fmt::Display for AugmentationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AugmentationStrategy::DepthFirst => write!(f, "depth_first"),
            AugmentationStrategy::ShortestPath => write!(f, "shortest_path"),
        }
    }
}

impl FromStr for AugmentationStrategy {
    type Err = FlowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "depth_first" => Ok(AugmentationStrategy::DepthFirst),
            "shortest_path" => Ok(AugmentationStrategy::ShortestPath),
            other => Err(FlowError::InvalidParameter {
                name: "augmentation_strategy".to_string(),
                reason: format!("expected depth_first or shortest_path, got {}", other),
            }),
        }
    }
}

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxFlowConfig {
    /// How the next augmenting path is chosen
    pub augmentation_strategy: AugmentationStrategy,
    /// Fail instead of looping past this many augmentations
    pub max_augmentations: Option<usize>,
    /// Check duality and flow conservation before returning
    pub verify_result: bool,
}

impl Default for MaxFlowConfig {
    fn default() -> Self {
        Self {
            augmentation_strategy: AugmentationStrategy::DepthFirst,
            max_augmentations: None,
            verify_result: true,
        }
    }
}

impl MaxFlowConfig {
    /// Parse a configuration from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        serde_json::from_str(json).map_err(|e| FlowError::InvalidParameter {
            name: "config".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Flow pushed along one augmenting path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPath {
    /// Path vertices, source first
    pub vertices: Vec<VertexId>,
    /// Bottleneck flow pushed along the path
    pub flow: Capacity,
}

/// Maximum flow result with the matching minimum cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxFlowResult {
    /// Maximum flow value
    pub max_flow: Capacity,
    /// Minimum cut edges, row-major
    pub min_cut: Vec<CutEdge>,
    /// Vertices on the source side of the cut
    pub source_side: BTreeSet<VertexId>,
    /// Augmenting paths in the order they were used
    pub flow_paths: Vec<FlowPath>,
    /// Algorithm performance metrics
    pub metrics: AlgorithmMetrics,
}

impl MaxFlowResult {
    /// Total original capacity of the cut edges
    pub fn cut_capacity(&self, graph: &CapacityMatrix) -> Capacity {
        cut_capacity(graph, &self.min_cut)
    }
}

/// Maximum flow solver over dense capacity matrices
#[derive(Debug, Clone, Default)]
pub struct MaxFlowSolver {
    config: MaxFlowConfig,
}

impl MaxFlowSolver {
    /// Create a solver with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with an explicit configuration
    pub fn with_config(config: MaxFlowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MaxFlowConfig {
        &self.config
    }

    /// Compute the maximum flow from `source` to `target` and a minimum cut
    ///
    /// Endpoints and capacity bounds are validated before any residual
    /// state is created; no partial result is ever returned.
    pub fn solve(
        &self,
        graph: &CapacityMatrix,
        source: VertexId,
        target: VertexId,
    ) -> Result<MaxFlowResult, FlowError> {
        graph.check_vertex(source)?;
        graph.check_vertex(target)?;
        graph.check_flow_bounds(source)?;

        let mut profiler = AlgorithmProfiler::new();
        profiler.start();

        if source == target {
            debug!("Source and target coincide at {}; flow is zero", source);
            profiler.stop();
            return Ok(MaxFlowResult {
                max_flow: 0,
                min_cut: Vec::new(),
                source_side: BTreeSet::from([source]),
                flow_paths: Vec::new(),
                metrics: profiler.get_metrics(),
            });
        }

        debug!(
            "Computing max flow {} -> {} over {} vertices ({} edges) with {}",
            source,
            target,
            graph.vertex_count(),
            graph.edge_count(),
            self.config.augmentation_strategy
        );

        let finder = self.config.augmentation_strategy.path_finder();
        let mut residual = ResidualGraph::new(graph);
        let mut max_flow: Capacity = 0;
        let mut flow_paths = Vec::new();

        loop {
            let outcome = finder.search(&residual, source, target);
            profiler.record_exploration(outcome.vertices_explored);

            let Some(path) = outcome.path else {
                break;
            };
            // A path of positive residual edges always has a positive bottleneck
            let Some(bottleneck) = residual.bottleneck(&path) else {
                break;
            };

            if let Some(limit) = self.config.max_augmentations {
                if profiler.augmentations() >= limit {
                    return Err(FlowError::AugmentationLimitExceeded { limit });
                }
            }

            residual.augment(&path, bottleneck);
            debug_assert!(residual.is_non_negative(), "residual capacity went negative");
            max_flow += bottleneck;
            profiler.record_augmentation();
            trace!(
                "Augmentation {}: pushed {} along {:?} (total {})",
                profiler.augmentations(),
                bottleneck,
                path,
                max_flow
            );
            flow_paths.push(FlowPath { vertices: path, flow: bottleneck });
        }

        let source_side = reachable_from(&residual, source);
        let min_cut = extract_cut(graph, &source_side);
        profiler.stop();

        let result = MaxFlowResult {
            max_flow,
            min_cut,
            source_side,
            flow_paths,
            metrics: profiler.get_metrics(),
        };

        debug!(
            "Max flow {} after {} augmentations; cut has {} edges",
            result.max_flow,
            result.metrics.augmentations,
            result.min_cut.len()
        );

        if self.config.verify_result {
            correctness::verify_result(graph, source, target, &result)?;
        }

        Ok(result)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, FlowError> {
    value.parse::<bool>().map_err(|_| FlowError::InvalidParameter {
        name: name.to_string(),
        reason: format!("expected true or false, got {}", value),
    })
}

impl Algorithm for MaxFlowSolver {
    fn name(&self) -> &'static str {
        match self.config.augmentation_strategy {
            AugmentationStrategy::DepthFirst => "Ford-Fulkerson",
            AugmentationStrategy::ShortestPath => "Edmonds-Karp",
        }
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn description(&self) -> String {
        format!(
            "Augmenting-path maximum flow with minimum cut extraction over a dense capacity matrix ({} path selection).",
            self.config.augmentation_strategy
        )
    }

    fn complexity(&self) -> AlgorithmComplexity {
        let time_complexity = match self.config.augmentation_strategy {
            AugmentationStrategy::DepthFirst => "O(V^2 * |f*|)",
            AugmentationStrategy::ShortestPath => "O(V^3 * E)",
        };
        AlgorithmComplexity {
            time_complexity: time_complexity.to_string(),
            space_complexity: "O(V^2)".to_string(),
        }
    }

    fn parameters(&self) -> HashMap<String, String> {
        let max_augmentations = self
            .config
            .max_augmentations
            .map_or_else(|| "none".to_string(), |limit| limit.to_string());

        HashMap::from([
            (
                "augmentation_strategy".to_string(),
                self.config.augmentation_strategy.to_string(),
            ),
            ("max_augmentations".to_string(), max_augmentations),
            ("verify_result".to_string(), self.config.verify_result.to_string()),
        ])
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), FlowError> {
        match name {
            "augmentation_strategy" => {
                self.config.augmentation_strategy = value.parse()?;
                Ok(())
            }
            "max_augmentations" => {
                self.config.max_augmentations = match value {
                    "none" => None,
                    _ => Some(value.parse::<usize>().map_err(|_| FlowError::InvalidParameter {
                        name: name.to_string(),
                        reason: "max_augmentations must be a non-negative integer or none".to_string(),
                    })?),
                };
                Ok(())
            }
            "verify_result" => {
                self.config.verify_result = parse_bool(name, value)?;
                Ok(())
            }
            _ => Err(FlowError::InvalidParameter {
                name: name.to_string(),
                reason: "valid parameters: augmentation_strategy, max_augmentations, verify_result"
                    .to_string(),
            }),
        }
    }
}
