//! Maximum flow and minimum cut over dense capacity matrices
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod max_flow;
pub mod min_cut;

pub use self::max_flow::{
    AugmentationStrategy, FlowPath, MaxFlowConfig, MaxFlowResult, MaxFlowSolver,
};
pub use self::min_cut::{cut_capacity, extract_cut, reachable_from, CutEdge};
