//! Capacity and residual graph storage
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod residual;

pub use self::graph::CapacityMatrix;
pub use self::residual::ResidualGraph;
