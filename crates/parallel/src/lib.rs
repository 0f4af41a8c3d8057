//! # ReefMetrics Parallel
//!
//! Processing strategies for ReefMetrics kernels.
//!
//! Kernels describe their work as independent `(t, l)` cells; this crate
//! decides which rayon pool (if any) those cells run on.

pub mod strategy;

pub use reefmetrics_core::ProcessingMode;
pub use strategy::ParallelStrategy;
