//! # ReefMetrics Algorithms
//!
//! Post-processing kernels for reef population models.
//!
//! ## Available Algorithm Categories
//!
//! - **community**: Per-cell diversity of relative taxa cover (Shannon,
//!   Simpson, Pielou evenness)

pub mod community;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::community::{
        cell_diversity, coral_diversity, coral_diversity_to_vec, pielou_evenness,
        shannon_entropy, simpson_diversity, DiversityIndex, DiversityParams,
    };
    pub use reefmetrics_core::prelude::*;
}
