//! Community ecology kernels
//!
//! Per-cell metrics over relative taxa cover:
//! - **Shannon Diversity**: Information entropy of cover proportions (nats)
//! - **Simpson Diversity**: Probability two random cover units differ in group
//! - **Pielou Evenness**: Shannon entropy scaled by its maximum `ln(n_groups)`

mod diversity;
mod indices;

pub use diversity::{coral_diversity, coral_diversity_to_vec, DiversityParams};
pub use indices::{
    cell_diversity, pielou_evenness, shannon_entropy, simpson_diversity, DiversityIndex,
    DEFAULT_COVER_SLACK, DEFAULT_ZERO_COVER_TOLERANCE,
};
