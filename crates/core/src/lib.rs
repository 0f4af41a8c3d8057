//! # ReefMetrics Core
//!
//! Core types shared by the ReefMetrics kernels.
//!
//! This crate provides:
//! - `CoverShape`: tensor dimensions and the fixed buffer linearization
//! - `CoverTensor<T>`: read-only `(t, g, l)` view over relative taxa cover
//! - `DiversityGrid<T>`: writable `(t, l)` view over the output buffer
//! - `CoverElement`: trait bounding the supported float types
//! - `ProcessingMode`: how a kernel distributes its cells
//! - The error taxonomy shared by every crate in the workspace

pub mod config;
pub mod error;
pub mod tensor;

pub use config::ProcessingMode;
pub use error::{CoverViolation, Error, Result};
pub use tensor::{CoverElement, CoverShape, CoverTensor, DiversityGrid};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::ProcessingMode;
    pub use crate::error::{CoverViolation, Error, Result};
    pub use crate::tensor::{CoverElement, CoverShape, CoverTensor, DiversityGrid};
    pub use crate::CellKernel;
}

/// Core trait for per-cell kernels.
///
/// A kernel reduces the `n_groups` cover values of one `(t, l)` cell to a
/// single scalar. Implementations must be pure: the same group vector always
/// yields the same bits, whatever thread evaluates it.
pub trait CellKernel: Send + Sync {
    /// Returns the kernel name
    fn name(&self) -> &'static str;

    /// Evaluate one cell from its group values, in ascending group order
    fn evaluate<I>(&self, groups: I) -> f64
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: Clone;
}
