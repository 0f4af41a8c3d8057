//! Cover tensor types
//!
//! Both buffers are flat and contiguous. The input is laid out time-major,
//! then group, then location; the output time-major, then location:
//!
//! ```text
//! cover[t][g][l]  -> t * n_groups * n_locs + g * n_locs + l
//! output[t][l]    -> t * n_locs + l
//! ```

mod cover;
mod element;
mod grid;
mod shape;

pub use cover::CoverTensor;
pub use element::CoverElement;
pub use grid::DiversityGrid;
pub use shape::CoverShape;
