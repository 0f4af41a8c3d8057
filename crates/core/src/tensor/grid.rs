//! Writable view over the diversity output

use ndarray::ArrayViewMut2;

use crate::error::{Error, Result};
use crate::tensor::{CoverElement, CoverShape};

/// Borrowed `(t, l)` view over a caller-owned output buffer.
///
/// Only the first `shape.output_len()` slots are visible, so a kernel
/// writing through the grid cannot touch anything past them.
#[derive(Debug)]
pub struct DiversityGrid<'a, T: CoverElement> {
    data: ArrayViewMut2<'a, T>,
}

impl<'a, T: CoverElement> DiversityGrid<'a, T> {
    /// Wrap a flat buffer laid out time-major, then location
    pub fn new(shape: CoverShape, data: &'a mut [T]) -> Result<Self> {
        let len = shape.output_len()?;
        if data.len() < len {
            return Err(Error::BufferTooShort {
                name: "output_taxa_cover",
                expected: len,
                actual: data.len(),
            });
        }

        let data = ArrayViewMut2::from_shape((shape.n_tsteps, shape.n_locs), &mut data[..len])
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data })
    }

    /// Dimensions as `(n_tsteps, n_locs)`
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Mutable view of the output slots
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, T> {
        self.data.view_mut()
    }
}
