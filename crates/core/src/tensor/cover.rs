//! Read-only view over relative taxa cover

use ndarray::{s, ArrayView1, ArrayView3};

use crate::error::{CoverViolation, Error, Result};
use crate::tensor::{CoverElement, CoverShape};

/// Borrowed `(t, g, l)` view over a flat cover buffer.
///
/// Only the first `shape.cover_len()` elements of the slice are visible;
/// anything beyond that is never read.
///
/// # Example
///
/// ```
/// use reefmetrics_core::{CoverShape, CoverTensor};
///
/// // two time steps, two groups, one location
/// let data = [0.5, 0.25, 1.0, 0.0];
/// let cover = CoverTensor::new(CoverShape::new(2, 2, 1), &data).unwrap();
/// assert_eq!(cover.get(0, 1, 0), Some(0.25));
/// assert_eq!(cover.cell(1, 0).to_vec(), vec![1.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoverTensor<'a, T: CoverElement> {
    shape: CoverShape,
    data: ArrayView3<'a, T>,
}

impl<'a, T: CoverElement> CoverTensor<'a, T> {
    /// Wrap a flat buffer laid out time-major, then group, then location
    pub fn new(shape: CoverShape, data: &'a [T]) -> Result<Self> {
        let len = shape.cover_len()?;
        if data.len() < len {
            return Err(Error::BufferTooShort {
                name: "relative_taxa_cover",
                expected: len,
                actual: data.len(),
            });
        }

        let data = ArrayView3::from_shape(
            (shape.n_tsteps, shape.n_groups, shape.n_locs),
            &data[..len],
        )
        .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> CoverShape {
        self.shape
    }

    /// The underlying `(t, g, l)` array view
    pub fn view(&self) -> ArrayView3<'a, T> {
        self.data
    }

    /// Cover of group `g` at `(t, l)`, or `None` when out of bounds
    pub fn get(&self, t: usize, g: usize, l: usize) -> Option<T> {
        self.data.get((t, g, l)).copied()
    }

    /// The `n_groups` values of one cell, in ascending group order.
    ///
    /// # Panics
    /// Panics if `t` or `l` is out of bounds.
    pub fn cell(&self, t: usize, l: usize) -> ArrayView1<'a, T> {
        self.data.slice_move(s![t, .., l])
    }

    /// Scan every cell and return the first invalid one.
    ///
    /// Cells are visited in output order `(t, l)` and groups in ascending
    /// order, so the reported violation is deterministic. Each value must be
    /// finite and lie in `[0, 1 + cover_slack]`, and the per-cell sum must
    /// not exceed `1 + cover_slack`.
    pub fn validate(&self, cover_slack: f64) -> Result<()> {
        let upper = 1.0 + cover_slack;

        for t in 0..self.shape.n_tsteps {
            for l in 0..self.shape.n_locs {
                let mut sum = 0.0;

                for (g, &raw) in self.cell(t, l).iter().enumerate() {
                    let value = raw.widen();
                    let index = self.shape.cover_index(t, g, l);

                    let violation = if !value.is_finite() {
                        Some(CoverViolation::NonFinite { group: g, index, value })
                    } else if value < 0.0 {
                        Some(CoverViolation::Negative { group: g, index, value })
                    } else if value > upper {
                        Some(CoverViolation::AboveOne { group: g, index, value })
                    } else {
                        None
                    };

                    if let Some(violation) = violation {
                        return Err(Error::InvalidCoverValue { t, l, violation });
                    }
                    sum += value;
                }

                if sum > upper {
                    return Err(Error::InvalidCoverValue {
                        t,
                        l,
                        violation: CoverViolation::SumExceedsOne { sum },
                    });
                }
            }
        }

        Ok(())
    }
}
