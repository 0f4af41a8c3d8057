//! Tensor dimensions and linearization

use crate::error::{Error, Result};

/// Dimensions of a cover tensor.
///
/// `(t, g, l)` addresses time step, taxon group and location. A shape with
/// no time steps or no locations describes an empty (but valid) computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoverShape {
    pub n_tsteps: usize,
    pub n_groups: usize,
    pub n_locs: usize,
}

impl CoverShape {
    pub fn new(n_tsteps: usize, n_groups: usize, n_locs: usize) -> Self {
        Self {
            n_tsteps,
            n_groups,
            n_locs,
        }
    }

    /// Build a shape from the signed dimensions of the C interface.
    ///
    /// Negative values are rejected whether or not the computation is empty.
    pub fn from_raw(n_tsteps: i32, n_groups: i32, n_locs: i32) -> Result<Self> {
        Ok(Self {
            n_tsteps: raw_dimension("n_tsteps", n_tsteps)?,
            n_groups: raw_dimension("n_groups", n_groups)?,
            n_locs: raw_dimension("n_locs", n_locs)?,
        })
    }

    /// Whether there are no `(t, l)` cells to compute
    pub fn is_empty(&self) -> bool {
        self.n_tsteps == 0 || self.n_locs == 0
    }

    /// Number of `(t, l)` cells
    pub fn cell_count(&self) -> Result<usize> {
        self.n_tsteps
            .checked_mul(self.n_locs)
            .ok_or_else(|| self.overflow())
    }

    /// Required length of the cover buffer
    pub fn cover_len(&self) -> Result<usize> {
        self.cell_count()?
            .checked_mul(self.n_groups)
            .ok_or_else(|| self.overflow())
    }

    /// Required length of the output buffer
    pub fn output_len(&self) -> Result<usize> {
        self.cell_count()
    }

    /// Check that the shape describes a computation that can be carried out.
    ///
    /// An empty shape is always valid. Otherwise there must be at least one
    /// group and the cover length must be representable.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        if self.n_groups == 0 {
            return Err(Error::InvalidDimension {
                name: "n_groups",
                value: 0,
            });
        }
        self.cover_len().map(|_| ())
    }

    /// Flat input index of `(t, g, l)`
    #[inline]
    pub fn cover_index(&self, t: usize, g: usize, l: usize) -> usize {
        debug_assert!(t < self.n_tsteps && g < self.n_groups && l < self.n_locs);
        t * self.n_groups * self.n_locs + g * self.n_locs + l
    }

    /// Flat output index of `(t, l)`
    #[inline]
    pub fn output_index(&self, t: usize, l: usize) -> usize {
        debug_assert!(t < self.n_tsteps && l < self.n_locs);
        t * self.n_locs + l
    }

    /// Inverse of [`cover_index`](Self::cover_index).
    ///
    /// `None` when `index` lies outside the cover buffer, including every
    /// index of a shape with no groups or no locations.
    pub fn cover_coords(&self, index: usize) -> Option<(usize, usize, usize)> {
        if index >= self.cover_len().ok()? {
            return None;
        }
        let per_step = self.n_groups * self.n_locs;
        let rem = index % per_step;
        Some((index / per_step, rem / self.n_locs, rem % self.n_locs))
    }

    fn overflow(&self) -> Error {
        Error::ShapeOverflow {
            n_tsteps: self.n_tsteps,
            n_groups: self.n_groups,
            n_locs: self.n_locs,
        }
    }
}

fn raw_dimension(name: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidDimension {
        name,
        value: i64::from(value),
    })
}
