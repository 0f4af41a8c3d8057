//! Coral cover diversity kernel
//!
//! Reduces a `(t, g, l)` relative cover tensor to one diversity value per
//! `(t, l)` cell. Input is validated in full before the first output slot is
//! written: a rejected call leaves the output buffer untouched.

use ndarray::{ArrayView1, Axis, Zip};
use tracing::{debug, warn};

use reefmetrics_core::{
    CellKernel, CoverElement, CoverShape, CoverTensor, DiversityGrid, Error, ProcessingMode,
    Result,
};

#[cfg(feature = "parallel")]
use reefmetrics_parallel::ParallelStrategy;

use super::indices::{
    DiversityIndex, IndexKernel, DEFAULT_COVER_SLACK, DEFAULT_ZERO_COVER_TOLERANCE,
};

/// Parameters for the diversity kernel
#[derive(Debug, Clone, PartialEq)]
pub struct DiversityParams {
    /// Index written to each cell (default: Shannon)
    pub index: DiversityIndex,
    /// Total cover at or below which a cell maps to 0 (default: 1e-12)
    pub zero_cover_tolerance: f64,
    /// Round-off allowed above 1 for values and cell sums (default: 1e-9)
    pub cover_slack: f64,
    /// How cells are distributed across threads (default: parallel)
    pub mode: ProcessingMode,
}

impl Default for DiversityParams {
    fn default() -> Self {
        Self {
            index: DiversityIndex::Shannon,
            zero_cover_tolerance: DEFAULT_ZERO_COVER_TOLERANCE,
            cover_slack: DEFAULT_COVER_SLACK,
            mode: ProcessingMode::Parallel,
        }
    }
}

impl DiversityParams {
    fn validate(&self) -> Result<()> {
        check_tolerance("zero_cover_tolerance", self.zero_cover_tolerance)?;
        check_tolerance("cover_slack", self.cover_slack)?;
        if self.mode == ProcessingMode::ParallelWith(0) {
            return Err(Error::InvalidParameter {
                name: "mode",
                value: "ParallelWith(0)".into(),
                reason: "dedicated pool needs at least one thread".into(),
            });
        }
        Ok(())
    }
}

fn check_tolerance(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "must be finite and non-negative".into(),
        })
    }
}

/// Coral diversity per `(t, l)` cell.
///
/// For every cell, with `p_g = cover[t][g][l]` and `S = sum(p_g)`:
/// - `S <= zero_cover_tolerance` writes `0.0` (nothing lives there);
/// - otherwise writes the configured index of `q_g = p_g / S`, by default
///   `H = -sum(q_g * ln(q_g))` in nats, skipping `q_g == 0`.
///
/// `cover` is laid out `t * n_groups * n_locs + g * n_locs + l` and `output`
/// `t * n_locs + l`. Either slice may be longer than the shape requires; only
/// the prefix is read or written.
///
/// An empty shape (`n_tsteps == 0` or `n_locs == 0`) returns `Ok` without
/// touching either buffer.
///
/// # Errors
/// - `InvalidDimension` when the shape is non-empty but has no groups
/// - `BufferTooShort` when a slice is shorter than the shape requires
/// - `InvalidCoverValue` for the first offending cell in `(t, l)` order
/// - `InvalidParameter` / `ThreadPool` for bad parameters or pool setup
///
/// On any error `output` is left exactly as it was.
pub fn coral_diversity<T: CoverElement>(
    shape: CoverShape,
    cover: &[T],
    output: &mut [T],
    params: &DiversityParams,
) -> Result<()> {
    params.validate()?;
    shape.validate()?;

    if shape.is_empty() {
        debug!(?shape, "empty shape, nothing to compute");
        return Ok(());
    }

    let cover = CoverTensor::new(shape, cover)?;
    let mut grid = DiversityGrid::new(shape, output)?;

    if let Err(e) = cover.validate(params.cover_slack) {
        warn!(error = %e, "rejecting relative taxa cover");
        return Err(e);
    }

    let kernel = IndexKernel {
        index: params.index,
        zero_cover_tolerance: params.zero_cover_tolerance,
    };
    debug!(
        ?shape,
        index = kernel.name(),
        mode = ?params.mode,
        "computing coral diversity"
    );

    fill_cells(&kernel, cover, &mut grid, params.mode)
}

/// Same as [`coral_diversity`], allocating the output.
pub fn coral_diversity_to_vec<T: CoverElement>(
    shape: CoverShape,
    cover: &[T],
    params: &DiversityParams,
) -> Result<Vec<T>> {
    let mut output = vec![T::zero(); shape.output_len()?];
    coral_diversity(shape, cover, &mut output, params)?;
    Ok(output)
}

/// Write one value per cell. Each output slot is paired with the lane of
/// group values for the same `(t, l)`, so every slot is written exactly once
/// and no two tasks share a slot.
fn fill_cells<T: CoverElement>(
    kernel: &IndexKernel,
    cover: CoverTensor<'_, T>,
    grid: &mut DiversityGrid<'_, T>,
    mode: ProcessingMode,
) -> Result<()> {
    let view = cover.view();
    let zip = Zip::from(grid.view_mut()).and(view.lanes(Axis(1)));
    let cell = |out: &mut T, groups: ArrayView1<'_, T>| {
        *out = T::narrow(kernel.evaluate(groups.iter().map(|&p| p.widen())));
    };

    #[cfg(feature = "parallel")]
    if mode.is_parallel() {
        return mode.install(|| zip.par_for_each(cell));
    }

    #[cfg(not(feature = "parallel"))]
    let _ = mode;

    zip.for_each(cell);
    Ok(())
}
