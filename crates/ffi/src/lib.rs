//! C ABI for the ReefMetrics diversity kernel.
//!
//! Exports `coral_diversity` for simulation drivers written in C, C++ or
//! Fortran. Buffers are caller-owned; see `include/reef_metrics.h` for the
//! prototype and the layout of both buffers.
//!
//! Every export returns an `int32_t` status: `0` on success, a negative
//! `CORAL_ERR_*` code otherwise. Panics never cross the boundary.

use std::ffi::c_char;
use std::panic::{self, AssertUnwindSafe};

use reefmetrics_algorithms::community::{coral_diversity as diversity_kernel, DiversityParams};
use reefmetrics_core::{CoverShape, Error, ProcessingMode, Result};
use tracing::{error, Level};

// ── Status codes ─────────────────────────────────────────────────────

pub const CORAL_OK: i32 = 0;
pub const CORAL_ERR_INVALID_DIMENSION: i32 = -1;
pub const CORAL_ERR_INVALID_COVER: i32 = -2;
pub const CORAL_ERR_NULL_BUFFER: i32 = -3;
pub const CORAL_ERR_SHAPE_OVERFLOW: i32 = -4;
pub const CORAL_ERR_INTERNAL: i32 = -5;

/// Map a kernel error to its C status code
pub fn status_code(err: &Error) -> i32 {
    match err {
        Error::InvalidDimension { .. } => CORAL_ERR_INVALID_DIMENSION,
        Error::InvalidCoverValue { .. } => CORAL_ERR_INVALID_COVER,
        Error::NullBuffer { .. } => CORAL_ERR_NULL_BUFFER,
        Error::ShapeOverflow { .. } | Error::BufferTooShort { .. } => CORAL_ERR_SHAPE_OVERFLOW,
        Error::InvalidParameter { .. } | Error::ThreadPool(_) | Error::Other(_) => {
            CORAL_ERR_INTERNAL
        }
    }
}

// ── Kernel ───────────────────────────────────────────────────────────

/// Shannon diversity (nats) of relative taxa cover, one value per
/// `(t, l)` cell.
///
/// `relative_taxa_cover[t * n_groups * n_locs + g * n_locs + l]` is read and
/// `output_taxa_cover[t * n_locs + l]` written. Cells with no living cover
/// get `0.0`. The whole input is validated before the first write, so a
/// non-zero status leaves `output_taxa_cover` untouched.
///
/// With `n_tsteps == 0` or `n_locs == 0` the call does nothing and either
/// pointer may be null.
///
/// # Safety
/// For a non-empty shape, `relative_taxa_cover` must point to at least
/// `n_tsteps * n_groups * n_locs` readable doubles and `output_taxa_cover`
/// to at least `n_tsteps * n_locs` writable doubles. Both pointers must be
/// aligned for `double`, and the two regions must not overlap.
#[no_mangle]
pub unsafe extern "C" fn coral_diversity(
    n_tsteps: i32,
    n_groups: i32,
    n_locs: i32,
    relative_taxa_cover: *const f64,
    output_taxa_cover: *mut f64,
) -> i32 {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        run(n_tsteps, n_groups, n_locs, relative_taxa_cover, output_taxa_cover)
    }));

    match result {
        Ok(Ok(())) => CORAL_OK,
        Ok(Err(e)) => {
            error!(n_tsteps, n_groups, n_locs, error = %e, "coral_diversity failed");
            status_code(&e)
        }
        Err(_) => {
            error!(n_tsteps, n_groups, n_locs, "coral_diversity panicked");
            CORAL_ERR_INTERNAL
        }
    }
}

unsafe fn run(
    n_tsteps: i32,
    n_groups: i32,
    n_locs: i32,
    cover: *const f64,
    output: *mut f64,
) -> Result<()> {
    let shape = CoverShape::from_raw(n_tsteps, n_groups, n_locs)?;
    shape.validate()?;
    if shape.is_empty() {
        return Ok(());
    }

    if cover.is_null() {
        return Err(Error::NullBuffer {
            name: "relative_taxa_cover",
        });
    }
    if output.is_null() {
        return Err(Error::NullBuffer {
            name: "output_taxa_cover",
        });
    }

    let cover_len = addressable_len(shape, shape.cover_len()?)?;
    let output_len = addressable_len(shape, shape.output_len()?)?;

    let cover = unsafe { std::slice::from_raw_parts(cover, cover_len) };
    let output = unsafe { std::slice::from_raw_parts_mut(output, output_len) };

    // The host simulation owns threading; stay on the calling thread.
    let params = DiversityParams {
        mode: ProcessingMode::Sequential,
        ..Default::default()
    };
    diversity_kernel(shape, cover, output, &params)
}

/// Slices may not span more than `isize::MAX` bytes
fn addressable_len(shape: CoverShape, len: usize) -> Result<usize> {
    match len.checked_mul(std::mem::size_of::<f64>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(len),
        _ => Err(Error::ShapeOverflow {
            n_tsteps: shape.n_tsteps,
            n_groups: shape.n_groups,
            n_locs: shape.n_locs,
        }),
    }
}

// ── Diagnostics ──────────────────────────────────────────────────────

/// Static, NUL-terminated description of a status code.
///
/// Never returns null; unknown codes get a generic message.
#[no_mangle]
pub extern "C" fn coral_diversity_status_message(status: i32) -> *const c_char {
    let msg: &'static [u8] = match status {
        CORAL_OK => b"ok\0",
        CORAL_ERR_INVALID_DIMENSION => b"invalid dimension\0",
        CORAL_ERR_INVALID_COVER => b"invalid cover value\0",
        CORAL_ERR_NULL_BUFFER => b"null buffer\0",
        CORAL_ERR_SHAPE_OVERFLOW => b"shape too large\0",
        CORAL_ERR_INTERNAL => b"internal error\0",
        _ => b"unknown status\0",
    };
    msg.as_ptr().cast()
}

/// Install a stderr log subscriber for kernel diagnostics.
///
/// `verbose != 0` enables debug output. Returns `CORAL_OK`, or
/// `CORAL_ERR_INTERNAL` if a global subscriber is already installed.
#[no_mangle]
pub extern "C" fn coral_diversity_init_logging(verbose: i32) -> i32 {
    let level = if verbose != 0 { Level::DEBUG } else { Level::WARN };
    match tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => CORAL_OK,
        Err(_) => CORAL_ERR_INTERNAL,
    }
}
