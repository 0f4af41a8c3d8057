//! Calls through the exported C symbols, as a simulation driver would.

use std::ptr;

use approx::assert_abs_diff_eq;
use reef_metrics::{
    coral_diversity, CORAL_ERR_INVALID_COVER, CORAL_ERR_INVALID_DIMENSION, CORAL_ERR_NULL_BUFFER,
    CORAL_ERR_SHAPE_OVERFLOW, CORAL_OK,
};

#[test]
fn computes_shannon_per_cell() {
    // n_tsteps=2, n_groups=3, n_locs=1
    let cover = [0.5, 0.5, 0.0, 1.0, 0.0, 0.0];
    let mut out = [f64::NAN; 2];

    let status = unsafe { coral_diversity(2, 3, 1, cover.as_ptr(), out.as_mut_ptr()) };

    assert_eq!(status, CORAL_OK);
    assert_abs_diff_eq!(out[0], 2f64.ln(), epsilon = 1e-12);
    assert_eq!(out[1], 0.0);
}

#[test]
fn multi_location_layout() {
    // n_tsteps=1, n_groups=2, n_locs=2: loc 0 = (0.3, 0.3), loc 1 = (0.0, 0.6)
    let cover = [0.3, 0.0, 0.3, 0.6];
    let mut out = [f64::NAN; 2];

    let status = unsafe { coral_diversity(1, 2, 2, cover.as_ptr(), out.as_mut_ptr()) };

    assert_eq!(status, CORAL_OK);
    assert_abs_diff_eq!(out[0], 2f64.ln(), epsilon = 1e-12);
    assert_eq!(out[1], 0.0);
}

#[test]
fn empty_shape_accepts_null_pointers() {
    let status = unsafe { coral_diversity(0, 3, 4, ptr::null(), ptr::null_mut()) };
    assert_eq!(status, CORAL_OK);
    let status = unsafe { coral_diversity(5, 3, 0, ptr::null(), ptr::null_mut()) };
    assert_eq!(status, CORAL_OK);
}

#[test]
fn negative_dimensions_rejected() {
    let mut out = [0.0; 1];
    let cover = [1.0];
    for (t, g, l) in [(-1, 1, 1), (1, -1, 1), (1, 1, -1), (-1, 0, 0)] {
        let status = unsafe { coral_diversity(t, g, l, cover.as_ptr(), out.as_mut_ptr()) };
        assert_eq!(status, CORAL_ERR_INVALID_DIMENSION, "({t}, {g}, {l})");
    }
}

#[test]
fn zero_groups_with_cells_rejected() {
    let mut out = [0.0; 2];
    let status = unsafe { coral_diversity(1, 0, 2, ptr::null(), out.as_mut_ptr()) };
    assert_eq!(status, CORAL_ERR_INVALID_DIMENSION);
}

#[test]
fn null_buffers_rejected_for_non_empty_shape() {
    let cover = [0.5, 0.5];
    let mut out = [0.0; 1];
    let status = unsafe { coral_diversity(1, 2, 1, ptr::null(), out.as_mut_ptr()) };
    assert_eq!(status, CORAL_ERR_NULL_BUFFER);
    let status = unsafe { coral_diversity(1, 2, 1, cover.as_ptr(), ptr::null_mut()) };
    assert_eq!(status, CORAL_ERR_NULL_BUFFER);
}

#[test]
fn invalid_cover_leaves_output_untouched() {
    let cover = [0.5, 0.5, 0.3, -0.1];
    let mut out = [-7.0; 2];

    let status = unsafe { coral_diversity(2, 2, 1, cover.as_ptr(), out.as_mut_ptr()) };

    assert_eq!(status, CORAL_ERR_INVALID_COVER);
    assert_eq!(out, [-7.0, -7.0]);
}

#[test]
fn sum_above_one_rejected() {
    let cover = [0.7, 0.7];
    let mut out = [0.0; 1];
    let status = unsafe { coral_diversity(1, 2, 1, cover.as_ptr(), out.as_mut_ptr()) };
    assert_eq!(status, CORAL_ERR_INVALID_COVER);
}

#[test]
fn oversized_shapes_rejected_before_any_access() {
    // element count overflows usize, then byte count overflows isize::MAX
    let cover = [0.5, 0.5];
    let mut out = [3.0; 2];
    for (t, g, l) in [(i32::MAX, i32::MAX, i32::MAX), (i32::MAX, 1, i32::MAX)] {
        let status = unsafe { coral_diversity(t, g, l, cover.as_ptr(), out.as_mut_ptr()) };
        assert_eq!(status, CORAL_ERR_SHAPE_OVERFLOW, "({t}, {g}, {l})");
        assert_eq!(out, [3.0, 3.0]);
    }
}
