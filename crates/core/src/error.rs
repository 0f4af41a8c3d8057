//! Error types for ReefMetrics

use thiserror::Error;

/// Main error type for ReefMetrics operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid dimension: {name} = {value}")]
    InvalidDimension { name: &'static str, value: i64 },

    #[error("Invalid cover value at (t={t}, l={l}): {violation}")]
    InvalidCoverValue {
        t: usize,
        l: usize,
        violation: CoverViolation,
    },

    #[error("Null buffer: {name}")]
    NullBuffer { name: &'static str },

    #[error("Buffer too short: {name} holds {actual} elements, shape requires {expected}")]
    BufferTooShort {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Shape overflow: {n_tsteps} x {n_groups} x {n_locs} elements do not fit in memory")]
    ShapeOverflow {
        n_tsteps: usize,
        n_groups: usize,
        n_locs: usize,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("{0}")]
    Other(String),
}

/// What was wrong with the cover values of a single cell.
///
/// `index` is the raw position in the flat input buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoverViolation {
    #[error("group {group} (index {index}) is not finite: {value}")]
    NonFinite { group: usize, index: usize, value: f64 },

    #[error("group {group} (index {index}) is negative: {value}")]
    Negative { group: usize, index: usize, value: f64 },

    #[error("group {group} (index {index}) exceeds 1: {value}")]
    AboveOne { group: usize, index: usize, value: f64 },

    #[error("cover sums to {sum}, which exceeds 1")]
    SumExceedsOne { sum: f64 },
}

impl CoverViolation {
    /// Raw input index of the offending value, if the violation is about a single value
    pub fn index(&self) -> Option<usize> {
        match *self {
            CoverViolation::NonFinite { index, .. }
            | CoverViolation::Negative { index, .. }
            | CoverViolation::AboveOne { index, .. } => Some(index),
            CoverViolation::SumExceedsOne { .. } => None,
        }
    }
}

/// Result type alias for ReefMetrics operations
pub type Result<T> = std::result::Result<T, Error>;
