//! Run configuration shared across kernels

/// Processing mode for kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded processing
    Sequential,
    /// Parallel processing on the global rayon pool
    #[default]
    Parallel,
    /// Parallel on a dedicated pool with the given number of threads
    ParallelWith(usize),
}

impl ProcessingMode {
    /// Whether cells may be evaluated on more than one thread
    pub fn is_parallel(&self) -> bool {
        !matches!(self, ProcessingMode::Sequential)
    }
}
