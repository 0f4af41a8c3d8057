//! Parallel processing strategies

use reefmetrics_core::{Error, ProcessingMode, Result};
use tracing::debug;

/// Strategy for running a kernel body under a processing mode
pub trait ParallelStrategy {
    /// Run `op` inside the thread pool this mode selects.
    ///
    /// Parallel iterators started inside `op` use that pool. Sequential
    /// mode runs `op` on the calling thread.
    fn install<R, F>(&self, op: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send;

    /// Number of threads cells may be spread across
    fn threads(&self) -> usize;
}

impl ParallelStrategy for ProcessingMode {
    fn install<R, F>(&self, op: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match self {
            ProcessingMode::Sequential | ProcessingMode::Parallel => Ok(op()),
            ProcessingMode::ParallelWith(threads) => {
                if *threads == 0 {
                    return Err(Error::InvalidParameter {
                        name: "threads",
                        value: "0".into(),
                        reason: "dedicated pool needs at least one thread".into(),
                    });
                }
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(*threads)
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?;
                debug!(threads, "running on dedicated pool");
                Ok(pool.install(op))
            }
        }
    }

    fn threads(&self) -> usize {
        match self {
            ProcessingMode::Sequential => 1,
            ProcessingMode::Parallel => rayon::current_num_threads(),
            ProcessingMode::ParallelWith(threads) => *threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_sequential_runs_inline() {
        let caller = std::thread::current().id();
        let ran_on = ProcessingMode::Sequential
            .install(|| std::thread::current().id())
            .unwrap();
        assert_eq!(ran_on, caller);
    }

    #[test]
    fn test_dedicated_pool_size() {
        let threads = ProcessingMode::ParallelWith(3)
            .install(rayon::current_num_threads)
            .unwrap();
        assert_eq!(threads, 3);
        assert_eq!(ProcessingMode::ParallelWith(3).threads(), 3);
    }

    #[test]
    fn test_parallel_results_match_sequential() {
        let work = || (0..1000u64).into_par_iter().map(|i| i * i).sum::<u64>();
        let par = ProcessingMode::Parallel.install(work).unwrap();
        let seq: u64 = (0..1000u64).map(|i| i * i).sum();
        assert_eq!(par, seq);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = ProcessingMode::ParallelWith(0).install(|| ()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "threads", .. }));
    }

    #[test]
    fn test_thread_counts() {
        assert_eq!(ProcessingMode::Sequential.threads(), 1);
        assert_eq!(ProcessingMode::Parallel.threads(), rayon::current_num_threads());
    }
}
