use smoothing_grid::ParallelError;

/// Number of samples from which [`ExecutionStrategy::Auto`] switches to the parallel path.
pub const PARALLEL_THRESHOLD: usize = 100_000;

/// Controls how the smoothing passes are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small grids, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    Parallel,

    /// Pick [`ExecutionStrategy::Parallel`] for grids of at least
    /// [`PARALLEL_THRESHOLD`] samples and [`ExecutionStrategy::Serial`] otherwise.
    #[default]
    Auto,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Whether a grid of `num_samples` samples is processed on the parallel path.
    pub fn is_parallel(&self, num_samples: usize) -> bool {
        match self {
            ExecutionStrategy::Serial => false,
            ExecutionStrategy::Parallel | ExecutionStrategy::Fixed(_) => true,
            ExecutionStrategy::Auto => num_samples >= PARALLEL_THRESHOLD,
        }
    }

    /// Run `op` under this strategy.
    ///
    /// [`ExecutionStrategy::Fixed`] installs a local thread pool around `op`, every
    /// other strategy runs it on the calling thread and lets rayon use the global pool.
    pub fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> Result<R, ParallelError> {
        match *self {
            ExecutionStrategy::Fixed(n) => {
                if n == 0 {
                    return Err(ParallelError::InvalidThreadCount(n));
                }
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ParallelError::BuildError(e.to_string()))?;
                Ok(pool.install(op))
            }
            _ => Ok(op()),
        }
    }
}
