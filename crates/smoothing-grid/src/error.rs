/// Errors that can occur while running work on a thread pool.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// An error type for the grid and filter operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GridError {
    /// Error when the data length does not match the grid size.
    #[error("Data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a grid has no samples.
    #[error("Grid is empty ({0}x{1})")]
    EmptyGrid(usize, usize),

    /// Error when the source and destination sizes differ.
    #[error("Invalid grid size: source {0}x{1}, destination {2}x{3}")]
    InvalidGridSize(usize, usize, usize, usize),

    /// Error when a kernel does not have an odd, non-zero length.
    #[error("Invalid kernel length ({0}), expected an odd, non-zero length")]
    InvalidKernelLength(usize),

    /// Error when sigma is negative or not finite.
    #[error("Invalid sigma ({0}), expected a finite value >= 0")]
    InvalidSigma(f64),

    /// Error when the truncation factor is negative or not finite.
    #[error("Invalid truncate ({0}), expected a finite value >= 0")]
    InvalidTruncate(f64),

    /// Error when the kernel radius exceeds the supported maximum.
    #[error("Kernel radius ({0}) exceeds the maximum of {1}")]
    KernelTooLarge(f64, usize),

    /// Error when a sample cannot be cast to the target type.
    #[error("Failed to cast grid data")]
    CastError,

    /// Error when the rows of a nested literal have different lengths.
    #[error("Row {0} has length {1}, expected {2}")]
    RaggedRows(usize, usize, usize),

    /// Error raised by the parallel execution backend.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
