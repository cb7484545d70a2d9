use smoothing_grid::GridError;

use super::kernels::{check_sigma, check_truncate, GaussianKernel, DEFAULT_TRUNCATE};
use crate::padding::BorderMode;
use crate::parallel::ExecutionStrategy;

/// Parameters of a gaussian smoothing call.
///
/// # Examples
///
/// ```
/// use smoothing_filter::filter::GaussianConfig;
/// use smoothing_filter::padding::BorderMode;
/// use smoothing_filter::parallel::ExecutionStrategy;
///
/// let config = GaussianConfig::new(1.5)
///     .with_truncate(3.0)
///     .with_border(BorderMode::Replicate)
///     .with_strategy(ExecutionStrategy::Serial);
///
/// assert_eq!(config.sigma, 1.5);
/// assert_eq!(config.truncate, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianConfig {
    /// Standard deviation of the gaussian, in samples.
    pub sigma: f64,
    /// Kernel half-width in standard deviations.
    pub truncate: f64,
    /// How samples outside of the grid are read.
    pub border: BorderMode,
    /// How the two passes are scheduled.
    pub strategy: ExecutionStrategy,
}

impl GaussianConfig {
    /// Create a config with the default truncate, reflect border and automatic strategy.
    pub fn new(sigma: f64) -> Self {
        Self {
            sigma,
            truncate: DEFAULT_TRUNCATE,
            border: BorderMode::default(),
            strategy: ExecutionStrategy::default(),
        }
    }

    /// Set the truncation factor.
    pub fn with_truncate(mut self, truncate: f64) -> Self {
        self.truncate = truncate;
        self
    }

    /// Set the border mode.
    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check that sigma and truncate are finite and non-negative.
    pub fn validate(&self) -> Result<(), GridError> {
        check_sigma(self.sigma)?;
        check_truncate(self.truncate)
    }

    /// Build the kernel described by this config.
    pub fn kernel(&self) -> Result<GaussianKernel, GridError> {
        GaussianKernel::new(self.sigma, self.truncate)
    }
}
