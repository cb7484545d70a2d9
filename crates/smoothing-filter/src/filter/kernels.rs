use smoothing_grid::GridError;

/// Default number of standard deviations at which the kernel is truncated.
pub const DEFAULT_TRUNCATE: f64 = 4.0;

/// Largest supported kernel radius, `2^20` taps on each side of the center.
pub const MAX_KERNEL_RADIUS: usize = 1 << 20;

pub(crate) fn check_sigma(sigma: f64) -> Result<(), GridError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(GridError::InvalidSigma(sigma));
    }
    Ok(())
}

pub(crate) fn check_truncate(truncate: f64) -> Result<(), GridError> {
    if !truncate.is_finite() || truncate < 0.0 {
        return Err(GridError::InvalidTruncate(truncate));
    }
    Ok(())
}

/// Compute the radius of a gaussian kernel.
///
/// The radius is `floor(truncate * sigma + 0.5)`, the number of taps on each
/// side of the center.
///
/// # Errors
///
/// If the radius exceeds [`MAX_KERNEL_RADIUS`], an error is returned.
pub fn kernel_radius(sigma: f64, truncate: f64) -> Result<usize, GridError> {
    let radius = (truncate * sigma + 0.5).floor();
    if radius > MAX_KERNEL_RADIUS as f64 {
        return Err(GridError::KernelTooLarge(radius, MAX_KERNEL_RADIUS));
    }
    Ok(radius as usize)
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `sigma` - The sigma of the gaussian kernel.
/// * `truncate` - The number of standard deviations covered by the kernel on each side.
///
/// # Returns
///
/// A normalized, symmetric vector of `2 * radius + 1` weights. A zero sigma
/// yields the identity kernel `[1.0]`.
///
/// # Errors
///
/// If sigma or truncate are negative or not finite, or the radius exceeds
/// [`MAX_KERNEL_RADIUS`], an error is returned.
pub fn gaussian_kernel_1d(sigma: f64, truncate: f64) -> Result<Vec<f64>, GridError> {
    check_sigma(sigma)?;
    check_truncate(truncate)?;

    if sigma == 0.0 {
        return Ok(vec![1.0]);
    }

    let radius = kernel_radius(sigma, truncate)? as isize;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    let mut kernel = (-radius..=radius)
        .map(|i| {
            let x = i as f64;
            (-(x * x) / (2.0 * sigma_sq)).exp()
        })
        .collect::<Vec<f64>>();

    // normalize the kernel
    let norm = kernel.iter().sum::<f64>();
    kernel.iter_mut().for_each(|k| *k /= norm);

    log::debug!(
        "gaussian kernel: sigma={sigma} truncate={truncate} radius={radius} len={}",
        kernel.len()
    );

    Ok(kernel)
}

/// A one-dimensional gaussian kernel together with the parameters it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    /// The standard deviation of the gaussian.
    pub sigma: f64,
    /// The truncation factor, in standard deviations.
    pub truncate: f64,
    /// Half-width of the kernel, excluding the center tap.
    pub radius: usize,
    weights: Vec<f64>,
}

impl GaussianKernel {
    /// Build the kernel for the given sigma and truncation factor.
    ///
    /// # Errors
    ///
    /// Same as [`gaussian_kernel_1d`].
    pub fn new(sigma: f64, truncate: f64) -> Result<Self, GridError> {
        let weights = gaussian_kernel_1d(sigma, truncate)?;
        Ok(Self {
            sigma,
            truncate,
            radius: weights.len() / 2,
            weights,
        })
    }

    /// Number of taps, always `2 * radius + 1`.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false, a built kernel has at least one tap.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the kernel leaves samples unchanged.
    pub fn is_identity(&self) -> bool {
        self.radius == 0
    }

    /// The normalized weights, center at index `radius`.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_kernel_radius() -> Result<(), GridError> {
        assert_eq!(kernel_radius(1.0, 4.0)?, 4);
        assert_eq!(kernel_radius(1.5, 4.0)?, 6);
        assert_eq!(kernel_radius(0.5, 1.0)?, 1);
        assert_eq!(kernel_radius(0.1, 4.0)?, 0);
        assert_eq!(kernel_radius(0.125, 4.0)?, 1);
        assert_eq!(kernel_radius(2.0, 0.0)?, 0);
        assert_eq!(kernel_radius(MAX_KERNEL_RADIUS as f64, 1.0)?, MAX_KERNEL_RADIUS);
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_too_large() {
        assert_eq!(
            kernel_radius(1e20, 4.0),
            Err(GridError::KernelTooLarge(4e20, MAX_KERNEL_RADIUS))
        );
        assert!(matches!(
            gaussian_kernel_1d(1e20, 4.0),
            Err(GridError::KernelTooLarge(_, MAX_KERNEL_RADIUS))
        ));
        assert!(matches!(
            gaussian_kernel_1d(1e9, 4.0),
            Err(GridError::KernelTooLarge(_, MAX_KERNEL_RADIUS))
        ));
        assert!(matches!(
            GaussianKernel::new(f64::MAX, 4.0),
            Err(GridError::KernelTooLarge(_, MAX_KERNEL_RADIUS))
        ));
    }

    #[test]
    fn test_gaussian_kernel_1d() -> Result<(), GridError> {
        let kernel = gaussian_kernel_1d(0.5, 4.0)?;

        let expected = [
            0.00026386508273735414,
            0.10645077197359151,
            0.7865707258873422,
            0.10645077197359151,
            0.00026386508273735414,
        ];

        assert_eq!(kernel.len(), expected.len());
        for (k, e) in kernel.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(k, e, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_normalized_and_symmetric() -> Result<(), GridError> {
        for sigma in [0.05, 0.3, 0.5, 1.0, 1.7, 2.5, 5.0, 12.0] {
            for truncate in [0.5, 1.0, 3.0, 4.0] {
                let kernel = gaussian_kernel_1d(sigma, truncate)?;
                assert_eq!(kernel.len() % 2, 1);
                assert_eq!(kernel.len(), 2 * kernel_radius(sigma, truncate)? + 1);
                assert_abs_diff_eq!(kernel.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
                for i in 0..kernel.len() {
                    assert_eq!(kernel[i], kernel[kernel.len() - 1 - i]);
                    assert!(kernel[i] >= 0.0);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_identity() -> Result<(), GridError> {
        assert_eq!(gaussian_kernel_1d(0.0, 4.0)?, vec![1.0]);
        assert_eq!(gaussian_kernel_1d(1e-6, 4.0)?, vec![1.0]);
        assert_eq!(gaussian_kernel_1d(3.0, 0.0)?, vec![1.0]);

        let kernel = GaussianKernel::new(0.0, DEFAULT_TRUNCATE)?;
        assert!(kernel.is_identity());
        assert_eq!(kernel.len(), 1);
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_invalid() {
        assert_eq!(
            gaussian_kernel_1d(-1.0, 4.0),
            Err(GridError::InvalidSigma(-1.0))
        );
        assert!(matches!(
            gaussian_kernel_1d(f64::NAN, 4.0),
            Err(GridError::InvalidSigma(_))
        ));
        assert_eq!(
            gaussian_kernel_1d(1.0, -2.0),
            Err(GridError::InvalidTruncate(-2.0))
        );
        assert_eq!(
            gaussian_kernel_1d(1.0, f64::INFINITY),
            Err(GridError::InvalidTruncate(f64::INFINITY))
        );
    }

    #[test]
    fn test_gaussian_kernel_struct() -> Result<(), GridError> {
        let kernel = GaussianKernel::new(1.0, DEFAULT_TRUNCATE)?;
        assert_eq!(kernel.radius, 4);
        assert_eq!(kernel.len(), 9);
        assert!(!kernel.is_empty());
        assert!(!kernel.is_identity());
        assert_abs_diff_eq!(kernel.as_slice()[4], 0.39894346935609776, epsilon = 1e-12);
        Ok(())
    }
}
