use smoothing_grid::{Grid, GridError, PrettyPrint, Sample};

use super::{separable_filter, GaussianConfig};

/// Blur a grid using a gaussian filter
///
/// The kernel is built from `config.sigma` and `config.truncate` and applied
/// along x, then along y, on `f64` samples. Quantized samples are widened
/// first and narrowed once when written to `dst`. A kernel of radius 0 (zero
/// or tiny sigma) copies `src` into `dst`.
///
/// # Arguments
///
/// * `src` - The source grid.
/// * `dst` - The destination grid.
/// * `config` - The smoothing parameters.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn gaussian_blur<T: Sample>(
    src: &Grid<T>,
    dst: &mut Grid<T>,
    config: &GaussianConfig,
) -> Result<(), GridError> {
    config.validate()?;

    if src.is_empty() {
        return Err(GridError::EmptyGrid(src.width(), src.height()));
    }

    if src.size() != dst.size() {
        return Err(GridError::InvalidGridSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let kernel = config.kernel()?;
    log::trace!("gaussian kernel weights: {}", kernel.as_slice().pretty_print());

    if kernel.is_identity() {
        log::debug!("gaussian blur: sigma={} gives identity kernel", config.sigma);
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let wide = src.widen();
    let mut smoothed = Grid::from_size_val(src.size(), 0.0)?;
    separable_filter(
        &wide,
        &mut smoothed,
        kernel.as_slice(),
        kernel.as_slice(),
        config.border,
        config.strategy,
    )?;

    dst.as_slice_mut()
        .iter_mut()
        .zip(smoothed.as_slice())
        .for_each(|(out, &v)| *out = T::from_f64(v));

    Ok(())
}

/// Smooth a grid of any [`Sample`] type.
///
/// Returns a freshly allocated grid of the same size; `src` is not modified.
pub fn gaussian_smooth_samples<T: Sample>(
    src: &Grid<T>,
    config: &GaussianConfig,
) -> Result<Grid<T>, GridError> {
    let mut dst = Grid::from_size_val(src.size(), T::from_f64(0.0))?;
    gaussian_blur(src, &mut dst, config)?;
    Ok(dst)
}

/// Smooth a floating point grid with the given parameters.
pub fn gaussian_smooth_with_config(
    src: &Grid<f64>,
    config: &GaussianConfig,
) -> Result<Grid<f64>, GridError> {
    gaussian_smooth_samples(src, config)
}

/// Smooth a floating point grid with the default truncate of 4 standard deviations.
///
/// # Examples
///
/// ```
/// use smoothing_filter::filter::gaussian_smooth;
/// use smoothing_grid::Grid;
///
/// let grid = Grid::from_rows(&[[5.0, 5.0, 5.0], [5.0, 5.0, 5.0]]).unwrap();
/// let smoothed = gaussian_smooth(&grid, 1.0).unwrap();
///
/// assert_eq!(smoothed.size(), grid.size());
/// assert!(smoothed.as_slice().iter().all(|v| (v - 5.0).abs() < 1e-9));
/// ```
pub fn gaussian_smooth(src: &Grid<f64>, sigma: f64) -> Result<Grid<f64>, GridError> {
    gaussian_smooth_with_config(src, &GaussianConfig::new(sigma))
}

/// Smooth an 8-bit grid with the given parameters.
///
/// Results are rounded half to even and clamped to `[0, 255]`.
pub fn gaussian_smooth_quantized_with_config(
    src: &Grid<u8>,
    config: &GaussianConfig,
) -> Result<Grid<u8>, GridError> {
    gaussian_smooth_samples(src, config)
}

/// Smooth an 8-bit grid with the default truncate of 4 standard deviations.
pub fn gaussian_smooth_quantized(src: &Grid<u8>, sigma: f64) -> Result<Grid<u8>, GridError> {
    gaussian_smooth_quantized_with_config(src, &GaussianConfig::new(sigma))
}
