use rayon::prelude::*;
use smoothing_grid::{Grid, GridError};

use crate::padding::BorderMode;
use crate::parallel::ExecutionStrategy;

/// A separable 2D filter that applies horizontal and vertical 1D convolutions sequentially.
///
/// Out-of-range taps are resolved through the border mode, so every tap reads a
/// real sample whatever the grid size.
struct SeparableFilter<'a> {
    kernel_x: &'a [f64],
    kernel_y: &'a [f64],
    border: BorderMode,
}

impl SeparableFilter<'_> {
    /// Convolve one row of the source along x.
    fn filter_row(&self, src_row: &[f64], temp_row: &mut [f64]) {
        let cols = src_row.len();
        let half = (self.kernel_x.len() / 2) as isize;

        for (c, out) in temp_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &w) in self.kernel_x.iter().enumerate() {
                let x = self.border.map_index(c as isize + k as isize - half, cols);
                acc += src_row[x] * w;
            }
            *out = acc;
        }
    }

    /// Produce output row `r` by convolving the intermediate buffer along y.
    ///
    /// Taps are accumulated a whole row at a time; each sample still sums its
    /// taps in kernel order.
    fn filter_col(&self, temp: &[f64], r: usize, rows: usize, dst_row: &mut [f64]) {
        let cols = dst_row.len();
        let half = (self.kernel_y.len() / 2) as isize;

        dst_row.fill(0.0);
        for (k, &w) in self.kernel_y.iter().enumerate() {
            let y = self.border.map_index(r as isize + k as isize - half, rows);
            let temp_row = &temp[y * cols..(y + 1) * cols];
            dst_row
                .iter_mut()
                .zip(temp_row.iter())
                .for_each(|(acc, &t)| *acc += t * w);
        }
    }

    fn apply_serial(
        &self,
        temp: &mut [f64],
        src_data: &[f64],
        dst_data: &mut [f64],
        cols: usize,
    ) {
        let rows = src_data.len() / cols;

        // Horizontal
        temp.chunks_exact_mut(cols)
            .zip(src_data.chunks_exact(cols))
            .for_each(|(temp_row, src_row)| self.filter_row(src_row, temp_row));

        // Vertical
        let temp: &[f64] = temp;
        dst_data
            .chunks_exact_mut(cols)
            .enumerate()
            .for_each(|(r, dst_row)| self.filter_col(temp, r, rows, dst_row));
    }

    fn apply_parallel(
        &self,
        temp: &mut [f64],
        src_data: &[f64],
        dst_data: &mut [f64],
        cols: usize,
    ) {
        let rows = src_data.len() / cols;

        // Horizontal (parallel)
        temp.par_chunks_exact_mut(cols)
            .zip(src_data.par_chunks_exact(cols))
            .for_each(|(temp_row, src_row)| self.filter_row(src_row, temp_row));

        // Vertical (parallel), starts only once every intermediate row is written
        let temp: &[f64] = temp;
        dst_data
            .par_chunks_exact_mut(cols)
            .enumerate()
            .for_each(|(r, dst_row)| self.filter_col(temp, r, rows, dst_row));
    }
}

fn check_kernel(kernel: &[f64]) -> Result<(), GridError> {
    if kernel.len() % 2 == 0 {
        return Err(GridError::InvalidKernelLength(kernel.len()));
    }
    Ok(())
}

/// Apply a separable filter to a grid.
///
/// The horizontal pass writes a temporary grid, the vertical pass reads it and
/// writes `dst`. `src` is never modified.
///
/// # Arguments
///
/// * `src` - The source grid.
/// * `dst` - The destination grid, same size as `src`.
/// * `kernel_x` - The kernel applied along x, odd length, center at `len / 2`.
/// * `kernel_y` - The kernel applied along y, odd length, center at `len / 2`.
/// * `border` - How taps outside of the grid are mapped back inside.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, `Auto` or `Fixed`.
///
/// # Errors
///
/// Fails when the grid is empty, the sizes differ, a kernel length is even,
/// or a `Fixed` thread pool cannot be built. `dst` is left untouched on error.
pub fn separable_filter(
    src: &Grid<f64>,
    dst: &mut Grid<f64>,
    kernel_x: &[f64],
    kernel_y: &[f64],
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), GridError> {
    check_kernel(kernel_x)?;
    check_kernel(kernel_y)?;

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

    let filter = SeparableFilter {
        kernel_x,
        kernel_y,
        border,
    };

    let cols = src.cols();
    let num_samples = src.size().num_samples();
    let parallel = strategy.is_parallel(num_samples);

    log::debug!(
        "separable filter: {} taps {}x{} border {:?} strategy {:?} parallel {}",
        src.size(),
        kernel_x.len(),
        kernel_y.len(),
        border,
        strategy,
        parallel
    );

    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();
    let mut temp = vec![0.0f64; num_samples];

    strategy.install(|| {
        if parallel {
            filter.apply_parallel(&mut temp, src_data, dst_data, cols)
        } else {
            filter.apply_serial(&mut temp, src_data, dst_data, cols)
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smoothing_grid::GridSize;

    #[test]
    fn test_separable_filter_box() -> Result<(), GridError> {
        let size = GridSize {
            width: 5,
            height: 5,
        };

        #[rustfmt::skip]
        let grid = Grid::new(
            size,
            vec![
                0.0, 0.0, 0.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 0.0, 0.0,
                0.0, 0.0, 9.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 0.0, 0.0,
            ],
        )?;

        let mut dst = Grid::from_size_val(size, 0f64)?;
        let kernel = vec![1.0 / 3.0; 3];
        separable_filter(
            &grid,
            &mut dst,
            &kernel,
            &kernel,
            BorderMode::Reflect,
            ExecutionStrategy::Serial,
        )?;

        let expected_support = [6, 7, 8, 11, 12, 13, 16, 17, 18];
        for (i, &v) in dst.as_slice().iter().enumerate() {
            if expected_support.contains(&i) {
                approx::assert_abs_diff_eq!(v, 1.0, epsilon = 1e-12);
            } else {
                assert_eq!(v, 0.0);
            }
        }

        let xsum = dst.as_slice().iter().sum::<f64>();
        approx::assert_abs_diff_eq!(xsum, 9.0, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn test_separable_filter_reflect_border() -> Result<(), GridError> {
        // a single row: the vertical pass with [1.0] is the identity
        let grid = Grid::from_rows(&[[1.0, 2.0, 3.0]])?;
        let mut dst = Grid::from_size_val(grid.size(), 0.0)?;

        separable_filter(
            &grid,
            &mut dst,
            &[1.0, 1.0, 1.0],
            &[1.0],
            BorderMode::Reflect,
            ExecutionStrategy::Serial,
        )?;
        // [1 1 2], [1 2 3], [2 3 3]
        assert_eq!(dst.as_slice(), &[4.0, 6.0, 8.0]);

        separable_filter(
            &grid,
            &mut dst,
            &[1.0, 1.0, 1.0],
            &[1.0],
            BorderMode::Reflect101,
            ExecutionStrategy::Serial,
        )?;
        // [2 1 2], [1 2 3], [2 3 2]
        assert_eq!(dst.as_slice(), &[5.0, 6.0, 7.0]);

        Ok(())
    }

    #[test]
    fn test_separable_filter_kernel_wider_than_grid() -> Result<(), GridError> {
        let grid = Grid::from_rows(&[[1.0, 2.0]])?;
        let mut dst = Grid::from_size_val(grid.size(), 0.0)?;

        // x=0 reads 2 2 1 1 2 2 1, x=1 reads 2 1 1 2 2 1 1
        separable_filter(
            &grid,
            &mut dst,
            &[1.0; 7],
            &[1.0],
            BorderMode::Reflect,
            ExecutionStrategy::Serial,
        )?;
        assert_eq!(dst.as_slice(), &[11.0, 10.0]);
        Ok(())
    }

    #[test]
    fn test_separable_filter_invalid_kernel() -> Result<(), GridError> {
        let grid = Grid::from_size_val([3, 3].into(), 1.0)?;
        let mut dst = Grid::from_size_val([3, 3].into(), 0.0)?;

        let res = separable_filter(
            &grid,
            &mut dst,
            &[0.5, 0.5],
            &[1.0],
            BorderMode::Reflect,
            ExecutionStrategy::Serial,
        );
        assert_eq!(res, Err(GridError::InvalidKernelLength(2)));

        let res = separable_filter(
            &grid,
            &mut dst,
            &[1.0],
            &[],
            BorderMode::Reflect,
            ExecutionStrategy::Serial,
        );
        assert_eq!(res, Err(GridError::InvalidKernelLength(0)));
        Ok(())
    }

    #[test]
    fn test_separable_filter_invalid_size() -> Result<(), GridError> {
        let grid = Grid::from_size_val([3, 3].into(), 1.0)?;
        let mut dst = Grid::from_size_val([3, 2].into(), 0.0)?;

        let res = separable_filter(
            &grid,
            &mut dst,
            &[1.0],
            &[1.0],
            BorderMode::Reflect,
            ExecutionStrategy::Serial,
        );
        assert_eq!(res, Err(GridError::InvalidGridSize(3, 3, 3, 2)));

        let empty = Grid::<f64>::new([0, 4].into(), vec![])?;
        let mut empty_dst = empty.clone();
        let res = separable_filter(
            &empty,
            &mut empty_dst,
            &[1.0],
            &[1.0],
            BorderMode::Reflect,
            ExecutionStrategy::Serial,
        );
        assert_eq!(res, Err(GridError::EmptyGrid(0, 4)));
        Ok(())
    }

    #[test]
    fn test_separable_filter_with_strategy() -> Result<(), GridError> {
        let size = GridSize {
            width: 37,
            height: 23,
        };
        let grid = Grid::from_fn(size, |x, y| ((x * 31 + y * 17) % 251) as f64);
        let kernel_x = [0.1, 0.2, 0.4, 0.2, 0.1];
        let kernel_y = [0.25, 0.5, 0.25];

        let run = |strategy| -> Result<Grid<f64>, GridError> {
            let mut dst = Grid::from_size_val(size, 0.0)?;
            separable_filter(
                &grid,
                &mut dst,
                &kernel_x,
                &kernel_y,
                BorderMode::Reflect,
                strategy,
            )?;
            Ok(dst)
        };

        let serial = run(ExecutionStrategy::Serial)?;
        assert_eq!(run(ExecutionStrategy::Parallel)?, serial);
        assert_eq!(run(ExecutionStrategy::Auto)?, serial);
        assert_eq!(run(ExecutionStrategy::Fixed(3))?, serial);

        assert!(matches!(
            run(ExecutionStrategy::Fixed(0)),
            Err(GridError::Parallel(_))
        ));

        Ok(())
    }
}
