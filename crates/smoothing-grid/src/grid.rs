use crate::error::GridError;
use crate::sample::Sample;

/// Grid size in samples
///
/// A struct to represent the size of a grid in samples.
///
/// # Examples
///
/// ```
/// use smoothing_grid::GridSize;
///
/// let grid_size = GridSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(grid_size.width, 10);
/// assert_eq!(grid_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Number of samples along the x axis
    pub width: usize,
    /// Number of samples along the y axis
    pub height: usize,
}

impl GridSize {
    /// Total number of samples.
    pub fn num_samples(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GridSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A dense two-dimensional grid of samples.
///
/// Samples are stored row-major: the sample at `(x, y)` lives at
/// `y * width + x`, so every row is contiguous in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    size: GridSize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new grid from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in samples.
    /// * `data` - The row-major sample data.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the grid size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothing_grid::{Grid, GridSize};
    ///
    /// let grid = Grid::<u8>::new(
    ///     GridSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(grid.width(), 10);
    /// assert_eq!(grid.height(), 20);
    /// ```
    pub fn new(size: GridSize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != size.num_samples() {
            return Err(GridError::InvalidDataLength(
                data.len(),
                size.num_samples(),
            ));
        }
        Ok(Self { size, data })
    }

    /// Create a new grid filled with a single value.
    pub fn from_size_val(size: GridSize, val: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        Grid::new(size, vec![val; size.num_samples()])
    }

    /// Create a new grid by evaluating `f(x, y)` for every sample.
    pub fn from_fn(size: GridSize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size.num_samples());
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(f(x, y));
            }
        }
        Self { size, data }
    }

    /// Create a new grid from a nested row literal.
    ///
    /// Each inner slice is one row, i.e. one value of `y`.
    ///
    /// # Errors
    ///
    /// If the rows have different lengths, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothing_grid::Grid;
    ///
    /// let grid = Grid::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    ///
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.get(2, 1), Some(&6.0));
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows(y, row.len(), width));
            }
            data.extend_from_slice(row);
        }
        Grid::new(
            GridSize {
                width,
                height: rows.len(),
            },
            data,
        )
    }

    /// Get the size of the grid in samples.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get the number of samples along the x axis.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the number of samples along the y axis.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Whether the grid holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the sample at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.data.get(y * self.width() + x)
    }

    /// Get the sample at `(x, y)` without checking each axis.
    ///
    /// # Panics
    ///
    /// Panics if `y * width + x` is past the end of the data.
    pub fn get_unchecked(&self, x: usize, y: usize) -> &T {
        &self.data[y * self.width() + x]
    }

    /// Get a mutable reference to the sample at `(x, y)`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let width = self.width();
        self.data.get_mut(y * width + x)
    }

    /// Get the row-major sample data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the row-major sample data mutably.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the row at `y`.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height() {
            return None;
        }
        let start = y * self.width();
        Some(&self.data[start..start + self.width()])
    }

    /// Consume the grid and return its row-major sample data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every sample, producing a new grid of the same size.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Cast the samples of the grid to a different type.
    ///
    /// # Errors
    ///
    /// If any sample is not representable in `U`, an error is returned.
    pub fn cast<U>(&self) -> Result<Grid<U>, GridError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(GridError::CastError))
            .collect::<Result<Vec<U>, GridError>>()?;

        Grid::new(self.size, casted_data)
    }
}

impl<T: Sample> Grid<T> {
    /// Widen every sample to the `f64` working representation.
    ///
    /// The conversion is exact for all [`Sample`] types.
    pub fn widen(&self) -> Grid<f64> {
        self.map(|&v| v.to_f64())
    }

    /// Narrow an `f64` grid into this sample type.
    ///
    /// Quantized types round half to even and clamp to their range.
    pub fn narrow(src: &Grid<f64>) -> Self {
        src.map(|&v| T::from_f64(v))
    }
}
