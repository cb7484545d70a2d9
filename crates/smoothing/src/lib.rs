#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! ```
//! use smoothing::filter::filter::gaussian_smooth_quantized;
//! use smoothing::grid::Grid;
//!
//! let grid = Grid::from_rows(&[[10u8, 20, 30], [40, 50, 60], [70, 80, 90]]).unwrap();
//! let smoothed = gaussian_smooth_quantized(&grid, 1.0).unwrap();
//!
//! assert_eq!(smoothed.get(1, 1), Some(&50));
//! ```

#[doc(inline)]
pub use smoothing_grid as grid;

#[doc(inline)]
pub use smoothing_filter as filter;
