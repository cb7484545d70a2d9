//! Filter operations
//!
//! This module provides Gaussian smoothing for sample grids.

/// Filter kernels
pub mod kernels;

/// Smoothing parameters
mod config;
pub use config::*;

/// Filter operations
mod ops;
pub use ops::*;

/// Separable filter operations
mod separable_filter;
pub use separable_filter::*;
