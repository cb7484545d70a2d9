#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// dense sample grid representation.
pub mod grid;

/// Error types for the grid module.
pub mod error;

/// conversions between quantized and floating point samples.
pub mod sample;

/// diagnostic formatting of numeric arrays.
pub mod pretty;

pub use crate::error::{GridError, ParallelError};
pub use crate::grid::{Grid, GridSize};
pub use crate::pretty::PrettyPrint;
pub use crate::sample::Sample;
