#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// gaussian smoothing module.
pub mod filter;

/// boundary index mapping module.
pub mod padding;

/// module containing parallelization utilities.
pub mod parallel;
