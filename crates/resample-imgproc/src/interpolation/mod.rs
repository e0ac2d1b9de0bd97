//! Pixel interpolation methods for image resampling.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, copies the nearest source pixel (no blending)
//! - **Lanczos3**: Windowed sinc convolution, stretched when downscaling to
//!   filter out frequencies the destination grid cannot represent
//!
//! The modes are exposed through the [`Sampler`] trait so that the row
//! scheduler in [`crate::parallel`] can run any of them.

/// Coordinate mapping between destination and source pixel grids.
pub mod grid;

pub(crate) mod interpolate;

/// Interpolation kernels.
pub mod kernel;

mod lanczos;
mod nearest;

pub use grid::{map_to_source, ScaleFactors};
pub use interpolate::{InterpolationMode, Sampler};
pub use kernel::lanczos3;

pub(crate) use nearest::nearest_source_index;
